/// Port the server binds when no explicit address is given.
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
}

impl Config {
    /// Builds a config for an explicit listen address.
    ///
    /// Test suites pass `127.0.0.1:0` here to bind an ephemeral port.
    pub fn new(listen_addr: impl Into<String>) -> Self {
        Self {
            listen_addr: listen_addr.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: format!("0.0.0.0:{DEFAULT_PORT}"),
        }
    }
}
