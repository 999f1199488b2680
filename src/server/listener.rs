use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

/// Owns the listening socket and the accept loop.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Binds the listening socket and prints the startup banner.
    ///
    /// A bind failure propagates to the caller and takes the process down.
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(&cfg.listen_addr).await?;
        let addr = listener.local_addr()?;
        info!("Listening on {}", addr);
        info!("open http://localhost:{}/ with your browser!", addr.port());

        Ok(Self { listener })
    }

    /// The address the socket actually bound, needed when port 0 was requested.
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections forever, spawning one handler task per client.
    ///
    /// The loop never waits on a handler; an accept failure is fatal.
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = self.listener.accept().await?;
            info!("Connection from {} has been established!", peer);

            tokio::spawn(async move {
                let conn = Connection::new(socket);
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}
