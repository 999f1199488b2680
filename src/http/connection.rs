use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::info;

use crate::http::request::RequestLine;
use crate::http::response;

/// Handles one client connection for its entire lifetime.
///
/// `run` consumes the connection, so the stream is dropped and the socket
/// closed on every exit path.
pub struct Connection {
    stream: TcpStream,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }

    /// Serves at most one request, then returns and closes the stream.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let (read_half, mut write_half) = self.stream.split();
        let mut lines = BufReader::new(read_half).lines();

        // Collect header lines until the blank separator line or EOF.
        let mut headers: Vec<String> = Vec::new();
        while let Some(line) = lines.next_line().await? {
            if line.is_empty() {
                break;
            }
            info!("Received: {}", line);
            headers.push(line);
        }

        if headers.is_empty() {
            info!("no header!");
            return Ok(());
        }

        let Some(req) = RequestLine::parse(&headers[0]) else {
            info!("wrong request: {}", headers[0]);
            return Ok(());
        };
        info!(
            "method={}, path={}, http_version={}",
            req.method, req.path, req.version
        );

        // Response delivery is best-effort; write errors are not reported.
        match req.method.as_str() {
            "GET" => {
                let _ = write_half.write_all(&response::for_path(&req.path)).await;
            }
            method => {
                info!("unsupported method: {}", method);
                let _ = write_half
                    .write_all(b"HTTP/1.0 501 Not Implemented\r\n")
                    .await;
            }
        }

        Ok(())
    }
}
