//! HTTP server implementation

use skillboard_core::SkillService;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

use crate::{read_request, route, HttpError, HttpResult, Response};

/// HTTP server
pub struct HttpServer {
    addr: SocketAddr,
    listener: Option<TcpListener>,
}

impl HttpServer {
    /// Create a new server for the given bind address
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            listener: None,
        }
    }

    /// Start listening
    pub async fn start(&mut self) -> HttpResult<()> {
        let listener = TcpListener::bind(self.addr).await?;

        info!(addr = %listener.local_addr()?, "HTTP server listening");

        self.listener = Some(listener);
        Ok(())
    }

    /// The bound address (useful when binding to port 0)
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// Accept connections in a loop
    pub async fn run(&self, service: Arc<SkillService>) -> HttpResult<()> {
        let listener = self
            .listener
            .as_ref()
            .ok_or_else(|| HttpError::ServerError("Server not started".into()))?;

        loop {
            match listener.accept().await {
                Ok((stream, peer)) => {
                    debug!(peer = %peer, "Client connected");

                    let service = service.clone();
                    tokio::spawn(async move {
                        handle_connection(stream, peer, service).await;
                    });
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }
}

/// Serve requests off one connection until the client is done.
async fn handle_connection(stream: TcpStream, peer: SocketAddr, service: Arc<SkillService>) {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    loop {
        let request = match read_request(&mut reader).await {
            Ok(Some(request)) => request,
            Ok(None) => {
                debug!(peer = %peer, "Client disconnected (EOF)");
                break;
            }
            Err(HttpError::Io(e)) => {
                debug!(peer = %peer, error = %e, "Read error");
                break;
            }
            Err(e) => {
                warn!(peer = %peer, error = %e, "Invalid request");
                let response = Response::error(400, "Bad request");
                let _ = write_half.write_all(&response.to_bytes(false)).await;
                break;
            }
        };

        debug!(peer = %peer, method = ?request.method, path = %request.path, "Request");

        let keep_alive = request.keep_alive;
        let response = route(&service, &request);

        if let Err(e) = write_half.write_all(&response.to_bytes(keep_alive)).await {
            debug!(peer = %peer, error = %e, "Write error");
            break;
        }

        if !keep_alive {
            break;
        }
    }
}
