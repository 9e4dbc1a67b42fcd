//! Transport/service lifecycle: the stdio read loop and graceful shutdown.

use std::future::Future;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::protocol::{JsonRpcRequest, JsonRpcResponse, PARSE_ERROR};
use crate::server::NotifyServer;
use crate::McpError;

/// Lifecycle stages of the stdio service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Created,
    Running,
    Stopping,
    Stopped,
}

/// Runs a [`NotifyServer`] over a newline-delimited JSON-RPC transport.
///
/// Requests are served one at a time in arrival order; an in-flight dialog
/// call completes before the next read.
pub struct StdioService {
    server: NotifyServer,
    state: ServiceState,
}

impl StdioService {
    pub fn new(server: NotifyServer) -> Self {
        Self {
            server,
            state: ServiceState::Created,
        }
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    /// Run the service over stdin/stdout until SIGINT/SIGTERM or EOF.
    pub async fn run(&mut self) -> Result<(), McpError> {
        let stdin = tokio::io::stdin();
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout, shutdown_signal()).await
    }

    /// Drive the request loop over an arbitrary transport.
    ///
    /// Ends when `shutdown` resolves or the reader hits EOF; either way the
    /// writer is flushed and the service lands in `Stopped`.
    pub async fn serve<R, W, F>(
        &mut self,
        reader: R,
        writer: W,
        shutdown: F,
    ) -> Result<(), McpError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
        F: Future<Output = ()>,
    {
        self.state = ServiceState::Running;
        log::info!("MCP server ready, listening for requests...");

        let mut lines = BufReader::new(reader).lines();
        let mut writer = writer;
        tokio::pin!(shutdown);

        while self.state == ServiceState::Running {
            tokio::select! {
                _ = &mut shutdown => {
                    log::info!("Shutdown requested, stopping transport");
                    self.state = ServiceState::Stopping;
                }
                line = lines.next_line() => match line? {
                    Some(line) => self.handle_line(&line, &mut writer).await?,
                    None => {
                        log::info!("Transport closed by peer");
                        self.state = ServiceState::Stopping;
                    }
                },
            }
        }

        writer.flush().await?;
        self.state = ServiceState::Stopped;
        log::info!("MCP server stopped");
        Ok(())
    }

    async fn handle_line<W>(&self, line: &str, writer: &mut W) -> Result<(), McpError>
    where
        W: AsyncWrite + Unpin,
    {
        if line.is_empty() {
            return Ok(());
        }
        log::debug!("Received: {}", line);

        let response = match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.server.handle_request(request).await,
            Err(e) => {
                log::error!("Failed to parse request: {}", e);
                Some(JsonRpcResponse::error(None, PARSE_ERROR, "Parse error"))
            }
        };

        if let Some(response) = response {
            let response_json = serde_json::to_string(&response)?;
            log::debug!("Sending: {}", response_json);
            writer.write_all(response_json.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
        Ok(())
    }
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    ctrl_c.await.expect("failed to install Ctrl+C handler");

    log::info!("Shutdown signal received");
}
