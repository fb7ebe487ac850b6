use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::unix::OwnedWriteHalf;
use tokio::net::{UnixListener, UnixStream};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::clients::ClientTable;
use super::errors::ServerError;
use super::framing::{Frame, RequestFramer};
use super::handler::ConnectionHandler;

const READ_BUFFER_SIZE: usize = 8192;

/// Accepts remote backend connections on a UNIX domain socket.
///
/// Each connection is served by its own task; requests on one connection
/// are answered in the order they arrive. Shutdown is requested through a
/// cancellation token (or [`UnixSocketServer::shutdown`]) and performed at
/// most once.
pub struct UnixSocketServer {
    socket_path: PathBuf,
    handler: Arc<dyn ConnectionHandler>,
    clients: Arc<ClientTable>,
    connections: DashMap<String, JoinHandle<()>>,
    shutdown_signal: CancellationToken,
    stop: CancellationToken,
    shut_down: AtomicBool,
}

impl UnixSocketServer {
    pub fn new(socket_path: impl Into<PathBuf>, handler: Arc<dyn ConnectionHandler>) -> Self {
        Self {
            socket_path: socket_path.into(),
            handler,
            clients: Arc::new(ClientTable::new()),
            connections: DashMap::new(),
            shutdown_signal: CancellationToken::new(),
            stop: CancellationToken::new(),
            shut_down: AtomicBool::new(false),
        }
    }

    /// Shares an externally owned token; cancelling it shuts the server down.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown_signal = token;
        self
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    pub fn clients(&self) -> &ClientTable {
        &self.clients
    }

    /// Removes a stale socket left by a previous run, then binds.
    pub fn bind(&self) -> Result<UnixListener, ServerError> {
        let path = self.socket_path.display().to_string();

        if self.socket_path.exists() {
            std::fs::remove_file(&self.socket_path).map_err(|source| ServerError::StaleSocket {
                path: path.clone(),
                source,
            })?;
            warn!(socket = %path, "Removed stale socket");
        }

        if let Some(parent) = self.socket_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| ServerError::Bind {
                    path: path.clone(),
                    source,
                })?;
            }
        }

        let listener = UnixListener::bind(&self.socket_path)
            .map_err(|source| ServerError::Bind { path, source })?;
        info!(socket = %self.socket_path.display(), "Remote backend socket listening");
        Ok(listener)
    }

    /// Binds and serves until shutdown.
    pub async fn start(self: Arc<Self>) -> Result<(), ServerError> {
        let listener = self.bind()?;
        self.run(listener).await;
        Ok(())
    }

    /// Accept loop. Returns once shutdown has run and the listener is closed.
    pub async fn run(self: Arc<Self>, listener: UnixListener) {
        loop {
            tokio::select! {
                _ = self.shutdown_signal.cancelled() => {
                    self.shutdown().await;
                    break;
                }
                _ = self.stop.cancelled() => break,
                accepted = listener.accept() => match accepted {
                    Ok((stream, _)) => self.accept(stream).await,
                    Err(e) => error!(error = %e, "Failed to accept connection"),
                },
            }
        }

        drop(listener);
        if let Err(e) = std::fs::remove_file(&self.socket_path) {
            debug!(error = %e, "Socket file already gone");
        }
        info!(socket = %self.socket_path.display(), "Remote backend socket closed");
    }

    /// Force-disconnects every live client, waits for each stream to be
    /// closed, then stops the accept loop. Returns `false` when shutdown had
    /// already been performed.
    pub async fn shutdown(&self) -> bool {
        if self.shut_down.swap(true, Ordering::SeqCst) {
            return false;
        }

        let sessions = self.clients.drain();
        info!(clients = sessions.len(), "Shutting down remote backend server");
        let mut closing = Vec::with_capacity(sessions.len());
        for session in sessions {
            self.handler.on_force_disconnect(&session.id).await;
            session.close();
            if let Some((_, task)) = self.connections.remove(&session.id) {
                closing.push((session.id, task));
            }
        }

        for (client_id, task) in closing {
            if let Err(e) = task.await {
                warn!(client_id = %client_id, error = %e, "Connection task failed");
            }
            info!(client_id = %client_id, "Client force-disconnected");
        }

        self.stop.cancel();
        true
    }

    /// Connection tasks that have not finished yet.
    pub fn open_connections(&self) -> usize {
        self.connections.iter().filter(|task| !task.is_finished()).count()
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down.load(Ordering::SeqCst)
    }

    async fn accept(self: &Arc<Self>, stream: UnixStream) {
        let (client_id, close) = self.clients.register(&self.stop);
        info!(client_id = %client_id, clients = self.clients.len(), "Client connected");
        self.handler.on_connect(&client_id).await;

        self.connections.retain(|_, task| !task.is_finished());
        let server = Arc::clone(self);
        let id = client_id.clone();
        let task = tokio::spawn(async move {
            server.serve_connection(stream, id, close).await;
        });
        self.connections.insert(client_id, task);
    }

    async fn serve_connection(&self, stream: UnixStream, client_id: String, close: CancellationToken) {
        let (mut reader, mut writer) = stream.into_split();
        let mut framer = RequestFramer::new();
        let mut buf = vec![0u8; READ_BUFFER_SIZE];

        'connection: loop {
            let read = tokio::select! {
                _ = close.cancelled() => {
                    let _ = writer.shutdown().await;
                    return;
                }
                read = reader.read(&mut buf) => read,
            };

            let n = match read {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => {
                    warn!(client_id = %client_id, error = %e, "Read failed");
                    break;
                }
            };

            framer.extend(&buf[..n]);
            while let Some(frame) = framer.next_frame() {
                let reply = match frame {
                    Frame::Quit => {
                        debug!(client_id = %client_id, "Client requested disconnect");
                        let _ = writer.shutdown().await;
                        break 'connection;
                    }
                    Frame::ClientList => self.clients.snapshot_line(),
                    Frame::Request(payload) => self.handler.on_request(&client_id, &payload).await,
                };

                if let Err(e) = write_reply(&mut writer, &reply).await {
                    warn!(client_id = %client_id, error = %e, "Write failed");
                    break 'connection;
                }
            }
        }

        if self.clients.remove(&client_id).is_some() {
            self.handler.on_disconnect(&client_id).await;
            info!(client_id = %client_id, clients = self.clients.len(), "Client disconnected");
        }
    }
}

async fn write_reply(writer: &mut OwnedWriteHalf, reply: &[u8]) -> std::io::Result<()> {
    writer.write_all(reply).await?;
    writer.flush().await
}
