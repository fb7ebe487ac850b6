use pdns_backend_application::use_cases::HandleBackendQueryUseCase;
use pdns_backend_infrastructure::remote::{BackendConnectionHandler, UnixSocketServer};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Serves the remote backend socket until `shutdown` is cancelled.
pub async fn start_socket_server(
    socket_path: &str,
    engine: Arc<HandleBackendQueryUseCase>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!(socket = %socket_path, "Starting remote backend socket server");

    let handler = Arc::new(BackendConnectionHandler::new(engine));
    let server = Arc::new(UnixSocketServer::new(socket_path, handler).with_cancellation(shutdown));
    server.start().await?;

    Ok(())
}
