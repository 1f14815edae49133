// Server loop module
// Accepts connections until the process exits

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop forever.
///
/// Accept errors are logged and the loop continues; each accepted
/// connection is served in its own spawned task. The handlers only read
/// immutable state, so concurrent connections never interfere.
pub async fn run(listener: TcpListener, state: Arc<AppState>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                handle_connection(stream, peer_addr, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
