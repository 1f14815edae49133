// Listener module
// Binds the TCP listener for the configured address

use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Bind a TCP listener on the given address.
///
/// Binding is strict: if another process already holds the port, the
/// error surfaces to the caller so the operator sees the failure and the
/// process exits instead of silently sharing the socket.
pub async fn bind(addr: SocketAddr) -> std::io::Result<TcpListener> {
    TcpListener::bind(addr).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_second_bind_on_same_port_fails() {
        let first = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = first.local_addr().unwrap();
        assert!(bind(addr).await.is_err());
    }
}
