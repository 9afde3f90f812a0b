// Server module
// Accept loop feeding per-connection tasks.

mod connection;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::logger;

/// Accept connections until the process is killed.
///
/// Accept failures are logged and the loop keeps going; a failed accept
/// never takes the server down.
pub async fn run(
    listener: TcpListener,
    config: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                connection::spawn_serve(stream, peer_addr, Arc::clone(&config));
            }
            Err(err) => logger::log_accept_error(&err),
        }
    }
}
