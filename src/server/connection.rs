// Connection module
// One spawned task per accepted TCP connection.

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::config::Config;
use crate::handler;
use crate::logger;

/// Serve one connection on its own task.
///
/// HTTP/1.1 with hyper's defaults: keep-alive on, no read or write
/// timeouts. The task ends when the peer closes the connection or the
/// protocol errors out; either way only that connection is affected.
pub fn spawn_serve(stream: TcpStream, peer_addr: SocketAddr, config: Arc<Config>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let service = service_fn(move |req| {
            let config = Arc::clone(&config);
            async move { handler::handle_request(req, config).await }
        });

        if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
            logger::log_connection_error(&peer_addr, &err);
        }
    });
}
