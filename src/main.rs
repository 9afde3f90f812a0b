// webd - minimal static file server
// Binds one listener on port 3000 and serves the ./web directory until the
// process is killed.

use std::sync::Arc;

use tokio::net::TcpListener;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() {
    let cfg = config::Config::default();

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let result = match runtime_builder.build() {
        Ok(rt) => rt.block_on(async_main(cfg)),
        Err(err) => Err(err.into()),
    };

    if let Err(err) = result {
        logger::log_fatal(&err);
        std::process::exit(1);
    }
}

/// Bind, announce, and serve until killed. A bind failure (port taken,
/// privileged port) is the one fatal error path.
async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| format!("Failed to bind {addr}: {err}"))?;

    logger::log_server_start(&addr, &cfg.site.root);

    server::run(listener, Arc::new(cfg)).await
}
