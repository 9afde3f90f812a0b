// Logging module
// Timestamped line logging for server lifecycle and request-handling errors.
// There is deliberately no per-request access log.

use chrono::Local;
use std::fmt::{Debug, Display};
use std::net::SocketAddr;

fn timestamp() -> String {
    Local::now().format("%Y/%m/%d %H:%M:%S").to_string()
}

fn write_info(message: &str) {
    println!("{} {message}", timestamp());
}

fn write_error(message: &str) {
    eprintln!("{} {message}", timestamp());
}

/// The single startup line, written once the listener is bound.
pub fn log_server_start(addr: &SocketAddr, root: &str) {
    write_info(&format!("Start listening on http://{addr}, serving ./{root}"));
}

/// Fatal startup error, written just before the process exits.
pub fn log_fatal(err: &impl Display) {
    write_error(&format!("[FATAL] {err}"));
}

pub fn log_accept_error(err: &std::io::Error) {
    write_error(&format!("[ERROR] Failed to accept connection: {err}"));
}

pub fn log_connection_error(peer: &SocketAddr, err: &impl Debug) {
    write_error(&format!("[ERROR] Failed to serve connection from {peer}: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
