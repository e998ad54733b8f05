//! Stateless edge responder backing the portfolio's connection-status widget.
//!
//! [`respond`] is the whole protocol as a pure function; [`router`] mounts it
//! behind axum so the same logic serves local development and tests.

pub mod config;
pub mod responder;
pub mod server;

pub use config::{EdgeConfig, DEFAULT_ADDR, DEFAULT_MESSAGE};
pub use responder::{respond, Cors, EdgeResponse};
pub use server::{router, serve};

#[derive(Debug, thiserror::Error)]
pub enum EdgeError {
    #[error("invalid bind address {addr:?}: {source}")]
    InvalidAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
