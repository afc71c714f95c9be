//! Web form for picking a year and viewing its weekday table.
//!
//! Each request builds a fresh [`Session`], applies the submitted year through
//! [`Session::on_year_change`] and renders the page from the session. The
//! same recompute step backs the JSON endpoint.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod session;
pub mod state;

use std::io;
use std::ops::RangeInclusive;

use tokio::net::TcpListener;
use tracing::{debug, info};

pub use router::create_router;
pub use session::{Notification, NotificationLevel, Session};
pub use state::AppState;

/// Bind the first port of `ports` on `host` that is free.
pub async fn bind_first_free(host: &str, ports: RangeInclusive<u16>) -> io::Result<TcpListener> {
    for port in ports.clone() {
        match TcpListener::bind((host, port)).await {
            Ok(listener) => return Ok(listener),
            Err(err) => debug!(port, %err, "port unavailable"),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::AddrInUse,
        format!(
            "no free ports found between {} and {}",
            ports.start(),
            ports.end()
        ),
    ))
}

/// Serve the web form on `listener` until the process is stopped.
pub async fn serve(listener: TcpListener, state: AppState) -> io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("server listening on http://{}", addr);
    }
    axum::serve(listener, create_router(state)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_first_free_skips_taken_port() {
        let taken = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let err = bind_first_free("127.0.0.1", port..=port).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AddrInUse);
        assert!(err.to_string().contains(&port.to_string()));
    }

    #[tokio::test]
    async fn bind_first_free_returns_listener() {
        let listener = bind_first_free("127.0.0.1", 0..=0).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
