//! Plain HTTP liveness endpoint for external uptime monitors.

use std::net::SocketAddr;

use axum::{routing::get, Router};
use tokio::{net::TcpListener, task::JoinHandle};

pub const ALIVE_BODY: &str = "Bot is alive!";

pub fn router() -> Router {
    Router::new().route("/", get(alive))
}

async fn alive() -> &'static str {
    ALIVE_BODY
}

/// Bind `addr` and serve the liveness router in the background.
///
/// Binding happens before returning so a taken port fails startup instead of
/// failing silently later. Returns the bound address (useful with port 0).
pub async fn spawn(addr: SocketAddr) -> anyhow::Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router()).await {
            tracing::error!(error = %e, "liveness server stopped");
        }
    });

    tracing::info!(addr = %local, "liveness endpoint listening");
    Ok((local, handle))
}

/// Like [`spawn`], but a failure only gets logged. The relay does not depend on
/// the endpoint, so it keeps running without it.
pub async fn spawn_or_log(addr: SocketAddr) -> Option<(SocketAddr, JoinHandle<()>)> {
    match spawn(addr).await {
        Ok(bound) => Some(bound),
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "liveness endpoint unavailable, continuing without it");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpStream,
    };

    use super::*;

    async fn get_raw(addr: SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let req = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(req.as_bytes()).await.unwrap();
        let mut buf = String::new();
        stream.read_to_string(&mut buf).await.unwrap();
        buf
    }

    #[tokio::test]
    async fn root_reports_alive() {
        let (addr, handle) = spawn("127.0.0.1:0".parse().unwrap()).await.unwrap();

        let resp = get_raw(addr, "/").await;
        assert!(resp.starts_with("HTTP/1.1 200"), "{resp}");
        assert!(resp.ends_with(ALIVE_BODY), "{resp}");

        handle.abort();
    }

    #[tokio::test]
    async fn taken_port_is_logged_not_fatal() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();

        assert!(spawn(addr).await.is_err());
        assert!(spawn_or_log(addr).await.is_none());

        // The caller carries on; another address still works.
        let (other, handle) = spawn_or_log("127.0.0.1:0".parse().unwrap())
            .await
            .unwrap();
        assert_ne!(other, addr);
        handle.abort();
    }

    #[tokio::test]
    async fn other_paths_are_not_found() {
        let (addr, handle) = spawn("127.0.0.1:0".parse().unwrap()).await.unwrap();

        let resp = get_raw(addr, "/status").await;
        assert!(resp.starts_with("HTTP/1.1 404"), "{resp}");

        handle.abort();
    }
}
