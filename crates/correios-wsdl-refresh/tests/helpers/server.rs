//! Local HTTP server standing in for the Correios endpoints.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Router,
    http::{StatusCode, header},
    routing::get,
};

/// Body served by every successful route.
pub const WSDL_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<definitions name="Rastro" xmlns="http://schemas.xmlsoap.org/wsdl/"/>
"#;

/// `<a>Serviço</a>` encoded as ISO-8859-1.
pub const LATIN1_BODY: &[u8] = b"<a>Servi\xE7o</a>";

/// An axum server bound to an ephemeral port on localhost.
///
/// Routes:
/// - `/ok/{name}` answers 200 with [`WSDL_BODY`]
/// - `/alpha` answers 200 with `alpha`
/// - `/missing` answers 404
/// - `/broken` answers 500
/// - `/latin1` answers 200 with [`LATIN1_BODY`] declared as ISO-8859-1
/// - `/slow` answers 200 after two seconds
pub struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    /// Starts the server on the current runtime.
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/ok/{name}", get(|| async { WSDL_BODY }))
            .route("/alpha", get(|| async { "alpha" }))
            .route(
                "/latin1",
                get(|| async {
                    (
                        [(header::CONTENT_TYPE, "text/xml; charset=ISO-8859-1")],
                        LATIN1_BODY,
                    )
                }),
            )
            .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
            .route(
                "/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    "late"
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self { addr }
    }

    /// Returns an absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Returns a URL on a port nothing listens on.
pub async fn closed_port_url(path: &str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);

    format!("http://{}{}", addr, path)
}
