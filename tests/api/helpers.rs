use once_cell::sync::Lazy;
use orders_contract::{
    client::OrdersClient,
    telemetry::{get_subscriber, init_subscriber},
};
use serde_json::Value;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

static TRACING: Lazy<()> = Lazy::new(|| {
    let name = "test";
    let default_env_filter = "info";
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::sink);
        init_subscriber(subscriber);
    }
});

const CLIENT_TIMEOUT: Duration = Duration::from_millis(200);

/// A stand-in Orders API plus a client pointed at it.
pub struct TestOrdersApi {
    pub server: MockServer,
    pub client: OrdersClient,
}

impl TestOrdersApi {
    pub async fn spawn() -> Self {
        Lazy::force(&TRACING);

        let server = MockServer::start().await;
        let client = OrdersClient::new(server.uri(), CLIENT_TIMEOUT);

        Self { server, client }
    }

    /// Serves `body` with `status` from `GET /orders`, `expected` times.
    pub async fn serve_orders(&self, status: u16, body: Value, expected: u64) {
        Mock::given(path("/orders"))
            .and(method("GET"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(expected)
            .mount(&self.server)
            .await;
    }
}

/// A client aimed at a port nothing listens on, for connection-refusal
/// paths. The ephemeral port is bound and released first so the request
/// is refused rather than left hanging.
pub fn client_without_server() -> OrdersClient {
    Lazy::force(&TRACING);

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind address");
    let addr = listener.local_addr().expect("Failed to get local address");
    drop(listener);

    OrdersClient::new(format!("http://{addr}"), CLIENT_TIMEOUT)
}
