use contact_relay::{
    configuration::{get_configuration, Settings},
    contact_client::ContactApiClient,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use secrecy::Secret;
use wiremock::MockServer;

pub const TEST_BOT_TOKEN: &str = "123456:integration-test-token";
pub const TEST_CHAT_ID: &str = "-1001234567890";
pub const TEST_ALLOWED_ORIGIN: &str = "http://localhost:3000";

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub telegram_server: MockServer,
    pub api_client: reqwest::Client,
}

/// Settings pointing the relay at a local mock of the Telegram Bot API.
pub fn test_configuration(telegram_server: &MockServer) -> Settings {
    let mut c = get_configuration().expect("Failed to read configuration");
    // Use a random OS port
    c.application.host = "127.0.0.1".into();
    c.application.port = 0;
    c.application.allowed_origins = vec![TEST_ALLOWED_ORIGIN.to_string()];
    c.telegram.base_url = telegram_server.uri();
    c.telegram.bot_token = Secret::new(TEST_BOT_TOKEN.to_string());
    c.telegram.chat_id = TEST_CHAT_ID.to_string();
    c.telegram.timeout_milliseconds = 500;
    c
}

pub async fn spawn_app() -> TestApp {
    // Set up subscriber for logging, only first time per run. Other times use existing subscriber.
    Lazy::force(&TRACING);

    let telegram_server = MockServer::start().await;
    let configuration = test_configuration(&telegram_server);

    // Start the server
    let app = Application::build(configuration)
        .await
        .expect("Failed to build application");
    let port = app.port();
    let address = format!("http://127.0.0.1:{}", port);
    tokio::spawn(app.run_until_stopped());

    TestApp {
        address,
        port,
        telegram_server,
        api_client: reqwest::Client::new(),
    }
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_raw(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub fn contact_client(&self) -> ContactApiClient {
        ContactApiClient::new(self.address.clone(), std::time::Duration::from_secs(5))
            .expect("Failed to build the contact client")
    }

    /// The JSON bodies Telegram received so far.
    pub async fn telegram_requests(&self) -> Vec<serde_json::Value> {
        self.telegram_server
            .received_requests()
            .await
            .expect("Request recording is disabled")
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }
}
