//! tests/api/helpers.rs

use hello_service::configuration::{ApplicationSettings, Settings};
use hello_service::startup::build;
use hello_service::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Set TEST_LOG=true to see logs during tests
    // Use bunyan to format the logs nicely:
    // $ TEST_LOG=true cargo test | bunyan
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct Test {
    pub address: String,
    pub client: reqwest::Client,
}

impl Test {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn setup() -> Test {
    Lazy::force(&TRACING);

    // Port 0 asks the OS for a random free port.
    let config = Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".into(),
            port: 0,
        },
    };

    let app = build(config).expect("Failed to build server.");
    let address = format!("http://127.0.0.1:{}", app.port());

    // Launch the server as a background task
    let _ = tokio::spawn(app.run());

    Test {
        address,
        client: reqwest::Client::new(),
    }
}
