use brand_insight_service::config::{AppConfig, CommonConfig, GeminiConfig};
use brand_insight_service::services::providers::TextProvider;
use brand_insight_service::startup::Application;
use std::sync::Arc;
use std::time::Duration;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the service on a random port with the given credential state
    /// and provider. The api_base is a dead address: nothing in these tests
    /// may reach the network except through the injected provider.
    pub async fn spawn(api_key: Option<&str>, provider: Arc<dyn TextProvider>) -> Self {
        let config = AppConfig {
            common: CommonConfig { port: 0 },
            gemini: GeminiConfig {
                api_key: api_key.map(str::to_owned),
                model: "gemini-2.5-flash".to_string(),
                api_base: "http://127.0.0.1:1".to_string(),
            },
        };

        let app = Application::build_with_provider(config, provider)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint.
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp { address }
    }

    pub fn analyze_url(&self) -> String {
        format!("{}/api/analyze", self.address)
    }
}
