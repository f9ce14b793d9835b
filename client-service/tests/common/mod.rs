use client_service::config::{ClientConfig, MongoConfig};
use client_service::services::ClientDb;
use client_service::startup::Application;
use secrecy::Secret;
use serde_json::{json, Value};
use service_core::config::Config as CoreConfig;

pub struct TestApp {
    pub address: String,
    pub db: ClientDb,
    pub db_name: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_name = format!("client_test_{}", uuid::Uuid::new_v4());

        // Use random port for testing (port 0)
        let config = ClientConfig {
            common: CoreConfig { port: 0 },
            mongodb: MongoConfig {
                connection_template: std::env::var("TEST_MONGODB_URI")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
                user: String::new(),
                password: Secret::new(String::new()),
                database: db_name.clone(),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            db,
            db_name,
            client,
        }
    }

    pub async fn create_client(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/clients", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_client(&self, id: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/clients/{}", self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_client(&self, id: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}/clients/{}", self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn list_clients(&self) -> Vec<Value> {
        self.client
            .get(format!("{}/clients", self.address))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse JSON")
    }

    /// Drop the per-test database.
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}

pub fn juan_perez() -> Value {
    json!({
        "first_name": "Juan",
        "last_name": "Perez",
        "email": "juan.perez@acme.com",
        "gender": "Male",
        "address": "Calle principal 1234"
    })
}
