use secrecy::Secret;
use serde_json::Value;
use tokio::net::TcpListener;
use turnkey_adapters::{
    config::{HasherSettings, test},
    cryptography::{Argon2Hasher, JwtEncrypter, JwtSettings},
    persistence::HashMapOwnersRepository,
};
use turnkey_service::OwnerAuthService;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub owners_repository: HashMapOwnersRepository,
}

impl TestApp {
    pub async fn new() -> Self {
        let owners_repository = HashMapOwnersRepository::new();
        let hasher = Argon2Hasher::new(&HasherSettings {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .expect("valid hasher settings");
        let encrypter = JwtEncrypter::new(JwtSettings {
            secret: Secret::new("test-secret".to_owned()),
            time_to_live: 600,
        });

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = OwnerAuthService::new(owners_repository.clone(), hasher, encrypter);

        // Run the server in a separate async task
        let _ = tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            owners_repository,
        }
    }

    pub async fn post_accounts(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/accounts", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_sessions(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/sessions", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}
