#![allow(clippy::unwrap_used, clippy::missing_panics_doc, dead_code)]

use chirp_server::api::{self, AppState, MgmtState};
use chirp_server::config::HealthConfig;
use chirp_server::services::account_service::AccountService;
use chirp_server::services::health_service::HealthService;
use chirp_server::services::message_service::MessageService;
use chirp_server::storage;
use chirp_server::storage::account_repo::AccountRepository;
use chirp_server::storage::message_repo::MessageRepository;
use serde_json::json;
use std::sync::Once;
use uuid::Uuid;

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("chirp_server=debug".parse().unwrap())
            .add_directive("sqlx=warn".parse().unwrap())
            .add_directive("tower=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

pub struct TestApp {
    pub server_url: String,
    pub mgmt_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawns the full application against a throwaway database on
    /// ephemeral ports.
    pub async fn spawn() -> Self {
        setup_tracing();

        let db_path = std::env::temp_dir().join(format!("chirp_test_{}.db", Uuid::new_v4()));
        let database_url = format!("sqlite://{}", db_path.display());

        let pool = storage::init_pool(&database_url, 5).await.expect("Failed to open test database");
        storage::init_schema(&pool).await.expect("Failed to create schema");

        let account_repo = AccountRepository::new(pool.clone());
        let message_repo = MessageRepository::new(pool.clone());

        let state = AppState {
            account_service: AccountService::new(account_repo.clone()),
            message_service: MessageService::new(message_repo, account_repo),
        };
        let mgmt_state =
            MgmtState { health_service: HealthService::new(pool, HealthConfig { db_timeout_ms: 2000 }) };

        let api_listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let api_addr = api_listener.local_addr().unwrap();
        let app_router = api::app_router(state);
        tokio::spawn(async move {
            axum::serve(api_listener, app_router).await.unwrap();
        });

        let mgmt_listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mgmt_addr = mgmt_listener.local_addr().unwrap();
        let mgmt_router = api::mgmt_router(mgmt_state);
        tokio::spawn(async move {
            axum::serve(mgmt_listener, mgmt_router).await.unwrap();
        });

        Self {
            server_url: format!("http://{api_addr}"),
            mgmt_url: format!("http://{mgmt_addr}"),
            client: reqwest::Client::new(),
        }
    }

    pub async fn register(&self, username: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/register", self.server_url))
            .json(&json!({"username": username, "password": password}))
            .send()
            .await
            .unwrap()
    }

    /// Registers an account and returns its generated id.
    pub async fn register_account(&self, username: &str) -> i64 {
        let resp = self.register(username, "password").await;
        assert_eq!(resp.status(), 200, "registration failed for {username}");
        let body: serde_json::Value = resp.json().await.unwrap();
        body["account_id"].as_i64().unwrap()
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/login", self.server_url))
            .json(&json!({"username": username, "password": password}))
            .send()
            .await
            .unwrap()
    }

    pub async fn post_message(&self, posted_by: i64, message_text: &str, time_posted_epoch: i64) -> reqwest::Response {
        self.client
            .post(format!("{}/messages", self.server_url))
            .json(&json!({
                "posted_by": posted_by,
                "message_text": message_text,
                "time_posted_epoch": time_posted_epoch,
            }))
            .send()
            .await
            .unwrap()
    }

    /// Posts a message and returns its generated id.
    pub async fn create_message(&self, posted_by: i64, message_text: &str, time_posted_epoch: i64) -> i64 {
        let resp = self.post_message(posted_by, message_text, time_posted_epoch).await;
        assert_eq!(resp.status(), 200, "message creation failed");
        let body: serde_json::Value = resp.json().await.unwrap();
        body["message_id"].as_i64().unwrap()
    }
}
