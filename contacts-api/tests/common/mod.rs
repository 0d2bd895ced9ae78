/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test database setup and cleanup
/// - Router construction
/// - Request/response helpers
///
/// Tests require a running PostgreSQL reachable through `DATABASE_URL`.

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use contacts_api::app::{build_router, AppState};
use contacts_api::config::Config;
use contacts_data::models::contact::Contact;
use serde_json::json;
use sqlx::PgPool;
use std::time::{SystemTime, UNIX_EPOCH};
use tower::Service as _;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
    /// Unique marker embedded in every email this context creates, so
    /// parallel tests never collide and cleanup only touches its own rows
    pub marker: String,
}

impl TestContext {
    /// Creates a new test context with a migrated database and fresh router
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        let db = PgPool::connect(&config.database.url).await?;

        // Run migrations (path relative to Cargo.toml, not this file)
        sqlx::migrate!("../migrations").run(&db).await?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        let marker = SystemTime::now()
            .duration_since(UNIX_EPOCH)?
            .as_nanos()
            .to_string();

        Ok(TestContext { db, app, marker })
    }

    /// Returns an email unique to this context
    pub fn unique_email(&self, label: &str) -> String {
        format!("{}-{}@test.dev", label, self.marker)
    }

    /// Sends a request through the router
    pub async fn call(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().call(request).await.unwrap()
    }

    /// Creates a contact via POST /contact and returns its assigned id
    pub async fn create_contact(&self, first_name: &str, email: &str) -> anyhow::Result<i64> {
        let response = self
            .call(post_json(
                "/contact",
                json!({
                    "firstName": first_name,
                    "lastName": "Lee",
                    "email": email,
                    "status": true
                }),
            ))
            .await;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = read_text(response).await;
            anyhow::bail!("create failed with {}: {}", status, body);
        }

        let contacts: Vec<Contact> = read_json(response).await;
        let created = contacts
            .into_iter()
            .find(|c| c.email == email)
            .ok_or_else(|| anyhow::anyhow!("created contact missing from list"))?;

        Ok(created.id)
    }

    /// Cleans up every row this context created
    pub async fn cleanup(&self) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM contacts WHERE email LIKE $1")
            .bind(format!("%{}%", self.marker))
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

/// Builds a JSON request with the given method
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a POST request with a JSON body
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    json_request("POST", uri, body)
}

/// Builds a bodyless request
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Reads a response body as JSON
pub async fn read_json<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Reads a response body as text
pub async fn read_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8_lossy(&body).to_string()
}
