//! Shared harness for the HTTP integration tests.
//!
//! The router runs against [`MemoryStore`] (or [`FailingStore`]) instead of
//! PostgreSQL, and against a [`RecordingRevalidator`] that remembers every
//! invalidation it was asked for.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;

use sava_api::auth::jwt::{generate_access_token, JwtConfig};
use sava_api::auth::password::hash_password;
use sava_api::config::{RevalidateConfig, ServerConfig};
use sava_api::revalidation::{RevalidateError, Revalidator};
use sava_api::router::build_app_router;
use sava_api::state::AppState;
use sava_core::contact::STATUS_NEW;
use sava_core::types::DbId;
use sava_db::models::contact_submission::{ContactSubmission, CreateContactSubmission};
use sava_db::models::global::GlobalDocument;
use sava_db::models::user::{CreateUser, User};
use sava_db::{GlobalStore, Store, SubmissionFilter, SubmissionStore, UserStore};

pub const TEST_PASSWORD: &str = "correct-horse-battery";
pub const SITE_URL: &str = "https://sava.test";

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        site_url: SITE_URL.to_string(),
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
        },
        revalidate: RevalidateConfig::default(),
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Tables {
    submissions: Vec<ContactSubmission>,
    globals: Vec<GlobalDocument>,
    users: Vec<User>,
    next_id: DbId,
}

impl Tables {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

/// Process-local [`Store`] with the same observable behavior as `PgStore`.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    reject_submissions: AtomicBool,
    submission_attempts: AtomicUsize,
}

impl MemoryStore {
    /// Make every later `create_submission` fail after being counted.
    pub fn reject_submissions(&self) {
        self.reject_submissions.store(true, Ordering::SeqCst);
    }

    /// Number of `create_submission` calls, successful or not.
    pub fn submission_attempts(&self) -> usize {
        self.submission_attempts.load(Ordering::SeqCst)
    }

    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.tables.lock().unwrap().submissions.clone()
    }

    pub fn global(&self, slug: &str) -> Option<GlobalDocument> {
        self.tables
            .lock()
            .unwrap()
            .globals
            .iter()
            .find(|g| g.slug == slug)
            .cloned()
    }

    pub fn set_user_active(&self, id: DbId, active: bool) {
        let mut tables = self.tables.lock().unwrap();
        if let Some(user) = tables.users.iter_mut().find(|u| u.id == id) {
            user.is_active = active;
        }
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn create_submission(
        &self,
        input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error> {
        self.submission_attempts.fetch_add(1, Ordering::SeqCst);
        if self.reject_submissions.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        let mut tables = self.tables.lock().unwrap();
        let now = Utc::now();
        let row = ContactSubmission {
            id: tables.next_id(),
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            service: input.service.clone(),
            message: input.message.clone(),
            status: STATUS_NEW.to_string(),
            created_at: now,
            updated_at: now,
        };
        tables.submissions.push(row.clone());
        Ok(row)
    }

    async fn find_submission(&self, id: DbId) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.submissions.iter().find(|s| s.id == id).cloned())
    }

    async fn list_submissions(
        &self,
        filter: &SubmissionFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<_> = tables
            .submissions
            .iter()
            .filter(|s| filter.status.as_ref().map_or(true, |st| &s.status == st))
            .filter(|s| {
                filter
                    .service
                    .as_ref()
                    .map_or(true, |sv| s.service.as_ref() == Some(sv))
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn update_submission_status(
        &self,
        id: DbId,
        status: &str,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables
            .submissions
            .iter_mut()
            .find(|s| s.id == id)
            .map(|s| {
                s.status = status.to_string();
                s.updated_at = Utc::now();
                s.clone()
            }))
    }

    async fn delete_submission(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.submissions.len();
        tables.submissions.retain(|s| s.id != id);
        Ok(tables.submissions.len() < before)
    }
}

#[async_trait]
impl GlobalStore for MemoryStore {
    async fn find_global(&self, slug: &str) -> Result<Option<GlobalDocument>, sqlx::Error> {
        Ok(self.global(slug))
    }

    async fn upsert_global(
        &self,
        slug: &str,
        data: &serde_json::Value,
        updated_by: Option<DbId>,
    ) -> Result<GlobalDocument, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        let now = Utc::now();
        if let Some(doc) = tables.globals.iter_mut().find(|g| g.slug == slug) {
            doc.data = data.clone();
            doc.updated_by = updated_by;
            doc.updated_at = now;
            return Ok(doc.clone());
        }
        let doc = GlobalDocument {
            slug: slug.to_string(),
            data: data.clone(),
            updated_by,
            created_at: now,
            updated_at: now,
        };
        tables.globals.push(doc.clone());
        Ok(doc)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create_user(&self, input: &CreateUser) -> Result<User, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        let now = Utc::now();
        let user = User {
            id: tables.next_id(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            role: input.role.clone(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn count_users(&self) -> Result<i64, sqlx::Error> {
        Ok(self.tables.lock().unwrap().users.len() as i64)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// Every call fails as if the connection pool were exhausted.
pub struct FailingStore;

fn unavailable<T>() -> Result<T, sqlx::Error> {
    Err(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl SubmissionStore for FailingStore {
    async fn create_submission(
        &self,
        _input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error> {
        unavailable()
    }

    async fn find_submission(&self, _id: DbId) -> Result<Option<ContactSubmission>, sqlx::Error> {
        unavailable()
    }

    async fn list_submissions(
        &self,
        _filter: &SubmissionFilter,
        _limit: i64,
        _offset: i64,
    ) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        unavailable()
    }

    async fn update_submission_status(
        &self,
        _id: DbId,
        _status: &str,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        unavailable()
    }

    async fn delete_submission(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        unavailable()
    }
}

#[async_trait]
impl GlobalStore for FailingStore {
    async fn find_global(&self, _slug: &str) -> Result<Option<GlobalDocument>, sqlx::Error> {
        unavailable()
    }

    async fn upsert_global(
        &self,
        _slug: &str,
        _data: &serde_json::Value,
        _updated_by: Option<DbId>,
    ) -> Result<GlobalDocument, sqlx::Error> {
        unavailable()
    }
}

#[async_trait]
impl UserStore for FailingStore {
    async fn find_user_by_email(&self, _email: &str) -> Result<Option<User>, sqlx::Error> {
        unavailable()
    }

    async fn create_user(&self, _input: &CreateUser) -> Result<User, sqlx::Error> {
        unavailable()
    }

    async fn count_users(&self) -> Result<i64, sqlx::Error> {
        unavailable()
    }
}

#[async_trait]
impl Store for FailingStore {
    async fn health_check(&self) -> Result<(), sqlx::Error> {
        unavailable()
    }
}

// ---------------------------------------------------------------------------
// Recording revalidator
// ---------------------------------------------------------------------------

/// Records `tag:<tag>` / `path:<path>` for every call. Paths listed in
/// `fail_paths` are recorded and then fail.
#[derive(Default)]
pub struct RecordingRevalidator {
    calls: Mutex<Vec<String>>,
    fail_paths: Vec<String>,
}

impl RecordingRevalidator {
    pub fn failing_on(paths: &[&str]) -> Self {
        Self {
            calls: Mutex::default(),
            fail_paths: paths.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Revalidator for RecordingRevalidator {
    async fn revalidate_tag(&self, tag: &str) -> Result<(), RevalidateError> {
        self.calls.lock().unwrap().push(format!("tag:{tag}"));
        Ok(())
    }

    async fn revalidate_path(&self, path: &str) -> Result<(), RevalidateError> {
        self.calls.lock().unwrap().push(format!("path:{path}"));
        if self.fail_paths.iter().any(|p| p == path) {
            return Err(RevalidateError::HttpStatus(500));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Everything a test needs to drive the app and inspect side effects.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub revalidator: Arc<RecordingRevalidator>,
}

impl TestApp {
    /// A fresh router sharing this app's store and revalidator.
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Create an active admin and return a valid access token for them.
    pub async fn admin_token(&self) -> String {
        let user = self
            .store
            .create_user(&CreateUser {
                email: format!("admin{}@sava.test", self.store.count_users().await.unwrap()),
                password_hash: hash_password(TEST_PASSWORD).unwrap(),
                role: "admin".to_string(),
            })
            .await
            .unwrap();
        generate_access_token(user.id, &user.role, &test_config().jwt).unwrap()
    }
}

pub fn test_state(store: Arc<dyn Store>, revalidator: Arc<dyn Revalidator>) -> AppState {
    AppState {
        store,
        config: Arc::new(test_config()),
        revalidator,
    }
}

pub fn build_app_with(store: Arc<dyn Store>, revalidator: Arc<dyn Revalidator>) -> Router {
    build_app_router(test_state(store, revalidator), &test_config())
}

pub fn build_test_app() -> TestApp {
    build_test_app_with_revalidator(RecordingRevalidator::default())
}

pub fn build_test_app_with_revalidator(revalidator: RecordingRevalidator) -> TestApp {
    let store = Arc::new(MemoryStore::default());
    let revalidator = Arc::new(revalidator);
    let router = build_app_with(store.clone(), revalidator.clone());
    TestApp {
        router,
        store,
        revalidator,
    }
}

/// Router whose store fails every call.
pub fn build_failing_app() -> Router {
    build_app_with(Arc::new(FailingStore), Arc::new(RecordingRevalidator::default()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body, None)).await
}

/// POST a raw body with a JSON content type.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body, None)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body, Some(token))).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, json_request(Method::PATCH, uri, body, Some(token))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
