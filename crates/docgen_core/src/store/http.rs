//! HTTP client for the hosted document store.
//!
//! # Responsibility
//! - Perform anonymous sign-in lazily before the first data call.
//! - Issue one plain request per operation against the store's REST
//!   surface (`GET|PUT|PATCH|DELETE /{collection}/{id}`, field-equality
//!   queries on the collection).
//!
//! # Invariants
//! - Every request carries the bearer token from the anonymous session.
//! - Requests run against a fixed deadline; there is no retry.

use crate::config::StoreConfig;
use crate::model::project::{Project, ProjectId};
use crate::model::user::{UserId, UserRecord};
use crate::store::{
    ProjectStore, StoreError, StoreResult, UserStore, PROJECTS_COLLECTION, USERS_COLLECTION,
};
use log::{error, info};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;

/// Fixed per-request deadline; also covers the login/register auth race.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Debug, Deserialize)]
struct AnonymousSession {
    token: String,
}

/// Document-store client backed by the hosted REST endpoint.
#[derive(Debug)]
pub struct HttpStore {
    config: StoreConfig,
    client: Client,
    token: Mutex<Option<String>>,
}

impl HttpStore {
    /// Builds a client for the configured endpoint.
    ///
    /// # Errors
    /// - `StoreError::NotConfigured` when URL or API key are missing.
    pub fn try_new(config: StoreConfig) -> StoreResult<Self> {
        if !config.is_configured() {
            return Err(StoreError::NotConfigured);
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            config,
            client,
            token: Mutex::new(None),
        })
    }

    /// Returns a bearer token, signing in anonymously on first use.
    ///
    /// The token lock is not held across the network call.
    fn ensure_auth(&self) -> StoreResult<String> {
        if let Some(token) = self
            .token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_ref()
        {
            return Ok(token.clone());
        }

        info!("event=store_auth module=store status=start");
        let url = format!("{}/auth/anonymous", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "api_key": self.config.api_key }))
            .send()
            .map_err(|err| {
                let mapped = StoreError::from(err);
                error!("event=store_auth module=store status=error error={mapped}");
                mapped
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::METHOD_NOT_ALLOWED {
            error!("event=store_auth module=store status=error error_code=auth_not_enabled");
            return Err(StoreError::AuthNotEnabled);
        }
        if !status.is_success() {
            let message = body_summary(response);
            error!(
                "event=store_auth module=store status=error http_status={} error={message}",
                status.as_u16()
            );
            return Err(StoreError::AuthFailed(message));
        }

        let session: AnonymousSession = decode_body(response)?;
        info!("event=store_auth module=store status=ok");
        let mut cached = self
            .token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // A concurrent sign-in may have won; keep its token.
        let token = cached.get_or_insert(session.token).clone();
        Ok(token)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{collection}/{id}", self.config.base_url)
    }

    fn get_document<T: DeserializeOwned>(
        &self,
        collection: &'static str,
        id: &str,
    ) -> StoreResult<Option<T>> {
        let token = self.ensure_auth()?;
        let response = self
            .client
            .get(self.document_url(collection, id))
            .bearer_auth(token)
            .send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check_status(response)?;
        Ok(Some(decode_body(response)?))
    }

    /// Create-or-replace, matching the backend's set-document semantics.
    fn put_document<T: Serialize>(
        &self,
        collection: &'static str,
        id: &str,
        document: &T,
    ) -> StoreResult<()> {
        let token = self.ensure_auth()?;
        let response = self
            .client
            .put(self.document_url(collection, id))
            .bearer_auth(token)
            .json(document)
            .send()?;
        check_status(response)?;
        Ok(())
    }

    fn patch_document<T: Serialize>(
        &self,
        collection: &'static str,
        id: &str,
        document: &T,
    ) -> StoreResult<()> {
        let token = self.ensure_auth()?;
        let response = self
            .client
            .patch(self.document_url(collection, id))
            .bearer_auth(token)
            .json(document)
            .send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::MissingDocument {
                collection,
                id: id.to_string(),
            });
        }
        check_status(response)?;
        Ok(())
    }

    /// Deletes one document. Deleting an absent document is a no-op.
    fn delete_document(&self, collection: &'static str, id: &str) -> StoreResult<()> {
        let token = self.ensure_auth()?;
        let response = self
            .client
            .delete(self.document_url(collection, id))
            .bearer_auth(token)
            .send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        check_status(response)?;
        Ok(())
    }

    fn query_documents<T: DeserializeOwned>(
        &self,
        collection: &'static str,
        field: &str,
        value: &str,
    ) -> StoreResult<Vec<T>> {
        let token = self.ensure_auth()?;
        let response = self
            .client
            .get(format!("{}/{collection}", self.config.base_url))
            .query(&[(field, value)])
            .bearer_auth(token)
            .send()?;
        let response = check_status(response)?;
        decode_body(response)
    }
}

impl UserStore for HttpStore {
    fn create_user(&self, record: &UserRecord) -> StoreResult<()> {
        self.put_document(USERS_COLLECTION, &record.id.to_string(), record)
    }

    fn get_user(&self, id: UserId) -> StoreResult<Option<UserRecord>> {
        self.get_document(USERS_COLLECTION, &id.to_string())
    }

    fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>> {
        let mut matches: Vec<UserRecord> =
            self.query_documents(USERS_COLLECTION, "email", email)?;
        Ok(if matches.is_empty() {
            None
        } else {
            Some(matches.swap_remove(0))
        })
    }
}

impl ProjectStore for HttpStore {
    fn create_project(&self, project: &Project) -> StoreResult<()> {
        self.put_document(PROJECTS_COLLECTION, &project.id.to_string(), project)
    }

    fn get_project(&self, id: ProjectId) -> StoreResult<Option<Project>> {
        self.get_document(PROJECTS_COLLECTION, &id.to_string())
    }

    fn list_projects(&self, owner_id: UserId) -> StoreResult<Vec<Project>> {
        self.query_documents(PROJECTS_COLLECTION, "owner_id", &owner_id.to_string())
    }

    fn update_project(&self, project: &Project) -> StoreResult<()> {
        self.patch_document(PROJECTS_COLLECTION, &project.id.to_string(), project)
    }

    fn delete_project(&self, id: ProjectId) -> StoreResult<()> {
        self.delete_document(PROJECTS_COLLECTION, &id.to_string())
    }
}

/// Maps non-success statuses to the store error taxonomy.
fn check_status(response: Response) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StoreError::PermissionDenied,
        StatusCode::REQUEST_TIMEOUT => StoreError::TimedOut,
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
            StoreError::Unavailable
        }
        other => StoreError::Backend {
            status: other.as_u16(),
            message: body_summary(response),
        },
    })
}

fn decode_body<T: DeserializeOwned>(response: Response) -> StoreResult<T> {
    let body = response.text()?;
    serde_json::from_str(&body)
        .map_err(|err| StoreError::InvalidData(format!("{err} in `{}`", summarize(&body))))
}

fn body_summary(response: Response) -> String {
    match response.text() {
        Ok(body) => summarize(&body),
        Err(_) => "<unreadable body>".to_string(),
    }
}

fn summarize(body: &str) -> String {
    const MAX_CHARS: usize = 120;
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_CHARS {
        trimmed.to_string()
    } else {
        let mut summary: String = trimmed.chars().take(MAX_CHARS).collect();
        summary.push_str("...");
        summary
    }
}
