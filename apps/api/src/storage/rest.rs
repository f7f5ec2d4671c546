use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error};
use uuid::Uuid;

use crate::models::record::CvRecord;
use crate::models::user::UserProfile;
use crate::storage::{CvStore, StorageError};

const CVS_TABLE: &str = "cvs";
const PROFILES_TABLE: &str = "profiles";

/// PostgREST client for the hosted `cvs` and `profiles` tables.
///
/// Every request carries the project key both as `apikey` and as a bearer
/// token. Calls are single-shot: a failure is reported to the caller, never
/// retried here.
#[derive(Clone)]
pub struct RestCvStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestCvStore {
    pub fn new(base_url: &str, api_key: String) -> Result<Self, StorageError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    async fn rows<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<Vec<T>, StorageError> {
        let response = check_status(self.authed(builder).send().await?).await?;
        Ok(response.json().await?)
    }
}

async fn check_status(response: Response) -> Result<Response, StorageError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    error!("Storage API returned {}: {}", status, message);
    Err(StorageError::Api {
        status: status.as_u16(),
        message,
    })
}

fn eq(value: Uuid) -> String {
    format!("eq.{value}")
}

#[async_trait]
impl CvStore for RestCvStore {
    async fn insert_cv(&self, record: &CvRecord) -> Result<CvRecord, StorageError> {
        let request = self
            .client
            .post(self.table_url(CVS_TABLE))
            .header("Prefer", "return=representation")
            .json(record);
        let inserted: Vec<CvRecord> = self.rows(request).await?;
        debug!("Inserted CV for user {}", record.user_id);
        inserted
            .into_iter()
            .next()
            .ok_or(StorageError::EmptyResponse("cv insert"))
    }

    async fn list_cvs(&self, user_id: Uuid) -> Result<Vec<CvRecord>, StorageError> {
        let request = self.client.get(self.table_url(CVS_TABLE)).query(&[
            ("select", "*".to_string()),
            ("user_id", eq(user_id)),
            ("order", "created_at.desc".to_string()),
        ]);
        self.rows(request).await
    }

    async fn get_cv(&self, user_id: Uuid, cv_id: Uuid) -> Result<Option<CvRecord>, StorageError> {
        let request = self.client.get(self.table_url(CVS_TABLE)).query(&[
            ("select", "*".to_string()),
            ("id", eq(cv_id)),
            ("user_id", eq(user_id)),
        ]);
        let rows: Vec<CvRecord> = self.rows(request).await?;
        Ok(rows.into_iter().next())
    }

    async fn delete_cv(&self, user_id: Uuid, cv_id: Uuid) -> Result<bool, StorageError> {
        let request = self
            .client
            .delete(self.table_url(CVS_TABLE))
            .header("Prefer", "return=representation")
            .query(&[("id", eq(cv_id)), ("user_id", eq(user_id))]);
        let deleted: Vec<CvRecord> = self.rows(request).await?;
        Ok(!deleted.is_empty())
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<UserProfile, StorageError> {
        let request = self
            .client
            .get(self.table_url(PROFILES_TABLE))
            .query(&[("select", "*".to_string()), ("id", eq(user_id))]);
        let rows: Vec<UserProfile> = self.rows(request).await?;
        rows.into_iter()
            .next()
            .ok_or(StorageError::ProfileNotFound(user_id))
    }

    async fn update_credits(&self, user_id: Uuid, credits: i64) -> Result<(), StorageError> {
        let request = self
            .authed(self.client.patch(self.table_url(PROFILES_TABLE)))
            .query(&[("id", eq(user_id))])
            .json(&json!({ "credits": credits }));
        check_status(request.send().await?).await?;
        Ok(())
    }
}
