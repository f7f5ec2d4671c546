//! Persistence seam for saved CVs and user credit balances.
//!
//! `AppState` carries an `Arc<dyn CvStore>`: `RestCvStore` talks to the
//! hosted PostgREST backend, `InMemoryCvStore` backs local runs and tests.

pub mod memory;
pub mod rest;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::record::CvRecord;
use crate::models::user::UserProfile;

pub use memory::InMemoryCvStore;
pub use rest::RestCvStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Storage API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Profile {0} not found")]
    ProfileNotFound(Uuid),

    #[error("Storage returned no row for {0}")]
    EmptyResponse(&'static str),
}

#[async_trait]
pub trait CvStore: Send + Sync {
    /// Inserts a record and returns it with `id` and `created_at` filled in.
    async fn insert_cv(&self, record: &CvRecord) -> Result<CvRecord, StorageError>;

    /// All CVs of a user, newest first.
    async fn list_cvs(&self, user_id: Uuid) -> Result<Vec<CvRecord>, StorageError>;

    async fn get_cv(&self, user_id: Uuid, cv_id: Uuid) -> Result<Option<CvRecord>, StorageError>;

    /// Returns false when no CV with that id belongs to the user.
    async fn delete_cv(&self, user_id: Uuid, cv_id: Uuid) -> Result<bool, StorageError>;

    async fn get_profile(&self, user_id: Uuid) -> Result<UserProfile, StorageError>;

    async fn update_credits(&self, user_id: Uuid, credits: i64) -> Result<(), StorageError>;
}
