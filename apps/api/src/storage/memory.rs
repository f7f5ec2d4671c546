use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::record::CvRecord;
use crate::models::user::UserProfile;
use crate::storage::{CvStore, StorageError};

/// Process-local store used when no storage backend is configured.
/// Unknown users are given a profile with `signup_credits` on first touch.
pub struct InMemoryCvStore {
    signup_credits: i64,
    cvs: RwLock<Vec<CvRecord>>,
    profiles: RwLock<HashMap<Uuid, UserProfile>>,
}

impl InMemoryCvStore {
    pub fn new(signup_credits: i64) -> Self {
        Self {
            signup_credits,
            cvs: RwLock::new(Vec::new()),
            profiles: RwLock::new(HashMap::new()),
        }
    }

    fn fresh_profile(&self, user_id: Uuid) -> UserProfile {
        UserProfile {
            id: user_id,
            email: String::new(),
            full_name: None,
            credits: self.signup_credits,
        }
    }
}

#[async_trait]
impl CvStore for InMemoryCvStore {
    async fn insert_cv(&self, record: &CvRecord) -> Result<CvRecord, StorageError> {
        let mut stored = record.clone();
        stored.id = Some(Uuid::new_v4());
        stored.created_at = Some(Utc::now());
        self.cvs.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_cvs(&self, user_id: Uuid) -> Result<Vec<CvRecord>, StorageError> {
        let cvs = self.cvs.read().await;
        // Insertion order breaks ties between identical timestamps.
        let mut mine: Vec<CvRecord> = cvs
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(mine)
    }

    async fn get_cv(&self, user_id: Uuid, cv_id: Uuid) -> Result<Option<CvRecord>, StorageError> {
        let cvs = self.cvs.read().await;
        Ok(cvs
            .iter()
            .find(|r| r.user_id == user_id && r.id == Some(cv_id))
            .cloned())
    }

    async fn delete_cv(&self, user_id: Uuid, cv_id: Uuid) -> Result<bool, StorageError> {
        let mut cvs = self.cvs.write().await;
        let before = cvs.len();
        cvs.retain(|r| !(r.user_id == user_id && r.id == Some(cv_id)));
        Ok(cvs.len() != before)
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<UserProfile, StorageError> {
        let mut profiles = self.profiles.write().await;
        Ok(profiles
            .entry(user_id)
            .or_insert_with(|| self.fresh_profile(user_id))
            .clone())
    }

    async fn update_credits(&self, user_id: Uuid, credits: i64) -> Result<(), StorageError> {
        let mut profiles = self.profiles.write().await;
        profiles
            .entry(user_id)
            .or_insert_with(|| self.fresh_profile(user_id))
            .credits = credits;
        Ok(())
    }
}

/// In-memory store whose `insert_cv` always fails with a 503 from the backend.
#[cfg(test)]
pub(crate) struct FailingInsertStore {
    pub inner: InMemoryCvStore,
}

#[cfg(test)]
#[async_trait]
impl CvStore for FailingInsertStore {
    async fn insert_cv(&self, _record: &CvRecord) -> Result<CvRecord, StorageError> {
        Err(StorageError::Api {
            status: 503,
            message: "service unavailable".to_string(),
        })
    }

    async fn list_cvs(&self, user_id: Uuid) -> Result<Vec<CvRecord>, StorageError> {
        self.inner.list_cvs(user_id).await
    }

    async fn get_cv(&self, user_id: Uuid, cv_id: Uuid) -> Result<Option<CvRecord>, StorageError> {
        self.inner.get_cv(user_id, cv_id).await
    }

    async fn delete_cv(&self, user_id: Uuid, cv_id: Uuid) -> Result<bool, StorageError> {
        self.inner.delete_cv(user_id, cv_id).await
    }

    async fn get_profile(&self, user_id: Uuid) -> Result<UserProfile, StorageError> {
        self.inner.get_profile(user_id).await
    }

    async fn update_credits(&self, user_id: Uuid, credits: i64) -> Result<(), StorageError> {
        self.inner.update_credits(user_id, credits).await
    }
}
