use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::form::validation::check_required;
use crate::models::cv::CvModel;
use crate::models::record::CvRecord;
use crate::render::Labels;
use crate::storage::CvStore;

/// Credits charged for one saved CV.
pub const CV_COST: i64 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct SubmitOutcome {
    pub cv: CvRecord,
    pub credits_remaining: i64,
}

/// Charges one credit and persists the draft.
///
/// The caller's model is never modified. Storage failures are logged and
/// returned as-is; nothing is retried.
pub async fn submit_cv(
    store: &dyn CvStore,
    user_id: Uuid,
    cv: &CvModel,
    labels: &Labels,
) -> Result<SubmitOutcome, AppError> {
    let profile = store.get_profile(user_id).await?;
    if profile.credits < CV_COST {
        return Err(AppError::InsufficientCredits {
            available: profile.credits,
        });
    }

    let report = check_required(cv);
    if !report.passed {
        let missing: Vec<&str> = report.missing.iter().map(|f| f.as_str()).collect();
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let mut prepared = cv.clone();
    if prepared.personal_info.summary.trim().is_empty() {
        prepared.personal_info.summary = labels.generated_summary(&prepared.personal_info.job_title);
    }

    let saved = store
        .insert_cv(&CvRecord::from_model(user_id, &prepared))
        .await
        .map_err(|e| {
            error!("Failed to save CV for user {user_id}: {e}");
            e
        })?;

    let credits_remaining = profile.credits - CV_COST;
    store
        .update_credits(user_id, credits_remaining)
        .await
        .map_err(|e| {
            error!("Saved CV but failed to deduct credit for user {user_id}: {e}");
            e
        })?;

    info!(
        "Saved CV {:?} for user {user_id} ({credits_remaining} credits left)",
        saved.id
    );
    Ok(SubmitOutcome {
        cv: saved,
        credits_remaining,
    })
}

pub async fn list_cvs(store: &dyn CvStore, user_id: Uuid) -> Result<Vec<CvRecord>, AppError> {
    Ok(store.list_cvs(user_id).await?)
}

pub async fn load_cv(store: &dyn CvStore, user_id: Uuid, cv_id: Uuid) -> Result<CvModel, AppError> {
    store
        .get_cv(user_id, cv_id)
        .await?
        .map(CvRecord::into_model)
        .ok_or_else(|| AppError::NotFound(format!("CV {cv_id} not found")))
}

pub async fn delete_cv(store: &dyn CvStore, user_id: Uuid, cv_id: Uuid) -> Result<(), AppError> {
    if !store.delete_cv(user_id, cv_id).await? {
        return Err(AppError::NotFound(format!("CV {cv_id} not found")));
    }
    info!("Deleted CV {cv_id} for user {user_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::FailingInsertStore;
    use crate::storage::{InMemoryCvStore, StorageError};

    fn complete_cv() -> CvModel {
        let mut cv = CvModel::blank();
        cv.personal_info.full_name = "Ada Lovelace".to_string();
        cv.personal_info.job_title = "Analyst".to_string();
        cv.personal_info.email = "ada@example.com".to_string();
        cv
    }

    #[tokio::test]
    async fn test_submit_charges_one_credit() {
        let store = InMemoryCvStore::new(3);
        let user = Uuid::new_v4();
        let outcome = submit_cv(&store, user, &complete_cv(), &Labels::default()).await.unwrap();

        assert_eq!(outcome.credits_remaining, 2);
        assert_eq!(store.get_profile(user).await.unwrap().credits, 2);
        assert_eq!(store.list_cvs(user).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_zero_credits_rejects_and_saves_nothing() {
        let store = InMemoryCvStore::new(0);
        let user = Uuid::new_v4();
        let err = submit_cv(&store, user, &complete_cv(), &Labels::default()).await.unwrap_err();

        assert!(matches!(err, AppError::InsufficientCredits { available: 0 }));
        assert!(store.list_cvs(user).await.unwrap().is_empty(), "nothing may be saved");
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_without_charging() {
        let store = InMemoryCvStore::new(3);
        let user = Uuid::new_v4();
        let mut cv = complete_cv();
        cv.personal_info.email.clear();

        let err = submit_cv(&store, user, &cv, &Labels::default()).await.unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("email"), "message: {msg}"),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(store.get_profile(user).await.unwrap().credits, 3);
    }

    #[tokio::test]
    async fn test_blank_summary_is_generated_in_saved_copy_only() {
        let store = InMemoryCvStore::new(3);
        let cv = complete_cv();
        let outcome = submit_cv(&store, Uuid::new_v4(), &cv, &Labels::default()).await.unwrap();

        assert!(outcome.cv.personal_info.summary.contains("Analyst"));
        assert!(cv.personal_info.summary.is_empty(), "caller model must be untouched");
    }

    #[tokio::test]
    async fn test_generated_summary_uses_label_template() {
        let store = InMemoryCvStore::new(3);
        let labels = Labels {
            generated_summary: "Erfahrener {job_title}.".to_string(),
            ..Labels::default()
        };
        let outcome = submit_cv(&store, Uuid::new_v4(), &complete_cv(), &labels)
            .await
            .unwrap();
        assert_eq!(outcome.cv.personal_info.summary, "Erfahrener Analyst.");
    }

    #[tokio::test]
    async fn test_failed_insert_charges_nothing() {
        let store = FailingInsertStore {
            inner: InMemoryCvStore::new(3),
        };
        let user = Uuid::new_v4();
        let cv = complete_cv();

        let err = submit_cv(&store, user, &cv, &Labels::default()).await.unwrap_err();

        assert!(matches!(err, AppError::Storage(StorageError::Api { status: 503, .. })));
        assert_eq!(store.get_profile(user).await.unwrap().credits, 3);
        assert!(store.list_cvs(user).await.unwrap().is_empty());
        assert!(cv.personal_info.summary.is_empty(), "caller model must be untouched");
    }

    #[tokio::test]
    async fn test_delete_unknown_cv_is_not_found() {
        let store = InMemoryCvStore::new(3);
        let err = delete_cv(&store, Uuid::new_v4(), Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_load_cv_returns_saved_model() {
        let store = InMemoryCvStore::new(3);
        let user = Uuid::new_v4();
        let outcome = submit_cv(&store, user, &complete_cv(), &Labels::default()).await.unwrap();
        let loaded = load_cv(&store, user, outcome.cv.id.unwrap()).await.unwrap();
        assert_eq!(loaded.personal_info.full_name, "Ada Lovelace");
    }
}
