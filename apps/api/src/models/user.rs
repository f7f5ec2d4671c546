use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row of the external `profiles` table. Credits gate CV submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub credits: i64,
}
