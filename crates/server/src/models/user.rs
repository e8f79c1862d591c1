//! User account model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use paper_lantern_core::{Email, UserId};

/// A registered site account.
///
/// The password hash never leaves the repository layer; this struct is safe
/// to serialize.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}
