//! Session-related types.
//!
//! Types stored in the session for authentication state. The session is the
//! sole source of truth for identity and the admin flag; client-supplied
//! flags are never trusted.

use serde::{Deserialize, Serialize};

use paper_lantern_core::{Email, UserId};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's email address (the cart/order identity key).
    pub email: Email,
    /// Display name shown by the front end.
    pub first_name: String,
    /// Whether admin-only operations are permitted.
    pub is_admin: bool,
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}
