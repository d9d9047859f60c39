use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

/// Inclusive username length bounds enforced by [`NewUser`] validation.
pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 20;

/// Account identity. Immutable once built: the `with_*` helpers only apply
/// during construction and consume the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl User {
    /// Build a user without any field checks. `created_at` is set to now and
    /// the account starts active.
    pub fn new(id: i64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            created_at: Utc::now(),
            is_active: true,
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Data for creating a user through the validating path
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewUser {
    pub id: i64,
    // keep in sync with USERNAME_MIN_LEN / USERNAME_MAX_LEN
    #[validate(length(min = 3, max = 20))]
    pub username: String,
    #[validate(contains(pattern = "@"))]
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

impl NewUser {
    pub fn new(id: i64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            created_at: None,
            is_active: None,
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Aggregate counts over a set of users. `active + inactive == total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl UserStats {
    /// Key/value pairs in display order.
    pub fn entries(&self) -> [(&'static str, usize); 3] {
        [
            ("total", self.total),
            ("active", self.active),
            ("inactive", self.inactive),
        ]
    }
}
