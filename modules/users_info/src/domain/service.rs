use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::config::ValidationMode;
use crate::contract::model::{NewUser, User, UserStats};
use crate::domain::error::DomainError;

/// Domain service: user construction rules plus traced wrappers around the
/// pure helpers below.
#[derive(Debug, Clone, Default)]
pub struct Service {
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub validation: ValidationMode,
    pub normalize_email: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMode::Strict,
            normalize_email: true,
        }
    }
}

impl Service {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    #[instrument(
        name = "users_info.service.create_user",
        skip(self, new_user),
        fields(user_id = new_user.id, username = %new_user.username)
    )]
    pub fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new user");

        let mut email = new_user.email.clone();
        if self.config.validation == ValidationMode::Strict {
            new_user.validate().map_err(|errors| {
                let err = DomainError::from_validation(&new_user, &errors);
                debug!(error = %err, "User validation failed");
                err
            })?;
            if self.config.normalize_email {
                email = email.to_lowercase();
            }
        }

        let user = User {
            id: new_user.id,
            username: new_user.username,
            email,
            created_at: new_user.created_at.unwrap_or_else(Utc::now),
            is_active: new_user.is_active.unwrap_or(true),
        };

        info!("Successfully created user with id={}", user.id);
        Ok(user)
    }

    #[instrument(name = "users_info.service.greet", skip(self, user), fields(user_id = user.id))]
    pub fn greet(&self, user: &User) -> String {
        greet_user(user)
    }

    #[instrument(
        name = "users_info.service.account_age_days",
        skip(self, user),
        fields(user_id = user.id)
    )]
    pub fn account_age_days(&self, user: &User) -> i64 {
        let days = calculate_days_since_creation(user);
        debug!(days, "Computed account age");
        days
    }

    #[instrument(
        name = "users_info.service.summarize",
        skip(self, users),
        fields(count = users.len())
    )]
    pub fn summarize(&self, users: &[User]) -> UserStats {
        let stats = process_users(users);
        debug!(
            total = stats.total,
            active = stats.active,
            inactive = stats.inactive,
            "Summarized users"
        );
        stats
    }
}

/// "Hello, {username}! Your account is {active|inactive}."
pub fn greet_user(user: &User) -> String {
    let status = if user.is_active { "active" } else { "inactive" };
    format!("Hello, {}! Your account is {}.", user.username, status)
}

/// Whole days since `created_at`, truncated toward zero. Negative when
/// `created_at` lies in the future.
pub fn calculate_days_since_creation(user: &User) -> i64 {
    days_since_creation_at(user, Utc::now())
}

/// [`calculate_days_since_creation`] against an explicit reference time.
pub fn days_since_creation_at(user: &User, now: DateTime<Utc>) -> i64 {
    (now - user.created_at).num_days()
}

pub fn process_users(users: &[User]) -> UserStats {
    let total = users.len();
    let active = users.iter().filter(|u| u.is_active).count();
    UserStats {
        total,
        active,
        inactive: total - active,
    }
}
