use crate::contract::model::{NewUser, User, UserStats};

/// Public API trait for the users_info module that other crates can use
pub trait UsersInfoApi: Send + Sync {
    /// Create a user, applying the configured validation policy
    fn create_user(&self, new_user: NewUser) -> anyhow::Result<User>;

    /// Greeting line for a user
    fn greet(&self, user: &User) -> String;

    /// Whole days since the account was created
    fn account_age_days(&self, user: &User) -> i64;

    /// Total/active/inactive counts
    fn summarize(&self, users: &[User]) -> UserStats;
}
