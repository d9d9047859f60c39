use std::sync::Arc;

use crate::contract::{
    client::UsersInfoApi,
    error::UsersInfoError,
    model::{NewUser, User, UserStats},
};
use crate::domain::service::Service;

/// Local implementation of the UsersInfoApi trait that delegates to the domain service
pub struct UsersInfoLocalClient {
    service: Arc<Service>,
}

impl UsersInfoLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl UsersInfoApi for UsersInfoLocalClient {
    fn create_user(&self, new_user: NewUser) -> anyhow::Result<User> {
        self.service
            .create_user(new_user)
            .map_err(|e| UsersInfoError::from(e).into())
    }

    fn greet(&self, user: &User) -> String {
        self.service.greet(user)
    }

    fn account_age_days(&self, user: &User) -> i64 {
        self.service.account_age_days(user)
    }

    fn summarize(&self, users: &[User]) -> UserStats {
        self.service.summarize(users)
    }
}
