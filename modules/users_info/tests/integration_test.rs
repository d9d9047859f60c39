//! Exercises the users_info module through its public client API.

use chrono::{Duration, Utc};

use users_info::config::{UsersInfoConfig, ValidationMode};
use users_info::contract::{error::UsersInfoError, model::*};
use users_info::UsersInfo;

fn validation_error(err: anyhow::Error) -> UsersInfoError {
    err.downcast::<UsersInfoError>()
        .expect("expected a UsersInfoError")
}

#[test]
fn validated_user_accepts_and_lowercases_email() {
    let api = UsersInfo::default().api();

    let user = api.create_user(NewUser::new(1, "alice", "a@b.com")).unwrap();
    assert_eq!(user.email, "a@b.com");

    let user = api
        .create_user(NewUser::new(2, "bob", "Bob@Example.com"))
        .unwrap();
    assert_eq!(user.email, "bob@example.com");
}

#[test]
fn validated_user_rejects_email_without_at() {
    let api = UsersInfo::default().api();

    let err = api
        .create_user(NewUser::new(1, "alice", "not-an-email"))
        .unwrap_err();

    match validation_error(err) {
        UsersInfoError::Validation { field, .. } => assert_eq!(field, "email"),
    }
}

#[test]
fn validated_user_enforces_username_bounds() {
    let api = UsersInfo::default().api();

    for name in ["", "ab", "abcdefghijklmnopqrstu"] {
        let err = api
            .create_user(NewUser::new(1, name, "a@b.com"))
            .unwrap_err();
        match validation_error(err) {
            UsersInfoError::Validation { field, message } => {
                assert_eq!(field, "username");
                assert!(message.contains("[3, 20]"), "{message}");
            }
        }
    }

    for name in ["abc", "abcdefghijklmnopqrst"] {
        assert!(api.create_user(NewUser::new(1, name, "a@b.com")).is_ok());
    }
}

#[test]
fn username_length_counts_characters() {
    let api = UsersInfo::default().api();
    // three characters, six bytes
    assert!(api.create_user(NewUser::new(1, "äöü", "a@b.com")).is_ok());
}

#[test]
fn unvalidated_mode_accepts_anything() {
    let api = UsersInfo::init(UsersInfoConfig {
        validation: ValidationMode::Off,
        normalize_email: true,
    })
    .api();

    let user = api.create_user(NewUser::new(1, "", "NOT-AN-EMAIL")).unwrap();
    assert_eq!(user.username, "");
    assert_eq!(user.email, "NOT-AN-EMAIL");
}

#[test]
fn greeting_status_matches_activity() {
    let api = UsersInfo::default().api();

    for active in [true, false] {
        let user = User::new(1, "alice", "a@b.com").with_active(active);
        let greeting = api.greet(&user);
        let expected = if active { "active." } else { "inactive." };
        assert!(greeting.ends_with(&format!("Your account is {expected}")));
    }
}

#[test]
fn account_age_for_past_and_future() {
    let api = UsersInfo::default().api();

    let old = User::new(1, "alice", "a@b.com").with_created_at(Utc::now() - Duration::days(3));
    assert_eq!(api.account_age_days(&old), 3);

    let future = User::new(2, "bob", "b@b.com")
        .with_created_at(Utc::now() + Duration::days(2) + Duration::hours(1));
    assert_eq!(api.account_age_days(&future), -2);
}

#[test]
fn summary_totals_always_balance() {
    let api = UsersInfo::default().api();

    assert_eq!(api.summarize(&[]), UserStats::default());

    let users: Vec<User> = (0..17)
        .map(|i| User::new(i, format!("user{i}"), "u@example.com").with_active(i % 3 != 0))
        .collect();

    let stats = api.summarize(&users);
    assert_eq!(stats.total, 17);
    assert_eq!(stats.active, 11);
    assert_eq!(stats.active + stats.inactive, stats.total);
}
