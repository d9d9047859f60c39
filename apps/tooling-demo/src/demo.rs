//! Fixed demo sequences printed by each subcommand.

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use std::io::Write;

use toolkit::idioms::{
    append_to_list, calculate_total, check_status, checked_quotient, process_items, size_label,
    transform, Datum, Person,
};
use toolkit::{
    add_numbers, capitalize, format_name, get_config, process_data, safe_divide, Calculator,
};
use users_info::contract::client::UsersInfoApi;
use users_info::contract::model::{NewUser, User};

pub fn users(out: &mut impl Write, api: &dyn UsersInfoApi) -> Result<()> {
    let charlie_created = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .context("invalid creation date for sample user")?;

    let users = vec![
        User::new(1, "alice", "alice@example.com"),
        User::new(2, "bob", "bob@example.com").with_active(false),
        User::new(3, "charlie", "charlie@example.com").with_created_at(charlie_created),
    ];

    for user in &users {
        writeln!(out, "{}", api.greet(user))?;
        writeln!(out, "  Account age: {} days", api.account_age_days(user))?;
    }

    writeln!(out, "\nUser Statistics:")?;
    for (key, value) in api.summarize(&users).entries() {
        writeln!(out, "  {}: {}", capitalize(key), value)?;
    }

    writeln!(out, "\nValidation:")?;
    let candidates = [
        NewUser::new(4, "dana", "Dana@Example.com"),
        NewUser::new(5, "eve", "not-an-email"),
    ];
    for candidate in candidates {
        match api.create_user(candidate) {
            Ok(user) => writeln!(out, "  accepted {} <{}>", user.username, user.email)?,
            Err(e) => writeln!(out, "  rejected: {e}")?,
        }
    }

    Ok(())
}

pub fn utils(out: &mut impl Write) -> Result<()> {
    writeln!(out, "5 + 3 = {}", add_numbers(5, 3)?)?;
    writeln!(out, "Formatted name: {}", format_name("john", "doe"))?;

    let result = Calculator::new(10.0).add(5.0).subtract(3.0).get_result();
    writeln!(out, "Calculator result: {result:?}")?;

    for (a, b) in [(10.0, 2.0), (10.0, 0.0)] {
        match safe_divide(a, b) {
            Some(q) => writeln!(out, "safe_divide({a}, {b}) = {q:?}")?,
            None => writeln!(out, "safe_divide({a}, {b}) = none")?,
        }
    }

    let records: Vec<serde_json::Map<String, serde_json::Value>> = serde_json::from_str(
        r#"[{"name": "alice", "role": "admin"}, {"role": "guest"}, {"name": "bob"}]"#,
    )?;
    writeln!(out, "Names: {}", process_data(&records).join(", "))?;

    writeln!(out, "Settings: {}", serde_json::to_string(&get_config())?)?;
    Ok(())
}

pub fn idioms(out: &mut impl Write) -> Result<()> {
    let mut counts: Vec<_> = process_items(&["apple", "kiwi"]).into_iter().collect();
    counts.sort();
    writeln!(out, "process_items: {counts:?}")?;

    writeln!(out, "size_label(42) = {}", size_label(42))?;
    writeln!(out, "size_label(7) = {}", size_label(7))?;
    writeln!(out, "Person: {}", Person::new("Ada").name())?;

    match checked_quotient(10, 0) {
        Ok(q) => writeln!(out, "checked_quotient(10, 0) = {q}")?,
        Err(e) => writeln!(out, "checked_quotient(10, 0) failed: {e}")?,
    }

    writeln!(out, "check_status(false) = {}", check_status(false))?;

    let first = append_to_list(1, None);
    let second = append_to_list(2, None);
    writeln!(out, "append_to_list: {first:?} then {second:?}")?;

    writeln!(
        out,
        "transform: {:?}, {:?}",
        transform(Datum::Text("tooling".to_string()))?,
        transform(Datum::Number(21))?
    )?;
    writeln!(out, "calculate_total([1, 2, 3]) = {}", calculate_total(&[1, 2, 3])?)?;

    match calculate_total(&[i64::MAX, 1]) {
        Ok(total) => writeln!(out, "calculate_total([i64::MAX, 1]) = {total}")?,
        Err(e) => writeln!(out, "calculate_total([i64::MAX, 1]) failed: {e}")?,
    }
    Ok(())
}
