//! Idiomatic counterparts to a catalog of common code smells: untyped
//! parameters, catch-all error handling, shared mutable defaults, boolean
//! comparisons and functions that silently drop their return value.

use std::collections::HashMap;

use crate::error::ToolkitError;

/// Map each item to its length in characters.
pub fn process_items(items: &[&str]) -> HashMap<String, usize> {
    items
        .iter()
        .map(|item| (item.to_string(), item.chars().count()))
        .collect()
}

/// "big" for values above ten, "small" otherwise.
pub fn size_label(x: i64) -> &'static str {
    if x > 10 {
        return "big";
    }
    "small"
}

/// A named entity with a read-only accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Integer division that reports the failure it can actually hit.
pub fn checked_quotient(a: i64, b: i64) -> Result<i64, ToolkitError> {
    if b == 0 {
        return Err(ToolkitError::division_by_zero(a));
    }
    a.checked_div(b).ok_or_else(|| ToolkitError::overflow("checked_quotient"))
}

pub fn check_status(is_active: bool) -> &'static str {
    if is_active {
        "active"
    } else {
        "inactive"
    }
}

/// Push `item` onto `list`, starting from a fresh vector when none is given.
pub fn append_to_list<T>(item: T, list: Option<Vec<T>>) -> Vec<T> {
    let mut list = list.unwrap_or_default();
    list.push(item);
    list
}

/// The closed set of inputs [`transform`] understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Datum {
    Text(String),
    Number(i64),
}

/// Upper-case text, double numbers. Doubling past the `i64` range is an
/// [`ToolkitError::Overflow`].
pub fn transform(data: Datum) -> Result<Datum, ToolkitError> {
    match data {
        Datum::Text(s) => Ok(Datum::Text(s.to_uppercase())),
        Datum::Number(n) => n
            .checked_mul(2)
            .map(Datum::Number)
            .ok_or_else(|| ToolkitError::overflow("transform")),
    }
}

pub fn calculate_total(items: &[i64]) -> Result<i64, ToolkitError> {
    items.iter().try_fold(0i64, |acc, &x| {
        acc.checked_add(x).ok_or_else(|| ToolkitError::overflow("calculate_total"))
    })
}
