// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Client-side sorting, filtering and text rendering of the user list.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::directory::model::User;
use crate::errors::DirectoryError;

/// Column a [`UserTable`] view can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Balance,
    Email,
    RegisterAt,
    Active,
}

impl SortColumn {
    fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            SortColumn::Name => compare_text(&a.name, &b.name),
            SortColumn::Balance => a.balance.total_cmp(&b.balance),
            SortColumn::Email => compare_text(&a.email, &b.email),
            SortColumn::RegisterAt => a.register_at.cmp(&b.register_at),
            // inactive sorts before active
            SortColumn::Active => a.active.cmp(&b.active),
        }
    }
}

impl FromStr for SortColumn {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SortColumn::Name),
            "balance" => Ok(SortColumn::Balance),
            "email" => Ok(SortColumn::Email),
            "registerat" | "register_at" | "registration" => Ok(SortColumn::RegisterAt),
            "active" | "status" => Ok(SortColumn::Active),
            _ => Err(DirectoryError::UnknownOption {
                kind: "sort column",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Row filter on the `active` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(self, user: &User) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => user.active,
            StatusFilter::Inactive => !user.active,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "inactive" => Ok(StatusFilter::Inactive),
            _ => Err(DirectoryError::UnknownOption {
                kind: "status filter",
                value: s.to_string(),
            }),
        }
    }
}

/// Case-insensitive first, then case-sensitive so the order is total.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// The fetched user list plus view operations over it.
///
/// Views borrow from the table; the underlying rows are never reordered.
#[derive(Debug, Clone, Default)]
pub struct UserTable {
    rows: Vec<User>,
}

impl UserTable {
    pub fn new(rows: Vec<User>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Filter, then stable-sort if a column is given.
    pub fn view(
        &self,
        sort: Option<(SortColumn, SortDirection)>,
        filter: StatusFilter,
    ) -> Vec<&User> {
        let mut rows: Vec<&User> = self.rows.iter().filter(|u| filter.matches(u)).collect();

        if let Some((column, direction)) = sort {
            rows.sort_by(|a, b| {
                let ord = column.compare(a, b);
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        rows
    }
}

const HEADERS: [&str; 5] = ["Name", "Balance", "Email", "Registration", "Status"];

/// Render rows as a plain-text table. `full_dates` adds the time of day to
/// the registration column.
pub fn render(rows: &[&User], full_dates: bool) -> String {
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|u| {
            [
                u.name.clone(),
                format_balance(u.balance),
                u.email.clone(),
                format_register_at(u, full_dates),
                format_status(u.active).to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &cells {
        write_row(&mut out, row, &widths);
    }
    if cells.is_empty() {
        out.push_str("(no data)\n");
    }
    out
}

fn write_row(out: &mut String, row: &[String; 5], widths: &[usize; 5]) {
    let padded: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

pub fn format_status(active: bool) -> &'static str {
    if active {
        "Active"
    } else {
        "Inactive"
    }
}

fn format_register_at(user: &User, full: bool) -> String {
    if full {
        user.register_at.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        user.register_at.format("%Y-%m-%d").to_string()
    }
}

/// `$` plus the amount with thousands separators and up to three fraction
/// digits, trailing zeros dropped: `1234.5` renders as `$1,234.5`.
pub fn format_balance(amount: f64) -> String {
    let fixed = format!("{:.3}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && !fixed.trim_matches(|c| c == '0' || c == '.').is_empty() {
        "-"
    } else {
        ""
    };

    if fraction.is_empty() {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{}", sign, grouped, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn user(id: &str, name: &str, balance: f64, email: &str, day: u32, active: bool) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            balance,
            email: email.to_string(),
            register_at: Utc.with_ymd_and_hms(2025, 1, day, 8, 30, 0).unwrap(),
            active,
        }
    }

    fn sample() -> UserTable {
        UserTable::new(vec![
            user("1", "charlie", 300.0, "c@example.com", 3, true),
            user("2", "Alice", 1500.5, "b@example.com", 1, false),
            user("3", "bob", -20.0, "a@example.com", 2, true),
        ])
    }

    fn ids(rows: &[&User]) -> Vec<String> {
        rows.iter().map(|u| u.id.clone()).collect()
    }

    #[test]
    fn unsorted_view_keeps_fetch_order() {
        let table = sample();
        assert_eq!(ids(&table.view(None, StatusFilter::All)), vec!["1", "2", "3"]);
    }

    #[test]
    fn sorts_names_case_insensitively() {
        let table = sample();
        let rows = table.view(Some((SortColumn::Name, SortDirection::Ascending)), StatusFilter::All);
        assert_eq!(ids(&rows), vec!["2", "3", "1"]);
    }

    #[test]
    fn sorts_each_column_both_ways() {
        let table = sample();
        let cases = [
            (SortColumn::Balance, vec!["3", "1", "2"]),
            (SortColumn::Email, vec!["3", "2", "1"]),
            (SortColumn::RegisterAt, vec!["2", "3", "1"]),
        ];

        for (column, ascending) in cases {
            let rows = table.view(Some((column, SortDirection::Ascending)), StatusFilter::All);
            assert_eq!(ids(&rows), ascending, "{:?} asc", column);

            let mut descending = ascending.clone();
            descending.reverse();
            let rows = table.view(Some((column, SortDirection::Descending)), StatusFilter::All);
            assert_eq!(ids(&rows), descending, "{:?} desc", column);
        }
    }

    #[test]
    fn active_sort_is_stable_and_puts_inactive_first() {
        let table = sample();
        let rows = table.view(Some((SortColumn::Active, SortDirection::Ascending)), StatusFilter::All);
        assert_eq!(ids(&rows), vec!["2", "1", "3"]);
    }

    #[test]
    fn status_filter_keeps_matching_rows() {
        let table = sample();
        assert_eq!(table.len(), 3);
        assert!(UserTable::default().is_empty());
        assert_eq!(ids(&table.view(None, StatusFilter::Active)), vec!["1", "3"]);
        assert_eq!(ids(&table.view(None, StatusFilter::Inactive)), vec!["2"]);
    }

    #[test]
    fn parses_column_and_filter_names() {
        assert_eq!("registerAt".parse::<SortColumn>().unwrap(), SortColumn::RegisterAt);
        assert_eq!("BALANCE".parse::<SortColumn>().unwrap(), SortColumn::Balance);
        assert_eq!("inactive".parse::<StatusFilter>().unwrap(), StatusFilter::Inactive);
        assert!(matches!(
            "height".parse::<SortColumn>(),
            Err(DirectoryError::UnknownOption { kind: "sort column", .. })
        ));
    }

    #[test]
    fn balance_formatting() {
        assert_eq!(format_balance(0.0), "$0");
        assert_eq!(format_balance(999.0), "$999");
        assert_eq!(format_balance(1234.5), "$1,234.5");
        assert_eq!(format_balance(1234567.891), "$1,234,567.891");
        assert_eq!(format_balance(12.3456), "$12.346");
        assert_eq!(format_balance(-20.0), "-$20");
    }

    #[test]
    fn renders_dates_and_status() {
        let table = sample();
        let rows = table.view(None, StatusFilter::Active);

        let short = render(&rows, false);
        assert!(short.contains("2025-01-03"));
        assert!(!short.contains("08:30:00"));
        assert!(short.contains("Active"));
        assert!(short.lines().next().unwrap().starts_with("Name"));

        let full = render(&rows, true);
        assert!(full.contains("2025-01-03 08:30:00"));
    }

    #[test]
    fn renders_header_rule_and_one_line_per_row() {
        let table = sample();
        let rows = table.view(None, StatusFilter::All);

        let out = render(&rows, false);
        let lines: Vec<&str> = out.lines().collect();

        assert!(out.ends_with('\n'));
        assert_eq!(lines.len(), 2 + rows.len());
        assert!(lines[1].chars().all(|c| c == '-' || c == '+'));
        assert!(lines[1].contains("-+-"));
        assert!(lines[2].starts_with("charlie"));
    }

    #[test]
    fn renders_placeholder_for_empty_table() {
        let out = render(&[], false);
        assert!(out.contains("(no data)"));
    }
}
