//! Deterministic mock users for the demo stories

use chrono::{Days, NaiveDate};
use serde_json::{Map, Value};

use crate::domain::Row;
use crate::error::{Error, Result};

const FIRST_NAMES: [&str; 12] = [
    "Ada", "Bram", "Cleo", "Dario", "Elin", "Farid", "Greta", "Hugo", "Ines", "Jonas", "Kaia",
    "Lior",
];
const LAST_NAMES: [&str; 10] = [
    "Archer", "Bishop", "Castillo", "Duarte", "Ellis", "Fontaine", "Garrick", "Holm", "Ivers",
    "Jansen",
];
const DOMAINS: [&str; 4] = ["example.com", "mail.test", "corp.invalid", "acme.org"];

/// Day mock visit dates count from
fn first_visit_day() -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(2019, 6, 1).ok_or_else(|| Error::Invalid {
        message: "invalid mock base date".to_string(),
    })
}

/// `count` users with ids `1..=count`; the same count always yields the same rows
pub fn mock_rows(count: usize) -> Result<Vec<Row>> {
    let base = first_visit_day()?;
    (1..=count).map(|id| mock_row(id, base)).collect()
}

fn mock_row(id: usize, base: NaiveDate) -> Result<Row> {
    // Cheap mixing so neighbouring ids do not look alike
    let seed = id.wrapping_mul(2_654_435_761) % 1_000_003;
    let first = FIRST_NAMES[seed % FIRST_NAMES.len()];
    let last = LAST_NAMES[(seed / 7) % LAST_NAMES.len()];
    let domain = DOMAINS[(seed / 13) % DOMAINS.len()];
    let gender = if seed % 2 == 0 { "Male" } else { "Female" };

    let visited = base
        .checked_add_days(Days::new((seed % 900) as u64))
        .ok_or_else(|| Error::Invalid {
            message: format!("mock date out of range for row {id}"),
        })?;

    let initial: String = last.chars().take(1).collect();
    let username = format!("{}{}{id}", first.to_lowercase(), initial.to_lowercase());
    let data: Map<String, Value> = [
        ("id", Value::from(id)),
        ("username", Value::from(username)),
        ("first_name", Value::from(first)),
        ("last_name", Value::from(last)),
        (
            "email",
            Value::from(format!("{}.{}@{domain}", first.to_lowercase(), last.to_lowercase())),
        ),
        ("gender", Value::from(gender)),
        (
            "ip_address",
            Value::from(format!("10.{}.{}.{}", seed % 256, (seed / 256) % 256, id % 256)),
        ),
        ("last_visited", Value::from(visited.format("%d/%m/%Y").to_string())),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect();

    Ok(Row::new(id as u64, data))
}
