//! Shared extractors for the three sheet layouts: key-value rows,
//! numbered-suffix rows and column-spanning rows.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit pattern"));

/// Looks up `header` in a key-value map, falling back to `default` when
/// the key is missing or its value is empty.
pub fn text(map: &HashMap<String, String>, header: &str, default: &str) -> String {
    match map.get(header) {
        Some(value) if !value.is_empty() => value.clone(),
        _ => default.to_string(),
    }
}

fn field_name(header: &str) -> String {
    let lowered = header.to_lowercase();
    let stripped = DIGITS.replace_all(&lowered, "");
    stripped.trim().split_whitespace().collect::<Vec<_>>().join("_")
}

/// Collects numbered-suffix rows into per-slot records.
///
/// A row whose header contains one of `prefixes` (case-insensitive) and
/// carries a number, like `Testimonial Name2`, lands in slot `number - 1`
/// under the header name with the digits stripped (`testimonial_name`).
/// Slots that never receive a field stay as empty records so authors can
/// leave gaps in their numbering.
pub fn numbered_records(
    rows: &[Vec<String>],
    prefixes: &[&str],
) -> Vec<HashMap<String, String>> {
    let mut records: Vec<HashMap<String, String>> = Vec::new();

    for row in rows {
        let header = match row.first() {
            Some(h) if !h.is_empty() => h,
            _ => continue,
        };

        let lowered = header.to_lowercase();
        if !prefixes.iter().any(|p| lowered.contains(&p.to_lowercase())) {
            continue;
        }

        let number: usize = match DIGITS.find(header).and_then(|m| m.as_str().parse().ok()) {
            Some(n) if n >= 1 => n,
            _ => continue,
        };

        let value = match row.get(1) {
            Some(v) if !v.is_empty() => v.clone(),
            _ => continue,
        };

        let index = number - 1;
        while records.len() <= index {
            records.push(HashMap::new());
        }
        records[index].insert(field_name(header), value);
    }

    records
}

/// Collects column-spanning rows into per-column records.
///
/// Each entry of `headers` maps a row header to the field name it fills.
/// For every matching row, the cells in columns 1.. land in the record
/// for their column index. Returns records keyed by column index so
/// callers iterate in sheet order.
pub fn column_records(
    rows: &[Vec<String>],
    headers: &[(&str, &str)],
) -> BTreeMap<usize, HashMap<String, String>> {
    let mut records: BTreeMap<usize, HashMap<String, String>> = BTreeMap::new();

    for row in rows {
        let header = match row.first() {
            Some(h) if !h.is_empty() => h,
            _ => continue,
        };

        let lowered = header.to_lowercase();
        let field = match headers
            .iter()
            .find(|(h, _)| lowered.contains(&h.to_lowercase()))
        {
            Some((_, field)) => *field,
            None => continue,
        };

        for (col, value) in row.iter().enumerate().skip(1) {
            if !value.is_empty() {
                records
                    .entry(col)
                    .or_default()
                    .insert(field.to_string(), value.clone());
            }
        }
    }

    records
}

/// Reads a column-as-category sheet into one record per data column.
///
/// The first row names the categories; every later row is a labeled
/// field whose cells belong to the category of their column. `labels`
/// maps row labels to field names. Each record carries its category
/// name under `category`; columns that match no labeled row are
/// dropped.
pub fn column_categories(
    rows: &[Vec<String>],
    labels: &[(&str, &str)],
) -> Vec<HashMap<String, String>> {
    let headers = match rows.first() {
        Some(h) => h,
        None => return Vec::new(),
    };

    let mut records = Vec::new();

    for (col, category) in headers.iter().enumerate().skip(1) {
        if category.is_empty() {
            continue;
        }

        let mut record = HashMap::new();
        record.insert("category".to_string(), category.clone());

        for row in &rows[1..] {
            let label = match row.first() {
                Some(l) if !l.is_empty() => l,
                _ => continue,
            };

            let field = match labels.iter().find(|(l, _)| *l == label.as_str()) {
                Some((_, field)) => *field,
                None => continue,
            };

            if let Some(value) = row.get(col) {
                record.insert(field.to_string(), value.clone());
            }
        }

        if record.len() > 1 {
            records.push(record);
        }
    }

    records
}
