//! Terminal-digit search over entry values.
//!
//! The direct filter matches entries whose value ends with the query (or
//! whose label contains it, case-insensitively). When the direct filter
//! comes up empty, `suggest_endings` proposes a short ranked list of
//! similar endings that actually occur among the entries, so the user can
//! discover the search term they meant.

use std::collections::HashSet;

use tracing::{debug, debug_span};

use crate::model::Entry;
use crate::settings::{settings, SuggestSettings};

/// Direct filter: the value ends with `query`, or the label contains it
/// case-insensitively. An empty query matches every entry.
pub fn matches_query(entry: &Entry, query: &str) -> bool {
    if entry.value.ends_with(query) {
        return true;
    }
    match &entry.label {
        Some(label) => label.to_lowercase().contains(&query.to_lowercase()),
        None => false,
    }
}

/// Apply the direct filter, preserving entry order.
pub fn filter_entries(entries: &[Entry], query: &str) -> Vec<Entry> {
    entries
        .iter()
        .filter(|e| matches_query(e, query))
        .cloned()
        .collect()
}

/// Ranked alternative endings for a query that matched nothing exactly.
///
/// Every suffix of every digit-bearing entry value is a candidate. A
/// candidate is admitted when it contains the query, or when it has the
/// query's length and is numerically within `suggest.numeric_window`.
/// Admitted candidates are deduplicated, scored (lower is better), and
/// capped at `suggest.max_results`. Equal scores resolve in ascending
/// string order. Never fails: unparseable input just scores no numeric
/// distance.
pub fn suggest_endings(query: &str, entries: &[Entry]) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let _span = debug_span!("suggest_endings", query).entered();

    let cfg = &settings().suggest;
    let query_num: Option<i64> = query.parse().ok();
    let query_len = query.chars().count();

    let mut pool: HashSet<&str> = HashSet::new();
    for entry in entries {
        // Values with no digits take no part in digit-based reasoning.
        if !entry.value.chars().any(|c| c.is_ascii_digit()) {
            continue;
        }
        for ending in suffixes(&entry.value) {
            if ending == query {
                continue;
            }
            if ending.contains(query) || same_length_close(ending, query_len, query_num, cfg) {
                pool.insert(ending);
            }
        }
    }

    let mut ranked: Vec<String> = pool.into_iter().map(str::to_string).collect();
    // Lexicographic pre-sort + stable score sort keeps ties deterministic.
    ranked.sort();
    ranked.sort_by_key(|e| score(e, query, query_num, query_len, cfg));
    ranked.truncate(cfg.max_results);

    debug!(suggestions = ranked.len());
    ranked
}

/// All terminal substrings of `value`, shortest last, on char boundaries.
fn suffixes(value: &str) -> impl Iterator<Item = &str> {
    value.char_indices().map(move |(i, _)| &value[i..])
}

fn same_length_close(
    ending: &str,
    query_len: usize,
    query_num: Option<i64>,
    cfg: &SuggestSettings,
) -> bool {
    ending.chars().count() == query_len
        && numeric_distance(ending.parse().ok(), query_num)
            .is_some_and(|d| d <= cfg.numeric_window)
}

/// Absolute numeric distance; `None` when either side fails to parse.
fn numeric_distance(a: Option<i64>, b: Option<i64>) -> Option<u64> {
    match (a, b) {
        (Some(a), Some(b)) => {
            let wide = (a as i128 - b as i128).unsigned_abs();
            Some(wide.min(u64::MAX as u128) as u64)
        }
        _ => None,
    }
}

/// Composite score: numeric distance, plus weighted length distance, plus
/// a penalty when the ending does not contain the query. A missing numeric
/// distance counts as 0 so substring admissions are ranked on the
/// remaining terms.
fn score(
    ending: &str,
    query: &str,
    query_num: Option<i64>,
    query_len: usize,
    cfg: &SuggestSettings,
) -> u64 {
    let numeric = numeric_distance(ending.parse().ok(), query_num).unwrap_or(0);
    let len_diff = ending.chars().count().abs_diff(query_len) as u64;
    let containment = if ending.contains(query) {
        0
    } else {
        cfg.containment_penalty
    };
    numeric
        .saturating_add(cfg.length_weight.saturating_mul(len_diff))
        .saturating_add(containment)
}
