//! Flat two-column interchange format: one `collection,value` record per
//! line, UTF-8, no header, no quoting.
//!
//! Parsing is lossy by contract: blank lines are discarded and malformed
//! lines (no comma, or an empty field after trimming) are dropped without
//! error. Callers report aggregate counts; `ParsedBulk::skipped_lines`
//! exists so they can.

use std::collections::HashMap;

/// One collection's worth of parsed values, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkGroup {
    pub name: String,
    pub values: Vec<String>,
}

/// Result of `parse_bulk`: groups in first-seen order plus a count of
/// dropped malformed lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBulk {
    groups: Vec<BulkGroup>,
    skipped_lines: usize,
}

impl ParsedBulk {
    /// Groups in first-seen order of their collection names.
    pub fn groups(&self) -> &[BulkGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<BulkGroup> {
        self.groups
    }

    /// Values recorded for `name`, in input order. Names are matched
    /// verbatim (case- and accent-sensitive).
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.values.as_slice())
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.values.len()).sum()
    }

    /// Malformed lines dropped during parsing (blank lines not counted).
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group `collection,value` lines by collection name.
///
/// A line contributes only when both fields are non-empty after trimming;
/// everything else is silently dropped (and counted). Never fails.
pub fn parse_bulk(text: &str) -> ParsedBulk {
    let mut groups: Vec<BulkGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((name, value)) = line.split_once(',') else {
            skipped += 1;
            continue;
        };
        let (name, value) = (name.trim(), value.trim());
        if name.is_empty() || value.is_empty() {
            skipped += 1;
            continue;
        }
        match index.get(name) {
            Some(&at) => groups[at].values.push(value.to_string()),
            None => {
                index.insert(name.to_string(), groups.len());
                groups.push(BulkGroup {
                    name: name.to_string(),
                    values: vec![value.to_string()],
                });
            }
        }
    }

    ParsedBulk {
        groups,
        skipped_lines: skipped,
    }
}

/// Emit one `name,value\n` line per pair, in the given order. The empty
/// string when there are no pairs.
///
/// No escaping: a collection name containing a comma will not survive the
/// round trip.
pub fn serialize_bulk(groups: &[BulkGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        for value in &group.values {
            out.push_str(&group.name);
            out.push(',');
            out.push_str(value);
            out.push('\n');
        }
    }
    out
}
