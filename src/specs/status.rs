// src/specs/status.rs
//! Completion status + point total from cleaned report tables.
//!
//! Three independent scans run over the same [`CellTable`]. Each is driven by a
//! [`LabelSet`]: a label cell is a `<td>` whose trimmed text equals a label, and
//! the value is the first text node of the `<td>` right after it in the row.
//!
//! Precedence, kept exactly as the portal client has always behaved:
//! - inclusion: first hit wins and ends the scan;
//! - grade: every label is visited, the last decisive one wins, and it
//!   overrides an inclusion found before it;
//! - point sum: every hit overwrites, the last one wins.

use serde::Serialize;

use crate::core::table::{Cell, CellTable};

/// Ordered synonyms for one concept. Order is scan priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelSet(&'static [&'static str]);

impl LabelSet {
    pub const fn new(labels: &'static [&'static str]) -> Self {
        Self(labels)
    }

    pub fn iter(self) -> impl Iterator<Item = &'static str> {
        self.0.iter().copied()
    }

    pub fn contains(self, value: &str) -> bool {
        self.0.iter().any(|label| *label == value)
    }

    pub fn labels(self) -> &'static [&'static str] {
        self.0
    }
}

/// Accepted sibling values share the label representation.
pub type ValueSet = LabelSet;

pub const INCLUSION_LABELS: LabelSet = label_set![
    "zápočet",
    "zapocet",
    "Zápočet",
    "klasifikovaný zápočet",
    "nárok na zápočet",
];
pub const INCLUSION_VALUES: ValueSet = label_set!["ANO", "Ano", "Z", "√"];

pub const GRADE_LABELS: LabelSet = label_set![
    "klasifikovaný zápočet",
    "vysledek",
    "Známka",
    "zápočet",
    "Zápočet",
];
pub const PASSING_GRADES: ValueSet = label_set!["A", "B", "C", "D", "E"];
pub const FAILING_GRADE: &str = "F";

pub const SUM_LABELS: LabelSet = label_set![
    "celkem",
    "Celkem",
    "suma",
    "cvičení celkem",
    "hodnoceni",
    "celkový počet",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Pass/fail credit granted.
    Inclusion,
    /// Letter grade A–E.
    Succeed,
    /// Letter grade F.
    Failed,
    #[default]
    None,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Inclusion => "inclusion",
            Status::Succeed => "succeed",
            Status::Failed => "failed",
            Status::None => "none",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub status: Status,
    /// Raw cell text, not parsed: may carry units or other noise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum_of_points: Option<String>,
}

pub fn extract(cleaned_html: &str) -> ExtractionResult {
    extract_from(&CellTable::parse(cleaned_html))
}

pub fn extract_from(table: &CellTable) -> ExtractionResult {
    let mut status = detect_inclusion(table);
    if let Some(grade) = detect_grade(table) {
        status = Some(grade);
    }

    ExtractionResult {
        status: status.unwrap_or_default(),
        sum_of_points: detect_sum(table),
    }
}

/// Sibling value, compared verbatim; an empty text node counts as missing.
fn marker(cell: &Cell) -> Option<&str> {
    cell.first_text.as_deref().filter(|v| !v.is_empty())
}

fn detect_inclusion(table: &CellTable) -> Option<Status> {
    for label in INCLUSION_LABELS.iter() {
        for cell in table.values_after(label) {
            if marker(cell).is_some_and(|v| INCLUSION_VALUES.contains(v)) {
                logd!("inclusion: {label:?} -> {:?}", cell.text);
                return Some(Status::Inclusion);
            }
        }
    }
    None
}

fn detect_grade(table: &CellTable) -> Option<Status> {
    let mut found = None;
    for label in GRADE_LABELS.iter() {
        let decisive = table.values_after(label).find_map(|cell| match marker(cell) {
            Some(v) if PASSING_GRADES.contains(v) => Some(Status::Succeed),
            Some(FAILING_GRADE) => Some(Status::Failed),
            _ => None,
        });
        if let Some(status) = decisive {
            logd!("grade: {label:?} -> {status}");
            found = Some(status);
        }
    }
    found
}

fn detect_sum(table: &CellTable) -> Option<String> {
    let mut sum = None;
    for label in SUM_LABELS.iter() {
        for cell in table.values_after(label) {
            if let Some(raw) = marker(cell) {
                sum = Some(s!(raw));
            }
        }
    }
    sum
}
