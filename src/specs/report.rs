// src/specs/report.rs
//! Scraping *spec* for the per-student classification report.
//!
//! Page: `/courses/<course>/_export/xhtml/classification/student/<user>/start`
//!
//! Responsibilities:
//! - Fetch the page through a [`Fetch`] implementation.
//! - Clean both overview tables (`specs::normalize`) and glue them into one
//!   content string: course table, the summary heading, summary table.
//! - Hand the content to `specs::status`, or read it as plain key/value tables.

use crate::config::consts::{OVERVIEW_TABLES, SUMMARY_HEADING};
use crate::config::options::FetchConfig;
use crate::core::{CellTable, Fetch};
use crate::error::{Error, Result};

use super::normalize::normalize;
use super::status::{self, ExtractionResult};

pub fn report_path(course: &str, user: &str) -> String {
    format!("/courses/{course}/_export/xhtml/classification/student/{user}/start")
}

/// Cleaned tables of a raw report page joined in page order.
/// Absent tables are skipped; `None` when there is nothing at all.
pub fn assemble(raw_html: &str) -> Option<String> {
    let mut content = s!();
    for index in 0..OVERVIEW_TABLES {
        let Some(table) = normalize(raw_html, index) else { continue };
        if index > 0 {
            content.push_str(SUMMARY_HEADING);
        }
        content.push_str(&table);
    }
    (!content.is_empty()).then_some(content)
}

/// Fetch and assemble one course's report for the configured user.
pub fn fetch(fetcher: &dyn Fetch, config: &FetchConfig, course: &str) -> Result<String> {
    let user = config.user()?;
    let raw = fetcher.get(&report_path(course, user))?;
    assemble(&raw).ok_or(Error::NoData)
}

pub fn check(fetcher: &dyn Fetch, config: &FetchConfig, course: &str) -> Result<ExtractionResult> {
    let content = fetch(fetcher, config, course)?;
    let result = status::extract(&content);
    logf!("{course}: {} ({:?})", result.status, result.sum_of_points);
    Ok(result)
}

/// Key/value view of one report table: first cell → second cell per row.
pub type SummaryTable = Vec<(String, String)>;

/// The first two tables of assembled content as key/value lists.
/// Rows without data cells are skipped; a repeated key keeps its first
/// position and takes the later value.
pub fn summary_tables(content: &str) -> [SummaryTable; 2] {
    let mut out: [SummaryTable; 2] = Default::default();
    for (slot, table) in out.iter_mut().zip(CellTable::parse_each(content)) {
        for row in table.rows() {
            let mut data = row.iter().filter(|c| c.is_data());
            let Some(key) = data.next() else { continue };
            let value = data.next().map(|c| c.text.clone()).unwrap_or_default();

            match slot.iter().position(|(k, _)| *k == key.text) {
                Some(i) => slot[i].1 = value,
                None => slot.push((key.text.clone(), value)),
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(first: Option<&str>, second: Option<&str>) -> String {
        let wrap = |t: &str| format!(r#"<div class="overTable"><table>{t}</table></div>"#);
        format!(
            "<html><body><h1>BI-XYZ</h1>{}{}</body></html>",
            first.map(wrap).unwrap_or_default(),
            second.map(wrap).unwrap_or_default(),
        )
    }

    #[test]
    fn path_matches_portal_layout() {
        assert_eq!(
            report_path("BI-PA1", "novakj"),
            "/courses/BI-PA1/_export/xhtml/classification/student/novakj/start"
        );
    }

    #[test]
    fn assemble_puts_heading_between_tables() {
        let raw = page(Some("<tr><td>a</td><td>1</td></tr>"), Some("<tr><td>b</td><td>2</td></tr>"));
        let content = assemble(&raw).unwrap();
        let a = content.find("<td>a</td>").unwrap();
        let h = content.find(SUMMARY_HEADING).unwrap();
        let b = content.find("<td>b</td>").unwrap();
        assert!(a < h && h < b);
    }

    #[test]
    fn assemble_skips_missing_tables() {
        let only_first = assemble(&page(Some("<tr><td>a</td></tr>"), None)).unwrap();
        assert!(!only_first.contains(SUMMARY_HEADING));
        assert_eq!(assemble("<html><body></body></html>"), None);
    }

    #[test]
    fn summary_tables_read_first_two_cells() {
        let content = format!(
            "<table><tr><th>x</th></tr><tr><td>login</td><td>novakj</td></tr>\
             <tr><td>test</td><td>10</td><td>ignored</td></tr><tr><td>test</td><td>12</td></tr></table>\
             {SUMMARY_HEADING}<table><tr><td>Známka</td></tr></table>"
        );
        let [first, second] = summary_tables(&content);
        assert_eq!(first, vec![(s!("login"), s!("novakj")), (s!("test"), s!("12"))]);
        assert_eq!(second, vec![(s!("Známka"), s!())]);
    }
}
