// src/specs/normalize.rs
//! Overview-table cleanup for the classification report page.
//!
//! A report page wraps its tables in `<div class="overTable">` (one for the
//! course table, one for the summary). Before anything scans them for labels,
//! two things go:
//! - the first `<thead>` block (column titles, never data), and
//! - the first row whose first cell is a `<td>` whose text is exactly `login`
//!   (echoes the student id).
//!
//! Removal is structural: nodes are detached from the parsed tree and the rest
//! is serialized back, so cell structure is preserved.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::LOGIN_LABEL;

static OVER_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.overTable").expect("static selector"));
static THEAD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("thead").expect("static selector"));
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("static selector"));

#[derive(Clone, Copy)]
enum Scope {
    /// n-th overview container of a full page
    Container(usize),
    /// the whole parsed fragment
    Fragment,
}

fn scope_of(html: &Html, scope: Scope) -> Option<ElementRef<'_>> {
    match scope {
        Scope::Container(index) => html.select(&OVER_TABLE).nth(index),
        Scope::Fragment => Some(html.root_element()),
    }
}

/// Cleaned inner HTML of the `table_index`-th overview container of `raw_html`,
/// or `None` when the page has fewer containers.
pub fn normalize(raw_html: &str, table_index: usize) -> Option<String> {
    let mut html = Html::parse_document(raw_html);
    let out = strip_scope(&mut html, Scope::Container(table_index));
    if out.is_none() {
        logd!("overview table #{table_index} not found");
    }
    out
}

/// Same removals as [`normalize`], applied to an already extracted fragment.
pub fn strip(fragment: &str) -> String {
    let mut html = Html::parse_fragment(fragment);
    strip_scope(&mut html, Scope::Fragment).unwrap_or_default()
}

fn strip_scope(html: &mut Html, scope: Scope) -> Option<String> {
    let doomed: Vec<_> = {
        let root = scope_of(html, scope)?;
        let thead = root.select(&THEAD).next().map(|el| el.id());
        let login = root
            .select(&ROW)
            .filter(|row| thead.is_none_or(|h| !row.ancestors().any(|a| a.id() == h)))
            .find(|row| is_login_row(*row))
            .map(|el| el.id());
        thead.into_iter().chain(login).collect()
    };

    for id in doomed {
        if let Some(mut node) = html.tree.get_mut(id) {
            node.detach();
        }
    }

    scope_of(html, scope).map(|root| root.inner_html())
}

fn is_login_row(row: ElementRef<'_>) -> bool {
    row.children()
        .filter_map(ElementRef::wrap)
        .next()
        .is_some_and(|cell| {
            cell.value().name() == "td" && cell.text().collect::<String>() == LOGIN_LABEL
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="overTable">
            <table>
              <thead><tr><th>název</th><th>hodnota</th></tr></thead>
              <tbody>
                <tr><td>login</td><td>novakj</td></tr>
                <tr><td>cvičení celkem</td><td>32</td></tr>
              </tbody>
            </table>
          </div>
          <div class="overTable">
            <table><tbody><tr><td>Známka</td><td>B</td></tr></tbody></table>
          </div>
        </body></html>
    "#;

    #[test]
    fn first_table_loses_header_and_login() {
        let t = normalize(PAGE, 0).unwrap();
        assert!(!t.contains("<thead"));
        assert!(!t.contains("login"));
        assert!(!t.contains("novakj"));
        assert!(t.contains("<td>cvičení celkem</td><td>32</td>"));
    }

    #[test]
    fn second_table_is_untouched_content() {
        let t = normalize(PAGE, 1).unwrap();
        assert!(t.contains("<td>Známka</td><td>B</td>"));
    }

    #[test]
    fn missing_container_is_none() {
        assert_eq!(normalize(PAGE, 2), None);
        assert_eq!(normalize("<p>nothing here</p>", 0), None);
    }

    #[test]
    fn login_must_be_exact_and_first_cell() {
        let t = strip(
            "<table>\
               <tr><td>Login</td><td>a</td></tr>\
               <tr><td>x</td><td>login</td></tr>\
               <tr><th>login</th><td>b</td></tr>\
             </table>",
        );
        assert!(t.contains("Login"));
        assert!(t.contains("<td>x</td><td>login</td>"));
        assert!(t.contains("<th>login</th>"));
    }

    #[test]
    fn padded_login_is_an_ordinary_row() {
        let t = strip("<table><tr><td> login </td><td>x</td></tr></table>");
        assert!(t.contains("<td> login </td><td>x</td>"));
    }

    #[test]
    fn only_first_login_row_goes() {
        let t = strip(
            "<table>\
               <tr><td>login</td><td>first</td></tr>\
               <tr><td>login</td><td>second</td></tr>\
             </table>",
        );
        assert!(!t.contains("first"));
        assert!(t.contains("second"));
    }

    #[test]
    fn login_inside_thead_does_not_shield_body_row() {
        let t = strip(
            "<table>\
               <thead><tr><td>login</td><td>head</td></tr></thead>\
               <tbody><tr><td>login</td><td>body</td></tr><tr><td>suma</td><td>9</td></tr></tbody>\
             </table>",
        );
        assert!(!t.contains("head"));
        assert!(!t.contains(">body<"));
        assert!(t.contains("suma"));
    }
}
