// src/core/table.rs
//! Rows-of-cells view over parsed HTML.
//!
//! Label lookups in the report pages are all of the shape "find a `<td>` whose
//! text is X, then read the cell right after it". Building the rows once and
//! querying them structurally keeps that away from string surgery.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("static selector"));
static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").expect("static selector"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// `<td>`
    Data,
    /// `<th>`
    Header,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    /// Full text content, trimmed.
    pub text: String,
    /// Raw value of the first child node, only when that node is text.
    pub first_text: Option<String>,
}

impl Cell {
    fn from_element(el: ElementRef<'_>) -> Option<Self> {
        let kind = match el.value().name() {
            "td" => CellKind::Data,
            "th" => CellKind::Header,
            _ => return None,
        };
        let text = el.text().collect::<String>().trim().to_string();
        let first_text = el
            .children()
            .next()
            .and_then(|node| node.value().as_text().map(|t| s!(&**t)));

        Some(Self { kind, text, first_text })
    }

    pub fn is_data(&self) -> bool {
        self.kind == CellKind::Data
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellTable {
    rows: Vec<Vec<Cell>>,
}

impl CellTable {
    /// Every `<tr>` of the fragment, in document order, across all tables.
    pub fn parse(fragment: &str) -> Self {
        let html = Html::parse_fragment(fragment);
        Self::from_rows(html.select(&ROW))
    }

    /// One table per `<table>` element, in document order.
    pub fn parse_each(fragment: &str) -> Vec<Self> {
        let html = Html::parse_fragment(fragment);
        html.select(&TABLE)
            .map(|table| Self::from_rows(table.select(&ROW)))
            .collect()
    }

    fn from_rows<'a>(rows: impl Iterator<Item = ElementRef<'a>>) -> Self {
        let rows = rows
            .map(|tr| {
                tr.children()
                    .filter_map(ElementRef::wrap)
                    .filter_map(Cell::from_element)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// For each data cell whose text is exactly `label`, the data cell right
    /// after it in the same row. Label cells with no such neighbour are skipped.
    pub fn values_after<'t>(&'t self, label: &'t str) -> impl Iterator<Item = &'t Cell> + 't {
        self.rows.iter().flat_map(move |row| {
            row.windows(2)
                .filter(move |pair| pair[0].is_data() && pair[0].text == label)
                .filter_map(|pair| pair[1].is_data().then_some(&pair[1]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_keep_cell_kinds_and_text() {
        let t = CellTable::parse("<table><tr><th>Key</th><td> 12 b. </td></tr></table>");
        assert_eq!(t.rows().len(), 1);
        let row = &t.rows()[0];
        assert_eq!(row[0].kind, CellKind::Header);
        assert_eq!(row[1].text, "12 b.");
        assert_eq!(row[1].first_text.as_deref(), Some(" 12 b. "));
    }

    #[test]
    fn first_text_is_none_when_cell_starts_with_element() {
        let t = CellTable::parse("<table><tr><td><b>45</b> bodů</td></tr></table>");
        let cell = &t.rows()[0][0];
        assert_eq!(cell.text, "45 bodů");
        assert_eq!(cell.first_text, None);
    }

    #[test]
    fn values_after_reads_only_the_adjacent_data_cell() {
        let t = CellTable::parse(
            "<table>\
               <tr><td>celkem</td><td>40</td><td>celkem</td></tr>\
               <tr><td>celkem</td><th>x</th></tr>\
               <tr><td>other</td><td>celkem</td></tr>\
               <tr><td>41</td></tr>\
             </table>",
        );
        let hits: Vec<_> = t.values_after("celkem").map(|c| c.text.as_str()).collect();
        assert_eq!(hits, vec!["40"]);
    }

    #[test]
    fn parse_each_splits_tables() {
        let t = CellTable::parse_each(
            "<table><tr><td>a</td></tr></table><p>x</p><table><tr><td>b</td></tr><tr><td>c</td></tr></table>",
        );
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].rows().len(), 2);
    }
}
