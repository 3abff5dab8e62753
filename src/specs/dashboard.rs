// src/specs/dashboard.rs
//! Scraping *spec* for the dashboard "current courses" widget.
//!
//! The widget is fetched by POSTing its id to the ajax endpoint; the response
//! carries the logged-in user as `<div class="user">Name (login)</div>` and one
//! `<a href="/courses/<code>">` per enrolled course.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::config::consts::{DASHBOARD_FORM, DASHBOARD_PATH};
use crate::core::Fetch;
use crate::error::{Error, Result};

static USER: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.user").expect("static selector"));
static COURSE_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href^="/courses/"]"#).expect("static selector"));
// Greedy lead-in: the *last* parenthesised login wins.
static LOGIN_IN_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*\(([a-z0-9]*)\)").expect("static regex"));

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dashboard {
    pub username: Option<String>,
    pub courses: Vec<String>,
}

pub fn fetch(fetcher: &dyn Fetch) -> Result<Dashboard> {
    let body = fetcher.post_form(DASHBOARD_PATH, DASHBOARD_FORM)?;
    let dashboard = parse(&body);
    if dashboard.courses.is_empty() {
        return Err(Error::NoCourses);
    }
    logf!("dashboard: {} courses", dashboard.courses.len());
    Ok(dashboard)
}

pub fn parse(html: &str) -> Dashboard {
    let doc = Html::parse_document(html);
    Dashboard {
        username: username_in(&doc),
        courses: courses_in(&doc),
    }
}

pub fn parse_username(html: &str) -> Option<String> {
    username_in(&Html::parse_document(html))
}

pub fn parse_courses(html: &str) -> Vec<String> {
    courses_in(&Html::parse_document(html))
}

fn username_in(doc: &Html) -> Option<String> {
    let text: String = doc.select(&USER).flat_map(|el| el.text()).collect();
    let name = match LOGIN_IN_PARENS.captures(&text) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
        None => text.as_str(),
    };
    let name = name.trim();
    (!name.is_empty()).then(|| s!(name))
}

fn courses_in(doc: &Html) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for link in doc.select(&COURSE_LINK) {
        let Some(href) = link.value().attr("href") else { continue };
        let code = href.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
        if !code.is_empty() && !out.iter().any(|c| c == code) {
            out.push(s!(code));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGET: &str = r#"
        <div class="user">Jan Novák (novakj)</div>
        <ul>
          <li><a href="/courses/BI-PA1">BI-PA1</a></li>
          <li><a href="/courses/BI-ZMA/">BI-ZMA</a></li>
          <li><a href="/courses/BI-PA1">again</a></li>
          <li><a href="/help">help</a></li>
        </ul>
    "#;

    #[test]
    fn username_from_parentheses() {
        assert_eq!(parse_username(WIDGET).as_deref(), Some("novakj"));
    }

    #[test]
    fn username_without_parentheses_is_whole_text() {
        assert_eq!(parse_username(r#"<div class="user"> guest </div>"#).as_deref(), Some("guest"));
        assert_eq!(parse_username("<p>no user box</p>"), None);
    }

    #[test]
    fn courses_in_order_without_duplicates() {
        assert_eq!(parse_courses(WIDGET), vec!["BI-PA1", "BI-ZMA"]);
    }
}
