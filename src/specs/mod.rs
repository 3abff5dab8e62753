// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge of the edux portal: *where the ground truth lives in
//! the HTML* and *how to read it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of the dashboard widget and the classification report.
//! - **Label sets & precedence** for the status heuristics (`status`).
//! - **Table cleanup** before scanning (`normalize`).
//! - Thin `fetch` wrappers that take a [`crate::core::Fetch`] and return shaped data.
//!
//! ## What does **not** live here
//! - Networking details, timeouts, user agent (`core::net`).
//! - Running many courses, progress reporting (`check`).
//! - Rendering or numeric interpretation of results (callers / CLI).
//!
//! ## Typical call chain
//! ```text
//! CLI → check::check_courses → specs::report::check
//!                               ↘ fetch → normalize ×2 → assemble → status::extract
//! ```
//!
//! ## Conventions & invariants
//! - Cell labels match on **exact, case-sensitive, trimmed** text.
//! - The value of a label is the **next `<td>` in the same row**, nothing else.
//! - Parsing never fails: absence degrades to `None` / `Status::None`.
//!
//! ## Testing notes
//! - Everything here is testable **offline** against inline HTML snippets.
pub mod dashboard;
pub mod normalize;
pub mod report;
pub mod status;
