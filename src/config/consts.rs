// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://edux.fit.cvut.cz";
pub const TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("edux_status/", env!("CARGO_PKG_VERSION"));

// Dashboard widget (course list)
pub const DASHBOARD_PATH: &str = "/lib/exe/ajax.php?dashboard_current_lang=cs";
pub const DASHBOARD_FORM: &[(&str, &str)] = &[
    ("call", "dashboard_widget_update"),
    ("widget_real_id", "w_actual_courses_fit"),
    ("widget_max", "0"),
    ("lazy", "1"),
];

// Report page
pub const OVERVIEW_TABLES: usize = 2;
pub const SUMMARY_HEADING: &str = "<h2><span>Shrnutí</span></h2>";
pub const LOGIN_LABEL: &str = "login";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
