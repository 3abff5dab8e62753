// src/check.rs
use std::{
    sync::{atomic::{AtomicUsize, Ordering}, mpsc},
    thread,
    time::Duration,
};

use crate::{
    config::consts::{JITTER_MS, REQUEST_PAUSE_MS},
    config::options::{CheckOptions, CourseSelector, FetchConfig},
    core::Fetch,
    error::{Error, Result},
    progress::Progress,
    specs::{dashboard, report, status::ExtractionResult},
};

/// One course's outcome. Failures are kept as text so one bad page
/// does not sink the whole run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseReport {
    pub course: String,
    pub outcome: std::result::Result<ExtractionResult, String>,
}

/// Compare the configured username against the one the portal shows.
pub fn verify_username(fetcher: &dyn Fetch, config: &FetchConfig) -> Result<String> {
    let expected = config.user()?;
    let home = fetcher.get("")?;
    let found = dashboard::parse_username(&home).unwrap_or_default();
    if found != expected {
        return Err(Error::UsernameMismatch { expected: s!(expected), found });
    }
    Ok(found)
}

pub fn resolve_courses(fetcher: &dyn Fetch, selector: &CourseSelector) -> Result<Vec<String>> {
    match selector {
        CourseSelector::All => Ok(dashboard::fetch(fetcher)?.courses),
        CourseSelector::Named(v) => Ok(v.clone()),
    }
}

/// Check every selected course with a small worker pool.
/// Returns one report per course, sorted by course name.
pub fn check_courses(
    fetcher: &dyn Fetch,
    options: &CheckOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<CourseReport>> {
    let config = &options.fetch;
    // No user, no report pages: fail before spawning anything.
    config.user()?;

    let courses = resolve_courses(fetcher, &options.courses)?;
    if courses.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No courses to check.");
        }
        return Ok(Vec::new());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(courses.len());
    }

    let counter = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<CourseReport>();
    let workers = config.workers.min(courses.len()).max(1);
    let mut reports = Vec::with_capacity(courses.len());

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let (courses, counter) = (&courses, &counter);

            scope.spawn(move || {
                loop {
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    let Some(course) = courses.get(i) else { break };

                    let outcome = report::check(fetcher, config, course).map_err(|e| e.to_string());
                    let _ = tx.send(CourseReport { course: course.clone(), outcome });

                    if i + 1 < courses.len() {
                        let jitter = (i as u64 * 17) % JITTER_MS;
                        thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
                    }
                }
            });
        }
        drop(res_tx); // this thread is sole receiver now

        for report in res_rx {
            if let Err(msg) = &report.outcome {
                loge!("{}: {msg}", report.course);
            }
            if let Some(p) = progress.as_deref_mut() {
                match &report.outcome {
                    Ok(result) => p.item_done(&report.course, result),
                    Err(msg) => p.item_failed(&report.course, msg),
                }
            }
            reports.push(report);
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    reports.sort_by(|a, b| a.course.cmp(&b.course));
    Ok(reports)
}
