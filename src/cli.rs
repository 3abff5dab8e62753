// src/cli.rs
use std::{fs, path::PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, bail};
use serde_json::json;

use crate::{
    check::{self, CourseReport},
    config::options::{CheckOptions, CourseSelector, FetchConfig},
    core::HttpFetcher,
    error::Error,
    progress::Progress,
    specs::{report, status::{self, ExtractionResult}},
};

/// Course completion status and point totals from edux grade reports.
#[derive(Debug, Parser)]
#[command(name = "edux_status", version)]
pub struct Args {
    /// Course codes to check, e.g. BI-PA1
    pub courses: Vec<String>,

    /// Read a saved report page instead of fetching
    #[arg(long, value_name = "PATH", conflicts_with_all = ["courses", "all"])]
    pub file: Option<PathBuf>,

    /// TOML config (base_url, username, timeout_secs, user_agent, workers)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    #[arg(short, long)]
    pub user: Option<String>,

    /// Check every course listed on the dashboard
    #[arg(short, long)]
    pub all: bool,

    /// Confirm the portal shows the same username before checking
    #[arg(long)]
    pub verify: bool,

    /// Print the report tables as key/value pairs instead of the status
    #[arg(long)]
    pub tables: bool,

    #[arg(long)]
    pub json: bool,

    /// -v info, -vv debug
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub fn run(args: Args) -> Result<()> {
    crate::log::init(args.verbose);

    if let Some(path) = &args.file {
        let raw = fs::read_to_string(path)?;
        let content = report::assemble(&raw).ok_or(Error::NoData)?;
        let label = path.display().to_string();
        if args.tables {
            print_tables(&label, &content, args.json);
        } else {
            print_reports(&[CourseReport { course: label, outcome: Ok(status::extract(&content)) }], args.json);
        }
        return Ok(());
    }

    let options = check_options(&args)?;
    let fetcher = HttpFetcher::new(options.fetch.clone())?;

    if args.verify {
        let user = check::verify_username(&fetcher, &options.fetch)?;
        eprintln!("Logged in as {user}");
    }

    if args.tables {
        for course in check::resolve_courses(&fetcher, &options.courses)? {
            match report::fetch(&fetcher, &options.fetch, &course) {
                Ok(content) => print_tables(&course, &content, args.json),
                Err(e) => {
                    loge!("{course}: {e}");
                    eprintln!("{course}: FAILED ({e})");
                }
            }
        }
        return Ok(());
    }

    let mut progress = CliProgress::default();
    let reports = check::check_courses(&fetcher, &options, Some(&mut progress))?;
    print_reports(&reports, args.json);
    Ok(())
}

fn check_options(args: &Args) -> Result<CheckOptions> {
    let mut fetch = match &args.config {
        Some(path) => FetchConfig::load(path)?,
        None => FetchConfig::default(),
    };
    if let Some(url) = &args.base_url {
        fetch.base_url = url.clone();
    }
    if let Some(user) = &args.user {
        fetch.username = Some(user.clone());
    }

    let courses = if args.all {
        CourseSelector::All
    } else if !args.courses.is_empty() {
        CourseSelector::Named(args.courses.clone())
    } else {
        bail!("Specify --all, one or more courses, or --file <PATH>");
    };

    Ok(CheckOptions { fetch, courses })
}

fn print_reports(reports: &[CourseReport], as_json: bool) {
    if as_json {
        let out: Vec<_> = reports.iter().map(report_json).collect();
        println!("{}", serde_json::Value::Array(out));
        return;
    }
    for r in reports {
        match &r.outcome {
            Ok(ExtractionResult { status, sum_of_points }) => {
                println!("{}\t{}\t{}", r.course, status, sum_of_points.as_deref().unwrap_or("-"));
            }
            Err(msg) => println!("{}\terror\t{msg}", r.course),
        }
    }
}

fn report_json(r: &CourseReport) -> serde_json::Value {
    match &r.outcome {
        Ok(result) => json!({ "course": r.course, "result": result }),
        Err(msg) => json!({ "course": r.course, "error": msg }),
    }
}

fn print_tables(label: &str, content: &str, as_json: bool) {
    let tables = report::summary_tables(content);
    if as_json {
        println!("{}", json!({ "course": label, "tables": tables }));
        return;
    }
    println!("# {label}");
    for table in &tables {
        for (key, value) in table {
            println!("{key}: {value}");
        }
        println!("---");
    }
}

/// Progress lines on stderr, so stdout stays clean for piping.
#[derive(Default)]
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Checking {total} course(s)…");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, course: &str, result: &ExtractionResult) {
        self.done += 1;
        eprintln!("[{}/{}] {course}: {}", self.done, self.total, result.status);
    }

    fn item_failed(&mut self, course: &str, error: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {course}: FAILED ({error})", self.done, self.total);
    }
}
