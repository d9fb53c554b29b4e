use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CurriculumSource};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use workshop_core::{CourseProgress, SectionProgress};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDbUrl { raw: String },
    InvalidCurriculumPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidCurriculumPath { raw } => {
                write!(f, "invalid --curriculum value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--db <sqlite_url>] [--curriculum <path>]");
    eprintln!("  cargo run -p app -- status [--db <sqlite_url>] [--curriculum <path>]");
    eprintln!("  cargo run -p app -- reset  [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://workshop.sqlite3");
    eprintln!("  --curriculum <bundled>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  WORKSHOP_DB_URL, WORKSHOP_CURRICULUM, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Status,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "status" => Some(Self::Status),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    curriculum: CurriculumSource,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("WORKSHOP_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(
                || normalize_sqlite_url("sqlite://workshop.sqlite3".into()),
                normalize_sqlite_url,
            );
        let mut curriculum = std::env::var("WORKSHOP_CURRICULUM")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or(CurriculumSource::Bundled, |value| {
                CurriculumSource::File(PathBuf::from(value))
            });

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--curriculum" => {
                    let value = require_value(args, "--curriculum")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCurriculumPath { raw: value });
                    }
                    curriculum = CurriculumSource::File(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, curriculum })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn parse_command(argv: &mut Vec<String>) -> Result<Option<Command>, ArgsError> {
    // No subcommand (or only flags) launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h" | "help") => return Ok(None),
        Some(first) if first.starts_with("--") => return Ok(Some(Command::Ui)),
        Some(first) => {
            Command::from_arg(first).ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?
        }
    };
    if !argv.is_empty() {
        argv.remove(0);
    }
    Ok(Some(cmd))
}

fn print_status(services: &AppServices) {
    let curriculum = services.curriculum();
    let progress = services.progress().snapshot();

    println!("{}", curriculum.info().title);
    for (idx, section) in curriculum.sections().iter().enumerate() {
        let stats = SectionProgress::of(section, &progress);
        let marker = if stats.is_complete() { "x" } else { " " };
        println!(
            "[{marker}] {}. {}: {}/{} ({}%)",
            idx + 1,
            section.title(),
            stats.completed(),
            stats.total(),
            stats.percent()
        );
    }

    let course = CourseProgress::of(&curriculum, &progress);
    let state = if course.is_complete() {
        "completed"
    } else {
        "in progress"
    };
    println!(
        "course: {}/{} steps ({}%), {state}",
        course.completed(),
        course.total(),
        course.percent()
    );
}

fn launch_ui(services: AppServices) {
    let store = services.progress();
    store.subscribe(|progress| {
        debug!(completed = progress.completed_count(), "progress changed");
    });

    let title = services.curriculum().info().title.clone();
    let app: Arc<dyn UiApp> = Arc::new(services);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();
    let cmd = match parse_command(&mut argv) {
        Ok(Some(cmd)) => cmd,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            print_usage();
            return Err(err.into());
        }
    };

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    debug!(?cmd, ?parsed, "arguments parsed");

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;

    // The desktop launcher drives its own event loop, so storage setup runs on a
    // runtime we own and keep alive for the lifetime of the window.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let services =
        runtime.block_on(AppServices::new_sqlite(&parsed.db_url, &parsed.curriculum))?;
    info!(db = %parsed.db_url, "storage ready");

    match cmd {
        Command::Ui => {
            launch_ui(services);
            drop(runtime);
        }
        Command::Status => print_status(&services),
        Command::Reset => {
            runtime.block_on(services.progress().reset());
            println!("progress cleared");
        }
    }
    Ok(())
}

/// The `RUST_LOG` directives when present and valid, `info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
