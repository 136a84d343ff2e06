//! CLI entry point for picwalk

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::time::{Duration, SystemTime};

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use picwalk::{
    Bounds, Navigator, OutputConfig, ScanConfig, ScanStats, Scanner, Session, TerminalKeys,
    TerminalViewer, print_json, print_listing, print_stats, print_stats_json,
    print_traversal_errors,
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "picwalk")]
#[command(about = "Walk a directory tree and page through every image in it")]
#[command(version)]
struct Args {
    /// Directory to browse
    dir: PathBuf,

    /// Maximum number of rows in the display area
    #[arg(short = 'r', long = "rows", value_name = "N", default_value_t = Bounds::DEFAULT_ROWS,
          value_parser = clap::value_parser!(u32).range(1..))]
    rows: u32,

    /// Maximum number of columns in the display area
    #[arg(short = 'c', long = "cols", value_name = "N", default_value_t = Bounds::DEFAULT_COLS,
          value_parser = clap::value_parser!(u32).range(1..))]
    cols: u32,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "N",
          value_parser = clap::value_parser!(u64).range(1..))]
    level: Option<u64>,

    /// Skip entries whose name matches PATTERN (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Only include images modified more recently than DURATION ago
    /// Duration format: 30s, 5m, 1h, 7d, 2w, 3M, 1y
    #[arg(long = "newer", value_name = "DURATION")]
    newer: Option<String>,

    /// Only include images modified longer than DURATION ago
    /// Duration format: 30s, 5m, 1h, 7d, 2w, 3M, 1y
    #[arg(long = "older", value_name = "DURATION")]
    older: Option<String>,

    /// Print the discovered images, one per line, and exit
    #[arg(long = "list", conflicts_with_all = ["json", "stats"])]
    list: bool,

    /// Print the scan as JSON and exit
    #[arg(long = "json")]
    json: bool,

    /// Print scan statistics and exit (as JSON with --json)
    #[arg(long = "stats")]
    stats: bool,

    /// Do not paint image previews in the terminal
    #[arg(long = "no-preview")]
    no_preview: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Accept the single-dash long forms `-rows` and `-cols`.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            let Some(s) = arg.to_str() else {
                return arg;
            };
            for flag in ["rows", "cols"] {
                let single = format!("-{}", flag);
                if s == single {
                    return OsString::from(format!("--{}", flag));
                }
                if let Some(value) = s.strip_prefix(&format!("{}=", single)) {
                    return OsString::from(format!("--{}={}", flag, value));
                }
            }
            arg
        })
        .collect()
}

/// Parse a duration string like "1h", "7d", "2w" into a Duration.
fn parse_duration_string(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

/// Turn a duration like "7d" into the point in time that long ago.
fn parse_cutoff(s: &str) -> Result<SystemTime, String> {
    let duration = parse_duration_string(s)?;
    SystemTime::now()
        .checked_sub(duration)
        .ok_or_else(|| "out of range".to_string())
}

fn parse_time_filter(flag: &str, value: Option<&String>) -> Option<SystemTime> {
    value.map(|s| {
        parse_cutoff(s).unwrap_or_else(|e| {
            eprintln!("picwalk: invalid --{} duration '{}': {}", flag, s, e);
            process::exit(1);
        })
    })
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("picwalk={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() {
    let args = match Args::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        },
    };

    init_tracing(args.verbose);

    let scan_config = ScanConfig {
        max_depth: args.level.map(|l| l as usize),
        ignore_patterns: args.ignore.clone(),
        newer_than: parse_time_filter("newer", args.newer.as_ref()),
        older_than: parse_time_filter("older", args.older.as_ref()),
    };

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        preview: !args.no_preview,
    };

    let interactive = !(args.list || args.json || args.stats);
    if interactive {
        println!("Browsing directory: {}", args.dir.display());
        println!("Rows: {}", args.rows);
        println!("Columns: {}", args.cols);
    }

    let report = match Scanner::new(scan_config).scan(&args.dir) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("picwalk: {}", e);
            process::exit(1);
        }
    };

    if !report.errors.is_empty() {
        let mut stderr = output_config.stderr();
        let _ = print_traversal_errors(&mut stderr, &report.errors);
    }

    let result = if args.stats {
        let stats = ScanStats::from(&report);
        if args.json {
            print_stats_json(&stats)
        } else {
            print_stats(&stats, output_config.use_color)
        }
    } else if args.json {
        print_json(&report)
    } else if args.list {
        print_listing(&mut output_config.stdout(), &report)
    } else {
        if report.records.is_empty() {
            println!("No image files found in the directory.");
            return;
        }

        let viewer = TerminalViewer::new(Bounds::new(args.rows, args.cols))
            .with_preview(output_config.preview);
        let mut session = Session::new(Navigator::new(report.records), viewer, TerminalKeys::new());
        let mut stdout = output_config.stdout();
        if let Err(e) = session.run(&mut stdout) {
            eprintln!("picwalk: error: {}", e);
            process::exit(1);
        }
        Ok(())
    };

    if let Err(e) = result {
        eprintln!("picwalk: error writing output: {}", e);
        process::exit(1);
    }
}
