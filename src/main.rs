mod logging;
mod report;

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use chrono_english::Dialect;
use simsang::{Almanac, CycleConfig};

const DEFAULT_DATA_DIR: &str = "data";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    logging::init(config.verbosity);

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

enum Mode {
    Full,
    Calc,
    Journal,
}

struct CliConfig {
    date: NaiveDate,
    data_dir: PathBuf,
    mode: Mode,
    color: bool,
    verbosity: u8,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut date: Option<String> = None;
    let mut data_dir = PathBuf::from(DEFAULT_DATA_DIR);
    let mut mode = Mode::Full;
    let mut color = io::stdout().is_terminal();
    let mut verbosity: u8 = 0;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("simsang {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--calc" => mode = Mode::Calc,
            "--journal" => mode = Mode::Journal,
            "-v" => verbosity += 1,
            "-vv" => verbosity += 2,
            "-vvv" => verbosity += 3,
            "--date" | "-d" => {
                let value = args.next().ok_or_else(|| "error: --date expects a value".to_string())?;
                if date.is_some() {
                    return Err("error: date provided multiple times".to_string());
                }
                date = Some(value);
            }
            "--data" => {
                let value = args.next().ok_or_else(|| "error: --data expects a value".to_string())?;
                data_dir = PathBuf::from(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if date.is_some() {
                        return Err("error: date provided multiple times".to_string());
                    }
                    date = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--date=") => {
                let value = arg.trim_start_matches("--date=");
                if date.is_some() {
                    return Err("error: date provided multiple times".to_string());
                }
                date = Some(value.to_string());
            }
            _ if arg.starts_with("--data=") => {
                data_dir = PathBuf::from(arg.trim_start_matches("--data="));
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if date.is_some() {
                    return Err("error: date provided multiple times".to_string());
                }
                date = Some(rest);
                break;
            }
        }
    }

    let date = match date {
        Some(value) => parse_date(value.trim())?,
        None => Local::now().date_naive(),
    };

    Ok(CliConfig { date, data_dir, mode, color, verbosity })
}

fn run(config: &CliConfig) -> Result<(), String> {
    let group_text = read_document(&config.data_dir.join("gua.txt"))?;
    let line_text = read_document(&config.data_dir.join("yao.txt"))?;
    let soul_text = read_document(&config.data_dir.join("soul.txt"))?;

    let almanac = Almanac::new(CycleConfig::default(), &group_text, &line_text, &soul_text)
        .map_err(|err| err.to_string())?;

    match config.mode {
        Mode::Full => report::print_day(&almanac, config.date, config.color),
        Mode::Calc => report::print_position(&almanac, config.date, config.color),
        Mode::Journal => report::print_journal(&almanac, config.date, config.color),
    }
    Ok(())
}

fn read_document(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|err| format!("cannot read {}: {err}", path.display()))
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    chrono_english::parse_date_string(value, Local::now(), Dialect::Us)
        .map(|resolved| resolved.date_naive())
        .map_err(|_| {
            format!("error: invalid date '{value}' (expected YYYY-MM-DD or an expression like 'tomorrow')")
        })
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "simsang {version}

Daily hexagram and line almanac CLI.

Usage:
  simsang [OPTIONS] [--] [date...]
  simsang [OPTIONS] --date <date>

Options:
  -d, --date <date>          Date to read, as YYYY-MM-DD or a natural English
                             expression like 'tomorrow'. Defaults to today.
  --data <dir>               Directory holding gua.txt, yao.txt and soul.txt.
                             Default: {default_data_dir}
  --calc                     Print only the cycle position.
  --journal                  Print the date's reflection prompt.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -v, -vv, -vvv              Increase log verbosity.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        default_data_dir = DEFAULT_DATA_DIR
    )
}
