use chrono::NaiveDate;
use simsang::{Almanac, DailyReading, SoulBody, SoulReading, journal, sigil};

const EMPTY_PLACEHOLDER: &str = "해당 날짜는 비움";

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Full report: position, reading and verse group for one date.
pub fn print_day(almanac: &Almanac, date: NaiveDate, color: bool) {
    let palette = ansi::Palette::new(color);
    print_banner(date, &palette);

    println!("\n{}", palette.paint("━━━ Position ━━━", ansi::GRAY));
    print_position_line(almanac, date, &palette);

    println!("\n{}", palette.paint("━━━ Reading ━━━", ansi::GRAY));
    match almanac.daily_reading(date) {
        Some(reading) => print_reading(&reading, &palette),
        None => println!("{}", palette.dim(format!("  {EMPTY_PLACEHOLDER}"))),
    }

    println!("\n{}", palette.paint("━━━ Calendar of the Soul ━━━", ansi::GRAY));
    match almanac.soul_reading(date) {
        Some(reading) => print_soul(&reading, &palette),
        None => println!("{}", palette.dim(format!("  {EMPTY_PLACEHOLDER}"))),
    }
    println!();
}

/// Position-only report, for checking cycle arithmetic.
pub fn print_position(almanac: &Almanac, date: NaiveDate, color: bool) {
    let palette = ansi::Palette::new(color);
    print_banner(date, &palette);

    println!("\n{}", palette.paint("━━━ Position ━━━", ansi::GRAY));
    print_position_line(almanac, date, &palette);
    println!();
}

/// Journal report: the date's guided reflection prompt and entry key.
pub fn print_journal(almanac: &Almanac, date: NaiveDate, color: bool) {
    let palette = ansi::Palette::new(color);
    print_banner(date, &palette);

    println!("\n{}", palette.paint("━━━ Journal ━━━", ansi::GRAY));
    match almanac.daily_reading(date) {
        Some(reading) => {
            println!("  {}", palette.paint("성찰 질문:", ansi::BLUE));
            println!("  {}", journal::prompt_for(&reading.line.title, date));
            println!();
            println!("  {}", palette.dim(format!("entry key: {}", journal::entry_key(date))));
        }
        None => println!("{}", palette.dim(format!("  {EMPTY_PLACEHOLDER}"))),
    }
    println!();
}

fn print_banner(date: NaiveDate, palette: &ansi::Palette) {
    let banner = format!("☰  {} ({})", journal::korean_date(date), date.format("%Y-%m-%d"));
    println!("\n{}", palette.bold(palette.paint(banner, ansi::CYAN)));
}

fn print_position_line(almanac: &Almanac, date: NaiveDate, palette: &ansi::Palette) {
    let Some(pos) = almanac.position(date) else {
        println!("{}", palette.dim("  no cycle position for this date"));
        return;
    };

    println!(
        "  day index: {}  {}  line: {}  {}  group: {}",
        palette.bold(pos.day_index.to_string()),
        palette.dim("│"),
        palette.bold(pos.line_number.to_string()),
        palette.dim("│"),
        palette.bold(pos.group_number.to_string()),
    );
    if !pos.in_range {
        println!("  {}", palette.paint("outside the reading cycle", ansi::YELLOW));
    }
}

fn print_reading(reading: &DailyReading, palette: &ansi::Palette) {
    println!("  {}", palette.bold(palette.paint(&reading.group.header, ansi::GREEN)));
    for line in reading.group.meta.lines() {
        println!("  {}", palette.dim(line));
    }

    println!();
    println!("  {}", palette.paint(&reading.line.title, ansi::BLUE));
    let summary =
        if reading.line.summary.is_empty() { "(요약 없음)" } else { reading.line.summary.as_str() };
    for line in summary.lines() {
        println!("  {line}");
    }

    println!();
    let body = if reading.line.body.is_empty() { "(상세 없음)" } else { reading.line.body.as_str() };
    for line in body.lines() {
        println!("  {line}");
    }

    println!();
    println!("  {} {}", palette.dim("sigil:"), palette.paint(sigil::asset_name(reading.sigil), ansi::YELLOW));
}

fn print_soul(reading: &SoulReading, palette: &ansi::Palette) {
    println!("  {}", palette.bold(palette.paint(&reading.weeks_label, ansi::GREEN)));

    match &reading.body {
        SoulBody::Columns(first, second) => {
            for section in [first, second] {
                println!();
                println!(
                    "  {} {}",
                    palette.bold(format!("{} 주", section.week)),
                    palette.dim(format!("({})", section.range_label)),
                );
                for line in section.body.lines() {
                    println!("  {line}");
                }
            }
        }
        SoulBody::Unsectioned(block) => {
            println!();
            for line in block.lines() {
                println!("  {line}");
            }
        }
    }
}
