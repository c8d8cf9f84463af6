//! Daily hexagram and line almanac core: fixed-cycle date arithmetic plus
//! structured parsing of numbered reading documents and Calendar of the
//! Soul verse groups.

#[macro_use]
mod macros;

mod almanac;
mod blocks;
mod config;
mod cycle;
mod date_range;
mod soul;

pub mod journal;
pub mod sigil;

pub use almanac::{Almanac, DailyReading, SoulBody, SoulReading};
pub use blocks::{GroupHeader, LineRecord, parse_numbered_blocks, split_group_header, split_line_record};
pub use config::{ConfigError, CycleConfig};
pub use cycle::{DayPosition, cycle_start, day_index, group_number, in_range, line_number, position};
pub use date_range::{DateRange, MonthDay, normalize_spec, ordinal, parse_date_spec};
pub use soul::{SoulGroup, WeekSection, find_group_for_date, parse_soul_groups, split_week_sections};
