//! Parsed almanac documents bundled with a cycle configuration.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::blocks::{self, GroupHeader, LineRecord};
use crate::config::{ConfigError, CycleConfig};
use crate::cycle::{self, DayPosition};
use crate::soul::{self, SoulGroup, WeekSection};

/// A full almanac: hexagram and line documents split into numbered
/// blocks, verse groups, and the cycle that maps dates onto them.
#[derive(Debug, Clone)]
pub struct Almanac {
    config: CycleConfig,
    groups: BTreeMap<u32, String>,
    lines: BTreeMap<u32, String>,
    soul_groups: Vec<SoulGroup>,
}

/// Everything the almanac has to say about one in-range day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReading {
    pub position: DayPosition,
    pub group: GroupHeader,
    pub line: LineRecord,
    /// Line number, doubling as the sigil image number.
    pub sigil: u32,
}

/// The verse group covering a date, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoulReading {
    pub weeks_label: String,
    pub week_a: Option<u32>,
    pub week_b: Option<u32>,
    pub body: SoulBody,
}

/// Body of a verse group reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoulBody {
    /// The group's first two week sections, shown side by side.
    Columns(WeekSection, WeekSection),
    /// The whole group block, shown as-is when it has fewer than two
    /// week sections.
    Unsectioned(String),
}

impl Almanac {
    /// Parse the three documents under the given configuration.
    ///
    /// Fails only when the configuration is invalid; empty or unlabeled
    /// documents parse to empty maps and simply produce no readings.
    pub fn new(
        config: CycleConfig,
        group_text: &str,
        line_text: &str,
        soul_text: &str,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let groups = blocks::parse_numbered_blocks(group_text);
        let lines = blocks::parse_numbered_blocks(line_text);
        let soul_groups = soul::parse_soul_groups(soul_text);
        tracing::debug!(
            groups = groups.len(),
            lines = lines.len(),
            soul_groups = soul_groups.len(),
            "parsed almanac documents"
        );

        Ok(Self { config, groups, lines, soul_groups })
    }

    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Cycle position of a date, whether or not it has a reading.
    pub fn position(&self, date: NaiveDate) -> Option<DayPosition> {
        cycle::position(date, &self.config)
    }

    /// Reading for a date, or `None` when the date is outside the cycle
    /// or either of its blocks is missing from the documents.
    pub fn daily_reading(&self, date: NaiveDate) -> Option<DailyReading> {
        let position = self.position(date)?;
        if !position.in_range {
            return None;
        }

        let line_number = u32::try_from(position.line_number).ok()?;
        let group_number = u32::try_from(position.group_number).ok()?;
        let group = blocks::split_group_header(self.groups.get(&group_number)?);
        let line = blocks::split_line_record(self.lines.get(&line_number)?);

        Some(DailyReading { position, group, line, sigil: line_number })
    }

    /// Verse group reading for a date's month and day.
    pub fn soul_reading(&self, date: NaiveDate) -> Option<SoulReading> {
        let group = soul::find_group_for_date(&self.soul_groups, date.month(), date.day())?;

        let mut sections = soul::split_week_sections(&group.block).into_iter();
        let body = match (sections.next(), sections.next()) {
            (Some(first), Some(second)) => SoulBody::Columns(first, second),
            _ => SoulBody::Unsectioned(group.block.clone()),
        };

        Some(SoulReading {
            weeks_label: group.weeks_label.clone(),
            week_a: group.week_a,
            week_b: group.week_b,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUPS: &str = "1. 乾爲天\nThe Creative\n    (heaven doubled)\n\n2. 坤爲地\nThe Receptive\n";
    const LINES: &str = "1. 初九\n\nHidden dragon.\n\nDo not act.\n\n2. 九二\n\nDragon in the field.\n\n7. 初六\n\nSeventh line summary.\n";
    const SOUL: &str = "CoTS Verses for Weeks 1 and 2 (1월 1-14)\n1 주 (1월 1-7)\nFirst week verse\n2 주 (1월 8-14)\nSecond week verse\n";

    fn sample() -> Almanac {
        Almanac::new(CycleConfig::default(), GROUPS, LINES, SOUL).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = CycleConfig { start_month: 13, ..CycleConfig::default() };
        assert!(matches!(
            Almanac::new(config, GROUPS, LINES, SOUL),
            Err(ConfigError::InvalidStartMonth { month: 13 })
        ));
    }

    #[test]
    fn reading_on_cycle_start() {
        let reading = sample().daily_reading(date(2024, 1, 1)).unwrap();
        assert_eq!(reading.position.day_index, 0);
        assert_eq!(reading.group.header, "1. 乾爲天");
        assert_eq!(reading.group.meta, "The Creative\n(heaven doubled)");
        assert_eq!(reading.line.title, "1. 初九");
        assert_eq!(reading.line.summary, "Hidden dragon.");
        assert_eq!(reading.line.body, "Do not act.");
        assert_eq!(reading.sigil, 1);
    }

    #[test]
    fn reading_crosses_into_second_group() {
        let reading = sample().daily_reading(date(2024, 1, 7)).unwrap();
        assert_eq!(reading.position.line_number, 7);
        assert_eq!(reading.position.group_number, 2);
        assert_eq!(reading.group.header, "2. 坤爲地");
        assert_eq!(reading.line.title, "7. 初六");
        assert_eq!(reading.sigil, 7);
    }

    #[test]
    fn missing_line_block_yields_no_reading() {
        // Line 3 is absent from the document.
        assert!(sample().daily_reading(date(2024, 1, 3)).is_none());
    }

    #[test]
    fn out_of_range_date_yields_no_reading_but_a_position() {
        let config = CycleConfig { cycle_length: 6, ..CycleConfig::default() };
        let almanac = Almanac::new(config, GROUPS, LINES, SOUL).unwrap();
        let day = date(2024, 1, 7);
        assert!(almanac.daily_reading(day).is_none());
        let pos = almanac.position(day).unwrap();
        assert_eq!(pos.day_index, 6);
        assert!(!pos.in_range);
    }

    #[test]
    fn soul_reading_splits_into_columns() {
        let reading = sample().soul_reading(date(2024, 1, 3)).unwrap();
        assert_eq!(reading.weeks_label, "Weeks 1 & 2");
        assert_eq!(reading.week_a, Some(1));
        assert_eq!(reading.week_b, Some(2));
        match reading.body {
            SoulBody::Columns(first, second) => {
                assert_eq!(first.week, 1);
                assert_eq!(first.body, "First week verse");
                assert_eq!(second.week, 2);
                assert_eq!(second.body, "Second week verse");
            }
            SoulBody::Unsectioned(_) => panic!("expected columns"),
        }
    }

    #[test]
    fn soul_reading_without_sections_shows_whole_block() {
        let soul = "CoTS Verses for Weeks 9 (3월 1-7)\nverse text\nmore verse\n";
        let almanac = Almanac::new(CycleConfig::default(), GROUPS, LINES, soul).unwrap();
        let reading = almanac.soul_reading(date(2024, 3, 5)).unwrap();
        assert_eq!(reading.weeks_label, "Weeks 9");
        match reading.body {
            SoulBody::Unsectioned(block) => {
                assert_eq!(block, "CoTS Verses for Weeks 9 (3월 1-7)\nverse text\nmore verse");
            }
            SoulBody::Columns(..) => panic!("expected unsectioned body"),
        }
    }

    #[test]
    fn soul_reading_outside_all_ranges_is_none() {
        assert!(sample().soul_reading(date(2024, 6, 15)).is_none());
    }

    #[test]
    fn empty_documents_produce_no_readings() {
        let almanac = Almanac::new(CycleConfig::default(), "", "", "").unwrap();
        assert!(almanac.daily_reading(date(2024, 1, 1)).is_none());
        assert!(almanac.soul_reading(date(2024, 1, 1)).is_none());
        assert!(almanac.position(date(2024, 1, 1)).is_some());
    }
}
