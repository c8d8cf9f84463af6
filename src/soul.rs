//! Calendar of the Soul verse groups: titles, week labels and date ranges.

use crate::blocks::normalize_newlines;
use crate::date_range::{DateRange, parse_date_spec};

/// One verse group: a title line plus everything up to the next title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoulGroup {
    /// Trimmed title line.
    pub title_line: String,
    /// Display label derived from the week numbers in the title,
    /// or the raw title when none are found.
    pub weeks_label: String,
    pub week_a: Option<u32>,
    pub week_b: Option<u32>,
    /// Every date range found on any line of the group, title included.
    pub ranges: Vec<DateRange>,
    /// Full group text, title line included.
    pub block: String,
}

/// A `N 주 (range)` section inside a group block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSection {
    pub week: u32,
    /// Range text as written between the parentheses, trimmed.
    pub range_label: String,
    pub body: String,
}

/// Split a verse document into groups.
///
/// A group starts at any line containing the `CoTS Verses for Weeks`
/// marker (case-insensitive) and runs to the next marker or end of
/// input. Lines before the first marker are dropped.
pub fn parse_soul_groups(text: &str) -> Vec<SoulGroup> {
    let text = normalize_newlines(text);
    let lines: Vec<&str> = text.split('\n').collect();

    let title_indices: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_group_title(line))
        .map(|(i, _)| i)
        .collect();

    let mut groups = Vec::with_capacity(title_indices.len());
    for (i, &start) in title_indices.iter().enumerate() {
        let end = title_indices.get(i + 1).copied().unwrap_or(lines.len());
        let title_line = lines[start].trim().to_string();
        let block = lines[start..end].join("\n").trim().to_string();
        let ranges = lines[start..end].iter().filter_map(|line| date_spec_in_line(line)).collect();
        let (weeks_label, week_a, week_b) = extract_weeks_label(&title_line);
        groups.push(SoulGroup { title_line, weeks_label, week_a, week_b, ranges, block });
    }
    groups
}

/// First group with a range containing the given month/day.
pub fn find_group_for_date(groups: &[SoulGroup], month: u32, day: u32) -> Option<&SoulGroup> {
    groups.iter().find(|group| group.ranges.iter().any(|range| range.contains(month, day)))
}

/// Split a group block into its per-week sections.
///
/// A section starts at a line of the form `N 주 (range)` and runs to the
/// next such line or end of block. Blocks without week headers yield an
/// empty list and are rendered whole.
pub fn split_week_sections(block: &str) -> Vec<WeekSection> {
    let block = normalize_newlines(block);
    let lines: Vec<&str> = block.split('\n').collect();

    let mut heads: Vec<(usize, u32, String)> = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if let Some(caps) = regex!(r"^\s*(\d{1,2})\s*주\s*\(([^)]+)\)\s*$").captures(line) {
            if let Ok(week) = caps[1].parse() {
                heads.push((i, week, caps[2].trim().to_string()));
            }
        }
    }

    let mut sections = Vec::with_capacity(heads.len());
    for (i, (start, week, range_label)) in heads.iter().enumerate() {
        let end = heads.get(i + 1).map_or(lines.len(), |&(next, _, _)| next);
        let body = lines[start + 1..end].join("\n").trim().to_string();
        sections.push(WeekSection { week: *week, range_label: range_label.clone(), body });
    }
    sections
}

fn is_group_title(line: &str) -> bool {
    regex!(r"(?i)CoTS\s+Verses\s+for\s+Weeks").is_match(line)
}

/// Date range from a line's outermost parentheses, if the text between
/// them mentions a month.
fn date_spec_in_line(line: &str) -> Option<DateRange> {
    let line = line.trim();
    let open = line.find('(')?;
    let close = line.rfind(')')?;
    if open >= close {
        return None;
    }
    let inside = &line[open + 1..close];
    if !inside.contains('월') {
        return None;
    }
    parse_date_spec(inside)
}

/// Label and week numbers from a group title. Week digits keep their
/// written form in the label.
fn extract_weeks_label(title_line: &str) -> (String, Option<u32>, Option<u32>) {
    let title = title_line.trim();

    if let Some(caps) = regex!(r"(?i)Weeks\s+(\d{1,2})\s+and\s+(\d{1,2})").captures(title) {
        let label = format!("Weeks {} & {}", &caps[1], &caps[2]);
        return (label, caps[1].parse().ok(), caps[2].parse().ok());
    }

    if let Some(caps) = regex!(r"(?i)Weeks\s+(\d{1,2})").captures(title) {
        return (format!("Weeks {}", &caps[1]), caps[1].parse().ok(), None);
    }

    (title.to_string(), None, None)
}
