//! Month/day range expressions: `M월 D`, `M월 D-D2` and `M월 D-M2월 D2`.

/// Number of days in each month of the fixed non-leap calendar
/// (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_IN_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts (index 0 unused, January starts at ordinal 1).
const MONTH_START_ORDINAL: [u32; 13] = [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// A calendar month/day pair without a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

/// An inclusive month/day range.
///
/// When the start ordinal exceeds the end ordinal the range wraps past
/// year-end (e.g. Dec 28 through Jan 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: MonthDay,
    pub end: MonthDay,
}

impl DateRange {
    /// Whether the given month/day falls inside the range.
    ///
    /// Non-wrapping ranges are closed intervals over ordinals. A wrapping
    /// range (start ordinal > end ordinal) contains a target that lies in
    /// either tail of the year. Equal endpoint ordinals never wrap.
    pub fn contains(&self, month: u32, day: u32) -> bool {
        let (Some(t), Some(s), Some(e)) = (
            ordinal(month, day),
            ordinal(self.start.month, self.start.day),
            ordinal(self.end.month, self.end.day),
        ) else {
            return false;
        };

        if s <= e { s <= t && t <= e } else { t >= s || t <= e }
    }
}

/// Normalize a hand-written date spec before parsing.
///
/// Collapses single spaces inside split numbers ("1 2월" was a recurring
/// authoring typo for "12월"), turns en/em dashes into plain hyphens,
/// collapses whitespace runs and strips whitespace around hyphens.
pub fn normalize_spec(raw: &str) -> String {
    let joined = regex!(r"(\d)\s+(\d)").replace_all(raw.trim(), "$1$2");
    let dashed = regex!(r"[–—]").replace_all(&joined, "-");
    let spaced = regex!(r"\s+").replace_all(&dashed, " ");
    regex!(r"\s*-\s*").replace_all(&spaced, "-").into_owned()
}

/// Parse a date spec into a range.
///
/// Exactly three grammars are recognized, tried in order: a single day
/// (`2월 2`), a same-month span (`2월 2-8`) and a cross-month span
/// (`11월 30-12월 5`). Anything else yields `None` and callers skip the
/// line. Months outside 1..=12 also yield `None`; days are taken as
/// written.
pub fn parse_date_spec(raw: &str) -> Option<DateRange> {
    let spec = normalize_spec(raw);

    if let Some(caps) = regex!(r"^(\d{1,2})월\s*(\d{1,2})$").captures(&spec) {
        let start = month_day(&caps, 1, 2)?;
        return Some(DateRange { start, end: start });
    }

    if let Some(caps) = regex!(r"^(\d{1,2})월\s*(\d{1,2})-(\d{1,2})$").captures(&spec) {
        let start = month_day(&caps, 1, 2)?;
        let end = MonthDay { month: start.month, day: capture_u32(&caps, 3)? };
        return Some(DateRange { start, end });
    }

    if let Some(caps) = regex!(r"^(\d{1,2})월\s*(\d{1,2})-(\d{1,2})월\s*(\d{1,2})$").captures(&spec) {
        let start = month_day(&caps, 1, 2)?;
        let end = month_day(&caps, 3, 4)?;
        return Some(DateRange { start, end });
    }

    None
}

/// Day-of-year for a month/day pair in the fixed non-leap calendar.
///
/// Returns `None` for months outside 1..=12. Days are not validated
/// against the month length; a day past the end of its month simply
/// extends into the following month's ordinals, which keeps hand-authored
/// ranges like "2월 29" usable.
pub fn ordinal(month: u32, day: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(MONTH_START_ORDINAL[month as usize] + day - 1)
}

fn month_day(caps: &regex::Captures<'_>, month_idx: usize, day_idx: usize) -> Option<MonthDay> {
    let month = capture_u32(caps, month_idx)?;
    let day = capture_u32(caps, day_idx)?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(MonthDay { month, day })
}

fn capture_u32(caps: &regex::Captures<'_>, idx: usize) -> Option<u32> {
    caps.get(idx)?.as_str().parse().ok()
}
