//! Guided journal prompts and plain-text journal exports.

use chrono::{Datelike, NaiveDate};

const KOREAN_WEEKDAYS: [&str; 7] = ["월요일", "화요일", "수요일", "목요일", "금요일", "토요일", "일요일"];

/// A saved journal entry for one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: NaiveDate,
    /// The reflection prompt shown when the entry was written. May be
    /// empty for entries saved without one.
    pub prompt: String,
    pub text: String,
}

/// Reduce a line title to the name used inside prompts.
///
/// Drops everything from the first parenthesis on, the leading `N.`
/// label, CJK ideographs and punctuation, and stray dots. Hangul stays.
/// Falls back to the pre-parenthesis text when nothing survives.
pub fn clean_title(title: &str) -> String {
    let before_paren = title.split_once('(').map_or(title, |(head, _)| head);
    let cleaned = regex!(r"^\d+\.\s*").replace(before_paren, "");
    let cleaned = regex!(r"[\u{3000}-\u{303F}\u{4E00}-\u{9FFF}\u{3400}-\u{4DBF}\u{F900}-\u{FAFF}]+")
        .replace_all(&cleaned, "");
    let cleaned = cleaned.replace('.', "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() { before_paren.trim().to_string() } else { cleaned.to_string() }
}

/// Reflection prompt for a date's line title.
///
/// The template rotates with the day of year, so the same date always
/// gets the same question.
pub fn prompt_for(title: &str, date: NaiveDate) -> String {
    let name = clean_title(title);
    match date.ordinal0() % 4 {
        0 => format!("\"{name}\"의 상징을 묵상하며, 오늘 당신의 상황과 어떻게 연결될까요?"),
        1 => format!("\"{name}\"의 지혜가 오늘 당신이 마주한 과제에 어떤 통찰을 줄 수 있을까요?"),
        2 => format!("오늘 하루, \"{name}\"의 가르침을 어떻게 행동으로 옮길 수 있을까요?"),
        _ => format!("\"{name}\"의 관점에서 보았을 때, 내면에서 변화가 필요한 부분은 무엇인가요?"),
    }
}

/// Storage key for a date's entry, `journal_YYYY-MM-DD`.
pub fn entry_key(date: NaiveDate) -> String {
    format!("journal_{}", date.format("%Y-%m-%d"))
}

/// One entry as a standalone text file, BOM first so spreadsheet and
/// editor imports pick up the encoding.
pub fn export_entry(entry: &JournalEntry) -> String {
    format!(
        "\u{FEFF}날짜: {}\n\n성찰 질문:\n{}\n\n나의 기록:\n------------------\n{}",
        english_date(entry.date),
        entry.prompt,
        entry.text,
    )
}

/// All entries as one archive file, newest first. Entries without a
/// prompt omit the prompt line.
pub fn export_archive(entries: &[JournalEntry]) -> String {
    let mut sorted: Vec<&JournalEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut out = String::from("\u{FEFF}SimSang Journal Archive\n=======================\n\n");
    for entry in sorted {
        out.push_str(&format!("[{} ({})]\n", korean_date(entry.date), entry.date.format("%Y-%m-%d")));
        if !entry.prompt.is_empty() {
            out.push_str(&format!("성찰 질문: {}\n\n", entry.prompt));
        }
        out.push_str(&format!("나의 기록:\n{}\n", entry.text));
        out.push_str("----------------------------------------\n\n");
    }
    out
}

/// `Monday, January 1, 2024`.
fn english_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// `2024년 1월 1일 월요일`.
pub fn korean_date(date: NaiveDate) -> String {
    let weekday = KOREAN_WEEKDAYS[date.weekday().num_days_from_monday() as usize];
    format!("{}년 {}월 {}일 {}", date.year(), date.month(), date.day(), weekday)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn clean_title_cases() {
        let cases: Vec<(&str, &str)> = vec![
            ("The Army", "336. The Army 師 (3/336)"),
            ("The Army", "7. The Army 師"),
            ("Nine in the second place", "2. Nine in the second place."),
            ("잠긴 용", "1. 잠긴 용 初九"),
            ("The Creative", "The Creative"),
        ];
        for (expected, input) in cases {
            assert_eq!(clean_title(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn clean_title_falls_back_when_nothing_survives() {
        // A title that is nothing but a label and ideographs cleans to
        // empty, so the pre-parenthesis text comes back instead.
        assert_eq!(clean_title("31. 初九 (1/366)"), "31. 初九");
        assert_eq!(clean_title("初九"), "初九");
    }

    #[test]
    fn prompts_are_deterministic_per_date() {
        let day = date(2024, 3, 15);
        assert_eq!(prompt_for("7. The Army 師", day), prompt_for("7. The Army 師", day));
    }

    #[test]
    fn prompt_templates_rotate_with_day_of_year() {
        // Jan 1 has day-of-year index 0 and picks the first template.
        let q = prompt_for("7. The Army 師", date(2024, 1, 1));
        assert!(q.contains("\"The Army\""));
        assert!(q.contains("상징을 묵상하며"));

        let q = prompt_for("7. The Army 師", date(2024, 1, 2));
        assert!(q.contains("지혜"));
        let q = prompt_for("7. The Army 師", date(2024, 1, 3));
        assert!(q.starts_with("오늘 하루"));
        let q = prompt_for("7. The Army 師", date(2024, 1, 4));
        assert!(q.contains("내면에서 변화"));
        let q = prompt_for("7. The Army 師", date(2024, 1, 5));
        assert!(q.contains("상징을 묵상하며"));
    }

    #[test]
    fn entry_keys_embed_the_iso_date() {
        assert_eq!(entry_key(date(2024, 1, 5)), "journal_2024-01-05");
        assert_eq!(entry_key(date(2024, 12, 31)), "journal_2024-12-31");
    }

    #[test]
    fn exported_entry_layout() {
        let entry = JournalEntry {
            date: date(2024, 1, 1),
            prompt: "질문?".to_string(),
            text: "첫 기록".to_string(),
        };
        let out = export_entry(&entry);
        assert!(out.starts_with('\u{FEFF}'));
        assert!(out.contains("날짜: Monday, January 1, 2024"));
        assert!(out.contains("성찰 질문:\n질문?"));
        assert!(out.ends_with("나의 기록:\n------------------\n첫 기록"));
    }

    #[test]
    fn archive_orders_newest_first() {
        let entries = vec![
            JournalEntry { date: date(2024, 1, 1), prompt: "q1".to_string(), text: "one".to_string() },
            JournalEntry { date: date(2024, 3, 5), prompt: "q2".to_string(), text: "two".to_string() },
        ];
        let out = export_archive(&entries);
        assert!(out.starts_with("\u{FEFF}SimSang Journal Archive\n=======================\n\n"));
        let march = out.find("2024-03-05").unwrap();
        let january = out.find("2024-01-01").unwrap();
        assert!(march < january);
        assert!(out.contains("[2024년 3월 5일 화요일 (2024-03-05)]"));
        assert!(out.contains("성찰 질문: q2"));
        assert!(out.contains("나의 기록:\ntwo"));
    }

    #[test]
    fn archive_omits_empty_prompts() {
        let entries = vec![JournalEntry {
            date: date(2024, 1, 1),
            prompt: String::new(),
            text: "entry".to_string(),
        }];
        let out = export_archive(&entries);
        assert!(!out.contains("성찰 질문"));
        assert!(out.contains("[2024년 1월 1일 월요일 (2024-01-01)]\n나의 기록:\nentry\n"));
    }

    #[test]
    fn korean_dates_name_the_weekday() {
        assert_eq!(korean_date(date(2024, 1, 1)), "2024년 1월 1일 월요일");
        assert_eq!(korean_date(date(2024, 1, 7)), "2024년 1월 7일 일요일");
    }
}
