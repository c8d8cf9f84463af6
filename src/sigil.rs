//! Sigil image naming and preload windows.

use crate::config::CycleConfig;

/// File name of the sigil image for a line number.
pub fn asset_name(line_number: u32) -> String {
    format!("yao-{line_number}.png")
}

/// Line numbers whose sigils are worth fetching around the current one:
/// the line itself, its two neighbors and the line one week ahead,
/// kept to the configured line range.
pub fn preload_window(line_number: i64, config: &CycleConfig) -> Vec<u32> {
    let lo = config.line_offset;
    let hi = config.line_offset + config.cycle_length;
    [line_number, line_number - 1, line_number + 1, line_number + 7]
        .into_iter()
        .filter(|n| (lo..hi).contains(n))
        .filter_map(|n| u32::try_from(n).ok())
        .collect()
}
