//! Cycle configuration and its validation rules.

use crate::date_range::DAYS_IN_MONTH;

/// Fixed configuration for the annual reading cycle.
///
/// The cycle restarts every year on `start_month`/`start_day` and addresses
/// `cycle_length` consecutive days. Day indices map onto line numbers from
/// `line_offset` upward, and onto group numbers from `group_offset` upward in
/// runs of `group_size` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleConfig {
    /// Month (1..=12) on which a new cycle begins.
    pub start_month: u32,
    /// Day of `start_month` on which a new cycle begins.
    pub start_day: u32,
    /// Total number of addressable day indices in one cycle.
    pub cycle_length: i64,
    /// Line number assigned to day index 0.
    pub line_offset: i64,
    /// Group number assigned to the first group of lines.
    pub group_offset: i64,
    /// Number of consecutive lines forming one group.
    pub group_size: i64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self { start_month: 1, start_day: 1, cycle_length: 366, line_offset: 1, group_offset: 1, group_size: 6 }
    }
}

/// Error type for structurally inconsistent [`CycleConfig`] values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Returned when the start month is outside 1..=12.
    #[error("start month must be in 1..=12, got {month}")]
    InvalidStartMonth {
        /// The invalid month value.
        month: u32,
    },

    /// Returned when the start day does not exist in the start month.
    ///
    /// Month lengths come from the fixed non-leap table, so February 29 is
    /// rejected even though some calendar years contain it.
    #[error("start day must be in 1..={max_day} for month {month}, got {day}")]
    InvalidStartDay {
        /// The invalid day value.
        day: u32,
        /// The configured start month.
        month: u32,
        /// Number of days the start month has.
        max_day: u32,
    },

    /// Returned when the cycle length is zero or negative.
    #[error("cycle length must be >= 1, got {length}")]
    InvalidCycleLength {
        /// The invalid cycle length.
        length: i64,
    },

    /// Returned when the group size is zero or negative.
    #[error("group size must be >= 1, got {size}")]
    InvalidGroupSize {
        /// The invalid group size.
        size: i64,
    },

    /// Returned when the group size does not divide the cycle length evenly.
    #[error("group size {size} does not divide cycle length {length}")]
    UnevenGroups {
        /// The configured group size.
        size: i64,
        /// The configured cycle length.
        length: i64,
    },
}

impl CycleConfig {
    /// Check the configuration for structural consistency.
    ///
    /// Parsing and lookup functions assume a validated config; this is the
    /// only place configuration problems surface as errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=12).contains(&self.start_month) {
            return Err(ConfigError::InvalidStartMonth { month: self.start_month });
        }
        let max_day = DAYS_IN_MONTH[self.start_month as usize];
        if !(1..=max_day).contains(&self.start_day) {
            return Err(ConfigError::InvalidStartDay { day: self.start_day, month: self.start_month, max_day });
        }
        if self.cycle_length < 1 {
            return Err(ConfigError::InvalidCycleLength { length: self.cycle_length });
        }
        if self.group_size < 1 {
            return Err(ConfigError::InvalidGroupSize { size: self.group_size });
        }
        if self.cycle_length % self.group_size != 0 {
            return Err(ConfigError::UnevenGroups { size: self.group_size, length: self.cycle_length });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CycleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.start_month, 1);
        assert_eq!(config.start_day, 1);
        assert_eq!(config.cycle_length, 366);
        assert_eq!(config.line_offset, 1);
        assert_eq!(config.group_offset, 1);
        assert_eq!(config.group_size, 6);
    }

    #[test]
    fn rejects_month_13() {
        let config = CycleConfig { start_month: 13, ..CycleConfig::default() };
        assert_eq!(config.validate().unwrap_err(), ConfigError::InvalidStartMonth { month: 13 });
    }

    #[test]
    fn rejects_month_zero() {
        let config = CycleConfig { start_month: 0, ..CycleConfig::default() };
        assert_eq!(config.validate().unwrap_err(), ConfigError::InvalidStartMonth { month: 0 });
    }

    #[test]
    fn rejects_february_29() {
        let config = CycleConfig { start_month: 2, start_day: 29, ..CycleConfig::default() };
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvalidStartDay { day: 29, month: 2, max_day: 28 }
        );
    }

    #[test]
    fn rejects_day_zero() {
        let config = CycleConfig { start_day: 0, ..CycleConfig::default() };
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvalidStartDay { day: 0, month: 1, max_day: 31 }
        );
    }

    #[test]
    fn rejects_zero_cycle_length() {
        let config = CycleConfig { cycle_length: 0, ..CycleConfig::default() };
        assert_eq!(config.validate().unwrap_err(), ConfigError::InvalidCycleLength { length: 0 });
    }

    #[test]
    fn rejects_zero_group_size() {
        let config = CycleConfig { group_size: 0, ..CycleConfig::default() };
        assert_eq!(config.validate().unwrap_err(), ConfigError::InvalidGroupSize { size: 0 });
    }

    #[test]
    fn rejects_uneven_group_size() {
        let config = CycleConfig { group_size: 5, ..CycleConfig::default() };
        assert_eq!(config.validate().unwrap_err(), ConfigError::UnevenGroups { size: 5, length: 366 });
    }

    #[test]
    fn accepts_february_28_start() {
        let config = CycleConfig { start_month: 2, start_day: 28, ..CycleConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn error_display_strings() {
        let cases: Vec<(ConfigError, &str)> = vec![
            (ConfigError::InvalidStartMonth { month: 13 }, "start month must be in 1..=12, got 13"),
            (
                ConfigError::InvalidStartDay { day: 31, month: 4, max_day: 30 },
                "start day must be in 1..=30 for month 4, got 31",
            ),
            (ConfigError::InvalidCycleLength { length: -1 }, "cycle length must be >= 1, got -1"),
            (ConfigError::InvalidGroupSize { size: 0 }, "group size must be >= 1, got 0"),
            (ConfigError::UnevenGroups { size: 7, length: 366 }, "group size 7 does not divide cycle length 366"),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ConfigError>();
    }
}
