use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interval {
    #[default]
    Day,
    Week,
    Month,
}

/// How many days go into one bucket and how its label is derived.
///
/// `label_format` is applied to the parsed date. When the date does not
/// parse, the label is the character window `label_start..label_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalSpec {
    pub day_span: usize,
    pub label_start: usize,
    pub label_end: usize,
    pub label_format: &'static str,
}

const DAY: IntervalSpec = IntervalSpec {
    day_span: 1,
    label_start: 5,
    label_end: 10,
    label_format: "%m-%d",
};

const WEEK: IntervalSpec = IntervalSpec {
    day_span: 7,
    label_start: 5,
    label_end: 10,
    label_format: "%m-%d",
};

const MONTH: IntervalSpec = IntervalSpec {
    day_span: 30,
    label_start: 5,
    label_end: 7,
    label_format: "%m",
};

impl Interval {
    pub const ALL: [Interval; 3] = [Interval::Day, Interval::Week, Interval::Month];

    pub fn spec(self) -> IntervalSpec {
        match self {
            Interval::Day => DAY,
            Interval::Week => WEEK,
            Interval::Month => MONTH,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Interval::Day => "Day",
            Interval::Week => "Week",
            Interval::Month => "Month",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Interval::Day => "day",
            Interval::Week => "week",
            Interval::Month => "month",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownInterval(pub String);

impl fmt::Display for UnknownInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown interval '{}': expected 'day', 'week' or 'month'",
            self.0
        )
    }
}

impl std::error::Error for UnknownInterval {}

impl FromStr for Interval {
    type Err = UnknownInterval;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Interval::ALL
            .into_iter()
            .find(|interval| interval.slug().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownInterval(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("day".parse::<Interval>().unwrap(), Interval::Day);
        assert_eq!(" Week ".parse::<Interval>().unwrap(), Interval::Week);
        assert_eq!("MONTH".parse::<Interval>().unwrap(), Interval::Month);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "fortnight".parse::<Interval>().unwrap_err();
        assert_eq!(err, UnknownInterval("fortnight".into()));
        assert!(err.to_string().contains("fortnight"));
    }

    #[test]
    fn spans_match_calendar_buckets() {
        assert_eq!(Interval::Day.spec().day_span, 1);
        assert_eq!(Interval::Week.spec().day_span, 7);
        assert_eq!(Interval::Month.spec().day_span, 30);
        assert_eq!(Interval::default(), Interval::Day);
    }

    #[test]
    fn serializes_as_display_label() {
        let json = serde_json::to_string(&Interval::Week).unwrap();
        assert_eq!(json, "\"Week\"");
    }
}
