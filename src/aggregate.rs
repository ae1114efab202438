use crate::interval::{Interval, IntervalSpec};
use crate::models::{Bucket, DailyRecord};
use chrono::NaiveDate;

pub fn aggregate(records: &[DailyRecord], interval: Interval) -> Vec<Bucket> {
    aggregate_with(records, &interval.spec())
}

/// Sums consecutive runs of `day_span` records into buckets.
///
/// Each bucket is labelled from the last record of its run. A trailing
/// partial run is still emitted when its sum is non-zero, labelled from the
/// final record, so the last bucket may cover fewer days than the span.
pub fn aggregate_with(records: &[DailyRecord], spec: &IntervalSpec) -> Vec<Bucket> {
    let span = spec.day_span.max(1);
    let mut buckets = Vec::with_capacity(records.len() / span + 1);
    let mut sum = 0u64;

    for (index, record) in records.iter().enumerate() {
        sum = sum.saturating_add(record.count);
        if (index + 1) % span == 0 {
            buckets.push(Bucket {
                date: bucket_label(&record.date, spec),
                count: sum,
            });
            sum = 0;
        }
    }

    if sum > 0 {
        if let Some(last) = records.last() {
            buckets.push(Bucket {
                date: bucket_label(&last.date, spec),
                count: sum,
            });
        }
    }

    buckets
}

pub fn bucket_label(date: &str, spec: &IntervalSpec) -> String {
    match parse_date(date) {
        Some(parsed) => parsed.format(spec.label_format).to_string(),
        None => char_window(date, spec.label_start, spec.label_end),
    }
}

// Accepts a bare date or a date followed by a time part.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let (date, rest) = NaiveDate::parse_and_remainder(value.trim(), "%Y-%m-%d").ok()?;
    if rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ') {
        Some(date)
    } else {
        None
    }
}

fn char_window(value: &str, start: usize, end: usize) -> String {
    value
        .chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}
