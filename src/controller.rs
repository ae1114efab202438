use crate::aggregate::aggregate;
use crate::errors::FetchError;
use crate::interval::Interval;
use crate::models::{Bucket, DailyRecord, DashboardView};
use tracing::{debug, error, info};

/// Issued by [`Dashboard::select`]; identifies one outstanding fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub interval: Interval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Replaced { buckets: usize },
    Stale,
}

/// Owns the active interval and the series currently on display.
///
/// Only the response to the most recent selection may replace the series.
/// Responses to superseded selections are dropped.
#[derive(Debug, Default)]
pub struct Dashboard {
    active: Interval,
    series: Vec<Bucket>,
    next_seq: u64,
    latest: Option<u64>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Interval {
        self.active
    }

    pub fn series(&self) -> &[Bucket] {
        &self.series
    }

    pub fn select(&mut self, interval: Interval) -> FetchTicket {
        self.active = interval;
        self.next_seq += 1;
        self.latest = Some(self.next_seq);
        debug!(seq = self.next_seq, %interval, "interval selected");
        FetchTicket {
            seq: self.next_seq,
            interval,
        }
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.latest == Some(ticket.seq)
    }

    pub fn apply(&mut self, ticket: FetchTicket, records: &[DailyRecord]) -> Applied {
        if !self.is_current(ticket) {
            info!(
                seq = ticket.seq,
                interval = %ticket.interval,
                active = %self.active,
                "discarding stale sign-up response"
            );
            return Applied::Stale;
        }

        self.series = aggregate(records, ticket.interval);
        info!(
            interval = %ticket.interval,
            records = records.len(),
            buckets = self.series.len(),
            "series replaced"
        );
        Applied::Replaced {
            buckets: self.series.len(),
        }
    }

    pub fn fail(&self, ticket: FetchTicket, err: &FetchError) {
        error!(
            seq = ticket.seq,
            interval = %ticket.interval,
            error = %err,
            "failed to fetch sign-ups; keeping previous series"
        );
    }

    pub fn snapshot(&self) -> DashboardView {
        DashboardView {
            interval: self.active,
            series: self.series.clone(),
            total: self
                .series
                .iter()
                .fold(0u64, |acc, bucket| acc.saturating_add(bucket.count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn records(counts: &[u64]) -> Vec<DailyRecord> {
        counts
            .iter()
            .enumerate()
            .map(|(i, count)| DailyRecord {
                date: format!("2022-10-{:02}", i + 1),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn starts_on_day_with_nothing_displayed() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.active(), Interval::Day);
        assert!(dashboard.series().is_empty());
        assert_eq!(dashboard.snapshot().total, 0);
    }

    #[test]
    fn week_after_day_rebuckets_same_series() {
        let data = records(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let mut dashboard = Dashboard::new();

        let day = dashboard.select(Interval::Day);
        assert_eq!(dashboard.apply(day, &data), Applied::Replaced { buckets: 10 });

        let week = dashboard.select(Interval::Week);
        assert_eq!(dashboard.apply(week, &data), Applied::Replaced { buckets: 2 });

        let view = dashboard.snapshot();
        assert_eq!(view.interval, Interval::Week);
        assert_eq!(
            view.series,
            vec![
                Bucket { date: "10-07".into(), count: 28 },
                Bucket { date: "10-10".into(), count: 27 },
            ]
        );
        assert_eq!(view.total, 55);
    }

    #[test]
    fn late_response_for_earlier_selection_is_dropped() {
        let data = records(&[5; 14]);
        let mut dashboard = Dashboard::new();

        let month = dashboard.select(Interval::Month);
        let week = dashboard.select(Interval::Week);
        assert!(!dashboard.is_current(month));

        assert_eq!(dashboard.apply(week, &data), Applied::Replaced { buckets: 2 });
        assert_eq!(dashboard.apply(month, &data), Applied::Stale);

        let view = dashboard.snapshot();
        assert_eq!(view.interval, Interval::Week);
        assert_eq!(view.series.len(), 2);
    }

    #[test]
    fn failure_keeps_previous_series() {
        let data = records(&[2, 4]);
        let mut dashboard = Dashboard::new();
        let first = dashboard.select(Interval::Day);
        dashboard.apply(first, &data);

        let second = dashboard.select(Interval::Month);
        dashboard.fail(second, &FetchError::Status(StatusCode::SERVICE_UNAVAILABLE));

        let view = dashboard.snapshot();
        assert_eq!(view.interval, Interval::Month);
        assert_eq!(view.series.len(), 2);
        assert_eq!(view.total, 6);
    }

    #[test]
    fn ticket_sequence_increases() {
        let mut dashboard = Dashboard::new();
        let a = dashboard.select(Interval::Day);
        let b = dashboard.select(Interval::Day);
        assert!(b.seq > a.seq);
        assert!(dashboard.is_current(b));
    }
}
