use chrono::{DateTime, Duration, Months, NaiveTime, Utc};

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryPeriod {
    Week,
    Month,
    All,
}

impl HistoryPeriod {
    pub fn label(self) -> &'static str {
        match self {
            HistoryPeriod::Week => "Week",
            HistoryPeriod::Month => "Month",
            HistoryPeriod::All => "All",
        }
    }
}

/// Selects the sessions inside the period ending at `now` and returns them
/// most recent date first. The week window is a fixed 7x24h span; the month
/// window is calendar-aware (same day-of-month one month back). The sort is
/// stable, so same-day sessions keep their insertion order.
pub fn filter_history(
    sessions: &[Session],
    period: HistoryPeriod,
    now: DateTime<Utc>,
) -> Vec<Session> {
    let mut filtered: Vec<Session> = match period {
        HistoryPeriod::Week => {
            let cutoff = now - Duration::days(7);
            sessions
                .iter()
                .filter(|s| s.date.and_time(NaiveTime::MIN).and_utc() >= cutoff)
                .cloned()
                .collect()
        }
        HistoryPeriod::Month => {
            let today = now.date_naive();
            let cutoff = today.checked_sub_months(Months::new(1)).unwrap_or(today);
            sessions.iter().filter(|s| s.date >= cutoff).cloned().collect()
        }
        HistoryPeriod::All => sessions.to_vec(),
    };
    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}
