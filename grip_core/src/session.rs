use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single logged grip strength test.
///
/// Immutable once created; the only way to get rid of one is
/// [`crate::SessionStore::delete_by_id`]. `date` is the user-chosen test
/// date (may be back-dated), `timestamp` the instant the record was logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub date: NaiveDate,
    pub strength: f64,
    pub hand: Hand,
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    Left,
    Right,
    Both,
}

impl Hand {
    pub fn label(self) -> &'static str {
        match self {
            Hand::Left => "Left",
            Hand::Right => "Right",
            Hand::Both => "Both",
        }
    }
}

/// Form payload for logging a new test. The store mints `id` and
/// `timestamp` from its clock when the draft is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionDraft {
    pub date: NaiveDate,
    pub strength: f64,
    pub hand: Hand,
    pub notes: String,
}

/// Time source for minting session ids and timestamps, injected so stores
/// can be constructed fresh per test with a fixed instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock. chrono's wasmbind backing makes this work in the browser
/// target as well as natively.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
