//! Session store and derived-statistics engine for grip strength tracking.
//!
//! Everything here is independent of the browser: persistence goes through
//! the [`StorageBackend`] trait and time through the [`Clock`] trait, so the
//! whole engine is testable natively. The widget crate supplies the
//! `localStorage` backend and wires the results into the DOM.

mod filter;
mod session;
mod standards;
mod stats;
mod store;

pub use filter::{filter_history, HistoryPeriod};
pub use session::{Clock, Hand, Session, SessionDraft, SystemClock};
pub use standards::{current_standard, Standard, PERFORMANCE_STANDARDS};
pub use stats::{
    average_grip, best_grip, hand_balance, improvement, progress_trend, strength_level,
    total_tests, Balance, HandBalance, ProgressTrend, StrengthLevel, TrendDirection,
};
pub use store::{MemoryStorage, SessionStore, StorageBackend, StoreError, STORAGE_KEY};
