//! Pure aggregate queries over the ordered session list.
//!
//! Nothing here caches: every call scans the list it is handed, which keeps
//! the store the single source of truth. All functions tolerate the empty
//! list.

use std::fmt;

use crate::session::{Hand, Session};

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn mean(sessions: &[Session]) -> f64 {
    sessions.iter().map(|s| s.strength).sum::<f64>() / sessions.len() as f64
}

pub fn total_tests(sessions: &[Session]) -> usize {
    sessions.len()
}

pub fn best_grip(sessions: &[Session]) -> Option<f64> {
    sessions.iter().map(|s| s.strength).reduce(f64::max)
}

/// Arithmetic mean, rounded to one decimal for display.
pub fn average_grip(sessions: &[Session]) -> Option<f64> {
    if sessions.is_empty() {
        return None;
    }
    Some(round1(mean(sessions)))
}

/// Mean of the last five sessions minus mean of the first five, by
/// insertion position. A session logged out of date order still counts by
/// its position in the list, not by its date. `None` below ten sessions;
/// the widget renders that as the `--` sentinel.
pub fn improvement(sessions: &[Session]) -> Option<f64> {
    if sessions.len() < 10 {
        return None;
    }
    let first = &sessions[..5];
    let last = &sessions[sessions.len() - 5..];
    Some(round1(mean(last) - mean(first)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Beginner,
    Novice,
    Intermediate,
    Advanced,
    Elite,
    Exceptional,
}

impl StrengthLevel {
    pub fn name(self) -> &'static str {
        match self {
            StrengthLevel::Beginner => "Beginner",
            StrengthLevel::Novice => "Novice",
            StrengthLevel::Intermediate => "Intermediate",
            StrengthLevel::Advanced => "Advanced",
            StrengthLevel::Elite => "Elite",
            StrengthLevel::Exceptional => "Exceptional",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies the best grip logged so far. Thresholds test greater-or-equal
/// from the top tier down, so exactly 20kg lands in Novice, not Beginner.
/// Deliberately not unified with the standards table, whose inclusive
/// integer ranges put 20kg in Beginner.
pub fn strength_level(sessions: &[Session]) -> Option<StrengthLevel> {
    let best = best_grip(sessions)?;
    let level = if best >= 60.0 {
        StrengthLevel::Exceptional
    } else if best >= 50.0 {
        StrengthLevel::Elite
    } else if best >= 40.0 {
        StrengthLevel::Advanced
    } else if best >= 30.0 {
        StrengthLevel::Intermediate
    } else if best >= 20.0 {
        StrengthLevel::Novice
    } else {
        StrengthLevel::Beginner
    };
    Some(level)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl TrendDirection {
    pub fn label(self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Declining => "declining",
            TrendDirection::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTrend {
    pub direction: TrendDirection,
    /// Recent-window mean minus earlier-window mean, rounded to one decimal.
    pub delta: f64,
}

/// Last five sessions versus the five immediately before them, by insertion
/// position. Undefined until ten sessions exist so both windows are full.
/// The direction thresholds compare the unrounded delta.
pub fn progress_trend(sessions: &[Session]) -> Option<ProgressTrend> {
    if sessions.len() < 10 {
        return None;
    }
    let recent = &sessions[sessions.len() - 5..];
    let earlier = &sessions[sessions.len() - 10..sessions.len() - 5];
    let delta = mean(recent) - mean(earlier);
    let direction = if delta > 0.5 {
        TrendDirection::Improving
    } else if delta < -0.5 {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };
    Some(ProgressTrend {
        direction,
        delta: round1(delta),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    Balanced,
    Imbalanced,
}

impl Balance {
    pub fn label(self) -> &'static str {
        match self {
            Balance::Balanced => "balanced",
            Balance::Imbalanced => "imbalanced",
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HandBalance {
    pub balance: Balance,
    pub left_avg: f64,
    pub right_avg: f64,
}

/// Compares per-hand averages. Requires at least one left-hand and one
/// right-hand test; both-hand tests count for neither side. Imbalanced when
/// the averages differ by more than 5kg.
pub fn hand_balance(sessions: &[Session]) -> Option<HandBalance> {
    let avg_for = |hand: Hand| {
        let strengths: Vec<f64> = sessions
            .iter()
            .filter(|s| s.hand == hand)
            .map(|s| s.strength)
            .collect();
        if strengths.is_empty() {
            None
        } else {
            Some(strengths.iter().sum::<f64>() / strengths.len() as f64)
        }
    };

    let left_avg = avg_for(Hand::Left)?;
    let right_avg = avg_for(Hand::Right)?;
    let balance = if (left_avg - right_avg).abs() > 5.0 {
        Balance::Imbalanced
    } else {
        Balance::Balanced
    };
    Some(HandBalance {
        balance,
        left_avg,
        right_avg,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;

    fn session(id: i64, date: &str, strength: f64, hand: Hand) -> Session {
        Session {
            id,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            strength,
            hand,
            notes: String::new(),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
        }
    }

    fn sessions_with_strengths(strengths: &[f64]) -> Vec<Session> {
        strengths
            .iter()
            .enumerate()
            .map(|(i, &s)| session(i as i64, "2026-08-01", s, Hand::Right))
            .collect()
    }

    #[test]
    fn empty_list_yields_no_statistics() {
        let sessions: Vec<Session> = Vec::new();
        assert_eq!(total_tests(&sessions), 0);
        assert_eq!(best_grip(&sessions), None);
        assert_eq!(average_grip(&sessions), None);
        assert_eq!(improvement(&sessions), None);
        assert_eq!(strength_level(&sessions), None);
        assert_eq!(progress_trend(&sessions), None);
        assert_eq!(hand_balance(&sessions), None);
    }

    #[test]
    fn best_is_the_maximum_and_a_member() {
        let sessions = sessions_with_strengths(&[22.0, 45.5, 31.0, 45.4]);
        let best = best_grip(&sessions).unwrap();
        assert_eq!(best, 45.5);
        assert!(sessions.iter().all(|s| s.strength <= best));
        assert!(sessions.iter().any(|s| s.strength == best));
    }

    #[test]
    fn average_of_a_single_session_is_its_strength() {
        let sessions = sessions_with_strengths(&[37.2]);
        assert_eq!(average_grip(&sessions), Some(37.2));
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let sessions = sessions_with_strengths(&[10.0, 10.0, 11.0]);
        assert_eq!(average_grip(&sessions), Some(10.3));
    }

    #[test]
    fn improvement_needs_ten_sessions() {
        let sessions = sessions_with_strengths(&[10.0; 9]);
        assert_eq!(improvement(&sessions), None);
    }

    #[test]
    fn improvement_compares_first_and_last_five_by_position() {
        let sessions =
            sessions_with_strengths(&[10.0, 12.0, 14.0, 16.0, 18.0, 30.0, 32.0, 34.0, 36.0, 38.0]);
        assert_eq!(improvement(&sessions), Some(20.0));
    }

    #[test]
    fn improvement_ignores_dates_entirely() {
        // Dates run backwards; the windows are still positional.
        let mut sessions =
            sessions_with_strengths(&[10.0, 12.0, 14.0, 16.0, 18.0, 30.0, 32.0, 34.0, 36.0, 38.0]);
        for (i, s) in sessions.iter_mut().enumerate() {
            s.date = NaiveDate::from_ymd_opt(2026, 8, 28 - i as u32).unwrap();
        }
        assert_eq!(improvement(&sessions), Some(20.0));
    }

    #[test]
    fn strength_level_boundaries_round_up() {
        assert_eq!(
            strength_level(&sessions_with_strengths(&[19.9])),
            Some(StrengthLevel::Beginner)
        );
        assert_eq!(
            strength_level(&sessions_with_strengths(&[20.0])),
            Some(StrengthLevel::Novice)
        );
        assert_eq!(
            strength_level(&sessions_with_strengths(&[30.0])),
            Some(StrengthLevel::Intermediate)
        );
        assert_eq!(
            strength_level(&sessions_with_strengths(&[49.9])),
            Some(StrengthLevel::Advanced)
        );
        assert_eq!(
            strength_level(&sessions_with_strengths(&[50.0])),
            Some(StrengthLevel::Elite)
        );
        assert_eq!(
            strength_level(&sessions_with_strengths(&[60.0])),
            Some(StrengthLevel::Exceptional)
        );
    }

    #[test]
    fn strength_level_uses_the_best_session() {
        let sessions = sessions_with_strengths(&[15.0, 42.0, 22.0]);
        assert_eq!(strength_level(&sessions), Some(StrengthLevel::Advanced));
    }

    #[test]
    fn trend_needs_a_full_earlier_window() {
        let sessions = sessions_with_strengths(&[10.0; 9]);
        assert_eq!(progress_trend(&sessions), None);
    }

    #[test]
    fn trend_direction_thresholds() {
        let improving =
            sessions_with_strengths(&[10.0, 10.0, 10.0, 10.0, 10.0, 11.0, 11.0, 11.0, 11.0, 11.0]);
        assert_eq!(
            progress_trend(&improving).unwrap().direction,
            TrendDirection::Improving
        );

        let declining =
            sessions_with_strengths(&[11.0, 11.0, 11.0, 11.0, 11.0, 10.0, 10.0, 10.0, 10.0, 10.0]);
        let trend = progress_trend(&declining).unwrap();
        assert_eq!(trend.direction, TrendDirection::Declining);
        assert_eq!(trend.delta, -1.0);

        let stable =
            sessions_with_strengths(&[10.0, 10.0, 10.0, 10.0, 10.0, 10.3, 10.3, 10.3, 10.3, 10.3]);
        assert_eq!(
            progress_trend(&stable).unwrap().direction,
            TrendDirection::Stable
        );
    }

    #[test]
    fn trend_direction_compares_the_unrounded_delta() {
        // Delta is 0.52: improving, even though it rounds to 0.5 for display.
        let sessions =
            sessions_with_strengths(&[10.0, 10.0, 10.0, 10.0, 10.0, 10.52, 10.52, 10.52, 10.52, 10.52]);
        let trend = progress_trend(&sessions).unwrap();
        assert_eq!(trend.direction, TrendDirection::Improving);
        assert_eq!(trend.delta, 0.5);
    }

    #[test]
    fn hand_balance_requires_both_hands() {
        let left_only = vec![session(1, "2026-08-01", 25.0, Hand::Left)];
        assert_eq!(hand_balance(&left_only), None);

        let with_both_hand_only = vec![
            session(1, "2026-08-01", 25.0, Hand::Left),
            session(2, "2026-08-02", 40.0, Hand::Both),
        ];
        assert_eq!(hand_balance(&with_both_hand_only), None);
    }

    #[test]
    fn hand_balance_flags_a_large_gap() {
        let sessions = vec![
            session(1, "2026-08-01", 25.0, Hand::Left),
            session(2, "2026-08-02", 35.0, Hand::Right),
        ];
        let balance = hand_balance(&sessions).unwrap();
        assert_eq!(balance.balance, Balance::Imbalanced);
        assert_eq!(balance.left_avg, 25.0);
        assert_eq!(balance.right_avg, 35.0);
    }

    #[test]
    fn hand_balance_excludes_both_hand_tests() {
        let sessions = vec![
            session(1, "2026-08-01", 30.0, Hand::Left),
            session(2, "2026-08-02", 32.0, Hand::Right),
            session(3, "2026-08-03", 90.0, Hand::Both),
        ];
        let balance = hand_balance(&sessions).unwrap();
        assert_eq!(balance.balance, Balance::Balanced);
        assert_eq!(balance.left_avg, 30.0);
        assert_eq!(balance.right_avg, 32.0);
    }

    #[test]
    fn hand_balance_magnitude_is_order_independent() {
        let mut sessions = vec![
            session(1, "2026-08-01", 25.0, Hand::Left),
            session(2, "2026-08-02", 35.0, Hand::Right),
            session(3, "2026-08-03", 28.0, Hand::Left),
        ];
        let forward = hand_balance(&sessions).unwrap();
        sessions.reverse();
        let backward = hand_balance(&sessions).unwrap();
        assert_eq!(
            (forward.left_avg - forward.right_avg).abs(),
            (backward.left_avg - backward.right_avg).abs()
        );
    }
}
