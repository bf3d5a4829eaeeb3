//! Confidence ratchet, daily streak, and progress-state derivation.
//!
//! Everything here is a pure function over pre-loaded rows. "Today" is
//! always an explicit [`NaiveDate`] parameter so day-boundary behavior is
//! deterministic under test; [`utc_today`] is the single place the current
//! date enters from.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::skill::Skill;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Lowest confidence level and report value.
pub const CONFIDENCE_MIN: i64 = 0;

/// Highest confidence level and report value.
pub const CONFIDENCE_MAX: i64 = 4;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Outcome of an attempt to record a sprint completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The completion was logged and the skill level ratcheted.
    Recorded,
    /// A completion for (user, skill, day) already exists; nothing changed.
    AlreadyCompleted,
}

/// Derived progress state for one user on a given day.
///
/// Serializes to the wire shape of `GET /api/state/{userId}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    /// Current confidence level per skill. All four skills are present;
    /// skills without a stored row default to 0.
    pub levels: BTreeMap<Skill, i64>,
    /// Completion date per skill, present only for skills completed today.
    pub completed_today: BTreeMap<Skill, NaiveDate>,
    /// Consecutive-day streak ending today or yesterday.
    pub streak: u32,
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a reported confidence value against the allowed range.
pub fn validate_confidence(value: i64) -> Result<(), String> {
    if (CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "Invalid confidence level {value}. Must be between {CONFIDENCE_MIN} and {CONFIDENCE_MAX}"
        ))
    }
}

// ---------------------------------------------------------------------------
// Ratchet
// ---------------------------------------------------------------------------

/// Step a stored level one unit toward the reported confidence.
///
/// The raw report only picks the direction; it is never assigned as the
/// level. Equal values and boundary states leave the level unchanged, so
/// for any current level in range the result stays within
/// [`CONFIDENCE_MIN`]..=[`CONFIDENCE_MAX`] and moves at most one step.
pub fn ratchet_level(current: i64, reported: i64) -> i64 {
    if reported > current && current < CONFIDENCE_MAX {
        current + 1
    } else if reported < current && current > CONFIDENCE_MIN {
        current - 1
    } else {
        current
    }
}

// ---------------------------------------------------------------------------
// Streak
// ---------------------------------------------------------------------------

/// Count consecutive completion days ending today or yesterday.
///
/// `dates` must be distinct calendar dates sorted most recent first, the
/// order the store returns them in. The walk starts at `today` when the
/// most recent date is today, otherwise at yesterday: a run that ended
/// yesterday still counts until the day is over, while a run that ended
/// two or more days ago is broken. Each date equal to the cursor extends
/// the run and moves the cursor back one day; the first date strictly
/// before the cursor ends the walk. Dates after the cursor are skipped.
pub fn streak_length(today: NaiveDate, dates: &[NaiveDate]) -> u32 {
    let Some(most_recent) = dates.first() else {
        return 0;
    };

    let mut expected = today;
    if *most_recent != today {
        match today.pred_opt() {
            Some(yesterday) => expected = yesterday,
            None => return 0,
        }
    }

    let mut streak = 0;
    for date in dates {
        if *date == expected {
            streak += 1;
            match expected.pred_opt() {
                Some(prev) => expected = prev,
                None => break,
            }
        } else if *date < expected {
            break;
        }
    }
    streak
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

impl ProgressSnapshot {
    /// Derive the full visible state for a user from pre-loaded rows.
    ///
    /// `stored_levels` are the persisted per-skill levels, `completed` the
    /// skills with a completion logged for `today`, and `dates` the
    /// distinct completion dates sorted most recent first.
    pub fn derive(
        today: NaiveDate,
        stored_levels: &[(Skill, i64)],
        completed: &[Skill],
        dates: &[NaiveDate],
    ) -> Self {
        let mut levels: BTreeMap<Skill, i64> =
            Skill::ALL.iter().map(|skill| (*skill, 0)).collect();
        for (skill, level) in stored_levels {
            levels.insert(*skill, *level);
        }

        let completed_today = completed.iter().map(|skill| (*skill, today)).collect();

        Self {
            levels,
            completed_today,
            streak: streak_length(today, dates),
        }
    }
}

/// The current UTC calendar date.
///
/// Day boundaries are UTC everywhere; local-timezone days are deliberately
/// not used, so a "day" means the same thing no matter where the server or
/// browser runs.
pub fn utc_today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
