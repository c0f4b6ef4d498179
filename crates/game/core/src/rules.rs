//! Win evaluation.
//!
//! Pure functions over scores. Two comparisons exist:
//! - [`strict_leader`]: the single highest total wins, a shared maximum is a draw
//!   (Snooker frame end, Century manual end)
//! - [`check_target`]: Century's exact-target rule, where going past the target
//!   is only a warning

use crate::state::{Side, Winner};

/// Result of comparing a score against a Century target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetCheck {
    Below,
    Reached,
    Overshoot { by: u32 },
}

/// Non-fatal warning: a side's score went past the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overshoot {
    pub side: Side,
    pub score: i32,
    pub target: i32,
}

pub fn check_target(score: i32, target: i32) -> TargetCheck {
    match score.cmp(&target) {
        std::cmp::Ordering::Less => TargetCheck::Below,
        std::cmp::Ordering::Equal => TargetCheck::Reached,
        std::cmp::Ordering::Greater => TargetCheck::Overshoot {
            by: score.abs_diff(target),
        },
    }
}

/// Picks the side with the strictly greatest total.
///
/// More than one side sharing the maximum (or no sides at all) is a draw.
pub fn strict_leader<I>(totals: I) -> Winner
where
    I: IntoIterator<Item = (Side, i32)>,
{
    let mut leader: Option<(Side, i32)> = None;
    let mut tied = false;

    for (side, score) in totals {
        match leader {
            Some((_, best)) if score < best => {}
            Some((_, best)) if score == best => tied = true,
            _ => {
                leader = Some((side, score));
                tied = false;
            }
        }
    }

    match leader {
        Some((side, _)) if !tied => side.into(),
        _ => Winner::Draw,
    }
}
