//! Ball reference data.
//!
//! Balls are immutable values. Each variant of play has a fixed catalog that
//! maps a [`BallName`] to its point value; actions only ever carry the name and
//! the value is looked up from the catalog.

/// Name of a ball on the table.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BallName {
    Red,
    Yellow,
    Green,
    Brown,
    Blue,
    Pink,
    Black,
    #[strum(serialize = "Green Stripe")]
    #[cfg_attr(feature = "serde", serde(rename = "Green Stripe"))]
    GreenStripe,
}

impl BallName {
    /// Fixed order in which the colours are cleared once the reds are gone.
    pub const COLOR_SEQUENCE: [BallName; 6] = [
        BallName::Yellow,
        BallName::Green,
        BallName::Brown,
        BallName::Blue,
        BallName::Pink,
        BallName::Black,
    ];

    /// Colour that follows `self` in the clearance sequence.
    ///
    /// Returns `None` for Black (end of the sequence) and for balls that are
    /// not part of the sequence.
    pub fn next_in_sequence(self) -> Option<BallName> {
        let position = Self::COLOR_SEQUENCE.iter().position(|&ball| ball == self)?;
        Self::COLOR_SEQUENCE.get(position + 1).copied()
    }

    /// True for the six Snooker colours.
    pub fn is_color(self) -> bool {
        Self::COLOR_SEQUENCE.contains(&self)
    }

    /// Background colour used when rendering the ball (RGB hex, no `#`).
    pub const fn color_hex(self) -> &'static str {
        match self {
            BallName::Red => "dc2626",
            BallName::Yellow => "facc15",
            BallName::Green | BallName::GreenStripe => "16a34a",
            BallName::Brown => "92400e",
            BallName::Blue => "2563eb",
            BallName::Pink => "ec4899",
            BallName::Black => "000000",
        }
    }

    /// Foreground colour for the value printed on the ball.
    pub const fn text_color_hex(self) -> &'static str {
        match self {
            BallName::Yellow => "000000",
            _ => "ffffff",
        }
    }
}

/// A ball and its point value in one catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ball {
    pub name: BallName,
    pub value: i32,
}

impl Ball {
    pub const fn new(name: BallName, value: i32) -> Self {
        Self { name, value }
    }
}

/// Snooker catalog: Red=1 through Black=7.
pub const SNOOKER_BALLS: [Ball; 7] = [
    Ball::new(BallName::Red, 1),
    Ball::new(BallName::Yellow, 2),
    Ball::new(BallName::Green, 3),
    Ball::new(BallName::Brown, 4),
    Ball::new(BallName::Blue, 5),
    Ball::new(BallName::Pink, 6),
    Ball::new(BallName::Black, 7),
];

/// Century catalog: colours keep their Snooker values, Red is worth 15 and
/// the Green Stripe 11.
pub const CENTURY_BALLS: [Ball; 8] = [
    Ball::new(BallName::Yellow, 2),
    Ball::new(BallName::Green, 3),
    Ball::new(BallName::Brown, 4),
    Ball::new(BallName::Blue, 5),
    Ball::new(BallName::Pink, 6),
    Ball::new(BallName::Black, 7),
    Ball::new(BallName::Red, 15),
    Ball::new(BallName::GreenStripe, 11),
];

/// Looks up a ball by name in a catalog.
pub fn find_ball(catalog: &[Ball], name: BallName) -> Option<Ball> {
    catalog.iter().copied().find(|ball| ball.name == name)
}
