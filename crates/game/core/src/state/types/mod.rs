pub mod ball;
pub mod common;
pub mod outcome;
pub mod player;

// Re-export ball reference data
pub use ball::{Ball, BallName, CENTURY_BALLS, SNOOKER_BALLS, find_ball};

// Re-export common types
pub use common::{PlayerId, TeamId, TeamScores, Timestamp};

// Re-export results
pub use outcome::{Side, SideScore, Winner};

// Re-export players
pub use player::{Player, Roster};
