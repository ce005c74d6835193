//! Player missions.
//!
//! Missions are static objective text shown to each player. They are
//! displayed as-is and never checked against the board.

use serde::Serialize;

/// A player's objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mission {
    /// 1-based player number.
    pub player: u8,
    pub text: &'static str,
}

/// Missions for the two players, in player order.
pub const MISSIONS: [Mission; 2] = [
    Mission {
        player: 1,
        text: "Conquer 3 blue territories",
    },
    Mission {
        player: 2,
        text: "Conquer 3 red territories",
    },
];
