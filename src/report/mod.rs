//! Reporting.
//!
//! Read-only renderings of a simulation run: the roster table, the mission
//! list, attack narration, and a JSON document of the whole run.

pub mod narration;
pub mod table;

pub use narration::render_attempt;
pub use table::{render_missions, render_roster};

use serde::Serialize;

use crate::board::{Mission, Roster};
use crate::engine::AttemptReport;

/// Everything needed to report one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Dice seed, if the run used seeded random dice.
    pub seed: Option<u64>,
    pub initial: Roster,
    pub missions: Vec<Mission>,
    pub attempts: Vec<AttemptReport>,
    #[serde(rename = "final")]
    pub final_roster: Roster,
}

/// Renders a run as console text: the starting map, missions, each attack,
/// then the final map.
pub fn render_text(report: &RunReport) -> String {
    let mut out = String::from("=== CONQUEST SIMULATOR ===\n");
    if let Some(seed) = report.seed {
        out.push_str(&format!("Dice seed: {}\n", seed));
    }
    out.push_str(&render_roster(&report.initial));
    out.push('\n');
    out.push_str(&render_missions(&report.missions));
    out.push_str("\n=== ATTACKS ===\n");
    for attempt in &report.attempts {
        out.push_str(&render_attempt(attempt, &report.initial));
    }
    out.push('\n');
    out.push_str(&render_roster(&report.final_roster));
    out
}

/// Renders a run as a pretty-printed JSON document.
pub fn render_json(report: &RunReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
