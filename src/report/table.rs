//! Tabular rendering of the roster and the mission list.

use crate::board::{Mission, Roster};

/// Width of the territory name column.
const NAME_WIDTH: usize = 15;

/// Width of the faction column.
const FACTION_WIDTH: usize = 8;

/// Renders every territory as one row, in roster order.
///
/// ```
/// use conquest::board::Roster;
/// use conquest::report::render_roster;
///
/// let roster = Roster::initial().unwrap();
/// let table = render_roster(&roster);
/// assert!(table.contains("Territory 1: North America"));
/// ```
pub fn render_roster(roster: &Roster) -> String {
    let mut out = String::from("=== TERRITORIES ===\n");
    for (i, t) in roster.iter().enumerate() {
        out.push_str(&format!(
            "Territory {}: {:<nw$} | Faction: {:<fw$} | Troops: {:>2}\n",
            i + 1,
            t.name,
            t.faction.name(),
            t.troops,
            nw = NAME_WIDTH,
            fw = FACTION_WIDTH,
        ));
    }
    out
}

/// Renders the mission list verbatim, one player per line.
pub fn render_missions(missions: &[Mission]) -> String {
    let mut out = String::from("=== MISSIONS ===\n");
    for m in missions {
        out.push_str(&format!("Player {}: {}\n", m.player, m.text));
    }
    out
}
