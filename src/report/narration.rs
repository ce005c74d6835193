//! Per-attack narration.

use crate::board::Roster;
use crate::engine::AttemptReport;
use crate::resolve::{Battle, BattleOutcome};

/// Name of the territory at `index`, or a placeholder for unknown positions.
fn name_at(roster: &Roster, index: usize) -> String {
    roster
        .get(index)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| format!("#{}", index))
}

fn render_battle(battle: &Battle) -> String {
    let mut out = format!(
        "{} ({}) attacks {} ({})\nAttack roll: {}\nDefense roll: {}\n",
        battle.attacker,
        battle.attacker_faction,
        battle.defender,
        battle.defender_faction,
        battle.attack_roll,
        battle.defense_roll,
    );
    out.push_str(if battle.attacker_won() {
        "Attacker wins!\n"
    } else {
        "Defender holds!\n"
    });
    match battle.outcome {
        BattleOutcome::Conquered { troops } => {
            out.push_str(&format!(
                "{} now belongs to {} with {} troops\n",
                battle.defender, battle.attacker_faction, troops
            ));
        }
        BattleOutcome::Repelled { attacker_troops } => {
            out.push_str(&format!(
                "{} lost 1 troop. Now has {} troops\n",
                battle.attacker, attacker_troops
            ));
        }
    }
    out
}

/// Narrates one attempt: the battle if it was fought, or why it was refused.
///
/// Rejections use the same short reason as the JSON report.
///
/// `roster` is only used to name the territories of a rejected attempt.
pub fn render_attempt(report: &AttemptReport, roster: &Roster) -> String {
    let mut out = String::from("\n=== ATTACK ===\n");
    match &report.result {
        Ok(battle) => out.push_str(&render_battle(battle)),
        Err(e) => out.push_str(&format!(
            "Rejected: {} -> {}: {}\n",
            name_at(roster, report.attempt.attacker),
            name_at(roster, report.attempt.defender),
            e.reason()
        )),
    }
    out
}
