//! Headless batch rolls
//!
//! Drives a fixed number of rolls without any window or UI and exits the app
//! once they are done, printing a short summary to stderr.

use bevy::prelude::*;
use colored::*;

use crate::minigame::roll::RollSession;
use crate::minigame::systems::start_roll;
use crate::minigame::types::*;

/// Progress of a headless batch.
#[derive(Resource, Debug, Default)]
pub struct HeadlessRun {
    pub target: u32,
    pub results: Vec<DicePair>,
}

impl HeadlessRun {
    pub fn is_done(&self) -> bool {
        self.results.len() as u32 >= self.target
    }
}

/// Roll `rolls` times, then write [`AppExit::Success`].
pub struct HeadlessRollsPlugin {
    pub rolls: u32,
}

impl Plugin for HeadlessRollsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(HeadlessRun {
            target: self.rolls,
            results: Vec::new(),
        })
        .add_systems(Update, drive_headless_rolls.before(start_roll));
    }
}

pub fn drive_headless_rolls(
    mut run: ResMut<HeadlessRun>,
    session: Option<Res<RollSession>>,
    mut rolled: MessageReader<DiceRolled>,
    mut roll_requests: MessageWriter<RollDiceRequested>,
    mut exit: MessageWriter<AppExit>,
) {
    if run.is_done() {
        return;
    }

    for DiceRolled(pair) in rolled.read() {
        run.results.push(*pair);
    }

    if run.is_done() {
        eprintln!("{}", format_summary(&run.results));
        exit.write(AppExit::Success);
        return;
    }

    let Some(session) = session else {
        error!("Headless run needs a roll session; exiting");
        exit.write(AppExit::error());
        return;
    };

    if !session.is_rolling() {
        roll_requests.write(RollDiceRequested);
    }
}

/// One line per roll followed by the average total.
pub fn format_summary(results: &[DicePair]) -> String {
    let mut lines: Vec<String> = results
        .iter()
        .enumerate()
        .map(|(i, pair)| {
            format!(
                "{} {}",
                format!("Roll {:>3}:", i + 1).bright_black(),
                pair.to_string().bright_white().bold()
            )
        })
        .collect();

    if !results.is_empty() {
        let sum: u32 = results.iter().map(|pair| pair.total() as u32).sum();
        let average = sum as f32 / results.len() as f32;
        lines.push(format!(
            "{} {}",
            "Average total:".cyan(),
            format!("{:.2}", average).green().bold()
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_every_roll() {
        colored::control::set_override(false);
        let results = [
            DicePair::new(FaceValue::new(2), FaceValue::new(3)),
            DicePair::new(FaceValue::new(6), FaceValue::new(6)),
        ];
        let summary = format_summary(&results);
        assert!(summary.contains("Roll   1: 2 + 3 = 5"));
        assert!(summary.contains("Roll   2: 6 + 6 = 12"));
        assert!(summary.contains("Average total: 8.50"));
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(format_summary(&[]), "");
    }
}
