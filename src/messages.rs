//! Lines printed after each shot, looked up by side and event.

use crate::players::Role;

/// Something worth announcing during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Shot landed in open water.
    Miss,
    /// Shot hit a cell that was already hit.
    RepeatHit,
    /// Shot hit a cell that was already a miss.
    RepeatMiss,
    /// Shot hit an untouched ship segment.
    Hit,
    /// The last segment of a ship went down.
    ShipSunk,
    /// The opposing fleet is gone.
    Victory,
}

impl Event {
    const fn slot(self) -> usize {
        match self {
            Event::Miss => 0,
            Event::RepeatHit => 1,
            Event::RepeatMiss => 2,
            Event::Hit => 3,
            Event::ShipSunk => 4,
            Event::Victory => 5,
        }
    }
}

const fn role_slot(role: Role) -> usize {
    match role {
        Role::Automated => 0,
        Role::Human => 1,
    }
}

// [role][event] -> phrasings; one is picked at random when there are several.
const LINES: [[&[&str]; 6]; 2] = [
    // Automated side firing at the human.
    [
        &["Your ship is safe... what a let-down"],
        &["They never learn..."],
        &["Ok... the enemies are sort of stupid"],
        &["Wow, you're getting destroyed right now!"],
        &["A ship was sunk"],
        &["YES!! THEY FINALLY BEAT YOU!!"],
    ],
    // Human firing at the automated side.
    [
        &["Miss!"],
        &[
            "It didn't work the first time...",
            "What was the definition of insanity again?",
        ],
        &["Shooting the same spot doesn't really help..."],
        &["Wow. You actually hit that?", "Lucky shot I guess"],
        &["A ship was sunk"],
        &["You won? HOW?!?"],
    ],
];

/// All phrasings for `event` when fired by `role`. Never empty.
pub fn phrasings(role: Role, event: Event) -> &'static [&'static str] {
    LINES[role_slot(role)][event.slot()]
}

/// Pick the phrasing at `variant`, wrapping around the available choices.
pub fn line(role: Role, event: Event, variant: usize) -> &'static str {
    let choices = phrasings(role, event);
    choices[variant % choices.len()]
}
