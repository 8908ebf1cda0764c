#![allow(dead_code)]

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use text_battleship::{grid_text, Board, GameError, Player, Role, Screen};

/// Screen that keeps everything it was asked to show.
#[derive(Debug, Default)]
pub struct Recorder {
    pub lines: Vec<String>,
    pub turns: Vec<Role>,
    pub renders: Vec<(Role, String)>,
}

impl Screen for Recorder {
    fn render(&mut self, board: &Board, owner: Role) {
        self.renders.push((owner, grid_text(board, owner)));
    }

    fn turn_started(&mut self, role: Role) {
        self.turns.push(role);
    }

    fn say(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Player that fires at a fixed list of coordinates.
pub struct Scripted {
    shots: VecDeque<(usize, usize)>,
}

impl Scripted {
    pub fn new(shots: &[(usize, usize)]) -> Self {
        Self {
            shots: shots.iter().copied().collect(),
        }
    }
}

impl Player for Scripted {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _target: &Board,
    ) -> Result<(usize, usize), GameError> {
        self.shots.pop_front().ok_or(GameError::InputClosed)
    }
}
