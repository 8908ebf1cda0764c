use crate::{board::Board, common::GameError, config::BOARD_SIZE, player::Player};
use rand::{rngs::SmallRng, Rng};

/// Fires at a uniformly random cell, including cells already shot.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        _target: &Board,
    ) -> Result<(usize, usize), GameError> {
        let x = rng.random_range(0..BOARD_SIZE);
        let y = rng.random_range(0..BOARD_SIZE);
        Ok((x, y))
    }
}
