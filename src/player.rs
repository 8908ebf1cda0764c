use crate::{board::Board, common::GameError, players::Role};
use alloc::boxed::Box;
use rand::rngs::SmallRng;

/// Chooses where a side fires next.
pub trait Player {
    /// Pick a coordinate `(x, y)` on `target`, the opponent's board.
    /// Returned coordinates are always in `[0, BOARD_SIZE)`.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: &Board,
    ) -> Result<(usize, usize), GameError>;
}

/// One player per role.
pub struct Seats {
    automated: Box<dyn Player>,
    human: Box<dyn Player>,
}

impl Seats {
    pub fn new(automated: Box<dyn Player>, human: Box<dyn Player>) -> Self {
        Self { automated, human }
    }

    pub fn get_mut(&mut self, role: Role) -> &mut dyn Player {
        match role {
            Role::Automated => self.automated.as_mut(),
            Role::Human => self.human.as_mut(),
        }
    }
}
