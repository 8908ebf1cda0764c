//! The two sides of a game, stored as parallel columns, and the game outcome.

use crate::board::Board;
use crate::common::BoardError;
use crate::query::Column;
use core::fmt;
use rand::Rng;

/// Who is choosing coordinates for a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Role {
    Automated,
    Human,
}

impl Role {
    /// Label shown in turn banners.
    pub const fn label(self) -> &'static str {
        match self {
            Role::Automated => "AI",
            Role::Human => "Player",
        }
    }

    pub const fn opponent(self) -> Role {
        match self {
            Role::Automated => Role::Human,
            Role::Human => Role::Automated,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-side state. Entity 0 is the automated side, entity 1 the human.
#[derive(Debug, Clone, Default)]
pub struct Players {
    len: usize,
    pub boards: Column<Board>,
    pub roles: Column<Role>,
}

impl Players {
    /// Both sides with freshly randomized fleets, automated side first.
    pub fn random<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let mut players = Players::default();
        players.spawn(Board::random(rng)?, Role::Automated);
        players.spawn(Board::random(rng)?, Role::Human);
        Ok(players)
    }

    /// Add a side and return its entity index.
    pub fn spawn(&mut self, board: Board, role: Role) -> usize {
        let entity = self.len;
        self.boards.push(board);
        self.roles.push(role);
        self.len += 1;
        entity
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entity index of the side with `role`.
    pub fn entity_of(&self, role: Role) -> Option<usize> {
        self.roles.iter().find(|(_, r)| **r == role).map(|(i, _)| i)
    }

    pub fn board_of(&self, role: Role) -> Option<&Board> {
        self.entity_of(role).and_then(|e| self.boards.get(e))
    }
}

/// Whether the game is still running, and who won if not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Outcome {
    #[default]
    InProgress,
    Over { winner: Role },
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        matches!(self, Outcome::Over { .. })
    }

    pub fn winner(&self) -> Option<Role> {
        match self {
            Outcome::Over { winner } => Some(*winner),
            Outcome::InProgress => None,
        }
    }

    /// Role of the side whose fleet was destroyed.
    pub fn loser(&self) -> Option<Role> {
        self.winner().map(Role::opponent)
    }

    /// Record the winner. The first call wins; later calls are ignored.
    pub fn finish(&mut self, winner: Role) -> bool {
        if self.is_over() {
            log::warn!("outcome already set, ignoring win for {}", winner);
            return false;
        }
        *self = Outcome::Over { winner };
        true
    }
}
