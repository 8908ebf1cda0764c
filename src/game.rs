use crate::{
    board::Cell,
    common::GameError,
    interface::{Pacing, Screen},
    player::Seats,
    players::{Outcome, Players, Role},
    query::{try_query, Column},
    turn::{fire, Turn},
};
use alloc::vec::Vec;
use rand::rngs::SmallRng;

/// Per-side tallies at the end of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SideSummary {
    pub role: Role,
    /// Shots that landed on this side's ships.
    pub hits_taken: usize,
    /// Shots that landed in this side's water.
    pub misses_taken: usize,
    pub ship_cells_left: usize,
}

/// Serializable view of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Summary {
    pub outcome: Outcome,
    pub rounds: usize,
    pub sides: Vec<SideSummary>,
}

/// A whole game: both sides, the outcome, and the collaborators a turn uses.
pub struct Game<S, P> {
    players: Players,
    outcome: Outcome,
    rng: SmallRng,
    seats: Seats,
    screen: S,
    pacing: P,
    rounds: usize,
}

impl<S: Screen, P: Pacing> Game<S, P> {
    /// Start a game with freshly placed fleets for both sides.
    pub fn new(mut rng: SmallRng, seats: Seats, screen: S, pacing: P) -> Result<Self, GameError> {
        let players = Players::random(&mut rng)?;
        Ok(Self::with_players(players, rng, seats, screen, pacing))
    }

    /// Start a game on boards prepared by the caller.
    pub fn with_players(
        players: Players,
        rng: SmallRng,
        seats: Seats,
        screen: S,
        pacing: P,
    ) -> Self {
        Self {
            players,
            outcome: Outcome::InProgress,
            rng,
            seats,
            screen,
            pacing,
            rounds: 0,
        }
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    fn turn(&mut self) -> (usize, &Column<Role>, Turn<'_>) {
        let entities = self.players.len();
        let Players { boards, roles, .. } = &mut self.players;
        let roles: &Column<Role> = roles;
        (
            entities,
            roles,
            Turn {
                boards,
                roles,
                outcome: &mut self.outcome,
                rng: &mut self.rng,
                seats: &mut self.seats,
                screen: &mut self.screen,
                pacing: &mut self.pacing,
            },
        )
    }

    /// Draw every board.
    pub fn render(&mut self) {
        let (_, _, mut turn) = self.turn();
        turn.render_all();
    }

    /// Let every side fire once, in entity order.
    pub fn play_round(&mut self) -> Result<(), GameError> {
        let (entities, roles, mut turn) = self.turn();
        try_query(entities, (roles,), &mut turn, fire)?;
        self.rounds += 1;
        Ok(())
    }

    /// Play rounds until one fleet is gone and return the winner.
    pub fn run(&mut self) -> Result<Role, GameError> {
        self.render();
        loop {
            if let Some(winner) = self.outcome.winner() {
                log::info!("game over after {} round(s), {} won", self.rounds, winner);
                return Ok(winner);
            }
            self.play_round()?;
        }
    }

    pub fn summary(&self) -> Summary {
        let sides = self
            .players
            .boards
            .iter()
            .filter_map(|(entity, board)| {
                let role = *self.players.roles.get(entity)?;
                Some(SideSummary {
                    role,
                    hits_taken: board.count(|c| c == Cell::Hit),
                    misses_taken: board.count(|c| c == Cell::Miss),
                    ship_cells_left: board.ship_cells(),
                })
            })
            .collect();
        Summary {
            outcome: self.outcome,
            rounds: self.rounds,
            sides,
        }
    }
}
