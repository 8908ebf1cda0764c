//! Shot resolution: classify the target cell, apply the legal transition,
//! detect sunk ships and the end of the game, and report what happened.

use crate::board::{Board, Cell};
use crate::common::GameError;
use crate::config::{pacing, BOARD_SIZE};
use crate::interface::{Pacing, Screen};
use crate::messages::{self, Event};
use crate::player::Seats;
use crate::players::{Outcome, Role};
use crate::query::{query, Column};
use crate::ship::ShipClass;
use rand::{rngs::SmallRng, Rng};

/// What a shot did to the target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shot {
    /// Water became a miss.
    Miss,
    /// Cell was already a miss; nothing changed.
    RepeatMiss,
    /// Cell was already a hit; nothing changed.
    RepeatHit,
    /// A segment of `class` became a hit.
    Hit(ShipClass),
}

impl Shot {
    pub fn event(self) -> Event {
        match self {
            Shot::Miss => Event::Miss,
            Shot::RepeatMiss => Event::RepeatMiss,
            Shot::RepeatHit => Event::RepeatHit,
            Shot::Hit(_) => Event::Hit,
        }
    }
}

/// Result of scanning a board after a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// Cells of the hit class are still afloat.
    Survivors,
    /// The hit class is gone but other ships remain.
    ShipSunk,
    /// No ship cells remain anywhere.
    GameOver,
}

/// How a resolved turn left the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Continue,
    ShipSunk,
    GameOver { winner: Role },
}

/// Fire at `(x, y)` on `board`, applying the only legal transitions:
/// water to miss and ship segment to hit.
pub fn strike(board: &mut Board, x: usize, y: usize) -> Shot {
    match board.get(x, y) {
        Cell::Water => {
            board.set(x, y, Cell::Miss);
            Shot::Miss
        }
        Cell::Miss => Shot::RepeatMiss,
        Cell::Hit => Shot::RepeatHit,
        Cell::Ship(class) => {
            board.set(x, y, Cell::Hit);
            Shot::Hit(class)
        }
    }
}

/// Row-major scan after a hit on `hit`.
///
/// Stops at the first remaining cell of the same class. That treats a class
/// as a single ship, which only holds while the fleet has no two ships of the
/// same class.
pub fn scan_for_survivors(board: &Board, hit: ShipClass) -> Scan {
    let mut remaining_ships = false;
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            match board.get(x, y) {
                Cell::Ship(class) if class == hit => return Scan::Survivors,
                Cell::Ship(_) => remaining_ships = true,
                _ => {}
            }
        }
    }
    if remaining_ships {
        Scan::ShipSunk
    } else {
        Scan::GameOver
    }
}

/// Everything a turn needs besides the acting side's role.
pub struct Turn<'a> {
    pub boards: &'a mut Column<Board>,
    pub roles: &'a Column<Role>,
    pub outcome: &'a mut Outcome,
    pub rng: &'a mut SmallRng,
    pub seats: &'a mut Seats,
    pub screen: &'a mut dyn Screen,
    pub pacing: &'a mut dyn Pacing,
}

impl Turn<'_> {
    /// Announce `event` for `role`, picking among its phrasings at random.
    fn announce(&mut self, role: Role, event: Event) {
        let choices = messages::phrasings(role, event).len();
        let variant = if choices > 1 {
            self.rng.random_range(0..choices)
        } else {
            0
        };
        self.screen.say(messages::line(role, event, variant));
    }

    /// Draw every board through the dispatcher.
    pub fn render_all(&mut self) {
        query(
            self.boards.len(),
            (&*self.boards, self.roles),
            &mut *self.screen,
            render_system,
        );
    }
}

/// Dispatcher handler drawing one side's board.
pub fn render_system<S: Screen + ?Sized>(
    (board, role): (&Board, &Role),
    screen: &mut S,
    _entity: usize,
) {
    screen.render(board, *role);
}

/// Dispatcher handler resolving one shot by the side at `entity` against the
/// next side in entity order.
pub fn fire((role,): (&Role,), turn: &mut Turn<'_>, entity: usize) -> Result<(), GameError> {
    let role = *role;
    if turn.outcome.is_over() {
        log::warn!("{} turn skipped, game already decided", role);
        return Ok(());
    }
    let resolution = resolve(role, entity, turn)?;
    log::debug!("{} turn resolved: {:?}", role, resolution);

    turn.pacing.delay(pacing::REDRAW_MS);
    turn.render_all();
    Ok(())
}

/// Pick a target, strike it, and report the result.
pub fn resolve(role: Role, entity: usize, turn: &mut Turn<'_>) -> Result<Resolution, GameError> {
    turn.pacing.delay(pacing::TURN_MS);
    turn.screen.turn_started(role);
    if role == Role::Automated {
        turn.pacing.delay(pacing::THINKING_MS);
        turn.screen.say("Thinking...");
        turn.pacing.delay(pacing::AFTER_THINKING_MS);
    }

    let enemy = (entity + 1) % turn.boards.len().max(1);
    if enemy == entity {
        return Err(GameError::MissingEntity(enemy));
    }
    let target = turn
        .boards
        .get_mut(enemy)
        .ok_or(GameError::MissingEntity(enemy))?;
    let (x, y) = turn.seats.get_mut(role).select_target(turn.rng, target)?;
    let shot = strike(target, x, y);
    log::debug!("{} fired at ({}, {}): {:?}", role, x, y, shot);

    let scan = match shot {
        Shot::Hit(class) => Some(scan_for_survivors(target, class)),
        _ => None,
    };
    turn.announce(role, shot.event());

    let resolution = match scan {
        Some(Scan::ShipSunk) => {
            turn.pacing.delay(pacing::SHIP_SUNK_MS);
            turn.announce(role, Event::ShipSunk);
            Resolution::ShipSunk
        }
        Some(Scan::GameOver) => {
            turn.outcome.finish(role);
            log::info!("{} destroyed the last ship", role);
            turn.pacing.delay(pacing::GAME_OVER_MS);
            turn.announce(role, Event::Victory);
            Resolution::GameOver { winner: role }
        }
        Some(Scan::Survivors) | None => Resolution::Continue,
    };
    Ok(resolution)
}
