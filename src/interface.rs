//! Output and pacing collaborators used by the turn resolver.

use crate::board::Board;
use crate::players::Role;

/// Where boards and turn messages go.
pub trait Screen {
    /// Draw `board`, owned by the side playing as `owner`.
    fn render(&mut self, board: &Board, owner: Role);

    /// Announce that `role` is about to fire.
    fn turn_started(&mut self, role: Role);

    /// Print a single message line.
    fn say(&mut self, line: &str);
}

/// Blocking delay between visible steps.
pub trait Pacing {
    fn delay(&mut self, ms: u64);
}

/// Screen that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl Screen for Headless {
    fn render(&mut self, _board: &Board, _owner: Role) {}
    fn turn_started(&mut self, _role: Role) {}
    fn say(&mut self, _line: &str) {}
}

/// Pacing that never waits.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPacing;

impl Pacing for NoPacing {
    fn delay(&mut self, _ms: u64) {}
}

#[cfg(feature = "std")]
pub use terminal::{SleepPacing, TerminalScreen};

#[cfg(feature = "std")]
mod terminal {
    use super::{Pacing, Screen};
    use crate::board::Board;
    use crate::players::Role;
    use crate::render::grid_text;
    use std::io::{self, Write};
    use std::time::Duration;

    /// Prints boards and messages to stdout.
    #[derive(Debug, Default)]
    pub struct TerminalScreen;

    impl TerminalScreen {
        pub fn new() -> Self {
            Self
        }
    }

    impl Screen for TerminalScreen {
        fn render(&mut self, board: &Board, owner: Role) {
            std::println!("{} board:", owner);
            std::print!("{}", grid_text(board, owner));
            let _ = io::stdout().flush();
        }

        fn turn_started(&mut self, role: Role) {
            std::println!("{} turn...", role);
        }

        fn say(&mut self, line: &str) {
            std::println!("{}", line);
        }
    }

    /// Sleeps the current thread.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct SleepPacing;

    impl Pacing for SleepPacing {
        fn delay(&mut self, ms: u64) {
            std::thread::sleep(Duration::from_millis(ms));
        }
    }
}
