use twod_engine::core::{Game, LoopControl};
use twod_engine::time::ClockSource;

use crate::scenes::{timed_menu, HeldKeys};

/// Host-side input standing in for keyboard listeners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    Press(char),
    Release(char),
    Pause,
    Resume,
    OpenMenu { frames: u32 },
    Quit,
}

/// Frame-stamped input timeline.
///
/// Events must be sorted by frame; several may share one frame.
#[derive(Debug, Clone)]
pub struct Script {
    events: Vec<(u64, Action)>,
    next: usize,
}

impl Script {
    pub fn new(mut events: Vec<(u64, Action)>) -> Self {
        events.sort_by_key(|(frame, _)| *frame);
        Self { events, next: 0 }
    }

    /// The walk-pause-menu tour used by the binary.
    pub fn tour() -> Self {
        Self::new(vec![
            (5, Action::Press('d')),
            (35, Action::Release('d')),
            (40, Action::Press('s')),
            (55, Action::Pause),
            (85, Action::Resume),
            (100, Action::Release('s')),
            (110, Action::OpenMenu { frames: 30 }),
            (170, Action::Quit),
        ])
    }

    /// Feeds every event due at `frame` into `game` and `keys`.
    pub fn feed<S: ClockSource>(&mut self, frame: u64, game: &mut Game<S>, keys: &HeldKeys) -> LoopControl {
        while let Some(&(at, action)) = self.events.get(self.next) {
            if at > frame {
                break;
            }
            self.next += 1;
            log::debug!("frame {frame}: {action:?}");

            match action {
                Action::Press(c) => {
                    keys.borrow_mut().insert(c);
                }
                Action::Release(c) => {
                    keys.borrow_mut().remove(&c);
                }
                Action::Pause => game.commands().pause(),
                Action::Resume => game.commands().resume(),
                Action::OpenMenu { frames } => game.commands().push(timed_menu(frames)),
                Action::Quit => game.commands().exit(),
            }
        }
        LoopControl::Continue
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.events.len()
    }
}
