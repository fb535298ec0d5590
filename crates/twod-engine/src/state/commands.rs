use std::fmt;

use super::State;

/// Stack mutation requested from inside a frame or from a host callback.
pub enum StateCommand {
    Push(Box<dyn State>),
    Pop,
    Pause,
    Resume,
    SetPaused(bool),
    /// Ask the frame driver to stop the loop.
    Exit,
}

impl fmt::Debug for StateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateCommand::Push(s) => f.debug_tuple("Push").field(&s.name()).finish(),
            StateCommand::Pop => f.write_str("Pop"),
            StateCommand::Pause => f.write_str("Pause"),
            StateCommand::Resume => f.write_str("Resume"),
            StateCommand::SetPaused(p) => f.debug_tuple("SetPaused").field(p).finish(),
            StateCommand::Exit => f.write_str("Exit"),
        }
    }
}

/// Buffered stack commands.
///
/// Commands are applied in order by the frame driver at the next frame boundary,
/// never while a state callback is running.
#[derive(Debug, Default)]
pub struct StateCommands {
    queue: Vec<StateCommand>,
}

impl StateCommands {
    pub fn push(&mut self, state: impl State + 'static) {
        self.queue.push(StateCommand::Push(Box::new(state)));
    }

    pub fn push_boxed(&mut self, state: Box<dyn State>) {
        self.queue.push(StateCommand::Push(state));
    }

    pub fn pop(&mut self) {
        self.queue.push(StateCommand::Pop);
    }

    pub fn pause(&mut self) {
        self.queue.push(StateCommand::Pause);
    }

    pub fn resume(&mut self) {
        self.queue.push(StateCommand::Resume);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.queue.push(StateCommand::SetPaused(paused));
    }

    pub fn exit(&mut self) {
        self.queue.push(StateCommand::Exit);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Removes and yields queued commands in submission order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, StateCommand> {
        self.queue.drain(..)
    }
}
