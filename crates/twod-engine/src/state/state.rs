use crate::core::FrameCtx;

/// One application mode (menu, playing, pause overlay, ...).
///
/// Every hook defaults to a no-op, so a state implements only what it needs.
/// The paused flag is not part of the state: the owning `StateStack` keeps it.
pub trait State {
    /// Short label used in log output.
    fn name(&self) -> &str {
        "state"
    }

    /// Called once, when the state is pushed.
    fn on_enter(&mut self) {}

    /// Called once per frame while this state is on top and not paused.
    fn update(&mut self, ctx: &mut FrameCtx<'_>) {
        let _ = ctx;
    }

    /// Called once per frame while this state is on top, paused or not.
    fn render(&mut self, ctx: &mut FrameCtx<'_>) {
        let _ = ctx;
    }

    fn on_pause(&mut self) {}

    fn on_resume(&mut self) {}

    /// Called once, when the state is popped. The state is dropped right after.
    fn on_exit(&mut self) {}
}

/// State with no behavior; the default stack root.
#[derive(Debug, Default, Copy, Clone)]
pub struct EmptyState;

impl State for EmptyState {
    fn name(&self) -> &str {
        "root"
    }
}
