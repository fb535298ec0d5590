use crate::core::FrameCtx;
use crate::error::StateError;

use super::{EmptyState, State, StateCommand};

struct Entry {
    state: Box<dyn State>,
    paused: bool,
}

impl Entry {
    fn new(state: Box<dyn State>) -> Self {
        Self { state, paused: false }
    }
}

/// Ordered stack of states; only the top one is live.
///
/// A root state is installed at construction and can never be popped, so there
/// is always a top. States below the top receive nothing, whatever their paused
/// flag says.
///
/// Pause and resume are both toggles over the top's paused flag and call their
/// hook unconditionally. Use [`set_paused`](Self::set_paused) for an absolute value.
pub struct StateStack {
    root: Entry,
    above: Vec<Entry>,
}

impl StateStack {
    /// Creates a stack whose root does nothing.
    pub fn new() -> Self {
        Self::with_root(EmptyState)
    }

    /// Creates a stack with a custom root.
    ///
    /// The root is live immediately; its `on_enter` is not called.
    pub fn with_root(root: impl State + 'static) -> Self {
        Self {
            root: Entry::new(Box::new(root)),
            above: Vec::new(),
        }
    }

    fn top_entry(&self) -> &Entry {
        self.above.last().unwrap_or(&self.root)
    }

    fn top_entry_mut(&mut self) -> &mut Entry {
        match self.above.last_mut() {
            Some(entry) => entry,
            None => &mut self.root,
        }
    }

    /// Number of states, root included. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.above.len() + 1
    }

    /// Whether only the root remains.
    #[inline]
    pub fn is_at_root(&self) -> bool {
        self.above.is_empty()
    }

    pub fn top(&self) -> &dyn State {
        self.top_entry().state.as_ref()
    }

    pub fn top_mut(&mut self) -> &mut dyn State {
        self.top_entry_mut().state.as_mut()
    }

    /// Paused flag of the top state.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.top_entry().paused
    }

    /// Makes `state` the top and calls its `on_enter`.
    ///
    /// The previous top simply stops receiving frames; it is not paused.
    pub fn push(&mut self, state: impl State + 'static) {
        self.push_boxed(Box::new(state));
    }

    pub fn push_boxed(&mut self, state: Box<dyn State>) {
        log::debug!("push state '{}' (depth {})", state.name(), self.len() + 1);
        self.above.push(Entry::new(state));
        self.top_entry_mut().state.on_enter();
    }

    /// Calls `on_exit` on the top state and drops it.
    ///
    /// The state underneath becomes live again without any hook; resuming it is
    /// the caller's business.
    pub fn pop(&mut self) -> Result<(), StateError> {
        let Some(top) = self.above.last_mut() else {
            return Err(StateError::EmptyStack);
        };

        top.state.on_exit();
        if let Some(entry) = self.above.pop() {
            log::debug!("popped state '{}' (depth {})", entry.state.name(), self.len());
        }
        Ok(())
    }

    /// Toggles the top's paused flag and calls its `on_pause`.
    pub fn pause(&mut self) {
        let top = self.top_entry_mut();
        top.paused = !top.paused;
        log::debug!("pause '{}' -> paused={}", top.state.name(), top.paused);
        top.state.on_pause();
    }

    /// Toggles the top's paused flag and calls its `on_resume`.
    pub fn resume(&mut self) {
        let top = self.top_entry_mut();
        top.paused = !top.paused;
        log::debug!("resume '{}' -> paused={}", top.state.name(), top.paused);
        top.state.on_resume();
    }

    /// Sets the top's paused flag.
    ///
    /// Calls `on_pause` or `on_resume` only when the flag actually changes.
    pub fn set_paused(&mut self, paused: bool) {
        if self.is_paused() == paused {
            return;
        }
        if paused { self.pause() } else { self.resume() }
    }

    /// Runs one frame on the top state: `update` unless paused, then `render`.
    pub fn update(&mut self, ctx: &mut FrameCtx<'_>) {
        let top = self.top_entry_mut();
        ctx.paused = top.paused;
        if !top.paused {
            top.state.update(ctx);
        }
        top.state.render(ctx);
    }

    /// Forwards `render` to the top state.
    pub fn render(&mut self, ctx: &mut FrameCtx<'_>) {
        let top = self.top_entry_mut();
        ctx.paused = top.paused;
        top.state.render(ctx);
    }

    /// Applies one deferred command.
    ///
    /// `Exit` is owned by the frame driver and is ignored here.
    pub fn apply(&mut self, cmd: StateCommand) -> Result<(), StateError> {
        match cmd {
            StateCommand::Push(state) => self.push_boxed(state),
            StateCommand::Pop => self.pop()?,
            StateCommand::Pause => self.pause(),
            StateCommand::Resume => self.resume(),
            StateCommand::SetPaused(paused) => self.set_paused(paused),
            StateCommand::Exit => {}
        }
        Ok(())
    }
}

impl Default for StateStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::test_support::with_ctx;

    pub(crate) type CallLog = Rc<RefCell<Vec<String>>>;

    /// Records every hook call as `"<name>.<hook>"`.
    pub(crate) struct Tracer {
        name: &'static str,
        log: CallLog,
    }

    impl Tracer {
        pub(crate) fn new(name: &'static str, log: &CallLog) -> Self {
            Self { name, log: log.clone() }
        }

        fn record(&self, hook: &str) {
            self.log.borrow_mut().push(format!("{}.{}", self.name, hook));
        }
    }

    impl State for Tracer {
        fn name(&self) -> &str {
            self.name
        }
        fn on_enter(&mut self) {
            self.record("enter");
        }
        fn update(&mut self, _ctx: &mut FrameCtx<'_>) {
            self.record("update");
        }
        fn render(&mut self, _ctx: &mut FrameCtx<'_>) {
            self.record("render");
        }
        fn on_pause(&mut self) {
            self.record("pause");
        }
        fn on_resume(&mut self) {
            self.record("resume");
        }
        fn on_exit(&mut self) {
            self.record("exit");
        }
    }

    fn take(log: &CallLog) -> Vec<String> {
        std::mem::take(&mut *log.borrow_mut())
    }

    fn frame(stack: &mut StateStack) {
        with_ctx(|ctx| stack.update(ctx));
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_stack_has_root_on_top() {
        let stack = StateStack::new();
        assert_eq!(stack.len(), 1);
        assert!(stack.is_at_root());
        assert_eq!(stack.top().name(), "root");
        assert!(!stack.is_paused());
    }

    #[test]
    fn custom_root_is_not_entered() {
        let log = CallLog::default();
        let mut stack = StateStack::with_root(Tracer::new("root", &log));
        assert!(take(&log).is_empty());

        frame(&mut stack);
        assert_eq!(take(&log), ["root.update", "root.render"]);
    }

    // ── push / pop ────────────────────────────────────────────────────────

    #[test]
    fn push_enters_once_before_any_frame() {
        let log = CallLog::default();
        let mut stack = StateStack::new();
        stack.push(Tracer::new("menu", &log));
        assert_eq!(take(&log), ["menu.enter"]);

        frame(&mut stack);
        assert_eq!(take(&log), ["menu.update", "menu.render"]);
    }

    #[test]
    fn pushed_over_state_receives_nothing() {
        let log = CallLog::default();
        let mut stack = StateStack::with_root(Tracer::new("root", &log));
        stack.push(Tracer::new("menu", &log));
        take(&log);

        frame(&mut stack);
        with_ctx(|ctx| stack.render(ctx));
        assert_eq!(take(&log), ["menu.update", "menu.render", "menu.render"]);
    }

    #[test]
    fn pop_exits_once_and_uncovers_previous_without_hooks() {
        let log = CallLog::default();
        let mut stack = StateStack::with_root(Tracer::new("root", &log));
        stack.push(Tracer::new("menu", &log));
        take(&log);

        stack.pop().unwrap();
        assert_eq!(take(&log), ["menu.exit"]);
        assert_eq!(stack.top().name(), "root");

        frame(&mut stack);
        assert_eq!(take(&log), ["root.update", "root.render"]);
    }

    #[test]
    fn pop_at_root_is_empty_stack() {
        let log = CallLog::default();
        let mut stack = StateStack::with_root(Tracer::new("root", &log));
        assert_eq!(stack.pop(), Err(StateError::EmptyStack));
        assert!(take(&log).is_empty());
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn top_tracks_most_recent_unpopped_push() {
        let log = CallLog::default();
        let mut stack = StateStack::new();
        let mut expected: Vec<&'static str> = vec!["root"];

        // Mixed sequence that never pops past the root.
        let script: &[Option<&'static str>] = &[
            Some("a"), Some("b"), None, Some("c"), Some("d"), None, None, Some("e"), None, None,
        ];
        for step in script.iter().copied() {
            match step {
                Some(name) => {
                    stack.push(Tracer::new(name, &log));
                    expected.push(name);
                }
                None => {
                    stack.pop().unwrap();
                    expected.pop();
                }
            }
            assert_eq!(stack.top().name(), *expected.last().unwrap());
            assert_eq!(stack.len(), expected.len());
        }
    }

    #[test]
    fn popped_state_is_dropped() {
        struct DropFlag(Rc<RefCell<bool>>);
        impl State for DropFlag {}
        impl Drop for DropFlag {
            fn drop(&mut self) {
                *self.0.borrow_mut() = true;
            }
        }

        let dropped = Rc::new(RefCell::new(false));
        let mut stack = StateStack::new();
        stack.push(DropFlag(dropped.clone()));
        assert!(!*dropped.borrow());
        stack.pop().unwrap();
        assert!(*dropped.borrow());
    }

    // ── pause / resume ────────────────────────────────────────────────────

    #[test]
    fn paused_top_renders_but_does_not_update() {
        let log = CallLog::default();
        let mut stack = StateStack::with_root(Tracer::new("root", &log));
        stack.pause();
        assert!(stack.is_paused());
        assert_eq!(take(&log), ["root.pause"]);

        frame(&mut stack);
        assert_eq!(take(&log), ["root.render"]);
    }

    #[test]
    fn pause_twice_toggles_back() {
        let log = CallLog::default();
        let mut stack = StateStack::with_root(Tracer::new("root", &log));
        stack.pause();
        stack.pause();
        assert!(!stack.is_paused());
        assert_eq!(take(&log), ["root.pause", "root.pause"]);
    }

    #[test]
    fn resume_is_also_a_toggle() {
        let log = CallLog::default();
        let mut stack = StateStack::with_root(Tracer::new("root", &log));
        stack.resume();
        assert!(stack.is_paused());
        assert_eq!(take(&log), ["root.resume"]);
    }

    #[test]
    fn set_paused_only_fires_on_change() {
        let log = CallLog::default();
        let mut stack = StateStack::with_root(Tracer::new("root", &log));
        stack.set_paused(false);
        assert!(take(&log).is_empty());

        stack.set_paused(true);
        stack.set_paused(true);
        assert!(stack.is_paused());
        assert_eq!(take(&log), ["root.pause"]);

        stack.set_paused(false);
        assert!(!stack.is_paused());
        assert_eq!(take(&log), ["root.resume"]);
    }

    #[test]
    fn paused_flag_below_top_is_ignored() {
        let log = CallLog::default();
        let mut stack = StateStack::with_root(Tracer::new("root", &log));
        stack.push(Tracer::new("game", &log));
        stack.pause();
        stack.push(Tracer::new("overlay", &log));
        assert!(!stack.is_paused());
        take(&log);

        frame(&mut stack);
        assert_eq!(take(&log), ["overlay.update", "overlay.render"]);

        stack.pop().unwrap();
        assert!(stack.is_paused());
        take(&log);
        frame(&mut stack);
        assert_eq!(take(&log), ["game.render"]);
    }

    #[test]
    fn render_sees_paused_flag_of_the_top() {
        use crate::state::HookState;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut stack = StateStack::new();
        stack.push(HookState::new("hud", seen.clone()).with_render(
            |seen, ctx| seen.borrow_mut().push(ctx.paused),
        ));

        frame(&mut stack);
        stack.pause();
        frame(&mut stack);
        with_ctx(|ctx| stack.render(ctx));
        stack.resume();
        frame(&mut stack);

        assert_eq!(*seen.borrow(), [false, true, true, false]);
    }

    // ── commands ──────────────────────────────────────────────────────────

    #[test]
    fn apply_forwards_to_operations() {
        let log = CallLog::default();
        let mut stack = StateStack::new();

        stack.apply(StateCommand::Push(Box::new(Tracer::new("menu", &log)))).unwrap();
        stack.apply(StateCommand::Pause).unwrap();
        stack.apply(StateCommand::SetPaused(false)).unwrap();
        stack.apply(StateCommand::Exit).unwrap();
        stack.apply(StateCommand::Pop).unwrap();

        assert_eq!(take(&log), ["menu.enter", "menu.pause", "menu.resume", "menu.exit"]);
        assert_eq!(stack.apply(StateCommand::Pop), Err(StateError::EmptyStack));
    }

    // ── lifecycle scenario ────────────────────────────────────────────────

    #[test]
    fn menu_then_pause_scenario() {
        let log = CallLog::default();
        let mut stack = StateStack::with_root(Tracer::new("root", &log));

        stack.push(Tracer::new("menu", &log));
        assert_eq!(take(&log), ["menu.enter"]);
        frame(&mut stack);
        assert_eq!(take(&log), ["menu.update", "menu.render"]);

        stack.pop().unwrap();
        assert_eq!(take(&log), ["menu.exit"]);
        assert_eq!(stack.top().name(), "root");

        stack.pause();
        frame(&mut stack);
        assert_eq!(take(&log), ["root.pause", "root.render"]);

        stack.resume();
        frame(&mut stack);
        assert_eq!(take(&log), ["root.resume", "root.update", "root.render"]);
    }
}
