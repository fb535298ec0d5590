use crate::core::FrameCtx;

use super::State;

type Hook<P> = Box<dyn FnMut(&mut P)>;
type FrameHook<P> = Box<dyn FnMut(&mut P, &mut FrameCtx<'_>)>;

/// A state assembled from optional closures over a `props` payload.
///
/// Handy for small scenes that do not warrant their own type:
///
/// ```ignore
/// let dev = HookState::new("dev", Player::default())
///     .with_update(|p, ctx| p.step(ctx.time.dt))
///     .with_render(|p, ctx| p.draw(ctx.surface));
/// ```
///
/// Unset hooks are no-ops.
pub struct HookState<P> {
    name: String,
    props: P,

    enter: Option<Hook<P>>,
    update: Option<FrameHook<P>>,
    render: Option<FrameHook<P>>,
    pause: Option<Hook<P>>,
    resume: Option<Hook<P>>,
    exit: Option<Hook<P>>,
}

impl<P> HookState<P> {
    pub fn new(name: impl Into<String>, props: P) -> Self {
        Self {
            name: name.into(),
            props,
            enter: None,
            update: None,
            render: None,
            pause: None,
            resume: None,
            exit: None,
        }
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn props_mut(&mut self) -> &mut P {
        &mut self.props
    }

    pub fn with_enter(mut self, f: impl FnMut(&mut P) + 'static) -> Self {
        self.enter = Some(Box::new(f));
        self
    }

    pub fn with_update(mut self, f: impl FnMut(&mut P, &mut FrameCtx<'_>) + 'static) -> Self {
        self.update = Some(Box::new(f));
        self
    }

    pub fn with_render(mut self, f: impl FnMut(&mut P, &mut FrameCtx<'_>) + 'static) -> Self {
        self.render = Some(Box::new(f));
        self
    }

    pub fn with_pause(mut self, f: impl FnMut(&mut P) + 'static) -> Self {
        self.pause = Some(Box::new(f));
        self
    }

    pub fn with_resume(mut self, f: impl FnMut(&mut P) + 'static) -> Self {
        self.resume = Some(Box::new(f));
        self
    }

    pub fn with_exit(mut self, f: impl FnMut(&mut P) + 'static) -> Self {
        self.exit = Some(Box::new(f));
        self
    }
}

fn call<P>(hook: &mut Option<Hook<P>>, props: &mut P) {
    if let Some(f) = hook {
        f(props);
    }
}

fn call_frame<P>(hook: &mut Option<FrameHook<P>>, props: &mut P, ctx: &mut FrameCtx<'_>) {
    if let Some(f) = hook {
        f(props, ctx);
    }
}

impl<P> State for HookState<P> {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_enter(&mut self) {
        call(&mut self.enter, &mut self.props);
    }

    fn update(&mut self, ctx: &mut FrameCtx<'_>) {
        call_frame(&mut self.update, &mut self.props, ctx);
    }

    fn render(&mut self, ctx: &mut FrameCtx<'_>) {
        call_frame(&mut self.render, &mut self.props, ctx);
    }

    fn on_pause(&mut self) {
        call(&mut self.pause, &mut self.props);
    }

    fn on_resume(&mut self) {
        call(&mut self.resume, &mut self.props);
    }

    fn on_exit(&mut self) {
        call(&mut self.exit, &mut self.props);
    }
}
