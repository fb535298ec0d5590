use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use twod_engine::coords::Vec2;
use twod_engine::core::FrameCtx;
use twod_engine::paint::Color;
use twod_engine::state::{HookState, State};
use twod_engine::surface::TextStyle;

/// Keys currently held, shared between the input script and the scenes.
pub type HeldKeys = Rc<RefCell<HashSet<char>>>;

const PLAYER_SPEED: f32 = 150.0;

/// Player square.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
}

impl Player {
    pub fn centered(surface_size: Vec2) -> Self {
        Self {
            pos: surface_size * 0.5,
            size: 32.0,
            color: Color::from_hex("#0FA").unwrap_or(Color::WHITE),
        }
    }

    /// Moves along the first held direction key (WASD, case-insensitive).
    pub fn step(&mut self, keys: &HashSet<char>, dt: f32) {
        let held = |c: char| keys.contains(&c) || keys.contains(&c.to_ascii_uppercase());
        let dir = if held('w') {
            Vec2::new(0.0, -1.0)
        } else if held('s') {
            Vec2::new(0.0, 1.0)
        } else if held('a') {
            Vec2::new(-1.0, 0.0)
        } else if held('d') {
            Vec2::new(1.0, 0.0)
        } else {
            return;
        };
        self.pos = self.pos + dir * (PLAYER_SPEED * dt);
    }
}

/// Free-roam scene: a player square plus an FPS readout.
///
/// While paused it keeps drawing the frozen frame with a banner on top.
pub struct DevScene {
    player: Player,
    keys: HeldKeys,
}

impl DevScene {
    pub fn new(player: Player, keys: HeldKeys) -> Self {
        Self { player, keys }
    }
}

impl State for DevScene {
    fn name(&self) -> &str {
        "dev"
    }

    fn on_enter(&mut self) {
        self.keys.borrow_mut().clear();
        log::info!("dev scene entered, player at ({:.1}, {:.1})", self.player.pos.x, self.player.pos.y);
    }

    fn update(&mut self, ctx: &mut FrameCtx<'_>) {
        self.player.step(&self.keys.borrow(), ctx.dt() as f32);
    }

    fn render(&mut self, ctx: &mut FrameCtx<'_>) {
        ctx.surface.clear();
        if let Err(e) = ctx.draw_fps(30.0, 30.0) {
            log::warn!("fps readout skipped: {e}");
        }

        let p = &self.player;
        ctx.surface.fill_rect(p.pos, Vec2::new(p.size, p.size), p.color);

        if ctx.paused {
            let size = ctx.surface.size();
            let style = TextStyle::new("monospace", 32.0, Color::WHITE);
            ctx.surface.fill_text("PAUSED", Vec2::new(size.x * 0.5 - 60.0, size.y * 0.5), &style);
        }
    }

    fn on_pause(&mut self) {
        log::info!("dev scene paused");
    }

    fn on_resume(&mut self) {
        log::info!("dev scene resumed");
    }

    fn on_exit(&mut self) {
        log::info!("dev scene exited");
    }
}

/// Menu overlay that closes itself after `frames` frames.
pub fn timed_menu(frames: u32) -> HookState<u32> {
    HookState::new("menu", frames)
        .with_enter(|left| log::info!("menu opened for {left} frames"))
        .with_update(|left, ctx| {
            *left = left.saturating_sub(1);
            if *left == 0 {
                ctx.commands.pop();
            }
        })
        .with_render(|left, ctx| {
            ctx.surface.clear();
            let style = TextStyle::new("monospace", 24.0, Color::GREEN);
            ctx.surface.fill_text(&format!("MENU ({left})"), Vec2::new(40.0, 80.0), &style);
        })
        .with_exit(|_| log::info!("menu closed"))
}
