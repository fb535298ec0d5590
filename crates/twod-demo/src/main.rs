mod scenes;
mod script;

use anyhow::{Context, Result};

use twod_engine::core::Game;
use twod_engine::logging::{init_logging, LoggingConfig};
use twod_engine::runtime::{Runtime, RuntimeConfig};
use twod_engine::surface::{DrawCmd, RecordingSurface, Surface};

use scenes::{DevScene, HeldKeys, Player};
use script::Script;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig::default()
        .title("twod demo")
        .target_fps(Some(60))
        .max_frames(Some(600));

    let mut surface = RecordingSurface::new(800.0, 600.0);
    let keys = HeldKeys::default();

    let mut game = Game::new();
    game.states_mut()
        .push(DevScene::new(Player::centered(surface.size()), keys.clone()));

    let mut script = Script::tour();
    let summary = Runtime::run_with(&config, &mut game, &mut surface, |game, frame| {
        script.feed(frame, game, &keys)
    })
    .context("demo loop failed")?;

    if !script.is_finished() {
        log::warn!("frame budget ran out before the input script finished");
    }

    let cmds = surface.take();
    let rects = cmds.iter().filter(|c| matches!(c, DrawCmd::Rect(_))).count();
    let texts = cmds.iter().filter(|c| matches!(c, DrawCmd::Text(_))).count();

    log::info!(
        "ran {} frames (exited={}), recorded {} draw calls ({rects} rects, {texts} texts), last fps {:.0}",
        summary.frames,
        summary.exited,
        cmds.len(),
        game.clock().fps(),
    );
    Ok(())
}
