use std::time::{Duration, Instant};

use anyhow::{bail, Result};

use crate::core::{Game, LoopControl};
use crate::surface::Surface;
use crate::time::ClockSource;

use super::config::RuntimeConfig;

/// Outcome of a finished run.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    /// Whether the loop ended because a state asked for it.
    pub exited: bool,
}

/// Blocking host loop for headless or simple hosts.
///
/// Windowed hosts usually call `Game::frame` from their own redraw callback
/// instead.
pub struct Runtime;

impl Runtime {
    pub fn run<S: ClockSource>(
        config: &RuntimeConfig,
        game: &mut Game<S>,
        surface: &mut dyn Surface,
    ) -> Result<RunSummary> {
        Self::run_with(config, game, surface, |_, _| LoopControl::Continue)
    }

    /// Like [`run`](Self::run), calling `between_frames` before every frame.
    ///
    /// This is where a host feeds input into `game.commands()`. Returning
    /// `LoopControl::Exit` stops the loop before that frame runs.
    pub fn run_with<S, F>(
        config: &RuntimeConfig,
        game: &mut Game<S>,
        surface: &mut dyn Surface,
        mut between_frames: F,
    ) -> Result<RunSummary>
    where
        S: ClockSource,
        F: FnMut(&mut Game<S>, u64) -> LoopControl,
    {
        let interval = match config.target_fps {
            Some(0) => bail!("{}: target_fps must be greater than zero", config.title),
            Some(fps) => Some(Duration::from_secs_f64(1.0 / fps as f64)),
            None => None,
        };

        log::info!(
            "{}: starting loop (target_fps={:?}, max_frames={:?})",
            config.title,
            config.target_fps,
            config.max_frames,
        );

        let mut frames = 0u64;
        let mut exited = false;

        loop {
            if config.max_frames.is_some_and(|max| frames >= max) {
                break;
            }
            if between_frames(game, frames) == LoopControl::Exit {
                break;
            }

            let started = Instant::now();
            let control = game.frame(surface);
            frames += 1;

            if control == LoopControl::Exit {
                exited = true;
                break;
            }

            if let Some(interval) = interval {
                let spent = started.elapsed();
                if spent < interval {
                    std::thread::sleep(interval - spent);
                }
            }
        }

        log::info!("{}: loop finished after {frames} frames", config.title);
        Ok(RunSummary { frames, exited })
    }
}
