//! Effect Playback Loop
//!
//! Owns the terminal session: builds a stage sized to the terminal, runs
//! the effect one tick per frame interval, and paints each finished frame.
//! The loop exits when the effect completes or the user quits.

use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use textfx_core::effects::{expand, fireworks, wipe};
use textfx_core::effects::{ExpandConfig, FireworksConfig, WipeConfig};
use textfx_core::{CanvasBounds, EffectRunner, RunState};

use crate::render::EffectCanvas;
use crate::stage::TerminalStage;

/// Target frame interval (~30fps)
const FRAME_DURATION_MS: u64 = 33;

/// The built-in effects selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Characters expand outward from the canvas center
    Expand,
    /// A directional sweep reveals characters group by group
    Wipe,
    /// Characters launch as firework shells and fall into place
    Fireworks,
}

/// Error for an unrecognized effect name
#[derive(Debug, thiserror::Error)]
#[error("unknown effect {0:?}: expected expand, wipe, or fireworks")]
pub struct UnknownEffect(String);

impl std::str::FromStr for EffectKind {
    type Err = UnknownEffect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expand" => Ok(Self::Expand),
            "wipe" => Ok(Self::Wipe),
            "fireworks" => Ok(Self::Fireworks),
            other => Err(UnknownEffect(other.to_string())),
        }
    }
}

impl EffectKind {
    /// Parse the effect's config from JSON (or take defaults) and run the
    /// preparation phase against the stage.
    fn prepare(
        self,
        stage: &mut TerminalStage,
        config_json: Option<&str>,
    ) -> anyhow::Result<EffectRunner> {
        let runner = match self {
            Self::Expand => {
                let config: ExpandConfig = parse_config(config_json)?;
                expand::prepare(stage, &config)?
            }
            Self::Wipe => {
                let config: WipeConfig = parse_config(config_json)?;
                wipe::prepare(stage, &config)?
            }
            Self::Fireworks => {
                let config: FireworksConfig = parse_config(config_json)?;
                fireworks::prepare(stage, &config)?
            }
        };
        Ok(runner)
    }
}

fn parse_config<C: Default + serde::de::DeserializeOwned>(
    json: Option<&str>,
) -> anyhow::Result<C> {
    match json {
        Some(json) => serde_json::from_str(json).context("invalid effect config"),
        None => Ok(C::default()),
    }
}

/// Run one effect over the given text in the current terminal.
///
/// Takes over the screen for the duration of the run; `q`, `Esc`, or
/// `Ctrl-C` abort early.
pub fn run(kind: EffectKind, text: &str, config_json: Option<&str>) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = play(&mut terminal, kind, text, config_json);
    ratatui::restore();
    result
}

fn play(
    terminal: &mut DefaultTerminal,
    kind: EffectKind,
    text: &str,
    config_json: Option<&str>,
) -> anyhow::Result<()> {
    let size = terminal.size()?;
    let bounds = CanvasBounds::new(
        size.height.saturating_sub(1),
        size.width.saturating_sub(1),
    );
    let mut stage = TerminalStage::from_text(text).with_bounds(bounds);
    let mut runner = kind.prepare(&mut stage, config_json)?;
    tracing::info!(?kind, characters = stage.cell_count(), "starting effect");

    let frame_duration = Duration::from_millis(FRAME_DURATION_MS);
    loop {
        let frame_start = Instant::now();
        let state = runner.tick(&mut stage);
        terminal.draw(|frame| {
            frame.render_widget(EffectCanvas::new(&stage), frame.area());
        })?;
        if state == RunState::Done {
            break;
        }

        // Spend the rest of the frame interval waiting for a quit key.
        loop {
            let remaining = frame_duration.saturating_sub(frame_start.elapsed());
            if !event::poll(remaining)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let ctrl_c =
                    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) || ctrl_c {
                    tracing::info!("aborted by user");
                    return Ok(());
                }
            }
        }
    }
    tracing::info!(frames = stage.frames_rendered(), "effect complete");
    Ok(())
}
