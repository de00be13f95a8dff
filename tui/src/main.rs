//! textfx - play a text effect in the terminal
//!
//! ```text
//! textfx <effect> [--config <file>] [text...]
//! ```
//!
//! Reads the text from the arguments, or from stdin when none are given.
//! Logging goes to stderr and is controlled by `TEXTFX_LOG`.

use std::io::Read;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use textfx_tui::app;
use textfx_tui::EffectKind;

const USAGE: &str = "usage: textfx <expand|wipe|fireworks> [--config <file>] [text...]";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TEXTFX_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let effect: EffectKind = args
        .next()
        .context(USAGE)?
        .parse()
        .map_err(anyhow::Error::from)
        .context(USAGE)?;

    let mut config_json = None;
    let mut words = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().context("--config needs a file path")?;
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            config_json = Some(json);
        } else {
            words.push(arg);
        }
    }

    let text = if words.is_empty() {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading text from stdin")?;
        buffer
    } else {
        words.join(" ")
    };

    app::run(effect, &text, config_json.as_deref())
}
