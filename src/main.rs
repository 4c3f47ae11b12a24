//! Terminal Simon runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `tui_simon::term`. The game core runs on virtual time advanced once per
//! `TICK_MS`; configuration comes from `SIMON_*` environment variables.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use tui_simon::config::AppConfig;
use tui_simon::core::{GameController, GameSnapshot};
use tui_simon::input::{handle_key_event, handle_mouse_event, should_quit, InputCommand};
use tui_simon::journal::Journal;
use tui_simon::term::{Banner, FrameBuffer, GameView, TermDisplay, TerminalRenderer, Viewport};
use tui_simon::types::{MoveOutcome, TICK_MS};

type Controller = GameController<TermDisplay, Banner>;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_tracing(config.trace_path.as_deref())?;
    tracing::info!(seed = config.seed, sound = config.sound, "starting tui-simon");

    let mut journal = match config.log_path.as_deref() {
        Some(path) => Some(Journal::start(path)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, journal.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(journal) = journal {
        match journal.finish() {
            Ok(written) => tracing::info!(written, "journal closed"),
            Err(e) => tracing::warn!("journal did not finish cleanly: {e:#}"),
        }
    }
    result
}

/// Send `tracing` output to a file; the terminal belongs to the game.
fn init_tracing(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open trace file {path}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, mut journal: Option<&mut Journal>) -> Result<()> {
    let mut controller: Controller = GameController::with_timing(
        TermDisplay::new(config.sound),
        Banner::default(),
        config.seed,
        config.timing,
    );

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        controller.snapshot_into(&mut snap);
        view.render_into(
            &snap,
            controller.display(),
            controller.notifier(),
            viewport,
            &mut fb,
        );
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let command = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    handle_key_event(key)
                }
                Event::Mouse(mouse) => {
                    handle_mouse_event(mouse, |x, y| view.hit_test(viewport, x, y))
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    None
                }
                _ => None,
            };

            match command {
                Some(InputCommand::NewGame) => {
                    controller.notifier_mut().dismiss();
                    controller.new_game();
                }
                Some(InputCommand::Press(choice)) => {
                    let outcome = controller.on_activation(choice);
                    if outcome == MoveOutcome::Ignored {
                        tracing::debug!(%choice, phase = controller.phase().as_str(), "press ignored");
                    }
                }
                None => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            controller.tick(TICK_MS);
            controller.notifier_mut().tick(TICK_MS);
        }

        forward_events(&mut controller, journal.as_deref_mut());

        if controller.display_mut().take_bell() {
            term.bell()?;
        }
    }
}

fn forward_events(controller: &mut Controller, journal: Option<&mut Journal>) {
    match journal {
        Some(journal) => {
            for event in controller.drain_events() {
                journal.record(&event);
            }
        }
        None => {
            controller.drain_events();
        }
    }
}
