use std::io::Write;
use std::time::{Duration, Instant};

use clap::Subcommand;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use focus_core::store::SqliteStore;
use focus_core::{Event, FocusSession, TimerMode};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start or pause the countdown
    Toggle,
    /// Switch mode (focus | shortBreak | longBreak | custom)
    Switch {
        /// Mode name, in its persisted spelling
        mode: String,
    },
    /// Set the custom duration in minutes (1-120)
    Custom {
        minutes: u32,
    },
    /// Stop and reload the full duration
    Reset,
    /// Print current timer state as JSON
    Status,
    /// Run the countdown interactively (Space toggle, r reset, z zen, q quit)
    Run {
        /// Start in zen (minimal) display
        #[arg(long)]
        zen: bool,
    },
}

fn parse_mode(raw: &str) -> Result<TimerMode, Box<dyn std::error::Error>> {
    TimerMode::parse(raw).ok_or_else(|| {
        format!("unknown mode '{raw}' (expected focus, shortBreak, longBreak or custom)").into()
    })
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open()?;
    let mut session = FocusSession::open(&store);

    match action {
        TimerAction::Toggle => {
            let event = session.toggle();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Switch { mode } => {
            let event = session.switch_mode(parse_mode(&mode)?);
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Custom { minutes } => {
            let event = session.set_custom_minutes(minutes)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Reset => {
            let event = session.reset();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Status => {
            let snapshot = session.engine().snapshot();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        TimerAction::Run { zen } => {
            run_interactive(&mut session, zen)?;
        }
    }

    Ok(())
}

/// Restores the terminal even on early return.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self, Box<dyn std::error::Error>> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Interactive countdown loop.
///
/// Key events are polled with a deadline so the engine ticks once per
/// second regardless of input; the raw-mode guard tears the terminal down
/// when the loop exits, so no callback outlives the view.
fn run_interactive(
    session: &mut FocusSession<'_>,
    zen_start: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = focus_core::Config::load_or_default();
    let mut zen = zen_start || cfg.ui.zen_default;

    let _guard = RawModeGuard::enable()?;
    let mut next_tick = Instant::now() + Duration::from_secs(1);

    loop {
        render(session, zen)?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char(' ') => {
                        session.toggle();
                    }
                    KeyCode::Char('r') => {
                        session.reset();
                    }
                    KeyCode::Char('z') => {
                        zen = !zen;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        break;
                    }
                    _ => {}
                }
            }
            continue;
        }

        next_tick += Duration::from_secs(1);
        if let Some(Event::SessionCompleted {
            counts_toward_stats,
            ..
        }) = session.tick()
        {
            let stats = session.stats();
            if counts_toward_stats {
                print!(
                    "\r\nsession complete - streak {} day(s), {} today\r\n",
                    stats.streak, stats.sessions_today
                );
            } else {
                print!("\r\nbreak over\r\n");
            }
        }
    }

    print!("\r\n");
    std::io::stdout().flush()?;
    Ok(())
}

fn render(session: &FocusSession<'_>, zen: bool) -> Result<(), std::io::Error> {
    let engine = session.engine();
    let status = if engine.is_completed() {
        "done"
    } else if engine.is_running() {
        "in flow"
    } else {
        "paused"
    };

    let line = if zen {
        engine.clock()
    } else {
        format!(
            "{}  {}  [{}]  \"{}\"",
            engine.mode().spec().label,
            engine.clock(),
            status,
            engine.quote()
        )
    };
    // Clear to end of line so a shrinking string leaves no residue.
    print!("\r{line}\x1b[K");
    std::io::stdout().flush()
}
