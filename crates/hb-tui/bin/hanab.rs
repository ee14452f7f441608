//! Hanab table viewer
//!
//! Renders a demo Hanab table in the terminal: hint and failure
//! tokens, every player's hand, and the turn overlay behind each
//! card. Hover or click a card to reveal the turn that touched it.

use std::io;
use std::process;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use hb_core::hydrate::hydrate;
use hb_core::table::TableSpec;
use hb_tui::{App, Theme};

/// Hanab table viewer
#[derive(Parser, Debug)]
#[command(name = "hanab")]
#[command(author, version, about = "Hanab - watch the table!", long_about = None)]
struct Args {
    /// Number of players at the table (2-5)
    #[arg(short, long, default_value_t = 4)]
    players: u32,

    /// Hint tokens still available
    #[arg(long, default_value_t = 5)]
    hints: u32,

    /// Failure tokens already used
    #[arg(long, default_value_t = 1)]
    failures: u32,

    /// Seed for the demo deal (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Force the light terminal theme
    #[arg(long)]
    light: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // Build and hydrate the page before touching the terminal, so a
    // bad deal aborts with a plain error message.
    let mut page = TableSpec::demo(args.seed, args.players, args.hints, args.failures).to_page();
    if let Err(err) = hydrate(&mut page) {
        eprintln!("Error: {err}");
        process::exit(1);
    }

    let theme = if args.light {
        Theme::light()
    } else {
        Theme::detect()
    };
    let mut app = App::new(page, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
