//! folio: a single-page portfolio for the terminal.
#![allow(clippy::multiple_crate_versions)]

use chrono::Datelike;
use clap::Parser;
use folio::app_state::{AppState, Scroll};
use folio::content::PORTFOLIO;
use folio::page::PageLayout;
use folio::section::SectionId;
use folio::{config, logging, ui, Result};
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A single-page portfolio for the terminal", long_about = None)]
struct Args {
    /// Read settings from this file instead of ./folio.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Section to scroll to on start (home, about, skills, projects, experience, contact)
    #[arg(long, short = 's', value_name = "ID")]
    section: Option<SectionId>,

    /// Print the page as plain text instead of opening the viewer
    #[arg(long)]
    print: bool,

    /// Column width used with --print
    #[arg(long, default_value_t = 100)]
    width: u16,

    /// Print the page content as JSON
    #[arg(long, conflicts_with = "print")]
    json: bool,

    /// Append logs to this file (filter with FOLIO_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Show everything immediately instead of fading sections in
    #[arg(long)]
    no_animations: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        logging::init(path)?;
    }

    let mut cfg = match args.config {
        Some(ref path) => config::Config::from_path(path)?,
        None => config::Config::load(),
    };

    // Override config with command line args
    if args.no_animations {
        cfg.animations = false;
    }

    let year = chrono::Local::now().year();

    if args.json {
        let json = serde_json::to_string_pretty(&PORTFOLIO)?;
        println!("{json}");
        return Ok(());
    }

    if args.print {
        let layout = PageLayout::build(&PORTFOLIO, args.width, 0, cfg.line_height, year);
        print!("{}", layout.to_text());
        return Ok(());
    }

    let app = AppState::mount(&PORTFOLIO, cfg, year);
    run_tui(app, args.section)
}

fn run_tui(mut app: AppState, initial: Option<SectionId>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, initial);
    app.teardown();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        error!(error = %e, "viewer exited with an error");
    }
    result
}

#[derive(PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    mut pending_jump: Option<SectionId>,
) -> Result<()> {
    let tick = Duration::from_millis(app.config().tick_rate_ms.max(1));
    let idle = Duration::from_millis(500);

    loop {
        let size = terminal.size()?;
        let body = ui::body_area(Rect::new(0, 0, size.width, size.height));
        app.relayout(body.width, body.height);

        if let Some(section) = pending_jump.take() {
            app.jump_to(section);
        }

        let now = Instant::now();
        app.observe(now);
        terminal.draw(|f| ui::draw(f, app, now))?;

        let timeout = if app.is_animating(now) { tick } else { idle };
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_key(app, key) == Flow::Quit {
                    info!("quit");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                let step = i32::from(app.config().scroll_step);
                match mouse.kind {
                    MouseEventKind::ScrollDown => {
                        app.scroll(Scroll::Rows(step));
                    }
                    MouseEventKind::ScrollUp => {
                        app.scroll(Scroll::Rows(-step));
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Flow {
    app.message = None;

    if app.menu_open {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => app.menu_open = false,
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.prev_link(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.next_link(),
            KeyCode::Enter => {
                app.follow_link();
            }
            KeyCode::Char('q') => return Flow::Quit,
            _ => {}
        }
        return Flow::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll(Scroll::Rows(-1));
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll(Scroll::Rows(1));
        }
        KeyCode::PageUp => {
            app.scroll(Scroll::PageUp);
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            app.scroll(Scroll::PageDown);
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.scroll(Scroll::Top);
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.scroll(Scroll::Bottom);
        }
        KeyCode::Tab => app.next_link(),
        KeyCode::BackTab => app.prev_link(),
        KeyCode::Enter => {
            app.follow_link();
        }
        KeyCode::Char('m') => {
            if app.is_compact() {
                app.toggle_menu();
            } else {
                app.message = Some("Menu is only used on narrow terminals".to_string());
            }
        }
        KeyCode::Char(c @ '1'..='6') => {
            let position = c.to_digit(10).and_then(|d| usize::try_from(d).ok());
            if let Some(&section) = position.and_then(|p| SectionId::ALL.get(p - 1)) {
                app.jump_to(section);
            }
        }
        _ => {}
    }
    Flow::Continue
}
