use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use snapdeck_core::AppConfig;
use snapdeck_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    load_theme,
    widgets::{IndicatorWidget, NavBarWidget, SectionViewWidget, StatusBarWidget},
};

pub fn run(config: AppConfig, deck_path: Option<PathBuf>, section: Option<String>) -> Result<()> {
    let deck = super::load_deck(deck_path.as_ref())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("snapdeck")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    // Create event handler with animation FPS support
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.scroll.animation_fps);

    // Create app state; the start fragment animates in on the first frame
    let mut app = App::new(deck, config, theme, section.as_deref());

    // Track if we need high frame rate for the transition animation.
    // Checked at the END of each iteration to set the NEXT iteration's
    // tick rate.
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Advance the settle deadline and the scroll interpolation
        app.tick(Instant::now());

        // Draw UI
        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // nav bar
                    Constraint::Min(1),    // stacked sections
                    Constraint::Length(1), // scroll-hint indicator
                    Constraint::Length(1), // status bar
                ])
                .split(frame.area());

            NavBarWidget::render(frame, chunks[0], &mut app);
            SectionViewWidget::render(frame, chunks[1], &mut app);
            IndicatorWidget::render(frame, chunks[2], &mut app);
            StatusBarWidget::render(frame, chunks[3], &app);
        })?;

        // Handle events (use faster tick rate while a transition runs)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key);
                    app.apply(action, now);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, &app);
                    app.apply(action, now);
                }
                AppEvent::Resize(_, _) => {
                    // The next draw re-runs layout and snaps the viewport
                }
                AppEvent::Tick => {}
            }
        }

        // Update fast update flag for next iteration
        needs_fast_update = app.is_transition_active(Instant::now());

        if app.should_quit {
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
