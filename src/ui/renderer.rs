use crate::config::Config;
use crate::ui::app_component::{AppComponent, AppServices};
use crate::ui::core::{Component, EventHandler, EventType, ListenerSlot};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Instant;

/// Set up the terminal, run the event loop and restore the terminal afterwards
pub async fn run_app(config: Config, services: AppServices) -> anyhow::Result<()> {
    let slot = ListenerSlot::new();
    let mut app = AppComponent::new(services, &config, &slot)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }

    // Needed for Ctrl+Shift+letter and Ctrl+punctuation to arrive intact
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    app.set_keyboard_enhanced(keyboard_enhanced);
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut event_handler = EventHandler::new();

    app.start();
    app.sync_state(Instant::now());

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;
    app.shutdown();

    // Restore terminal
    if keyboard_enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;

        match event {
            EventType::Key(_) | EventType::Mouse(_) | EventType::Resize(_, _) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Tick => {
                let background_actions = app.process_background_actions();
                if !background_actions.is_empty() {
                    for action in background_actions {
                        app.handle_app_action(action);
                    }
                    app.sync_state(Instant::now());
                    needs_render = true;
                }

                if app.tick(Instant::now()) {
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
