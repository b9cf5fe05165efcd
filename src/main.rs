//! gene-lab - A terminal genetic playground
//!
//! Browse the gene registry, drag strands into the tank and export the
//! resulting serum protocol. Uses the Component Architecture pattern from
//! ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;

fn main() -> Result<()> {
    let (config, config_warning) = Config::load_or_init();

    // Logging goes to a file; the terminal belongs to the UI
    if let Some(log_path) = Config::log_path() {
        if let Err(e) = logging::init(&config, &log_path) {
            eprintln!("Logging disabled: {:#}", e);
        }
    }
    log::info!("gene-lab {} starting", env!("CARGO_PKG_VERSION"));
    if let Some(warning) = config_warning {
        log::warn!("{}", warning);
    }

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Create app state
    let mut app = App::new(config);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        log::error!("Fatal: {:?}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    log::info!("gene-lab shut down with {} strands in the tank", app.lab.len());
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                log::error!("Draw error: {:#}", e);
            }
        })?;

        // Poll for events; no event within the tick rate means a tick
        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        if let Some(action) = action {
            app.dispatch(action)?;
        }
    }

    Ok(())
}
