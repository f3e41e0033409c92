//! storefront-tui - catalog and cart in the terminal
//!
//! Fetches the product catalog once, pages through it five products at a
//! time, and keeps an in-memory cart across the Home and Cart tabs.

use clap::Parser;
use crossbeam_channel::Receiver;
use libstorefront::service::events::Event;
use libstorefront::StorefrontError;
use storefront_tui::{
    app::{event::{EventHandler, TuiEvent}, reduce, resolve_key, Action, AppState},
    cli::Cli,
    error::{Result, TuiError},
    print,
    services::ServiceHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    if let Some(logging) = cli.logging_config(&config) {
        if let Err(e) = logging.init() {
            eprintln!("Error: cannot open log file: {}", e);
            std::process::exit(1);
        }
    }

    if cli.print {
        if let Err(e) = print::run(&config, cli.page) {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<StorefrontError>()
                .map(StorefrontError::exit_code)
                .unwrap_or(1);
            std::process::exit(code);
        }
        return;
    }

    if let Err(e) = run_interactive(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run_interactive(config: &libstorefront::Config) -> Result<()> {
    let services = ServiceHandle::new(config)?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, services);

    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, mut services: ServiceHandle) -> Result<()> {
    let mut state = AppState::new();

    // Subscribe first so the catalog load cannot slip past
    let store_events = services.subscribe();
    services.start();
    tracing::info!("Storefront started");

    state = reduce(state, Action::CatalogChanged(services.catalog_snapshot()));
    state = reduce(state, Action::CartChanged(services.cart_snapshot()));

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) => resolve_key(&state, key).unwrap_or(Action::Tick),
            other => other.into(),
        };

        state = reduce(state, action.clone());
        if action.is_store_mutation() {
            services.perform(&action);
        }

        state = drain_store_events(state, &store_events, &services)?;

        if state.should_quit {
            break;
        }
    }

    tracing::info!("Storefront exiting");
    // Dropping the handle cancels a fetch that is still in flight
    drop(services);
    Ok(())
}

/// Re-derive the views for every store change since the last frame
fn drain_store_events(
    mut state: AppState,
    events: &Receiver<Event>,
    services: &ServiceHandle,
) -> Result<AppState> {
    loop {
        match events.try_recv() {
            Ok(event) => {
                for action in services.refresh_for(&event) {
                    state = reduce(state, action);
                }
            }
            Err(crossbeam_channel::TryRecvError::Empty) => return Ok(state),
            Err(crossbeam_channel::TryRecvError::Disconnected) => {
                return Err(TuiError::Event("store event feed closed".to_string()));
            }
        }
    }
}
