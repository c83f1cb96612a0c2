//! EITM TUI
//!
//! Terminal client for the EITM explanation service, in the Elm
//! Architecture (TEA) style:
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: UI rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: request execution (`backend/`)

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};

use backend::ExplainService;
use eitm_core::ClientConfig;
use util::{init_terminal, install_panic_hook, restore_terminal};

fn main() -> Result<()> {
    // Config and runtime come up before the terminal switches to raw mode,
    // so their errors print normally.
    let config = ClientConfig::load().context("failed to load configuration")?;
    let service = ExplainService::new(&config).context("failed to start backend service")?;

    install_panic_hook();
    let mut terminal = init_terminal()?;

    let mut app = model::App::new(config);
    let result = app::run(&mut terminal, &mut app, &service);

    restore_terminal(&mut terminal)?;
    result
}
