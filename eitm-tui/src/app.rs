//! Application main loop.
//!
//! Single-threaded and event-driven: draw, drain resolved requests, poll
//! input (100ms timeout), update. The HTTP call is the only thing that
//! runs off this thread, and its resolution re-enters the loop as an
//! ordinary message.

use std::sync::mpsc::{self, Sender};
use std::time::Duration;

use anyhow::Result;

use eitm_core::ExplainResult;

use crate::backend::ExplainService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update::{self, Command};
use crate::util::Term;
use crate::view;

/// Run the main loop until quit.
pub fn run(terminal: &mut Term, app: &mut App, service: &ExplainService) -> Result<()> {
    let (tx, rx) = mpsc::channel::<ExplainResult<String>>();

    loop {
        // 1. Render
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. Quit check
        if app.should_quit {
            break;
        }

        // 3. Apply resolved requests before waiting on input
        while let Ok(outcome) = rx.try_recv() {
            let command = update::update(app, AppMessage::RequestFinished(outcome));
            run_command(command, service, &tx);
        }

        // 4. Poll input (100ms timeout keeps the loop ticking while loading)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            let command = update::update(app, msg);
            run_command(command, service, &tx);
        }
    }

    Ok(())
}

/// Perform the side effect an update asked for.
fn run_command(command: Command, service: &ExplainService, tx: &Sender<ExplainResult<String>>) {
    match command {
        Command::None => {}
        Command::Submit(request) => service.submit(request, tx.clone()),
    }
}
