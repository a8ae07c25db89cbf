use std::io;

use tracing::{debug, error, info};

use crate::cli::io::{InteractivePrompter, Prompter, ScriptPrompter};
use crate::cli::menus::run_menu_once;
use crate::cli::shell_context::{CliMode, LoopControl, ShellContext};
use crate::config::ConfigManager;
use crate::errors::CliError;
use crate::storage::JsonFileStore;

pub const SCRIPT_ENV: &str = "TELLER_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let manager = ConfigManager::new()?;
    let config = manager.load()?;
    let data_file = manager.resolve_data_file(&config);
    debug!(config = %manager.path().display(), data = %data_file.display(), ?mode, "starting shell");

    let prompter: Box<dyn Prompter> = match mode {
        CliMode::Interactive => Box::new(InteractivePrompter::new()?),
        CliMode::Script => Box::new(ScriptPrompter::new(io::stdin().lock())),
    };
    let store = Box::new(JsonFileStore::new(data_file));
    let mut context = ShellContext::new(mode, store, config, prompter)?;
    run_session(&mut context)
}

/// Drives menus until the user exits, input runs out or the console fails,
/// then writes the directory back to the store. A console failure is
/// returned only after the directory has been saved.
pub fn run_session(context: &mut ShellContext) -> Result<(), CliError> {
    let mut fatal = None;
    while context.running {
        match run_menu_once(context) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => context.running = false,
            Err(CliError::InputClosed) => {
                context.printer.info("Input closed. Exiting.");
                context.running = false;
            }
            Err(err) => {
                if let Err(err) = context.report_error(err) {
                    error!(error = %err, "console failure, saving before exit");
                    fatal = Some(err);
                    context.running = false;
                }
            }
        }
    }
    if let Some(username) = context.controller.logout() {
        info!(username = %username, "session closed while signed in");
    }
    context.persist()?;
    fatal.map_or(Ok(()), Err)
}
