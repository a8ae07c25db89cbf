use tracing::info;

use crate::{
    cli::{io::Prompter, output::Printer, validation::Validator},
    config::Config,
    core::SessionController,
    errors::CliError,
    storage::CustomerStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Everything a menu action needs: the session, where to persist it, and the
/// console.
pub struct ShellContext {
    pub controller: SessionController,
    pub store: Box<dyn CustomerStore>,
    pub config: Config,
    pub printer: Printer,
    pub prompter: Box<dyn Prompter>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(
        mode: CliMode,
        store: Box<dyn CustomerStore>,
        config: Config,
        prompter: Box<dyn Prompter>,
    ) -> Result<Self, CliError> {
        let directory = store.import_all()?;
        let color = config.color && mode == CliMode::Interactive;
        Ok(Self {
            controller: SessionController::new(directory),
            store,
            config,
            printer: Printer::new(color),
            prompter,
            running: true,
        })
    }

    /// Borrows the console for a round of validated prompts. Drop it before
    /// touching `controller` again.
    pub fn validator(&mut self) -> Validator<'_> {
        Validator::new(self.prompter.as_mut(), &self.printer)
    }

    pub fn persist(&self) -> Result<(), CliError> {
        self.store.export_all(self.controller.directory())?;
        info!(customers = self.controller.directory().len(), "session persisted");
        Ok(())
    }

    /// Prints recoverable failures and keeps going; anything else bubbles up.
    pub fn report_error(&self, err: CliError) -> Result<(), CliError> {
        if err.is_recoverable() {
            self.printer.error(&err);
            Ok(())
        } else {
            Err(err)
        }
    }
}
