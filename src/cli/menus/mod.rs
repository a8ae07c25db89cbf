pub mod customer_menu;
pub mod guest_menu;

use crate::cli::shell_context::{LoopControl, ShellContext};
use crate::core::SessionMode;
use crate::errors::CliError;

pub use customer_menu::CustomerAction;
pub use guest_menu::GuestAction;

/// Shows the menu for the current session mode, reads one choice and runs it.
pub fn run_menu_once(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let mode = context.controller.mode();
    match mode {
        SessionMode::Guest => {
            context
                .printer
                .menu(guest_menu::TITLE, &GuestAction::labels());
            let choice = context.validator().read_choice(mode.menu_size())?;
            match GuestAction::from_choice(choice) {
                Some(action) => guest_menu::handle(context, action),
                None => Ok(LoopControl::Continue),
            }
        }
        SessionMode::Authenticated => {
            let title = customer_menu::title(context);
            context.printer.menu(&title, &CustomerAction::labels());
            let choice = context.validator().read_choice(mode.menu_size())?;
            match CustomerAction::from_choice(choice) {
                Some(action) => customer_menu::handle(context, action),
                None => Ok(LoopControl::Continue),
            }
        }
    }
}
