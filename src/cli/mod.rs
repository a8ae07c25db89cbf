pub mod io;
pub mod menus;
pub mod output;
mod shell;
pub mod shell_context;
pub mod validation;

pub use shell::{run_cli, run_session, SCRIPT_ENV};
