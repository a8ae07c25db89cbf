//! Line sources behind the menu loop: a line editor for people, plain
//! buffered lines for scripts and tests.

use std::io::{self, BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Confirm, Password};
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::errors::CliError;

/// Reads raw answers. `Ok(None)` means the input is closed (EOF or Ctrl-C).
pub trait Prompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    /// Like `read_line` but without echo or history.
    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, CliError>;
}

pub struct InteractivePrompter {
    editor: DefaultEditor,
    theme: ColorfulTheme,
}

impl InteractivePrompter {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            theme: ColorfulTheme::default(),
        })
    }
}

impl Prompter for InteractivePrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.editor.readline(&format!("{} ", prompt)) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    self.editor.add_history_entry(trimmed).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match Password::with_theme(&self.theme)
            .with_prompt(prompt.trim_end_matches(':'))
            .allow_empty_password(true)
            .interact()
        {
            Ok(secret) => Ok(Some(secret)),
            Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, CliError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact_opt()
            .map_err(CliError::from)
    }
}

/// Reads answers line by line from any buffered reader. Prompts are echoed to
/// stdout so a transcript stays readable.
pub struct ScriptPrompter<R> {
    reader: R,
}

impl<R: BufRead> ScriptPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(buffer.trim_end_matches(['\n', '\r']).to_string()))
    }
}

impl<R: BufRead> Prompter for ScriptPrompter<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        self.next_line(prompt)
    }

    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        self.next_line(prompt)
    }

    fn confirm(&mut self, prompt: &str) -> Result<Option<bool>, CliError> {
        let question = format!("{} [y/n]", prompt);
        loop {
            let Some(answer) = self.next_line(&question)? else {
                return Ok(None);
            };
            match parse_yes_no(&answer) {
                Some(choice) => return Ok(Some(choice)),
                None => println!("Please answer `y` or `n`."),
            }
        }
    }
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn script_prompter_reads_lines_then_reports_closed() {
        let mut prompter = ScriptPrompter::new(Cursor::new("alice\r\nsecret\n"));
        assert_eq!(prompter.read_line("Username:").unwrap().as_deref(), Some("alice"));
        assert_eq!(prompter.read_secret("Password:").unwrap().as_deref(), Some("secret"));
        assert_eq!(prompter.read_line("Again:").unwrap(), None);
    }

    #[test]
    fn script_confirm_retries_until_yes_or_no() {
        let mut prompter = ScriptPrompter::new(Cursor::new("maybe\nYES\nn\n"));
        assert_eq!(prompter.confirm("Quit?").unwrap(), Some(true));
        assert_eq!(prompter.confirm("Quit?").unwrap(), Some(false));
        assert_eq!(prompter.confirm("Quit?").unwrap(), None);
    }
}
