//! Validated prompts for registration, login and money entry.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cli::io::Prompter;
use crate::cli::output::Printer;
use crate::currency::Money;
use crate::errors::CliError;

static NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z' -]{0,49}$").expect("name pattern"));
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern")
});
static USERNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{3,20}$").expect("username pattern"));
static MONETARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$?(\d{1,3}(,\d{3}){1,4}|\d{1,15})(\.\d{1,2})?$").expect("monetary pattern")
});

const PHONE_DIGITS: usize = 10;
const PASSWORD_MIN_LEN: usize = 8;

/// Shape a piece of free-form input must have before it is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Name,
    Any,
    Email,
    Phone,
    Username,
    Password,
    Monetary,
}

impl InputKind {
    /// Returns the normalized value, or the message to show before re-prompting.
    pub fn check(self, raw: &str) -> Result<String, &'static str> {
        let value = raw.trim();
        match self {
            InputKind::Name if NAME.is_match(value) => Ok(value.to_string()),
            InputKind::Name => Err("Names may contain letters, spaces, apostrophes and hyphens."),
            InputKind::Any if !value.is_empty() => Ok(value.to_string()),
            InputKind::Any => Err("A value is required."),
            InputKind::Email if EMAIL.is_match(value) => Ok(value.to_ascii_lowercase()),
            InputKind::Email => Err("Enter a valid email address, e.g. name@example.com."),
            InputKind::Phone => normalize_phone(value),
            InputKind::Username if USERNAME.is_match(value) => Ok(value.to_string()),
            InputKind::Username => {
                Err("Usernames are 3-20 characters: letters, digits or underscores.")
            }
            InputKind::Password => check_password(raw),
            InputKind::Monetary if MONETARY.is_match(value) => Ok(value.to_string()),
            InputKind::Monetary => Err(
                "Enter a non-negative amount up to 999,999,999,999,999.99 with at most 2 decimals.",
            ),
        }
    }
}

fn normalize_phone(value: &str) -> Result<String, &'static str> {
    let mut digits = String::with_capacity(PHONE_DIGITS);
    for ch in value.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return Err("Phone numbers contain digits only."),
        }
    }
    if digits.len() == PHONE_DIGITS {
        Ok(digits)
    } else {
        Err("Phone numbers must have exactly 10 digits.")
    }
}

fn check_password(raw: &str) -> Result<String, &'static str> {
    let long_enough = raw.chars().count() >= PASSWORD_MIN_LEN;
    let has_lower = raw.chars().any(|ch| ch.is_lowercase());
    let has_upper = raw.chars().any(|ch| ch.is_uppercase());
    let has_special = raw
        .chars()
        .any(|ch| !ch.is_alphanumeric() && !ch.is_whitespace());
    if long_enough && has_lower && has_upper && has_special {
        Ok(raw.to_string())
    } else {
        Err("Passwords need at least 8 characters including a lowercase letter, an uppercase letter and a special character.")
    }
}

/// Keeps asking until the answer fits the requested [`InputKind`].
pub struct Validator<'a> {
    prompter: &'a mut dyn Prompter,
    printer: &'a Printer,
}

impl<'a> Validator<'a> {
    pub fn new(prompter: &'a mut dyn Prompter, printer: &'a Printer) -> Self {
        Self { prompter, printer }
    }

    pub fn read_validated(&mut self, prompt: &str, kind: InputKind) -> Result<String, CliError> {
        let label = self.printer.prompt_label(prompt);
        loop {
            let raw = if kind == InputKind::Password {
                self.prompter.read_secret(&label)?
            } else {
                self.prompter.read_line(&label)?
            };
            let raw = raw.ok_or(CliError::InputClosed)?;
            match kind.check(&raw) {
                Ok(value) => return Ok(value),
                Err(message) => self.printer.error(message),
            }
        }
    }

    /// Reads a single unchecked line, e.g. a login username.
    pub fn read_raw(&mut self, prompt: &str) -> Result<String, CliError> {
        let label = self.printer.prompt_label(prompt);
        let line = self.prompter.read_line(&label)?.ok_or(CliError::InputClosed)?;
        Ok(line.trim().to_string())
    }

    /// Reads a credential without checking its strength.
    pub fn read_secret(&mut self, prompt: &str) -> Result<String, CliError> {
        let label = self.printer.prompt_label(prompt);
        self.prompter.read_secret(&label)?.ok_or(CliError::InputClosed)
    }

    pub fn read_amount(&mut self, prompt: &str) -> Result<Money, CliError> {
        let text = self.read_validated(prompt, InputKind::Monetary)?;
        Ok(Money::parse(&text)?)
    }

    /// Reads a 1-based menu choice in `1..=options`.
    pub fn read_choice(&mut self, options: usize) -> Result<usize, CliError> {
        let label = self
            .printer
            .prompt_label(&format!("Enter choice (1-{}):", options));
        loop {
            let raw = self.prompter.read_line(&label)?.ok_or(CliError::InputClosed)?;
            match raw.trim().parse::<usize>() {
                Ok(choice) if (1..=options).contains(&choice) => return Ok(choice),
                _ => self.printer.error(format!(
                    "Invalid choice `{}`. Enter a number between 1 and {}.",
                    raw.trim(),
                    options
                )),
            }
        }
    }

    pub fn confirm(&mut self, prompt: &str) -> Result<bool, CliError> {
        let label = self.printer.prompt_label(prompt);
        self.prompter.confirm(&label)?.ok_or(CliError::InputClosed)
    }
}
