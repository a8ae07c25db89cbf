use colored::Colorize;
use std::fmt;

/// Message categories used by the CLI output helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    System,
    Error,
    Prompt,
    Header,
}

/// Console printer. The banking core never formats output itself; every
/// line the user sees goes through here.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn format(&self, kind: MessageKind, message: impl fmt::Display) -> String {
        let text = message.to_string();
        let base = match kind {
            MessageKind::Header => {
                let bar = "+".to_string() + &"-".repeat(text.chars().count() + 2) + "+";
                format!("{bar}\n| {text} |\n{bar}")
            }
            MessageKind::Error => format!("[x] {text}"),
            _ => text,
        };

        if !self.color {
            return base;
        }

        match kind {
            MessageKind::System => base.bright_green().to_string(),
            MessageKind::Error => base.bright_red().to_string(),
            MessageKind::Prompt => base.bright_cyan().to_string(),
            MessageKind::Header => base.bright_blue().bold().to_string(),
            MessageKind::Info => base,
        }
    }

    pub fn print(&self, kind: MessageKind, message: impl fmt::Display) {
        let formatted = self.format(kind, message);
        match kind {
            MessageKind::Header => println!("\n{}", formatted),
            _ => println!("{}", formatted),
        }
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.print(MessageKind::Info, message);
    }

    pub fn system(&self, message: impl fmt::Display) {
        self.print(MessageKind::System, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.print(MessageKind::Error, message);
    }

    pub fn header(&self, title: impl fmt::Display) {
        self.print(MessageKind::Header, title);
    }

    /// Numbered menu, 1-based.
    pub fn menu(&self, title: &str, options: &[&str]) {
        self.header(title);
        for (index, option) in options.iter().enumerate() {
            self.info(format!("{}. {}", index + 1, option));
        }
    }

    pub fn prompt_label(&self, prompt: &str) -> String {
        self.format(MessageKind::Prompt, prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_header_is_boxed() {
        let printer = Printer::plain();
        assert_eq!(
            printer.format(MessageKind::Header, "Login"),
            "+-------+\n| Login |\n+-------+"
        );
    }

    #[test]
    fn plain_error_has_marker_and_no_escape_codes() {
        let formatted = Printer::plain().format(MessageKind::Error, "No such user exists.");
        assert_eq!(formatted, "[x] No such user exists.");
    }

    #[test]
    fn colored_system_message_keeps_text() {
        colored::control::set_override(true);
        let formatted = Printer::new(true).format(MessageKind::System, "Signed in.");
        assert!(formatted.contains("Signed in."));
    }
}
