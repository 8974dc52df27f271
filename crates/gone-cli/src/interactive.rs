//! Terminal confirmation for deleting the checked-out branch.
//!
//! Uses dialoguer when a user is at the terminal; piped input falls back to
//! the plain line reader from gone-core.

use std::io::{self, IsTerminal};

use console::style;
use dialoguer::{Input, theme::ColorfulTheme};

use gone_core::prompt::{Confirm, LineConfirm, checked_out_prompt, parse_answer};

/// Confirmation backed by a dialoguer text prompt.
#[derive(Default)]
pub struct TerminalConfirm {
    theme: ColorfulTheme,
}

impl Confirm for TerminalConfirm {
    fn confirm_delete_checked_out(&mut self, branch: &str) -> io::Result<bool> {
        let branch = style(branch).cyan().bold().to_string();
        let prompt = checked_out_prompt(&branch);

        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt.trim_end())
            .allow_empty(true)
            .validate_with(validate_answer)
            .interact_text()
            .map_err(io::Error::other)?;

        // validate_with only lets recognized answers through, empty included
        Ok(parse_answer(&answer).unwrap_or(false))
    }
}

fn validate_answer(input: &String) -> Result<(), &'static str> {
    match parse_answer(input) {
        Some(_) => Ok(()),
        None => Err("Please answer y or n."),
    }
}

/// Pick the confirmation backend for this process.
pub fn confirm_for_stdio() -> Box<dyn Confirm> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        Box::new(TerminalConfirm::default())
    } else {
        tracing::debug!("stdin is not a terminal, reading answers line by line");
        Box::new(LineConfirm::stdio())
    }
}
