//! Interactive answer prompt
//!
//! The watch loop asks for input through the [`AnswerPrompt`] trait so tests
//! can script answers; [`ConsolePrompt`] is the interactive implementation.

use anyhow::Result;
use colored::*;
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;

/// Source of answers for a session waiting on input
pub trait AnswerPrompt: Send + Sync {
    /// Ask the pending question and return the typed answer
    ///
    /// `initial` pre-fills the prompt; it carries an answer whose submission
    /// failed so the user does not retype it.
    fn ask(&self, question: &str, initial: Option<&str>) -> Result<String>;
}

/// Stdin-backed prompt
pub struct ConsolePrompt;

impl AnswerPrompt for ConsolePrompt {
    fn ask(&self, question: &str, initial: Option<&str>) -> Result<String> {
        println!();
        println!("{}", "The agent is asking:".yellow().bold());
        for line in question.lines() {
            println!("  {}", line);
        }

        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme).with_prompt("Your answer");
        if let Some(initial) = initial {
            input = input.with_initial_text(initial);
        }

        Ok(input.interact_text()?)
    }
}
