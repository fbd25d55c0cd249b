//! Line-oriented input for human players.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::core::error::{GhostError, GhostResult};
use crate::core::terminal::{TerminalColor, TerminalContext};

/// Where a human player's answers come from.
pub trait LineInput {
    /// Ask for one line of text.
    fn read_line(&mut self, prompt: &str) -> GhostResult<String>;

    /// Tell the player why their last answer was rejected.
    fn report(&mut self, message: &str);
}

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        Self
    }
}

impl LineInput for ConsoleInput {
    fn read_line(&mut self, prompt: &str) -> GhostResult<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| GhostError::Input(e.to_string()))
    }

    fn report(&mut self, message: &str) {
        let mut ctx = TerminalContext::stdout();
        if let Err(e) = ctx
            .print_colored_line(message, TerminalColor::Red)
            .and_then(|_| ctx.flush())
        {
            tracing::warn!(error = %e, "failed to report input problem");
        }
    }
}

#[derive(Debug, Default)]
struct Script {
    lines: VecDeque<String>,
    prompts: Vec<String>,
    reports: Vec<String>,
}

/// Answers queued up front, for tests and for driving a game without a
/// terminal. Clones share the same script, so a test can keep a handle
/// after boxing one copy into a player.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: Rc<RefCell<Script>>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let script = Script {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Script::default()
        };
        Self { script: Rc::new(RefCell::new(script)) }
    }

    pub fn push(&self, line: impl Into<String>) {
        self.script.borrow_mut().lines.push_back(line.into());
    }

    pub fn remaining(&self) -> usize {
        self.script.borrow().lines.len()
    }

    /// Prompts asked so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.script.borrow().prompts.clone()
    }

    /// Rejection messages reported so far, in order.
    pub fn reports(&self) -> Vec<String> {
        self.script.borrow().reports.clone()
    }
}

impl LineInput for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> GhostResult<String> {
        let mut script = self.script.borrow_mut();
        script.prompts.push(prompt.to_string());
        script
            .lines
            .pop_front()
            .ok_or_else(|| GhostError::InputExhausted(prompt.to_string()))
    }

    fn report(&mut self, message: &str) {
        self.script.borrow_mut().reports.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_in_order() {
        let handle = ScriptedInput::new(["play", "g"]);
        let mut input = handle.clone();

        assert_eq!(input.read_line("TURN TYPE").unwrap(), "play");
        assert_eq!(input.read_line("LETTER").unwrap(), "g");
        assert_eq!(handle.remaining(), 0);
        assert_eq!(handle.prompts(), vec!["TURN TYPE", "LETTER"]);
    }

    #[test]
    fn test_scripted_input_exhausted() {
        let mut input = ScriptedInput::new(Vec::<String>::new());
        match input.read_line("TURN TYPE") {
            Err(GhostError::InputExhausted(prompt)) => assert_eq!(prompt, "TURN TYPE"),
            other => panic!("expected InputExhausted, got {:?}", other),
        }
    }

    #[test]
    fn test_reports_are_recorded() {
        let handle = ScriptedInput::default();
        let mut input = handle.clone();
        input.report("Invalid letter: 7");
        handle.push("forfeit");

        assert_eq!(handle.reports(), vec!["Invalid letter: 7"]);
        assert_eq!(handle.remaining(), 1);
    }
}
