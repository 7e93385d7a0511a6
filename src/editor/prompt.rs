// tether-rs: Host/Standalone Git Workflow Helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Operator prompts.
//!
//! The editor only talks to a [`Prompter`]. [`TerminalPrompter`] drives a real
//! terminal through dialoguer; [`ScriptedPrompter`] replays canned answers.

use dialoguer::{Confirm, Input, Select};
use std::collections::VecDeque;
use tracing::trace;

use crate::error::{PromptError, TetherResult};

/// Source of operator answers.
pub trait Prompter {
    /// Pick one of `items`, returning its index.
    ///
    /// # Errors
    ///
    /// Returns `PromptError` if no answer can be obtained.
    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> TetherResult<usize>;

    /// Free text. An empty answer is allowed and means "keep `current`".
    ///
    /// # Errors
    ///
    /// Returns `PromptError` if no answer can be obtained.
    fn input(&mut self, prompt: &str, current: &str) -> TetherResult<String>;

    /// Yes or no.
    ///
    /// # Errors
    ///
    /// Returns `PromptError` if no answer can be obtained.
    fn confirm(&mut self, prompt: &str, default: bool) -> TetherResult<bool>;
}

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> TetherResult<usize> {
        let index = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(PromptError::from)?;
        Ok(index)
    }

    fn input(&mut self, prompt: &str, current: &str) -> TetherResult<String> {
        let prompt = if current.is_empty() {
            format!("{prompt} (blank keeps it unset)")
        } else {
            format!("{prompt} [{current}] (blank keeps it)")
        };
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(PromptError::from)?;
        Ok(answer)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> TetherResult<bool> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(PromptError::from)?;
        Ok(answer)
    }
}

/// One canned answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Select(usize),
    Input(String),
    Confirm(bool),
}

/// Replays answers in order; every prompt consumes exactly one.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far.
    #[must_use]
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> TetherResult<Answer> {
        self.asked.push(prompt.to_string());
        let answer = self.answers.pop_front().ok_or_else(|| PromptError::Script {
            prompt: prompt.to_string(),
            message: "no answers left".to_string(),
        })?;
        trace!(prompt, ?answer, "scripted answer");
        Ok(answer)
    }

    fn mismatch(prompt: &str, expected: &str, got: &Answer) -> PromptError {
        PromptError::Script {
            prompt: prompt.to_string(),
            message: format!("expected {expected} answer, got {got:?}"),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[&str], _default: usize) -> TetherResult<usize> {
        match self.next(prompt)? {
            Answer::Select(index) if index < items.len() => Ok(index),
            Answer::Select(index) => Err(PromptError::Script {
                prompt: prompt.to_string(),
                message: format!("index {index} out of range (0..{})", items.len()),
            }
            .into()),
            other => Err(Self::mismatch(prompt, "select", &other).into()),
        }
    }

    fn input(&mut self, prompt: &str, _current: &str) -> TetherResult<String> {
        match self.next(prompt)? {
            Answer::Input(text) => Ok(text),
            other => Err(Self::mismatch(prompt, "input", &other).into()),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> TetherResult<bool> {
        match self.next(prompt)? {
            Answer::Confirm(yes) => Ok(yes),
            other => Err(Self::mismatch(prompt, "confirm", &other).into()),
        }
    }
}
