use anyhow::*;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use crate::console::Console;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    Line(String),
    Formatted(String),
    Read,
}

#[derive(Clone, Default)]
pub struct MockConsole {
    entries: Arc<RwLock<Vec<Entry>>>,
    inputs: Arc<RwLock<VecDeque<i64>>>,
}

impl MockConsole {
    pub fn new(inputs: &[i64]) -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            inputs: Arc::new(RwLock::new(inputs.iter().copied().collect())),
        }
    }

    pub fn flush(&self) -> Vec<Entry> {
        std::mem::replace(&mut *self.entries.write(), Vec::new())
    }

    /// Everything printed so far, one string per line.
    pub fn transcript(&self) -> Vec<String> {
        self.entries
            .read()
            .iter()
            .filter_map(|entry| match entry {
                Entry::Line(text) | Entry::Formatted(text) => Some(text.clone()),
                Entry::Read => None,
            })
            .collect()
    }

    pub fn read_count(&self) -> usize {
        self.entries
            .read()
            .iter()
            .filter(|entry| **entry == Entry::Read)
            .count()
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.read().len()
    }
}

impl Console for MockConsole {
    fn print_line(&mut self, line: &str) -> Result<()> {
        self.entries.write().push(Entry::Line(line.to_owned()));
        Ok(())
    }

    fn print_formatted_line(&mut self, args: fmt::Arguments) -> Result<()> {
        self.entries.write().push(Entry::Formatted(args.to_string()));
        Ok(())
    }

    fn read_int(&mut self) -> Result<i64> {
        self.entries.write().push(Entry::Read);
        self.inputs
            .write()
            .pop_front()
            .context("Mock console ran out of inputs")
    }
}
