//! Ringpuffer der zuletzt ausgeführten Commands (Tests und Diagnose).

use super::AppCommand;
use std::collections::VecDeque;

/// Standard-Kapazität; ein Morph erzeugt einen Eintrag pro Tick.
pub const DEFAULT_CAPACITY: usize = 512;

#[derive(Debug)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    capacity: usize,
    total: u64,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Log mit fester Kapazität (mindestens ein Eintrag).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
        }
    }

    /// Hängt einen Command an; bei voller Kapazität fällt der älteste heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
        self.total += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller jemals geloggten Commands, auch der verdrängten.
    pub fn total_recorded(&self) -> u64 {
        self.total
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Gehaltene Einträge, ältester zuerst.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}
