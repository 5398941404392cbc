//! Test doubles for the spawn and lookup ports.

use crate::spawn::{Locator, Spawn, Spawner};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Locator backed by an in-memory table of installed binaries and links.
#[derive(Debug, Default)]
pub struct FakeLocator {
    installed: HashMap<String, PathBuf>,
    links: HashMap<PathBuf, PathBuf>,
}

impl FakeLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(mut self, bin: &str, path: &str) -> Self {
        self.installed.insert(bin.to_string(), PathBuf::from(path));
        self
    }

    pub fn link(mut self, from: &str, to: &str) -> Self {
        self.links.insert(PathBuf::from(from), PathBuf::from(to));
        self
    }
}

impl Locator for FakeLocator {
    fn which(&self, bin: &str) -> Option<PathBuf> {
        self.installed.get(bin).cloned()
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        self.links
            .get(path)
            .cloned()
            .unwrap_or_else(|| path.to_path_buf())
    }
}

/// Spawner that records every launch instead of starting it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSpawner {
    spawns: Rc<RefCell<Vec<Spawn>>>,
}

impl RecordingSpawner {
    pub fn spawns(&self) -> Vec<Spawn> {
        self.spawns.borrow().clone()
    }
}

impl Spawner for RecordingSpawner {
    fn spawn(&self, spawn: &Spawn) -> io::Result<()> {
        self.spawns.borrow_mut().push(spawn.clone());
        Ok(())
    }
}

/// Spawner whose every launch fails as if the program were missing.
#[derive(Debug, Clone, Copy)]
pub struct FailingSpawner;

impl Spawner for FailingSpawner {
    fn spawn(&self, _spawn: &Spawn) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::NotFound, "not found"))
    }
}
