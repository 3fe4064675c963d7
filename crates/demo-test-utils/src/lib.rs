//! Testing utilities for the finance demo workspace
//!
//! Shared fixtures: temporary notebook files, sized figure files, and
//! throwaway repository trees laid out like the real one.

#![allow(missing_docs)]

use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Notebook JSON with one cell per entry; `None` omits `cell_type`
pub fn notebook_value(cell_types: &[Option<&str>]) -> Value {
    let cells: Vec<Value> = cell_types
        .iter()
        .map(|tag| match tag {
            Some(tag) => json!({ "cell_type": tag, "metadata": {}, "source": [] }),
            None => json!({ "metadata": {}, "source": [] }),
        })
        .collect();

    json!({
        "cells": cells,
        "metadata": {},
        "nbformat": 4,
        "nbformat_minor": 5,
    })
}

/// Write bytes to `root/rel`, creating parent directories
pub fn write_file(root: &Path, rel: impl AsRef<Path>, bytes: impl AsRef<[u8]>) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Write a notebook with the given cell types
pub fn write_notebook(root: &Path, rel: impl AsRef<Path>, cell_types: &[&str]) -> PathBuf {
    let tags: Vec<Option<&str>> = cell_types.iter().copied().map(Some).collect();
    write_file(root, rel, notebook_value(&tags).to_string())
}

/// Write a figure of exactly `len` bytes
pub fn write_figure(root: &Path, rel: impl AsRef<Path>, len: usize) -> PathBuf {
    write_file(root, rel, vec![0x89u8; len])
}

/// Temporary repository root
pub struct FixtureRepo {
    dir: TempDir,
}

impl FixtureRepo {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn notebook(&self, rel: &str, cell_types: &[&str]) -> PathBuf {
        write_notebook(self.root(), rel, cell_types)
    }

    pub fn figure(&self, rel: &str, len: usize) -> PathBuf {
        write_figure(self.root(), rel, len)
    }

    pub fn raw(&self, rel: &str, bytes: impl AsRef<[u8]>) -> PathBuf {
        write_file(self.root(), rel, bytes)
    }
}

impl Default for FixtureRepo {
    fn default() -> Self {
        Self::new()
    }
}
