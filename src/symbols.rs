//! # Symbol Directory
//!
//! Small read-only lookup table of searchable tickers.
//!
//! - Loads from a JSON file once at startup.
//! - Falls back to a compiled-in seed when no file is deployed.
//! - Case-insensitive substring search over symbol and name.
//!
//! The directory is deliberately just data, so a future real data source can
//! replace the file without touching request handling.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

/// One row of the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockEntry {
    pub symbol: String,
    pub name: String,
}

/// Rows returned for an empty query.
const DEFAULT_LIST_LIMIT: usize = 10;

const SEED_JSON: &str = include_str!("../config/symbols.json");

/// Immutable directory of supported tickers.
#[derive(Debug, Clone)]
pub struct SymbolDirectory {
    entries: Vec<StockEntry>,
}

impl SymbolDirectory {
    /// Load the directory from a JSON file.
    /// Falls back to the compiled-in seed on error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let entries = match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|_| Self::seed()),
            Err(_) => Self::seed(),
        };
        Self { entries }
    }

    fn seed() -> Vec<StockEntry> {
        serde_json::from_str(SEED_JSON).expect("compiled-in symbol seed is valid JSON")
    }

    /// Case-insensitive substring match over symbol and name.
    /// An empty query returns the head of the directory instead.
    pub fn search(&self, query: &str) -> Vec<StockEntry> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return self
                .entries
                .iter()
                .take(DEFAULT_LIST_LIMIT)
                .cloned()
                .collect();
        }

        self.entries
            .iter()
            .filter(|e| e.symbol.to_lowercase().contains(&q) || e.name.to_lowercase().contains(&q))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
