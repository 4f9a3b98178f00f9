//! Usage matrix entries: per-declaration-type obligation of each rubrique.
//!
//! A rubrique is obligatory when any declaration type marks it `O` and
//! conditional when any marks it `C`. Both flags may hold at once; the
//! dictionary always displays obligatory first.

#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::records::FieldKey;

/// Obligation code for a mandatory rubrique.
pub const OBLIGATORY_CODE: &str = "O";
/// Obligation code for a conditional rubrique.
pub const CONDITIONAL_CODE: &str = "C";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageEntry {
    pub is_obligatory: bool,
    pub is_conditional: bool,
    /// Raw obligation code per declaration type name.
    pub details: BTreeMap<String, String>,
}

impl UsageEntry {
    /// Build an entry from positional codes and the declaration names they align with.
    ///
    /// Zipping stops at the shorter sequence; positions with an empty
    /// declaration name are left out of `details` but still count for the flags.
    pub fn from_codes(declaration_types: &[String], codes: &[String]) -> Self {
        let is_obligatory = codes.iter().any(|code| code == OBLIGATORY_CODE);
        let is_conditional = codes.iter().any(|code| code == CONDITIONAL_CODE);
        let details = declaration_types
            .iter()
            .zip(codes)
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, code)| (name.clone(), code.clone()))
            .collect();
        Self {
            is_obligatory,
            is_conditional,
            details,
        }
    }

    /// Code recorded for one declaration type, if that column exists.
    pub fn code_for(&self, declaration_type: &str) -> Option<&str> {
        self.details.get(declaration_type).map(String::as_str)
    }
}

/// Usage entries keyed by rubrique, plus the declaration types in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageMap {
    declaration_types: Vec<String>,
    entries: BTreeMap<FieldKey, UsageEntry>,
}

impl UsageMap {
    pub fn new(declaration_types: Vec<String>) -> Self {
        Self {
            declaration_types,
            entries: BTreeMap::new(),
        }
    }

    /// Insert an entry, returning the one it replaced.
    pub fn insert(&mut self, key: FieldKey, entry: UsageEntry) -> Option<UsageEntry> {
        self.entries.insert(key, entry)
    }

    pub fn get(&self, key: &FieldKey) -> Option<&UsageEntry> {
        self.entries.get(key)
    }

    /// Non-empty declaration type names, in column order.
    pub fn declaration_types(&self) -> impl Iterator<Item = &str> {
        self.declaration_types
            .iter()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
