//! Nomenclatures: ordered code lists carried by enumerated data types.
//!
//! A data type whose `Values` column reads `01=Mensuelle;02=Trimestrielle`
//! yields one nomenclature keyed by the data type id, with its codes kept in
//! declaration order.

#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single code of a nomenclature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeValue {
    pub code: String,
    pub label: String,
    /// Never filled at extraction time.
    pub comment: String,
}

impl CodeValue {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            comment: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nomenclature {
    /// Id of the data type this code list belongs to.
    pub id: String,
    pub name: String,
    pub values: Vec<CodeValue>,
}

impl Nomenclature {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn push(&mut self, value: CodeValue) {
        self.values.push(value);
    }

    /// Label of the first value carrying `code`.
    pub fn label(&self, code: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|value| value.code == code)
            .map(|value| value.label.as_str())
    }

    pub fn codes(&self) -> Vec<&str> {
        self.values.iter().map(|value| value.code.as_str()).collect()
    }
}

/// All nomenclatures of a build, keyed by data type id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NomenclatureSet {
    nomenclatures: BTreeMap<String, Nomenclature>,
}

impl NomenclatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a nomenclature unless one already exists for its id.
    ///
    /// Returns false when the id was already taken.
    pub fn insert_first(&mut self, nomenclature: Nomenclature) -> bool {
        if self.nomenclatures.contains_key(&nomenclature.id) {
            return false;
        }
        self.nomenclatures
            .insert(nomenclature.id.clone(), nomenclature);
        true
    }

    pub fn get(&self, id: &str) -> Option<&Nomenclature> {
        self.nomenclatures.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nomenclatures.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Nomenclature> {
        self.nomenclatures.values()
    }

    pub fn len(&self) -> usize {
        self.nomenclatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nomenclatures.is_empty()
    }

    /// Total number of code values across all nomenclatures.
    pub fn code_count(&self) -> usize {
        self.nomenclatures
            .values()
            .map(|nomenclature| nomenclature.values.len())
            .sum()
    }
}
