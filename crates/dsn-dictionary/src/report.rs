//! Counts and unresolved references collected during a build.

use serde::Serialize;

use dsn_model::FieldKey;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub fields: usize,
    pub dictionary_rows: usize,
    pub data_types: usize,
    pub blocks: usize,
    pub nomenclatures: usize,
    pub nomenclature_rows: usize,
    pub usage_entries: usize,
    pub declaration_types: usize,
    pub obligatory: usize,
    pub conditional: usize,
    /// Fields whose data type id matched no data type.
    pub unresolved_data_types: Vec<FieldKey>,
    /// Fields whose block id matched no block.
    pub unresolved_blocks: Vec<FieldKey>,
    /// Fields absent from the usage matrix.
    pub without_usage: Vec<FieldKey>,
}

impl BuildReport {
    pub fn has_unresolved(&self) -> bool {
        !self.unresolved_data_types.is_empty() || !self.unresolved_blocks.is_empty()
    }
}
