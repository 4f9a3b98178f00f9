//! Typed records for the four reference tables.
//!
//! Each record reads its columns by header name. An absent column reads as an
//! empty string (or `None` for optional attributes); nothing here fails.

#![deny(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::table::{Record, get_field, get_optional};

/// Column headers of the fields table.
pub mod field_columns {
    pub const BLOCK_ID: &str = "Block Id";
    pub const ID: &str = "Id";
    pub const DATA_TYPE_ID: &str = "DataType Id";
    pub const NAME: &str = "Name";
    pub const DESCRIPTION: &str = "Description";
    pub const COMMENT: &str = "Comment";
}

/// Column headers of the data types table.
pub mod data_type_columns {
    pub const ID: &str = "Id";
    pub const NAME: &str = "Name";
    pub const NATURE: &str = "Nature";
    pub const LENGTH_MIN: &str = "Lg Min";
    pub const LENGTH_MAX: &str = "Lg Max";
    pub const VALUES: &str = "Values";
}

/// Column headers of the blocks table.
pub mod block_columns {
    pub const ID: &str = "Id";
    pub const NAME: &str = "Name";
}

/// Dotted rubrique identifier `<blockId>.<id>`, the join key into the usage matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey(String);

impl FieldKey {
    pub fn new(block_id: &str, id: &str) -> Self {
        Self(format!("{block_id}.{id}"))
    }

    /// Wrap an already dotted rubrique, as found in the usage matrix.
    pub fn from_rubrique(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A declarable data item (rubrique) within a block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub block_id: String,
    pub id: String,
    pub data_type_id: String,
    pub name: String,
    pub description: String,
    pub comment: String,
}

impl FieldRecord {
    pub fn from_record(record: &Record) -> Self {
        Self {
            block_id: get_field(record, field_columns::BLOCK_ID),
            id: get_field(record, field_columns::ID),
            data_type_id: get_field(record, field_columns::DATA_TYPE_ID),
            name: get_field(record, field_columns::NAME),
            description: get_field(record, field_columns::DESCRIPTION),
            comment: get_field(record, field_columns::COMMENT),
        }
    }

    pub fn key(&self) -> FieldKey {
        FieldKey::new(&self.block_id, &self.id)
    }
}

/// A data type definition: nature, length bounds and optional enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTypeRecord {
    pub id: String,
    /// Display name; falls back to `id` when the column is blank.
    pub name: String,
    pub nature: String,
    pub length_min: Option<String>,
    pub length_max: Option<String>,
    /// Raw enumeration string, e.g. `01=Mensuelle;02=Trimestrielle`.
    pub values: Option<String>,
}

impl DataTypeRecord {
    pub fn from_record(record: &Record) -> Self {
        let id = get_field(record, data_type_columns::ID);
        let name = get_optional(record, data_type_columns::NAME).unwrap_or_else(|| id.clone());
        Self {
            id,
            name,
            nature: get_field(record, data_type_columns::NATURE),
            length_min: get_optional(record, data_type_columns::LENGTH_MIN),
            length_max: get_optional(record, data_type_columns::LENGTH_MAX),
            values: get_optional(record, data_type_columns::VALUES),
        }
    }

    /// `"<min>-<max>"`, with a missing bound rendered as an empty side.
    pub fn length_range(&self) -> String {
        format!(
            "{}-{}",
            self.length_min.as_deref().unwrap_or_default(),
            self.length_max.as_deref().unwrap_or_default()
        )
    }
}

/// A named block of the declaration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub id: String,
    pub name: String,
}

impl BlockRecord {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: get_field(record, block_columns::ID),
            name: get_field(record, block_columns::NAME),
        }
    }
}
