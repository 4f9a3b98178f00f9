//! Data model for the DSN data dictionary.
//!
//! The reference tables (fields, data types, blocks, usage matrix) arrive as
//! plain [`Table`] grids. They are read into the typed records defined here
//! and joined into [`DictionaryRow`] and [`NomenclatureRow`] outputs.

#![deny(unsafe_code)]

pub mod dictionary;
pub mod error;
pub mod nomenclature;
pub mod records;
pub mod table;
pub mod usage;

pub use dictionary::{
    DICTIONARY_COLUMNS, DictionaryRow, NOMENCLATURE_COLUMNS, NomenclatureRow, ObligationLabel,
};
pub use error::{DsnError, Result};
pub use nomenclature::{CodeValue, Nomenclature, NomenclatureSet};
pub use records::{BlockRecord, DataTypeRecord, FieldKey, FieldRecord};
pub use table::{Record, Table, get_field, get_optional};
pub use usage::{UsageEntry, UsageMap};
