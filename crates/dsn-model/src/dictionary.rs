//! Output rows of the dictionary build.

#![deny(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::nomenclature::CodeValue;
use crate::records::FieldKey;

/// Header of the dictionary output table.
pub const DICTIONARY_COLUMNS: [&str; 9] = [
    "Bloc",
    "Rubrique",
    "Nom du champ",
    "Type",
    "Longueur",
    "Obligatoire",
    "Nomenclature",
    "Description",
    "Commentaire",
];

/// Header of the nomenclatures output table.
pub const NOMENCLATURE_COLUMNS: [&str; 4] = ["Nomenclature", "Code", "Libellé", "Commentaire"];

/// Displayed obligation of a rubrique.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObligationLabel {
    Oui,
    Conditionnel,
    #[default]
    Non,
}

impl ObligationLabel {
    /// Obligatory wins over conditional when both flags are set.
    pub fn from_flags(is_obligatory: bool, is_conditional: bool) -> Self {
        if is_obligatory {
            Self::Oui
        } else if is_conditional {
            Self::Conditionnel
        } else {
            Self::Non
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Oui => "Oui",
            Self::Conditionnel => "Conditionnel",
            Self::Non => "Non",
        }
    }
}

impl fmt::Display for ObligationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One flattened dictionary line per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryRow {
    /// `"<blockId> - <block name>"`.
    pub block: String,
    pub rubrique: FieldKey,
    pub name: String,
    pub nature: String,
    pub length: String,
    pub obligation: ObligationLabel,
    /// Data type id when that data type carries a nomenclature.
    pub nomenclature: String,
    pub description: String,
    pub comment: String,
}

impl DictionaryRow {
    /// Cells in [`DICTIONARY_COLUMNS`] order.
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.block.clone(),
            self.rubrique.to_string(),
            self.name.clone(),
            self.nature.clone(),
            self.length.clone(),
            self.obligation.as_str().to_string(),
            self.nomenclature.clone(),
            self.description.clone(),
            self.comment.clone(),
        ]
    }
}

/// One flattened line per nomenclature code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NomenclatureRow {
    pub nomenclature: String,
    pub code: String,
    pub label: String,
    pub comment: String,
}

impl NomenclatureRow {
    pub fn new(nomenclature_id: &str, value: &CodeValue) -> Self {
        Self {
            nomenclature: nomenclature_id.to_string(),
            code: value.code.clone(),
            label: value.label.clone(),
            comment: value.comment.clone(),
        }
    }

    /// Cells in [`NOMENCLATURE_COLUMNS`] order.
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.nomenclature.clone(),
            self.code.clone(),
            self.label.clone(),
            self.comment.clone(),
        ]
    }
}
