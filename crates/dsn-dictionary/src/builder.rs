//! Dictionary Builder: joins fields with data types, blocks, usage and
//! nomenclatures into one row per field.
//!
//! No row is ever dropped. Unresolved references leave the matching columns
//! blank and are recorded in the [`BuildReport`].

use std::collections::HashMap;

use tracing::debug;

use dsn_model::{
    BlockRecord, DataTypeRecord, DictionaryRow, FieldRecord, NomenclatureSet, ObligationLabel,
    UsageMap,
};

use crate::report::BuildReport;

/// Borrowed inputs of the join.
#[derive(Debug, Clone, Copy)]
pub struct JoinInputs<'a> {
    pub fields: &'a [FieldRecord],
    pub data_types: &'a [DataTypeRecord],
    pub blocks: &'a [BlockRecord],
    pub usage: &'a UsageMap,
    pub nomenclatures: &'a NomenclatureSet,
}

/// First record per id, mirroring a top-down lookup.
fn index_first<'a, T>(records: &'a [T], id: impl Fn(&T) -> &str) -> HashMap<&'a str, &'a T> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        index.entry(id(record)).or_insert(record);
    }
    index
}

/// Build one dictionary row per field, in field order.
pub fn build_dictionary(inputs: &JoinInputs<'_>, report: &mut BuildReport) -> Vec<DictionaryRow> {
    let data_types = index_first(inputs.data_types, |data_type| data_type.id.as_str());
    let blocks = index_first(inputs.blocks, |block| block.id.as_str());

    let mut rows = Vec::with_capacity(inputs.fields.len());
    for field in inputs.fields {
        let key = field.key();
        let data_type = data_types.get(field.data_type_id.as_str()).copied();
        let block = blocks.get(field.block_id.as_str()).copied();
        let usage = inputs.usage.get(&key);

        if data_type.is_none() {
            debug!(rubrique = %key, data_type = %field.data_type_id, "unresolved data type");
            report.unresolved_data_types.push(key.clone());
        }
        if block.is_none() {
            debug!(rubrique = %key, block = %field.block_id, "unresolved block");
            report.unresolved_blocks.push(key.clone());
        }
        if usage.is_none() {
            report.without_usage.push(key.clone());
        }

        let obligation = usage.map_or(ObligationLabel::Non, |entry| {
            ObligationLabel::from_flags(entry.is_obligatory, entry.is_conditional)
        });
        match obligation {
            ObligationLabel::Oui => report.obligatory += 1,
            ObligationLabel::Conditionnel => report.conditional += 1,
            ObligationLabel::Non => {}
        }

        let nomenclature = data_type
            .filter(|data_type| inputs.nomenclatures.contains(&data_type.id))
            .map(|data_type| data_type.id.clone())
            .unwrap_or_default();

        rows.push(DictionaryRow {
            block: format!(
                "{} - {}",
                field.block_id,
                block.map_or("", |block| block.name.as_str())
            ),
            rubrique: key,
            name: field.name.clone(),
            nature: data_type.map(|data_type| data_type.nature.clone()).unwrap_or_default(),
            length: data_type.map(DataTypeRecord::length_range).unwrap_or_default(),
            obligation,
            nomenclature,
            description: field.description.clone(),
            comment: field.comment.clone(),
        });
    }

    report.fields = inputs.fields.len();
    report.dictionary_rows = rows.len();
    rows
}
