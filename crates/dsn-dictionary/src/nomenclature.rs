//! Nomenclature Extractor.
//!
//! A data type carries a code list when its `Values` column holds at least
//! one `=`: `code=label` segments separated by `;`. Types without `=` produce
//! no nomenclature at all, not an empty one.

use tracing::{debug, warn};

use dsn_model::{CodeValue, DataTypeRecord, Nomenclature, NomenclatureSet};

const SEGMENT_SEPARATOR: char = ';';
const CODE_SEPARATOR: char = '=';

/// True when a raw `Values` string encodes an enumeration.
pub fn is_enumeration(raw: &str) -> bool {
    !raw.is_empty() && raw.contains(CODE_SEPARATOR)
}

/// Parse `code=label;code=label` into code values, in order.
///
/// Each segment splits on its first `=`; a segment without `=` becomes a code
/// with an empty label. Every segment yields a value, so a blank one (as in
/// `01=A;;02=B` or after a trailing `;`) yields a blank code and label.
pub fn parse_values(raw: &str) -> Vec<CodeValue> {
    raw.split(SEGMENT_SEPARATOR)
        .map(str::trim)
        .map(|segment| match segment.split_once(CODE_SEPARATOR) {
            Some((code, label)) => CodeValue::new(code.trim(), label.trim()),
            None => CodeValue::new(segment, ""),
        })
        .collect()
}

/// The nomenclature of one data type, if it has one.
pub fn nomenclature_for(data_type: &DataTypeRecord) -> Option<Nomenclature> {
    let raw = data_type.values.as_deref()?;
    if !is_enumeration(raw) {
        return None;
    }
    let mut nomenclature = Nomenclature::new(data_type.id.clone(), data_type.name.clone());
    for value in parse_values(raw) {
        nomenclature.push(value);
    }
    Some(nomenclature)
}

/// Extract every nomenclature from the data types table.
///
/// When two data types share an id the first one is kept, matching the
/// first-match lookup used when joining fields to data types.
pub fn extract_nomenclatures(data_types: &[DataTypeRecord]) -> NomenclatureSet {
    let mut set = NomenclatureSet::new();
    for data_type in data_types {
        let Some(nomenclature) = nomenclature_for(data_type) else {
            continue;
        };
        let codes = nomenclature.values.len();
        if set.insert_first(nomenclature) {
            debug!(data_type = %data_type.id, codes, "extracted nomenclature");
        } else {
            warn!(data_type = %data_type.id, "duplicate data type id, keeping first nomenclature");
        }
    }
    set
}
