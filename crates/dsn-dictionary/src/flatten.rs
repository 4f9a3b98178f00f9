//! Nomenclature Flattener: one output row per code value.

use dsn_model::{NomenclatureRow, NomenclatureSet};

/// Rows ordered by nomenclature id, codes in their declared order.
pub fn flatten_nomenclatures(nomenclatures: &NomenclatureSet) -> Vec<NomenclatureRow> {
    nomenclatures
        .iter()
        .flat_map(|nomenclature| {
            nomenclature
                .values
                .iter()
                .map(move |value| NomenclatureRow::new(&nomenclature.id, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsn_model::{CodeValue, Nomenclature};

    #[test]
    fn keeps_code_order_within_each_nomenclature() {
        let mut set = NomenclatureSet::new();
        let mut frequency = Nomenclature::new("T9", "Frequency");
        frequency.push(CodeValue::new("02", "Quarterly"));
        frequency.push(CodeValue::new("01", "Monthly"));
        set.insert_first(frequency);
        let mut yes_no = Nomenclature::new("T1", "YesNo");
        yes_no.push(CodeValue::new("01", "Oui"));
        set.insert_first(yes_no);
        set.insert_first(Nomenclature::new("T5", "Empty"));

        let rows = flatten_nomenclatures(&set);
        let cells: Vec<(&str, &str)> = rows
            .iter()
            .map(|row| (row.nomenclature.as_str(), row.code.as_str()))
            .collect();
        assert_eq!(cells, [("T1", "01"), ("T9", "02"), ("T9", "01")]);
    }
}
