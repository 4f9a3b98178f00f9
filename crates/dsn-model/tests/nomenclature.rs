#![allow(missing_docs)]

use dsn_model::{CodeValue, Nomenclature, NomenclatureRow, NomenclatureSet};

#[test]
fn test_nomenclature_lookup() {
    let mut frequency = Nomenclature::new("T1", "Frequency");
    frequency.push(CodeValue::new("01", "Monthly"));
    frequency.push(CodeValue::new("02", "Quarterly"));
    frequency.push(CodeValue::new("01", "Duplicate"));

    assert_eq!(frequency.label("01"), Some("Monthly"));
    assert_eq!(frequency.label("02"), Some("Quarterly"));
    assert_eq!(frequency.label("03"), None);
    assert_eq!(frequency.codes(), ["01", "02", "01"]);
}

#[test]
fn test_set_keeps_first_nomenclature_per_id() {
    let mut set = NomenclatureSet::new();
    let mut first = Nomenclature::new("T1", "First");
    first.push(CodeValue::new("A", "a"));
    assert!(set.insert_first(first));
    assert!(!set.insert_first(Nomenclature::new("T1", "Second")));

    assert_eq!(set.len(), 1);
    assert_eq!(set.get("T1").map(|n| n.name.as_str()), Some("First"));
    assert_eq!(set.code_count(), 1);
}

#[test]
fn test_row_copies_code_value() {
    let value = CodeValue {
        code: "99".to_string(),
        label: "Autre".to_string(),
        comment: "hors norme".to_string(),
    };
    let row = NomenclatureRow::new("T7", &value);
    assert_eq!(row.to_cells(), ["T7", "99", "Autre", "hors norme"]);
}
