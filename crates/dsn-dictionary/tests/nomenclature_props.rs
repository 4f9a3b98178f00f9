//! Property tests for the enumeration parser.

use dsn_dictionary::nomenclature::{nomenclature_for, parse_values};
use dsn_model::DataTypeRecord;
use proptest::prelude::*;

fn token() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ]{0,8}[A-Za-z0-9]|[A-Za-z0-9]"
}

proptest! {
    #[test]
    fn pairs_keep_order_and_count(pairs in prop::collection::vec((token(), token()), 1..12)) {
        let raw = pairs
            .iter()
            .map(|(code, label)| format!("{code}={label}"))
            .collect::<Vec<_>>()
            .join(";");
        let values = parse_values(&raw);
        prop_assert_eq!(values.len(), pairs.len());
        for (value, (code, label)) in values.iter().zip(&pairs) {
            prop_assert_eq!(&value.code, code);
            prop_assert_eq!(&value.label, label);
        }
    }

    #[test]
    fn values_without_equals_never_make_a_nomenclature(raw in "[^=]{0,40}") {
        let data_type = DataTypeRecord {
            id: "T".to_string(),
            values: Some(raw),
            ..DataTypeRecord::default()
        };
        prop_assert!(nomenclature_for(&data_type).is_none());
    }
}
