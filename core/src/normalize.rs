//! Synopsis normalization
//!
//! The synopsis service echoes each column's header back inside that
//! column's sample values. Normalization strips those echoes and leaves
//! every other field as received.

use log::debug;

use crate::models::Synopsis;

/// Remove header echoes from every column's sample values.
///
/// Pure and idempotent: normalizing an already normalized synopsis
/// returns it unchanged.
pub fn normalize(mut synopsis: Synopsis) -> Synopsis {
    let removed: usize = synopsis
        .columns
        .iter_mut()
        .map(|col| col.strip_header_samples())
        .sum();

    if removed > 0 {
        debug!(
            "Removed {} header echoes from {} synopsis columns",
            removed,
            synopsis.columns.len()
        );
    }

    synopsis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColType, Column};
    use proptest::prelude::*;

    fn column(header: &str, sample: &[&str]) -> Column {
        Column {
            col_type: ColType::Text,
            num_rows: -1,
            num_unique_values: -1,
            sample: sample.iter().map(|s| s.to_string()).collect(),
            sample_header: header.to_string(),
        }
    }

    #[test]
    fn test_removes_sample_header() {
        let synopsis = Synopsis {
            columns: vec![column("sample-header", &["allow1", "allow2", "sample-header", "allow3"])],
            num_columns: -1,
            num_rows: -1,
        };

        let normalized = normalize(synopsis);

        assert_eq!(normalized.columns[0].sample, vec!["allow1", "allow2", "allow3"]);
        assert_eq!(normalized.columns[0].sample_header, "sample-header");
        assert_eq!(normalized.num_columns, -1);
        assert_eq!(normalized.num_rows, -1);
    }

    #[test]
    fn test_each_column_uses_its_own_header() {
        let synopsis = Synopsis {
            columns: vec![column("a", &["a", "b"]), column("b", &["a", "b"])],
            num_columns: 2,
            num_rows: 2,
        };

        let normalized = normalize(synopsis);

        assert_eq!(normalized.columns[0].sample, vec!["b"]);
        assert_eq!(normalized.columns[1].sample, vec!["a"]);
    }

    #[test]
    fn test_empty_synopsis() {
        assert_eq!(normalize(Synopsis::default()), Synopsis::default());
    }

    fn arb_column() -> impl Strategy<Value = Column> {
        let header = prop_oneof![Just("h".to_string()), "[a-c]{0,2}"];
        (header, prop::collection::vec("[a-c]{0,2}|h", 0..8), any::<i64>(), any::<i64>())
            .prop_map(|(sample_header, sample, num_rows, num_unique_values)| Column {
                col_type: ColType::Text,
                num_rows,
                num_unique_values,
                sample,
                sample_header,
            })
    }

    fn arb_synopsis() -> impl Strategy<Value = Synopsis> {
        (prop::collection::vec(arb_column(), 0..6), any::<i64>(), any::<i64>()).prop_map(
            |(columns, num_columns, num_rows)| Synopsis {
                columns,
                num_columns,
                num_rows,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_samples_exclude_header(synopsis in arb_synopsis()) {
            let normalized = normalize(synopsis.clone());

            prop_assert_eq!(normalized.columns.len(), synopsis.columns.len());
            prop_assert_eq!(normalized.num_columns, synopsis.num_columns);
            prop_assert_eq!(normalized.num_rows, synopsis.num_rows);

            for (before, after) in synopsis.columns.iter().zip(&normalized.columns) {
                prop_assert!(!after.sample.contains(&after.sample_header));
                prop_assert_eq!(&after.sample_header, &before.sample_header);
                prop_assert_eq!(after.col_type, before.col_type);
                prop_assert_eq!(after.num_rows, before.num_rows);
                prop_assert_eq!(after.num_unique_values, before.num_unique_values);

                let expected: Vec<&String> = before
                    .sample
                    .iter()
                    .filter(|v| **v != before.sample_header)
                    .collect();
                prop_assert_eq!(after.sample.iter().collect::<Vec<_>>(), expected);
            }
        }

        #[test]
        fn prop_idempotent(synopsis in arb_synopsis()) {
            let once = normalize(synopsis);
            let twice = normalize(once.clone());
            prop_assert_eq!(once, twice);
        }
    }
}
