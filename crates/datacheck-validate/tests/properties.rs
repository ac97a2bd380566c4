//! Property tests for duplicate-row detection and category membership.

use datacheck_model::{Column, Table};
use datacheck_validate::checks::categories::evaluate;
use datacheck_validate::checks::table::duplicate_rows;
use proptest::prelude::*;

fn table_from(rows: &[(Option<i64>, Option<u8>)]) -> Table {
    let ids = rows.iter().map(|(id, _)| *id).collect();
    let codes: Vec<Option<String>> = rows
        .iter()
        .map(|(_, code)| code.map(|c| format!("c{c}")))
        .collect();
    Table::new(vec![Column::integer("id", ids), Column::text("code", codes)])
    .unwrap()
}

proptest! {
    #[test]
    fn duplicates_iff_equal_rows(
        rows in prop::collection::vec((prop::option::of(0i64..4), prop::option::of(0u8..3)), 0..24)
    ) {
        let table = table_from(&rows);
        let duplicates = duplicate_rows(&table);

        for (index, row) in rows.iter().enumerate() {
            let repeats_earlier = rows[..index].contains(row);
            prop_assert_eq!(duplicates.contains(&(index + 1)), repeats_earlier);
        }
    }

    #[test]
    fn category_membership_is_idempotent(
        values in prop::collection::vec(prop::option::of(0i64..10), 0..32),
        allowed in prop::collection::vec(0i64..10, 1..5),
    ) {
        let column = Column::integer("tipo", values);
        let tokens: Vec<String> = allowed.iter().map(ToString::to_string).collect();

        let first = evaluate(&column, &tokens).unwrap();
        let second = evaluate(&column, &tokens).unwrap();
        prop_assert_eq!(&first, &second);

        // Restricting the column to its valid values leaves nothing invalid.
        let valid: Vec<Option<i64>> = column
            .iter()
            .filter(|cell| !first.invalid.contains(&cell.to_string()))
            .map(|cell| cell.to_string().parse().ok())
            .collect();
        let filtered = Column::integer("tipo", valid);
        prop_assert!(evaluate(&filtered, &tokens).unwrap().invalid.is_empty());
    }
}
