use chrono::NaiveDate;
use csv_quality::{
    FixedClock, ReportOptions, Table, Value, assemble, classifier::is_sample_eligible,
    profile_column,
};
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        (-3i64..=3).prop_map(Value::Integer),
        (-2.0f64..2.0).prop_map(Value::Float),
        prop_oneof![
            Just(String::new()),
            Just("  ".to_string()),
            Just("n/a".to_string()),
            Just("#ERROR: timeout".to_string()),
            "[a-z]{1,6}",
        ]
        .prop_map(Value::Text),
        (1u32..=28).prop_map(|day| Value::Date(NaiveDate::from_ymd_opt(2024, 2, day).unwrap())),
    ]
}

fn table_strategy() -> impl Strategy<Value = Table> {
    (1usize..4, 0usize..12).prop_flat_map(|(width, height)| {
        proptest::collection::vec(proptest::collection::vec(value_strategy(), width), height)
            .prop_map(move |rows| {
                let columns = (0..width).map(|idx| format!("c{idx}")).collect();
                Table::new(columns, rows).expect("generated table is rectangular")
            })
    })
}

proptest! {
    #[test]
    fn counts_always_add_up(table in table_strategy(), max_samples in 1usize..6) {
        for column in table.columns() {
            let stats = profile_column(&table, column, max_samples).expect("profile");
            prop_assert_eq!(stats.empty_count + stats.non_empty_count, stats.total_count);
            prop_assert_eq!(stats.total_count, table.row_count());
            prop_assert!((0.0..=1.0).contains(&stats.completeness_ratio));
        }
    }

    #[test]
    fn sample_count_never_exceeds_limit(table in table_strategy(), max_samples in 1usize..6) {
        for column in table.columns() {
            let stats = profile_column(&table, column, max_samples).expect("profile");
            let eligible = table
                .column_values(column)
                .expect("column values")
                .filter(|value| is_sample_eligible(value))
                .count();
            let sampled = if stats.sample_values.is_empty() {
                0
            } else {
                stats.sample_values.split(", ").count()
            };
            prop_assert_eq!(sampled, eligible.min(max_samples));
        }
    }

    #[test]
    fn report_has_two_extra_rows_indexed_in_order(table in table_strategy()) {
        let at = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let report = assemble(&table, &ReportOptions::new("generated"), &FixedClock(at))
            .expect("assemble");
        prop_assert_eq!(report.len(), table.columns().len() + 2);
        for (position, row) in report.rows.iter().enumerate() {
            prop_assert_eq!(row.index, position + 1);
        }
    }
}
