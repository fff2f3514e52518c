use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use csv_quality::{FixedClock, ReportOptions, Table, Value, assemble, profile_column};

fn generate_orders(rows: usize) -> Table {
    let columns = ["id", "customer", "amount", "status", "ordered_at"]
        .iter()
        .map(|name| name.to_string())
        .collect();
    let data = (0..rows)
        .map(|i| {
            let status = match i % 4 {
                0 => "shipped",
                1 => "pending",
                2 => "N/A",
                _ => "",
            };
            let day = (i % 28) as u32 + 1;
            vec![
                Value::Integer(i as i64),
                Value::from(format!("customer-{}", i % 97)),
                Value::Float((i % 13) as f64 * 1.5),
                Value::from(status),
                Value::Date(NaiveDate::from_ymd_opt(2024, 1, day).expect("valid day")),
            ]
        })
        .collect();
    Table::new(columns, data).expect("rectangular table")
}

fn bench_profile(c: &mut Criterion) {
    let table = generate_orders(50_000);
    let at = NaiveDate::from_ymd_opt(2024, 6, 1)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time");

    c.bench_function("profile_single_column", |b| {
        b.iter(|| profile_column(&table, "status", 5).expect("profile"))
    });

    let mut options = ReportOptions::new("orders");
    options.date_column = Some("ordered_at".to_string());
    c.bench_function("assemble_full_report", |b| {
        b.iter(|| assemble(&table, &options, &FixedClock(at)).expect("assemble"))
    });
}

criterion_group!(benches, bench_profile);
criterion_main!(benches);
