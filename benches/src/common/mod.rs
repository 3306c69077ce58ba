use tally::prelude::*;

/// Generate paired transaction and confirmation CSV datasets
///
/// Every `confirm_every`-th record is confirmed; values cycle through
/// 0.01..=1000.00.
pub fn generate_csv_datasets(num_records: usize, confirm_every: usize) -> (String, String) {
    let mut transactions = String::from("id,value\n");
    let mut confirmations = String::from("id,confirmed\n");

    for i in 0..num_records {
        let value = format!("{}.{:02}", i % 1000, (i % 99) + 1);
        let confirmed = i % confirm_every.max(1) == 0;
        transactions.push_str(&format!("tx{i},{value}\n"));
        confirmations.push_str(&format!("tx{i},{confirmed}\n"));
    }

    (transactions, confirmations)
}

/// In-memory sources with the same shape as the CSV datasets
pub fn generate_sources(
    num_records: usize,
    confirm_every: usize,
) -> (IterSource<Transaction>, IterSource<Confirmation>) {
    let transactions = IterSource::ok((0..num_records).map(|i| {
        Transaction::new(
            format!("tx{i}"),
            rust_decimal::Decimal::new(((i % 1000) * 100 + (i % 99) + 1) as i64, 2),
        )
    }));
    let confirmations = IterSource::ok((0..num_records).map(|i| {
        Confirmation::new(format!("tx{i}"), i % confirm_every.max(1) == 0)
    }));

    (transactions, confirmations)
}
