// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use kasku::engine::{monthly_recap, total_assets};
use kasku::models::{Source, Transaction, TransactionDraft, TransactionType};
use kasku::store::FinanceStore;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> FinanceStore {
    let conn = Connection::open_in_memory().unwrap();
    kasku::db::init_schema(&conn).unwrap();
    FinanceStore::load(conn)
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn txn(id: &str, d: &str, kind: TransactionType, amount: i64, category: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: date(d),
        kind,
        amount: Decimal::from(amount),
        category: category.to_string(),
        description: String::new(),
    }
}

fn draft(d: &str, kind: TransactionType, amount: i64, category: &str) -> TransactionDraft {
    TransactionDraft {
        date: date(d),
        kind,
        amount: Decimal::from(amount),
        category: category.to_string(),
        description: String::new(),
    }
}

#[test]
fn empty_ledgers_empty_recap() {
    let rows = monthly_recap(&[], &[], Decimal::from(52_500_000));
    assert!(rows.is_empty());
}

#[test]
fn seeded_single_month_scenario() {
    let mut store = setup();
    store.add_transaction(
        Source::Studio,
        draft("2024-01-15", TransactionType::Income, 1_000_000, "Gaji"),
    );
    store.add_transaction(
        Source::SideJob,
        draft("2024-01-20", TransactionType::Expense, 200_000, "Makan"),
    );

    let total = total_assets(store.assets());
    let rows = monthly_recap(
        store.ledger(Source::SideJob),
        store.ledger(Source::Studio),
        total,
    );

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!((row.year, row.month), (2024, 1));
    assert_eq!(row.total_income_studio, Decimal::from(1_000_000));
    assert_eq!(row.total_income_side_job, Decimal::ZERO);
    assert_eq!(row.total_expense, Decimal::from(200_000));
    assert_eq!(row.initial_balance, total - Decimal::from(800_000));
    assert_eq!(row.final_balance, row.initial_balance + Decimal::from(800_000));
    assert_eq!(row.final_balance, total);
}

#[test]
fn balances_chain_across_months() {
    let side_job = vec![
        txn("s1", "2024-01-05", TransactionType::Income, 500_000, "Project A"),
        txn("s2", "2024-03-10", TransactionType::Expense, 150_000, "Makan"),
    ];
    let studio = vec![
        txn("t1", "2024-01-15", TransactionType::Income, 2_000_000, "Gaji"),
        txn("t2", "2024-03-02", TransactionType::Income, 750_000, "Gaji"),
        txn("t3", "2024-04-01", TransactionType::Expense, 300_000, "Hiburan"),
    ];
    let total = Decimal::from(10_000_000);
    let rows = monthly_recap(&side_job, &studio, total);

    // January, March, April; February is omitted, not zero-filled.
    let keys: Vec<(i32, u32)> = rows.iter().map(|r| (r.year, r.month)).collect();
    assert_eq!(keys, vec![(2024, 1), (2024, 3), (2024, 4)]);

    for pair in rows.windows(2) {
        assert_eq!(pair[1].initial_balance, pair[0].final_balance);
    }

    // Net flow over all rows equals the overall balance movement.
    let net: Decimal = rows
        .iter()
        .map(|r| r.total_income_side_job + r.total_income_studio - r.total_expense)
        .sum();
    assert_eq!(
        net,
        rows.last().unwrap().final_balance - rows[0].initial_balance
    );
    // And the chain ends at the snapshot total it was derived from.
    assert_eq!(rows.last().unwrap().final_balance, total);
}

#[test]
fn investment_is_a_subset_of_expense() {
    let side_job = vec![
        txn("s1", "2024-02-01", TransactionType::Expense, 400_000, "Investasi Alat"),
        txn("s2", "2024-02-03", TransactionType::Expense, 100_000, "Makan"),
    ];
    let studio = vec![txn(
        "t1",
        "2024-02-10",
        TransactionType::Expense,
        250_000,
        "investasi",
    )];
    let rows = monthly_recap(&side_job, &studio, Decimal::ZERO);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_expense, Decimal::from(750_000));
    assert_eq!(rows[0].investment, Decimal::from(650_000));
}

#[test]
fn income_split_by_source_ledger() {
    let side_job = vec![txn("s1", "2024-05-01", TransactionType::Income, 111, "Project A")];
    let studio = vec![txn("t1", "2024-05-02", TransactionType::Income, 222, "Gaji")];
    let rows = monthly_recap(&side_job, &studio, Decimal::from(333));

    assert_eq!(rows[0].total_income_side_job, Decimal::from(111));
    assert_eq!(rows[0].total_income_studio, Decimal::from(222));
    assert_eq!(rows[0].initial_balance, Decimal::ZERO);
    assert_eq!(rows[0].final_balance, Decimal::from(333));
}

#[test]
fn januaries_of_different_years_stay_apart() {
    let studio = vec![
        txn("t1", "2024-01-10", TransactionType::Income, 200, "Gaji"),
        txn("t2", "2023-01-10", TransactionType::Income, 100, "Gaji"),
    ];
    let rows = monthly_recap(&[], &studio, Decimal::from(300));

    let keys: Vec<(i32, u32)> = rows.iter().map(|r| (r.year, r.month)).collect();
    assert_eq!(keys, vec![(2023, 1), (2024, 1)]);
    assert_eq!(rows[0].total_income_studio, Decimal::from(100));
    assert_eq!(rows[1].total_income_studio, Decimal::from(200));
    assert_eq!(rows[1].initial_balance, rows[0].final_balance);
}
