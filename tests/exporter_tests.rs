// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use kasku::models::{Source, TransactionDraft, TransactionType};
use kasku::store::FinanceStore;
use kasku::{cli, commands::exporter};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::tempdir;

fn setup() -> FinanceStore {
    let conn = Connection::open_in_memory().unwrap();
    kasku::db::init_schema(&conn).unwrap();
    FinanceStore::load(conn)
}

fn draft(d: &str, kind: TransactionType, amount: i64, category: &str) -> TransactionDraft {
    TransactionDraft {
        date: NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap(),
        kind,
        amount: Decimal::from(amount),
        category: category.to_string(),
        description: "catatan".to_string(),
    }
}

#[test]
fn export_transactions_streams_pretty_json() {
    let mut store = setup();
    // Inserted newest-first per ledger; export re-sorts oldest-first.
    store.add_transaction(
        Source::Studio,
        draft("2024-01-15", TransactionType::Income, 1_000_000, "Gaji"),
    );
    store.add_transaction(
        Source::SideJob,
        draft("2024-01-05", TransactionType::Expense, 50_000, "Makan"),
    );

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "kasku",
        "export",
        "transactions",
        "--format",
        "json",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&store, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "date": "2024-01-05",
                "source": "side-job",
                "type": "out",
                "amount": "50000",
                "category": "Makan",
                "description": "catatan"
            },
            {
                "date": "2024-01-15",
                "source": "studio",
                "type": "in",
                "amount": "1000000",
                "category": "Gaji",
                "description": "catatan"
            }
        ])
    );
}

#[test]
fn export_transactions_writes_csv_header_and_rows() {
    let mut store = setup();
    store.add_transaction(
        Source::SideJob,
        draft("2024-03-01", TransactionType::Income, 250_000, "Project A"),
    );

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "kasku",
        "export",
        "transactions",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&store, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "date,source,type,amount,category,description"
    );
    assert_eq!(
        lines.next().unwrap(),
        "2024-03-01,side-job,in,250000,Project A,catatan"
    );
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let store = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "kasku",
        "export",
        "transactions",
        "--format",
        "xml",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        assert!(exporter::handle(&store, export_m).is_err());
    } else {
        panic!("no export subcommand");
    }
    assert!(!out_path.exists());
}
