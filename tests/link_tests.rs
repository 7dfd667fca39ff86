// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use kasku::commands::link::parse_launch_url;
use kasku::models::{Source, TransactionType};
use kasku::store::FinanceStore;
use kasku::{cli, commands};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> FinanceStore {
    let conn = Connection::open_in_memory().unwrap();
    kasku::db::init_schema(&conn).unwrap();
    FinanceStore::load(conn)
}

#[test]
fn parses_a_complete_link() {
    let prefill = parse_launch_url(
        "web+finance://transaction/add?type=Masuk&amount=150000&category=Gaji&description=Honor%20bulanan&date=2024-02-01&source=studio",
    )
    .unwrap();

    assert_eq!(prefill.source, Source::Studio);
    assert_eq!(prefill.draft.kind, TransactionType::Income);
    assert_eq!(prefill.draft.amount, Decimal::from(150_000));
    assert_eq!(prefill.draft.category, "Gaji");
    assert_eq!(prefill.draft.description, "Honor bulanan");
    assert_eq!(
        prefill.draft.date,
        NaiveDate::parse_from_str("2024-02-01", "%Y-%m-%d").unwrap()
    );
}

#[test]
fn missing_fields_take_fallbacks() {
    let prefill = parse_launch_url("web+finance://transaction/add").unwrap();
    assert_eq!(prefill.source, Source::SideJob);
    assert_eq!(prefill.draft.kind, TransactionType::Expense);
    assert_eq!(prefill.draft.amount, Decimal::ZERO);
    assert_eq!(prefill.draft.category, "");
    assert_eq!(prefill.draft.description, "");

    // Unrecognized values also fall back rather than erroring.
    let prefill =
        parse_launch_url("web+finance://transaction/add?type=Other&source=elsewhere").unwrap();
    assert_eq!(prefill.draft.kind, TransactionType::Expense);
    assert_eq!(prefill.source, Source::SideJob);
}

#[test]
fn plus_and_percent_escapes_decode() {
    let prefill = parse_launch_url(
        "web+finance://transaction/add?description=makan+siang&category=Lain%2Dlain",
    )
    .unwrap();
    assert_eq!(prefill.draft.description, "makan siang");
    assert_eq!(prefill.draft.category, "Lain-lain");
}

#[test]
fn rejects_foreign_schemes_and_paths() {
    assert!(parse_launch_url("https://transaction/add?amount=1").is_err());
    assert!(parse_launch_url("web+finance://allocation/add?amount=1").is_err());
    assert!(parse_launch_url("web+finance://transaction/add?amount=abc").is_err());
}

#[test]
fn handled_link_lands_as_one_ordinary_add() {
    let mut store = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "kasku",
        "link",
        "handle",
        "web+finance://transaction/add?type=Masuk&amount=1000000&category=Gaji&date=2024-01-15&source=studio",
    ]);
    if let Some(("link", link_m)) = matches.subcommand() {
        commands::link::handle(&mut store, link_m).unwrap();
    } else {
        panic!("link command not parsed");
    }

    assert!(store.ledger(Source::SideJob).is_empty());
    let studio = store.ledger(Source::Studio);
    assert_eq!(studio.len(), 1);
    assert_eq!(studio[0].kind, TransactionType::Income);
    assert_eq!(studio[0].amount, Decimal::from(1_000_000));
    assert_eq!(studio[0].category, "Gaji");
}
