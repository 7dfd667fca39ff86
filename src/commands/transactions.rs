// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Source, TransactionDraft};
use crate::store::FinanceStore;
use crate::utils::{
    maybe_print_json, parse_date, parse_decimal, parse_source, parse_txn_type, pretty_table,
    type_label,
};
use anyhow::Result;
use chrono::Datelike;
use serde::Serialize;

pub fn handle(store: &mut FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn draft_from_args(sub: &clap::ArgMatches) -> Result<TransactionDraft> {
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d.trim())?,
        None => chrono::Utc::now().date_naive(),
    };
    Ok(TransactionDraft {
        date,
        kind: parse_txn_type(sub.get_one::<String>("type").unwrap())?,
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?,
        category: sub
            .get_one::<String>("category")
            .unwrap()
            .trim()
            .to_string(),
        description: sub
            .get_one::<String>("description")
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    })
}

fn add(store: &mut FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let source = parse_source(sub.get_one::<String>("source").unwrap())?;
    let draft = draft_from_args(sub)?;
    let txn = store.add_transaction(source, draft);
    println!(
        "Recorded {} {} on {} in {} ledger ({})",
        type_label(txn.kind),
        txn.amount,
        txn.date,
        source.as_str(),
        txn.id
    );
    Ok(())
}

fn edit(store: &mut FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim().to_string();
    let source = parse_source(sub.get_one::<String>("source").unwrap())?;
    let draft = draft_from_args(sub)?;
    store.update_transaction(&id, source, draft);
    println!("Updated transaction {}", id);
    Ok(())
}

fn rm(store: &mut FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim().to_string();
    let source = parse_source(sub.get_one::<String>("source").unwrap())?;
    store.delete_transaction(&id, source);
    println!("Removed transaction {}", id);
    Ok(())
}

fn list(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.source.clone(),
                    r.r#type.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Source", "Type", "Amount", "Category", "Description", "ID"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub source: String,
    pub r#type: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

pub fn query_rows(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let sources: Vec<Source> = match sub.get_one::<String>("source") {
        Some(s) => vec![parse_source(s)?],
        None => vec![Source::SideJob, Source::Studio],
    };
    let month = sub
        .get_one::<String>("month")
        .map(|s| crate::utils::parse_month(s.trim()))
        .transpose()?;

    let mut tagged: Vec<(Source, &crate::models::Transaction)> = Vec::new();
    for source in sources {
        for txn in store.ledger(source) {
            if let Some((y, mo)) = month {
                if txn.date.year() != y || txn.date.month() != mo {
                    continue;
                }
            }
            tagged.push((source, txn));
        }
    }
    tagged.sort_by(|a, b| b.1.date.cmp(&a.1.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        tagged.truncate(*limit);
    }

    Ok(tagged
        .into_iter()
        .map(|(source, t)| TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            source: source.as_str().to_string(),
            r#type: type_label(t.kind).to_string(),
            amount: t.amount.to_string(),
            category: t.category.clone(),
            description: t.description.clone(),
        })
        .collect())
}
