// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Source, TransactionDraft, TransactionType};
use crate::store::FinanceStore;
use crate::utils::{decode_component, parse_date, parse_decimal, type_label};
use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;

pub const SCHEME: &str = "web+finance:";

#[derive(Debug, Clone, PartialEq)]
pub struct Prefill {
    pub source: Source,
    pub draft: TransactionDraft,
}

/// Parses a launch link of the form
/// `web+finance://transaction/add?type=&amount=&category=&description=&date=&source=`.
///
/// Missing fields take the launch surface's usual fallbacks: expense,
/// side-job ledger, today, zero amount, empty strings.
pub fn parse_launch_url(raw: &str) -> Result<Prefill> {
    let raw = raw.trim();
    let rest = raw
        .strip_prefix(SCHEME)
        .with_context(|| format!("Not a {} link: '{}'", SCHEME, raw))?;
    let rest = rest.trim_start_matches('/');
    let (path, query) = match rest.split_once('?') {
        Some((p, q)) => (p, q),
        None => (rest, ""),
    };
    if path.trim_end_matches('/') != "transaction/add" {
        bail!("Unsupported link path '{}'", path);
    }

    let mut kind = TransactionType::Expense;
    let mut amount = Decimal::ZERO;
    let mut category = String::new();
    let mut description = String::new();
    let mut date = chrono::Utc::now().date_naive();
    let mut source = Source::SideJob;

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = decode_component(value);
        match key {
            "type" => {
                kind = if value == "Masuk" {
                    TransactionType::Income
                } else {
                    TransactionType::Expense
                };
            }
            "amount" => {
                if !value.is_empty() {
                    amount = parse_decimal(&value)?;
                }
            }
            "category" => category = value,
            "description" => description = value,
            "date" => {
                if !value.is_empty() {
                    date = parse_date(&value)?;
                }
            }
            "source" => {
                source = if value == "studio" {
                    Source::Studio
                } else {
                    Source::SideJob
                };
            }
            _ => {}
        }
    }

    Ok(Prefill {
        source,
        draft: TransactionDraft {
            date,
            kind,
            amount,
            category,
            description,
        },
    })
}

pub fn handle(store: &mut FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("handle", sub)) => {
            let url = sub.get_one::<String>("url").unwrap();
            let prefill = parse_launch_url(url)?;
            let source = prefill.source;
            // One link, one insert; re-running the command is a new add.
            let txn = store.add_transaction(source, prefill.draft);
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
        _ => Ok(()),
    }
}
