// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Source, Transaction};
use crate::store::FinanceStore;
use crate::utils::type_label;
use anyhow::Result;
use serde_json::json;

pub fn handle(store: &FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut tagged: Vec<(Source, &Transaction)> = store
        .ledger(Source::SideJob)
        .iter()
        .map(|t| (Source::SideJob, t))
        .chain(
            store
                .ledger(Source::Studio)
                .iter()
                .map(|t| (Source::Studio, t)),
        )
        .collect();
    tagged.sort_by(|a, b| a.1.date.cmp(&b.1.date));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "source", "type", "amount", "category", "description"])?;
            for (source, t) in tagged {
                wtr.write_record([
                    t.date.to_string(),
                    source.as_str().to_string(),
                    type_label(t.kind).to_string(),
                    t.amount.to_string(),
                    t.category.clone(),
                    t.description.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for (source, t) in tagged {
                items.push(json!({
                    "date": t.date, "source": source.as_str(), "type": type_label(t.kind),
                    "amount": t.amount, "category": t.category, "description": t.description
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => anyhow::bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
