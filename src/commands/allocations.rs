// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::{allocation_view, total_assets};
use crate::models::AllocationPatch;
use crate::store::FinanceStore;
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(store: &mut FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("status", sub)) => status(store, sub)?,
        Some(("set", sub)) => set(store, sub)?,
        Some(("add", sub)) => add(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn status(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let statuses = allocation_view(store.allocations(), total_assets(store.assets()));
    if !maybe_print_json(json_flag, jsonl_flag, &statuses)? {
        let rows: Vec<Vec<String>> = statuses
            .iter()
            .map(|s| {
                vec![
                    s.id.clone(),
                    s.category.clone(),
                    format!("{}%", s.target_percentage),
                    s.specific_target
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    s.nominal_target.to_string(),
                    s.actual_balance.to_string(),
                    format!("{:.2}%", s.realization.round_dp(2)),
                    s.band.as_str().to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "ID", "Category", "Target %", "Fixed", "Nominal", "Actual", "Realization",
                    "Band",
                ],
                rows,
            )
        );
    }
    Ok(())
}

fn set(store: &mut FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim().to_string();
    let mut patch = AllocationPatch::default();
    if let Some(category) = sub.get_one::<String>("category") {
        patch.category = Some(category.trim().to_string());
    }
    if let Some(pct) = sub.get_one::<String>("percent") {
        patch.target_percentage = Some(parse_decimal(pct.trim())?);
    }
    if let Some(balance) = sub.get_one::<String>("balance") {
        patch.actual_balance = Some(parse_decimal(balance.trim())?);
    }
    if let Some(target) = sub.get_one::<String>("target") {
        patch.specific_target = Some(Some(parse_decimal(target.trim())?));
    } else if sub.get_flag("clear-target") {
        patch.specific_target = Some(None);
    }
    store.update_allocation(&id, patch);
    println!("Updated allocation {}", id);
    Ok(())
}

fn add(store: &mut FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let pct = parse_decimal(sub.get_one::<String>("percent").unwrap().trim())?;
    let balance = parse_decimal(sub.get_one::<String>("balance").unwrap().trim())?;
    let target = sub
        .get_one::<String>("target")
        .map(|t| parse_decimal(t.trim()))
        .transpose()?;
    let alloc = store.add_allocation(category, pct, balance, target);
    println!("Added allocation '{}' ({})", alloc.category, alloc.id);
    Ok(())
}

fn rm(store: &mut FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim().to_string();
    store.remove_allocation(&id);
    println!("Removed allocation {}", id);
    Ok(())
}
