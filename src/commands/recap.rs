// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::{monthly_recap, total_assets};
use crate::models::Source;
use crate::store::FinanceStore;
use crate::utils::{maybe_print_json, month_label, pretty_table};
use anyhow::Result;

pub fn handle(store: &FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let rows = monthly_recap(
        store.ledger(Source::SideJob),
        store.ledger(Source::Studio),
        total_assets(store.assets()),
    );
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data: Vec<Vec<String>> = rows
            .iter()
            .map(|r| {
                vec![
                    month_label(r.year, r.month),
                    r.initial_balance.to_string(),
                    r.total_income_side_job.to_string(),
                    r.total_income_studio.to_string(),
                    r.total_expense.to_string(),
                    r.investment.to_string(),
                    r.final_balance.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "Month",
                    "Initial",
                    "Income (Side-Job)",
                    "Income (Studio)",
                    "Expense",
                    "Investment",
                    "Final",
                ],
                data,
            )
        );
    }
    Ok(())
}
