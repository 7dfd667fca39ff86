// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::total_assets;
use crate::models::Assets;
use crate::store::FinanceStore;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(store: &mut FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(store: &mut FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let bucket = |name: &str| -> Result<Decimal> {
        parse_decimal(sub.get_one::<String>(name).unwrap().trim())
    };
    let new_assets = Assets {
        bank_a: bucket("bank-a")?,
        bank_b: bucket("bank-b")?,
        cash: bucket("cash")?,
        reksadana: bucket("reksadana")?,
        e_wallet: bucket("e-wallet")?,
    };
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d.trim())?,
        None => chrono::Utc::now().date_naive(),
    };
    store.replace_assets(new_assets, date);
    println!(
        "Assets updated, total {} as of {}",
        total_assets(store.assets()),
        date
    );
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssetsView {
    assets: Assets,
    total_assets: Decimal,
    last_updated: Option<NaiveDate>,
}

fn show(store: &FinanceStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let assets = store.assets();
    let total = total_assets(assets);

    if json_flag {
        let view = AssetsView {
            assets: assets.clone(),
            total_assets: total,
            last_updated: store.asset_update_date(),
        };
        maybe_print_json(true, false, &view)?;
        return Ok(());
    }

    let rows = vec![
        vec!["Bank A".to_string(), assets.bank_a.to_string()],
        vec!["Bank B".to_string(), assets.bank_b.to_string()],
        vec!["Cash".to_string(), assets.cash.to_string()],
        vec!["Reksadana".to_string(), assets.reksadana.to_string()],
        vec!["E-Wallet".to_string(), assets.e_wallet.to_string()],
        vec!["Total".to_string(), total.to_string()],
    ];
    println!("{}", pretty_table(&["Bucket", "Balance"], rows));
    match store.asset_update_date() {
        Some(d) => println!("Last updated: {}", d),
        None => println!("Last updated: never"),
    }
    Ok(())
}
