// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::FinanceStore;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(store: &mut FinanceStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            store.add_category(name)?;
            println!("Added category '{}'", name.trim());
        }
        Some(("list", _)) => {
            let data = store
                .categories()
                .iter()
                .map(|c| vec![c.clone()])
                .collect();
            println!("{}", pretty_table(&["Category"], data));
        }
        Some(("rename", sub)) => {
            let from = sub.get_one::<String>("from").unwrap();
            let to = sub.get_one::<String>("to").unwrap();
            store.rename_category(from, to)?;
            println!("Renamed category '{}' to '{}'", from, to.trim());
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            store.delete_category(name)?;
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
