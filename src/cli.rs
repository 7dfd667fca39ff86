// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn flag_json() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as pretty JSON")
}

fn flag_jsonl() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .help("Print as JSON lines")
}

fn arg_source(required: bool) -> Arg {
    Arg::new("source")
        .long("source")
        .required(required)
        .help("Ledger: side-job|studio")
}

pub fn build_cli() -> Command {
    Command::new("kasku")
        .version(crate_version!())
        .about("Kasku: dual-ledger personal finance, savings allocations, and monthly recap")
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction in one ledger")
                        .arg(arg_source(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("in|out"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD (default: today)"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(arg_source(false))
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(flag_json())
                        .arg(flag_jsonl()),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Replace every field of a transaction")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(arg_source(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("in|out"),
                        )
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(arg_source(true)),
                ),
        )
        .subcommand(
            Command::new("assets")
                .about("Cash asset snapshot")
                .subcommand(
                    Command::new("set")
                        .about("Replace all five buckets at once")
                        .arg(Arg::new("bank-a").long("bank-a").required(true))
                        .arg(Arg::new("bank-b").long("bank-b").required(true))
                        .arg(Arg::new("cash").long("cash").required(true))
                        .arg(Arg::new("reksadana").long("reksadana").required(true))
                        .arg(Arg::new("e-wallet").long("e-wallet").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD (default: today)"),
                        ),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show buckets and total")
                        .arg(flag_json()),
                ),
        )
        .subcommand(
            Command::new("alloc")
                .about("Savings allocations against total assets")
                .subcommand(
                    Command::new("status")
                        .about("Targets, realization and bands")
                        .arg(flag_json())
                        .arg(flag_jsonl()),
                )
                .subcommand(
                    Command::new("set")
                        .about("Patch fields of one allocation")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("percent").long("percent").help("Target % of total assets"))
                        .arg(Arg::new("balance").long("balance").help("Actual saved balance"))
                        .arg(
                            Arg::new("target")
                                .long("target")
                                .help("Fixed target amount, overrides the percentage"),
                        )
                        .arg(
                            Arg::new("clear-target")
                                .long("clear-target")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("target")
                                .help("Drop the fixed target, back to percentage"),
                        ),
                )
                .subcommand(
                    Command::new("add")
                        .about("Add an allocation row")
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("percent").long("percent").required(true))
                        .arg(Arg::new("balance").long("balance").required(true))
                        .arg(Arg::new("target").long("target")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove an allocation row")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Shared category registry")
                .subcommand(
                    Command::new("add").arg(Arg::new("name").long("name").required(true)),
                )
                .subcommand(Command::new("list"))
                .subcommand(
                    Command::new("rename")
                        .arg(Arg::new("from").long("from").required(true))
                        .arg(Arg::new("to").long("to").required(true)),
                )
                .subcommand(
                    Command::new("rm").arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("recap")
                .about("Monthly income/expense recap with chained balances")
                .arg(flag_json())
                .arg(flag_jsonl()),
        )
        .subcommand(
            Command::new("export")
                .about("Export data to files")
                .subcommand(
                    Command::new("transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("link")
                .about("Deep-link launch handling")
                .subcommand(
                    Command::new("handle")
                        .about("Apply a web+finance:// add-transaction link once")
                        .arg(Arg::new("url").required(true)),
                ),
        )
}
