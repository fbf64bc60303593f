// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print as pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print as JSON lines")
            .action(ArgAction::SetTrue)
            .conflicts_with("json"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .short('m')
        .value_name("YYYY-MM")
        .help("Month to show (defaults to the current month)")
}

fn tx_fields(cmd: Command, required: bool) -> Command {
    cmd.arg(
        Arg::new("type")
            .long("type")
            .short('t')
            .value_name("income|expense")
            .required(required),
    )
    .arg(
        Arg::new("amount")
            .long("amount")
            .short('a')
            .allow_hyphen_values(true)
            .required(required),
    )
    .arg(
        Arg::new("category")
            .long("category")
            .short('c')
            .required(required),
    )
    .arg(
        Arg::new("date")
            .long("date")
            .short('d')
            .value_name("YYYY-MM-DD")
            .help("Defaults to today when adding"),
    )
    .arg(Arg::new("notes").long("notes").short('n'))
}

pub fn build_cli() -> Command {
    Command::new("spendbook")
        .about("Track income and expenses, with monthly summaries and category breakdowns")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("SQLite file to use instead of the platform data dir"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .global(true)
                .help("Reject categories that do not belong to the transaction type")
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("init").about("Create the data file (with sample data when empty)"))
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(tx_fields(Command::new("add").about("Record a transaction"), true))
                .subcommand(tx_fields(
                    Command::new("edit")
                        .about("Change fields of a transaction")
                        .arg(Arg::new("id").required(true)),
                    false,
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show one transaction")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(json_args(
                    Command::new("list")
                        .about("List a month's transactions, newest first")
                        .arg(month_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Monthly aggregates")
                .subcommand(json_args(
                    Command::new("summary")
                        .about("Income, expenses and balance")
                        .arg(month_arg()),
                ))
                .subcommand(json_args(
                    Command::new("categories")
                        .about("Expenses by category")
                        .arg(month_arg()),
                )),
        )
        .subcommand(
            Command::new("categories")
                .about("List the category tables")
                .arg(Arg::new("type").long("type").short('t').value_name("income|expense")),
        )
        .subcommand(
            Command::new("months").about("List selectable months"),
        )
        .subcommand(
            Command::new("export")
                .about("Write transactions to a file")
                .subcommand(
                    Command::new("transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .short('f')
                                .default_value("csv"),
                        )
                        .arg(Arg::new("out").long("out").short('o').required(true))
                        .arg(month_arg()),
                ),
        )
}
