// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print output as pretty JSON")
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .help("Print output as JSON lines")
}

fn report_cmd(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("as-of")
                .long("as-of")
                .value_name("YYYY-MM-DD")
                .help("Compute as of this date instead of today"),
        )
        .arg(json_flag())
        .arg(jsonl_flag())
}

pub fn build_cli() -> Command {
    Command::new("spendscope")
        .version(crate_version!())
        .about("Expense tracking and spending analytics")
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("expense")
                .about("Record and inspect expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .required(true),
                        )
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List expenses, newest first")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_name("YYYY-MM")
                                .help("Only expenses in this month"),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("rm").about("Delete an expense").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Spending reports over the recorded expenses")
                .subcommand(report_cmd("daily", "Daily spending over the last 30 days"))
                .subcommand(report_cmd("weekly", "Weekly spending over the last 8 weeks"))
                .subcommand(report_cmd(
                    "monthly",
                    "Monthly spending over the last 6 months",
                ))
                .subcommand(report_cmd("categories", "Spending share per category"))
                .subcommand(report_cmd(
                    "insights",
                    "Period-over-period spending insights",
                ))
                .subcommand(
                    report_cmd("summary", "Full spending report, all views at once").arg(
                        Arg::new("budget-ms")
                            .long("budget-ms")
                            .value_parser(value_parser!(u64))
                            .help("Fail if the report takes longer than this many milliseconds"),
                    ),
                ),
        )
        .subcommand(
            Command::new("import").about("Import records from CSV").subcommand(
                Command::new("expenses")
                    .about("Import expenses from a CSV file (date,title,amount,category,description)")
                    .arg(Arg::new("path").long("path").required(true)),
            ),
        )
        .subcommand(
            Command::new("export").about("Export records").subcommand(
                Command::new("expenses")
                    .about("Export all expenses")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(
            Command::new("currency")
                .about("Display currency for amounts")
                .subcommand(Command::new("show").about("Show the display currency"))
                .subcommand(
                    Command::new("set")
                        .about("Set the display currency")
                        .arg(Arg::new("code").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check recorded data for quality issues"))
}
