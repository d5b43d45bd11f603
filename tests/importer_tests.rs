// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use spendscope::{cli, commands::importer};
use std::io::Write;
use tempfile::NamedTempFile;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE expenses(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            amount TEXT NOT NULL,
            category TEXT,
            expense_date TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )
    .unwrap();
    conn
}

fn run_import(conn: &mut Connection, path: &str) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["spendscope", "import", "expenses", "--path", path]);
    match matches.subcommand() {
        Some(("import", import_m)) => importer::handle(conn, import_m),
        _ => panic!("no import subcommand"),
    }
}

#[test]
fn importer_inserts_rows_and_keeps_empty_fields_null() {
    let mut conn = base_conn();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,title,amount,category,description\n2025-02-03,Groceries,42.10,Food,weekly run\n2025-02-04,Bus fare,2.75,,"
    )
    .unwrap();
    file.flush().unwrap();

    run_import(&mut conn, file.path().to_str().unwrap()).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM expenses", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 2);
    let (category, description): (Option<String>, Option<String>) = conn
        .query_row(
            "SELECT category, description FROM expenses WHERE title='Bus fare'",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert_eq!(category, None);
    assert_eq!(description, None);
}

#[test]
fn importer_trims_cli_path_argument() {
    let mut conn = base_conn();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,title,amount,category,description\n2025-02-03,Coffee,5.00,Food,"
    )
    .unwrap();
    file.flush().unwrap();

    let padded = format!("  {}  ", file.path().to_str().unwrap());
    run_import(&mut conn, &padded).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM expenses", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn importer_rolls_back_on_a_bad_row() {
    let mut conn = base_conn();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,title,amount,category,description\n2025-02-03,Good,10.00,,\n2025-02-04,Bad,-3.00,,"
    )
    .unwrap();
    file.flush().unwrap();

    assert!(run_import(&mut conn, file.path().to_str().unwrap()).is_err());
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM expenses", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn importer_rejects_unparsable_dates() {
    let mut conn = base_conn();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "date,title,amount,category,description\n02/03/2025,Coffee,5.00,,"
    )
    .unwrap();
    file.flush().unwrap();

    assert!(run_import(&mut conn, file.path().to_str().unwrap()).is_err());
}
