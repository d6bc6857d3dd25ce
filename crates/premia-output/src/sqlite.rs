//! Relational sink backed by SQLite.
//!
//! One scoped connection per pipeline run: opened immediately before the
//! write and released when the sink is dropped, failure or not. Column
//! order and normalized names carry into the relational schema exactly.

use std::path::Path;

use rusqlite::Connection;
use rusqlite::types::Value;
use tracing::info;

use premia_model::{Column, ColumnData, ColumnType, PipelineError, Result, Table};

/// How to treat an existing table of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Drop and recreate (the default).
    #[default]
    Replace,
    /// Add rows to an existing table, creating it if absent.
    Append,
}

/// A scoped SQLite connection for one pipeline run.
pub struct SqliteSink {
    conn: Connection,
}

impl SqliteSink {
    /// Open (or create) the database file.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .map_err(|error| PipelineError::persistence("open database", error))?;
        Ok(Self { conn })
    }

    /// Write the table under `name`, replacing or appending per `mode`.
    ///
    /// All row inserts run inside a single transaction; a failure rolls the
    /// write back and surfaces as `Persistence`.
    pub fn write_table(&mut self, table: &Table, name: &str, mode: WriteMode) -> Result<()> {
        if table.width() == 0 {
            // A zero-column table has no relational schema to create.
            return Ok(());
        }
        let ddl = create_table_sql(table, name);
        match mode {
            WriteMode::Replace => {
                self.conn
                    .execute_batch(&format!("DROP TABLE IF EXISTS {};\n{ddl}", quote_ident(name)))
                    .map_err(|error| PipelineError::persistence("replace table", error))?;
            }
            WriteMode::Append => {
                self.conn
                    .execute_batch(&ddl)
                    .map_err(|error| PipelineError::persistence("create table", error))?;
            }
        }

        let tx = self
            .conn
            .transaction()
            .map_err(|error| PipelineError::persistence("begin transaction", error))?;
        {
            let insert = insert_sql(table, name);
            let mut statement = tx
                .prepare(&insert)
                .map_err(|error| PipelineError::persistence("prepare insert", error))?;
            for row in 0..table.height() {
                let params: Vec<Value> = table
                    .columns
                    .iter()
                    .map(|column| cell_value(column, row))
                    .collect();
                statement
                    .execute(rusqlite::params_from_iter(params))
                    .map_err(|error| PipelineError::persistence("insert row", error))?;
            }
        }
        tx.commit()
            .map_err(|error| PipelineError::persistence("commit", error))?;
        info!(rows = table.height(), table = name, ?mode, "wrote relational table");
        Ok(())
    }
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn sql_type(column_type: ColumnType) -> &'static str {
    match column_type {
        ColumnType::Integer => "INTEGER",
        ColumnType::Real => "REAL",
        ColumnType::Categorical => "TEXT",
    }
}

fn create_table_sql(table: &Table, name: &str) -> String {
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|column| format!("{} {}", quote_ident(&column.name), sql_type(column.column_type())))
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({});",
        quote_ident(name),
        columns.join(", ")
    )
}

fn insert_sql(table: &Table, name: &str) -> String {
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|column| quote_ident(&column.name))
        .collect();
    let placeholders: Vec<String> = (1..=table.width()).map(|i| format!("?{i}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_ident(name),
        columns.join(", "),
        placeholders.join(", ")
    )
}

fn cell_value(column: &Column, row: usize) -> Value {
    match &column.data {
        ColumnData::Integer(values) => values
            .get(row)
            .copied()
            .flatten()
            .map_or(Value::Null, Value::Integer),
        ColumnData::Real(values) => values
            .get(row)
            .copied()
            .flatten()
            .map_or(Value::Null, Value::Real),
        ColumnData::Categorical(values) => values
            .get(row)
            .cloned()
            .flatten()
            .map_or(Value::Null, Value::Text),
    }
}
