//! Expense commands
//!
//! Usage: eventos expense <list|get|add|update|rm|count> [...]

use std::path::Path;

use clap::{Args, Subcommand};
use eventos_core::errors::Result;
use eventos_core::model::ExpenseFilter;
use eventos_core::validate;
use eventos_store::errors::not_found;
use eventos_store::repo::ExpenseRepo;
use serde_json::json;

use super::{open_db, page, parse_bag, print_json};

#[derive(Debug, Args)]
pub struct ExpenseArgs {
    #[command(subcommand)]
    pub command: ExpenseCommand,
}

#[derive(Debug, Subcommand)]
pub enum ExpenseCommand {
    /// List expenses with an optional concepto filter and pagination
    List(ListArgs),
    /// Show a single expense by id
    Get { id: i64 },
    /// Create an expense from a JSON field-bag
    Add {
        /// JSON object with the expense fields
        #[arg(long)]
        json: String,
    },
    /// Apply a partial update from a JSON field-bag
    Update {
        id: i64,
        /// JSON object with the fields to change (null clears a column)
        #[arg(long)]
        json: String,
    },
    /// Delete an expense by id
    Rm { id: i64 },
    /// Count expenses matching the filter
    Count(FilterArgs),
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Exact concepto id match
    #[arg(long = "id-concept")]
    pub id_concept: Option<i64>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
    /// Page size (1-100)
    #[arg(long)]
    pub limit: Option<u32>,
    /// Rows to skip
    #[arg(long)]
    pub offset: Option<u32>,
}

pub fn execute(db_path: &Path, args: ExpenseArgs) -> Result<()> {
    let conn = open_db(db_path)?;

    match args.command {
        ExpenseCommand::List(list) => {
            let filter = ExpenseFilter {
                id_concept: list.filter.id_concept,
            };
            let window = page(list.limit, list.offset)?;
            let expenses = ExpenseRepo::find_all(&conn, &filter, &window)?;
            let total = ExpenseRepo::count(&conn, &filter)?;
            let count = expenses.len();
            print_json(&json!({
                "success": true,
                "data": expenses,
                "meta": {
                    "total": total,
                    "count": count,
                    "limit": window.limit,
                    "offset": window.offset.unwrap_or(0),
                }
            }))
        }
        ExpenseCommand::Get { id } => {
            let expense =
                ExpenseRepo::find_by_id(&conn, id)?.ok_or_else(|| not_found("expense", id))?;
            print_json(&json!({ "success": true, "data": expense }))
        }
        ExpenseCommand::Add { json: payload } => {
            let draft = validate::expense_create(&parse_bag(&payload)?)?;
            let id = ExpenseRepo::create(&conn, &draft)?;
            let expense = ExpenseRepo::find_by_id(&conn, id)?;
            print_json(&json!({
                "success": true,
                "message": "Expense created successfully",
                "data": expense,
            }))
        }
        ExpenseCommand::Update { id, json: payload } => {
            let patch = validate::expense_update(&parse_bag(&payload)?)?;
            ExpenseRepo::update(&conn, id, &patch)?;
            let expense = ExpenseRepo::find_by_id(&conn, id)?;
            print_json(&json!({
                "success": true,
                "message": "Expense updated successfully",
                "data": expense,
            }))
        }
        ExpenseCommand::Rm { id } => {
            ExpenseRepo::delete(&conn, id)?;
            print_json(&json!({
                "success": true,
                "message": "Expense deleted successfully",
                "data": { "id": id, "deleted": true },
            }))
        }
        ExpenseCommand::Count(filter_args) => {
            let filter = ExpenseFilter {
                id_concept: filter_args.id_concept,
            };
            let total = ExpenseRepo::count(&conn, &filter)?;
            print_json(&json!({ "success": true, "data": { "total": total } }))
        }
    }
}
