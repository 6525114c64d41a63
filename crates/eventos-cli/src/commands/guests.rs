//! Guest commands
//!
//! Usage: eventos guest <list|get|add|update|rm|count> [...]

use std::path::Path;

use clap::{Args, Subcommand};
use eventos_core::errors::{EvError, Result};
use eventos_core::model::{Gender, GuestFilter};
use eventos_core::validate;
use eventos_store::errors::not_found;
use eventos_store::repo::GuestRepo;
use serde_json::json;

use super::{open_db, page, parse_bag, print_json};

#[derive(Debug, Args)]
pub struct GuestArgs {
    #[command(subcommand)]
    pub command: GuestCommand,
}

#[derive(Debug, Subcommand)]
pub enum GuestCommand {
    /// List guests with optional filters and pagination
    List(ListArgs),
    /// Show a single guest by id
    Get { id: i64 },
    /// Create a guest from a JSON field-bag
    Add {
        /// JSON object with the guest fields
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
    /// Delete a guest by id
    Rm { id: i64 },
    /// Count guests matching the filters
    Count(FilterArgs),
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Exact gender match
    #[arg(long)]
    pub gender: Option<String>,
    /// Substring family match
    #[arg(long)]
    pub family: Option<String>,
    /// Exact confirmation match
    #[arg(long)]
    pub confirmation: Option<bool>,
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

fn filter_from_args(args: &FilterArgs) -> Result<GuestFilter> {
    let gender = match &args.gender {
        None => None,
        Some(raw) => Some(Gender::parse(raw).ok_or_else(|| {
            EvError::validation(vec![
                "gender must be one of: male, female, other, prefer not to say".to_string(),
            ])
        })?),
    };

    Ok(GuestFilter {
        gender,
        family: args.family.clone(),
        confirmation: args.confirmation,
    })
}

pub fn execute(db_path: &Path, args: GuestArgs) -> Result<()> {
    let conn = open_db(db_path)?;

    match args.command {
        GuestCommand::List(list) => {
            let filter = filter_from_args(&list.filter)?;
            let window = page(list.limit, list.offset)?;
            let guests = GuestRepo::find_all(&conn, &filter, &window)?;
            let total = GuestRepo::count(&conn, &filter)?;
            let count = guests.len();
            print_json(&json!({
                "success": true,
                "data": guests,
                "meta": {
                    "total": total,
                    "count": count,
                    "limit": window.limit,
                    "offset": window.offset.unwrap_or(0),
                }
            }))
        }
        GuestCommand::Get { id } => {
            let guest = GuestRepo::find_by_id(&conn, id)?.ok_or_else(|| not_found("guest", id))?;
            print_json(&json!({ "success": true, "data": guest }))
        }
        GuestCommand::Add { json: payload } => {
            let draft = validate::guest_create(&parse_bag(&payload)?)?;
            let id = GuestRepo::create(&conn, &draft)?;
            let guest = GuestRepo::find_by_id(&conn, id)?;
            print_json(&json!({
                "success": true,
                "message": "Guest created successfully",
                "data": guest,
            }))
        }
        GuestCommand::Update { id, json: payload } => {
            let patch = validate::guest_update(&parse_bag(&payload)?)?;
            GuestRepo::update(&conn, id, &patch)?;
            let guest = GuestRepo::find_by_id(&conn, id)?;
            print_json(&json!({
                "success": true,
                "message": "Guest updated successfully",
                "data": guest,
            }))
        }
        GuestCommand::Rm { id } => {
            GuestRepo::delete(&conn, id)?;
            print_json(&json!({
                "success": true,
                "message": "Guest deleted successfully",
                "data": { "id": id, "deleted": true },
            }))
        }
        GuestCommand::Count(filter_args) => {
            let filter = filter_from_args(&filter_args)?;
            let total = GuestRepo::count(&conn, &filter)?;
            print_json(&json!({ "success": true, "data": { "total": total } }))
        }
    }
}
