//! Grupo commands
//!
//! Usage: eventos grupo <list|get|add|update|rm|count> [...]

use std::path::Path;

use clap::{Args, Subcommand};
use eventos_core::errors::Result;
use eventos_core::validate;
use eventos_store::errors::not_found;
use eventos_store::repo::GrupoRepo;
use serde_json::json;

use super::{open_db, parse_bag, print_json};

#[derive(Debug, Args)]
pub struct GrupoArgs {
    #[command(subcommand)]
    pub command: GrupoCommand,
}

#[derive(Debug, Subcommand)]
pub enum GrupoCommand {
    /// List all grupos, alphabetically
    List,
    /// Show a single grupo by id
    Get { id: i64 },
    /// Create a grupo from a JSON field-bag
    Add {
        /// JSON object with the grupo fields
        #[arg(long)]
        json: String,
    },
    /// Apply a partial update from a JSON field-bag
    Update {
        id: i64,
        #[arg(long)]
        json: String,
    },
    /// Delete a grupo by id
    Rm { id: i64 },
    /// Count grupos
    Count,
}

pub fn execute(db_path: &Path, args: GrupoArgs) -> Result<()> {
    let conn = open_db(db_path)?;

    match args.command {
        GrupoCommand::List => {
            let grupos = GrupoRepo::find_all(&conn)?;
            let count = grupos.len();
            print_json(&json!({
                "success": true,
                "data": grupos,
                "meta": {
                    "total": count,
                    "count": count,
                    "limit": null,
                    "offset": 0,
                }
            }))
        }
        GrupoCommand::Get { id } => {
            let grupo = GrupoRepo::find_by_id(&conn, id)?.ok_or_else(|| not_found("grupo", id))?;
            print_json(&json!({ "success": true, "data": grupo }))
        }
        GrupoCommand::Add { json: payload } => {
            let draft = validate::grupo_create(&parse_bag(&payload)?)?;
            let id = GrupoRepo::create(&conn, &draft)?;
            let grupo = GrupoRepo::find_by_id(&conn, id)?;
            print_json(&json!({
                "success": true,
                "message": "Grupo created successfully",
                "data": grupo,
            }))
        }
        GrupoCommand::Update { id, json: payload } => {
            let patch = validate::grupo_update(&parse_bag(&payload)?)?;
            GrupoRepo::update(&conn, id, &patch)?;
            let grupo = GrupoRepo::find_by_id(&conn, id)?;
            print_json(&json!({
                "success": true,
                "message": "Grupo updated successfully",
                "data": grupo,
            }))
        }
        GrupoCommand::Rm { id } => {
            GrupoRepo::delete(&conn, id)?;
            print_json(&json!({
                "success": true,
                "message": "Grupo deleted successfully",
                "data": { "id": id, "deleted": true },
            }))
        }
        GrupoCommand::Count => {
            let total = GrupoRepo::count(&conn)?;
            print_json(&json!({ "success": true, "data": { "total": total } }))
        }
    }
}
