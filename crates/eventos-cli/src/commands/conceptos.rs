//! Concepto commands
//!
//! Usage: eventos concepto <list|get|add|update|rm|count> [...]

use std::path::Path;

use clap::{Args, Subcommand};
use eventos_core::errors::Result;
use eventos_core::validate;
use eventos_store::errors::not_found;
use eventos_store::repo::ConceptoRepo;
use serde_json::json;

use super::{open_db, parse_bag, print_json};

#[derive(Debug, Args)]
pub struct ConceptoArgs {
    #[command(subcommand)]
    pub command: ConceptoCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConceptoCommand {
    /// List all conceptos, alphabetically
    List,
    /// Show a single concepto by id
    Get { id: i64 },
    /// Create a concepto from a JSON field-bag
    Add {
        /// JSON object with the concepto fields
        #[arg(long)]
        json: String,
    },
    /// Apply a partial update from a JSON field-bag
    Update {
        id: i64,
        #[arg(long)]
        json: String,
    },
    /// Delete a concepto by id
    Rm { id: i64 },
    /// Count conceptos
    Count,
}

pub fn execute(db_path: &Path, args: ConceptoArgs) -> Result<()> {
    let conn = open_db(db_path)?;

    match args.command {
        ConceptoCommand::List => {
            let conceptos = ConceptoRepo::find_all(&conn)?;
            let count = conceptos.len();
            print_json(&json!({
                "success": true,
                "data": conceptos,
                "meta": {
                    "total": count,
                    "count": count,
                    "limit": null,
                    "offset": 0,
                }
            }))
        }
        ConceptoCommand::Get { id } => {
            let concepto =
                ConceptoRepo::find_by_id(&conn, id)?.ok_or_else(|| not_found("concepto", id))?;
            print_json(&json!({ "success": true, "data": concepto }))
        }
        ConceptoCommand::Add { json: payload } => {
            let draft = validate::concepto_create(&parse_bag(&payload)?)?;
            let id = ConceptoRepo::create(&conn, &draft)?;
            let concepto = ConceptoRepo::find_by_id(&conn, id)?;
            print_json(&json!({
                "success": true,
                "message": "Concepto created successfully",
                "data": concepto,
            }))
        }
        ConceptoCommand::Update { id, json: payload } => {
            let patch = validate::concepto_update(&parse_bag(&payload)?)?;
            ConceptoRepo::update(&conn, id, &patch)?;
            let concepto = ConceptoRepo::find_by_id(&conn, id)?;
            print_json(&json!({
                "success": true,
                "message": "Concepto updated successfully",
                "data": concepto,
            }))
        }
        ConceptoCommand::Rm { id } => {
            ConceptoRepo::delete(&conn, id)?;
            print_json(&json!({
                "success": true,
                "message": "Concepto deleted successfully",
                "data": { "id": id, "deleted": true },
            }))
        }
        ConceptoCommand::Count => {
            let total = ConceptoRepo::count(&conn)?;
            print_json(&json!({ "success": true, "data": { "total": total } }))
        }
    }
}
