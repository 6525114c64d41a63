// Integration tests for the grupo and concepto repositories
// Covers the seeded default rows, alphabetical ordering, and the shared
// update builder semantics on the small entities.

use eventos_core::errors::EvErrorKind;
use eventos_core::model::{ConceptoDraft, ConceptoPatch, GrupoDraft, GrupoPatch};
use eventos_store::repo::{ConceptoRepo, GrupoRepo};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    eventos_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

#[test]
fn test_default_rows_seeded() {
    let conn = setup_test_db();

    let grupo = GrupoRepo::find_by_id(&conn, 1).unwrap().unwrap();
    assert_eq!(grupo.nombre, "Ceremonia Religiosa");

    let conceptos = ConceptoRepo::find_all(&conn).unwrap();
    let nombres: Vec<&str> = conceptos.iter().map(|c| c.nombre.as_str()).collect();
    assert_eq!(nombres, vec!["Alimentos", "Materiales", "Transporte"]);
    assert!(conceptos.iter().all(|c| c.subtotal == 0.0));
}

#[test]
fn test_grupo_crud() {
    let conn = setup_test_db();

    let id = GrupoRepo::create(
        &conn,
        &GrupoDraft {
            nombre: "Recepcion".to_string(),
        },
    )
    .unwrap();

    let patch = GrupoPatch {
        nombre: Some("Recepcion Civil".to_string()),
    };
    assert_eq!(GrupoRepo::update(&conn, id, &patch).unwrap(), 1);
    assert_eq!(
        GrupoRepo::find_by_id(&conn, id).unwrap().unwrap().nombre,
        "Recepcion Civil"
    );

    assert_eq!(GrupoRepo::count(&conn).unwrap(), 2);

    assert_eq!(GrupoRepo::delete(&conn, id).unwrap(), 1);
    assert!(GrupoRepo::find_by_id(&conn, id).unwrap().is_none());

    let err = GrupoRepo::delete(&conn, id).unwrap_err();
    assert_eq!(err.kind(), EvErrorKind::NotFound);
}

#[test]
fn test_grupo_empty_patch_is_invalid_update() {
    let conn = setup_test_db();

    let err = GrupoRepo::update(&conn, 1, &GrupoPatch::default()).unwrap_err();
    assert_eq!(err.kind(), EvErrorKind::InvalidUpdate);
}

#[test]
fn test_concepto_crud_and_ordering() {
    let conn = setup_test_db();

    ConceptoRepo::create(
        &conn,
        &ConceptoDraft {
            nombre: "Zapatos".to_string(),
            subtotal: 1200.0,
        },
    )
    .unwrap();
    let bebidas = ConceptoRepo::create(
        &conn,
        &ConceptoDraft {
            nombre: "Bebidas".to_string(),
            subtotal: 0.0,
        },
    )
    .unwrap();

    let nombres: Vec<String> = ConceptoRepo::find_all(&conn)
        .unwrap()
        .into_iter()
        .map(|c| c.nombre)
        .collect();
    assert_eq!(
        nombres,
        vec!["Alimentos", "Bebidas", "Materiales", "Transporte", "Zapatos"]
    );

    let patch = ConceptoPatch {
        subtotal: Some(Some(450.5)),
        ..Default::default()
    };
    assert_eq!(ConceptoRepo::update(&conn, bebidas, &patch).unwrap(), 1);
    let concepto = ConceptoRepo::find_by_id(&conn, bebidas).unwrap().unwrap();
    assert_eq!(concepto.subtotal, 450.5);
    assert_eq!(concepto.nombre, "Bebidas");

    assert_eq!(ConceptoRepo::count(&conn).unwrap(), 5);

    assert_eq!(ConceptoRepo::delete(&conn, bebidas).unwrap(), 1);
    let err = ConceptoRepo::delete(&conn, bebidas).unwrap_err();
    assert_eq!(err.kind(), EvErrorKind::NotFound);
}

#[test]
fn test_concepto_update_error_paths() {
    let conn = setup_test_db();

    let err = ConceptoRepo::update(&conn, 1, &ConceptoPatch::default()).unwrap_err();
    assert_eq!(err.kind(), EvErrorKind::InvalidUpdate);

    let patch = ConceptoPatch {
        nombre: Some("Otro".to_string()),
        ..Default::default()
    };
    let err = ConceptoRepo::update(&conn, 9999, &patch).unwrap_err();
    assert_eq!(err.kind(), EvErrorKind::NotFound);

    // Explicit null subtotal is forwarded and trips the NOT NULL constraint
    let patch = ConceptoPatch {
        subtotal: Some(None),
        ..Default::default()
    };
    let err = ConceptoRepo::update(&conn, 1, &patch).unwrap_err();
    assert_eq!(err.kind(), EvErrorKind::Constraint);
}
