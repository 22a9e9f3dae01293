use cinedex_db::open_memory;
use cinedex_db::schema::{create_schema, get_schema_version, CURRENT_VERSION};
use cinedex_db::{insert_genre, open_database, SchemaError};

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    let tables = [
        "schema_version",
        "movies",
        "genres",
        "actors",
        "movie_genres",
        "movie_actors",
    ];
    for table in tables {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn file_database_reopens_without_recreating() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    {
        let conn = open_database(&path).unwrap();
        insert_genre(&conn, "Drama").unwrap();
    }
    let conn = open_database(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM genres", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn newer_schema_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION + 1],
        )
        .unwrap();
    }
    let err = open_database(&path).unwrap_err();
    assert!(matches!(err, SchemaError::VersionMismatch { .. }));
}

#[test]
fn link_pairs_are_unique() {
    let conn = open_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO genres (name, name_key) VALUES ('Drama', 'DRAMA');
         INSERT INTO movies (title, title_key, release_year, duration) VALUES ('X', 'X', 2000, 90);
         INSERT INTO movie_genres (movie_id, genre_id) VALUES (1, 1);",
    )
    .unwrap();
    let dup = conn.execute(
        "INSERT INTO movie_genres (movie_id, genre_id) VALUES (1, 1)",
        [],
    );
    assert!(dup.is_err());
}

#[test]
fn genre_names_unique_ignoring_case() {
    let conn = open_memory().unwrap();
    insert_genre(&conn, "Action").unwrap();
    assert!(insert_genre(&conn, "ACTION").is_err());
}

#[test]
fn genre_name_index_folds_non_ascii_case() {
    let conn = open_memory().unwrap();
    insert_genre(&conn, "Ciencia ficción").unwrap();
    assert!(insert_genre(&conn, "CIENCIA FICCIÓN").is_err());
    assert!(insert_genre(&conn, " ciencia ficción ").is_err());
}
