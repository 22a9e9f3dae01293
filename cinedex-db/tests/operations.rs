use std::collections::BTreeSet;

use chrono::NaiveDate;
use cinedex_catalog::types::*;
use cinedex_db::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn set(ids: &[i64]) -> BTreeSet<i64> {
    ids.iter().copied().collect()
}

#[test]
fn genre_insert_and_rename() {
    let conn = open_memory().unwrap();
    let id = insert_genre(&conn, "Drama").unwrap();

    rename_genre(&conn, id, "Melodrama").unwrap();
    let genre = find_genre(&conn, id).unwrap().unwrap();
    assert_eq!(genre.name, "Melodrama");
}

#[test]
fn rename_missing_genre_is_not_found() {
    let conn = open_memory().unwrap();
    let err = rename_genre(&conn, 42, "Nope").unwrap_err();
    assert!(matches!(
        err,
        OperationError::NotFound {
            kind: EntityKind::Genre,
            id: 42
        }
    ));
}

#[test]
fn actor_insert_and_update() {
    let conn = open_memory().unwrap();
    let id = insert_actor(&conn, &NewActor::new("Tom Hanks", date(1956, 7, 9))).unwrap();

    let mut actor = find_actor(&conn, id).unwrap().unwrap();
    assert_eq!(actor.birth_date, date(1956, 7, 9));

    actor.name = "Thomas Hanks".to_string();
    update_actor(&conn, &actor).unwrap();
    assert_eq!(find_actor(&conn, id).unwrap().unwrap().name, "Thomas Hanks");
}

#[test]
fn movie_insert_and_update_scalars() {
    let conn = open_memory().unwrap();
    let id = insert_movie(&conn, "Heat", 1995, 170).unwrap();

    let mut movie = find_movie(&conn, id).unwrap().unwrap();
    assert_eq!(movie.title, "Heat");
    assert!(movie.genres.is_empty());
    assert!(movie.actors.is_empty());

    movie.duration = 171;
    update_movie(&conn, &movie).unwrap();
    assert_eq!(find_movie(&conn, id).unwrap().unwrap().duration, 171);
}

#[test]
fn replace_links_is_full_replace() {
    let conn = open_memory().unwrap();
    let drama = insert_genre(&conn, "Drama").unwrap();
    let crime = insert_genre(&conn, "Crime").unwrap();
    let thriller = insert_genre(&conn, "Thriller").unwrap();
    let movie = insert_movie(&conn, "Heat", 1995, 170).unwrap();

    replace_movie_genres(&conn, movie, &set(&[drama, crime])).unwrap();
    replace_movie_genres(&conn, movie, &set(&[crime, thriller])).unwrap();

    let found = find_movie(&conn, movie).unwrap().unwrap();
    assert_eq!(found.genres, set(&[crime, thriller]));

    replace_movie_genres(&conn, movie, &BTreeSet::new()).unwrap();
    assert!(find_movie(&conn, movie).unwrap().unwrap().genres.is_empty());
}

#[test]
fn replace_links_rejects_unknown_ids() {
    let conn = open_memory().unwrap();
    let movie = insert_movie(&conn, "Heat", 1995, 170).unwrap();
    let result = replace_movie_actors(&conn, movie, &set(&[999]));
    assert!(result.is_err(), "foreign key should reject a missing actor");
}

#[test]
fn delete_entity_removes_row() {
    let conn = open_memory().unwrap();
    let id = insert_genre(&conn, "Drama").unwrap();
    delete_entity(&conn, EntityKind::Genre, id).unwrap();
    assert!(find_genre(&conn, id).unwrap().is_none());

    let err = delete_entity(&conn, EntityKind::Genre, id).unwrap_err();
    assert!(matches!(err, OperationError::NotFound { .. }));
}

#[test]
fn delete_linked_row_is_blocked_by_foreign_key() {
    let conn = open_memory().unwrap();
    let genre = insert_genre(&conn, "Drama").unwrap();
    let movie = insert_movie(&conn, "Heat", 1995, 170).unwrap();
    replace_movie_genres(&conn, movie, &set(&[genre])).unwrap();

    assert!(delete_entity(&conn, EntityKind::Genre, genre).is_err());
    assert!(find_genre(&conn, genre).unwrap().is_some());
}

#[test]
fn identities_are_not_reused() {
    let conn = open_memory().unwrap();
    let first = insert_genre(&conn, "Drama").unwrap();
    delete_entity(&conn, EntityKind::Genre, first).unwrap();
    let second = insert_genre(&conn, "Comedy").unwrap();
    assert!(second > first);
}
