use std::collections::BTreeSet;

use chrono::NaiveDate;
use cinedex_catalog::types::*;
use cinedex_catalog::PageRequest;
use cinedex_db::*;
use rusqlite::Connection;

struct Fixture {
    conn: Connection,
    drama: i64,
    scifi: i64,
    reeves: i64,
    moss: i64,
    matrix: i64,
    reloaded: i64,
    heat: i64,
}

fn setup_db() -> Fixture {
    let conn = open_memory().unwrap();
    let drama = insert_genre(&conn, "Drama").unwrap();
    let scifi = insert_genre(&conn, "Sci-Fi").unwrap();
    let born = NaiveDate::from_ymd_opt(1964, 9, 2).unwrap();
    let reeves = insert_actor(&conn, &NewActor::new("Keanu Reeves", born)).unwrap();
    let moss = insert_actor(&conn, &NewActor::new("Carrie-Anne Moss", born)).unwrap();

    let matrix = insert_movie(&conn, "The Matrix", 1999, 136).unwrap();
    replace_movie_genres(&conn, matrix, &[scifi].into()).unwrap();
    replace_movie_actors(&conn, matrix, &[reeves, moss].into()).unwrap();

    let reloaded = insert_movie(&conn, "The Matrix Reloaded", 2003, 138).unwrap();
    replace_movie_genres(&conn, reloaded, &[scifi].into()).unwrap();
    replace_movie_actors(&conn, reloaded, &[reeves].into()).unwrap();

    let heat = insert_movie(&conn, "Heat", 1995, 170).unwrap();
    replace_movie_genres(&conn, heat, &[drama].into()).unwrap();

    Fixture {
        conn,
        drama,
        scifi,
        reeves,
        moss,
        matrix,
        reloaded,
        heat,
    }
}

fn ids(movies: &[Movie]) -> Vec<i64> {
    movies.iter().map(|m| m.id).collect()
}

#[test]
fn find_movie_loads_link_sets() {
    let f = setup_db();
    let movie = find_movie(&f.conn, f.matrix).unwrap().unwrap();
    assert_eq!(movie.genres, BTreeSet::from([f.scifi]));
    assert_eq!(movie.actors, BTreeSet::from([f.reeves, f.moss]));
    assert!(find_movie(&f.conn, 9999).unwrap().is_none());
}

#[test]
fn list_movies_by_each_filter() {
    let f = setup_db();
    let all = list_movies(&f.conn, &MovieFilter::All, None).unwrap();
    assert_eq!(ids(&all), vec![f.matrix, f.reloaded, f.heat]);

    let by_genre = list_movies(&f.conn, &MovieFilter::Genre(f.drama), None).unwrap();
    assert_eq!(ids(&by_genre), vec![f.heat]);

    let by_year = list_movies(&f.conn, &MovieFilter::ReleaseYear(2003), None).unwrap();
    assert_eq!(ids(&by_year), vec![f.reloaded]);

    let by_actor = list_movies(&f.conn, &MovieFilter::Actor(f.moss), None).unwrap();
    assert_eq!(ids(&by_actor), vec![f.matrix]);
}

#[test]
fn title_search_ignores_case() {
    let f = setup_db();
    let filter = MovieFilter::TitleContains("MATRIX".to_string());
    let found = list_movies(&f.conn, &filter, None).unwrap();
    assert_eq!(ids(&found), vec![f.matrix, f.reloaded]);
    assert_eq!(count_movies(&f.conn, &filter).unwrap(), 2);
}

#[test]
fn title_search_treats_wildcards_literally() {
    let f = setup_db();
    let found = list_movies(&f.conn, &MovieFilter::TitleContains("%".to_string()), None).unwrap();
    assert!(found.is_empty());
    let found = list_movies(&f.conn, &MovieFilter::TitleContains("H_at".to_string()), None).unwrap();
    assert!(found.is_empty());
}

#[test]
fn title_search_folds_non_ascii_case() {
    let f = setup_db();
    let amelie = insert_movie(&f.conn, "Amélie", 2001, 122).unwrap();

    let found = list_movies(&f.conn, &MovieFilter::TitleContains("AMÉLIE".to_string()), None).unwrap();
    assert_eq!(ids(&found), vec![amelie]);
    assert_eq!(
        count_movies(&f.conn, &MovieFilter::TitleContains("mélie".to_string())).unwrap(),
        1
    );
}

#[test]
fn renamed_title_is_searchable() {
    let f = setup_db();
    let mut heat = find_movie(&f.conn, f.heat).unwrap().unwrap();
    heat.title = "Hitze Über Los Angeles".to_string();
    update_movie(&f.conn, &heat).unwrap();

    let found = list_movies(&f.conn, &MovieFilter::TitleContains("über".to_string()), None).unwrap();
    assert_eq!(ids(&found), vec![f.heat]);
}

#[test]
fn actor_filter_folds_non_ascii_case() {
    let f = setup_db();
    let born = NaiveDate::from_ymd_opt(1969, 1, 1).unwrap();
    let id = insert_actor(&f.conn, &NewActor::new("Renée Zellweger", born)).unwrap();

    let found = list_actors(&f.conn, Some("RENÉE"), None).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, id);
    assert_eq!(count_actors(&f.conn, Some("renée")).unwrap(), 1);
}

#[test]
fn genre_lookup_folds_non_ascii_case() {
    let f = setup_db();
    let id = insert_genre(&f.conn, "Ciencia ficción").unwrap();
    assert_eq!(find_genre_by_name(&f.conn, "CIENCIA FICCIÓN").unwrap().unwrap().id, id);
    assert!(genre_name_exists(&f.conn, " ciencia FICCIÓN ").unwrap());
}

#[test]
fn pages_are_stable_and_ordered_by_id() {
    let f = setup_db();
    let first = PageRequest::new(0, 2).unwrap();
    let second = PageRequest::new(1, 2).unwrap();

    let page_one = list_movies(&f.conn, &MovieFilter::All, Some(first)).unwrap();
    let page_two = list_movies(&f.conn, &MovieFilter::All, Some(second)).unwrap();
    assert_eq!(ids(&page_one), vec![f.matrix, f.reloaded]);
    assert_eq!(ids(&page_two), vec![f.heat]);

    let again = list_movies(&f.conn, &MovieFilter::All, Some(first)).unwrap();
    assert_eq!(ids(&again), ids(&page_one));
}

#[test]
fn actor_listing_with_name_filter() {
    let f = setup_db();
    let all = list_actors(&f.conn, None, None).unwrap();
    assert_eq!(all.len(), 2);

    let found = list_actors(&f.conn, Some("reeves"), None).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, f.reeves);
    assert_eq!(count_actors(&f.conn, Some("reeves")).unwrap(), 1);
    assert_eq!(count_actors(&f.conn, None).unwrap(), 2);
}

#[test]
fn genre_listing_and_lookup_by_name() {
    let f = setup_db();
    let genres = list_genres(&f.conn, Some(PageRequest::new(0, 1).unwrap())).unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0].id, f.drama);
    assert_eq!(count_genres(&f.conn).unwrap(), 2);

    assert_eq!(find_genre_by_name(&f.conn, "sci-fi").unwrap().unwrap().id, f.scifi);
    assert!(genre_name_exists(&f.conn, "DRAMA").unwrap());
    assert!(!genre_name_exists(&f.conn, "Western").unwrap());
}

#[test]
fn derived_reads_follow_link_tables() {
    let f = setup_db();
    assert_eq!(ids(&movies_for_genre(&f.conn, f.scifi).unwrap()), vec![f.matrix, f.reloaded]);
    assert_eq!(ids(&movies_for_actor(&f.conn, f.moss).unwrap()), vec![f.matrix]);

    let actors: Vec<i64> = actors_for_movie(&f.conn, f.matrix)
        .unwrap()
        .iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(actors, vec![f.reeves, f.moss]);

    let genres = genres_for_movie(&f.conn, f.heat).unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0].name, "Drama");
}

#[test]
fn derived_reads_of_missing_anchor_are_empty() {
    let f = setup_db();
    assert!(movies_for_genre(&f.conn, 404).unwrap().is_empty());
    assert!(movies_for_actor(&f.conn, 404).unwrap().is_empty());
    assert!(actors_for_movie(&f.conn, 404).unwrap().is_empty());
    assert!(genres_for_movie(&f.conn, 404).unwrap().is_empty());
}

#[test]
fn count_links_per_entity_kind() {
    let f = setup_db();
    assert_eq!(count_links(&f.conn, EntityRef::Genre(f.scifi)).unwrap(), 2);
    assert_eq!(count_links(&f.conn, EntityRef::Actor(f.moss)).unwrap(), 1);
    assert_eq!(count_links(&f.conn, EntityRef::Movie(f.matrix)).unwrap(), 3);
    assert_eq!(count_links(&f.conn, EntityRef::Movie(f.heat)).unwrap(), 1);
}

#[test]
fn linked_movie_ids_snapshot() {
    let f = setup_db();
    assert_eq!(
        linked_movie_ids(&f.conn, EntityRef::Actor(f.reeves)).unwrap(),
        vec![f.matrix, f.reloaded]
    );
    assert!(linked_movie_ids(&f.conn, EntityRef::Movie(f.matrix)).unwrap().is_empty());
}

#[test]
fn entity_helpers() {
    let f = setup_db();
    assert!(entity_exists(&f.conn, EntityKind::Movie, f.heat).unwrap());
    assert!(!entity_exists(&f.conn, EntityKind::Actor, 404).unwrap());
    assert_eq!(
        entity_label(&f.conn, EntityRef::Movie(f.heat)).unwrap().as_deref(),
        Some("Heat")
    );
    assert_eq!(entity_label(&f.conn, EntityRef::Genre(404)).unwrap(), None);
}

#[test]
fn stats_count_everything() {
    let f = setup_db();
    let stats = catalog_stats(&f.conn).unwrap();
    assert_eq!(stats.movies, 3);
    assert_eq!(stats.genres, 2);
    assert_eq!(stats.actors, 2);
    assert_eq!(stats.genre_links, 3);
    assert_eq!(stats.actor_links, 3);
    assert_eq!(stats.min_year, Some(1995));
    assert_eq!(stats.max_year, Some(2003));
}
