use chrono::NaiveDate;
use cinedex_catalog::{default_seed, parse_seed};
use cinedex_lib::*;

fn service() -> CatalogService {
    CatalogService::open_memory().unwrap()
}

#[test]
fn default_seed_populates_empty_catalog() {
    let svc = service();
    let data = default_seed().unwrap();
    let stats = svc.seed(&data).unwrap();

    assert!(!stats.skipped);
    assert_eq!(stats.genres, 5);
    assert_eq!(stats.movies, data.movies.len());
    assert!(stats.actors >= data.actors.len());

    let catalog = svc.stats().unwrap();
    assert_eq!(catalog.movies as usize, data.movies.len());
    assert_eq!(catalog.genres, 5);
    assert!(catalog.genre_links > 0);
    assert!(catalog.actor_links > 0);
    assert!(catalog.max_year.unwrap() - catalog.min_year.unwrap() > 20);
}

#[test]
fn seeding_twice_is_skipped() {
    let svc = service();
    let data = default_seed().unwrap();
    svc.seed(&data).unwrap();
    let before = svc.stats().unwrap();

    let again = svc.seed(&data).unwrap();
    assert!(again.skipped);
    assert_eq!(svc.stats().unwrap(), before);
}

#[test]
fn seed_links_by_name() {
    let yaml = r#"
genres: [Drama, Crime]
actors:
  - name: Al Pacino
    birth_date: "1940-04-25"
movies:
  - title: Heat
    release_year: 1995
    duration: 170
    genres: [crime, Western]
    actors: [Al Pacino, Robert De Niro]
"#;
    let data = parse_seed(yaml, "test").unwrap();
    let svc = service();
    let stats = svc.seed(&data).unwrap();
    assert_eq!(stats.unknown_genres, 1);
    assert_eq!(stats.actors, 2);

    let movie = &svc.search_movies("heat", 0, 10).unwrap().items[0];
    let genres = svc.genres_for_movie(movie.id).unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0].name, "Crime");

    let actors = svc.actors_for_movie(movie.id).unwrap();
    assert_eq!(actors.len(), 2);
    let de_niro = actors.iter().find(|a| a.name == "Robert De Niro").unwrap();
    assert_eq!(de_niro.birth_date, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
}

#[test]
fn seed_reuses_existing_genres() {
    let svc = service();
    let existing = svc.create_genre("drama").unwrap();
    let data = parse_seed(
        "genres: [Drama]\nmovies:\n  - title: X\n    release_year: 2000\n    genres: [Drama]\n",
        "test",
    )
    .unwrap();

    let stats = svc.seed(&data).unwrap();
    assert_eq!(stats.genres, 0);
    let movie = &svc.list_movies(MovieQuery::default()).unwrap()[0];
    assert_eq!(movie.genres.iter().copied().collect::<Vec<_>>(), vec![existing.id]);
    assert_eq!(movie.duration, 120);
}

#[test]
fn invalid_seed_movie_rolls_back_everything() {
    let svc = service();
    let data = parse_seed(
        "genres: [Drama]\nmovies:\n  - title: Good\n    release_year: 2000\n  - title: Bad\n    release_year: 1500\n",
        "test",
    )
    .unwrap();

    let err = svc.seed(&data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    let stats = svc.stats().unwrap();
    assert_eq!(stats.movies, 0);
    assert_eq!(stats.genres, 0);
}
