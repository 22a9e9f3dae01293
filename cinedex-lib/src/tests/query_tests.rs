use super::*;
use crate::error::ErrorKind;

#[test]
fn test_single_filter_resolves() {
    assert_eq!(MovieQuery::default().into_filter().unwrap(), MovieFilter::All);
    assert_eq!(
        MovieQuery::by_genre(3).into_filter().unwrap(),
        MovieFilter::Genre(3)
    );
    assert_eq!(
        MovieQuery::by_year(1999).into_filter().unwrap(),
        MovieFilter::ReleaseYear(1999)
    );
    assert_eq!(
        MovieQuery::by_actor(7).into_filter().unwrap(),
        MovieFilter::Actor(7)
    );
}

#[test]
fn test_combined_filters_rejected() {
    let combos = [
        MovieQuery { genre: Some(1), year: Some(1999), actor: None },
        MovieQuery { genre: Some(1), year: None, actor: Some(2) },
        MovieQuery { genre: None, year: Some(1999), actor: Some(2) },
        MovieQuery { genre: Some(1), year: Some(1999), actor: Some(2) },
    ];
    for query in combos {
        let err = query.into_filter().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("only one filter"));
    }
}

#[test]
fn test_page_request_bounds() {
    assert!(page_request(0, 1).is_ok());
    assert!(page_request(5, 100).is_ok());
    for (page, size) in [(0, 0), (0, 101), (-1, 10)] {
        assert_eq!(
            page_request(page, size).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }
}

#[test]
fn test_title_filter() {
    assert_eq!(
        title_filter(" matrix ").unwrap(),
        MovieFilter::TitleContains("matrix".to_string())
    );
    assert!(title_filter("  ").is_err());
}

#[test]
fn test_actor_name_filter() {
    assert_eq!(actor_name_filter(None), None);
    assert_eq!(actor_name_filter(Some("  ")), None);
    assert_eq!(actor_name_filter(Some(" keanu")), Some("keanu"));
}
