use cinedex_catalog::*;

#[test]
fn page_bounds_are_enforced() {
    assert_eq!(PageRequest::new(-1, 10), Err(PageError::NegativePage(-1)));
    assert_eq!(PageRequest::new(0, 0), Err(PageError::SizeOutOfRange(0)));
    assert_eq!(PageRequest::new(0, 101), Err(PageError::SizeOutOfRange(101)));
    assert!(PageRequest::new(0, 1).is_ok());
    assert!(PageRequest::new(7, MAX_PAGE_SIZE).is_ok());
}

#[test]
fn oversized_page_number_is_not_reported_as_negative() {
    let err = PageRequest::new(5_000_000_000, 10).unwrap_err();
    assert_eq!(err, PageError::PageTooLarge(5_000_000_000));
    assert!(err.to_string().contains("at most 4294967295"));
    assert!(PageRequest::new(i64::from(u32::MAX), 10).is_ok());
}

#[test]
fn offset_is_page_times_size() {
    let req = PageRequest::new(3, 25).unwrap();
    assert_eq!(req.offset(), 75);
}

#[test]
fn page_totals_round_up() {
    let req = PageRequest::new(0, 10).unwrap();
    let page = Page::new(vec![1, 2, 3], req, 21);
    assert_eq!(page.total_pages, 3);
    assert!(!page.is_last());

    let empty: Page<i32> = Page::new(vec![], req, 0);
    assert_eq!(empty.total_pages, 0);
    assert!(empty.is_last());
}

#[test]
fn map_keeps_paging_metadata() {
    let req = PageRequest::new(1, 2).unwrap();
    let page = Page::new(vec![1, 2], req, 5).map(|n| n * 10);
    assert_eq!(page.items, vec![10, 20]);
    assert_eq!(page.page_number, 1);
    assert_eq!(page.total_pages, 3);
}
