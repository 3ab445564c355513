use watchlist_be::pagination::{PageParams, Paginated};

fn params(page: Option<u32>, page_size: Option<u32>) -> PageParams {
    PageParams { page, page_size }
}

#[test]
fn test_defaults() {
    let p = params(None, None);
    assert_eq!(p.page(), 1);
    assert_eq!(p.limit(), 4);
    assert_eq!(p.offset(), 0);
}

#[test]
fn test_page_size_is_capped_at_twenty() {
    assert_eq!(params(None, Some(20)).limit(), 20);
    assert_eq!(params(None, Some(21)).limit(), 20);
    assert_eq!(params(None, Some(1000)).limit(), 20);
    assert_eq!(params(None, Some(0)).limit(), 1);
}

#[test]
fn test_offset_follows_page_and_size() {
    assert_eq!(params(Some(3), None).offset(), 8);
    assert_eq!(params(Some(2), Some(10)).offset(), 10);
    // page 0 is treated as page 1
    assert_eq!(params(Some(0), None).offset(), 0);
}

#[test]
fn test_envelope_edges() {
    // 10 items, default size 4: pages are 4/4/2
    let first: Paginated<i32> = Paginated::new(10, &params(Some(1), None), vec![1, 2, 3, 4]);
    assert_eq!(first.next, Some(2));
    assert_eq!(first.previous, None);

    let middle: Paginated<i32> = Paginated::new(10, &params(Some(2), None), vec![5, 6, 7, 8]);
    assert_eq!(middle.next, Some(3));
    assert_eq!(middle.previous, Some(1));

    let last: Paginated<i32> = Paginated::new(10, &params(Some(3), None), vec![9, 10]);
    assert_eq!(last.next, None);
    assert_eq!(last.previous, Some(2));
}

#[test]
fn test_envelope_single_page() {
    let only: Paginated<i32> = Paginated::new(3, &params(None, None), vec![1, 2, 3]);
    assert_eq!(only.count, 3);
    assert_eq!(only.next, None);
    assert_eq!(only.previous, None);
}
