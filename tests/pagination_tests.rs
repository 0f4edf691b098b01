use leadgen::error::QueryError;
use leadgen::pagination::{ensure_page_exists, total_pages, Page, PageRequest};

#[test]
fn test_total_pages_is_ceiling() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(1, 10), 1);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(99, 4), 25);
    assert_eq!(total_pages(100, 4), 25);

    for total in 0..50u64 {
        for size in 1..12u64 {
            let expected = (total as f64 / size as f64).ceil() as u64;
            assert_eq!(total_pages(total, size), expected, "total={} size={}", total, size);
        }
    }
}

#[test]
fn test_page_request_defaults_and_clamping() {
    let request = PageRequest::new(None, None, 10, 100).unwrap();
    assert_eq!(request, PageRequest { page: 1, page_size: 10 });

    // above the cap is clamped, not rejected
    let request = PageRequest::new(Some(2), Some(500), 10, 100).unwrap();
    assert_eq!(request.page_size, 100);

    // zero falls back to the default
    let request = PageRequest::new(Some(1), Some(0), 4, 100).unwrap();
    assert_eq!(request.page_size, 4);

    let request = PageRequest::new(Some(3), Some(25), 10, 100).unwrap();
    assert_eq!(request.offset(), Some(50));
}

#[test]
fn test_page_request_offset_never_overflows() {
    let request = PageRequest::new(Some(u64::MAX), Some(100), 10, 100).unwrap();
    assert_eq!(request.offset(), None);

    // fits u64 but not a signed SQL offset
    let request = PageRequest::new(Some(i64::MAX as u64 + 2), Some(1), 10, 100).unwrap();
    assert_eq!(request.offset(), None);

    let request = PageRequest::new(Some(i64::MAX as u64 + 1), Some(1), 10, 100).unwrap();
    assert_eq!(request.offset(), Some(i64::MAX as u64));
}

#[test]
fn test_page_request_rejects_page_zero() {
    let err = PageRequest::new(Some(0), None, 10, 100).unwrap_err();
    assert!(matches!(err, QueryError::PageOutOfRange(0)));
}

#[test]
fn test_ensure_page_exists() {
    assert!(ensure_page_exists(1, 3).is_ok());
    assert!(ensure_page_exists(3, 3).is_ok());
    // no rows: every page is an empty page, not an error
    assert!(ensure_page_exists(7, 0).is_ok());

    let err = ensure_page_exists(4, 3).unwrap_err();
    assert!(matches!(err, QueryError::InvalidPage { page: 4, total_pages: 3 }));
    assert_eq!(err.to_string(), "Page 4 does not exist. Total pages: 3");
}

#[test]
fn test_page_map_keeps_metadata() {
    let page = Page {
        items: vec![1, 2, 3],
        total: 13,
        total_pages: 5,
        page: 5,
        page_size: 3,
    };
    let mapped = page.map(|n| n * 10);
    assert_eq!(mapped.items, vec![10, 20, 30]);
    assert_eq!((mapped.total, mapped.total_pages, mapped.page, mapped.page_size), (13, 5, 5, 3));
}
