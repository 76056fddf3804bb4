//! Integration tests for the catalog query engine
//!
//! These tests verify that:
//! - Filtering is idempotent, monotonic, and the identity without constraints
//! - Sorting is stable in both directions
//! - Pagination reconstructs the filtered set exactly
//! - The storefront scenarios produce the expected listings

mod common;

use catalog::core::engine::{apply_filters, apply_sort, paginate};
use catalog::prelude::*;
use common::*;

fn queries() -> Vec<QueryState> {
    let config = CatalogConfig::default();
    let bucket = |key: &str| config.price_bucket(key).map(|b| b.range);

    vec![
        QueryState::default(),
        QueryState::default().with(QueryAction::SetSearch("table".into())),
        QueryState::default().with(QueryAction::SetCategory(Some("Office".into()))),
        QueryState::default().with(QueryAction::SetRange(bucket("50000-150000"))),
        QueryState::default().with(QueryAction::SetLocation("kig".into())),
        QueryState::default()
            .with(QueryAction::SetSearch("o".into()))
            .with(QueryAction::SetRange(bucket("150000+")))
            .with(QueryAction::SetLocation("Huye".into())),
    ]
}

// =============================================================================
// Filter Properties
// =============================================================================

mod filter_properties {
    use super::*;

    #[test]
    fn test_filter_is_idempotent() {
        let products = storefront();
        for query in queries() {
            let once = apply_filters(&products, &query);
            let twice = apply_filters(&once, &query);
            assert_eq!(once, twice, "query {:?}", query);
        }
    }

    #[test]
    fn test_extra_predicate_never_grows_result() {
        let products = storefront();
        let narrowing = [
            QueryAction::SetSearch("e".into()),
            QueryAction::SetCategory(Some("Living Room".into())),
            QueryAction::SetRange(Some(NumericRange::below(100_000.0))),
            QueryAction::SetLocation("kigali".into()),
        ];

        for base in queries() {
            let base_len = apply_filters(&products, &base).len();
            for action in &narrowing {
                let mut stricter = base.clone();
                let already_set = match action {
                    QueryAction::SetSearch(_) => !base.search.is_empty(),
                    QueryAction::SetCategory(_) => base.category.is_some(),
                    QueryAction::SetRange(_) => base.range.is_some(),
                    QueryAction::SetLocation(_) => !base.location.is_empty(),
                    _ => false,
                };
                if already_set {
                    continue;
                }
                stricter.apply(action.clone());
                assert!(apply_filters(&products, &stricter).len() <= base_len);
            }
        }
    }

    #[test]
    fn test_empty_query_is_identity() {
        let products = storefront();
        assert_eq!(apply_filters(&products, &QueryState::default()), products);
    }

    #[test]
    fn test_all_sentinel_is_no_constraint() {
        let products = storefront();
        let query = QueryState::default()
            .with(QueryAction::SetCategory(Some("All".into())))
            .with(QueryAction::SetStatus(Some(String::new())));
        assert!(query.is_unconstrained());
        assert_eq!(apply_filters(&products, &query), products);
    }

    #[test]
    fn test_results_keep_source_order() {
        let products = storefront();
        let query = QueryState::default().with(QueryAction::SetCategory(Some("Office".into())));
        assert_eq!(ids(&apply_filters(&products, &query)), vec![3, 6, 8]);
    }

    #[test]
    fn test_record_without_field_never_matches() {
        // No shipping address on the fixtures, so a location filter drops all
        let query = QueryState::default().with(QueryAction::SetLocation("kigali".into()));
        assert!(apply_filters(&orders(), &query).is_empty());
    }
}

// =============================================================================
// Sort Properties
// =============================================================================

mod sort_properties {
    use super::*;

    #[test]
    fn test_sort_is_stable_ascending() {
        let sorted = apply_sort(storefront(), Some(&SortSpec::asc("category")));
        let office: Vec<u32> = sorted
            .iter()
            .filter(|p| p.category == "Office")
            .map(|p| p.id)
            .collect();
        assert_eq!(office, vec![3, 6, 8]);
    }

    #[test]
    fn test_sort_is_stable_descending() {
        let sorted = apply_sort(storefront(), Some(&SortSpec::desc("location")));
        let kigali: Vec<u32> = sorted
            .iter()
            .filter(|p| p.location == "Kigali")
            .map(|p| p.id)
            .collect();
        assert_eq!(kigali, vec![1, 2, 4, 8, 10, 12]);
    }

    #[test]
    fn test_sort_by_price() {
        let sorted = apply_sort(storefront(), Some(&SortSpec::desc("price")));
        assert_eq!(sorted.first().map(|p| p.id), Some(5));
        assert_eq!(sorted.last().map(|p| p.id), Some(11));
    }

    #[test]
    fn test_sort_orders_by_date() {
        let sorted = apply_sort(orders(), Some(&SortSpec::asc("date")));
        assert_eq!(sorted[0].id, "#HL-2837");
        assert_eq!(sorted[4].id, "#HL-2841");
    }

    #[test]
    fn test_unknown_field_keeps_order() {
        let sorted = apply_sort(storefront(), Some(&SortSpec::asc("rating")));
        assert_eq!(sorted, storefront());
    }

    #[test]
    fn test_toggle_sort_direction() {
        let state = QueryState::default()
            .with(QueryAction::ToggleSort("amount".into()))
            .with(QueryAction::ToggleSort("amount".into()));
        assert_eq!(state.sort, Some(SortSpec::desc("amount")));

        let state = state.with(QueryAction::ToggleSort("date".into()));
        assert_eq!(state.sort, Some(SortSpec::asc("date")));
    }
}

// =============================================================================
// Pagination Properties
// =============================================================================

mod pagination_properties {
    use super::*;

    #[test]
    fn test_pages_reconstruct_the_set() {
        let products = storefront();
        for size in 1..=13 {
            let first = paginate(&products, 1, size);
            let mut rebuilt = first.items;
            for page in 2..=first.total_pages {
                rebuilt.extend(paginate(&products, page, size).items);
            }
            assert_eq!(rebuilt, products, "page size {}", size);
        }
    }

    #[test]
    fn test_every_filter_change_resets_page() {
        let filters = [
            QueryAction::SetSearch("desk".into()),
            QueryAction::SetCategory(Some("Office".into())),
            QueryAction::SetStatus(Some("pending".into())),
            QueryAction::SetRange(None),
            QueryAction::SetLocation("Huye".into()),
            QueryAction::SetPageSize(10),
        ];
        for action in filters {
            let state = QueryState::default()
                .with(QueryAction::SetPage(3))
                .with(action.clone());
            assert_eq!(state.page, 1, "{:?}", action);
        }
    }

    #[test]
    fn test_oversized_page_is_clamped() {
        let state = QueryState::default().with(QueryAction::SetPage(40));
        let page = run_query(&storefront(), &state);
        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.data.len(), 2);
        assert!(!page.pagination.has_next);
    }

    #[test]
    fn test_empty_result_reports_one_page() {
        let state = QueryState::default().with(QueryAction::SetSearch("piano".into()));
        let page = run_query(&storefront(), &state);
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.pagination.page, 1);
    }
}

// =============================================================================
// Storefront Scenarios
// =============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn test_search_sofa() {
        let products = vec![
            Product::new(1, "Modern Sofa", 899.99, "Living Room", "Kigali"),
            Product::new(2, "Oak Table", 1299.5, "Dining", "Kigali"),
        ];
        let state = QueryState::default().with(QueryAction::SetSearch("sofa".into()));
        let result = apply_filters(&products, &state);
        assert_eq!(result, vec![products[0].clone()]);
    }

    #[test]
    fn test_lowest_price_bucket() {
        let products = vec![
            Product::new(1, "Coffee Table", 120_000.0, "Living Room", "Kigali"),
            Product::new(2, "Office Chair", 75_000.0, "Office", "Musanze"),
            Product::new(3, "Bar Stool", 45_000.0, "Dining", "Rubavu"),
        ];
        let params = QueryParams {
            price: Some("0-50000".into()),
            ..Default::default()
        };
        let state = params.to_state::<Product>(&CatalogConfig::default()).unwrap();
        let prices: Vec<f64> = apply_filters(&products, &state).iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![45_000.0]);
    }

    #[test]
    fn test_bucket_edges() {
        let config = CatalogConfig::default();
        let middle = config.price_bucket("50000-150000").unwrap().range;
        let low = config.price_bucket("0-50000").unwrap().range;
        let high = config.price_bucket("150000+").unwrap().range;

        assert!(!low.contains(50_000.0));
        assert!(middle.contains(50_000.0));
        assert!(middle.contains(150_000.0));
        assert!(!high.contains(150_000.0));
    }

    #[test]
    fn test_twelve_records_three_pages() {
        let products = storefront();
        assert_eq!(products.len(), 12);

        let state = QueryState::new(5).with(QueryAction::SetPage(3));
        let page = run_query(&products, &state);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.data.len(), 2);
        assert_eq!(ids(&page.data), vec![11, 12]);
    }

    #[test]
    fn test_orders_search_by_id_or_customer() {
        let by_id = QueryState::default().with(QueryAction::SetSearch("2839".into()));
        assert_eq!(ids(&apply_filters(&orders(), &by_id)), vec!["#HL-2839".to_string()]);

        let by_customer = QueryState::default().with(QueryAction::SetSearch("smith".into()));
        assert_eq!(ids(&apply_filters(&orders(), &by_customer)), vec!["#HL-2840".to_string()]);
    }

    #[test]
    fn test_orders_status_filter() {
        let state = QueryState::default().with(QueryAction::SetStatus(Some("Shipped".into())));
        assert_eq!(apply_filters(&orders(), &state).len(), 2);
    }

    #[test]
    fn test_users_search_by_type() {
        let state = QueryState::default().with(QueryAction::SetSearch("buyer".into()));
        assert_eq!(apply_filters(&users(), &state).len(), 2);
    }
}
