//! The catalog query engine: filter, sort and paginate record collections
//!
//! Every function here is pure. Applying the same [`QueryState`] to the same
//! collection always yields the same ordered result, and the result is always
//! a subset of the input.
//!
//! ```rust,ignore
//! let state = QueryState::default()
//!     .with(QueryAction::SetSearch("sofa".into()))
//!     .with(QueryAction::ToggleSort("price".into()));
//!
//! let page = run_query(&products, &state);
//! assert!(page.data.len() <= state.page_size);
//! ```

use crate::core::query::{
    PaginationMeta, QueryPage, QueryState, SortDirection, SortSpec, total_pages,
};
use crate::core::record::{Filterable, Record};
use std::cmp::Ordering;

/// One page of a collection plus the total page count
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// Keep the records matching every active predicate of `state`
///
/// Input order is preserved. Sorting and pagination fields of the state are
/// ignored.
pub fn apply_filters<T>(records: &[T], state: &QueryState) -> Vec<T>
where
    T: Filterable + Clone,
{
    let predicates = state.predicates();

    records
        .iter()
        .filter(|record| predicates.iter().all(|p| p.matches(*record)))
        .cloned()
        .collect()
}

/// Order records by a field's natural ordering
///
/// `None` returns the input unchanged. The sort is stable in both directions:
/// descending reverses the comparator, so records with equal keys keep their
/// original relative order.
pub fn apply_sort<T: Record>(mut records: Vec<T>, sort: Option<&SortSpec>) -> Vec<T> {
    let Some(sort) = sort else {
        return records;
    };

    records.sort_by(|a, b| {
        let ordering = compare_field(a, b, &sort.field);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    records
}

fn compare_field<T: Record>(a: &T, b: &T, field: &str) -> Ordering {
    match (a.field_value(field), b.field_value(field)) {
        (Some(x), Some(y)) => x.natural_cmp(&y),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

/// Slice out one page
///
/// `page` is 1-based and is NOT clamped here: a page outside
/// `[1, total_pages]` yields an empty slice. A page size of 0 counts as 1.
pub fn paginate<T: Clone>(records: &[T], page: usize, page_size: usize) -> PageSlice<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(records.len(), page_size);

    let items = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(page_size).min(records.len());
            let end = start.saturating_add(page_size).min(records.len());
            records[start..end].to_vec()
        }
        None => Vec::new(),
    };

    PageSlice { items, total_pages }
}

/// Filter, sort, clamp the page, then paginate
pub fn run_query<T: Record>(records: &[T], state: &QueryState) -> QueryPage<T> {
    let filtered = apply_filters(records, state);
    let sorted = apply_sort(filtered, state.sort.as_ref());

    let meta = PaginationMeta::new(state.page, state.page_size, sorted.len());
    let slice = paginate(&sorted, meta.page, meta.limit);

    tracing::debug!(
        resource = T::resource_name(),
        source = records.len(),
        matched = meta.total,
        page = meta.page,
        total_pages = meta.total_pages,
        "query executed"
    );

    QueryPage {
        data: slice.items,
        pagination: meta,
    }
}

/// Filter and sort without paginating (used for exports)
pub fn filter_and_sort<T: Record>(records: &[T], state: &QueryState) -> Vec<T> {
    apply_sort(apply_filters(records, state), state.sort.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::core::query::QueryAction;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        group: &'static str,
        score: Option<f64>,
    }

    impl Filterable for Row {
        fn text_fields(&self) -> Vec<&str> {
            vec![self.name]
        }

        fn category(&self) -> Option<&str> {
            Some(self.group)
        }

        fn range_value(&self) -> Option<f64> {
            self.score
        }
    }

    impl Record for Row {
        type Id = u32;

        fn resource_name() -> &'static str {
            "rows"
        }

        fn id(&self) -> &u32 {
            &self.id
        }

        fn sort_fields() -> &'static [&'static str] {
            &["id", "name", "group", "score"]
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "id" => Some(self.id.into()),
                "name" => Some(self.name.into()),
                "group" => Some(self.group.into()),
                "score" => Some(self.score.into()),
                _ => None,
            }
        }
    }

    fn row(id: u32, name: &'static str, group: &'static str, score: Option<f64>) -> Row {
        Row {
            id,
            name,
            group,
            score,
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            row(1, "alpha", "b", Some(3.0)),
            row(2, "beta", "a", Some(1.0)),
            row(3, "gamma", "b", None),
            row(4, "delta", "a", Some(3.0)),
        ]
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_filters_preserve_order() {
        let state = QueryState::default().with(QueryAction::SetCategory(Some("b".into())));
        assert_eq!(ids(&apply_filters(&rows(), &state)), vec![1, 3]);
    }

    #[test]
    fn test_sort_none_is_identity() {
        assert_eq!(ids(&apply_sort(rows(), None)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_stable_both_directions() {
        let asc = apply_sort(rows(), Some(&SortSpec::asc("group")));
        assert_eq!(ids(&asc), vec![2, 4, 1, 3]);

        let desc = apply_sort(rows(), Some(&SortSpec::desc("group")));
        assert_eq!(ids(&desc), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_sort_nulls_first_ascending() {
        let asc = apply_sort(rows(), Some(&SortSpec::asc("score")));
        assert_eq!(ids(&asc), vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_sort_unknown_field_keeps_order() {
        let sorted = apply_sort(rows(), Some(&SortSpec::asc("nope")));
        assert_eq!(ids(&sorted), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_paginate_does_not_clamp() {
        let slice = paginate(&rows(), 3, 2);
        assert!(slice.items.is_empty());
        assert_eq!(slice.total_pages, 2);

        let zero = paginate(&rows(), 0, 2);
        assert!(zero.items.is_empty());
    }

    #[test]
    fn test_paginate_empty_has_one_page() {
        let empty: Vec<Row> = Vec::new();
        let slice = paginate(&empty, 1, 5);
        assert_eq!(slice.total_pages, 1);
        assert!(slice.items.is_empty());
    }

    #[test]
    fn test_paginate_zero_page_size() {
        let slice = paginate(&rows(), 2, 0);
        assert_eq!(slice.total_pages, 4);
        assert_eq!(ids(&slice.items), vec![2]);
    }

    #[test]
    fn test_run_query_clamps_page() {
        let state = QueryState::new(3).with(QueryAction::SetPage(10));
        let page = run_query(&rows(), &state);
        assert_eq!(page.pagination.page, 2);
        assert_eq!(ids(&page.data), vec![4]);
    }
}
