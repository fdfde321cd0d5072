use std::cmp::Ordering;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    pub key: K,
    pub direction: SortDirection,
}

/// Header click cycle: ascending, then descending, then unsorted. Clicking a
/// different column starts that column ascending.
pub fn next_sort<K: PartialEq + Copy>(current: Option<SortState<K>>, key: K) -> Option<SortState<K>> {
    match current {
        Some(state) if state.key == key => match state.direction {
            SortDirection::Ascending => Some(SortState {
                key,
                direction: SortDirection::Descending,
            }),
            SortDirection::Descending => None,
        },
        _ => Some(SortState {
            key,
            direction: SortDirection::Ascending,
        }),
    }
}

pub fn sort_indicator<K: PartialEq>(current: &Option<SortState<K>>, key: &K) -> &'static str {
    match current {
        Some(state) if &state.key == key => state.direction.indicator(),
        _ => "",
    }
}

/// Stable sort by `compare`; `None` leaves the input order untouched.
pub fn sort_rows<T, K, F>(rows: &mut [T], sort: Option<SortState<K>>, compare: F)
where
    F: Fn(&K, &T, &T) -> Ordering,
{
    if let Some(state) = sort {
        rows.sort_by(|a, b| state.direction.apply(compare(&state.key, a, b)));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn total_pages(&self, total: usize) -> usize {
        if total == 0 {
            1
        } else {
            total.div_ceil(self.page_size.max(1))
        }
    }

    /// Page actually shown for `total` rows.
    pub fn effective_page(&self, total: usize) -> usize {
        self.page.clamp(1, self.total_pages(total))
    }

    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let size = self.page_size.max(1);
        let start = (self.effective_page(rows.len()) - 1) * size;
        let end = (start + size).min(rows.len());
        &rows[start.min(rows.len())..end]
    }

    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, self.total_pages(total));
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn has_previous(&self, total: usize) -> bool {
        self.effective_page(total) > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.effective_page(total) < self.total_pages(total)
    }
}

pub fn total_label(total: usize, noun: &str) -> String {
    format!("Total {} {}", total, noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Col {
        A,
        B,
    }

    #[test]
    fn sort_cycle_goes_asc_desc_none() {
        let first = next_sort(None, Col::A);
        assert_eq!(first.map(|s| s.direction), Some(SortDirection::Ascending));
        let second = next_sort(first, Col::A);
        assert_eq!(second.map(|s| s.direction), Some(SortDirection::Descending));
        assert_eq!(next_sort(second, Col::A), None);
    }

    #[test]
    fn switching_column_restarts_ascending() {
        let desc = Some(SortState {
            key: Col::A,
            direction: SortDirection::Descending,
        });
        let switched = next_sort(desc, Col::B).unwrap();
        assert_eq!(switched.key, Col::B);
        assert_eq!(switched.direction, SortDirection::Ascending);
    }

    #[test]
    fn sort_rows_is_stable_and_reversible() {
        let mut rows = vec![("b", 1), ("a", 2), ("b", 3), ("a", 4)];
        let by_name = |_: &Col, x: &(&str, i32), y: &(&str, i32)| x.0.cmp(y.0);
        sort_rows(
            &mut rows,
            Some(SortState {
                key: Col::A,
                direction: SortDirection::Ascending,
            }),
            by_name,
        );
        assert_eq!(rows, vec![("a", 2), ("a", 4), ("b", 1), ("b", 3)]);

        sort_rows(
            &mut rows,
            Some(SortState {
                key: Col::A,
                direction: SortDirection::Descending,
            }),
            by_name,
        );
        assert_eq!(rows[0].0, "b");
        assert_eq!(rows[3].0, "a");
    }

    #[test]
    fn unsorted_keeps_input_order() {
        let mut rows = vec![3, 1, 2];
        sort_rows(&mut rows, None::<SortState<Col>>, |_, a, b| a.cmp(b));
        assert_eq!(rows, vec![3, 1, 2]);
    }

    #[test]
    fn pagination_slices_pages_of_ten() {
        let rows: Vec<usize> = (1..=25).collect();
        let mut pagination = Pagination::default();
        assert_eq!(pagination.total_pages(rows.len()), 3);
        assert_eq!(pagination.slice(&rows), &rows[0..10]);

        pagination.go_to(3, rows.len());
        assert_eq!(pagination.slice(&rows), &rows[20..25]);
        assert!(!pagination.has_next(rows.len()));
        assert!(pagination.has_previous(rows.len()));
    }

    #[test]
    fn pagination_clamps_when_rows_shrink() {
        let mut pagination = Pagination::default();
        pagination.go_to(3, 25);
        let shrunk: Vec<usize> = (1..=12).collect();
        assert_eq!(pagination.effective_page(shrunk.len()), 2);
        assert_eq!(pagination.slice(&shrunk), &shrunk[10..12]);
    }

    #[test]
    fn empty_rows_have_one_empty_page() {
        let pagination = Pagination::default();
        let rows: Vec<u8> = Vec::new();
        assert_eq!(pagination.total_pages(0), 1);
        assert!(pagination.slice(&rows).is_empty());
        assert!(!pagination.has_next(0));
    }

    #[test]
    fn changing_page_size_returns_to_first_page() {
        let mut pagination = Pagination::default();
        pagination.go_to(2, 30);
        pagination.set_page_size(20);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.total_pages(30), 2);
    }

    #[test]
    fn total_label_formats_noun() {
        assert_eq!(total_label(3, "records"), "Total 3 records");
    }
}
