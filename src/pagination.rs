use serde::Serialize;

/// Computes the windowed page list shown by the pagination widget.
///
/// Always shows the edges, a window around the current page, and `None`
/// gaps where pages are elided. The list is bounded by `total_pages`, so
/// an out-of-range current page never widens the widget.
fn page_window(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of display items plus the widget state needed to render
/// navigation around it.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Page numbers to render; `None` marks an elided gap.
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = page_window(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pages_for_empty_result() {
        let paginated: Paginated<u32> = Paginated::new(vec![], 1, 0);
        assert!(paginated.pages.is_empty());
        assert_eq!(paginated.page, 1);
    }

    #[test]
    fn test_small_result_has_no_gaps() {
        let paginated: Paginated<u32> = Paginated::new(vec![1, 2, 3], 1, 3);
        assert_eq!(paginated.pages, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_large_result_elides_middle() {
        let paginated: Paginated<u32> = Paginated::new(vec![], 1, 50);
        assert!(paginated.pages.contains(&None));
        assert_eq!(paginated.pages.first(), Some(&Some(1)));
        assert_eq!(paginated.pages.last(), Some(&Some(50)));
    }

    #[test]
    fn test_window_follows_current_page() {
        let paginated: Paginated<u32> = Paginated::new(vec![], 25, 50);
        assert!(paginated.pages.contains(&Some(24)));
        assert!(paginated.pages.contains(&Some(29)));
        assert_eq!(paginated.pages.iter().filter(|p| p.is_none()).count(), 2);
    }

    #[test]
    fn test_zero_page_clamps_to_first() {
        let paginated: Paginated<u32> = Paginated::new(vec![], 0, 5);
        assert_eq!(paginated.page, 1);
    }

    #[test]
    fn test_widget_is_bounded_by_total_pages() {
        // A current page past the end must not invent pages.
        let paginated: Paginated<u32> = Paginated::new(vec![], 99, 5);
        assert!(
            paginated
                .pages
                .iter()
                .flatten()
                .all(|&page| page >= 1 && page <= 5)
        );
    }
}
