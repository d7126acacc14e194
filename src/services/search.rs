use crate::controller::{FetchState, SearchController};
use crate::dto::search::{DisplayRecord, NO_DATA_MESSAGE, ResultsPageData};
use crate::pagination::Paginated;
use crate::repository::{DEFAULT_PAGE_SIZE, OuiReader};

/// Loads one results page through the controller and shapes it for the
/// template.
///
/// Fetch failures become page state rather than errors so the view can
/// show them in place; an empty page is a normal outcome carrying the
/// backend's explanation when it sent one.
pub async fn load_results_page<B>(
    controller: &SearchController<B>,
    query: &str,
    page: usize,
) -> ResultsPageData
where
    B: OuiReader,
{
    let page = page.max(1);

    match controller.load(query, page).await {
        FetchState::Success(response) => {
            let total = response.total;
            let total_pages = total.div_ceil(DEFAULT_PAGE_SIZE);
            let records = response
                .records()
                .iter()
                .cloned()
                .map(DisplayRecord::from)
                .collect::<Vec<_>>();

            let message = if records.is_empty() {
                Some(
                    response
                        .info
                        .clone()
                        .unwrap_or_else(|| NO_DATA_MESSAGE.to_string()),
                )
            } else {
                None
            };

            ResultsPageData {
                query: query.to_string(),
                results: Paginated::new(records, page, total_pages),
                total,
                message,
                error: None,
            }
        }
        FetchState::Failure(message) => ResultsPageData {
            query: query.to_string(),
            results: Paginated::new(Vec::new(), page, 0),
            total: 0,
            message: None,
            error: Some(message),
        },
        // `load` only settles to Success or Failure; render an empty page
        // if that ever changes.
        FetchState::Idle | FetchState::Loading => ResultsPageData {
            query: query.to_string(),
            results: Paginated::new(Vec::new(), page, 0),
            total: 0,
            message: None,
            error: None,
        },
    }
}
