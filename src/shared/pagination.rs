use crate::shared::constants::QUESTIONS_PER_PAGE;

/// Slice one page out of a fully materialised result list.
///
/// `page` is 1-based; positions `[(page-1)*10, page*10)` are returned, clipped to the
/// list. Pages below 1 are treated as page 1.
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    let start = usize::try_from(page.max(1) - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(QUESTIONS_PER_PAGE);

    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
