//! Page-marker calculation for the question list.

/// Fixed page size of the backend's question listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMarker {
    pub number: u32,
    pub active: bool,
}

/// `ceil(total / QUESTIONS_PER_PAGE)`, saturating at `u32::MAX`.
pub fn page_count(total_questions: usize) -> u32 {
    u32::try_from(total_questions.div_ceil(QUESTIONS_PER_PAGE)).unwrap_or(u32::MAX)
}

/// The first `limit` of the markers `1..=page_count(total)`, the one equal
/// to `current` active.
pub fn page_markers(total_questions: usize, current: u32, limit: usize) -> Vec<PageMarker> {
    (1..=page_count(total_questions))
        .take(limit)
        .map(|number| PageMarker {
            number,
            active: number == current,
        })
        .collect()
}
