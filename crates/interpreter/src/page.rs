//! Bounded list pages with continuation state.
//!
//! Pagination state cannot live on the server (turns are stateless), so the
//! next offset is handed to the caller and accepted back verbatim on the
//! following turn. The engine must therefore tolerate stale or out-of-range
//! offsets without failing.

/// One rendered page of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Rendered window entries, joined with `", "`; empty when the offset
    /// is at or beyond the end of the list.
    pub text: String,
    /// Offset the caller should echo back to continue.
    pub next_offset: usize,
    /// Whether entries remain beyond this page.
    pub has_more: bool,
}

/// Render the window `[offset, offset + page_size)` of `items`, clamped to
/// the list. Pure; never fails, for any `offset`.
pub fn build_page<T>(
    items: &[T],
    offset: usize,
    page_size: usize,
    render: impl Fn(&T) -> String,
) -> Page {
    let start = offset.min(items.len());
    let end = offset.saturating_add(page_size).min(items.len());

    let text = items[start..end]
        .iter()
        .map(render)
        .collect::<Vec<_>>()
        .join(", ");

    Page {
        text,
        next_offset: end,
        has_more: end < items.len(),
    }
}
