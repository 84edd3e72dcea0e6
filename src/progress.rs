//! Reading progress.

/// Percentage of the document read, rounded up.
///
/// Paged documents pass `current_page + 1` and the page count; single page
/// documents pass the cursor offset and the character count. Returns `None`
/// for an empty document.
pub fn reading_progress(current: usize, total: usize) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let current = current.min(total) as u128;
    let pct = (current * 100).div_ceil(total as u128);
    Some(pct as u8)
}

pub fn format_progress(percentage: u8) -> String {
    format!("{percentage}% completed")
}
