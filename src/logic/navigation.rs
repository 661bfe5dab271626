//! Selection movement for the poll list and form focus

use crate::api::{Id, Poll};

/// Move down one item, wrapping to the top. Nothing selected selects the first item.
///
/// ```
/// use polltui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= list_len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Move up one item, wrapping to the bottom
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) => (i - 1).min(list_len - 1),
    })
}

/// Keep an index inside a list that may have shrunk
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1))
}

/// After the list is replaced, find the poll that was selected before.
///
/// Falls back to the previous index (clamped) when that poll is gone.
pub fn reselect_poll(
    polls: &[Poll],
    previous_id: Option<&Id>,
    previous_index: Option<usize>,
) -> Option<usize> {
    previous_id
        .and_then(|id| polls.iter().position(|p| &p.id == id))
        .or_else(|| clamp_selection(previous_index, polls.len()))
}

/// Cycle focus through `count` fields
pub fn cycle_focus(current: usize, count: usize, forward: bool) -> usize {
    if count == 0 {
        return 0;
    }
    if forward {
        (current + 1) % count
    } else {
        (current + count - 1) % count
    }
}
