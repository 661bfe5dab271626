//! Poll display and option rules
//!
//! Counts shown to the user always come from the last list the backend
//! returned. Nothing here adds to a count locally.

use chrono::DateTime;

use crate::api::{Id, Poll};

/// Minimum number of option fields on the create form, and of non-blank
/// options required to submit
pub const MIN_OPTIONS: usize = 2;

/// Shown in place of vote controls for polls that have no options
pub const LEGACY_PLACEHOLDER: &str =
    "This poll was created before options were supported. Voting is unavailable.";

/// One vote control as rendered in the list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteControl {
    pub option_id: Id,
    pub label: String,
    pub count: u64,
}

/// What the body of a poll card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollBody {
    Legacy,
    Options(Vec<VoteControl>),
}

/// Absent counts display as zero
pub fn display_count(count: Option<u64>) -> u64 {
    count.unwrap_or(0)
}

pub fn poll_body(poll: &Poll) -> PollBody {
    if poll.is_legacy() {
        return PollBody::Legacy;
    }

    PollBody::Options(
        poll.options
            .iter()
            .map(|option| VoteControl {
                option_id: option.id.clone(),
                label: option.text.clone(),
                count: display_count(option.vote_count),
            })
            .collect(),
    )
}

pub fn total_votes(poll: &Poll) -> u64 {
    poll.options
        .iter()
        .map(|o| display_count(o.vote_count))
        .fold(0u64, u64::saturating_add)
}

/// Share of the poll's votes held by one option, in percent
pub fn vote_share(count: u64, total: u64) -> u16 {
    if total == 0 {
        return 0;
    }
    // Widened so server-supplied counts near u64::MAX cannot overflow
    let share = u128::from(count) * 100 / u128::from(total);
    share.min(100) as u16
}

/// Keep entries whose trimmed text is non-empty, in their original order
pub fn non_blank_options(options: &[String]) -> Vec<String> {
    options
        .iter()
        .filter(|o| !o.trim().is_empty())
        .cloned()
        .collect()
}

/// Whether removing one field still leaves the minimum
pub fn can_remove_option(field_count: usize) -> bool {
    field_count > MIN_OPTIONS
}

/// Render an RFC 3339 timestamp as `YYYY-MM-DD HH:MM`
pub fn format_created_at(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PollOption;

    fn poll_with(options: Vec<(i64, &str, Option<u64>)>) -> Poll {
        Poll {
            id: Id::Int(1),
            title: "Lunch".to_string(),
            description: String::new(),
            options: options
                .into_iter()
                .map(|(id, text, vote_count)| PollOption {
                    id: Id::Int(id),
                    text: text.to_string(),
                    order: None,
                    vote_count,
                })
                .collect(),
            created_by: None,
            created_at: None,
        }
    }

    #[test]
    fn test_empty_options_is_legacy() {
        assert_eq!(poll_body(&poll_with(vec![])), PollBody::Legacy);
    }

    #[test]
    fn test_one_control_per_option() {
        let poll = poll_with(vec![(1, "Tacos", Some(4)), (2, "Ramen", None), (3, "Pho", Some(0))]);
        let PollBody::Options(controls) = poll_body(&poll) else {
            panic!("expected vote controls");
        };
        assert_eq!(controls.len(), 3);
        assert_eq!(controls[0].label, "Tacos");
        assert_eq!(controls[0].count, 4);
        assert_eq!(controls[1].count, 0);
        assert_eq!(controls[1].option_id, Id::Int(2));
    }

    #[test]
    fn test_absent_count_not_rewritten() {
        let poll = poll_with(vec![(1, "A", None), (2, "B", None)]);
        let _ = poll_body(&poll);
        assert_eq!(poll.options[0].vote_count, None);
    }

    #[test]
    fn test_total_and_share() {
        let poll = poll_with(vec![(1, "A", Some(3)), (2, "B", None), (3, "C", Some(1))]);
        assert_eq!(total_votes(&poll), 4);
        assert_eq!(vote_share(3, 4), 75);
        assert_eq!(vote_share(0, 0), 0);
    }

    #[test]
    fn test_extreme_counts_do_not_overflow() {
        let poll = poll_with(vec![(1, "A", Some(u64::MAX)), (2, "B", Some(5))]);
        assert_eq!(total_votes(&poll), u64::MAX);
        assert_eq!(vote_share(u64::MAX, u64::MAX), 100);
        assert_eq!(vote_share(u64::MAX / 2, u64::MAX), 49);
        assert_eq!(vote_share(5, u64::MAX), 0);
    }

    #[test]
    fn test_non_blank_options_preserves_order() {
        let options = vec!["A".to_string(), "".to_string(), "B".to_string()];
        assert_eq!(non_blank_options(&options), vec!["A", "B"]);

        let options = vec!["  ".to_string(), "Z".to_string(), "\t".to_string(), "Y".to_string()];
        assert_eq!(non_blank_options(&options), vec!["Z", "Y"]);
    }

    #[test]
    fn test_can_remove_option() {
        assert!(!can_remove_option(0));
        assert!(!can_remove_option(2));
        assert!(can_remove_option(3));
    }

    #[test]
    fn test_format_created_at() {
        assert_eq!(
            format_created_at("2024-05-01T12:30:00Z").as_deref(),
            Some("2024-05-01 12:30")
        );
        assert_eq!(format_created_at("yesterday"), None);
    }
}
