//! Project progress percentage derived from stage statuses.

use crate::stage::StageStatus;

/// Percentage of stages marked `Completed`, rounded half-up to an integer.
///
/// The caller passes the full post-update status set (existing and new stages
/// concatenated); the calculator does not care where a status came from. An
/// empty set is 0 percent. The result is the authoritative value persisted on
/// the project row.
pub fn progress_percentage(statuses: &[StageStatus]) -> i16 {
    let total = statuses.len() as i64;
    if total == 0 {
        return 0;
    }
    let completed = statuses
        .iter()
        .filter(|s| **s == StageStatus::Completed)
        .count() as i64;
    // Round half-up without floats: floor((200c + t) / 2t).
    ((200 * completed + total) / (2 * total)) as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use StageStatus::*;

    #[test]
    fn empty_stage_list_is_zero_percent() {
        assert_eq!(progress_percentage(&[]), 0);
    }

    #[test]
    fn half_completed_is_fifty_percent() {
        assert_eq!(
            progress_percentage(&[Completed, Completed, Ongoing, NotStarted]),
            50
        );
    }

    #[test]
    fn all_completed_is_one_hundred_percent() {
        assert_eq!(progress_percentage(&[Completed, Completed, Completed]), 100);
    }

    #[test]
    fn none_completed_is_zero_percent() {
        assert_eq!(progress_percentage(&[Ongoing, OnHold, Delayed]), 0);
    }

    #[test]
    fn rounds_half_up() {
        // 1/8 = 12.5 -> 13, 5/8 = 62.5 -> 63.
        let mut statuses = vec![Completed];
        statuses.extend([Ongoing; 7]);
        assert_eq!(progress_percentage(&statuses), 13);

        let statuses = [Completed, Completed, Completed, Completed, Completed, Ongoing, Ongoing, Ongoing];
        assert_eq!(progress_percentage(&statuses), 63);
    }

    #[test]
    fn rounds_down_below_half() {
        // 1/3 = 33.33 -> 33, 2/3 = 66.67 -> 67.
        assert_eq!(progress_percentage(&[Completed, Ongoing, Ongoing]), 33);
        assert_eq!(progress_percentage(&[Completed, Completed, Ongoing]), 67);
    }

    #[test]
    fn order_and_origin_of_statuses_are_irrelevant() {
        let existing = [Completed, Ongoing];
        let added = [Completed, NotStarted];
        let combined: Vec<_> = existing.iter().chain(added.iter()).copied().collect();
        assert_eq!(progress_percentage(&combined), 50);

        let reversed: Vec<_> = combined.into_iter().rev().collect();
        assert_eq!(progress_percentage(&reversed), 50);
    }
}
