//! Filesystem naming for per-project upload directories.

/// Sanitize a project's display name into a filesystem-safe folder name.
///
/// Every run of non-alphanumeric characters collapses to a single underscore
/// and the result is lowercased, so "Multi-Purpose Hall (Phase 2)" becomes
/// `multi_purpose_hall_phase_2`. The mapping is deterministic: the same
/// display name always resolves to the same folder.
pub fn project_folder_name(name: &str) -> String {
    let mut folder = String::with_capacity(name.len());
    let mut last_was_separator = false;
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            folder.push(c.to_ascii_lowercase());
            last_was_separator = false;
        } else if !last_was_separator && !folder.is_empty() {
            folder.push('_');
            last_was_separator = true;
        }
    }
    while folder.ends_with('_') {
        folder.pop();
    }
    if folder.is_empty() {
        folder.push_str("project");
    }
    folder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphanumerics_are_kept_and_lowercased() {
        assert_eq!(project_folder_name("Basketball Court"), "basketball_court");
    }

    #[test]
    fn punctuation_runs_collapse_to_one_underscore() {
        assert_eq!(
            project_folder_name("Multi-Purpose Hall (Phase 2)"),
            "multi_purpose_hall_phase_2"
        );
    }

    #[test]
    fn leading_and_trailing_separators_are_dropped() {
        assert_eq!(project_folder_name("  Road Repair!  "), "road_repair");
    }

    #[test]
    fn name_without_alphanumerics_falls_back() {
        assert_eq!(project_folder_name("???"), "project");
    }

    #[test]
    fn same_name_always_maps_to_same_folder() {
        let a = project_folder_name("Day Care Center");
        let b = project_folder_name("Day Care Center");
        assert_eq!(a, b);
    }
}
