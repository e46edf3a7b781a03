use super::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, LabelListViewModel, StatusBadge,
};

pub fn present_label_list(
    level: Option<u32>,
    labels: Vec<String>,
    total: usize,
) -> CommandResultViewModel<LabelListViewModel> {
    let first = labels.first().cloned();
    let content = LabelListViewModel {
        level,
        labels,
        total,
    };

    let result = CommandResultViewModel::new(content);

    match first {
        None if total == 0 => result
            .with_badge(StatusBadge::info("The store is empty"))
            .with_suggestion(Guidance::new("Load newform data").with_command(cmd::IMPORT)),
        None => result.with_badge(StatusBadge::info("No newforms match")),
        Some(label) => result.with_suggestion(
            Guidance::new("Show a newform page").with_command(cmd::show(&label)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::StatusLevel;

    #[test]
    fn test_empty_store_suggests_import() {
        let result = present_label_list(None, vec![], 0);
        assert_eq!(result.badge.map(|b| b.level), Some(StatusLevel::Info));
        assert_eq!(result.suggestions[0].command.as_deref(), Some(cmd::IMPORT));
    }

    #[test]
    fn test_no_match_has_no_tips() {
        let result = present_label_list(Some(4), vec![], 3);
        assert!(result.badge.is_some());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_first_label_is_suggested() {
        let result = present_label_list(None, vec!["1.12.a.a".to_string()], 1);
        assert!(result.badge.is_none());
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("mfview show 1.12.a.a")
        );
    }
}
