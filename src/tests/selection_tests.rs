#[cfg(test)]
mod tests {
    use crate::config::UiConfig;
    use crate::dispatch::Action;
    use crate::error::ErrorKind;
    use crate::selection::SelectionState;
    use crate::state::AppState;
    use crate::tests::support::{entry, pdf};
    use crate::types::{Filter, UploadFile};
    use crate::upload::*;

    fn rows() -> Vec<String> {
        vec!["one".to_string(), "two".to_string(), "three".to_string()]
    }

    #[test]
    fn test_bulk_button_hidden_without_selection() {
        let selection = SelectionState::new(rows());
        assert_eq!(selection.bulk_print_label(), None);
        assert!(!selection.select_all_checked());
    }

    #[test]
    fn test_select_all_checks_every_row() {
        let mut selection = SelectionState::new(rows());
        selection.toggle_all(true);
        assert!(selection.select_all_checked());
        assert_eq!(selection.checked_count(), 3);
        assert_eq!(selection.bulk_print_label().as_deref(), Some("Print Selected (3)"));

        selection.toggle_all(false);
        assert_eq!(selection.checked_count(), 0);
        assert_eq!(selection.bulk_print_label(), None);
    }

    #[test]
    fn test_checked_rows_come_back_in_document_order() {
        let mut selection = SelectionState::new(rows());
        selection.set_checked("three", true);
        selection.set_checked("one", true);
        selection.set_checked("ghost", true);
        assert_eq!(selection.checked_in_order(), vec!["one".to_string(), "three".to_string()]);
        assert_eq!(selection.bulk_print_label().as_deref(), Some("Print Selected (2)"));

        selection.set_checked("three", false);
        assert_eq!(selection.checked_in_order(), vec!["one".to_string()]);
    }

    #[test]
    fn test_reset_clears_selection_and_toggle() {
        let mut selection = SelectionState::new(rows());
        selection.toggle_all(true);
        selection.reset(vec!["new".to_string()]);
        assert!(!selection.select_all_checked());
        assert_eq!(selection.checked_count(), 0);
        selection.toggle_all(true);
        assert_eq!(selection.checked_in_order(), vec!["new".to_string()]);
    }

    #[test]
    fn test_select_all_includes_rows_in_collapsed_groups() {
        let entries = vec![entry("a", Some("F")), entry("b", None)];
        let mut state = AppState::with_entries(entries, UiConfig::default());
        assert!(state.apply_local(&Action::ToggleAll(true)));
        assert_eq!(state.bulk_print_action(), Some(Action::PrintSelected(vec!["a".to_string(), "b".to_string()])));
    }

    #[test]
    fn test_rerender_resets_checkboxes() {
        let entries = vec![entry("a", Some("F")), entry("b", None)];
        let mut state = AppState::with_entries(entries, UiConfig::default());
        state.apply_local(&Action::SetChecked { filename: "b".to_string(), checked: true });
        assert_eq!(state.selection.checked_count(), 1);
        state.apply_local(&Action::SelectFilter(Filter::All));
        assert_eq!(state.selection.checked_count(), 0);
        assert_eq!(state.bulk_print_action(), None);
    }

    #[test]
    fn test_remote_actions_are_not_local() {
        let mut state = AppState::new(UiConfig::default());
        assert!(!state.apply_local(&Action::DeleteAll));
        assert!(!state.apply_local(&Action::Reload));
        assert!(state.apply_local(&Action::ToggleGroup("x".to_string())));
    }

    #[test]
    fn test_upload_accepts_only_pdfs() {
        let mut upload = UploadState::default();
        assert_eq!(upload.status_text(), NO_FILE_STATUS);
        assert!(!upload.can_convert());

        let picked = vec![
            pdf("a.pdf"),
            UploadFile { name: "notes.txt".to_string(), mime: "text/plain".to_string(), bytes: vec![1] },
            pdf("b.pdf"),
        ];
        assert_eq!(upload.accept(picked).unwrap(), 2);
        assert_eq!(upload.status_text(), "2 file(s) ready");
        assert!(upload.can_convert());
        assert_eq!(upload.button_label(), CONVERT_LABEL);
    }

    #[test]
    fn test_upload_without_pdfs_keeps_previous_selection() {
        let mut upload = UploadState::default();
        upload.accept(vec![pdf("keep.pdf")]).unwrap();
        let err = upload
            .accept(vec![UploadFile { name: "x.png".to_string(), mime: "image/png".to_string(), bytes: vec![] }])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
        assert_eq!(err.user_message(), NOT_PDF_MESSAGE);
        assert_eq!(upload.files().len(), 1);
        assert_eq!(upload.files()[0].name, "keep.pdf");
    }

    #[test]
    fn test_upload_begin_trims_folder_and_marks_busy() {
        let mut upload = UploadState::default();
        upload.accept(vec![pdf("a.pdf")]).unwrap();
        upload.folder_input = "  Taxes 2024 ".to_string();
        let request = upload.begin().expect("request");
        assert_eq!(request.folder_name.as_deref(), Some("Taxes 2024"));
        assert_eq!(request.files.len(), 1);
        assert!(upload.is_busy());
        assert_eq!(upload.button_label(), BUSY_LABEL);
        assert!(upload.begin().is_none(), "no second request while busy");

        upload.finish(false);
        assert!(!upload.is_busy());
        assert_eq!(upload.files().len(), 1, "failure keeps the files");
        assert_eq!(upload.folder_input, "  Taxes 2024 ");

        upload.folder_input = "   ".to_string();
        let request = upload.begin().expect("request");
        assert_eq!(request.folder_name, None);
        upload.finish(true);
        assert!(upload.files().is_empty());
        assert!(upload.folder_input.is_empty());
        assert_eq!(upload.status_text(), NO_FILE_STATUS);
    }
}
