#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::{render_text, Cli, Command};
    use crate::config::UiConfig;
    use crate::dispatch::Action;
    use crate::state::AppState;
    use crate::tests::support::entry;
    use crate::types::Filter;

    #[test]
    fn test_subcommands_map_to_page_actions() {
        let cli = Cli::parse_from(["printdock", "print", "a"]);
        assert_eq!(cli.command.action(), Some(Action::PrintFile("a".to_string())));

        let cli = Cli::parse_from(["printdock", "--yes", "print", "a", "b"]);
        assert!(cli.yes);
        assert_eq!(cli.command.action(), Some(Action::PrintSelected(vec!["a".to_string(), "b".to_string()])));

        let cli = Cli::parse_from(["printdock", "print-folder", "Taxes", "--delete"]);
        assert_eq!(cli.command.action(), Some(Action::PrintFolderThenDelete("Taxes".to_string())));

        let cli = Cli::parse_from(["printdock", "delete-all"]);
        assert_eq!(cli.command.action(), Some(Action::DeleteAll));
    }

    #[test]
    fn test_history_folder_sets_filter() {
        let cli = Cli::parse_from(["printdock", "history", "--folder", "Taxes"]);
        assert_eq!(cli.command.filter(), Filter::Folder("Taxes".to_string()));
        assert!(matches!(cli.command, Command::History { expand: false, .. }));
        assert!(Cli::try_parse_from(["printdock", "upload"]).is_err(), "upload needs paths");
    }

    #[test]
    fn test_render_text_collapsed_and_expanded() {
        let state = AppState::with_entries(vec![entry("a", Some("F")), entry("b", None)], UiConfig::default());

        let collapsed = render_text(state.view(), false);
        assert!(collapsed.starts_with("[F] (1)\n"));
        assert!(!collapsed.contains("a.pdf"));
        assert!(collapsed.contains("Uncategorized\n  b.pdf"));

        let expanded = render_text(state.view(), true);
        assert!(expanded.contains("  a.pdf"));
        assert!(expanded.contains("1.5 KB  (a)"));
    }
}
