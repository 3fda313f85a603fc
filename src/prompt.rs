/// Blocking user dialogs.
///
/// The browser maps these to `window.confirm` / `window.alert`; the CLI asks on the
/// terminal. Both block the calling action until the user answers.
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Confirms everything and swallows alerts into the log.
///
/// Used by the CLI's `--yes` flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Prompt for AssumeYes {
    fn confirm(&self, message: &str) -> bool {
        tracing::info!("auto-confirmed: {}", message);
        true
    }

    fn alert(&self, message: &str) {
        tracing::info!("{}", message);
    }
}
