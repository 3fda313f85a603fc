//! Terminal front-end: the same actions as the web page, one per subcommand.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::dispatch::Action;
use crate::prompt::Prompt;
use crate::types::Filter;
use crate::view::{HistoryView, RowView, UNCATEGORIZED_HEADING};

#[derive(Debug, Parser)]
#[command(name = "printdock", version, about = "Upload, print and manage PDFs on a PrintDock service")]
pub struct Cli {
    /// Base URL of the print service (overrides backend.base_url)
    #[arg(long, env = "PRINTDOCK_URL", global = true)]
    pub url: Option<String>,

    /// Answer every confirmation with yes
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the history, grouped by folder or for one folder
    History {
        #[arg(long)]
        folder: Option<String>,
        /// Show the files of every group, not just the headers
        #[arg(long)]
        expand: bool,
    },
    /// Print one or more files (several are sent as a paced batch)
    Print {
        #[arg(required = true)]
        filenames: Vec<String>,
    },
    /// Print every file of a folder
    PrintFolder {
        folder: String,
        /// Delete the folder once all files were sent
        #[arg(long)]
        delete: bool,
    },
    /// Delete one file
    Delete { filename: String },
    /// Delete a folder and all its files
    DeleteFolder { folder: String },
    /// Delete every uploaded file
    DeleteAll,
    /// Upload PDFs for conversion
    Upload {
        #[arg(long)]
        folder: Option<String>,
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

impl Command {
    /// The page action this subcommand corresponds to. `History` and `Upload`
    /// need extra work by the caller and map to `Reload` / `None`.
    pub fn action(&self) -> Option<Action> {
        match self {
            Command::History { .. } => Some(Action::Reload),
            Command::Print { filenames } if filenames.len() == 1 => Some(Action::PrintFile(filenames[0].clone())),
            Command::Print { filenames } => Some(Action::PrintSelected(filenames.clone())),
            Command::PrintFolder { folder, delete: false } => Some(Action::PrintFolder(folder.clone())),
            Command::PrintFolder { folder, delete: true } => Some(Action::PrintFolderThenDelete(folder.clone())),
            Command::Delete { filename } => Some(Action::DeleteFile(filename.clone())),
            Command::DeleteFolder { folder } => Some(Action::DeleteFolder(folder.clone())),
            Command::DeleteAll => Some(Action::DeleteAll),
            Command::Upload { .. } => None,
        }
    }

    pub fn filter(&self) -> Filter {
        match self {
            Command::History { folder: Some(f), .. } => Filter::Folder(f.clone()),
            _ => Filter::All,
        }
    }
}

/// Asks on stderr, reads the answer from stdin.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        let mut err = io::stderr().lock();
        let _ = write!(err, "{} [y/N] ", message);
        let _ = err.flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Renders the history list as indented text.
pub fn render_text(view: &HistoryView, expand: bool) -> String {
    let mut out = String::new();
    match view {
        HistoryView::Empty { message } => {
            out.push_str(message);
            out.push('\n');
        }
        HistoryView::Flat { rows } => {
            for row in rows {
                push_row(&mut out, row, "");
            }
        }
        HistoryView::Grouped { groups, uncategorized } => {
            for group in groups {
                out.push_str(&format!("[{}] ({})\n", group.name, group.count()));
                if expand || !group.collapsed {
                    for row in &group.rows {
                        push_row(&mut out, row, "  ");
                    }
                }
            }
            if !uncategorized.is_empty() {
                out.push_str(UNCATEGORIZED_HEADING);
                out.push('\n');
                for row in uncategorized {
                    push_row(&mut out, row, "  ");
                }
            }
        }
    }
    out
}

fn push_row(out: &mut String, row: &RowView, indent: &str) {
    out.push_str(&format!(
        "{}{}  {}  {}  ({})\n",
        indent, row.display_name, row.date_label, row.size_label, row.filename
    ));
}
