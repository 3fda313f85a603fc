use dioxus::prelude::*;
use web_sys::FileList;

use printdock::dispatch::{Action, ActionDispatcher};
use printdock::filters::PillKind;
use printdock::prompt::Prompt;
use printdock::state::AppState;
use printdock::view::{GroupView, HistoryView, RowView, UNCATEGORIZED_HEADING};

mod api;
mod logging;
mod ui_utils;
use api::WebBackend;
use ui_utils::{GlooPause, WebPrompt};

const DROP_ZONE_ID: &str = "drop-zone";
const FILE_INPUT_ID: &str = "file-input";

pub fn main() {
    console_error_panic_hook::set_once();
    let cfg = ui_utils::web_config();
    logging::init(&cfg.logging.filter);
    tracing::info!("PrintDock UI, service at {:?}", cfg.backend.base_url);
    dioxus_web::launch::launch(app, vec![], Default::default());
}

fn app() -> Element {
    let state = use_signal(|| AppState::new(ui_utils::web_config().ui));

    // initial laden
    use_hook(move || run_remote(state, Action::Reload));
    use_hook(move || ui_utils::install_drop_zone(DROP_ZONE_ID, move |files| accept_files(state, files)));

    rsx! {
        div { class: "container",
            header { class: "app-header",
                h1 { "PrintDock" }
                p { class: "text-muted", "Upload PDFs, convert them and send them to the printer." }
            }
            UploadPanel { state }
            HistoryPanel { state }
        }
    }
}

// ----- Aktionen -----

/// Runs a backend action on a snapshot of the store.
///
/// The page stays interactive while the request (or a whole batch) runs. Only
/// what the action produced is taken over: the reloaded entries, and the filter
/// if the action changed it.
fn run_remote(mut state: Signal<AppState>, action: Action) {
    let (mut store, ui) = {
        let s = state.read();
        (s.store.clone(), s.ui.clone())
    };
    let started_with = store.filter().clone();
    spawn(async move {
        let backend = WebBackend::new(ui_utils::web_config().backend);
        let dispatcher = ActionDispatcher::new(&backend, &WebPrompt, &GlooPause, &ui);
        let outcome = dispatcher.perform(&mut store, action).await;
        if outcome.refreshed {
            state.write().apply_refreshed(&started_with, store);
        }
    });
}

fn start_upload(mut state: Signal<AppState>) {
    let Some(request) = state.write().upload.begin() else { return };
    let (mut store, ui) = {
        let s = state.read();
        (s.store.clone(), s.ui.clone())
    };
    let started_with = store.filter().clone();
    spawn(async move {
        let backend = WebBackend::new(ui_utils::web_config().backend);
        let dispatcher = ActionDispatcher::new(&backend, &WebPrompt, &GlooPause, &ui);
        let ok = dispatcher.upload(&mut store, request).await;
        let mut s = state.write();
        s.upload.finish(ok);
        if ok {
            s.apply_refreshed(&started_with, store);
        }
    });
}

fn accept_files(mut state: Signal<AppState>, list: FileList) {
    wasm_bindgen_futures::spawn_local(async move {
        let files = ui_utils::read_files(list).await;
        let result = state.write().upload.accept(files);
        match result {
            Ok(n) => tracing::debug!("{} PDF(s) ready", n),
            Err(e) => WebPrompt.alert(&e.user_message()),
        }
    });
}

fn local(mut state: Signal<AppState>, action: Action) {
    state.write().apply_local(&action);
}

// ----- Upload -----

#[component]
fn UploadPanel(state: Signal<AppState>) -> Element {
    let (status, ready, can_convert, label, folder) = {
        let s = state.read();
        (
            s.upload.status_text(),
            !s.upload.files().is_empty(),
            s.upload.can_convert(),
            s.upload.button_label(),
            s.upload.folder_input.clone(),
        )
    };
    let status_style = if ready { "color:var(--success);" } else { "color:var(--text-muted);" };

    rsx! {
        section { class: "panel",
            h2 { "Upload" }
            div { id: DROP_ZONE_ID, class: "drop-zone",
                onclick: move |_| ui_utils::open_file_picker(FILE_INPUT_ID),
                p { "Drag & drop PDFs here or click to choose" }
                span { class: "file-status", style: "{status_style}", "{status}" }
            }
            input { id: FILE_INPUT_ID, r#type: "file", accept: "application/pdf", multiple: true, hidden: true,
                onchange: move |_| {
                    if let Some(list) = ui_utils::input_files(FILE_INPUT_ID) {
                        if list.length() > 0 {
                            accept_files(state, list);
                        }
                    }
                }
            }
            div { class: "input-group",
                input { id: "folder-name", class: "form-control", value: "{folder}",
                    placeholder: "Folder name (optional)",
                    oninput: move |e: Event<FormData>| { let mut state = state; state.write().upload.folder_input = e.value(); } }
                button {
                    class: if can_convert { "btn btn-primary active" } else { "btn btn-primary" },
                    disabled: !can_convert,
                    onclick: move |_| start_upload(state),
                    "{label}"
                }
            }
        }
    }
}

// ----- Verlauf -----

#[component]
fn HistoryPanel(state: Signal<AppState>) -> Element {
    let (pills, view, select_all, bulk_label) = {
        let s = state.read();
        (s.pills(), s.view().clone(), s.selection.select_all_checked(), s.selection.bulk_print_label())
    };
    let has_rows = view.rows().next().is_some();

    rsx! {
        section { class: "panel",
            h2 { "History" }
            div { class: "filter-bar",
                for pill in pills {
                    match pill.kind.clone() {
                        PillKind::Select(filter) => rsx! {
                            button { key: "{pill.label}",
                                class: if pill.active { "filter-pill active" } else { "filter-pill" },
                                onclick: move |_| local(state, Action::SelectFilter(filter.clone())),
                                "{pill.label}"
                            }
                        },
                        PillKind::DeleteAll => rsx! {
                            button { key: "delete-all", class: "filter-pill filter-pill-danger",
                                style: "margin-left:auto;font-weight:600;",
                                onclick: move |_| run_remote(state, Action::DeleteAll),
                                "{pill.label}"
                            }
                        },
                    }
                }
            }
            div { class: "toolbar",
                label {
                    input { r#type: "checkbox", checked: select_all, disabled: !has_rows,
                        onchange: move |e: Event<FormData>| local(state, Action::ToggleAll(e.checked())) }
                    " Select all"
                }
                if let Some(label) = bulk_label {
                    button { class: "btn btn-primary",
                        onclick: move |_| {
                            let action = state.read().bulk_print_action();
                            if let Some(action) = action {
                                run_remote(state, action);
                            }
                        },
                        "{label}"
                    }
                }
            }
            div { class: "history-list",
                match view {
                    HistoryView::Empty { message } => rsx! {
                        div { style: "text-align:center;padding:20px;color:var(--text-muted);", "{message}" }
                    },
                    HistoryView::Flat { rows } => rsx! {
                        for row in rows {
                            FileRow { key: "{row.filename}", row: row.clone(), state }
                        }
                    },
                    HistoryView::Grouped { groups, uncategorized } => rsx! {
                        for group in groups {
                            FolderGroup { key: "{group.name}", group: group.clone(), state }
                        }
                        if !uncategorized.is_empty() {
                            div { class: "history-group-title", style: "padding:10px 0;color:var(--text-muted);",
                                span { "{UNCATEGORIZED_HEADING}" }
                            }
                            for row in uncategorized {
                                FileRow { key: "{row.filename}", row: row.clone(), state }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn FolderGroup(group: GroupView, state: Signal<AppState>) -> Element {
    let name = group.name.clone();
    let count = group.count();
    let (n1, n2, n3, n4) = (name.clone(), name.clone(), name.clone(), name.clone());

    rsx! {
        div { class: "history-group",
            div { class: "group-header", onclick: move |_| local(state, Action::ToggleGroup(n1.clone())),
                span { "{name} " span { class: "badge", style: "margin-left:8px;font-size:0.7em;opacity:0.8;", "{count}" } }
                button { class: "btn-sm-print",
                    onclick: move |e: MouseEvent| { e.stop_propagation(); run_remote(state, Action::PrintFolder(n2.clone())); },
                    "Print Folder"
                }
                button { class: "btn-sm-print", style: "background-color:#f59e0b;margin-left:10px;",
                    title: "Print All & Delete Folder",
                    onclick: move |e: MouseEvent| { e.stop_propagation(); run_remote(state, Action::PrintFolderThenDelete(n3.clone())); },
                    "Print + Delete"
                }
                button { class: "btn-sm-delete",
                    onclick: move |e: MouseEvent| { e.stop_propagation(); run_remote(state, Action::DeleteFolder(n4.clone())); },
                    "Delete Folder"
                }
            }
            if !group.collapsed {
                div { class: "group-content",
                    for row in group.rows.iter() {
                        FileRow { key: "{row.filename}", row: row.clone(), state }
                    }
                }
            }
        }
    }
}

#[component]
fn FileRow(row: RowView, state: Signal<AppState>) -> Element {
    let checked = state.read().selection.is_checked(&row.filename);
    let (f1, f2, f3) = (row.filename.clone(), row.filename.clone(), row.filename.clone());

    rsx! {
        div { class: "history-item",
            input { r#type: "checkbox", class: "file-checkbox", value: "{row.filename}", checked,
                onchange: move |e: Event<FormData>| local(state, Action::SetChecked { filename: f1.clone(), checked: e.checked() }) }
            div { class: "item-icon", "PDF" }
            div { class: "item-details",
                div { class: "item-name", title: "{row.display_name}", "{row.display_name}" }
                div { class: "item-meta",
                    span { "{row.date_label}" }
                    span { style: "margin-left:10px;font-size:0.8em;color:var(--text-muted);", "{row.size_label}" }
                }
            }
            button { class: "btn-item-print", onclick: move |_| run_remote(state, Action::PrintFile(f2.clone())), "Print" }
            button { class: "btn-item-delete", title: "Delete", onclick: move |_| run_remote(state, Action::DeleteFile(f3.clone())), "Delete" }
        }
    }
}
