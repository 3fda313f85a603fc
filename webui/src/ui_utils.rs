use std::time::Duration;

use async_trait::async_trait;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, Element, FileList, HtmlElement, HtmlInputElement};

use printdock::config::{AppConfig, BackendConfig};
use printdock::prompt::Prompt;
use printdock::tasks::Pause;
use printdock::types::UploadFile;

/// Service used when the page is not served by the print service itself.
pub const REMOTE_BASE: &str = "https://printdock.ngrok-free.dev";

// Same-origin relative URLs on localhost, the tunnel otherwise
pub fn api_base() -> String {
    let host = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    if matches!(host.as_str(), "localhost" | "127.0.0.1") {
        String::new()
    } else {
        tracing::info!("Using remote server: {}", REMOTE_BASE);
        REMOTE_BASE.to_string()
    }
}

/// Defaults with the base URL resolved for this page.
pub fn web_config() -> AppConfig {
    AppConfig {
        backend: BackendConfig { base_url: api_base(), ..BackendConfig::default() },
        ..AppConfig::default()
    }
}

/// `window.confirm` / `window.alert`.
pub struct WebPrompt;

impl Prompt for WebPrompt {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(message);
        }
    }
}

/// setTimeout-backed pause.
pub struct GlooPause;

#[async_trait(?Send)]
impl Pause for GlooPause {
    async fn pause(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

// Read every file of a FileList into memory. Unreadable files are skipped.
pub async fn read_files(list: FileList) -> Vec<UploadFile> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        let Some(file) = list.item(i) else { continue };
        match JsFuture::from(file.array_buffer()).await {
            Ok(buf) => out.push(UploadFile {
                name: file.name(),
                mime: file.type_(),
                bytes: js_sys::Uint8Array::new(&buf).to_vec(),
            }),
            Err(e) => tracing::warn!("could not read {}: {:?}", file.name(), e),
        }
    }
    out
}

fn element(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Files currently chosen in an `<input type=file>`.
pub fn input_files(input_id: &str) -> Option<FileList> {
    element(input_id)?.dyn_into::<HtmlInputElement>().ok()?.files()
}

pub fn open_file_picker(input_id: &str) {
    if let Some(el) = element(input_id).and_then(|e| e.dyn_into::<HtmlElement>().ok()) {
        el.click();
    }
}

/// Wires drag & drop for the element `zone_id` on the document.
///
/// Dragging over the zone adds the `drag-over` class; dropping hands the
/// dropped files to `on_files`. The listeners live as long as the page.
pub fn install_drop_zone<F>(zone_id: &'static str, on_files: F)
where
    F: 'static + FnMut(FileList),
{
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else { return };

    let in_zone = move |ev: &DragEvent| -> Option<Element> {
        let target = ev.target()?.dyn_into::<Element>().ok()?;
        target.closest(&format!("#{}", zone_id)).ok().flatten()
    };

    let over = Closure::<dyn FnMut(DragEvent)>::new(move |ev: DragEvent| {
        if let Some(zone) = in_zone(&ev) {
            ev.prevent_default();
            let _ = zone.class_list().add_1("drag-over");
        }
    });
    let leave = Closure::<dyn FnMut(DragEvent)>::new(move |ev: DragEvent| {
        if let Some(zone) = in_zone(&ev) {
            let _ = zone.class_list().remove_1("drag-over");
        }
    });
    let mut on_files = on_files;
    let drop = Closure::<dyn FnMut(DragEvent)>::new(move |ev: DragEvent| {
        let Some(zone) = in_zone(&ev) else { return };
        ev.prevent_default();
        let _ = zone.class_list().remove_1("drag-over");
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            if files.length() > 0 {
                on_files(files);
            }
        }
    });

    let _ = doc.add_event_listener_with_callback("dragover", over.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("dragleave", leave.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("drop", drop.as_ref().unchecked_ref());
    // Page-lifetime listeners
    over.forget();
    leave.forget();
    drop.forget();
}
