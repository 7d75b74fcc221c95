//! One-off interaction handlers: copy buttons, checklist, uploads, preloading
//!
//! None of these touch navigation state. Every failure ends in a toast; the
//! user retries by acting again.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Document, File, FileReader, HtmlDocument, HtmlElement, HtmlImageElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use super::dom::{Notifier, query_all};
use super::timers::after;
use crate::checklist::{COMPLETED_FILL, COMPLETED_MESSAGE, ChecklistProgress};
use crate::clipboard::{
    self, COPIED_BACKGROUND, COPIED_LABEL, CopyMethod, CopyStrategy, CopyTarget,
    RESTORED_BACKGROUND, resolve_copy,
};
use crate::config::ChecklistConfig;
use crate::error::{DeckError, Result};
use crate::notify::Notification;
use crate::upload::{self, UPLOADED_CLASS, UploadSlot, validate_image};

/// Copyable text lives in either an `<input>` or a `<textarea>`
#[derive(Clone)]
enum TextField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl TextField {
    fn find(document: &Document, id: &str) -> Option<Self> {
        let el = document.get_element_by_id(id)?;
        match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(TextField::Input(input)),
            Err(el) => el.dyn_into::<HtmlTextAreaElement>().ok().map(TextField::TextArea),
        }
    }

    fn value(&self) -> String {
        match self {
            TextField::Input(el) => el.value(),
            TextField::TextArea(el) => el.value(),
        }
    }

    fn select(&self) {
        match self {
            TextField::Input(el) => el.select(),
            TextField::TextArea(el) => el.select(),
        }
    }

    fn focus(&self) {
        let _ = match self {
            TextField::Input(el) => el.focus(),
            TextField::TextArea(el) => el.focus(),
        };
    }
}

/// Shared handles for the copy and upload handlers
#[derive(Clone)]
pub struct Actions {
    document: Document,
    notifier: Notifier,
    button_reset_ms: u32,
}

impl Actions {
    pub fn new(document: &Document, notifier: Notifier, button_reset_ms: u32) -> Self {
        Self {
            document: document.clone(),
            notifier,
            button_reset_ms,
        }
    }

    // === Clipboard ===

    pub fn copy(&self, target: CopyTarget) {
        let Some(field) = TextField::find(&self.document, target.field_id()) else {
            log::warn!("Copy target #{} not found", target.field_id());
            return;
        };

        let value = field.value();
        if let Err(e) = target.validate(&value) {
            report(&self.notifier, &e, clipboard::failure_message(&e));
            field.focus();
            return;
        }

        match target.strategy() {
            CopyStrategy::Legacy => {
                let result = legacy_copy(&self.document, &field).map(|()| CopyMethod::Legacy);
                self.finish_copy(target, result);
            }
            CopyStrategy::ClipboardApi => {
                let actions = self.clone();
                spawn_local(async move {
                    let primary = write_clipboard(&value).await;
                    let result = resolve_copy(primary, || legacy_copy(&actions.document, &field));
                    actions.finish_copy(target, result);
                });
            }
        }
    }

    fn finish_copy(&self, target: CopyTarget, result: Result<CopyMethod>) {
        match result {
            Ok(method) => {
                log::info!("Copied {:?} via {:?}", target, method);
                self.notifier.show(&Notification::success(target.success_message()));
                if target.flashes_on(method) {
                    self.flash_button(target);
                }
            }
            Err(e) => {
                report(&self.notifier, &e, clipboard::failure_message(&e));
            }
        }
    }

    /// Swap the button label for a confirmation, then restore it
    fn flash_button(&self, target: CopyTarget) {
        let Some(button) = self
            .document
            .query_selector(target.button_selector())
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        // Keep the real label across repeated clicks
        let label = match button.get_attribute("data-label") {
            Some(label) => label,
            None => {
                let label = button.text_content().unwrap_or_default();
                let _ = button.set_attribute("data-label", &label);
                label
            }
        };

        button.set_text_content(Some(COPIED_LABEL));
        let _ = button.style().set_property("background", COPIED_BACKGROUND);

        after(self.button_reset_ms, move || {
            button.set_text_content(Some(&label));
            let _ = button.style().set_property("background", RESTORED_BACKGROUND);
        });
    }

    // === Uploads ===

    /// Wire every upload slot present in the markup
    pub fn setup_uploads(&self) {
        for slot in UploadSlot::ALL {
            let Some(input) = self
                .document
                .get_element_by_id(slot.input_id())
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                log::debug!("No upload input #{}", slot.input_id());
                continue;
            };

            let actions = self.clone();
            let input_clone = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let Some(file) = input_clone.files().and_then(|files| files.get(0)) else {
                    return;
                };
                if let Err(e) = validate_image(&file.type_()) {
                    report(&actions.notifier, &e, upload::failure_message(&e));
                    input_clone.set_value("");
                    return;
                }
                actions.read_image(slot, file);
            });
            let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
            log::info!("Upload slot {:?} ready", slot);
        }
    }

    fn read_image(&self, slot: UploadSlot, file: File) {
        let reader = match FileReader::new() {
            Ok(reader) => reader,
            Err(e) => {
                let err = DeckError::FileRead(DeckError::describe_js(&e));
                report(&self.notifier, &err, upload::failure_message(&err));
                return;
            }
        };

        let onload = {
            let actions = self.clone();
            let reader = reader.clone();
            Closure::once_into_js(move || {
                match reader.result().ok().and_then(|v| v.as_string()) {
                    Some(url) => actions.place_image(slot, &url),
                    None => {
                        let err = DeckError::FileRead("empty result".into());
                        report(&actions.notifier, &err, upload::failure_message(&err));
                    }
                }
            })
        };
        let onerror = {
            let notifier = self.notifier.clone();
            let name = file.name();
            Closure::once_into_js(move || {
                let err = DeckError::FileRead(name);
                report(&notifier, &err, upload::failure_message(&err));
            })
        };
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));

        if let Err(e) = reader.read_as_data_url(&file) {
            let err = DeckError::FileRead(DeckError::describe_js(&e));
            report(&self.notifier, &err, upload::failure_message(&err));
        }
    }

    fn place_image(&self, slot: UploadSlot, data_url: &str) {
        let Some(placeholder) = self.document.get_element_by_id(slot.placeholder_id()) else {
            let err = DeckError::MissingElement(slot.placeholder_id().to_string());
            log::warn!("{}", err);
            return;
        };
        let Ok(img) = HtmlImageElement::new() else {
            return;
        };
        img.set_src(data_url);
        img.set_alt(slot.alt_text());
        img.set_class_name(UPLOADED_CLASS);

        placeholder.set_inner_html("");
        if placeholder.append_child(&img).is_ok() {
            let _ = placeholder.class_list().add_1("has-image");
            self.notifier.show(&Notification::success(slot.success_message()));
        }
    }
}

/// Log the cause of a failed action and show its toast
fn report(notifier: &Notifier, err: &DeckError, message: &str) {
    log::warn!("{}", err);
    notifier.show(&Notification::error(message));
}

/// Async Clipboard API write
async fn write_clipboard(text: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| DeckError::Clipboard("no window".into()))?;

    // Missing outside secure contexts
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .ok_or_else(|| DeckError::Clipboard("clipboard API unavailable".into()))?;
    let clipboard: web_sys::Clipboard = clipboard.unchecked_into();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| DeckError::Clipboard(DeckError::describe_js(&e)))
}

/// Select the field and run `document.execCommand("copy")`
fn legacy_copy(document: &Document, field: &TextField) -> Result<()> {
    field.select();
    let html_doc = document
        .dyn_ref::<HtmlDocument>()
        .ok_or(DeckError::LegacyCopy)?;
    match html_doc.exec_command("copy") {
        Ok(true) => Ok(()),
        _ => Err(DeckError::LegacyCopy),
    }
}

/// Wire the checklist progress bar. Returns false when the slide has no
/// checklist markup.
pub fn setup_checklist(document: &Document, config: &ChecklistConfig, notifier: Notifier) -> bool {
    let boxes: Vec<HtmlInputElement> = query_all(document, &config.checkbox_selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .collect();
    let fill = document
        .get_element_by_id(&config.fill_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let text = document.get_element_by_id(&config.text_id);

    let (Some(fill), Some(text)) = (fill, text) else {
        log::info!("No checklist progress elements, checklist disabled");
        return false;
    };
    if boxes.is_empty() {
        log::info!("No checklist checkboxes, checklist disabled");
        return false;
    }

    let progress = Rc::new(RefCell::new(ChecklistProgress::new(boxes.len())));
    let boxes = Rc::new(boxes);

    let closure = {
        let boxes = boxes.clone();
        Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let checked = boxes.iter().filter(|b| b.checked()).count();
            let update = progress.borrow_mut().update(checked);

            let style = fill.style();
            let _ = style.set_property("width", &update.fill_width());
            text.set_text_content(Some(&update.label()));

            if update.just_completed {
                notifier.show(&Notification::success(COMPLETED_MESSAGE));
                let _ = style.set_property("background", COMPLETED_FILL);
            } else if update.just_reopened {
                let _ = style.remove_property("background");
            }
        })
    };
    for checkbox in boxes.iter() {
        let _ = checkbox.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    }
    closure.forget();

    log::info!("Checklist ready ({} items)", boxes.len());
    true
}

/// Start fetching images used by later slides
pub fn preload_images(urls: &[String]) {
    for url in urls {
        if let Ok(img) = HtmlImageElement::new() {
            img.set_src(url);
        }
    }
    if !urls.is_empty() {
        log::info!("Preloading {} images", urls.len());
    }
}
