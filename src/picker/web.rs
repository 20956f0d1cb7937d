//! Browser host for the picker.
//!
//! Binds [`FilePickerWidget`] to the page's drop zone, file input and text
//! elements through `web_sys`, and registers the five event listeners.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, DragEvent, Element, Event, EventTarget, FileList, HtmlElement, HtmlInputElement,
    Window,
};

use super::config::{ElementIds, IntakeMode, PickerConfig};
use super::error::PickerError;
use super::extension::SelectedFile;
use super::surface::PickerSurface;
use super::widget::FilePickerWidget;

/// Drop zone attribute holding an optional JSON config override
pub const CONFIG_ATTRIBUTE: &str = "data-picker-config";

/// DOM elements backing the picker
pub struct DomSurface {
    window: Window,
    drop_area: HtmlElement,
    file_input: HtmlInputElement,
    file_name: Element,
    drop_text: Element,
}

impl DomSurface {
    /// Look up the four elements named in `config`
    pub fn from_document(
        window: Window,
        document: &Document,
        config: &PickerConfig,
    ) -> Result<Self, PickerError> {
        let ids = &config.element_ids;
        let drop_area: HtmlElement = cast(
            element_by_id(document, &ids.drop_area)?,
            &ids.drop_area,
            "HTML element",
        )?;
        let file_input: HtmlInputElement = cast(
            element_by_id(document, &ids.file_input)?,
            &ids.file_input,
            "file input",
        )?;
        let file_name = element_by_id(document, &ids.file_name)?;
        let drop_text = element_by_id(document, &ids.drop_text)?;

        Ok(Self {
            window,
            drop_area,
            file_input,
            file_name,
            drop_text,
        })
    }

    /// Hand the dropped file list to the input so a form submit sees it
    fn stage_files(&self, files: &FileList) {
        self.file_input.set_files(Some(files));
    }
}

impl PickerSurface for DomSurface {
    fn set_file_name_text(&mut self, text: &str) {
        self.file_name.set_text_content(Some(text));
    }

    fn file_name_text(&self) -> String {
        self.file_name.text_content().unwrap_or_default()
    }

    fn set_drop_text(&mut self, text: &str) {
        self.drop_text.set_text_content(Some(text));
    }

    fn drop_text(&self) -> String {
        self.drop_text.text_content().unwrap_or_default()
    }

    fn add_class(&mut self, class: &str) {
        if let Err(e) = self.drop_area.class_list().add_1(class) {
            log::warn!("{}", js_error("classList.add", &e));
        }
    }

    fn remove_class(&mut self, class: &str) {
        if let Err(e) = self.drop_area.class_list().remove_1(class) {
            log::warn!("{}", js_error("classList.remove", &e));
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.drop_area.class_list().contains(class)
    }

    fn clear_input(&mut self) {
        self.file_input.set_value("");
    }

    fn open_file_dialog(&mut self) {
        self.file_input.click();
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("{}", js_error("alert", &e));
        }
    }
}

/// Read the config override from the drop zone (looked up by its default id),
/// falling back to defaults
pub fn page_config(document: &Document) -> PickerConfig {
    let drop_area_id = ElementIds::default().drop_area;
    let Some(raw) = document
        .get_element_by_id(&drop_area_id)
        .and_then(|zone| zone.get_attribute(CONFIG_ATTRIBUTE))
    else {
        return PickerConfig::default();
    };

    match PickerConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring {}: {}", CONFIG_ATTRIBUTE, e);
            PickerConfig::default()
        }
    }
}

/// Bind the picker to the current page.
///
/// Listeners stay registered for the lifetime of the page.
pub fn bind_document(config: PickerConfig) -> Result<(), PickerError> {
    let window = web_sys::window().ok_or_else(|| PickerError::Js {
        context: "window".to_string(),
        message: "no global window".to_string(),
    })?;
    let document = window.document().ok_or_else(|| PickerError::Js {
        context: "document".to_string(),
        message: "window has no document".to_string(),
    })?;

    let surface = DomSurface::from_document(window, &document, &config)?;
    if config.intake_mode == IntakeMode::AudioOnly {
        surface
            .file_input
            .set_accept(&config.allowed_set().accept_attribute());
    }

    let drop_area: EventTarget = surface.drop_area.clone().into();
    let file_input: EventTarget = surface.file_input.clone().into();
    let widget = Rc::new(RefCell::new(FilePickerWidget::new(surface, config)));

    listen(&drop_area, "click", with_widget(&widget, |w, _event| {
        w.activate_picker();
    }))?;

    listen(&drop_area, "dragover", with_widget(&widget, |w, event| {
        event.prevent_default();
        w.highlight_on_dragover();
    }))?;

    listen(&drop_area, "dragleave", with_widget(&widget, |w, _event| {
        w.unhighlight_on_dragleave();
    }))?;

    listen(&drop_area, "drop", with_widget(&widget, |w, event| {
        event.prevent_default();
        let files = event
            .dyn_ref::<DragEvent>()
            .and_then(DragEvent::data_transfer)
            .and_then(|transfer| transfer.files());
        let names = files.as_ref().map(file_names).unwrap_or_default();
        w.handle_drop_staged(&names, |surface| {
            if let Some(list) = files.as_ref() {
                surface.stage_files(list);
            }
        });
    }))?;

    listen(&file_input, "change", with_widget(&widget, |w, _event| {
        let names = w
            .surface()
            .file_input
            .files()
            .as_ref()
            .map(file_names)
            .unwrap_or_default();
        w.handle_manual_selection(&names);
    }))?;

    log::info!(
        "File picker bound to #{}",
        widget.borrow().config().element_ids.drop_area
    );
    Ok(())
}

type DomWidget = FilePickerWidget<DomSurface>;

/// Wrap a handler so it runs with the shared widget borrowed.
///
/// Events fired synchronously from inside another handler (e.g. the input's
/// click bubbling to the drop zone) are skipped.
fn with_widget(
    widget: &Rc<RefCell<DomWidget>>,
    mut handler: impl FnMut(&mut DomWidget, &Event) + 'static,
) -> impl FnMut(Event) + 'static {
    let widget = Rc::clone(widget);
    move |event: Event| match widget.try_borrow_mut() {
        Ok(mut w) => handler(&mut w, &event),
        Err(_) => log::trace!("Skipping nested '{}' event", event.type_()),
    }
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), PickerError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| js_error(event, &e))?;
    closure.forget(); // Leak the closure to keep it alive
    Ok(())
}

fn file_names(files: &FileList) -> Vec<SelectedFile> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| SelectedFile::new(file.name()))
        .collect()
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, PickerError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PickerError::MissingElement { id: id.to_string() })
}

fn cast<T: JsCast>(element: Element, id: &str, expected: &str) -> Result<T, PickerError> {
    element
        .dyn_into::<T>()
        .map_err(|_| PickerError::WrongElementType {
            id: id.to_string(),
            expected: expected.to_string(),
        })
}

fn js_error(context: &str, value: &JsValue) -> PickerError {
    PickerError::Js {
        context: context.to_string(),
        message: value.as_string().unwrap_or_else(|| format!("{value:?}")),
    }
}
