#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 360.0])
            .with_min_inner_size([400.0, 300.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        "Audio Drop Picker",
        native_options,
        Box::new(|cc| {
            Ok(Box::new(audio_drop_picker::PickerApp::new(
                cc,
                audio_drop_picker::PickerConfig::default(),
            )))
        }),
    )
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use audio_drop_picker::picker::web;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let config = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => web::page_config(&document),
        None => {
            log::error!("No document to bind the file picker to");
            return;
        }
    };

    if let Err(e) = web::bind_document(config) {
        log::error!("Failed to bind file picker: {e}");
    }
}
