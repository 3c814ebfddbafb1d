use pharmaquiz::ui::layout::APP_TITLE;
use pharmaquiz::{QuizApp, QuizConfig};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = QuizConfig::resolve();
    log::info!("Starting {APP_TITLE} with questions from {}", config.source);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(QuizApp::new(&cc.egui_ctx, config)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let config = QuizConfig::resolve();
    log::info!("Starting {APP_TITLE} with questions from {}", config.source);

    wasm_bindgen_futures::spawn_local(async move {
        // nothing to run without the canvas
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("pharmaquiz_canvas"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            .expect("missing <canvas id=\"pharmaquiz_canvas\">");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(QuizApp::new(&cc.egui_ctx, config)))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("Failed to start {APP_TITLE}: {e:?}");
        }
    });
}
