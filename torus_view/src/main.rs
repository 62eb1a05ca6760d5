// main.rs - egui front end for the torus_life engine

use std::error::Error;
use std::fs;
use std::sync::{Arc, OnceLock};

use eframe::egui;
use torus_life::{Controller, LifeConfig, Snapshot};

mod ui;

use ui::LifeView;

/// Reads a JSON `LifeConfig` from `path`, or the defaults when no path is given.
fn load_config(path: Option<String>) -> Result<LifeConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(LifeConfig::default());
    };
    let text = fs::read_to_string(&path)?;
    let config: LifeConfig = serde_json::from_str(&text)?;
    log::info!("loaded config from {path}");
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = load_config(std::env::args().nth(1))?;
    let runtime = tokio::runtime::Runtime::new()?;

    // The egui context only exists once the window is up; until then there is nothing to repaint
    let repaint = Arc::new(OnceLock::<egui::Context>::new());
    let hook = Arc::clone(&repaint);
    let controller = Controller::init_game(config, runtime.handle().clone(), move |_: &Snapshot| {
        if let Some(ctx) = hook.get() {
            ctx.request_repaint();
        }
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Torus Life",
        options,
        Box::new(move |cc| {
            let _ = repaint.set(cc.egui_ctx.clone());
            Box::new(LifeView::new(controller, runtime))
        }),
    )?;
    Ok(())
}
