use best_label::main::BestLabel;
use car_location::impl_json_file::CarLocationStoreJson;
use car_location::interface::Coordinate;
use classification_loop::main::{ClassificationLoop, LoopThread};
use config::Config;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use frame_source::impl_fake::{FrameSourceFake, FrameSourceFakeConfig};
use image_classifier::impl_fake::{ImageClassifierFake, ImageClassifierFakeConfig};
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use presentation::main::Presentation;
use presentation::scene::{TapOutcome, WorldPoint};
use std::sync::{Arc, Mutex};

mod best_label;
mod car_location;
mod classification_loop;
mod config;
mod device_display;
mod frame_source;
mod image_classifier;
mod library;
mod presentation;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let frame_source = Arc::new(FrameSourceFake::new(
        FrameSourceFakeConfig::default(),
        logger.clone(),
    ));

    let image_classifier = Arc::new(ImageClassifierFake::new(
        ImageClassifierFakeConfig::default(),
        logger.clone(),
    ));

    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> =
        if std::env::args().any(|arg| arg == "--gui") {
            Arc::new(Mutex::new(DeviceDisplayGui::new()))
        } else {
            Arc::new(Mutex::new(DeviceDisplayConsole::new()))
        };
    device_display.lock().map_err(|e| e.to_string())?.init()?;

    let best_label = BestLabel::new();

    let car_location_store = Arc::new(CarLocationStoreJson::new(
        config.car_location_path.clone(),
        logger.clone(),
    ));

    let mut presentation = Presentation::new(best_label.clone(), car_location_store, logger.clone());
    if let Err(e) = presentation.restore_car_location() {
        logger.error(&format!("Could not restore car location: {}", e))?;
    }

    let classification_loop = ClassificationLoop::new(
        config.clone(),
        logger.clone(),
        frame_source,
        image_classifier,
        device_display,
        best_label,
    );

    let mut loop_thread = classification_loop.spawn();

    let result = run_presentation(&config, &mut presentation, &mut loop_thread, logger.clone());
    if let Err(e) = &result {
        let _ = logger.error(&e.to_string());
    }
    result
}

/// Stands in for the user: taps the screen centre at the presentation's
/// own cadence and parks the car once. Stops when the classification loop
/// does.
fn run_presentation(
    config: &Config,
    presentation: &mut Presentation,
    loop_thread: &mut LoopThread,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    if std::env::args().any(|arg| arg == "--forget-car") {
        presentation.on_remove_all()?;
    }

    if presentation.saved_location().is_none() {
        presentation.on_save_location(Coordinate {
            latitude: 37.33182,
            longitude: -122.03118,
        })?;
    }

    loop {
        std::thread::sleep(config.presentation_poll_rate);

        // BestLabel never changes again once the loop is gone.
        loop_thread.check()?;

        // Hit tests miss when no feature points are in view.
        let hit = (rand::random::<f32>() < 0.8).then(|| WorldPoint {
            x: rand::random::<f32>() - 0.5,
            y: rand::random::<f32>() - 0.5,
            z: -1.0 - rand::random::<f32>() * 4.0,
        });

        if let TapOutcome::Placed(_) = presentation.on_tap(hit) {
            if let Some(detail) = presentation.on_learn_more() {
                logger.info(&format!("Learn more about {}", detail.car_name))?;
            }
        }
    }
}
