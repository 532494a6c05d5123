use crate::best_label::main::BestLabel;
use crate::classification_loop::core::{init, transition, Effect, Model, Msg, Phase};
use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::frame_source::interface::FrameSource;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// Feeds the newest camera frame to the classifier, one request at a time,
/// and publishes the confidence-gated result to [`BestLabel`].
///
/// The loop is an Elm-style state machine: [`transition`] decides, effects
/// run on worker threads and report back as [`Msg`]s. Only the
/// `Capturing -> Classifying -> Capturing` path issues work, so a second
/// classifier call cannot start before the first one has reported.
#[derive(Clone)]
pub struct ClassificationLoop {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub frame_source: Arc<dyn FrameSource + Send + Sync>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub best_label: BestLabel,
    model: Arc<Mutex<Model>>,
    msg_sender: Sender<Msg>,
    msg_receiver: Arc<Mutex<Receiver<Msg>>>,
}

impl ClassificationLoop {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        frame_source: Arc<dyn FrameSource + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        best_label: BestLabel,
    ) -> Self {
        let (msg_sender, msg_receiver) = channel();

        Self {
            config,
            logger: logger.with_namespace("classification_loop"),
            frame_source,
            image_classifier,
            device_display,
            best_label,
            model: Arc::new(Mutex::new(Model::default())),
            msg_sender,
            msg_receiver: Arc::new(Mutex::new(msg_receiver)),
        }
    }

    /// Runs for the lifetime of the process. Returns only on an
    /// infrastructure fault such as a broken display.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.start()?;

        loop {
            self.step()?;
        }
    }

    pub fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (model, effects) = init();

        let _ = self.logger.info(&format!(
            "Starting with min confidence {}",
            self.config.min_confidence
        ));

        self.render(&model)?;
        *self.model.lock().map_err(|e| e.to_string())? = model;
        self.execute_effects(effects);

        Ok(())
    }

    pub fn step(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let msg = self
            .msg_receiver
            .lock()
            .map_err(|e| e.to_string())?
            .recv()?;

        self.update(msg)
    }

    /// Snapshot of the loop state.
    pub fn model(&self) -> Model {
        match self.model.lock() {
            Ok(model) => model.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn update(&self, msg: Msg) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut model = self.model.lock().map_err(|e| e.to_string())?;

        let _ = self.logger.info(&format!("msg: {:?}", msg));

        let (new_model, effects) = transition(&self.config, model.clone(), msg);

        if let Phase::Classifying { frame_captured_at } = &model.phase {
            if !matches!(new_model.phase, Phase::Classifying { .. }) {
                let _ = self.logger.info(&format!(
                    "Classification done, frame age {:?}, {}",
                    frame_captured_at.elapsed(),
                    new_model.stats
                ));
            }
        }

        if new_model.best_label != model.best_label {
            self.publish(&new_model.best_label);
        }

        *model = new_model;
        self.render(&model)?;
        drop(model);

        self.execute_effects(effects);

        Ok(())
    }

    fn publish(&self, label: &str) {
        if label.is_empty() {
            let _ = self.logger.info("Best label cleared");
            self.best_label.clear();
        } else {
            let _ = self.logger.info(&format!("Best label: {}", label));
            self.best_label.set(label);
        }
    }

    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.run_effect(effect));
        }
    }

    pub fn send(&self, msg: Msg) {
        let _ = self.msg_sender.send(msg);
    }

    /// Runs the loop on its own thread.
    pub fn spawn(self) -> LoopThread {
        LoopThread {
            handle: Some(std::thread::spawn(move || self.run())),
        }
    }
}

/// Handle to a loop started with [`ClassificationLoop::spawn`].
pub struct LoopThread {
    handle: Option<JoinHandle<Result<(), Box<dyn std::error::Error + Send + Sync>>>>,
}

impl LoopThread {
    /// `Ok` while the loop is running. Once it has stopped, the reason it
    /// stopped is returned as an error.
    pub fn check(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let finished = match &self.handle {
            Some(handle) => handle.is_finished(),
            None => return Err("Classification loop is not running".into()),
        };
        if !finished {
            return Ok(());
        }

        match self.handle.take().map(JoinHandle::join) {
            Some(Ok(Err(e))) => Err(format!("Classification loop stopped: {}", e).into()),
            Some(Err(_)) => Err("Classification loop panicked".into()),
            _ => Err("Classification loop stopped".into()),
        }
    }
}

#[cfg(test)]
impl ClassificationLoop {
    /// Like [`ClassificationLoop::step`], but gives up after `timeout`.
    pub fn step_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let msg = match self
            .msg_receiver
            .lock()
            .map_err(|e| e.to_string())?
            .recv_timeout(timeout)
        {
            Ok(msg) => msg,
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                return Err(format!("no message within {:?}", timeout).into())
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                return Err("message channel closed".into())
            }
        };

        self.update(msg)
    }
}
