use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::device_image_source::interface::DeviceImageSource;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::smart_sorter::core::{init, transition, Effect, Model, Msg};
use crate::smart_sorter::render::Render;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct SmartSorter {
    pub model: Arc<Mutex<Model>>,
    pub msg_sender: Sender<Msg>,
    pub msg_receiver: Arc<Mutex<Receiver<Msg>>>,
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_image_source: Arc<dyn DeviceImageSource + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub render: Render,
}

impl SmartSorter {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_image_source: Arc<dyn DeviceImageSource + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        let (msg_sender, msg_receiver) = channel();
        let (initial_model, _) = init();
        let render = Render::new(device_display.clone(), config.clone());

        Self {
            model: Arc::new(Mutex::new(initial_model)),
            msg_sender,
            msg_receiver: Arc::new(Mutex::new(msg_receiver)),
            config,
            logger,
            device_image_source,
            device_display,
            image_classifier,
            render,
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.interpret_effect(effect));
        }
    }

    fn run_loop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (initial_model, initial_effects) = init();
        *self.model.lock().unwrap() = initial_model.clone();

        self.spawn_effects(initial_effects);

        let mut current_model = initial_model;

        loop {
            let msg = self.msg_receiver.lock().unwrap().recv()?;

            let is_tick = matches!(msg, Msg::Tick(_));
            if !is_tick {
                let _ = self
                    .logger
                    .info(&format!("model: {:?}\nmsg: {:?}", current_model, msg));
            }

            let (new_model, effects) = transition(&self.config, current_model, msg);

            if !is_tick {
                let _ = self
                    .logger
                    .info(&format!("new model: {:?}\neffects: {:?}", new_model, effects));
            }

            current_model = new_model.clone();
            *self.model.lock().unwrap() = new_model;

            self.render.render(&current_model)?;

            self.spawn_effects(effects);
        }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_display.lock().unwrap().init()?;
        self.run_loop()
    }
}
