use crate::config::Config;
use crate::device_image_source::interface::DeviceImageSourceEvent;
use crate::image_classifier::interface::Classification;
use crate::waste_mapper::disposal::{advice_for, DisposalAdvice};
use crate::waste_mapper::mapper::{map_to_waste_categories, CategorizedClassification, WasteCategory};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassifierState {
    #[default]
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceState {
    #[default]
    Disconnected,
    Connected,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryStates {
    pub classifier: ClassifierState,
    pub source: SourceState,
}

#[derive(Debug, Clone)]
pub enum Model {
    Initializing {
        boundary_states: BoundaryStates,
    },
    ClassifierOffline,
    AwaitingImage,
    Classifying {
        path: PathBuf,
        started: Instant,
    },
    ShowingResults {
        path: PathBuf,
        results: Vec<CategorizedClassification>,
        top_category: WasteCategory,
        advice: DisposalAdvice,
        shown_at: Instant,
    },
    ClassificationFailed {
        message: String,
        failed_at: Instant,
    },
}

#[derive(Debug)]
pub enum Msg {
    Tick(Instant),
    ClassifierLoadDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    ImageSourceEvent(DeviceImageSourceEvent),
    ClassifyDone(Result<Vec<Vec<Classification>>, Box<dyn std::error::Error + Send + Sync>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadClassifier,
    SubscribeToImageSourceEvents,
    SubscribeTick,
    ClassifyImage { path: PathBuf },
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model::Initializing {
            boundary_states: BoundaryStates::default(),
        },
        vec![
            Effect::LoadClassifier,
            Effect::SubscribeToImageSourceEvents,
            Effect::SubscribeTick,
        ],
    )
}

pub fn transition(config: &Config, model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match (model.clone(), msg) {
        // Startup: both boundaries must come up before images are accepted
        (Model::Initializing { mut boundary_states }, Msg::ClassifierLoadDone(Ok(()))) => {
            boundary_states.classifier = ClassifierState::Ready;
            ready_or_initializing(boundary_states)
        }
        (Model::Initializing { .. }, Msg::ClassifierLoadDone(Err(_))) => {
            (Model::ClassifierOffline, vec![])
        }
        (
            Model::Initializing { mut boundary_states },
            Msg::ImageSourceEvent(DeviceImageSourceEvent::Connected),
        ) => {
            boundary_states.source = SourceState::Connected;
            ready_or_initializing(boundary_states)
        }
        (
            Model::Initializing { mut boundary_states },
            Msg::ImageSourceEvent(DeviceImageSourceEvent::Disconnected),
        ) => {
            boundary_states.source = SourceState::Disconnected;
            (Model::Initializing { boundary_states }, vec![])
        }

        // A failed classifier load disables the feature for good
        (Model::ClassifierOffline, _) => (Model::ClassifierOffline, vec![]),

        (_, Msg::ImageSourceEvent(DeviceImageSourceEvent::Disconnected)) => (
            Model::Initializing {
                boundary_states: BoundaryStates {
                    classifier: ClassifierState::Ready,
                    source: SourceState::Disconnected,
                },
            },
            vec![],
        ),

        // A new image clears whatever was on screen and starts a
        // classification; drops while one is in flight fall through to the
        // default arm and are ignored
        (
            Model::AwaitingImage
            | Model::ShowingResults { .. }
            | Model::ClassificationFailed { .. },
            Msg::ImageSourceEvent(DeviceImageSourceEvent::ImageDropped(path)),
        ) => (
            Model::Classifying {
                path: path.clone(),
                started: Instant::now(),
            },
            vec![Effect::ClassifyImage { path }],
        ),

        (Model::Classifying { path, .. }, Msg::ClassifyDone(result)) => match result {
            Ok(frames) => {
                let classifications = frames.into_iter().next().unwrap_or_default();
                let mut results = map_to_waste_categories(
                    &config.keyword_rules,
                    &config.fallback_rules,
                    &classifications,
                );
                results.truncate(config.top_predictions);

                match results.first() {
                    Some(top) => {
                        let top_category = top.category;
                        (
                            Model::ShowingResults {
                                path,
                                advice: advice_for(top_category),
                                top_category,
                                results,
                                shown_at: Instant::now(),
                            },
                            vec![],
                        )
                    }
                    None => (
                        Model::ClassificationFailed {
                            message: "No objects recognized in image".to_string(),
                            failed_at: Instant::now(),
                        },
                        vec![],
                    ),
                }
            }
            Err(e) => (
                Model::ClassificationFailed {
                    message: format!("Error classifying image: {}", e),
                    failed_at: Instant::now(),
                },
                vec![],
            ),
        },

        // Default case; also keeps Tick flowing so elapsed-based rendering
        // refreshes
        _ => (model, vec![]),
    }
}

fn ready_or_initializing(boundary_states: BoundaryStates) -> (Model, Vec<Effect>) {
    if boundary_states.classifier == ClassifierState::Ready
        && boundary_states.source == SourceState::Connected
    {
        (Model::AwaitingImage, vec![])
    } else {
        (Model::Initializing { boundary_states }, vec![])
    }
}
