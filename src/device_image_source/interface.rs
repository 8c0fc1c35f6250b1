use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum DeviceImageSourceEvent {
    Connected,
    Disconnected,
    ImageDropped(PathBuf),
}

pub trait DeviceImageSource {
    fn events(&self) -> std::sync::mpsc::Receiver<DeviceImageSourceEvent>;
}
