use crate::device_image_source::interface::{DeviceImageSource, DeviceImageSourceEvent};
use crate::library::logger::interface::Logger;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::Duration;

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

pub(crate) fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| IMAGE_EXTENSIONS.contains(&extension.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Watches a directory for newly dropped image files. Files already present
/// when the watcher connects are not reported.
pub struct DeviceImageSourceDropDir {
    dir: PathBuf,
    poll_rate: Duration,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceImageSourceDropDir {
    pub fn new(dir: PathBuf, poll_rate: Duration, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            dir,
            poll_rate,
            logger: logger
                .with_namespace("image_source")
                .with_namespace("drop_dir"),
        }
    }
}

fn image_files_in(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_image_file(path))
        .collect();
    paths.sort();
    Ok(paths)
}

impl DeviceImageSource for DeviceImageSourceDropDir {
    fn events(&self) -> Receiver<DeviceImageSourceEvent> {
        let (tx, rx) = channel();
        let dir = self.dir.clone();
        let poll_rate = self.poll_rate;
        let logger = self.logger.clone();

        std::thread::spawn(move || {
            if let Err(e) = std::fs::create_dir_all(&dir) {
                let _ = logger.error(&format!("Failed to create dropzone: {}", e));
                return;
            }

            let mut seen: HashSet<PathBuf> =
                image_files_in(&dir).unwrap_or_default().into_iter().collect();

            let _ = logger.info(&format!("Watching {}", dir.display()));
            if tx.send(DeviceImageSourceEvent::Connected).is_err() {
                return;
            }

            loop {
                std::thread::sleep(poll_rate);

                let paths = match image_files_in(&dir) {
                    Ok(paths) => paths,
                    Err(_) => {
                        let _ = tx.send(DeviceImageSourceEvent::Disconnected);
                        if std::fs::create_dir_all(&dir).is_ok()
                            && tx.send(DeviceImageSourceEvent::Connected).is_ok()
                        {
                            seen.clear();
                            continue;
                        }
                        return;
                    }
                };

                for path in paths {
                    if seen.insert(path.clone()) {
                        let _ = logger.info(&format!("Image dropped: {}", path.display()));
                        if tx.send(DeviceImageSourceEvent::ImageDropped(path)).is_err() {
                            return;
                        }
                    }
                }
            }
        });

        rx
    }
}
