use crate::{
    error::{ImageGenError, Result},
    models::CachedImage,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const FILE_PREFIX: &str = "generated-image-";

pub fn file_name_for(timestamp_ms: i64) -> String {
    format!("{}{}.png", FILE_PREFIX, timestamp_ms)
}

/// Saves cached images as `generated-image-<unix-ms>.png` files.
#[derive(Debug, Clone)]
pub struct ImageDownloader {
    dir: PathBuf,
}

impl ImageDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save(&self, image: &CachedImage) -> Result<PathBuf> {
        let bytes = STANDARD
            .decode(image.data.trim())
            .map_err(|e| ImageGenError::Download(format!("Invalid base64 image data: {}", e)))?;

        fs::create_dir_all(&self.dir).map_err(|e| {
            ImageGenError::Download(format!("Cannot create {}: {}", self.dir.display(), e))
        })?;

        let transient = self
            .dir
            .join(format!(".{}{}.part", FILE_PREFIX, uuid::Uuid::new_v4()));

        let result = self.write_and_publish(&transient, &bytes);
        if result.is_err() {
            let _ = fs::remove_file(&transient);
        }
        result
    }

    fn write_and_publish(&self, transient: &Path, bytes: &[u8]) -> Result<PathBuf> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(transient)
            .map_err(|e| ImageGenError::Download(format!("Cannot create temp file: {}", e)))?;
        file.write_all(bytes)
            .and_then(|_| file.sync_all())
            .map_err(|e| ImageGenError::Download(format!("Write failed: {}", e)))?;
        drop(file);

        // Claim the final name with create_new so a concurrent save can't take it,
        // moving one millisecond forward on collision.
        let mut timestamp = Utc::now().timestamp_millis();
        loop {
            let target = self.dir.join(file_name_for(timestamp));
            match OpenOptions::new().write(true).create_new(true).open(&target) {
                Ok(_) => {
                    fs::rename(transient, &target).map_err(|e| {
                        let _ = fs::remove_file(&target);
                        ImageGenError::Download(format!("Rename failed: {}", e))
                    })?;
                    log::info!("Image saved to {} ({} bytes)", target.display(), bytes.len());
                    return Ok(target);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => timestamp += 1,
                Err(e) => {
                    return Err(ImageGenError::Download(format!(
                        "Cannot create {}: {}",
                        target.display(),
                        e
                    )))
                }
            }
        }
    }
}
