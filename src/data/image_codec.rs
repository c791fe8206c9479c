use crate::engines::generation::genome::Genome;
use crate::error::{PixgeneError, Result};
use image::RgbImage;
use std::path::Path;

/// Converts between image files and genomes. Alpha is dropped on load.
pub struct ImageCodec;

impl ImageCodec {
    /// Decode any supported image file into an RGB genome
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Genome> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|source| PixgeneError::ImageLoad {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgb8();

        let (width, height) = img.dimensions();
        Genome::from_raw(width, height, img.into_raw()).ok_or_else(|| {
            PixgeneError::Codec(format!("Decoded buffer does not match {}x{}", width, height))
        })
    }

    /// Encode `genome` to `path`, creating parent directories. The format follows the extension.
    pub fn save<P: AsRef<Path>>(path: P, genome: &Genome) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let (width, height) = genome.dimensions();
        let img = RgbImage::from_raw(width, height, genome.channels().to_vec()).ok_or_else(|| {
            PixgeneError::Codec(format!("Genome buffer does not match {}x{}", width, height))
        })?;

        img.save(path).map_err(|source| PixgeneError::ImageSave {
            path: path.to_path_buf(),
            source,
        })
    }
}
