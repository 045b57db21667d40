use crate::manifest::{AssetEntry, FrameEntry};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Writes named PNG assets into one directory and keeps a record of them
#[derive(Debug)]
pub struct AssetWriter {
    out_dir: PathBuf,
    written: Vec<AssetEntry>,
}

impl AssetWriter {
    /// Create the writer, making sure the output directory exists
    pub fn new(out_dir: impl Into<PathBuf>) -> Result<Self> {
        let out_dir = out_dir.into();
        create_dir_all(&out_dir).context("Can't create output directory")?;
        Ok(Self {
            out_dir,
            written: Vec::new(),
        })
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Write `<name>.png`, replacing any existing file
    pub fn write(&mut self, name: &str, group: &str, image: &RgbaImage) -> Result<PathBuf> {
        self.write_entry(
            AssetEntry::new(name.to_string(), group.to_string(), image.width(), image.height()),
            image,
        )
    }

    /// Write a sprite sheet along with the location of each frame
    pub fn write_sheet(
        &mut self,
        name: &str,
        group: &str,
        image: &RgbaImage,
        frames: Vec<FrameEntry>,
    ) -> Result<PathBuf> {
        let entry =
            AssetEntry::new(name.to_string(), group.to_string(), image.width(), image.height())
                .with_frames(frames);
        self.write_entry(entry, image)
    }

    /// Everything written so far, in order
    pub fn written(&self) -> &[AssetEntry] {
        &self.written
    }

    pub fn into_written(self) -> Vec<AssetEntry> {
        self.written
    }

    fn write_entry(&mut self, entry: AssetEntry, image: &RgbaImage) -> Result<PathBuf> {
        let output_path = self.out_dir.join(&entry.filename);
        save_png(image, &output_path)?;
        println!("  ✓ Generated {}", entry.filename);
        self.written.push(entry);
        Ok(output_path)
    }
}

/// Encode `image` to `path`. The file handle lives only inside this call and
/// is flushed before returning.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file: {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(image.as_raw(), &mut out_file, image.width(), image.height())
        .with_context(|| format!("Failed to write PNG: {}", path.display()))?;
    out_file.flush().context("Failed to flush PNG file")?;
    Ok(())
}

// Encode RGBA8 data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, ColorType::Rgba8)?;
    Ok(())
}
