//! JSON manifest of generated assets
//!
//! Describes every PNG a run wrote: its name, file, pixel size and, for sprite
//! sheets, where each animation frame sits. Consumers can use it to slice the
//! mascot sheet without hard-coding the grid.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root structure of a manifest file
#[derive(Serialize, Debug, Clone)]
pub struct ManifestFile {
    /// One entry per written image, in generation order
    pub assets: Vec<AssetEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// A single generated image
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AssetEntry {
    /// Resource name the app loads the asset by (e.g. "ic_nav_gear")
    pub name: String,

    /// File name relative to the output directory
    pub filename: String,

    /// Generator that produced it ("icons", "mascot", "onboarding")
    pub group: String,

    pub width: u32,
    pub height: u32,

    /// Animation frames, only present for sprite sheets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<Vec<FrameEntry>>,
}

/// Position of one animation frame inside a sprite sheet
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FrameEntry {
    /// Animation state the frame belongs to (e.g. "idle")
    pub state: String,

    /// Frame number within the state, starting at 0
    pub index: u32,

    pub column: u32,
    pub row: u32,

    /// Pixel origin of the cell
    pub x: u32,
    pub y: u32,

    /// Cell edge length in pixels
    pub size: u32,
}

/// Bumped whenever the JSON layout changes
pub const MANIFEST_VERSION: u8 = 1;

#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// Manifest format version
    pub version: u8,

    /// Tool that wrote the manifest
    pub author: String,
}

impl ManifestFile {
    pub fn new(author: String) -> Self {
        Self {
            assets: Vec::new(),
            info: Info {
                version: MANIFEST_VERSION,
                author,
            },
        }
    }

    pub fn add_asset(&mut self, asset: AssetEntry) {
        self.assets.push(asset);
    }
}

impl AssetEntry {
    pub fn new(name: String, group: String, width: u32, height: u32) -> Self {
        Self {
            filename: format!("{name}.png"),
            name,
            group,
            width,
            height,
            frames: None,
        }
    }

    /// Attach sprite-sheet frame positions
    pub fn with_frames(mut self, frames: Vec<FrameEntry>) -> Self {
        self.frames = Some(frames);
        self
    }
}

impl Default for Info {
    fn default() -> Self {
        Self {
            version: MANIFEST_VERSION,
            author: "asset-gen".to_string(),
        }
    }
}

/// Writes the manifest JSON to `path`, creating parent directories as needed
pub fn write_manifest(path: &Path, assets: Vec<AssetEntry>) -> Result<()> {
    let manifest = ManifestFile {
        assets,
        info: Info::default(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).context("Can't create manifest directory")?;
    }

    let json = serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write manifest: {}", path.display()))?;

    println!("  ✓ Generated {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle_frame(index: u32) -> FrameEntry {
        FrameEntry {
            state: "idle".to_string(),
            index,
            column: index,
            row: 0,
            x: index * 16,
            y: 0,
            size: 16,
        }
    }

    #[test]
    fn test_asset_entry_filename_follows_name() {
        let entry = AssetEntry::new("ic_nav_gear".to_string(), "icons".to_string(), 16, 16);
        assert_eq!(entry.filename, "ic_nav_gear.png");
        assert!(entry.frames.is_none());
    }

    #[test]
    fn test_plain_asset_omits_frames() {
        let entry = AssetEntry::new("scan_wire".to_string(), "onboarding".to_string(), 16, 16);
        let json = serde_json::to_string_pretty(&entry).unwrap();

        assert!(json.contains("\"filename\": \"scan_wire.png\""));
        assert!(!json.contains("frames"));
    }

    #[test]
    fn test_sprite_sheet_serialization() {
        let mut manifest = ManifestFile::new("asset-gen".to_string());
        manifest.add_asset(
            AssetEntry::new("mascot_sprites".to_string(), "mascot".to_string(), 96, 64)
                .with_frames(vec![idle_frame(0), idle_frame(1)]),
        );

        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&json).expect("Generated JSON should be valid");

        assert_eq!(parsed["info"]["version"], 1);
        assert_eq!(parsed["info"]["author"], "asset-gen");
        let sheet = &parsed["assets"][0];
        assert_eq!(sheet["width"], 96);
        assert_eq!(sheet["height"], 64);
        assert_eq!(sheet["frames"].as_array().unwrap().len(), 2);
        assert_eq!(sheet["frames"][1]["state"], "idle");
        assert_eq!(sheet["frames"][1]["x"], 16);
    }

    #[test]
    fn test_write_manifest() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("assets.json");

        let assets = vec![
            AssetEntry::new("logo_assembled".to_string(), "onboarding".to_string(), 32, 32),
            AssetEntry::new("scan_grid".to_string(), "onboarding".to_string(), 16, 16),
        ];
        write_manifest(&path, assets).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("logo_assembled.png"));
        assert!(content.contains("scan_grid.png"));
        assert!(content.contains("\"version\": 1"));
    }

    #[test]
    fn test_written_info_matches_default() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("assets.json");
        write_manifest(&path, Vec::new()).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let info = Info::default();

        assert_eq!(info.version, MANIFEST_VERSION);
        assert_eq!(parsed["info"]["version"], MANIFEST_VERSION);
        assert_eq!(parsed["info"]["author"], info.author.as_str());
        assert_eq!(ManifestFile::new(info.author).info.version, MANIFEST_VERSION);
    }
}
