use crate::glyphs::GlyphSource;
use crate::icons::generate_icons;
use crate::manifest::write_manifest;
use crate::mascot::generate_mascot;
use crate::onboarding::generate_onboarding;
use crate::output::AssetWriter;
use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

/// Where the app's shared module picks up drawable resources
pub const DEFAULT_OUTPUT_DIR: &str = "shared/src/commonMain/composeResources/drawable";

// Library-side copy of the CLI options
#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub icons: bool,
    pub mascot: bool,
    pub onboarding: bool,
    pub seed: Option<u64>,
    pub font: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            icons: false,
            mascot: false,
            onboarding: false,
            seed: None,
            font: None,
            manifest: None,
        }
    }
}

/// Which generators a run will invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub icons: bool,
    pub mascot: bool,
    pub onboarding: bool,
}

impl Selection {
    /// No generator flag means everything
    pub fn from_args(args: &Args) -> Self {
        let has_generator_flags = args.icons || args.mascot || args.onboarding;
        if !has_generator_flags {
            return Self {
                icons: true,
                mascot: true,
                onboarding: true,
            };
        }

        Self {
            icons: args.icons,
            mascot: args.mascot,
            onboarding: args.onboarding,
        }
    }
}

pub fn generate_assets(args: Args) -> Result<()> {
    let selection = Selection::from_args(&args);
    // A bad --font is fatal whichever generators run
    let glyphs = GlyphSource::load(args.font.as_deref()).context("Failed to load font")?;
    let mut writer = AssetWriter::new(&args.output)?;

    if selection.icons {
        generate_icons(&mut writer, &glyphs)?;
    }

    if selection.mascot {
        generate_mascot(&mut writer)?;
    }

    if selection.onboarding {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        generate_onboarding(&mut writer, &mut rng)?;
    }

    let written = writer.into_written();
    let count = written.len();
    if let Some(path) = &args.manifest {
        println!("Generating manifest...");
        write_manifest(path, written)?;
    }

    println!("✓ Generated {} assets in {}", count, args.output.display());
    Ok(())
}
