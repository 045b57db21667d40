use anyhow::Result;
use asset_gen::asset_gen::{generate_assets, Args as GenerateArgs, DEFAULT_OUTPUT_DIR};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "asset-gen",
    about = "Generate the app's pixel-art icons, mascot sprite sheet and onboarding art"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Generate the 16x16 UI icons
    #[clap(long)]
    icons: bool,

    /// Generate the mascot sprite sheet
    #[clap(long)]
    mascot: bool,

    /// Generate the onboarding logos and scan overlays
    #[clap(long)]
    onboarding: bool,

    /// Seed for the scattered logo. A fresh seed is used on every run when omitted.
    #[clap(long, value_name = "N")]
    seed: Option<u64>,

    /// TrueType font for text glyphs instead of the built-in bitmap font
    #[clap(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Also write a JSON manifest describing every generated asset
    #[clap(long, value_name = "FILE")]
    manifest: Option<PathBuf>,
}

impl From<Args> for GenerateArgs {
    fn from(args: Args) -> Self {
        Self {
            output: args.output,
            icons: args.icons,
            mascot: args.mascot,
            onboarding: args.onboarding,
            seed: args.seed,
            font: args.font,
            manifest: args.manifest,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    generate_assets(args.into())
}
