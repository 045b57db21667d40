use anyhow::{Context, Result};
use asset_gen::asset_gen::DEFAULT_OUTPUT_DIR;
use asset_gen::icons::{icon_set, ICON_SIZE};
use asset_gen::mascot::{SHEET_HEIGHT, SHEET_NAME, SHEET_WIDTH};
use asset_gen::onboarding::{OnboardingAsset, SCATTER_PIXELS};
use std::path::PathBuf;

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    println!("Checking assets in: {}", dir.display());

    let mut expected: Vec<(String, u32, u32)> = icon_set()
        .iter()
        .map(|icon| (icon.name.to_string(), ICON_SIZE, ICON_SIZE))
        .collect();
    expected.push((SHEET_NAME.to_string(), SHEET_WIDTH, SHEET_HEIGHT));
    for asset in OnboardingAsset::ALL {
        expected.push((asset.name().to_string(), asset.size(), asset.size()));
    }

    let mut problems = 0;
    for (name, width, height) in &expected {
        let path = dir.join(format!("{name}.png"));
        if !path.exists() {
            println!("  ✗ {name}.png is missing");
            problems += 1;
            continue;
        }

        let img = image::open(&path)
            .with_context(|| format!("Failed to decode {}", path.display()))?
            .to_rgba8();
        if img.dimensions() != (*width, *height) {
            println!(
                "  ✗ {name}.png is {}x{}, expected {width}x{height}",
                img.width(),
                img.height()
            );
            problems += 1;
            continue;
        }

        if name == OnboardingAsset::ScatteredLogo.name() {
            let lit = img.pixels().filter(|p| p[3] != 0).count();
            if lit != SCATTER_PIXELS {
                println!("  ✗ {name}.png has {lit} pixels, expected {SCATTER_PIXELS}");
                problems += 1;
                continue;
            }
        }

        println!("  ✓ {name}.png {width}x{height}");
    }

    println!("\n{} of {} assets look right", expected.len() - problems, expected.len());
    if problems > 0 {
        anyhow::bail!("{problems} asset(s) failed verification");
    }
    Ok(())
}
