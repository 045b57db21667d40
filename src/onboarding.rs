//! Onboarding art: the logo in its assembled and scattered forms, plus the
//! small overlay pieces used by the network and fixture scan screens.

use crate::draw::Painter;
use crate::output::AssetWriter;
use crate::palette::{CYAN, WHITE};
use anyhow::Result;
use image::{Rgba, RgbaImage};
use rand::Rng;

pub const LOGO_SIZE: u32 = 32;
pub const OVERLAY_SIZE: u32 = 16;

/// Number of pixels sprinkled over the scattered logo
pub const SCATTER_PIXELS: usize = 50;

pub fn render_assembled_logo() -> RgbaImage {
    let mut logo = Painter::blank(LOGO_SIZE, LOGO_SIZE);
    let mut painter = Painter::new(&mut logo);
    painter.rectangle([4, 4, 27, 27], None, Some(CYAN), 2);
    painter.rectangle([8, 8, 23, 23], Some(Rgba([255, 0, 255, 100])), None, 1);
    logo
}

/// Logo pieces before they fly together: distinct random pixels drawn from `rng`
pub fn render_scattered_logo<R: Rng + ?Sized>(rng: &mut R) -> RgbaImage {
    let mut logo = Painter::blank(LOGO_SIZE, LOGO_SIZE);
    let mut painter = Painter::new(&mut logo);

    let cells = (LOGO_SIZE * LOGO_SIZE) as usize;
    for i in rand::seq::index::sample(rng, cells, SCATTER_PIXELS) {
        let x = (i as u32 % LOGO_SIZE) as i32;
        let y = (i as u32 / LOGO_SIZE) as i32;
        painter.point(x, y, CYAN);
    }

    logo
}

pub fn render_scan_wire() -> RgbaImage {
    let mut wire = Painter::blank(OVERLAY_SIZE, OVERLAY_SIZE);
    Painter::new(&mut wire).line(&[(0, 8), (15, 8)], Rgba([100, 100, 100, 255]), 1);
    wire
}

pub fn render_scan_node() -> RgbaImage {
    let mut node = Painter::blank(OVERLAY_SIZE, OVERLAY_SIZE);
    Painter::new(&mut node).rectangle([4, 4, 11, 11], Some(Rgba([0, 200, 0, 255])), Some(WHITE), 1);
    node
}

/// Top and left edges of a grid cell; tiles into a full grid
pub fn render_scan_grid() -> RgbaImage {
    let mut grid = Painter::blank(OVERLAY_SIZE, OVERLAY_SIZE);
    let mut painter = Painter::new(&mut grid);
    let faint = Rgba([255, 255, 255, 50]);
    painter.line(&[(0, 0), (15, 0)], faint, 1);
    painter.line(&[(0, 0), (0, 15)], faint, 1);
    grid
}

pub fn render_scan_highlight() -> RgbaImage {
    let mut highlight = Painter::blank(OVERLAY_SIZE, OVERLAY_SIZE);
    Painter::new(&mut highlight).ellipse([2, 2, 13, 13], None, Some(Rgba([255, 255, 0, 200])), 2);
    highlight
}

/// Every onboarding image, in the order a run writes them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingAsset {
    AssembledLogo,
    ScatteredLogo,
    ScanWire,
    ScanNode,
    ScanGrid,
    ScanHighlight,
}

impl OnboardingAsset {
    pub const ALL: [OnboardingAsset; 6] = [
        OnboardingAsset::AssembledLogo,
        OnboardingAsset::ScatteredLogo,
        OnboardingAsset::ScanWire,
        OnboardingAsset::ScanNode,
        OnboardingAsset::ScanGrid,
        OnboardingAsset::ScanHighlight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OnboardingAsset::AssembledLogo => "logo_assembled",
            OnboardingAsset::ScatteredLogo => "logo_scattered",
            OnboardingAsset::ScanWire => "scan_wire",
            OnboardingAsset::ScanNode => "scan_node",
            OnboardingAsset::ScanGrid => "scan_grid",
            OnboardingAsset::ScanHighlight => "scan_highlight",
        }
    }

    /// Edge length of the square image
    pub fn size(self) -> u32 {
        match self {
            OnboardingAsset::AssembledLogo | OnboardingAsset::ScatteredLogo => LOGO_SIZE,
            _ => OVERLAY_SIZE,
        }
    }

    /// Only the scattered logo consumes `rng`
    pub fn render<R: Rng + ?Sized>(self, rng: &mut R) -> RgbaImage {
        match self {
            OnboardingAsset::AssembledLogo => render_assembled_logo(),
            OnboardingAsset::ScatteredLogo => render_scattered_logo(rng),
            OnboardingAsset::ScanWire => render_scan_wire(),
            OnboardingAsset::ScanNode => render_scan_node(),
            OnboardingAsset::ScanGrid => render_scan_grid(),
            OnboardingAsset::ScanHighlight => render_scan_highlight(),
        }
    }
}

pub fn generate_onboarding<R: Rng + ?Sized>(writer: &mut AssetWriter, rng: &mut R) -> Result<()> {
    println!("Generating onboarding assets...");
    for asset in OnboardingAsset::ALL {
        writer.write(asset.name(), "onboarding", &asset.render(rng))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::CLEAR;
    use rand::{rngs::StdRng, SeedableRng};

    fn opaque(img: &RgbaImage) -> Vec<(u32, u32)> {
        img.enumerate_pixels()
            .filter(|(_, _, p)| p[3] != 0)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_assembled_logo_layers() {
        let logo = render_assembled_logo();
        assert_eq!(logo.dimensions(), (32, 32));

        assert_eq!(*logo.get_pixel(4, 4), CYAN);
        assert_eq!(*logo.get_pixel(5, 16), CYAN);
        assert_eq!(*logo.get_pixel(6, 16), CLEAR);
        assert_eq!(*logo.get_pixel(16, 16), Rgba([255, 0, 255, 100]));
        assert_eq!(*logo.get_pixel(0, 0), CLEAR);
    }

    #[test]
    fn test_scattered_logo_has_fifty_pixels() {
        let mut rng = StdRng::seed_from_u64(7);
        let logo = render_scattered_logo(&mut rng);

        let pixels = opaque(&logo);
        assert_eq!(pixels.len(), SCATTER_PIXELS);
        assert!(pixels.iter().all(|&(x, y)| x < 32 && y < 32));
        assert!(logo.pixels().all(|p| *p == CYAN || *p == CLEAR));
    }

    #[test]
    fn test_scattered_logo_follows_seed() {
        let a = render_scattered_logo(&mut StdRng::seed_from_u64(42));
        let b = render_scattered_logo(&mut StdRng::seed_from_u64(42));
        let c = render_scattered_logo(&mut StdRng::seed_from_u64(43));

        assert_eq!(a, b);
        assert_ne!(opaque(&a), opaque(&c));
    }

    #[test]
    fn test_scan_wire_is_one_row() {
        let wire = render_scan_wire();
        let pixels = opaque(&wire);
        assert_eq!(pixels.len(), 16);
        assert!(pixels.iter().all(|&(_, y)| y == 8));
    }

    #[test]
    fn test_scan_node_outline() {
        let node = render_scan_node();
        assert_eq!(*node.get_pixel(4, 4), WHITE);
        assert_eq!(*node.get_pixel(11, 7), WHITE);
        assert_eq!(*node.get_pixel(7, 7), Rgba([0, 200, 0, 255]));
        assert_eq!(opaque(&node).len(), 64);
    }

    #[test]
    fn test_scan_grid_edges() {
        let grid = render_scan_grid();
        let faint = Rgba([255, 255, 255, 50]);

        assert_eq!(opaque(&grid).len(), 31);
        assert_eq!(*grid.get_pixel(15, 0), faint);
        assert_eq!(*grid.get_pixel(0, 15), faint);
        assert_eq!(*grid.get_pixel(1, 1), CLEAR);
    }

    #[test]
    fn test_scan_highlight_ring() {
        let highlight = render_scan_highlight();
        let ring = Rgba([255, 255, 0, 200]);

        assert_eq!(*highlight.get_pixel(2, 7), ring);
        assert_eq!(*highlight.get_pixel(13, 8), ring);
        assert_eq!(*highlight.get_pixel(7, 7), CLEAR);
        assert_eq!(*highlight.get_pixel(0, 0), CLEAR);
    }

    #[test]
    fn test_catalogue_matches_written_files() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut writer = AssetWriter::new(temp_dir.path()).unwrap();
        generate_onboarding(&mut writer, &mut StdRng::seed_from_u64(1)).unwrap();

        let written = writer.into_written();
        assert_eq!(written.len(), OnboardingAsset::ALL.len());
        for (entry, asset) in written.iter().zip(OnboardingAsset::ALL) {
            assert_eq!(entry.name, asset.name());
            assert_eq!((entry.width, entry.height), (asset.size(), asset.size()));
            assert!(temp_dir.path().join(&entry.filename).exists());
        }
    }

    #[test]
    fn test_catalogue_renders_at_listed_size() {
        let mut rng = StdRng::seed_from_u64(3);
        for asset in OnboardingAsset::ALL {
            let img = asset.render(&mut rng);
            assert_eq!(img.dimensions(), (asset.size(), asset.size()), "{}", asset.name());
        }
    }
}
