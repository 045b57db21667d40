//! 16×16 UI icons: genres, fixture types, navigation and connection status

use crate::draw::{Painter, Shape};
use crate::glyphs::GlyphSource;
use crate::output::AssetWriter;
use crate::palette::{GREEN, ORANGE, RED, WHITE};
use anyhow::Result;
use image::{Rgba, RgbaImage};

pub const ICON_SIZE: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconGroup {
    Genre,
    Fixture,
    Navigation,
    Status,
}

/// A named icon and the instructions that draw it
#[derive(Debug, Clone, Copy)]
pub struct IconSpec {
    pub name: &'static str,
    pub group: IconGroup,
    pub shapes: &'static [Shape],
}

const fn fill_rect(bbox: [i32; 4], fill: Rgba<u8>) -> Shape {
    Shape::Rectangle {
        bbox,
        fill: Some(fill),
        outline: None,
        width: 1,
    }
}

const fn fill_ellipse(bbox: [i32; 4], fill: Rgba<u8>) -> Shape {
    Shape::Ellipse {
        bbox,
        fill: Some(fill),
        outline: None,
        width: 1,
    }
}

const STATUS_DISC: [i32; 4] = [4, 4, 11, 11];

static ICONS: &[IconSpec] = &[
    // Genres
    IconSpec {
        name: "ic_genre_techno",
        group: IconGroup::Genre,
        shapes: &[fill_rect([4, 4, 11, 11], GREEN)],
    },
    IconSpec {
        name: "ic_genre_house",
        group: IconGroup::Genre,
        shapes: &[Shape::Polygon {
            points: &[(8, 2), (2, 8), (14, 8), (4, 8), (4, 14), (12, 14), (12, 8)],
            fill: Rgba([0, 100, 255, 255]),
        }],
    },
    IconSpec {
        name: "ic_genre_dnb",
        group: IconGroup::Genre,
        shapes: &[Shape::Ellipse {
            bbox: [2, 4, 13, 11],
            fill: None,
            outline: Some(RED),
            width: 1,
        }],
    },
    IconSpec {
        name: "ic_genre_ambient",
        group: IconGroup::Genre,
        shapes: &[fill_rect([2, 6, 13, 9], Rgba([150, 150, 255, 100]))],
    },
    IconSpec {
        name: "ic_genre_hiphop",
        group: IconGroup::Genre,
        shapes: &[fill_rect([4, 10, 11, 13], Rgba([255, 255, 0, 255]))],
    },
    IconSpec {
        name: "ic_genre_pop",
        group: IconGroup::Genre,
        shapes: &[Shape::Polygon {
            points: &[
                (8, 2),
                (10, 7),
                (15, 7),
                (11, 10),
                (13, 15),
                (8, 12),
                (3, 15),
                (5, 10),
                (1, 7),
                (6, 7),
            ],
            fill: Rgba([255, 100, 200, 255]),
        }],
    },
    IconSpec {
        name: "ic_genre_rock",
        group: IconGroup::Genre,
        shapes: &[Shape::Line {
            points: &[(4, 14), (4, 2), (12, 14), (12, 2)],
            ink: RED,
            width: 2,
        }],
    },
    IconSpec {
        name: "ic_genre_custom",
        group: IconGroup::Genre,
        shapes: &[Shape::Text {
            at: (4, 2),
            text: "?",
            ink: WHITE,
        }],
    },
    // Fixture types
    IconSpec {
        name: "ic_fixture_par",
        group: IconGroup::Fixture,
        shapes: &[fill_ellipse([4, 2, 11, 13], Rgba([100, 100, 100, 255]))],
    },
    IconSpec {
        name: "ic_fixture_moving_head",
        group: IconGroup::Fixture,
        shapes: &[
            fill_rect([4, 10, 11, 14], Rgba([80, 80, 80, 255])),
            fill_ellipse([3, 2, 12, 9], Rgba([120, 120, 120, 255])),
        ],
    },
    IconSpec {
        name: "ic_fixture_pixel_bar",
        group: IconGroup::Fixture,
        shapes: &[Shape::Rectangle {
            bbox: [1, 6, 14, 9],
            fill: Some(Rgba([50, 50, 50, 255])),
            outline: Some(Rgba([200, 200, 200, 255])),
            width: 1,
        }],
    },
    IconSpec {
        name: "ic_fixture_strobe",
        group: IconGroup::Fixture,
        shapes: &[Shape::Polygon {
            points: &[(8, 1), (14, 8), (8, 15), (2, 8)],
            fill: WHITE,
        }],
    },
    IconSpec {
        name: "ic_fixture_wash",
        group: IconGroup::Fixture,
        shapes: &[fill_ellipse([2, 2, 13, 13], Rgba([200, 200, 255, 150]))],
    },
    IconSpec {
        name: "ic_fixture_spot",
        group: IconGroup::Fixture,
        shapes: &[Shape::Ellipse {
            bbox: [5, 5, 10, 10],
            fill: Some(WHITE),
            outline: Some(Rgba([100, 100, 100, 255])),
            width: 1,
        }],
    },
    // Navigation
    IconSpec {
        name: "ic_nav_gear",
        group: IconGroup::Navigation,
        shapes: &[Shape::Ellipse {
            bbox: [3, 3, 12, 12],
            fill: None,
            outline: Some(Rgba([150, 150, 150, 255])),
            width: 2,
        }],
    },
    IconSpec {
        name: "ic_nav_chat",
        group: IconGroup::Navigation,
        shapes: &[fill_rect([2, 3, 13, 10], Rgba([200, 200, 200, 255]))],
    },
    IconSpec {
        name: "ic_nav_heart",
        group: IconGroup::Navigation,
        shapes: &[Shape::Polygon {
            points: &[(8, 14), (2, 7), (4, 3), (8, 5), (12, 3), (14, 7)],
            fill: Rgba([255, 50, 50, 255]),
        }],
    },
    // Connection status
    IconSpec {
        name: "ic_status_connected",
        group: IconGroup::Status,
        shapes: &[fill_ellipse(STATUS_DISC, GREEN)],
    },
    IconSpec {
        name: "ic_status_disconnected",
        group: IconGroup::Status,
        shapes: &[fill_ellipse(STATUS_DISC, RED)],
    },
    IconSpec {
        name: "ic_status_simulated",
        group: IconGroup::Status,
        shapes: &[fill_ellipse(STATUS_DISC, Rgba([0, 150, 255, 255]))],
    },
    IconSpec {
        name: "ic_status_live",
        group: IconGroup::Status,
        shapes: &[
            fill_ellipse(STATUS_DISC, ORANGE),
            Shape::Point {
                at: (8, 8),
                ink: WHITE,
            },
        ],
    },
];

/// Every icon, in generation order
pub fn icon_set() -> &'static [IconSpec] {
    ICONS
}

pub fn find_icon(name: &str) -> Option<&'static IconSpec> {
    ICONS.iter().find(|icon| icon.name == name)
}

pub fn render_icon(icon: &IconSpec, glyphs: &GlyphSource) -> RgbaImage {
    let mut canvas = Painter::blank(ICON_SIZE, ICON_SIZE);
    let mut painter = Painter::new(&mut canvas);
    for shape in icon.shapes {
        painter.shape(shape, glyphs);
    }
    canvas
}

pub fn generate_icons(writer: &mut AssetWriter, glyphs: &GlyphSource) -> Result<()> {
    println!("Generating icons...");
    for icon in icon_set() {
        let image = render_icon(icon, glyphs);
        writer.write(icon.name, "icons", &image)?;
    }
    Ok(())
}
