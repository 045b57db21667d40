//! Shared colours

use image::Rgba;

pub const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
pub const CYAN: Rgba<u8> = Rgba([0, 255, 255, 255]);
pub const ORANGE: Rgba<u8> = Rgba([255, 165, 0, 255]);

// Mascot
pub const BODY: Rgba<u8> = Rgba([180, 200, 220, 255]);
pub const BODY_DARK: Rgba<u8> = Rgba([140, 160, 180, 255]);
pub const VISOR: Rgba<u8> = Rgba([30, 30, 40, 255]);
pub const EYE_GLOW: Rgba<u8> = CYAN;
pub const ALERT_RED: Rgba<u8> = RED;
