pub mod asset_gen;
pub mod draw;
pub mod glyphs;
pub mod icons;
pub mod manifest;
pub mod mascot;
pub mod onboarding;
pub mod output;
pub mod palette;
