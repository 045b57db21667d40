//! Mascot sprite sheet
//!
//! A 6×4 grid of 16×16 frames showing the robot mascot in six animation
//! states. Every frame is drawn by [`draw_robot`] from a [`Pose`]; the states
//! only differ in how the pose changes from frame to frame.
//!
//! Sheet layout:
//!
//! ```text
//!        col 0    col 1    col 2    col 3     col 4    col 5
//! row 0  idle     idle     idle     idle      dance 0  dance 1
//! row 1  think    think    think    think     dance 2  dance 3
//! row 2  happy    happy    happy    happy     dance 4  dance 5
//! row 3  alert    alert    alert    confused  confused confused
//! ```

use crate::draw::Painter;
use crate::manifest::FrameEntry;
use crate::output::AssetWriter;
use crate::palette::{ALERT_RED, BODY, BODY_DARK, EYE_GLOW, VISOR, WHITE};
use anyhow::Result;
use image::RgbaImage;

pub const FRAME_SIZE: u32 = 16;
pub const COLUMNS: u32 = 6;
pub const ROWS: u32 = 4;
pub const SHEET_WIDTH: u32 = COLUMNS * FRAME_SIZE;
pub const SHEET_HEIGHT: u32 = ROWS * FRAME_SIZE;

pub const SHEET_NAME: &str = "mascot_sprites";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Eyes {
    /// Two glowing pixels in the middle of the visor
    #[default]
    Normal,
    /// A single glow dot orbiting the visor; the value picks the position
    Thinking(u32),
    /// Upturned "^^" arcs
    Happy,
    /// Red bar
    Alert,
    /// One glowing pixel
    Squint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arms {
    #[default]
    Down,
    Up,
    /// Higher than `Up`, used while dancing
    Raised,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Exclamation,
    Sparkle,
}

/// Everything that varies between two robot drawings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pose {
    /// Moves the head down
    pub head_offset: i32,
    /// Moves the top of the body (and the arm roots) down
    pub body_squash: i32,
    /// Moves the head sideways
    pub head_shift: i32,
    /// Moves the body and arms sideways
    pub body_shift: i32,
    pub eyes: Eyes,
    pub arms: Arms,
    pub decoration: Option<Decoration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Thinking,
    Happy,
    Alert,
    Confused,
    Dancing,
}

impl State {
    pub const ALL: [State; 6] = [
        State::Idle,
        State::Thinking,
        State::Happy,
        State::Alert,
        State::Confused,
        State::Dancing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            State::Idle => "idle",
            State::Thinking => "thinking",
            State::Happy => "happy",
            State::Alert => "alert",
            State::Confused => "confused",
            State::Dancing => "dancing",
        }
    }

    pub fn frame_count(self) -> u32 {
        match self {
            State::Idle | State::Thinking | State::Happy => 4,
            State::Alert | State::Confused => 3,
            State::Dancing => 6,
        }
    }

    /// Grid cell `(column, row)` of frame `index`
    pub fn cell(self, index: u32) -> (u32, u32) {
        match self {
            State::Idle => (index, 0),
            State::Thinking => (index, 1),
            State::Happy => (index, 2),
            State::Alert => (index, 3),
            State::Confused => (index + 3, 3),
            State::Dancing => (4 + index % 2, index / 2),
        }
    }

    /// Pose and vertical nudge of frame `index`
    pub fn pose(self, index: u32) -> (Pose, i32) {
        let odd = index % 2 == 1;
        match self {
            State::Idle => (
                Pose {
                    head_offset: if odd { 1 } else { 0 },
                    ..Pose::default()
                },
                0,
            ),
            State::Thinking => (
                Pose {
                    eyes: Eyes::Thinking(index),
                    ..Pose::default()
                },
                0,
            ),
            State::Happy => (
                Pose {
                    eyes: Eyes::Happy,
                    arms: if odd { Arms::Up } else { Arms::Down },
                    decoration: Some(Decoration::Sparkle),
                    ..Pose::default()
                },
                if odd { -2 } else { 0 },
            ),
            State::Alert => (
                Pose {
                    eyes: Eyes::Alert,
                    decoration: (index == 1).then_some(Decoration::Exclamation),
                    ..Pose::default()
                },
                0,
            ),
            State::Confused => (
                Pose {
                    head_shift: 1,
                    eyes: Eyes::Squint,
                    arms: Arms::Hidden,
                    ..Pose::default()
                },
                0,
            ),
            State::Dancing => (
                Pose {
                    body_shift: if odd { 1 } else { -1 },
                    eyes: Eyes::Squint,
                    arms: Arms::Raised,
                    ..Pose::default()
                },
                0,
            ),
        }
    }
}

/// One cell of the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub state: State,
    pub index: u32,
    pub column: u32,
    pub row: u32,
    /// Vertical nudge of the whole robot inside its cell
    pub dy: i32,
    pub pose: Pose,
}

impl Frame {
    /// Pixel origin of the cell
    pub fn origin(&self) -> (u32, u32) {
        (self.column * FRAME_SIZE, self.row * FRAME_SIZE)
    }

    fn manifest_entry(&self) -> FrameEntry {
        let (x, y) = self.origin();
        FrameEntry {
            state: self.state.name().to_string(),
            index: self.index,
            column: self.column,
            row: self.row,
            x,
            y,
            size: FRAME_SIZE,
        }
    }
}

/// All frames in drawing order. Later frames paint over earlier ones where
/// they overlap.
pub fn frames() -> Vec<Frame> {
    State::ALL
        .iter()
        .flat_map(|&state| {
            (0..state.frame_count()).map(move |index| {
                let (column, row) = state.cell(index);
                let (pose, dy) = state.pose(index);
                Frame {
                    state,
                    index,
                    column,
                    row,
                    dy,
                    pose,
                }
            })
        })
        .collect()
}

/// Draw the robot with its cell origin at `(x, y)`
pub fn draw_robot(painter: &mut Painter<'_>, x: i32, y: i32, pose: &Pose) {
    let squash = pose.body_squash;
    let bx = x + pose.body_shift;

    painter.rectangle(
        [bx + 4, y + 8 + squash, bx + 11, y + 14],
        Some(BODY),
        Some(BODY_DARK),
        1,
    );

    let hx = x + 4 + pose.head_shift;
    let hy = y + 2 + pose.head_offset;
    painter.rectangle([hx, hy, hx + 7, hy + 6], Some(BODY), Some(BODY_DARK), 1);
    painter.rectangle([hx + 1, hy + 2, hx + 6, hy + 4], Some(VISOR), None, 1);

    match pose.eyes {
        Eyes::Normal => {
            painter.point(hx + 3, hy + 3, EYE_GLOW);
            painter.point(hx + 4, hy + 3, EYE_GLOW);
        }
        Eyes::Thinking(phase) => {
            let dots = [(2, 3), (3, 2), (5, 3), (4, 4)];
            let (dx, dy) = dots[(phase % 4) as usize];
            painter.point(hx + dx, hy + dy, EYE_GLOW);
        }
        Eyes::Happy => {
            painter.line(&[(hx + 2, hy + 3), (hx + 3, hy + 2)], EYE_GLOW, 1);
            painter.line(&[(hx + 3, hy + 2), (hx + 4, hy + 3)], EYE_GLOW, 1);
            painter.line(&[(hx + 4, hy + 3), (hx + 5, hy + 2)], EYE_GLOW, 1);
        }
        Eyes::Alert => {
            painter.rectangle([hx + 3, hy + 2, hx + 4, hy + 4], Some(ALERT_RED), None, 1);
        }
        Eyes::Squint => painter.point(hx + 3, hy + 3, EYE_GLOW),
    }

    let shoulder = y + 9 + squash;
    let (left_hand, right_hand) = match pose.arms {
        Arms::Down => (Some((bx + 3, y + 12)), Some((bx + 12, y + 12))),
        Arms::Up => (Some((bx + 2, y + 6)), Some((bx + 13, y + 6))),
        Arms::Raised => (Some((bx + 2, y + 5)), Some((bx + 13, y + 5))),
        Arms::Hidden => (None, None),
    };
    if let Some(hand) = left_hand {
        painter.line(&[(bx + 3, shoulder), hand], BODY_DARK, 1);
    }
    if let Some(hand) = right_hand {
        painter.line(&[(bx + 12, shoulder), hand], BODY_DARK, 1);
    }

    match pose.decoration {
        Some(Decoration::Exclamation) => {
            painter.rectangle([x + 7, y - 2, x + 8, y], Some(ALERT_RED), None, 1);
            painter.point(x + 7, y + 2, ALERT_RED);
        }
        Some(Decoration::Sparkle) => {
            painter.point(x + 2, y + 2, WHITE);
            painter.point(x + 13, y + 3, WHITE);
        }
        None => {}
    }
}

pub fn render_sheet() -> RgbaImage {
    let mut sheet = Painter::blank(SHEET_WIDTH, SHEET_HEIGHT);
    let mut painter = Painter::new(&mut sheet);

    for frame in frames() {
        let (x, y) = frame.origin();
        draw_robot(&mut painter, x as i32, y as i32 + frame.dy, &frame.pose);
    }

    sheet
}

pub fn generate_mascot(writer: &mut AssetWriter) -> Result<()> {
    println!("Generating mascot sprite sheet...");
    let sheet = render_sheet();
    let frames = frames().iter().map(Frame::manifest_entry).collect();
    writer.write_sheet(SHEET_NAME, "mascot", &sheet, frames)?;
    Ok(())
}
