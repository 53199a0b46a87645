mod logic;

use std::path::PathBuf;

use egui::Color32;

use crate::app::i18n::TextId;
use crate::data::Point;

/// Default color cycle, handed out in order to newly loaded files.
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(0x1f, 0x77, 0xb4),
    Color32::from_rgb(0xff, 0x7f, 0x0e),
    Color32::from_rgb(0x2c, 0xa0, 0x2c),
    Color32::from_rgb(0xd6, 0x27, 0x28),
    Color32::from_rgb(0x94, 0x67, 0xbd),
    Color32::from_rgb(0x8c, 0x56, 0x4b),
    Color32::from_rgb(0xe3, 0x77, 0xc2),
    Color32::from_rgb(0x7f, 0x7f, 0x7f),
    Color32::from_rgb(0xbc, 0xbd, 0x22),
    Color32::from_rgb(0x17, 0xbe, 0xcf),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    #[default]
    Points,
    Line,
    Closed,
}

/// Points loaded from one file.
#[derive(Clone, Debug)]
pub struct Source {
    pub path: PathBuf,
    pub points: Vec<Point>,
    pub color: Color32,
    pub mode: RenderMode,
}

/// Tracks which palette colors are taken by loaded sources.
#[derive(Debug, Default)]
pub struct ColorPool {
    in_use: [bool; PALETTE.len()],
}

/// All loaded sources, in load order.
///
/// Sources are addressed by their 1-based position in that order, which
/// shifts when an earlier source is removed.
#[derive(Debug, Default)]
pub struct PointSetStore {
    sources: Vec<Source>,
    colors: ColorPool,
}

impl RenderMode {
    pub const ALL: [RenderMode; 3] = [RenderMode::Points, RenderMode::Line, RenderMode::Closed];

    /// Short tag shown next to file names.
    pub fn tag(self) -> TextId {
        match self {
            RenderMode::Points => TextId::PointMode,
            RenderMode::Line => TextId::LineMode,
            RenderMode::Closed => TextId::ClosedMode,
        }
    }

    /// Label of the option in the display mode selector.
    pub fn option_label(self) -> TextId {
        match self {
            RenderMode::Points => TextId::PointsOnly,
            RenderMode::Line => TextId::Line,
            RenderMode::Closed => TextId::Closed,
        }
    }
}

impl Source {
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unreadable filename")
    }
}
