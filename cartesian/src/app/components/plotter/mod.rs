mod logic;
mod ui;

pub use logic::{Bounds, Scene, SeriesKind};

use crate::data::Point;

/// Marker sizes in screen points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub radius: f32,
    pub custom_radius: f32,
}

/// The single hover annotation of the plot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub text: String,
    /// Display position the tooltip points at.
    pub anchor: Point,
}

/// What the plot view should do with its visible range on the next frame.
#[derive(Clone, Copy, Debug, PartialEq)]
enum ViewRequest {
    Fit(Bounds),
    Reset,
}

pub struct Plotter {
    scene: Scene,
    tooltip: Tooltip,
    style: MarkerStyle,
    request_view: Option<ViewRequest>,
}

impl Plotter {
    pub fn new(style: MarkerStyle) -> Self {
        Self {
            scene: Scene::default(),
            tooltip: Tooltip::default(),
            style,
            request_view: None,
        }
    }

    #[cfg(test)]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[cfg(test)]
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 4.0,
            custom_radius: 6.0,
        }
    }
}
