mod custom_points;
mod panel;
mod plotter;
mod store;

pub use custom_points::CustomPoints;
pub use panel::{ControlPanel, PanelView};
pub use plotter::{MarkerStyle, Plotter};
pub use store::{PointSetStore, RenderMode};
