use egui::{Align2, Color32};
use egui_plot::{HLine, Legend, Line, MarkerShape, PlotBounds, PlotPoint, Points, Text, VLine};

use super::{
    logic::{inline_label, tick_label},
    SeriesKind, ViewRequest,
};

/// Offset of the tooltip box from its marker, in screen points.
const TOOLTIP_OFFSET: egui::Vec2 = egui::vec2(12.0, -12.0);

impl super::Plotter {
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| ui.heading(self.scene.title));

        let mut plot = egui_plot::Plot::new("cartesian_plane")
            .legend(Legend::default())
            .x_axis_label(self.scene.x_caption)
            .y_axis_label(self.scene.y_caption)
            // Coordinates are shown by our own tooltip.
            .show_x(false)
            .show_y(false);
        if self.scene.rotated {
            plot = plot.x_axis_formatter(|mark, _range| tick_label(mark.value, mark.step_size));
        }

        let request_view = self.request_view.take();
        if request_view == Some(ViewRequest::Reset) {
            plot = plot.reset();
        }

        let scene = &self.scene;
        let response = plot.show(ui, |plot_ui| {
            // Origin lines.
            let axis_color = if plot_ui.ctx().theme() == egui::Theme::Light {
                Color32::BLACK
            } else {
                Color32::LIGHT_GRAY
            };
            plot_ui.hline(HLine::new(0.0).color(axis_color).width(0.5));
            plot_ui.vline(VLine::new(0.0).color(axis_color).width(0.5));

            for series in scene.series.iter() {
                if let Some(path) = &series.path {
                    plot_ui.line(
                        Line::new(path.to_owned())
                            .color(series.color.gamma_multiply(0.5))
                            .width(1.5)
                            .name(&series.label),
                    );
                }

                let displayed: Vec<[f64; 2]> = series.markers.iter().map(|m| m.display).collect();
                let shape = match series.kind {
                    SeriesKind::Source => MarkerShape::Circle,
                    SeriesKind::Custom => MarkerShape::Asterisk,
                };
                plot_ui.points(
                    Points::new(displayed)
                        .shape(shape)
                        .filled(true)
                        .radius(series.radius)
                        .color(series.color)
                        .name(&series.label),
                );
            }

            if let Some(custom) = scene.custom_series() {
                for marker in custom.markers.iter() {
                    let [x, y] = marker.display;
                    plot_ui.text(
                        Text::new(PlotPoint::new(x, y), inline_label(marker.original))
                            .color(custom.color)
                            .anchor(Align2::LEFT_BOTTOM),
                    );
                }
            }

            if let Some(ViewRequest::Fit(bounds)) = request_view {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(bounds.min, bounds.max));
            }

            // Pointer position in screen coordinates, for hit testing.
            plot_ui
                .pointer_coordinate()
                .map(|pointer| plot_ui.transform().position_from_point(&pointer))
        });

        let transform = response.transform;
        self.hover(response.inner, |[x, y]| {
            transform.position_from_point(&PlotPoint::new(x, y))
        });

        if self.tooltip.visible {
            let [x, y] = self.tooltip.anchor;
            let marker = transform.position_from_point(&PlotPoint::new(x, y));
            show_tooltip(ui.ctx(), marker, &self.tooltip.text);
        }
    }
}

/// Draws the tooltip box next to the marker it belongs to, offset so it
/// never covers the pointer hovering that marker.
fn show_tooltip(ctx: &egui::Context, marker: egui::Pos2, text: &str) {
    egui::Area::new(egui::Id::new("plot_tooltip"))
        .order(egui::Order::Tooltip)
        .interactable(false)
        .pivot(Align2::LEFT_BOTTOM)
        .fixed_pos(marker + TOOLTIP_OFFSET)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(text);
            });
        });
}
