use egui::{Color32, Pos2};

use crate::{
    app::{
        components::{CustomPoints, PointSetStore, RenderMode},
        i18n::{Language, TextId},
    },
    data::Point,
};

use super::{MarkerStyle, Plotter, Tooltip, ViewRequest};

/// Share of the data extent added on each side of the visible range.
const PADDING: f64 = 0.2;
/// Padding used on an axis where all data shares one coordinate.
const DEGENERATE_PADDING: f64 = 1.0;
/// Slack (in screen points) added to the marker radius when hit testing.
const HIT_SLACK: f32 = 2.0;

pub const CUSTOM_COLOR: Color32 = Color32::from_rgb(0, 128, 0);

/// Maps a raw point to display coordinates.
///
/// The rotated view shows the original y-axis horizontally (left positive)
/// and the original x-axis vertically.
pub fn display([x, y]: Point, rotated: bool) -> Point {
    if rotated {
        [-y, x]
    } else {
        [x, y]
    }
}

/// Inverse of [`display`].
pub fn original([dx, dy]: Point, rotated: bool) -> Point {
    if rotated {
        [dy, -dx]
    } else {
        [dx, dy]
    }
}

/// Tick label for the horizontal axis of the rotated view, which shows the
/// original y value and therefore negates the display coordinate.
pub fn tick_label(value: f64, step_size: f64) -> String {
    let [_, value] = original([value, 0.0], true);
    if value.abs() < step_size.abs() * 1e-6 || value == 0.0 {
        return "0".to_string();
    }
    let decimals = if step_size > 0.0 {
        (-step_size.log10()).ceil().max(0.0) as usize
    } else {
        0
    };
    format!("{value:.decimals$}")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

/// A plotted point, carrying the coordinates it was computed from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub display: Point,
    pub original: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Source,
    Custom,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub kind: SeriesKind,
    pub label: String,
    pub color: Color32,
    pub radius: f32,
    pub markers: Vec<Marker>,
    /// Connecting polyline in display coordinates, if any.
    pub path: Option<Vec<Point>>,
}

/// Everything drawn on the plot surface, computed from the app state.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub title: &'static str,
    pub x_caption: &'static str,
    pub y_caption: &'static str,
    pub rotated: bool,
    /// Source series in store order, followed by the custom points series.
    pub series: Vec<Series>,
    pub bounds: Option<Bounds>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub series: usize,
    pub index: usize,
    pub anchor: Point,
    pub original: Point,
}

impl Default for Scene {
    fn default() -> Self {
        Self::build(
            &PointSetStore::default(),
            &CustomPoints::default(),
            false,
            Language::default(),
            MarkerStyle::default(),
        )
    }
}

impl Bounds {
    /// Bounding box of `points` grown by [`PADDING`] on each side.
    ///
    /// `None` for no points, or when the padded box no longer has a finite
    /// extent (coordinates close to `f64::MAX`); the plot then picks its own
    /// range.
    pub fn padded(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), [x, y]| {
            ([min[0].min(x), min[1].min(y)], [max[0].max(x), max[1].max(y)])
        });
        // Scaled before subtracting, `hi - lo` alone may overflow.
        let pad = |lo: f64, hi: f64| {
            let pad = hi * PADDING - lo * PADDING;
            if pad > 0.0 {
                pad
            } else {
                DEGENERATE_PADDING
            }
        };
        let (px, py) = (pad(min[0], max[0]), pad(min[1], max[1]));
        let bounds = Self {
            min: [min[0] - px, min[1] - py],
            max: [max[0] + px, max[1] + py],
        };
        let finite_extent = (0..2).all(|i| (bounds.max[i] - bounds.min[i]).is_finite());
        if !finite_extent {
            log::warn!("data extent too large to pad, using automatic plot range");
            return None;
        }
        Some(bounds)
    }
}

/// Polyline connecting `points` in order for the given mode. Closed curves
/// repeat the first point at the end. Single points are never connected.
pub fn connecting_path(points: &[Point], mode: RenderMode) -> Option<Vec<Point>> {
    if points.len() < 2 {
        return None;
    }
    match mode {
        RenderMode::Points => None,
        RenderMode::Line => Some(points.to_vec()),
        RenderMode::Closed => {
            let mut path = points.to_vec();
            path.push(points[0]);
            Some(path)
        }
    }
}

impl Scene {
    pub fn build(
        store: &PointSetStore,
        custom: &CustomPoints,
        rotated: bool,
        language: Language,
        style: MarkerStyle,
    ) -> Self {
        let to_markers = |points: &[Point]| -> Vec<Marker> {
            points
                .iter()
                .map(|pt| Marker {
                    display: display(*pt, rotated),
                    original: *pt,
                })
                .collect()
        };

        let mut series: Vec<Series> = store
            .iter()
            .map(|src| {
                let markers = to_markers(&src.points);
                let displayed: Vec<Point> = markers.iter().map(|m| m.display).collect();
                Series {
                    kind: SeriesKind::Source,
                    label: format!("{} ({})", src.file_name(), language.t(src.mode.tag())),
                    color: src.color,
                    radius: style.radius,
                    path: connecting_path(&displayed, src.mode),
                    markers,
                }
            })
            .collect();

        if !custom.is_empty() {
            series.push(Series {
                kind: SeriesKind::Custom,
                label: language.t(TextId::CustomPoints).to_owned(),
                color: CUSTOM_COLOR,
                radius: style.custom_radius,
                markers: to_markers(custom.as_slice()),
                path: None,
            });
        }

        let bounds = Bounds::padded(
            series
                .iter()
                .flat_map(|s| s.markers.iter().map(|m| m.display)),
        );

        let (x_caption, y_caption) = if rotated {
            (TextId::RotatedX, TextId::RotatedY)
        } else {
            (TextId::XAxis, TextId::YAxis)
        };

        Self {
            title: language.t(TextId::Title),
            x_caption: language.t(x_caption),
            y_caption: language.t(y_caption),
            rotated,
            series,
            bounds,
        }
    }

    /// The custom points series, if any custom points exist.
    pub fn custom_series(&self) -> Option<&Series> {
        self.series.iter().find(|s| s.kind == SeriesKind::Custom)
    }
}

/// Finds the first marker (in draw order) under `pointer`.
///
/// `to_screen` maps display coordinates to screen positions, so the hit
/// radius is measured in screen points like the markers themselves.
pub fn hit_test(scene: &Scene, pointer: Pos2, to_screen: impl Fn(Point) -> Pos2) -> Option<Hit> {
    scene.series.iter().enumerate().find_map(|(si, series)| {
        let reach = series.radius + HIT_SLACK;
        series
            .markers
            .iter()
            .position(|m| to_screen(m.display).distance(pointer) <= reach)
            .map(|index| {
                let marker = series.markers[index];
                Hit {
                    series: si,
                    index,
                    anchor: marker.display,
                    original: marker.original,
                }
            })
    })
}

/// Text of the hover tooltip.
pub fn tooltip_text([x, y]: Point) -> String {
    format!("({x:.2}, {y:.2})")
}

/// Inline label drawn next to custom points.
pub fn inline_label([x, y]: Point) -> String {
    format!("({x:.1}, {y:.1})")
}

impl Tooltip {
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn show_hit(&mut self, hit: &Hit) {
        self.visible = true;
        self.text = tooltip_text(hit.original);
        self.anchor = hit.anchor;
    }
}

impl Plotter {
    /// Recomputes the scene. If anything on it changed, the visible range is
    /// fitted to the new scene and the tooltip is hidden; an unchanged scene
    /// keeps the user's pan and zoom.
    pub fn render(
        &mut self,
        store: &PointSetStore,
        custom: &CustomPoints,
        rotated: bool,
        language: Language,
    ) {
        let scene = Scene::build(store, custom, rotated, language, self.style);
        if scene == self.scene {
            log::trace!("scene unchanged, keeping view");
            return;
        }
        self.scene = scene;
        self.request_view = Some(match self.scene.bounds {
            Some(bounds) => ViewRequest::Fit(bounds),
            None => ViewRequest::Reset,
        });
        self.tooltip = Tooltip::default();
        log::debug!(
            "render pass with {} series, bounds {:?}",
            self.scene.series.len(),
            self.scene.bounds
        );
    }

    /// Updates the tooltip for a pointer position (`None` when the pointer is
    /// outside the plot).
    pub fn hover(&mut self, pointer: Option<Pos2>, to_screen: impl Fn(Point) -> Pos2) {
        match pointer.and_then(|pointer| hit_test(&self.scene, pointer, to_screen)) {
            Some(hit) => self.tooltip.show_hit(&hit),
            None => self.tooltip.hide(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn store_with(files: &[(&str, &str)]) -> (tempfile::TempDir, PointSetStore) {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = files
            .iter()
            .map(|(name, contents)| {
                let path = dir.path().join(name);
                std::fs::write(&path, contents).unwrap();
                path
            })
            .collect();
        let mut store = PointSetStore::default();
        store.load(&paths);
        (dir, store)
    }

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    /// One screen point per plot unit, no offset.
    fn identity(p: Point) -> Pos2 {
        Pos2::new(p[0] as f32, p[1] as f32)
    }

    #[test]
    fn test_display_mapping() {
        for pt in [[0.0, 0.0], [1.5, -2.0], [-3.0, 4.25]] {
            assert_eq!(display(pt, false), pt);
            assert_eq!(display(pt, true), [-pt[1], pt[0]]);
        }
        for pt in [[0.0, 0.0], [1.5, -2.0], [-3.0, 4.25]] {
            assert_eq!(original(display(pt, true), true), pt);
            assert_eq!(original(display(pt, false), false), pt);
        }
        // Rotating four times is the identity.
        let pt = [1.5, -2.0];
        let turned = (0..4).fold(pt, |p, _| display(p, true));
        assert_eq!(turned, pt);
    }

    #[test]
    fn test_tick_label_negates() {
        assert_eq!(tick_label(2.0, 1.0), "-2");
        assert_eq!(tick_label(-0.5, 0.1), "0.5");
        assert_eq!(tick_label(0.0, 1.0), "0");
        assert_eq!(tick_label(-0.0, 0.5), "0");
        assert_eq!(tick_label(1e-17, 0.1), "0");
    }

    #[test]
    fn test_closed_path_repeats_first_point() {
        let points = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]];
        let path = connecting_path(&points, RenderMode::Closed).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.first(), path.last());

        assert_eq!(connecting_path(&points, RenderMode::Line).unwrap().len(), 3);
        assert_eq!(connecting_path(&points, RenderMode::Points), None);
        assert_eq!(connecting_path(&points[..1], RenderMode::Closed), None);
    }

    #[test]
    fn test_padded_bounds() {
        assert_eq!(Bounds::padded(Vec::new()), None);

        let bounds = Bounds::padded(vec![[0.0, -1.0], [10.0, 1.0]]).unwrap();
        assert_close(bounds.min, [-2.0, -1.4]);
        assert_close(bounds.max, [12.0, 1.4]);

        let single = Bounds::padded(vec![[3.0, 3.0]]).unwrap();
        assert_eq!(single.min, [2.0, 2.0]);
        assert_eq!(single.max, [4.0, 4.0]);
    }

    #[test]
    fn test_padded_bounds_stay_finite_for_huge_coordinates() {
        // The span itself (2e300) is representable, padding must not overflow.
        let wide = Bounds::padded(vec![[1e300, 0.0], [-1e300, 0.0]]).unwrap();
        assert!(wide.min[0].is_finite() && wide.max[0].is_finite());
        assert_close([wide.min[0] / 1e300, wide.max[0] / 1e300], [-1.4, 1.4]);

        // `hi - lo` overflows here, the padded box would be infinite.
        assert_eq!(Bounds::padded(vec![[1e308, 0.0], [-1e308, 0.0]]), None);

        let edge = Bounds::padded(vec![[f64::MAX, f64::MAX]]).unwrap();
        assert!(edge.min.iter().chain(&edge.max).all(|v| v.is_finite()));
    }

    #[test]
    fn test_scene_from_state() {
        let (_dir, mut store) = store_with(&[("a.txt", "0,0\n1,0\n1,1"), ("b.txt", "2,3")]);
        store.set_mode(1, RenderMode::Closed).unwrap();
        let mut custom = CustomPoints::default();
        custom.add_point("(5,-5)").unwrap();

        let scene = Scene::build(
            &store,
            &custom,
            false,
            Language::English,
            MarkerStyle::default(),
        );
        assert_eq!(scene.series.len(), 3);
        assert_eq!(scene.series[0].label, "a.txt (Closed)");
        assert_eq!(scene.series[0].path.as_ref().map(|p| p.len()), Some(4));
        assert_eq!(scene.series[1].label, "b.txt (Points)");
        assert_eq!(scene.series[1].path, None);

        let custom_series = scene.custom_series().unwrap();
        assert_eq!(custom_series.label, "Custom Points");
        assert_eq!(custom_series.color, CUSTOM_COLOR);
        assert_eq!(custom_series.radius, MarkerStyle::default().custom_radius);

        // x in [0, 5], y in [-5, 3]
        let bounds = scene.bounds.unwrap();
        assert_close(bounds.min, [-1.0, -6.6]);
        assert_close(bounds.max, [6.0, 4.6]);
        assert_eq!(scene.x_caption, "X Axis");
    }

    #[test]
    fn test_rotated_scene_keeps_originals() {
        let (_dir, store) = store_with(&[("a.txt", "1,2\n3,4")]);
        let mut custom = CustomPoints::default();
        custom.add_point("7,8").unwrap();

        let scene = Scene::build(&store, &custom, true, Language::Chinese, MarkerStyle::default());
        let src = &scene.series[0];
        assert_eq!(src.markers[0].display, [-2.0, 1.0]);
        assert_eq!(src.markers[0].original, [1.0, 2.0]);
        assert_eq!(scene.custom_series().unwrap().markers[0].display, [-8.0, 7.0]);
        assert_eq!(scene.x_caption, "Y轴（向左为正）");
        assert_eq!(scene.y_caption, "X轴（向上为正）");
        assert_eq!(src.label, "a.txt (点)");
    }

    #[test]
    fn test_empty_scene_has_no_bounds() {
        let scene = Scene::default();
        assert!(scene.series.is_empty());
        assert_eq!(scene.bounds, None);
        assert!(scene.custom_series().is_none());
    }

    #[test]
    fn test_hit_test_reports_original_coordinates() {
        let (_dir, store) = store_with(&[("a.txt", "10,20\n30,40")]);
        let scene = Scene::build(
            &store,
            &CustomPoints::default(),
            true,
            Language::English,
            MarkerStyle::default(),
        );

        // Second point is displayed at (-40, 30).
        let hit = hit_test(&scene, Pos2::new(-41.0, 31.0), identity).unwrap();
        assert_eq!(hit.series, 0);
        assert_eq!(hit.index, 1);
        assert_eq!(hit.original, [30.0, 40.0]);
        assert_eq!(tooltip_text(hit.original), "(30.00, 40.00)");

        assert_eq!(hit_test(&scene, Pos2::new(0.0, 0.0), identity), None);
    }

    #[test]
    fn test_first_series_wins() {
        let (_dir, store) = store_with(&[("a.txt", "1,1"), ("b.txt", "1,1")]);
        let mut custom = CustomPoints::default();
        custom.add_point("1,1").unwrap();
        let scene = Scene::build(
            &store,
            &custom,
            false,
            Language::English,
            MarkerStyle::default(),
        );
        let hit = hit_test(&scene, Pos2::new(1.0, 1.0), identity).unwrap();
        assert_eq!(hit.series, 0);
    }

    #[test]
    fn test_plotter_tooltip_lifecycle() {
        let mut plotter = Plotter::new(MarkerStyle::default());
        // Hovering before anything was rendered is a no-op.
        plotter.hover(Some(Pos2::new(0.0, 0.0)), identity);
        assert!(!plotter.tooltip().visible);

        let mut custom = CustomPoints::default();
        custom.add_point("2.346,-1").unwrap();
        plotter.render(&PointSetStore::default(), &custom, false, Language::English);
        assert_eq!(
            plotter.request_view,
            Some(ViewRequest::Fit(plotter.scene().bounds.unwrap()))
        );

        plotter.hover(Some(Pos2::new(2.0, -1.0)), identity);
        let tooltip = plotter.tooltip();
        assert!(tooltip.visible);
        assert_eq!(tooltip.text, "(2.35, -1.00)");
        assert_eq!(inline_label(custom.as_slice()[0]), "(2.3, -1.0)");

        plotter.hover(None, identity);
        assert!(!plotter.tooltip().visible);

        plotter.hover(Some(Pos2::new(2.0, -1.0)), identity);
        plotter.render(
            &PointSetStore::default(),
            &CustomPoints::default(),
            false,
            Language::English,
        );
        assert!(!plotter.tooltip().visible);
        assert_eq!(plotter.request_view, Some(ViewRequest::Reset));
    }

    #[test]
    fn test_unchanged_scene_keeps_view_and_tooltip() {
        let (_dir, store) = store_with(&[("a.txt", "1,1
4,4")]);
        let custom = CustomPoints::default();
        let mut plotter = Plotter::new(MarkerStyle::default());
        plotter.render(&store, &custom, false, Language::English);
        assert!(matches!(plotter.request_view.take(), Some(ViewRequest::Fit(_))));

        plotter.hover(Some(Pos2::new(1.0, 1.0)), identity);
        assert!(plotter.tooltip().visible);
        assert_eq!(plotter.tooltip().anchor, [1.0, 1.0]);

        plotter.render(&store, &custom, false, Language::English);
        assert_eq!(plotter.request_view, None);
        assert!(plotter.tooltip().visible);

        plotter.render(&store, &custom, true, Language::English);
        assert!(matches!(plotter.request_view, Some(ViewRequest::Fit(_))));
        assert!(!plotter.tooltip().visible);
    }
}
