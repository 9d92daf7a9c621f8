//! Geographic primitives for the field map: points, user-drawn polylines,
//! the drawing reducer and the viewport projection used to turn pointer
//! positions into coordinates.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Web-Mercator tile edge in pixels at zoom 0.
const TILE_SIZE: f64 = 256.0;
/// Latitude limit of the Web-Mercator projection.
const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 18.0;

/// A recorded coordinate, longitude first. Serialised as `[lng, lat]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lng, point.lat]
    }
}

/// Great-circle distance between two points in kilometres (haversine).
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Sum of consecutive haversine legs. Zero for fewer than two points.
pub fn total_distance_km(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_km(pair[0], pair[1]))
        .sum()
}

/// Ordered, append-only path captured from map clicks.
///
/// Coordinates are not range-checked; whatever the map reports is kept.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline(Vec<GeoPoint>);

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the path with `point` appended at the end.
    pub fn add_point(mut self, point: GeoPoint) -> Self {
        self.0.push(point);
        self
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_distance_km(&self) -> f64 {
        total_distance_km(&self.0)
    }

    /// Collapses a run of identical trailing points into one. A double click
    /// reaches the map as two clicks on the same spot before the finish.
    pub fn trim_repeated_tail(mut self) -> Self {
        while let [.., before, last] = self.0.as_slice() {
            if before != last {
                break;
            }
            self.0.pop();
        }
        self
    }

    /// Closes the path. A non-empty path hands its coordinates to the
    /// caller; the returned working path is always empty.
    pub fn finalize(self) -> (Polyline, Option<Vec<GeoPoint>>) {
        if self.0.is_empty() {
            (Polyline::new(), None)
        } else {
            (Polyline::new(), Some(self.0))
        }
    }
}

impl FromIterator<GeoPoint> for Polyline {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Input to the drawing reducer, one per user gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// Drawing mode switched on.
    Enter,
    /// Pointer click on the canvas.
    AddPoint(GeoPoint),
    /// Terminating gesture (double click or context menu).
    Finish,
    /// Drawing mode switched off.
    Exit,
}

/// A path handed back to the owner of the map once drawing finishes.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletedPath {
    pub points: Vec<GeoPoint>,
    pub distance_km: f64,
}

/// Working state of an interactive measurement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawingSession {
    active: bool,
    path: Polyline,
}

impl DrawingSession {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn path(&self) -> &Polyline {
        &self.path
    }

    pub fn distance_km(&self) -> f64 {
        self.path.total_distance_km()
    }

    /// Running distance and point count, shown only while a non-empty path
    /// is being drawn.
    pub fn measurement(&self) -> Option<(f64, usize)> {
        (self.active && !self.path.is_empty()).then(|| (self.distance_km(), self.path.len()))
    }

    /// Advances the session by one command, returning the next state and at
    /// most one completed path.
    pub fn step(self, command: DrawCommand) -> (DrawingSession, Option<CompletedPath>) {
        match command {
            DrawCommand::Enter => (
                DrawingSession {
                    active: true,
                    path: Polyline::new(),
                },
                None,
            ),
            DrawCommand::Exit => (DrawingSession::default(), None),
            DrawCommand::AddPoint(_) if !self.active => (self, None),
            DrawCommand::AddPoint(point) => (
                DrawingSession {
                    active: true,
                    path: self.path.add_point(point),
                },
                None,
            ),
            DrawCommand::Finish if !self.active => (self, None),
            DrawCommand::Finish => {
                let trimmed = self.path.trim_repeated_tail();
                let distance_km = trimmed.total_distance_km();
                let (path, emitted) = trimmed.finalize();
                let completed = emitted.map(|points| CompletedPath {
                    points,
                    distance_km,
                });
                (DrawingSession { active: true, path }, completed)
            }
        }
    }
}

/// Base map style offered in the layer switcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLayer {
    pub id: String,
    pub label: String,
    pub style: String,
}

impl MapLayer {
    fn new(id: &str, label: &str, style: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            style: style.to_string(),
        }
    }
}

pub fn default_layers() -> Vec<MapLayer> {
    vec![
        MapLayer::new("light", "Roads", "mapbox://styles/mapbox/light-v11"),
        MapLayer::new(
            "satellite",
            "Satellite",
            "mapbox://styles/mapbox/satellite-streets-v12",
        ),
        MapLayer::new("terrain", "Terrain", "mapbox://styles/mapbox/outdoors-v12"),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerType {
    Farmer,
    Market,
    Agent,
    Risk,
}

impl MarkerType {
    pub fn label(&self) -> &'static str {
        match self {
            MarkerType::Farmer => "farmer",
            MarkerType::Market => "market",
            MarkerType::Agent => "agent",
            MarkerType::Risk => "risk",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub id: String,
    pub position: GeoPoint,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MarkerType,
}

impl MapMarker {
    /// Short uppercase badge drawn inside the marker.
    pub fn badge(&self) -> String {
        self.title.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// Visible window of the map canvas: a centre, a zoom level and the canvas
/// size in pixels. Converts between canvas pixels and coordinates with the
/// Web-Mercator projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapViewport {
    pub center: GeoPoint,
    pub zoom: f64,
    pub width: f64,
    pub height: f64,
}

impl MapViewport {
    pub fn new(center: GeoPoint, zoom: f64, width: f64, height: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            width,
            height,
        }
    }

    fn world_size(&self) -> f64 {
        TILE_SIZE * 2f64.powf(self.zoom)
    }

    fn project(&self, point: GeoPoint) -> (f64, f64) {
        let size = self.world_size();
        let x = (point.lng + 180.0) / 360.0 * size;
        let sin = point
            .lat
            .clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT)
            .to_radians()
            .sin();
        let y = (0.5 - ((1.0 + sin) / (1.0 - sin)).ln() / (4.0 * PI)) * size;
        (x, y)
    }

    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        let size = self.world_size();
        let lng = x / size * 360.0 - 180.0;
        let n = PI - 2.0 * PI * y / size;
        let lat = n.sinh().atan().to_degrees();
        GeoPoint::new(lng, lat)
    }

    /// Canvas pixel position of a coordinate.
    pub fn to_screen(&self, point: GeoPoint) -> (f64, f64) {
        let (cx, cy) = self.project(self.center);
        let (x, y) = self.project(point);
        (x - cx + self.width / 2.0, y - cy + self.height / 2.0)
    }

    /// Coordinate under a canvas pixel position.
    pub fn to_geo(&self, screen_x: f64, screen_y: f64) -> GeoPoint {
        let (cx, cy) = self.project(self.center);
        self.unproject(
            cx + screen_x - self.width / 2.0,
            cy + screen_y - self.height / 2.0,
        )
    }

    pub fn fly_to(&mut self, center: GeoPoint, zoom: f64) {
        self.center = center;
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1.0).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - 1.0).max(MIN_ZOOM);
    }

    /// Shifts the centre by a pixel offset, as a drag would.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.center = self.to_geo(self.width / 2.0 + dx, self.height / 2.0 + dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nairobi_path() -> Vec<GeoPoint> {
        vec![GeoPoint::new(36.80, -1.29), GeoPoint::new(36.90, -1.21)]
    }

    #[test]
    fn distance_is_zero_below_two_points() {
        assert_eq!(total_distance_km(&[]), 0.0);
        assert_eq!(total_distance_km(&[GeoPoint::new(36.8, -1.29)]), 0.0);
        assert_eq!(Polyline::new().total_distance_km(), 0.0);
    }

    #[test]
    fn one_degree_on_equator() {
        let d = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.5, "got {d}");
    }

    #[test]
    fn nairobi_leg_is_about_fourteen_km() {
        let d = total_distance_km(&nairobi_path());
        assert!((d - 14.4).abs() < 1.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric_under_reversal() {
        let mut points = vec![
            GeoPoint::new(36.80, -1.29),
            GeoPoint::new(36.90, -1.21),
            GeoPoint::new(37.10, -0.98),
            GeoPoint::new(35.27, 0.51),
        ];
        let forward = total_distance_km(&points);
        points.reverse();
        let backward = total_distance_km(&points);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_coordinates_are_kept() {
        let line = Polyline::new().add_point(GeoPoint::new(400.0, 120.0));
        assert_eq!(line.points(), &[GeoPoint::new(400.0, 120.0)]);
    }

    #[test]
    fn finalize_hands_over_points_and_resets() {
        let line: Polyline = nairobi_path().into_iter().collect();
        let (rest, emitted) = line.finalize();
        assert!(rest.is_empty());
        assert_eq!(emitted, Some(nairobi_path()));

        let (rest, emitted) = Polyline::new().finalize();
        assert!(rest.is_empty());
        assert_eq!(emitted, None);
    }

    #[test]
    fn session_ignores_clicks_until_entered() {
        let (session, done) =
            DrawingSession::default().step(DrawCommand::AddPoint(GeoPoint::new(1.0, 1.0)));
        assert!(done.is_none());
        assert!(session.path().is_empty());
        assert!(!session.is_active());
    }

    #[test]
    fn session_emits_once_on_finish() {
        let mut session = DrawingSession::default().step(DrawCommand::Enter).0;
        for point in nairobi_path() {
            session = session.step(DrawCommand::AddPoint(point)).0;
        }
        assert_eq!(session.path().len(), 2);
        assert!(session.distance_km() > 14.0);

        let (session, done) = session.step(DrawCommand::Finish);
        let done = done.expect("completed path");
        assert_eq!(done.points, nairobi_path());
        assert!((done.distance_km - 14.4).abs() < 1.0);
        assert!(session.is_active());
        assert!(session.path().is_empty());

        let (_, again) = session.step(DrawCommand::Finish);
        assert!(again.is_none());
    }

    #[test]
    fn double_click_finish_drops_repeated_points() {
        let [a, b] = [GeoPoint::new(36.80, -1.29), GeoPoint::new(36.90, -1.21)];
        let mut session = DrawingSession::default().step(DrawCommand::Enter).0;
        for point in [a, b, b, b] {
            session = session.step(DrawCommand::AddPoint(point)).0;
        }
        let (_, done) = session.step(DrawCommand::Finish);
        assert_eq!(done.expect("completed path").points, vec![a, b]);

        let mut session = DrawingSession::default().step(DrawCommand::Enter).0;
        for point in [a, a] {
            session = session.step(DrawCommand::AddPoint(point)).0;
        }
        let (_, done) = session.step(DrawCommand::Finish);
        let done = done.expect("completed path");
        assert_eq!(done.points, vec![a]);
        assert_eq!(done.distance_km, 0.0);
    }

    #[test]
    fn repeated_points_inside_the_path_are_kept() {
        let a = GeoPoint::new(36.80, -1.29);
        let b = GeoPoint::new(36.90, -1.21);
        let line: Polyline = [a, a, b].into_iter().collect();
        assert_eq!(line.trim_repeated_tail().points(), &[a, a, b]);
    }

    #[test]
    fn measurement_needs_an_active_non_empty_path() {
        assert_eq!(DrawingSession::default().measurement(), None);

        let session = DrawingSession::default().step(DrawCommand::Enter).0;
        assert_eq!(session.measurement(), None);

        let session = session
            .step(DrawCommand::AddPoint(GeoPoint::new(36.8, -1.29)))
            .0;
        assert_eq!(session.measurement(), Some((0.0, 1)));

        let (session, _) = session.step(DrawCommand::Finish);
        assert_eq!(session.measurement(), None);
    }

    #[test]
    fn exit_discards_without_notification() {
        let session = DrawingSession::default()
            .step(DrawCommand::Enter)
            .0
            .step(DrawCommand::AddPoint(GeoPoint::new(36.8, -1.29)))
            .0;
        let (session, done) = session.step(DrawCommand::Exit);
        assert!(done.is_none());
        assert!(!session.is_active());
        assert!(session.path().is_empty());
    }

    #[test]
    fn geo_point_serialises_as_pair() {
        let json = serde_json::to_string(&GeoPoint::new(36.8, -1.29)).unwrap();
        assert_eq!(json, "[36.8,-1.29]");
        let back: GeoPoint = serde_json::from_str("[37.0,0.5]").unwrap();
        assert_eq!(back, GeoPoint::new(37.0, 0.5));
    }

    #[test]
    fn viewport_centre_maps_to_canvas_middle() {
        let viewport = MapViewport::new(GeoPoint::new(36.82, -1.29), 10.0, 800.0, 480.0);
        let (x, y) = viewport.to_screen(viewport.center);
        assert!((x - 400.0).abs() < 1e-6);
        assert!((y - 240.0).abs() < 1e-6);
    }

    #[test]
    fn viewport_projection_inverts() {
        let viewport = MapViewport::new(GeoPoint::new(36.82, -1.29), 12.0, 800.0, 480.0);
        let target = GeoPoint::new(36.85, -1.25);
        let (x, y) = viewport.to_screen(target);
        let back = viewport.to_geo(x, y);
        assert!((back.lng - target.lng).abs() < 1e-9);
        assert!((back.lat - target.lat).abs() < 1e-9);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut viewport = MapViewport::new(GeoPoint::new(0.0, 0.0), 30.0, 100.0, 100.0);
        assert_eq!(viewport.zoom, MAX_ZOOM);
        viewport.zoom_in();
        assert_eq!(viewport.zoom, MAX_ZOOM);
        viewport.fly_to(GeoPoint::new(1.0, 1.0), 0.0);
        viewport.zoom_out();
        assert_eq!(viewport.zoom, MIN_ZOOM);
    }

    #[test]
    fn marker_badge_uses_two_letters() {
        let marker = MapMarker {
            id: "m1".into(),
            position: GeoPoint::new(0.0, 0.0),
            title: "nakuru market".into(),
            kind: MarkerType::Market,
        };
        assert_eq!(marker.badge(), "NA");
    }
}
