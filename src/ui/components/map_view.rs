//! Interactive map canvas with markers, saved paths and a polyline
//! measurement tool.
//!
//! The canvas is an SVG sized to the viewport, so pointer positions reported
//! relative to the element are viewport pixels and feed straight into
//! [`MapViewport::to_geo`].

use dioxus::prelude::*;

use crate::{
    domain::{
        geo::default_layers, CompletedPath, DrawCommand, DrawingSession, GeoPoint, MapLayer,
        MapMarker, MapViewport,
    },
    ui::theme,
};

const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 480.0;
const PAN_STEP: f64 = 120.0;

fn svg_points(viewport: &MapViewport, points: &[GeoPoint]) -> String {
    points
        .iter()
        .map(|point| {
            let (x, y) = viewport.to_screen(*point);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn MapView(
    center: GeoPoint,
    zoom: f64,
    #[props(default)] markers: Vec<MapMarker>,
    #[props(default = default_layers())] layers: Vec<MapLayer>,
    #[props(default = "light".to_string())] active_layer: String,
    on_layer_change: Option<EventHandler<String>>,
    on_marker_click: Option<EventHandler<String>>,
    #[props(default)] enable_drawing: bool,
    on_draw_complete: Option<EventHandler<CompletedPath>>,
    #[props(default)] saved_paths: Vec<Vec<GeoPoint>>,
) -> Element {
    let mut viewport =
        use_signal(move || MapViewport::new(center, zoom, CANVAS_WIDTH, CANVAS_HEIGHT));
    let mut session = use_signal(DrawingSession::default);

    let mut dispatch = move |command: DrawCommand| {
        let current = session.peek().clone();
        let (next, completed) = current.step(command);
        session.set(next);
        if let (Some(path), Some(handler)) = (completed, on_draw_complete) {
            handler.call(path);
        }
    };

    use_effect(use_reactive!(|(center, zoom)| {
        viewport.with_mut(|v| v.fly_to(center, zoom));
    }));
    use_effect(use_reactive!(|enable_drawing| {
        if !enable_drawing && session.peek().is_active() {
            dispatch(DrawCommand::Exit);
        }
    }));

    let view = viewport();
    let drawing = session();
    let draw_points = svg_points(&view, drawing.path().points());
    let vertices: Vec<(f64, f64)> = drawing
        .path()
        .points()
        .iter()
        .map(|point| view.to_screen(*point))
        .collect();
    let saved: Vec<String> = saved_paths
        .iter()
        .map(|path| svg_points(&view, path))
        .collect();
    let marker_views: Vec<(MapMarker, f64, f64)> = markers
        .iter()
        .map(|marker| {
            let (x, y) = view.to_screen(marker.position);
            (marker.clone(), x, y)
        })
        .collect();

    let canvas_class = if drawing.is_active() {
        format!("{} drawing", theme::map_canvas(&active_layer))
    } else {
        theme::map_canvas(&active_layer)
    };

    rsx! {
        section { class: "map-view",
            div { class: "map-controls",
                div { class: "layer-switcher", role: "group", aria_label: "Map layers",
                    for layer in layers {
                        button {
                            key: "{layer.id}",
                            r#type: "button",
                            class: theme::btn_toggle(layer.id == active_layer),
                            title: "{layer.style}",
                            onclick: {
                                let id = layer.id.clone();
                                move |_| {
                                    if let Some(handler) = on_layer_change {
                                        handler.call(id.clone());
                                    }
                                }
                            },
                            "{layer.label}"
                        }
                    }
                }
                div { class: "zoom-controls",
                    button { r#type: "button", class: theme::btn_outline(), aria_label: "Zoom in",
                        onclick: move |_| viewport.with_mut(|v| v.zoom_in()), "+" }
                    button { r#type: "button", class: theme::btn_outline(), aria_label: "Zoom out",
                        onclick: move |_| viewport.with_mut(|v| v.zoom_out()), "−" }
                    button { r#type: "button", class: theme::btn_outline(), aria_label: "Pan west",
                        onclick: move |_| viewport.with_mut(|v| v.pan_by(-PAN_STEP, 0.0)), "←" }
                    button { r#type: "button", class: theme::btn_outline(), aria_label: "Pan north",
                        onclick: move |_| viewport.with_mut(|v| v.pan_by(0.0, -PAN_STEP)), "↑" }
                    button { r#type: "button", class: theme::btn_outline(), aria_label: "Pan south",
                        onclick: move |_| viewport.with_mut(|v| v.pan_by(0.0, PAN_STEP)), "↓" }
                    button { r#type: "button", class: theme::btn_outline(), aria_label: "Pan east",
                        onclick: move |_| viewport.with_mut(|v| v.pan_by(PAN_STEP, 0.0)), "→" }
                }
                if enable_drawing {
                    button {
                        r#type: "button",
                        class: theme::btn_toggle(drawing.is_active()),
                        onclick: move |_| {
                            if session.peek().is_active() {
                                dispatch(DrawCommand::Exit);
                            } else {
                                dispatch(DrawCommand::Enter);
                            }
                        },
                        if drawing.is_active() { "Stop measuring" } else { "Measure" }
                    }
                }
            }

            div { class: canvas_class,
                svg {
                    width: "{CANVAS_WIDTH}",
                    height: "{CANVAS_HEIGHT}",
                    view_box: "0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}",
                    onclick: move |evt: MouseEvent| {
                        if !session.peek().is_active() {
                            return;
                        }
                        let point = evt.element_coordinates();
                        let geo = viewport.peek().to_geo(point.x, point.y);
                        dispatch(DrawCommand::AddPoint(geo));
                    },
                    ondoubleclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        dispatch(DrawCommand::Finish);
                    },
                    oncontextmenu: move |evt: MouseEvent| {
                        evt.prevent_default();
                        dispatch(DrawCommand::Finish);
                    },
                    rect { class: "map-view__ground", width: "100%", height: "100%" }

                    for (index, points) in saved.into_iter().enumerate() {
                        polyline { key: "saved-{index}", class: "saved-path", points }
                    }

                    if !draw_points.is_empty() {
                        polyline { class: "draw-path", points: draw_points }
                    }
                    for (index, (x, y)) in vertices.into_iter().enumerate() {
                        circle { key: "vertex-{index}", class: "draw-vertex", cx: "{x}", cy: "{y}", r: "4" }
                    }

                    for (marker, x, y) in marker_views {
                        g {
                            key: "{marker.id}",
                            class: theme::marker(marker.kind),
                            transform: "translate({x:.1} {y:.1})",
                            "aria-label": "{marker.title} ({marker.kind.label()})",
                            onclick: {
                                let id = marker.id.clone();
                                move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    if let Some(handler) = on_marker_click {
                                        handler.call(id.clone());
                                    }
                                }
                            },
                            circle { r: "14" }
                            text { text_anchor: "middle", dy: "4", "{marker.badge()}" }
                        }
                    }
                }
            }

            if drawing.is_active() {
                div { class: "map-view__measurement", aria_live: "polite",
                    if let Some((km, points)) = drawing.measurement() {
                        span { class: "distance-chip", "{km:.2} km" }
                        span { class: "muted", "Points: {points}" }
                    }
                    small { class: "muted", "Click to add points. Double-click or right-click to finish." }
                }
            }
        }
    }
}
