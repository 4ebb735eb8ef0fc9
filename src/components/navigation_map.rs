use leptos::*;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use crate::components::route_overlay::{draw_route, RoutePlan, RouteProgress};
use crate::components::station_map::{draw_station_map, MapVariant, StationLayout};
use crate::models::Waypoint;

/// Paint the station background and route overlay at the variant's intrinsic size
pub(crate) fn render_navigation_map(
    canvas: &HtmlCanvasElement,
    waypoints: &[Waypoint],
    progress: RouteProgress,
    variant: MapVariant,
) {
    let (width, height) = variant.canvas_size();
    canvas.set_width(width);
    canvas.set_height(height);

    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        leptos::logging::warn!("Canvas 2d context unavailable");
        return;
    };

    let size = (f64::from(width), f64::from(height));
    let layout = StationLayout::compute(variant, size.0, size.1);
    draw_station_map(&ctx, &layout);

    let plan = RoutePlan::build(waypoints, size, progress);
    draw_route(&ctx, &plan);
}

fn setup_render_effect(
    canvas_ref: NodeRef<html::Canvas>,
    waypoints: StoredValue<Vec<Waypoint>>,
    progress: MaybeSignal<RouteProgress>,
    variant: MaybeSignal<MapVariant>,
) {
    let (render_requested, set_render_requested) = create_signal(false);

    create_effect(move |_| {
        let _ = canvas_ref.get();
        let _ = progress.get();
        let _ = variant.get();

        if !render_requested.get_untracked() {
            set_render_requested.set(true);

            let Some(window) = web_sys::window() else { return };
            let callback = Closure::once(move || {
                set_render_requested.set(false);

                let Some(canvas) = canvas_ref.get_untracked() else { return };
                waypoints.with_value(|waypoints| {
                    render_navigation_map(&canvas, waypoints, progress.get_untracked(), variant.get_untracked());
                });
            });

            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
            callback.forget();
        }
    });
}

#[component]
#[must_use]
pub fn NavigationMap(
    waypoints: Vec<Waypoint>,
    #[prop(into)] title: String,
    #[prop(into)] progress: MaybeSignal<RouteProgress>,
    #[prop(into)] variant: MaybeSignal<MapVariant>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let waypoints = store_value(waypoints);

    setup_render_effect(canvas_ref, waypoints, progress, variant);

    view! {
        <div class="navigation-map">
            <canvas node_ref=canvas_ref class="navigation-map-canvas"></canvas>
            <div class="navigation-map-footer">
                <p class="navigation-map-title">{title}</p>
                {move || {
                    let (first, second) = match progress.get() {
                        RouteProgress::Plain => ("Start", "Destination"),
                        _ => ("Completed", "Remaining"),
                    };
                    view! {
                        <div class="map-legend">
                            <span class="legend-dot legend-start"></span>
                            <span>{first}</span>
                            <span class="legend-dot legend-rest"></span>
                            <span>{second}</span>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas() -> HtmlCanvasElement {
        let document = web_sys::window().unwrap().document().unwrap();
        document.create_element("canvas").unwrap().dyn_into().unwrap()
    }

    fn pixel(canvas: &HtmlCanvasElement, x: f64, y: f64) -> (u8, u8, u8) {
        let ctx: CanvasRenderingContext2d = canvas.get_context("2d").unwrap().unwrap().dyn_into().unwrap();
        let data = ctx.get_image_data(x, y, 1.0, 1.0).unwrap().data();
        (data[0], data[1], data[2])
    }

    #[wasm_bindgen_test]
    fn test_canvas_sized_by_variant() {
        let canvas = canvas();
        render_navigation_map(&canvas, &[], RouteProgress::Plain, MapVariant::Detailed);
        assert_eq!((canvas.width(), canvas.height()), (500, 300));
        render_navigation_map(&canvas, &[], RouteProgress::Plain, MapVariant::Simple);
        assert_eq!((canvas.width(), canvas.height()), (400, 240));
    }

    #[wasm_bindgen_test]
    fn test_background_painted() {
        let canvas = canvas();
        render_navigation_map(&canvas, &[], RouteProgress::Plain, MapVariant::Simple);
        assert_eq!(pixel(&canvas, 10.0, 10.0), (0xf5, 0xf5, 0xf5));
    }

    #[wasm_bindgen_test]
    fn test_single_waypoint_marker_drawn() {
        let canvas = canvas();
        let waypoints = vec![Waypoint::new(50.0, 50.0, "Here")];
        render_navigation_map(&canvas, &waypoints, RouteProgress::Plain, MapVariant::Simple);
        // left of the number glyph, inside the start marker
        assert_eq!(pixel(&canvas, 194.0, 120.0), (0x4c, 0xc9, 0xf0));
    }

    #[wasm_bindgen_test]
    fn test_active_marker_color() {
        let canvas = canvas();
        let waypoints = vec![
            Waypoint::new(25.0, 50.0, "A"),
            Waypoint::new(50.0, 50.0, "B"),
            Waypoint::new(75.0, 50.0, "C"),
        ];
        render_navigation_map(&canvas, &waypoints, RouteProgress::AtStep(7), MapVariant::Detailed);
        // the step is clamped onto the last waypoint at (375, 150)
        assert_eq!(pixel(&canvas, 369.0, 150.0), (0xfa, 0x52, 0x52));
    }
}
