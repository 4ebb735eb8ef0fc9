use leptos::*;
use leptos_router::{use_params_map, A};
use leptos_use::use_window_size;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::ar::camera::detach;
use crate::ar::{
    acquire_camera, camera_available, fallback_href, play_stream, ArAvailability, ArFrame, ArMarker, ArSession,
    ArSupportCache, CameraStream, ObstacleWarning, Viewport,
};
use crate::components::not_found::LookupError;
use crate::config::NavigationConfig;
use crate::data::registry;
use crate::error::NavError;
use crate::logging::log;
use crate::models::{NavigationRoute, Station};
use crate::navigation::{StepSimulator, Ticker};

type SharedSession = Rc<RefCell<ArSession<StepSimulator>>>;

fn marker_style(marker: &ArMarker) -> String {
    format!("left: {:.1}px; top: {:.1}px", marker.x, marker.y)
}

fn warning_style(warning: &ObstacleWarning) -> String {
    format!(
        "left: {:.0}%; bottom: {:.0}%",
        warning.anchor.0 * 100.0,
        warning.anchor.1 * 100.0
    )
}

fn compass_style(heading: f64) -> String {
    format!("transform: translate(-50%, -50%) rotate({heading:.1}deg)")
}

/// Owns the camera and timer for one AR screen.
///
/// `stop` and unmount both funnel through `shutdown`, which drops the camera
/// stream; a stream that resolves after unmount is dropped on arrival.
/// A start is only accepted from `Acquiring`, which the click handler enters
/// from `Ready`, so at most one camera request is in flight.
#[derive(Clone)]
struct ArController {
    session: SharedSession,
    camera: Rc<RefCell<Option<CameraStream>>>,
    ticker: Ticker,
    disposed: Rc<Cell<bool>>,
    video_ref: NodeRef<html::Video>,
    availability: RwSignal<ArAvailability>,
    support: ArSupportCache,
    set_frame: WriteSignal<ArFrame>,
    tick_ms: u32,
}

impl ArController {
    fn shutdown(&self) {
        self.ticker.stop();
        self.session.borrow_mut().stop();
        if let Some(video) = self.video_ref.get_untracked() {
            detach(&video);
        }
        if let Some(camera) = self.camera.borrow_mut().take() {
            camera.release();
        }
    }

    fn stop(&self) {
        self.shutdown();
        self.set_frame.set(self.session.borrow().frame());
        self.availability.set(ArAvailability::Ready);
    }

    fn fail(&self, error: NavError) {
        leptos::logging::warn!("AR unavailable: {}", error);
        self.shutdown();
        self.support.record(&error);
        self.availability.set(ArAvailability::Unsupported(error));
    }

    /// Move from `Ready` to `Acquiring`; false if a request is already running
    fn begin(&self) -> bool {
        if !self.availability.with_untracked(ArAvailability::can_start) {
            return false;
        }
        self.availability.set(ArAvailability::Acquiring);
        true
    }

    async fn start(self, viewport: Viewport) {
        if self.availability.get_untracked() != ArAvailability::Acquiring {
            return;
        }
        let Some(video) = self.video_ref.get_untracked() else {
            self.availability.set(ArAvailability::Ready);
            return;
        };

        let stream = match acquire_camera().await {
            Ok(stream) => stream,
            Err(error) => {
                if !self.disposed.get() {
                    self.fail(error);
                }
                return;
            }
        };
        if self.disposed.get() {
            log!("AR view closed before the camera opened");
            stream.release();
            return;
        }
        if let Err(error) = play_stream(&video, &stream).await {
            detach(&video);
            stream.release();
            if !self.disposed.get() {
                self.fail(error);
            }
            return;
        }
        if self.disposed.get() {
            detach(&video);
            stream.release();
            return;
        }
        *self.camera.borrow_mut() = Some(stream);

        let generation = self.session.borrow_mut().start(viewport);
        let frame = self.session.borrow().frame();
        let arrived = frame.progress.arrived();
        self.set_frame.set(frame);
        self.availability.set(ArAvailability::Active);
        if arrived {
            return;
        }

        let session = Rc::clone(&self.session);
        let set_frame = self.set_frame;
        let stopper = self.ticker.clone();
        self.ticker.start(self.tick_ms, move || {
            let Some(frame) = session.borrow_mut().tick(generation) else {
                return;
            };
            let arrived = frame.progress.arrived();
            set_frame.set(frame);
            if arrived {
                stopper.stop_deferred();
            }
        });
    }
}

#[component]
fn ArFallback(
    station_id: String,
    route: &'static NavigationRoute,
    availability: RwSignal<ArAvailability>,
) -> impl IntoView {
    let href = fallback_href(&station_id, &route.id);
    let message = move || {
        availability
            .with(ArAvailability::error_message)
            .unwrap_or_else(|| "AR is not supported on this device".to_string())
    };
    let retry = move |_: ev::MouseEvent| availability.set(ArAvailability::from_camera_check(camera_available()));

    view! {
        <div class="page ar-fallback">
            <A href=href.clone() class="back-link">"← Back to Map Navigation"</A>
            <section class="card">
                <h1 class="page-title">"AR Navigation Not Available"</h1>
                <div class="info-box info-error">{message}</div>
                <h2 class="section-title">"Alternative Navigation Options"</h2>
                <A href=href class="btn btn-primary btn-block">"🗺 Use Map Navigation"</A>
                <Show when=move || availability.with(ArAvailability::can_retry)>
                    <button class="btn btn-secondary btn-block" on:click=retry>"Try Again"</button>
                </Show>
                <div class="info-box">
                    <h3>"Why isn't AR working?"</h3>
                    <ul>
                        <li>"Your device may not support camera access through the browser"</li>
                        <li>"Camera permissions may be blocked in your browser settings"</li>
                        <li>"Your browser may not support the required features for AR"</li>
                    </ul>
                </div>
            </section>
            <section class="card">
                <h2 class="section-title">"Navigation Steps"</h2>
                <ol class="step-list">
                    {route.steps.iter().enumerate().map(|(index, step)| view! {
                        <li class={if index == 0 { "step step-current" } else { "step" }}>{step.clone()}</li>
                    }).collect_view()}
                </ol>
            </section>
        </div>
    }
}

#[component]
fn ArOverlay(frame: ReadSignal<ArFrame>, on_stop: Callback<()>) -> impl IntoView {
    let (show_info, set_show_info) = create_signal(false);

    view! {
        <div class="ar-overlay">
            <For
                each=move || frame.get().markers
                key=|marker| marker.id
                children=move |marker| {
                    let id = marker.id;
                    let caption = move || {
                        frame.with(|f| f.markers.iter().find(|m| m.id == id).map(ArMarker::caption))
                            .unwrap_or_default()
                    };
                    view! {
                        <div class="ar-marker" style=marker_style(&marker)>
                            <div class="ar-marker-dot">{id}</div>
                            <div class="ar-marker-caption">{caption}</div>
                        </div>
                    }
                }
            />

            <div class="ar-compass" style=move || compass_style(frame.get().heading)>"🧭"</div>

            <div class="ar-direction">
                <p class="ar-direction-text">{move || frame.get().direction.unwrap_or_default()}</p>
                <p class="ar-direction-next">{move || frame.get().next_line}</p>
            </div>

            <div class="ar-distance">
                {move || format!("📍 {:.0}m remaining", frame.get().progress.distance)}
            </div>

            {move || frame.get().warnings.into_iter().map(|warning| view! {
                <div class="ar-warning" style=warning_style(&warning)>
                    <span class="ar-warning-icon">"⚠"</span>
                    <span class="ar-warning-text">{warning.text}</span>
                </div>
            }).collect_view()}

            <Show when=move || show_info.get()>
                <div class="ar-info">
                    "Follow the numbered markers. Warnings appear when obstacles are reported ahead."
                </div>
            </Show>

            <div class="ar-controls">
                <button class="ar-button" on:click=move |_| set_show_info.update(|v| *v = !*v)>"ℹ"</button>
                <button class="ar-button ar-button-stop" on:click=move |_| on_stop.call(())>"✕"</button>
            </div>
        </div>
    }
}

fn ar_view(
    station: &'static Station,
    route: &'static NavigationRoute,
    config: NavigationConfig,
    support: ArSupportCache,
) -> View {
    let simulator = StepSimulator::for_route(config.simulation.clone(), route);
    let session: SharedSession = Rc::new(RefCell::new(ArSession::new(simulator, config.ar, route.clone())));
    let (frame, set_frame) = create_signal(session.borrow().frame());
    let availability = create_rw_signal(ArAvailability::Unknown);
    let window_size = use_window_size();
    let (width, height) = (window_size.width, window_size.height);

    let controller = ArController {
        session,
        camera: Rc::new(RefCell::new(None)),
        ticker: Ticker::new(),
        disposed: Rc::new(Cell::new(false)),
        video_ref: create_node_ref::<html::Video>(),
        availability,
        support,
        set_frame,
        tick_ms: config.simulation.tick_ms,
    };

    create_effect(move |_| {
        let initial = ArAvailability::initial(support.cached(), camera_available());
        if let ArAvailability::Unsupported(error) = &initial {
            support.record(error);
        }
        availability.set(initial);
    });

    {
        let controller = controller.clone();
        on_cleanup(move || {
            controller.disposed.set(true);
            controller.shutdown();
        });
    }

    let start = {
        let controller = controller.clone();
        move |_: ev::MouseEvent| {
            if !controller.begin() {
                return;
            }
            let viewport = Viewport::new(width.get_untracked(), height.get_untracked());
            spawn_local(controller.clone().start(viewport));
        }
    };
    let stop = {
        let controller = controller.clone();
        Callback::new(move |()| controller.stop())
    };

    let station_id = station.id.clone();
    let video_ref = controller.video_ref;
    let map_href = fallback_href(&station.id, &route.id);
    let is_active = move || availability.with(|a| *a == ArAvailability::Active);
    let is_unsupported = move || availability.with(|a| matches!(a, ArAvailability::Unsupported(_)));
    let is_acquiring = move || availability.with(|a| *a == ArAvailability::Acquiring);

    view! {
        <div class="ar-page">
            <video
                node_ref=video_ref
                class=move || if is_active() { "ar-video" } else { "ar-video hidden" }
                playsinline=true
                muted=true
            ></video>

            <Show when=is_active>
                <ArOverlay frame=frame on_stop=stop/>
            </Show>

            <Show when=is_unsupported>
                <ArFallback station_id=station_id.clone() route=route availability=availability/>
            </Show>

            <Show when=move || !is_active() && !is_unsupported()>
                <div class="ar-start">
                    <h2 class="page-title">{route.name.clone()}</h2>
                    <p>"Experience real-time directions with AR navigation"</p>
                    <button
                        class="btn btn-primary btn-block"
                        disabled=move || !availability.with(ArAvailability::can_start)
                        on:click=start.clone()
                    >
                        {move || if is_acquiring() { "📷 Starting camera..." } else { "📷 Start AR Navigation" }}
                    </button>
                    <A href=map_href.clone() class="btn btn-secondary btn-block">"📍 Return to Map View"</A>
                    <div class="info-box">
                        <h3>"What is AR Navigation?"</h3>
                        <p>
                            "AR Navigation uses your camera to show directions overlaid on the real world, "
                            "making it easier to find your way around the station."
                        </p>
                    </div>
                </div>
            </Show>
        </div>
    }
    .into_view()
}

#[component]
#[must_use]
pub fn ArNavigationPage() -> impl IntoView {
    let params = use_params_map();
    let config = use_context::<NavigationConfig>().unwrap_or_default();
    let support = use_context::<ArSupportCache>().unwrap_or_default();

    move || {
        let (station_id, route_id) = params.with(|p| {
            (
                p.get("station_id").cloned().unwrap_or_default(),
                p.get("route_id").cloned().unwrap_or_default(),
            )
        });
        match registry().and_then(|registry| registry.find_route(&station_id, &route_id)) {
            Ok((station, route)) => ar_view(station, route, config.clone(), support),
            Err(error) => view! { <LookupError error=error/> }.into_view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_style() {
        let marker = ArMarker {
            id: 1,
            x: 120.3,
            y: 80.0,
            label: "Entrance".to_string(),
            distance: 100.0,
        };
        assert_eq!(marker_style(&marker), "left: 120.3px; top: 80.0px");
    }

    #[test]
    fn test_warning_style_uses_left_and_bottom() {
        let warning = ObstacleWarning {
            text: "Caution: Crowd Ahead".to_string(),
            anchor: (0.75, 0.33),
        };
        assert_eq!(warning_style(&warning), "left: 75%; bottom: 33%");
    }

    #[test]
    fn test_compass_style() {
        assert_eq!(compass_style(-4.26), "transform: translate(-50%, -50%) rotate(-4.3deg)");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use leptos_router::Router;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const STATION: &str = "chennai-central";
    const ROUTE: &str = "chennai-central-platform";

    fn route() -> &'static NavigationRoute {
        let (_, route) = registry().unwrap().find_route(STATION, ROUTE).unwrap();
        route
    }

    fn mount_fallback(error: NavError) -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let container: web_sys::HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
        document.body().unwrap().append_child(&container).unwrap();

        let availability = create_rw_signal(ArAvailability::Unsupported(error));
        mount_to(container.clone(), move || {
            view! {
                <Router>
                    <ArFallback station_id=STATION.to_string() route=route() availability=availability/>
                </Router>
            }
        });
        container
    }

    fn controller() -> ArController {
        let session = ArSession::new(
            StepSimulator::for_route(Default::default(), route()),
            Default::default(),
            route().clone(),
        );
        let (_, set_frame) = create_signal(session.frame());
        ArController {
            session: Rc::new(RefCell::new(session)),
            camera: Rc::new(RefCell::new(None)),
            ticker: Ticker::new(),
            disposed: Rc::new(Cell::new(false)),
            video_ref: create_node_ref::<html::Video>(),
            availability: create_rw_signal(ArAvailability::Ready),
            support: ArSupportCache::new(),
            set_frame,
            tick_ms: 200,
        }
    }

    #[wasm_bindgen_test]
    fn test_unsupported_links_back_to_map() {
        let container = mount_fallback(NavError::DeviceUnsupported("no camera".to_string()));
        let selector = format!("a[href=\"/navigation/{STATION}/{ROUTE}\"]");
        assert!(container.query_selector(&selector).unwrap().is_some());
        assert!(container.text_content().unwrap().contains("no camera"));
        assert!(!container.text_content().unwrap().contains("Try Again"));
    }

    #[wasm_bindgen_test]
    fn test_transient_failure_offers_retry() {
        let container = mount_fallback(NavError::TransientAcquisitionFailure("camera busy".to_string()));
        assert!(container.text_content().unwrap().contains("Try Again"));
    }

    #[wasm_bindgen_test]
    fn test_second_start_rejected_while_acquiring() {
        let controller = controller();
        assert!(controller.begin());
        assert_eq!(controller.availability.get_untracked(), ArAvailability::Acquiring);
        assert!(!controller.begin());
    }

    #[wasm_bindgen_test]
    fn test_permanent_failure_cached_for_session() {
        let controller = controller();
        controller.fail(NavError::DeviceUnsupported("no camera".to_string()));
        assert!(matches!(
            controller.availability.get_untracked(),
            ArAvailability::Unsupported(NavError::DeviceUnsupported(_))
        ));
        assert!(controller.support.cached().is_some());
        assert_eq!(
            ArAvailability::initial(controller.support.cached(), true),
            controller.availability.get_untracked()
        );
    }

    #[wasm_bindgen_test]
    fn test_transient_failure_not_cached() {
        let controller = controller();
        controller.fail(NavError::TransientAcquisitionFailure("blocked".to_string()));
        assert!(controller.availability.with_untracked(ArAvailability::can_retry));
        assert!(controller.support.cached().is_none());
    }
}
