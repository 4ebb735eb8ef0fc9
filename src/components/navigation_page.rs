use leptos::*;
use leptos_router::{use_params_map, A};
use std::cell::RefCell;
use std::rc::Rc;
use crate::components::ar_prompt::ArPrompt;
use crate::components::navigation_map::NavigationMap;
use crate::components::not_found::LookupError;
use crate::components::route_overlay::RouteProgress;
use crate::components::station_map::MapVariant;
use crate::config::NavigationConfig;
use crate::data::registry;
use crate::models::{NavigationRoute, Station};
use crate::navigation::{NavState, ProgressSnapshot, ProgressSource, StepSimulator, Ticker};

/// Progress shown on the detailed map; nothing is highlighted before playback starts
fn map_progress(snapshot: &ProgressSnapshot) -> RouteProgress {
    RouteProgress::from_step((snapshot.state != NavState::Idle || snapshot.step > 0).then_some(snapshot.step))
}

fn step_class(index: usize, current: usize) -> &'static str {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => "step step-done",
        std::cmp::Ordering::Equal => "step step-current",
        std::cmp::Ordering::Greater => "step",
    }
}

fn play_label(state: NavState) -> &'static str {
    match state {
        NavState::Idle => "▶ Start",
        NavState::Running => "⏸ Pause",
        NavState::Completed => "↻ Restart",
    }
}

#[component]
fn DirectionsPanel(route: &'static NavigationRoute, snapshot: ReadSignal<ProgressSnapshot>) -> impl IntoView {
    view! {
        <section class="card directions-panel">
            <div class="card-row">
                <h2 class="section-title">"Current Direction"</h2>
                <span class="distance-chip">
                    {move || format!("{:.0}m remaining", snapshot.get().distance)}
                </span>
            </div>
            <div class="direction-current">
                <span class="step-number">{move || snapshot.get().step + 1}</span>
                <div>
                    <p class="direction-text">
                        {move || snapshot.with(|s| s.current_direction(route).unwrap_or_default().to_string())}
                    </p>
                    <p class="direction-next">
                        {move || format!("Next: {}", snapshot.with(|s| s.next_direction(route)))}
                    </p>
                </div>
            </div>
        </section>

        <section class="card">
            <h2 class="section-title">"All Navigation Steps"</h2>
            <ol class="step-list">
                {route.steps.iter().enumerate().map(|(index, text)| view! {
                    <li class=move || step_class(index, snapshot.get().step)>{text.clone()}</li>
                }).collect_view()}
            </ol>
        </section>
    }
}

fn navigation_view(station: &'static Station, route: &'static NavigationRoute, config: NavigationConfig) -> View {
    let tick_ms = config.simulation.tick_ms;
    let simulator = Rc::new(RefCell::new(StepSimulator::for_route(config.simulation, route)));
    let (snapshot, set_snapshot) = create_signal(simulator.borrow().snapshot());
    let (show_detailed, set_show_detailed) = create_signal(false);
    let (show_ar_prompt, set_show_ar_prompt) = create_signal(false);

    let ticker = Ticker::new();
    {
        let ticker = ticker.clone();
        on_cleanup(move || ticker.stop());
    }

    let toggle_playback = {
        let simulator = Rc::clone(&simulator);
        let ticker = ticker.clone();
        move |_: ev::MouseEvent| {
            if snapshot.get_untracked().state == NavState::Running {
                ticker.stop();
                simulator.borrow_mut().stop();
                set_snapshot.set(simulator.borrow().snapshot());
                return;
            }

            let generation = simulator.borrow_mut().start();
            set_snapshot.set(simulator.borrow().snapshot());
            if simulator.borrow().state() != NavState::Running {
                return;
            }

            let simulator = Rc::clone(&simulator);
            let stopper = ticker.clone();
            ticker.start(tick_ms, move || {
                let Some(next) = simulator.borrow_mut().on_tick(generation) else {
                    return;
                };
                let arrived = next.arrived();
                set_snapshot.set(next);
                if arrived {
                    stopper.stop_deferred();
                }
            });
        }
    };

    let detailed_progress = Signal::derive(move || snapshot.with(map_progress));

    view! {
        <div class="page navigation-page">
            <header class="page-header">
                <A href=format!("/station/{}", station.id) class="back-link">"←"</A>
                <h1 class="page-title">{route.name.clone()}</h1>
            </header>

            <section class="card">
                <div class="card-row">
                    <h2 class="section-title">"Navigation Map"</h2>
                    <span class="card-meta">
                        {format!("🕒 {} • {}", route.estimated_time, route.difficulty.label())}
                    </span>
                </div>
                <NavigationMap
                    waypoints=route.waypoints.clone()
                    title=route.name.clone()
                    progress=RouteProgress::Plain
                    variant=MapVariant::Simple
                />
                <div class="button-row">
                    <button class="btn btn-primary" on:click=move |_| set_show_detailed.update(|v| *v = !*v)>
                        {move || if show_detailed.get() { "Hide Detailed View" } else { "Show Detailed View" }}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| set_show_ar_prompt.set(true)>
                        "📷 AR View"
                    </button>
                </div>
            </section>

            <section class="card playback">
                <button class="btn btn-primary" on:click=toggle_playback>
                    {move || play_label(snapshot.get().state)}
                </button>
                <Show when=move || snapshot.get().arrived()>
                    <p class="arrived">{crate::models::ARRIVED_MESSAGE}</p>
                </Show>
            </section>

            <DirectionsPanel route=route snapshot=snapshot/>

            <Show when=move || show_detailed.get()>
                <section class="card">
                    <h2 class="section-title">"Detailed Navigation Preview"</h2>
                    <NavigationMap
                        waypoints=route.waypoints.clone()
                        title=station.name.clone()
                        progress=detailed_progress
                        variant=MapVariant::Detailed
                    />
                </section>
            </Show>

            <ArPrompt
                is_open=show_ar_prompt
                station_id=station.id.clone()
                route_id=route.id.clone()
                on_close=Callback::new(move |()| set_show_ar_prompt.set(false))
            />
        </div>
    }
    .into_view()
}

#[component]
#[must_use]
pub fn NavigationPage() -> impl IntoView {
    let params = use_params_map();
    let config = use_context::<NavigationConfig>().unwrap_or_default();

    move || {
        let (station_id, route_id) = params.with(|p| {
            (
                p.get("station_id").cloned().unwrap_or_default(),
                p.get("route_id").cloned().unwrap_or_default(),
            )
        });
        match registry().and_then(|registry| registry.find_route(&station_id, &route_id)) {
            Ok((station, route)) => navigation_view(station, route, config.clone()),
            Err(error) => view! { <LookupError error=error/> }.into_view(),
        }
    }
}
