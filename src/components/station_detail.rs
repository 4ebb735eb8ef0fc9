use leptos::*;
use leptos_router::{use_params_map, A};
use crate::components::amenity_card::AmenityCard;
use crate::components::navigation_map::NavigationMap;
use crate::components::not_found::LookupError;
use crate::components::route_overlay::RouteProgress;
use crate::components::station_map::MapVariant;
use crate::components::status_badge::CrowdBadge;
use crate::components::tab_view::{Tab, TabPanel, TabView};
use crate::components::ticket_queue_card::TicketQueueCard;
use crate::components::train_card::TrainCard;
use crate::data::registry;
use crate::error::NavError;
use crate::models::{NavigationRoute, Station};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Amenities,
    Trains,
    Tickets,
}

fn route_card(station_id: &'static str, route: &'static NavigationRoute) -> impl IntoView {
    view! {
        <A href=format!("/navigation/{station_id}/{}", route.id) class="card route-card">
            <span class="route-icon">"🧭"</span>
            <h3 class="card-title">{route.name.clone()}</h3>
            <p class="card-meta">{format!("{} • {}", route.estimated_time, route.difficulty.label())}</p>
        </A>
    }
}

fn next_departure(station: &Station) -> String {
    station
        .platforms
        .first()
        .and_then(|p| p.current_train.as_ref())
        .and_then(|t| t.departure_label())
        .unwrap_or_else(|| "N/A".to_string())
}

fn station_view(station: &'static Station, routes: &'static [NavigationRoute]) -> View {
    let (is_favorite, set_is_favorite) = create_signal(station.is_favorite);
    let active_tab = create_rw_signal(DetailTab::Amenities);
    let tabs = vec![
        Tab { id: DetailTab::Amenities, label: "Amenities" },
        Tab { id: DetailTab::Trains, label: "Trains" },
        Tab { id: DetailTab::Tickets, label: "Ticket Counters" },
    ];
    let station_id = station.id.as_str();

    view! {
        <div class="page station-detail">
            <header class="station-header">
                <div>
                    <h1 class="page-title">{station.name.clone()}</h1>
                    <p>{format!("📍 {}, {}", station.city, station.state)}</p>
                    <p>{format!("Station Code: {}", station.code)}</p>
                </div>
                <button
                    class=move || if is_favorite.get() { "favorite favorite-on" } else { "favorite" }
                    on:click=move |_| set_is_favorite.update(|f| *f = !*f)
                >
                    "♥"
                </button>
            </header>

            <div class="status-bar">
                <CrowdBadge level=station.crowd_level/>
                <span>{format!("Next: {}", next_departure(station))}</span>
                <span>"Live"</span>
            </div>

            {routes.first().map(|route| view! {
                <A href=format!("/navigation/{station_id}/{}", route.id) class="btn btn-primary">"Navigate"</A>
            })}

            <h2 class="section-title">"Quick Navigation"</h2>
            <div class="route-grid">
                {routes.iter().map(|route| route_card(station_id, route)).collect_view()}
            </div>

            <TabView tabs=tabs active_tab=active_tab>
                <TabPanel when=Signal::derive(move || active_tab.get() == DetailTab::Amenities)>
                    {station.amenities.iter().map(|amenity| view! {
                        <AmenityCard amenity=amenity.clone() station_id=station_id/>
                    }).collect_view()}
                </TabPanel>
                <TabPanel when=Signal::derive(move || active_tab.get() == DetailTab::Trains)>
                    <h3>"Current Trains"</h3>
                    {station.platforms.iter()
                        .filter_map(|p| p.current_train.clone())
                        .map(|train| view! { <TrainCard train=train/> })
                        .collect_view()}
                    <h3>"Upcoming Trains"</h3>
                    {station.upcoming_trains.iter()
                        .map(|train| view! { <TrainCard train=train.clone()/> })
                        .collect_view()}
                </TabPanel>
                <TabPanel when=Signal::derive(move || active_tab.get() == DetailTab::Tickets)>
                    {station.ticket_counters.iter()
                        .map(|counter| view! { <TicketQueueCard counter=counter.clone()/> })
                        .collect_view()}
                </TabPanel>
            </TabView>

            <h2 class="section-title">"Station Map"</h2>
            {routes.first().map(|route| view! {
                <NavigationMap
                    waypoints=route.waypoints.clone()
                    title="Interactive Station Map"
                    progress=RouteProgress::Plain
                    variant=MapVariant::Simple
                />
            })}
        </div>
    }
    .into_view()
}

#[component]
#[must_use]
pub fn StationDetailPage() -> impl IntoView {
    let params = use_params_map();

    move || {
        let id = params.with(|p| p.get("id").cloned().unwrap_or_default());
        let lookup = registry().and_then(|registry| {
            let station = registry
                .get_station(&id)
                .ok_or_else(|| NavError::StationNotFound(id.clone()))?;
            Ok((station, registry.get_routes(&id)))
        });
        match lookup {
            Ok((station, routes)) => station_view(station, routes),
            Err(error) => view! { <LookupError error=error/> }.into_view(),
        }
    }
}
