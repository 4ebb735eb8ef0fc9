use leptos::*;
use leptos_router::A;
use crate::components::not_found::LookupError;
use crate::components::status_badge::CrowdBadge;
use crate::data::{registry, StationRegistry};
use crate::geolocation::use_geolocation;
use crate::locator::{find_nearest_station, format_distance, sort_by_distance, StationDistance};
use crate::models::Station;

#[component]
fn NearbyStationBanner(station: &'static Station, distance_km: f64, navigate_href: Option<String>) -> impl IntoView {
    let distance = format_distance(distance_km);

    view! {
        <div class="nearby-banner">
            <h3>"Nearby Station"</h3>
            <p>
                <span class="nearby-name">{station.name.clone()}</span>
                {(!distance.is_empty()).then(|| format!(" • {distance} away"))}
            </p>
            <div class="nearby-actions">
                <A href=format!("/station/{}", station.id) class="btn btn-primary">"View Details"</A>
                {navigate_href.map(|href| view! {
                    <A href=href class="btn btn-secondary">"🗺 Navigate"</A>
                })}
            </div>
        </div>
    }
}

fn station_row(entry: StationDistance<'static>) -> impl IntoView {
    let station = entry.station;
    let distance = format_distance(entry.distance_km);
    let favorite_class = if station.is_favorite { "favorite favorite-on" } else { "favorite" };

    view! {
        <A href=format!("/station/{}", station.id) class="card-link">
            <div class="card station-card">
                <div class="card-row">
                    <div>
                        <h2 class="card-title">{station.name.clone()}</h2>
                        <div class="card-subtitle">
                            {format!("📍 {}, {}", station.city, station.state)}
                            {(!distance.is_empty()).then(|| view! {
                                <span class="distance-chip">{distance}</span>
                            })}
                        </div>
                    </div>
                    <span class=favorite_class>"♥"</span>
                </div>
                <div class="card-row">
                    <span>{format!("{} Platforms", station.platforms.len())}</span>
                    <CrowdBadge level=station.crowd_level/>
                </div>
            </div>
        </A>
    }
}

fn stations_view(registry: &'static StationRegistry) -> View {
    let location = use_geolocation();
    let (query, set_query) = create_signal(String::new());

    let nearby = move || {
        let loc = location.get();
        let (station, distance_km) =
            find_nearest_station(registry.get_station_list(), loc.latitude, loc.longitude)?;
        let navigate_href = registry
            .get_routes(&station.id)
            .first()
            .map(|route| format!("/navigation/{}/{}", station.id, route.id));
        Some(view! { <NearbyStationBanner station=station distance_km=distance_km navigate_href=navigate_href/> })
    };

    let rows = move || {
        let loc = location.get();
        let q = query.get();
        let matches = registry.search(q.trim());
        if matches.is_empty() {
            return view! {
                <p class="empty-state">{format!("No stations found matching \"{q}\"")}</p>
            }
            .into_view();
        }
        sort_by_distance(matches, loc.latitude, loc.longitude)
            .into_iter()
            .map(station_row)
            .collect_view()
    };

    view! {
        <div class="page stations-page">
            <h1 class="page-title">"Select Station"</h1>
            {nearby}
            <input
                type="text"
                class="search-input"
                placeholder="Search for stations..."
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <div class="station-list">{rows}</div>
        </div>
    }
    .into_view()
}

#[component]
#[must_use]
pub fn StationsPage() -> impl IntoView {
    match registry() {
        Ok(registry) => stations_view(registry),
        Err(error) => view! { <LookupError error=error/> }.into_view(),
    }
}
