use leptos::*;
use leptos_router::{use_params_map, A};
use crate::components::navigation_map::NavigationMap;
use crate::components::not_found::LookupError;
use crate::components::route_overlay::RouteProgress;
use crate::components::station_map::MapVariant;
use crate::components::status_badge::CrowdBadge;
use crate::data::{registry, StationRegistry};
use crate::models::{Amenity, NavigationRoute, Station, Waypoint};

/// Straight two-point path used when a station has no routes to preview
fn preview_waypoints(amenity: &Amenity) -> Vec<Waypoint> {
    vec![
        Waypoint::new(30.0, 30.0, "You are here"),
        Waypoint::new(70.0, 60.0, amenity.name.clone()),
    ]
}

fn navigation_options(
    station_id: &'static str,
    amenity: &'static Amenity,
    route: Option<&'static NavigationRoute>,
) -> View {
    let Some(route) = route else {
        return view! {
            <p class="card-meta">"No guided route is available for this amenity yet."</p>
        }
        .into_view();
    };
    let map_href = format!("/navigation/{station_id}/{}", route.id);
    let ar_href = format!("/ar-navigation/{station_id}/{}", route.id);

    view! {
        <div class="nav-options">
            <A href=map_href.clone() class="nav-option">
                <span class="nav-option-icon">"🧭"</span>
                <span>"Map"</span>
            </A>
            <A href=ar_href class="nav-option">
                <span class="nav-option-icon">"📷"</span>
                <span>"AR View"</span>
            </A>
        </div>
        <A href=map_href class="btn btn-primary btn-block">
            {format!("Navigate to {}", amenity.name)}
        </A>
    }
    .into_view()
}

fn amenity_view(registry: &'static StationRegistry, station: &'static Station, amenity: &'static Amenity) -> View {
    let route = registry.route_for_amenity(&station.id, amenity);
    let (estimated_time, waypoints) = route.map_or_else(
        || ("2-3 minutes".to_string(), preview_waypoints(amenity)),
        |r| (r.estimated_time.clone(), r.waypoints.clone()),
    );
    let station_href = format!("/station/{}", station.id);

    view! {
        <div class="page amenity-detail">
            <header class="amenity-header">
                <A href=station_href.clone() class="back-link">"←"</A>
                <div>
                    <span class="amenity-icon">{amenity.icon.glyph()}</span>
                    <h1 class="page-title">{amenity.name.clone()}</h1>
                    <p>{format!("📍 {}", amenity.location)}</p>
                </div>
            </header>

            <div class="status-bar">
                <CrowdBadge level=amenity.crowd_level/>
                <span class="card-meta">{format!("Updated {}", amenity.last_updated)}</span>
            </div>

            <section class="card">
                <h2 class="section-title">"Details"</h2>
                <p>{amenity.details.clone()}</p>
                <div class="info-box">
                    <p>{format!("Located at {} in {}", amenity.location, station.name)}</p>
                    <p>{format!("Station Code: {}", station.code)}</p>
                </div>
            </section>

            <section class="card">
                <h2 class="section-title">"Navigation Options"</h2>
                {navigation_options(&station.id, amenity, route)}
            </section>

            <section class="card">
                <h2 class="section-title">"Estimated Travel"</h2>
                <div class="card-row">
                    <span>{format!("🕒 {estimated_time}")}</span>
                    <span>"📍 ~100 meters"</span>
                </div>
            </section>

            <section class="card">
                <h2 class="section-title">"Location Preview"</h2>
                <NavigationMap
                    waypoints=waypoints
                    title=format!("Path to {}", amenity.name)
                    progress=RouteProgress::Plain
                    variant=MapVariant::Simple
                />
                <A href=station_href class="btn btn-secondary">"Back to Station"</A>
            </section>
        </div>
    }
    .into_view()
}

#[component]
#[must_use]
pub fn AmenityDetailPage() -> impl IntoView {
    let params = use_params_map();

    move || {
        let (station_id, amenity_id) = params.with(|p| {
            (
                p.get("station_id").cloned().unwrap_or_default(),
                p.get("amenity_id").cloned().unwrap_or_default(),
            )
        });
        let lookup = registry().and_then(|registry| {
            let (station, amenity) = registry.find_amenity(&station_id, &amenity_id)?;
            Ok((registry, station, amenity))
        });
        match lookup {
            Ok((registry, station, amenity)) => amenity_view(registry, station, amenity),
            Err(error) => view! { <LookupError error=error/> }.into_view(),
        }
    }
}
