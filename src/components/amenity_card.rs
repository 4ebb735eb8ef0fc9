use leptos::{component, view, IntoView};
use leptos_router::A;
use crate::components::status_badge::CrowdBadge;
use crate::models::Amenity;

#[component]
#[must_use]
pub fn AmenityCard(amenity: Amenity, #[prop(into)] station_id: String) -> impl IntoView {
    let href = format!("/station/{station_id}/amenity/{}", amenity.id);

    view! {
        <A href=href class="card-link">
            <div class="card amenity-card">
                <div class="amenity-icon">{amenity.icon.glyph()}</div>
                <div>
                    <h3 class="card-title">{amenity.name}</h3>
                    <div class="card-subtitle">{amenity.location}</div>
                    <div class="card-row">
                        <CrowdBadge level=amenity.crowd_level/>
                        <span class="card-meta">{amenity.last_updated}</span>
                    </div>
                </div>
            </div>
        </A>
    }
}
