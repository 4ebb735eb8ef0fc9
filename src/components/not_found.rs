use leptos::{component, view, IntoView};
use leptos_router::A;
use crate::error::NavError;

/// Terminal view for unknown ids, always offering a way back
#[component]
#[must_use]
pub fn NotFound(
    #[prop(into)] message: String,
    #[prop(into)] back_href: String,
    #[prop(into, default = "Back".to_string())] back_label: String,
) -> impl IntoView {
    view! {
        <div class="not-found">
            <p>{message}</p>
            <A href=back_href class="btn btn-primary">{back_label}</A>
        </div>
    }
}

/// `NotFound` for a lookup error, linking back to the nearest valid parent
#[component]
#[must_use]
pub fn LookupError(error: NavError) -> impl IntoView {
    let (href, label) = match &error {
        NavError::RouteNotFound { station_id, .. } | NavError::AmenityNotFound { station_id, .. } => {
            (format!("/station/{station_id}"), "Back to Station")
        }
        _ => ("/".to_string(), "Back to Stations"),
    };
    if error.is_not_found() {
        leptos::logging::warn!("{}", error);
    } else {
        leptos::logging::error!("{}", error);
    }

    view! {
        <NotFound message=error.to_string() back_href=href back_label=label/>
    }
}
