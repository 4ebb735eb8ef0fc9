use leptos::*;
use leptos_router::A;

/// Interstitial offering AR navigation before leaving the map view
#[component]
#[must_use]
pub fn ArPrompt(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] station_id: String,
    #[prop(into)] route_id: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let href = format!("/ar-navigation/{station_id}/{route_id}");

    move || {
        if !is_open.get() {
            return ().into_view();
        }
        view! {
            <div class="modal-overlay">
                <div class="modal ar-prompt">
                    <div class="modal-header">
                        <h2>"AR Navigation Available"</h2>
                        <p>"Experience real-time directions in your surroundings"</p>
                    </div>
                    <div class="modal-body">
                        <p>
                            "AR Navigation uses your camera to overlay directions on your real-world view. "
                            "This creates an immersive experience with real-time guidance."
                        </p>
                        <div class="info-box info-warning">
                            "If AR doesn't work on your device, you'll be provided with "
                            "alternative navigation options automatically."
                        </div>
                        <A href=href.clone() class="btn btn-primary btn-block">"📷 Start AR Navigation"</A>
                        <button class="btn btn-secondary btn-block" on:click=move |_| on_close.call(())>
                            "🗺 Continue with Map View"
                        </button>
                    </div>
                </div>
            </div>
        }
        .into_view()
    }
}
