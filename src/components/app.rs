use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::ar::ArSupportCache;
use crate::components::amenity_detail::AmenityDetailPage;
use crate::components::ar_navigation::ArNavigationPage;
use crate::components::layout::Layout;
use crate::components::navigation_page::NavigationPage;
use crate::components::not_found::NotFound;
use crate::components::station_detail::StationDetailPage;
use crate::components::stations_page::StationsPage;
use crate::config::NavigationConfig;
use crate::models::SessionState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(NavigationConfig::load());
    provide_context(ArSupportCache::new());
    provide_context(create_rw_signal(SessionState::guest()));

    view! {
        <Stylesheet id="leptos" href="/pkg/station_nav.css"/>
        <Title text="Indian Railways Guide"/>

        <Router>
            <Layout>
                <Routes>
                    <Route path="/" view=StationsPage/>
                    <Route path="/station/:id" view=StationDetailPage/>
                    <Route path="/station/:station_id/amenity/:amenity_id" view=AmenityDetailPage/>
                    <Route path="/navigation/:station_id/:route_id" view=NavigationPage/>
                    <Route path="/ar-navigation/:station_id/:route_id" view=ArNavigationPage/>
                    <Route path="/*any" view=|| view! {
                        <NotFound message="Page not found" back_href="/" back_label="Back to Stations"/>
                    }/>
                </Routes>
            </Layout>
        </Router>
    }
}
