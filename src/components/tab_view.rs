use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab<T: 'static> {
    pub id: T,
    pub label: &'static str,
}

#[component]
pub fn TabView<T>(
    tabs: Vec<Tab<T>>,
    active_tab: RwSignal<T>,
    children: Children,
) -> impl IntoView
where
    T: Copy + PartialEq + 'static,
{
    view! {
        <div class="tab-view">
            <div class="tab-header">
                {tabs.into_iter().map(|tab| {
                    let tab_class = move || {
                        if active_tab.get() == tab.id {
                            "tab-button active"
                        } else {
                            "tab-button"
                        }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| active_tab.set(tab.id)>
                            {tab.label}
                        </button>
                    }
                }).collect_view()}
            </div>
            <div class="tab-content">
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn TabPanel(#[prop(into)] when: Signal<bool>, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show when=move || when.get()>
            {children()}
        </Show>
    }
}
