use leptos::*;
use leptos_router::A;
use crate::data::registry;
use crate::models::{Notification, SessionState};

fn notification_item(notification: &Notification) -> impl IntoView {
    let class = if notification.is_read { "notification" } else { "notification unread" };
    view! {
        <li class=class>
            <p>{notification.message.clone()}</p>
            <span class="card-meta">{notification.time.clone()}</span>
        </li>
    }
}

#[component]
fn NotificationBell() -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let (notifications, unread) = registry()
        .map(|r| (r.notifications(), r.unread_count()))
        .unwrap_or_default();

    view! {
        <div class="notification-bell">
            <button class="icon-button" on:click=move |_| set_open.update(|o| *o = !*o)>
                "🔔"
                {(unread > 0).then(|| view! { <span class="badge-count">{unread}</span> })}
            </button>
            <Show when=move || open.get()>
                <div class="dropdown">
                    <h3>"Notifications"</h3>
                    <ul>
                        {notifications.iter().map(notification_item).collect_view()}
                    </ul>
                </div>
            </Show>
        </div>
    }
}

/// Page chrome: title bar with notifications and the current user
#[component]
#[must_use]
pub fn Layout(children: Children) -> impl IntoView {
    let session = use_context::<RwSignal<SessionState>>()
        .unwrap_or_else(|| create_rw_signal(SessionState::guest()));

    view! {
        <div class="layout">
            <header class="app-header">
                <A href="/" class="app-title">"Indian Railways Guide"</A>
                <div class="header-actions">
                    <NotificationBell/>
                    <div class="user-chip">
                        <span class="user-name">{move || session.with(|s| s.display_name().to_string())}</span>
                        <span class="user-role">{move || session.with(|s| s.role.label())}</span>
                    </div>
                </div>
            </header>
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
