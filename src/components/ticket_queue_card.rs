use leptos::{component, view, IntoView};
use crate::models::{CrowdLevel, TicketCounter};

fn bar_class(status: CrowdLevel) -> &'static str {
    match status {
        CrowdLevel::Low => "queue-bar queue-low",
        CrowdLevel::Medium => "queue-bar queue-medium",
        CrowdLevel::High => "queue-bar queue-high",
    }
}

#[component]
#[must_use]
pub fn TicketQueueCard(counter: TicketCounter) -> impl IntoView {
    let queue = counter.current_queue;
    let width = format!("width: {}%", queue.bar_percentage());

    view! {
        <div class="card">
            <h3 class="card-title">{counter.name}</h3>
            <div class="card-row">
                <span>{format!("{} people in queue", queue.total)}</span>
                <span class="queue-wait">{format!("~{}", queue.average_wait_time)}</span>
            </div>
            <div class="queue-track">
                <div class=bar_class(queue.status) style=width></div>
            </div>
            <div class="card-row card-meta">
                <span>{format!("Services: {}", counter.services.join(", "))}</span>
                <span>{format!("Updated {}", queue.last_updated)}</span>
            </div>
        </div>
    }
}
