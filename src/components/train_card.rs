use leptos::{component, view, IntoView};
use crate::components::status_badge::{BadgeKind, StatusBadge};
use crate::models::Train;

#[component]
#[must_use]
pub fn TrainCard(train: Train) -> impl IntoView {
    let kind = BadgeKind::for_train(&train);
    let status = if kind == BadgeKind::Delayed {
        train.status.clone()
    } else {
        "On Time".to_string()
    };
    let timing = match train.departure_label() {
        Some(departs) => format!("Departs: {departs}"),
        None => format!("Arrives: {}", train.arrival_label()),
    };

    view! {
        <div class="card train-card">
            <div class="card-row">
                <div>
                    <h3 class="train-number">{train.number}</h3>
                    <div class="card-title">{train.name}</div>
                </div>
                <StatusBadge kind=kind>{status}</StatusBadge>
            </div>
            <div class="card-row card-meta">
                <span>{format!("Platform {}", train.platform)}</span>
                <span>{timing}</span>
            </div>
            <div class="card-row card-meta">
                <span>{format!("Next: {}", train.destination)}</span>
                <span>{format!("Updated {}", train.last_updated)}</span>
            </div>
        </div>
    }
}
