use leptos::{component, view, Children, IntoView};
use crate::models::{CrowdLevel, Train};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Crowd(CrowdLevel),
    Delayed,
    OnTime,
}

impl BadgeKind {
    #[must_use]
    pub fn for_train(train: &Train) -> Self {
        if train.is_delayed() {
            BadgeKind::Delayed
        } else {
            BadgeKind::OnTime
        }
    }

    fn class(self) -> &'static str {
        match self {
            BadgeKind::Crowd(level) => level.badge_class(),
            BadgeKind::Delayed => "status-badge badge-high",
            BadgeKind::OnTime => "status-badge badge-low",
        }
    }
}

#[component]
#[must_use]
pub fn StatusBadge(kind: BadgeKind, children: Children) -> impl IntoView {
    view! {
        <span class=kind.class()>
            {(kind == BadgeKind::Delayed).then(|| view! { <span class="badge-pulse"></span> })}
            {children()}
        </span>
    }
}

#[component]
#[must_use]
pub fn CrowdBadge(level: CrowdLevel) -> impl IntoView {
    view! {
        <StatusBadge kind=BadgeKind::Crowd(level)>{level.label()}</StatusBadge>
    }
}
