use crate::api::AttendanceStatus;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Neutral,
    Success,
    Danger,
    Info,
}

impl CardTone {
    fn value_class(self) -> &'static str {
        match self {
            CardTone::Neutral => "text-fg",
            CardTone::Success => "text-status-success-text",
            CardTone::Danger => "text-status-error-text",
            CardTone::Info => "text-action-primary-bg",
        }
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional)] tone: Option<CardTone>,
) -> impl IntoView {
    let value_class = format!(
        "mt-3 text-3xl font-extrabold {}",
        tone.unwrap_or(CardTone::Neutral).value_class()
    );
    view! {
        <div class="p-6 rounded-lg bg-surface-elevated border border-border shadow">
            <p class="text-xs font-bold text-fg-muted uppercase tracking-widest">{label}</p>
            <p class=value_class>{value}</p>
        </div>
    }
}

pub fn status_tag_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => {
            "inline-flex px-2 py-0.5 rounded-full text-xs font-semibold bg-status-success-bg text-status-success-text"
        }
        AttendanceStatus::Absent => {
            "inline-flex px-2 py-0.5 rounded-full text-xs font-semibold bg-status-error-bg text-status-error-text"
        }
    }
}

#[component]
pub fn StatusTag(status: AttendanceStatus) -> impl IntoView {
    view! { <span class=status_tag_class(status)>{status.as_str()}</span> }
}
