#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
use leptos::*;

/// How long a form notification stays up.
pub const NOTICE_TIMEOUT_MS: u32 = 3_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }

    pub fn is_empty(&self) -> bool {
        self.success.is_none() && self.error.is_none()
    }
}

/// Clears `messages` after [`NOTICE_TIMEOUT_MS`] unless a newer message
/// replaced the current one first.
pub fn clear_later(messages: RwSignal<MessageState>) {
    let shown = messages.get_untracked();
    if shown.is_empty() {
        return;
    }
    schedule_clear(messages, shown);
}

#[cfg(target_arch = "wasm32")]
fn schedule_clear(messages: RwSignal<MessageState>, shown: MessageState) {
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
        let _ = messages.try_update(|state| {
            if *state == shown {
                state.clear();
            }
        });
    });
}

/// Live success text; banners stay mounted while messages change.
pub fn success_text(messages: RwSignal<MessageState>) -> TextProp {
    TextProp::from(move || messages.with(|m| m.success.clone().unwrap_or_default()))
}

/// Live error text; see [`success_text`].
pub fn error_text(messages: RwSignal<MessageState>) -> TextProp {
    TextProp::from(move || messages.with(|m| m.error.clone().unwrap_or_default()))
}

// No browser timers on the host; notices stay until replaced.
#[cfg(not(target_arch = "wasm32"))]
fn schedule_clear(_messages: RwSignal<MessageState>, _shown: MessageState) {}
