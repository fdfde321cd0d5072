use crate::api::ApiError;
use leptos::*;

/// Form-level error. Validation responses list each rejected field.
#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                {move || {
                    let Some(err) = error.get() else {
                        return ().into_view();
                    };
                    let messages = err.validation_messages();
                    if messages.len() > 1 {
                        view! {
                            <ul class="list-disc list-inside text-sm">
                                {messages.into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
                            </ul>
                        }
                        .into_view()
                    } else {
                        view! { <p class="text-sm">{err.error}</p> }.into_view()
                    }
                }}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_lists_each_validation_entry() {
        let html = render_to_string(move || {
            let error = ApiError::from_response(
                422,
                Some(json!({
                    "detail": [
                        { "loc": ["body", "email"], "msg": "value is not a valid email address" },
                        { "loc": ["body", "full_name"], "msg": "Field required" }
                    ]
                })),
                "Failed to add employee",
            );
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("<li"));
        assert!(html.contains("value is not a valid email address"));
        assert!(html.contains("Field required"));
    }

    #[test]
    fn inline_error_renders_plain_message() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::request_failed("Failed to add employee")));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Failed to add employee"));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn inline_error_hidden_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
