use crate::api::ApiClient;
use leptos::*;

/// Never contacted: effects, and therefore page loads, do not run under SSR.
pub const OFFLINE_BASE_URL: &str = "http://offline.invalid";

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders `view` in a fresh reactive runtime with an [`ApiClient`] in
/// context, so page view models never fall back to runtime config lookup.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| {
        provide_context(ApiClient::new_with_base_url(OFFLINE_BASE_URL));
        view().into_view().render_to_string().to_string()
    });
    leptos_reactive::suppress_resource_load(false);
    html
}
