use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="text-center py-16 space-y-4">
                <h2 class="text-4xl font-extrabold text-fg">"404"</h2>
                <p class="text-fg-muted">"Sorry, the page you visited does not exist."</p>
                <a href="/" class="inline-flex px-4 py-2 rounded bg-action-primary-bg text-action-primary-text">
                    "Back to Employees"
                </a>
            </div>
        </Layout>
    }
}
