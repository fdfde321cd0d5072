use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use leptos::*;

use super::{
    components::{form::AddEmployeeForm, list::EmployeeList},
    view_model::use_employees_view_model,
};

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    let state = vm.page.state;
    let show_spinner = Signal::derive(move || state.with(|s| s.awaiting_first_data(Vec::is_empty)));
    let adding = vm.add_action.pending();
    let deleting = vm.delete_action.pending();

    view! {
        <Layout>
            {move || state.with(|s| s.error.clone()).map(|err| view! {
                <ErrorMessage
                    message=err.error
                    on_close=Callback::new(move |_| vm.page.dismiss_error())
                />
            })}
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                <div class="lg:col-span-1">
                    <AddEmployeeForm
                        form_state=vm.form
                        messages=vm.form_messages
                        server_error=vm.add_error
                        pending=adding
                        on_submit=Callback::new(move |_| vm.submit())
                    />
                </div>
                <div class="lg:col-span-2">
                    <Show
                        when=move || !show_spinner.get()
                        fallback=|| view! {
                            <div class="text-center text-sm text-fg-muted">
                                <LoadingSpinner />
                                <p>{"Loading employees..."}</p>
                            </div>
                        }
                    >
                        <EmployeeList
                            rows=vm.rows
                            messages=vm.list_messages
                            sort=vm.sort
                            pagination=vm.pagination
                            pending_delete=vm.pending_delete
                            deleting=deleting
                            on_sort=Callback::new(move |key| vm.toggle_sort(key))
                            on_confirm_delete=Callback::new(move |_| vm.confirm_delete())
                        />
                    </Show>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn employees_page_renders_form_while_list_loads() {
        let html = render_to_string(move || view! { <EmployeesPage /> });
        assert!(html.contains("Add New Employee"));
        assert!(html.contains("Loading employees..."));
        assert!(html.contains("HRMS Lite"));
    }
}
