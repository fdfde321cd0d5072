use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use leptos::*;

use super::{
    components::{form::MarkAttendanceForm, list::AttendanceTable},
    view_model::use_attendance_view_model,
};

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    let state = vm.page.state;
    let show_spinner =
        Signal::derive(move || state.with(|s| s.awaiting_first_data(|d| d.employees.is_empty())));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let employees = Signal::derive(move || state.with(|s| s.data.employees.clone()));
    let pending = vm.mark_action.pending();

    view! {
        <Layout>
            <div class="space-y-6">
                <h2 class="text-2xl font-semibold text-fg">{"Attendance Management"}</h2>
                {move || error.get().map(|err| view! {
                    <ErrorMessage
                        message=err.error
                        on_close=Callback::new(move |_| vm.page.dismiss_error())
                    />
                })}
                <Show
                    when=move || !show_spinner.get()
                    fallback=|| view! { <LoadingSpinner /> }
                >
                    <MarkAttendanceForm
                        form_state=vm.form
                        messages=vm.messages
                        employees=employees
                        pending=pending
                        on_submit=Callback::new(move |_| vm.submit())
                    />
                    <AttendanceTable
                        employees=employees
                        rows=vm.rows
                        filtered_count=vm.filtered_count
                        employee_filter=vm.employee_filter
                        status_filter=vm.status_filter
                        sort=vm.sort
                        pagination=vm.pagination
                        on_sort=Callback::new(move |key| vm.toggle_sort(key))
                        on_employee_filter=Callback::new(move |id| vm.set_employee_filter(id))
                    />
                </Show>
            </div>
        </Layout>
    }
}
