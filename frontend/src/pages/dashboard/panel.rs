use crate::components::layout::{ErrorMessage, Layout, LoadingSpinner};
use leptos::*;

use super::{
    components::{DepartmentBreakdown, RecentAttendanceTable, SummarySection},
    view_model::use_dashboard_view_model,
};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let state = vm.page.state;
    let loading = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <Layout>
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="text-center text-sm text-fg-muted">
                        <LoadingSpinner />
                        <p>{"Loading dashboard data..."}</p>
                    </div>
                }
            >
                <div class="space-y-6">
                    {move || state.with(|s| s.error.clone()).map(|err| view! {
                        <ErrorMessage
                            message=err.error
                            on_close=Callback::new(move |_| vm.page.dismiss_error())
                        />
                    })}
                    <h2 class="text-2xl font-semibold text-fg">{"Analytics Dashboard"}</h2>
                    <SummarySection stats=vm.stats />
                    <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                        <DepartmentBreakdown
                            departments=vm.departments
                            sort=vm.department_sort
                            on_sort=Callback::new(move |_| vm.toggle_department_sort())
                        />
                        <RecentAttendanceTable records=vm.recent />
                    </div>
                </div>
            </Show>
        </Layout>
    }
}
