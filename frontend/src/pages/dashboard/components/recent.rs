use crate::{
    components::{cards::StatusTag, empty_state::EmptyState},
    pages::dashboard::utils::RecentAttendance,
    utils::time::format_iso_date,
};
use leptos::*;

#[component]
pub fn RecentAttendanceTable(#[prop(into)] records: Signal<Vec<RecentAttendance>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-fg">{"Recent Attendance"}</h3>
            <Show
                when=move || !records.with(Vec::is_empty)
                fallback=|| view! { <EmptyState title="No attendance records yet" /> }
            >
                <table class="min-w-full divide-y divide-border text-sm">
                    <thead>
                        <tr>
                            <th class="px-4 py-2 text-left text-fg-muted">{"Date"}</th>
                            <th class="px-4 py-2 text-left text-fg-muted">{"Employee"}</th>
                            <th class="px-4 py-2 text-left text-fg-muted">{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || records.get()
                            key=|record| record.id
                            children=move |record: RecentAttendance| {
                                view! {
                                    <tr>
                                        <td class="px-4 py-2 text-fg">{format_iso_date(record.date)}</td>
                                        <td class="px-4 py-2 text-fg">{record.employee_name}</td>
                                        <td class="px-4 py-2"><StatusTag status=record.status /></td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
