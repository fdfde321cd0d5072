use crate::{
    api::{AttendanceStatus, Employee},
    components::{cards::StatusTag, empty_state::EmptyState, pagination::TablePagination},
    pages::attendance::utils::{employee_option_label, toggle_status, AttendanceRow, AttendanceSortKey},
    utils::{
        table::{sort_indicator, Pagination, SortState},
        time::format_display_date,
    },
};
use leptos::*;

const HEADER_CLASS: &str =
    "px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";

#[component]
pub fn AttendanceTable(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] rows: Signal<Vec<AttendanceRow>>,
    #[prop(into)] filtered_count: Signal<usize>,
    employee_filter: RwSignal<Option<String>>,
    status_filter: RwSignal<Vec<AttendanceStatus>>,
    sort: RwSignal<Option<SortState<AttendanceSortKey>>>,
    pagination: RwSignal<Pagination>,
    on_sort: Callback<AttendanceSortKey>,
    on_employee_filter: Callback<Option<String>>,
) -> impl IntoView {
    let total = Signal::derive(move || rows.with(Vec::len));
    let page_rows = move || {
        let pagination = pagination.get();
        rows.with(|rows| pagination.slice(rows).to_vec())
    };

    let sort_header = move |key: AttendanceSortKey, label: &'static str| {
        view! {
            <th class=HEADER_CLASS>
                <button type="button" class="uppercase" on:click=move |_| on_sort.call(key)>
                    {label}
                    <span class="ml-1">{move || sort_indicator(&sort.get(), &key)}</span>
                </button>
            </th>
        }
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
                <h3 class="text-lg font-medium text-fg">
                    {move || format!("Attendance Records ({})", filtered_count.get())}
                </h3>
                <div class="flex flex-wrap items-center gap-4 text-sm">
                    <select
                        class="rounded border border-border px-3 py-2"
                        aria-label="Filter by employee"
                        prop:value=move || employee_filter.get().unwrap_or_default()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            on_employee_filter.call(Some(value));
                        }
                    >
                        <option value="">{"All employees"}</option>
                        <For
                            each=move || employees.get()
                            key=|employee| employee.employee_id.clone()
                            children=move |employee: Employee| {
                                view! {
                                    <option value=employee.employee_id.clone()>
                                        {employee_option_label(&employee)}
                                    </option>
                                }
                            }
                        />
                    </select>
                    {AttendanceStatus::ALL
                        .iter()
                        .map(|status| {
                            let status = *status;
                            view! {
                                <label class="inline-flex items-center gap-1">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || status_filter.get().contains(&status)
                                        on:change=move |_| {
                                            status_filter.update(|s| toggle_status(s, status));
                                            pagination.update(|p| p.page = 1);
                                        }
                                    />
                                    {status.as_str()}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <Show
                when=move || { total.get() > 0 }
                fallback=|| view! {
                    <EmptyState
                        title="No attendance records found"
                        description="Mark attendance above."
                    />
                }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                {sort_header(AttendanceSortKey::EmployeeId, "Employee ID")}
                                <th class=HEADER_CLASS>{"Employee Name"}</th>
                                {sort_header(AttendanceSortKey::Date, "Date")}
                                <th class=HEADER_CLASS>{"Status"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {move || {
                                page_rows()
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <tr>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                    {row.record.employee_id.clone()}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                    {row.employee_name.clone()}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                    {format_display_date(row.record.date)}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                    <StatusTag status=row.record.status />
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
                <TablePagination pagination=pagination total=total noun="records" />
            </Show>
        </div>
    }
}
