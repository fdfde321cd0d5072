use crate::{
    api::Employee,
    components::{
        confirm_dialog::DeleteConfirmDialog,
        empty_state::EmptyState,
        layout::{ErrorMessage, SuccessMessage},
        pagination::TablePagination,
    },
    pages::employees::utils::EmployeeSortKey,
    utils::{
        messages::{error_text, success_text, MessageState},
        table::{sort_indicator, Pagination, SortState},
    },
};
use leptos::*;

const HEADER_CLASS: &str =
    "px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-fg";

#[component]
pub fn EmployeeList(
    #[prop(into)] rows: Signal<Vec<Employee>>,
    messages: RwSignal<MessageState>,
    sort: RwSignal<Option<SortState<EmployeeSortKey>>>,
    pagination: RwSignal<Pagination>,
    pending_delete: RwSignal<Option<String>>,
    #[prop(into)] deleting: Signal<bool>,
    on_sort: Callback<EmployeeSortKey>,
    on_confirm_delete: Callback<()>,
) -> impl IntoView {
    let total = Signal::derive(move || rows.with(Vec::len));
    let page_rows = move || {
        let pagination = pagination.get();
        rows.with(|rows| pagination.slice(rows).to_vec())
    };
    let pending_subject = Signal::derive(move || {
        let key = pending_delete.get()?;
        let name = rows.with(|rows| {
            rows.iter()
                .find(|e| e.employee_id == key)
                .map(|e| e.full_name.clone())
        });
        Some(match name {
            Some(name) => format!("{} ({})", name, key),
            None => key,
        })
    });
    let sort_header = move |key: EmployeeSortKey, label: &'static str| {
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
            <h3 class="text-lg font-medium text-fg">
                {move || format!("Employee List ({})", total.get())}
            </h3>
            <Show when=move || messages.get().success.is_some()>
                <SuccessMessage message={success_text(messages)} />
            </Show>
            <Show when=move || messages.get().error.is_some()>
                <ErrorMessage message={error_text(messages)} />
            </Show>
            <Show
                when=move || { total.get() > 0 }
                fallback=|| view! {
                    <EmptyState
                        title="No employees found"
                        description="Add your first employee above."
                    />
                }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                {sort_header(EmployeeSortKey::EmployeeId, "Employee ID")}
                                {sort_header(EmployeeSortKey::FullName, "Full Name")}
                                <th class=HEADER_CLASS>{"Email"}</th>
                                {sort_header(EmployeeSortKey::Department, "Department")}
                                <th class=HEADER_CLASS>{"Action"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {move || {
                                page_rows()
                                    .into_iter()
                                    .map(|employee| {
                                        let key = employee.employee_id.clone();
                                        view! {
                                            <tr>
                                                <td class=CELL_CLASS>{employee.employee_id}</td>
                                                <td class=CELL_CLASS>{employee.full_name}</td>
                                                <td class=CELL_CLASS>{employee.email}</td>
                                                <td class=CELL_CLASS>{employee.department}</td>
                                                <td class=CELL_CLASS>
                                                    <button
                                                        type="button"
                                                        class="px-3 py-1 rounded bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                                                        disabled=move || deleting.get()
                                                        on:click=move |_| pending_delete.set(Some(key.clone()))
                                                    >
                                                        {"Delete"}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
                <TablePagination pagination=pagination total=total noun="employees" />
            </Show>
            <DeleteConfirmDialog
                pending=pending_delete
                subject=pending_subject
                title="Delete Employee"
                message="Are you sure you want to delete this employee?"
                busy=deleting
                on_confirm=on_confirm_delete
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee, ssr::render_to_string};

    fn render(rows: Vec<Employee>, pending: Option<String>) -> String {
        render_to_string(move || {
            view! {
                <EmployeeList
                    rows=create_rw_signal(rows)
                    messages=create_rw_signal(MessageState::default())
                    sort=create_rw_signal(None)
                    pagination=create_rw_signal(Pagination::default())
                    pending_delete=create_rw_signal(pending)
                    deleting=Signal::derive(|| false)
                    on_sort=Callback::new(|_| ())
                    on_confirm_delete=Callback::new(|_| ())
                />
            }
        })
    }

    #[test]
    fn renders_employees_with_count_and_total() {
        let html = render(
            vec![
                employee("EMP001", "Alice", "Eng"),
                employee("EMP002", "Bob", "Ops"),
            ],
            None,
        );
        assert!(html.contains("Employee List (2)"));
        assert!(html.contains("Alice"));
        assert!(html.contains("Ops"));
        assert!(html.contains("Total 2 employees"));
        assert!(!html.contains("alertdialog"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let html = render(Vec::new(), None);
        assert!(html.contains("Employee List (0)"));
        assert!(html.contains("No employees found"));
        assert!(html.contains("Add your first employee above."));
    }

    #[test]
    fn pending_delete_opens_confirmation() {
        let html = render(vec![employee("EMP001", "Alice", "Eng")], Some("EMP001".into()));
        assert!(html.contains("role=\"alertdialog\""));
        assert!(html.contains("Are you sure you want to delete this employee?"));
        assert!(html.contains("Alice (EMP001)"));
    }
}
