use crate::{
    components::empty_state::EmptyState,
    pages::dashboard::utils::{DepartmentCount, DepartmentSortKey},
    utils::table::{sort_indicator, SortState},
};
use leptos::*;

#[component]
pub fn DepartmentBreakdown(
    #[prop(into)] departments: Signal<Vec<DepartmentCount>>,
    sort: RwSignal<Option<SortState<DepartmentSortKey>>>,
    on_sort: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-fg">{"Department Breakdown"}</h3>
            <Show
                when=move || !departments.with(Vec::is_empty)
                fallback=|| view! { <EmptyState title="No departments yet" /> }
            >
                <table class="min-w-full divide-y divide-border text-sm">
                    <thead>
                        <tr>
                            <th class="px-4 py-2 text-left text-fg-muted">{"Department"}</th>
                            <th class="px-4 py-2 text-left text-fg-muted">
                                <button type="button" on:click=move |_| on_sort.call(())>
                                    {"Employee Count"}
                                    <span class="ml-1">
                                        {move || sort_indicator(&sort.get(), &DepartmentSortKey::Count)}
                                    </span>
                                </button>
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || departments.get()
                            key=|entry| (entry.department.clone(), entry.count)
                            children=move |entry: DepartmentCount| {
                                view! {
                                    <tr>
                                        <td class="px-4 py-2 text-fg">{entry.department}</td>
                                        <td class="px-4 py-2 text-fg">{entry.count}</td>
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
