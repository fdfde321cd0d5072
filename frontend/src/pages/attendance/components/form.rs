use crate::{
    api::{AttendanceStatus, Employee},
    components::layout::{ErrorMessage, SuccessMessage},
    pages::attendance::utils::{employee_option_label, AttendanceFormState},
    utils::messages::{error_text, success_text, MessageState},
};
use leptos::*;

#[component]
pub fn MarkAttendanceForm(
    form_state: RwSignal<AttendanceFormState>,
    messages: RwSignal<MessageState>,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let on_form_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        on_submit.call(());
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-fg">{"Mark Attendance"}</h3>
            <Show when=move || messages.get().success.is_some()>
                <SuccessMessage message={success_text(messages)} />
            </Show>
            <Show when=move || messages.get().error.is_some()>
                <ErrorMessage message={error_text(messages)} />
            </Show>
            <form class="grid grid-cols-1 gap-4 md:grid-cols-4 md:items-end" on:submit=on_form_submit>
                <label class="flex flex-col gap-1 text-sm text-fg">
                    <span>{"Employee"}</span>
                    <select
                        class="rounded border border-border px-3 py-2"
                        prop:value=move || form_state.get().employee_id
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form_state.update(|f| f.employee_id = value);
                        }
                    >
                        <option value="">{"Select employee"}</option>
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
                </label>
                <label class="flex flex-col gap-1 text-sm text-fg">
                    <span>{"Date"}</span>
                    <input
                        type="date"
                        class="rounded border border-border px-3 py-2"
                        prop:value=move || form_state.get().date
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form_state.update(|f| f.date = value);
                        }
                    />
                </label>
                <label class="flex flex-col gap-1 text-sm text-fg">
                    <span>{"Status"}</span>
                    <select
                        class="rounded border border-border px-3 py-2"
                        prop:value=move || form_state.get().status.as_str()
                        on:change=move |ev| {
                            if let Some(status) = AttendanceStatus::parse(&event_target_value(&ev)) {
                                form_state.update(|f| f.status = status);
                            }
                        }
                    >
                        {AttendanceStatus::ALL
                            .iter()
                            .map(|status| view! { <option value=status.as_str()>{status.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button
                    type="submit"
                    class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Saving..." } else { "Mark Attendance" }}
                </button>
            </form>
        </div>
    }
}
