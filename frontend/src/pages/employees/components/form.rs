use crate::{
    api::ApiError,
    components::{
        error::InlineErrorMessage,
        layout::{ErrorMessage, SuccessMessage},
    },
    pages::employees::utils::EmployeeFormState,
    utils::messages::{error_text, success_text, MessageState},
};
use leptos::*;

struct Field {
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
    get: fn(&EmployeeFormState) -> String,
    set: fn(&mut EmployeeFormState, String),
}

const FIELDS: [Field; 4] = [
    Field {
        label: "Employee ID",
        placeholder: "e.g., EMP001",
        input_type: "text",
        get: |f| f.employee_id.clone(),
        set: |f, v| f.employee_id = v,
    },
    Field {
        label: "Full Name",
        placeholder: "e.g., John Doe",
        input_type: "text",
        get: |f| f.full_name.clone(),
        set: |f, v| f.full_name = v,
    },
    Field {
        label: "Email Address",
        placeholder: "e.g., john.doe@company.com",
        input_type: "email",
        get: |f| f.email.clone(),
        set: |f, v| f.email = v,
    },
    Field {
        label: "Department",
        placeholder: "e.g., Engineering",
        input_type: "text",
        get: |f| f.department.clone(),
        set: |f, v| f.department = v,
    },
];

#[component]
pub fn AddEmployeeForm(
    form_state: RwSignal<EmployeeFormState>,
    messages: RwSignal<MessageState>,
    #[prop(into)] server_error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let on_form_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !pending.get_untracked() {
            on_submit.call(());
        }
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-fg">{"Add New Employee"}</h3>
            <Show when=move || messages.get().success.is_some()>
                <SuccessMessage message={success_text(messages)} />
            </Show>
            <Show when=move || messages.get().error.is_some()>
                <ErrorMessage message={error_text(messages)} />
            </Show>
            <InlineErrorMessage error=server_error />
            <form class="space-y-4" autocomplete="off" on:submit=on_form_submit>
                {FIELDS
                    .iter()
                    .map(|field| {
                        let get = field.get;
                        let set = field.set;
                        view! {
                            <label class="flex flex-col gap-1 text-sm text-fg">
                                <span>{field.label}</span>
                                <input
                                    type=field.input_type
                                    class="rounded border border-border px-3 py-2"
                                    placeholder=field.placeholder
                                    prop:value=move || form_state.with(get)
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form_state.update(|f| set(f, value));
                                    }
                                />
                            </label>
                        }
                    })
                    .collect_view()}
                <button
                    type="submit"
                    class="w-full px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Adding..." } else { "Add Employee" }}
                </button>
            </form>
        </div>
    }
}
