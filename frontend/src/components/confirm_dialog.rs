use leptos::ev::KeyboardEvent;
use leptos::*;

/// Yes/No confirmation for deleting one record. Open while `pending` holds
/// the record's key; every way of cancelling clears it.
#[component]
pub fn DeleteConfirmDialog(
    pending: RwSignal<Option<String>>,
    /// Display line for the pending record, e.g. "Alice (EMP001)".
    #[prop(into)]
    subject: Signal<Option<String>>,
    title: &'static str,
    message: &'static str,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let cancel = move || pending.set(None);

    view! {
        <Show when=move || pending.with(Option::is_some)>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| cancel()
                ></button>
                <div
                    class="relative z-[71] w-full max-w-sm rounded-lg bg-surface-elevated shadow-xl border border-border p-5 space-y-3"
                    role="alertdialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            cancel();
                        }
                    }
                >
                    <h2 class="text-base font-semibold text-fg">{title}</h2>
                    <p class="text-sm text-fg-muted">{message}</p>
                    {move || subject.get().map(|line| view! {
                        <p class="text-sm font-medium text-fg">{line}</p>
                    })}
                    <div class="flex justify-end gap-2 pt-2">
                        <button
                            type="button"
                            class="rounded-md px-3 py-1.5 text-sm border border-border text-fg hover:bg-surface-muted"
                            on:click=move |_| cancel()
                        >
                            {"No"}
                        </button>
                        <button
                            type="button"
                            class="rounded-md px-3 py-1.5 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {"Yes"}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
