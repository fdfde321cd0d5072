use crate::utils::table::{total_label, Pagination, PAGE_SIZE_OPTIONS};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

const MAX_VISIBLE_PAGES: usize = 5;

/// First, last, current and its neighbours; gaps collapse to an ellipsis.
pub fn visible_pages(current: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageItem::Page).collect();
    }
    let mut items = vec![PageItem::Page(1)];
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total_pages - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));
    items
}

#[component]
pub fn TablePagination(
    pagination: RwSignal<Pagination>,
    #[prop(into)] total: Signal<usize>,
    noun: &'static str,
) -> impl IntoView {
    let current = move || pagination.get().effective_page(total.get());
    let total_pages = move || pagination.get().total_pages(total.get());
    let go_to = move |page: usize| pagination.update(|p| p.go_to(page, total.get_untracked()));

    let on_size_change = move |ev: ev::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
            pagination.update(|p| p.set_page_size(size));
        }
    };

    view! {
        <div class="flex flex-col gap-3 md:flex-row md:items-center md:justify-between mt-4 text-sm">
            <span class="text-fg-muted">{move || total_label(total.get(), noun)}</span>
            <div class="flex items-center gap-2">
                <button
                    type="button"
                    class="px-2 py-1 rounded border border-border disabled:opacity-50"
                    aria-label="Previous page"
                    disabled=move || !pagination.get().has_previous(total.get())
                    on:click=move |_| go_to(current().saturating_sub(1))
                >
                    "‹"
                </button>
                {move || {
                    let active = current();
                    visible_pages(active, total_pages())
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Ellipsis => view! { <span class="px-2">"..."</span> }.into_view(),
                            PageItem::Page(page) => {
                                let class = if page == active {
                                    "px-3 py-1 rounded bg-action-primary-bg text-action-primary-text"
                                } else {
                                    "px-3 py-1 rounded border border-border"
                                };
                                view! {
                                    <button type="button" class=class on:click=move |_| go_to(page)>
                                        {page}
                                    </button>
                                }
                                .into_view()
                            }
                        })
                        .collect_view()
                }}
                <button
                    type="button"
                    class="px-2 py-1 rounded border border-border disabled:opacity-50"
                    aria-label="Next page"
                    disabled=move || !pagination.get().has_next(total.get())
                    on:click=move |_| go_to(current() + 1)
                >
                    "›"
                </button>
                <select
                    class="ml-2 rounded border border-border px-2 py-1"
                    aria-label="Rows per page"
                    on:change=on_size_change
                >
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|size| {
                            let size = *size;
                            view! {
                                <option
                                    value=size.to_string()
                                    selected=move || pagination.get().page_size == size
                                >
                                    {format!("{} / page", size)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
