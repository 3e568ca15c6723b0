use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use icons::{ChevronLeft, ChevronRight};
use leptos::prelude::*;

/// Pages shown on each side of the current one.
const PAGE_RANGE: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PageItem {
    Page(u32),
    Gap,
}

/// Page buttons to render: the first and last page, a window around `current`,
/// and gaps in between.
pub(crate) fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    if total == 0 {
        return vec![];
    }

    let current = current.clamp(1, total);
    let lo = current.saturating_sub(PAGE_RANGE).max(1);
    let hi = (current + PAGE_RANGE).min(total);

    let mut out = Vec::new();
    if lo > 1 {
        out.push(PageItem::Page(1));
        if lo > 2 {
            out.push(PageItem::Gap);
        }
    }
    out.extend((lo..=hi).map(PageItem::Page));
    if hi < total {
        if hi + 1 < total {
            out.push(PageItem::Gap);
        }
        out.push(PageItem::Page(total));
    }
    out
}

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <nav data-name="Pagination" aria-label="Pagination" class="flex items-center justify-center gap-1">
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                attr:aria-label="Previous page"
                attr:disabled=move || page.get() <= 1
                on:click=move |_| on_change.run(page.get_untracked().saturating_sub(1))
            >
                <ChevronLeft />
            </Button>

            {move || {
                let current = page.get();
                page_items(current, total_pages.get())
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(n) => {
                            let variant = if n == current {
                                ButtonVariant::Outline
                            } else {
                                ButtonVariant::Ghost
                            };
                            view! {
                                <Button
                                    variant=variant
                                    size=ButtonSize::Icon
                                    attr:aria-current=(n == current).then_some("page")
                                    on:click=move |_| on_change.run(n)
                                >
                                    {n.to_string()}
                                </Button>
                            }
                            .into_any()
                        }
                        PageItem::Gap => {
                            view! { <span class="px-2 text-muted-foreground">"…"</span> }.into_any()
                        }
                    })
                    .collect_view()
            }}

            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                attr:aria-label="Next page"
                attr:disabled=move || page.get() >= total_pages.get()
                on:click=move |_| on_change.run(page.get_untracked() + 1)
            >
                <ChevronRight />
            </Button>
        </nav>
    }
}
