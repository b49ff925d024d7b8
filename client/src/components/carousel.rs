//! Image carousel with wrap-around navigation.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use leptos::prelude::*;

/// Index after `current` in a ring of `len` items.
pub fn wrap_next(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Index before `current` in a ring of `len` items.
pub fn wrap_prev(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + len - 1) % len }
}

/// Shows one image at a time; arrows and dots appear when there is more
/// than one. Clicking the image opens it in a new tab.
#[component]
pub fn Carousel(images: Vec<String>, #[prop(optional)] alt: &'static str) -> impl IntoView {
    let len = images.len();
    let index = RwSignal::new(0_usize);
    let images = StoredValue::new(images);

    let current = move || images.with_value(|list| list.get(index.get()).cloned().unwrap_or_default());

    let dots = (0..len)
        .map(|i| {
            view! {
                <button
                    class="carousel__dot"
                    class:carousel__dot--active=move || index.get() == i
                    aria-label=format!("{}", i + 1)
                    on:click=move |_| index.set(i)
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="carousel">
            <a class="carousel__frame" href=current target="_blank" rel="noopener noreferrer">
                <img class="carousel__image" src=current alt=alt/>
            </a>
            <Show when=move || { len > 1 }>
                <button class="carousel__nav carousel__nav--prev" on:click=move |_| index.update(|i| *i = wrap_prev(*i, len))>
                    "‹"
                </button>
                <button class="carousel__nav carousel__nav--next" on:click=move |_| index.update(|i| *i = wrap_next(*i, len))>
                    "›"
                </button>
                <span class="carousel__counter">{move || format!("{} / {len}", index.get() + 1)}</span>
            </Show>
            <div class="carousel__dots" class:hidden=len < 2>{dots}</div>
        </div>
    }
}
