use crate::domain::{Facets, FilterQuery, ViewMode};
use crate::i18n::Key;
use crate::templates::PageCtx;
use maud::{html, Markup};

/// Hidden field carrying the current view so filter requests keep it.
/// Partial responses send it with `oob` set to replace the one in the form.
pub fn view_input(mode: ViewMode, oob: bool) -> Markup {
    html! {
        input type="hidden" id="view-input" name="view" value=(mode.as_str())
            hx-swap-oob=[oob.then_some("true")];
    }
}

pub fn filter_form(ctx: &PageCtx, query: &FilterQuery, facets: &Facets, mode: ViewMode) -> Markup {
    let typing = format!("keyup changed delay:{}ms, search", ctx.ui.search_debounce_ms);

    html! {
        form
            id="filters"
            class="filters"
            method="get"
            action="/"
            role="search"
            hx-get="/results"
            hx-target="#results"
            hx-swap="outerHTML"
            hx-trigger="change"
        {
            input
                type="search"
                id="search"
                name="q"
                value=(query.text)
                placeholder=(ctx.t(Key::SearchPlaceholder))
                aria-label=(ctx.t(Key::SearchPlaceholder))
                autocomplete="off"
                hx-get="/results"
                hx-trigger=(typing)
                hx-include="#filters"
                hx-target="#results"
                hx-swap="outerHTML";

            label class="sr-only" for="district" { (ctx.t(Key::District)) }
            select id="district" name="district" {
                option value="" selected[query.district.is_empty()] { (ctx.t(Key::AllDistricts)) }
                @for d in &facets.districts {
                    option value=(d) selected[query.district == *d] { (d) }
                }
            }

            label class="sr-only" for="category" { (ctx.t(Key::Category)) }
            select id="category" name="category" {
                option value="" selected[query.category.is_empty()] { (ctx.t(Key::AllCategories)) }
                @for c in &facets.categories {
                    option value=(c) selected[query.category == *c] { (c) }
                }
            }

            input
                type="text"
                id="pincode"
                name="pincode"
                inputmode="numeric"
                list="pincode-options"
                value=(query.pincode)
                placeholder=(ctx.t(Key::PincodePlaceholder))
                aria-label=(ctx.t(Key::Pincode))
                hx-get="/results"
                hx-trigger=(typing)
                hx-include="#filters"
                hx-target="#results"
                hx-swap="outerHTML";
            datalist id="pincode-options" {
                @for p in &facets.pincodes {
                    option value=(p) {}
                }
            }

            (view_input(mode, false))
            noscript { button type="submit" { "🔍" } }
        }
    }
}
