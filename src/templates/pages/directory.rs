// templates/pages/directory.rs

use crate::domain::{Business, Facets, FilterQuery, ResultsView, ViewMode};
use crate::i18n::Key;
use crate::templates::components::{business_card, business_row, filter_form, view_input};
use crate::templates::{site_layout, PageCtx};
use maud::{html, Markup};
use url::form_urlencoded;

pub struct DirectoryVm<'a> {
    pub query: &'a FilterQuery,
    pub facets: &'a Facets,
    pub results: ResultsView<'a>,
    pub featured: Vec<&'a Business>,
}

/// Query string for the current filter shown in `mode`.
fn query_string(query: &FilterQuery, mode: ViewMode) -> String {
    let mut qs = form_urlencoded::Serializer::new(String::new());
    qs.extend_pairs(query.to_pairs());
    qs.append_pair("view", mode.as_str());
    qs.finish()
}

fn view_toggle(ctx: &PageCtx, query: &FilterQuery, current: ViewMode) -> Markup {
    html! {
        div class="view-toggle" role="group" {
            @for (mode, label) in [(ViewMode::Grid, Key::GridView), (ViewMode::List, Key::ListView)] {
                @let qs = query_string(query, mode);
                a
                    href=(format!("/?{qs}"))
                    hx-get=(format!("/results?{qs}"))
                    hx-target="#results"
                    hx-swap="outerHTML"
                    class=[(mode == current).then_some("active")]
                    aria-pressed=(if mode == current { "true" } else { "false" })
                    data-view=(mode.as_str())
                { (ctx.t(label)) }
            }
        }
    }
}

pub fn results_fragment(ctx: &PageCtx, query: &FilterQuery, view: &ResultsView) -> Markup {
    let cc = ctx.ui.country_code.as_str();

    html! {
        div id="results" data-view=(view.mode.as_str()) {
            div class="results-bar" {
                p id="results-count" {
                    span class="count" { (view.count()) }
                    " "
                    (ctx.t(Key::ResultsFound))
                }
                (view_toggle(ctx, query, view.mode))
            }

            div id="no-results" class="empty-state" hidden[!view.is_empty()] {
                p { (ctx.t(Key::NoResults)) }
            }

            div id="grid-view" class="business-grid" hidden[!view.grid_visible()] {
                @if view.grid_visible() {
                    @for b in &view.businesses {
                        (business_card(b, ctx.lang, cc))
                    }
                }
            }

            ul id="list-view" class="business-list" hidden[!view.list_visible()] {
                @if view.list_visible() {
                    @for b in &view.businesses {
                        (business_row(b, ctx.lang, cc))
                    }
                }
            }
        }
    }
}

/// Body of `GET /results`: the fragment plus the out-of-band view field.
pub fn results_partial(ctx: &PageCtx, query: &FilterQuery, view: &ResultsView) -> Markup {
    html! {
        (results_fragment(ctx, query, view))
        (view_input(view.mode, true))
    }
}

pub fn directory_page(ctx: &PageCtx, vm: &DirectoryVm) -> Markup {
    let cc = ctx.ui.country_code.as_str();

    site_layout(
        ctx,
        ctx.t(Key::Directory),
        html! {
            section class="hero" {
                h1 { (ctx.t(Key::SiteTitle)) }
                p { (ctx.t(Key::Tagline)) }
                a href="/register" class="button primary" { (ctx.t(Key::Register)) }
            }

            @if !vm.featured.is_empty() {
                section id="featured" class="featured" {
                    h2 { (ctx.t(Key::Featured)) }
                    div class="business-grid" {
                        @for b in &vm.featured {
                            (business_card(b, ctx.lang, cc))
                        }
                    }
                }
            }

            section class="directory" {
                h2 { (ctx.t(Key::Directory)) }
                (filter_form(ctx, vm.query, vm.facets, vm.results.mode))
                (results_fragment(ctx, vm.query, &vm.results))
            }
        },
    )
}
