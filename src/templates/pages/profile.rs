// templates/pages/profile.rs

use crate::domain::contact::ContactLinks;
use crate::domain::Business;
use crate::i18n::Key;
use crate::templates::{site_layout, PageCtx};
use maud::{html, Markup};

pub struct ProfileVm<'a> {
    pub business: &'a Business,
    pub links: ContactLinks,
    pub share_href: String,
}

pub fn profile_page(ctx: &PageCtx, vm: &ProfileVm) -> Markup {
    let b = vm.business;

    site_layout(
        ctx,
        &b.business_name,
        html! {
            article class="profile" data-id=(b.id) {
                a href="/" class="back" { (ctx.t(Key::BackToDirectory)) }

                @if let Some(src) = &b.image {
                    img class="profile-image" src=(src) alt=(b.business_name);
                }

                h1 { (b.business_name) }
                @if b.featured {
                    span class="badge featured" { (ctx.t(Key::Featured)) }
                }

                dl class="profile-facts" {
                    dt { (ctx.t(Key::Owner)) }
                    dd class="owner" { (b.owner_name) }
                    dt { (ctx.t(Key::Category)) }
                    dd class="category" { (b.category) }
                    dt { (ctx.t(Key::District)) }
                    dd class="district" {
                        (b.district)
                        @if let Some(state) = &b.state { ", " (state) }
                    }
                    dt { (ctx.t(Key::Pincode)) }
                    dd class="pincode" { (b.pincode) }
                    @if let Some(addr) = &b.address {
                        dt { (ctx.t(Key::Address)) }
                        dd class="address" { (addr) }
                    }
                }

                @if let Some(desc) = &b.description {
                    p class="description" { (desc) }
                }

                div class="contact-actions" {
                    @if let Some(tel) = &vm.links.tel {
                        a href=(tel) class="button call" { (ctx.t(Key::Call)) }
                    }
                    @if let Some(wa) = &vm.links.whatsapp {
                        a href=(wa) class="button whatsapp" target="_blank" rel="noopener" { (ctx.t(Key::WhatsApp)) }
                    }
                    @if let Some(mail) = &vm.links.mailto {
                        a href=(mail) class="button email" { (ctx.t(Key::Email)) }
                    }
                    @if let Some(site) = &vm.links.website {
                        a href=(site) class="button website" target="_blank" rel="noopener nofollow" { (ctx.t(Key::Website)) }
                    }
                    a href=(vm.share_href) class="button share" target="_blank" rel="noopener" { (ctx.t(Key::Share)) }
                }
            }
        },
    )
}
