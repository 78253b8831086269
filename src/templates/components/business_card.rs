use crate::domain::contact::ContactLinks;
use crate::domain::Business;
use crate::i18n::{t, Key, Lang};
use maud::{html, Markup};

fn initial(b: &Business) -> String {
    b.business_name.chars().next().map(String::from).unwrap_or_default()
}

/// Grid tile.
pub fn business_card(b: &Business, lang: Lang, country_code: &str) -> Markup {
    let links = ContactLinks::for_business(b, country_code);

    html! {
        article class="business-card" data-id=(b.id) {
            a href=(b.profile_path()) class="card-link" {
                @if let Some(src) = &b.image {
                    img src=(src) alt=(b.business_name) loading="lazy";
                } @else {
                    div class="card-placeholder" aria-hidden="true" { (initial(b)) }
                }
                h3 class="business-name" { (b.business_name) }
            }
            @if b.featured {
                span class="badge featured" { (t(lang, Key::Featured)) }
            }
            p class="owner" { (t(lang, Key::Owner)) ": " (b.owner_name) }
            p class="meta" {
                span class="category" { (b.category) }
                " · "
                span class="district" { (b.district) }
                " "
                span class="pincode" { (b.pincode) }
            }
            (quick_actions(&links, lang))
        }
    }
}

/// List row; shows the same record as `business_card`.
pub fn business_row(b: &Business, lang: Lang, country_code: &str) -> Markup {
    let links = ContactLinks::for_business(b, country_code);

    html! {
        li class="business-row" data-id=(b.id) {
            a href=(b.profile_path()) class="business-name" { (b.business_name) }
            span class="owner" { (b.owner_name) }
            span class="category" { (b.category) }
            span class="district" { (b.district) }
            span class="pincode" { (b.pincode) }
            (quick_actions(&links, lang))
        }
    }
}

fn quick_actions(links: &ContactLinks, lang: Lang) -> Markup {
    html! {
        div class="actions" {
            @if let Some(tel) = &links.tel {
                a href=(tel) class="action call" { (t(lang, Key::Call)) }
            }
            @if let Some(wa) = &links.whatsapp {
                a href=(wa) class="action whatsapp" target="_blank" rel="noopener" { (t(lang, Key::WhatsApp)) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::business::sample;

    #[test]
    fn card_escapes_record_text() {
        let mut b = sample("7", "<script>alert(1)</script>", "Surat", "Food", "395001");
        b.phone = Some("98250 11111".into());
        let html = business_card(&b, Lang::English, "91").into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"href="/business/7""#));
        assert!(html.contains(r#"href="tel:+919825011111""#));
    }

    #[test]
    fn row_without_phone_has_no_call_link() {
        let b = sample("8", "Om Traders", "Rajkot", "Retail", "360001");
        let html = business_row(&b, Lang::Hindi, "91").into_string();
        assert!(html.contains(r#"data-id="8""#));
        assert!(!html.contains("tel:"));
    }
}
