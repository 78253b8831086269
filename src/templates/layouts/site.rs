use crate::i18n::{Key, Lang};
use crate::templates::{notification, PageCtx};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use url::form_urlencoded;

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

// Removes banners on close and after their data-ttl-ms, including ones swapped in by htmx.
const DISMISS_SCRIPT: &str = r#"
(function () {
  function arm(root) {
    root.querySelectorAll('.notification[data-ttl-ms]').forEach(function (n) {
      if (n.dataset.armed) return;
      n.dataset.armed = '1';
      setTimeout(function () { n.remove(); }, Number(n.dataset.ttlMs) || 5000);
    });
  }
  document.addEventListener('click', function (e) {
    var btn = e.target.closest('[data-dismiss]');
    if (btn) { var n = btn.closest('.notification'); if (n) n.remove(); }
  });
  document.addEventListener('DOMContentLoaded', function () { arm(document); });
  document.addEventListener('htmx:afterSettle', function () { arm(document); });
})();
"#;

fn lang_href(lang: Lang, here: &str) -> String {
    let qs = form_urlencoded::Serializer::new(String::new())
        .append_pair("value", lang.key())
        .append_pair("next", here)
        .finish();
    format!("/lang?{qs}")
}

pub fn site_layout(ctx: &PageCtx, title: &str, content: Markup) -> Markup {
    let site_title = ctx.t(Key::SiteTitle);

    html! {
        (DOCTYPE)
        html lang=(ctx.lang.html_code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (site_title) }
                link rel="stylesheet" href="/static/app.css";
                script src=(HTMX_SRC) defer {}
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" {
                        span class="brand-mark" aria-hidden="true" { "ॐ" }
                        span class="brand-title" { (site_title) }
                        span class="brand-tagline" { (ctx.t(Key::Tagline)) }
                    }
                    nav {
                        ul {
                            li { a href="/" { (ctx.t(Key::Directory)) } }
                            li { a href="/register" class="register" { (ctx.t(Key::Register)) } }
                        }
                    }
                    ul class="lang-switch" {
                        @for lang in Lang::ALL {
                            li {
                                a href=(lang_href(lang, &ctx.here))
                                  class=[(lang == ctx.lang).then_some("active")]
                                  hreflang=(lang.html_code())
                                { (lang.native_name()) }
                            }
                        }
                    }
                }

                div id="notification-slot" {
                    @if let Some(notice) = &ctx.notice {
                        (notification(notice, ctx.lang, ctx.ui.notification_ttl_ms))
                    }
                }

                main class="container" {
                    (content)
                }

                footer class="site-footer" {
                    form
                        class="newsletter"
                        method="post"
                        action="/api/newsletter"
                        hx-post="/api/newsletter"
                        hx-target="#notification-slot"
                        hx-swap="innerHTML"
                    {
                        label for="newsletter-email" { (ctx.t(Key::Newsletter)) }
                        input type="email" id="newsletter-email" name="email" autocomplete="email" required;
                        button type="submit" { (ctx.t(Key::Subscribe)) }
                    }
                    p { "© " (site_title) }
                }

                script { (PreEscaped(DISMISS_SCRIPT)) }
            }
        }
    }
}
