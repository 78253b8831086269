use crate::i18n::{t, Key, Lang};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
    Success,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Error => "notification notification-error",
            NoticeKind::Info => "notification notification-info",
            NoticeKind::Success => "notification notification-success",
        }
    }

    fn role(self) -> &'static str {
        match self {
            NoticeKind::Error => "alert",
            _ => "status",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Show a button that re-fetches the dataset.
    pub offer_reload: bool,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            offer_reload: false,
        }
    }

    pub fn load_failed(lang: Lang) -> Self {
        Self {
            offer_reload: true,
            ..Self::new(NoticeKind::Error, t(lang, Key::LoadFailed))
        }
    }
}

pub fn notification(notice: &Notice, lang: Lang, ttl_ms: u64) -> Markup {
    html! {
        div id="notification" class=(notice.kind.class()) role=(notice.kind.role()) data-ttl-ms=(ttl_ms) {
            span class="notification-message" { (notice.message) }
            @if notice.offer_reload {
                form method="post" action="/reload" class="inline" {
                    button type="submit" class="notification-reload" { (t(lang, Key::Reload)) }
                }
            }
            button type="button" class="notification-close" data-dismiss aria-label=(t(lang, Key::Close)) { "×" }
        }
    }
}
