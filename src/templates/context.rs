use crate::config::UiConfig;
use crate::i18n::{t, Key, Lang};
use crate::templates::components::Notice;

/// Per-request values every page needs.
pub struct PageCtx<'a> {
    pub lang: Lang,
    pub ui: &'a UiConfig,
    /// Path and query of the page being rendered; the language switch returns here.
    pub here: String,
    pub notice: Option<Notice>,
}

impl<'a> PageCtx<'a> {
    pub fn new(lang: Lang, ui: &'a UiConfig, here: impl Into<String>) -> Self {
        Self {
            lang,
            ui,
            here: here.into(),
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Option<Notice>) -> Self {
        self.notice = notice;
        self
    }

    pub fn t(&self, key: Key) -> &'static str {
        t(self.lang, key)
    }
}
