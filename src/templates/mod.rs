pub mod components;
pub mod context;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{html_error_response, notification, Notice, NoticeKind};
pub use context::PageCtx;
pub use layouts::site::site_layout;
