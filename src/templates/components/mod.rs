pub mod business_card;
pub mod error;
pub mod filter_form;
pub mod notification;

pub use business_card::{business_card, business_row};
pub use error::html_error_response;
pub use filter_form::{filter_form, view_input};
pub use notification::{notification, Notice, NoticeKind};
