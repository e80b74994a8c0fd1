pub mod html;
pub mod xlsx;

pub use crate::errors::ResultResp;
pub use html::{css_response, html_response, see_other};
pub use xlsx::xlsx_response;
