pub mod chat;
pub mod home;
pub mod insights;

pub use chat::chat_page;
pub use home::home_page;
pub use insights::{insights_page, InsightsVm};
