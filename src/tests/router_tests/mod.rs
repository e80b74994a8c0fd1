mod chat_tests;
mod error_tests;
mod home_tests;
mod insights_tests;
