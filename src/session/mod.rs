pub mod state;
pub mod store;
pub mod token;

pub use state::{ChatTurn, InsightsStage, LocationDetail, Page, SessionState, TransitionError};
pub use store::{SessionHandle, SessionStore, DEFAULT_MAX_SESSIONS, SESSION_COOKIE};
