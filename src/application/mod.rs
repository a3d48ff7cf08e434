//! Application layer - Controllers and use cases

pub mod board;
pub mod init;
pub mod manage_config;
pub mod observer;
pub mod session;

pub use board::{BoardEvent, NewsBoard};
pub use manage_config::ConfigService;
pub use observer::{SubscriptionId, Subscribers};
pub use session::{EditorSession, SubmitOutcome};
