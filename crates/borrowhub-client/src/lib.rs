pub mod error;
pub mod gateway;
pub mod http;
pub mod poller;
pub mod session;
pub mod store;

pub use error::ApiError;
pub use gateway::NotificationGateway;
pub use http::HttpGateway;
pub use poller::{DEFAULT_POLL_INTERVAL, Poller};
pub use session::Session;
pub use store::{NotificationStore, StoreState};
