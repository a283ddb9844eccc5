//! Session events for hosts that render the annotation UI.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::SessionEventHandler;
pub use types::*;
