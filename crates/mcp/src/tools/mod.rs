// MCP tools backed by the Tuesday API

mod dispatch;
mod error;
pub mod format;

pub use dispatch::{Dispatcher, DispatcherConfig};
pub use error::DispatchError;
