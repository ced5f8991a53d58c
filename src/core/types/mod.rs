mod badge;
pub mod config;
mod error;
mod pull_request;
mod stats;
mod vote;

pub use badge::*;
pub use error::*;
pub use pull_request::*;
pub use stats::*;
pub use vote::*;
