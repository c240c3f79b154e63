pub mod error;

pub use error::{HandlerError, HandlerResult};
