mod error;
mod method_handler;

pub mod logs;
pub mod method;
pub mod response;

pub use error::Error;
pub use method::UtilsMethod;
pub use method_handler::{call_utils_method, call_utils_method_json};
pub use response::Response;

pub type Result<T> = std::result::Result<T, Error>;
