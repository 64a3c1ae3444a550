pub mod endpoint;
pub mod error;
pub mod logger;
pub mod validation;
