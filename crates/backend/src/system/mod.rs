pub mod request_logger;
pub mod tracing;
