//! Request middleware applied to the whole router.

mod logging;

pub use logging::log_requests;
