use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`; every event goes to the `food_details` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "food_details", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "food_details", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "food_details", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "food_details", "{}", message);
    }
}
