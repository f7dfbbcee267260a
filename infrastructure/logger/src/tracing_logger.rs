use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Atelier -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Atelier -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Atelier -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Atelier -- ", "{}", message);
    }
}
