use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter emitting `tracing` events under the `cart_service`
/// target, each tagged with the component that produced it.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "cart_service", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "cart_service", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "cart_service", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "cart_service", component = self.component, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_log_without_subscriber_installed() {
        let logger = TracingLogger::new("test");

        logger.info("info");
        logger.warn("warn");
        logger.error("error");
        logger.debug("debug");
    }
}
