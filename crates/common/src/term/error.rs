use crate::term::logger;

/// Log an error chain, outermost context first.
pub fn log_error(error: anyhow::Error) {
    logger::new_empty_line();
    logger::error(format!("{error:#}"));
    logger::outro("Failed");
}
