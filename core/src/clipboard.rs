pub const COPY_FAILED_MESSAGE: &str = "Copy failed";

pub fn copy_toast_message<E>(label: &str, outcome: &Result<(), E>) -> String {
    match outcome {
        Ok(()) => format!("{label} copied"),
        Err(_) => COPY_FAILED_MESSAGE.to_string(),
    }
}
