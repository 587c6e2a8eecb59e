pub const ACCENT_VAR: &str = "--accent";
pub const POINTER_X_VAR: &str = "--mx";
pub const POINTER_Y_VAR: &str = "--my";
