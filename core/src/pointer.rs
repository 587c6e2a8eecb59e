use crate::style_vars::{POINTER_X_VAR, POINTER_Y_VAR};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpotlightPosition {
    pub x: i32,
    pub y: i32,
}

impl SpotlightPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn css_values(self) -> (String, String) {
        (format!("{}px", self.x), format!("{}px", self.y))
    }

    pub fn css_properties(self) -> [(&'static str, String); 2] {
        let (x, y) = self.css_values();
        [(POINTER_X_VAR, x), (POINTER_Y_VAR, y)]
    }
}
