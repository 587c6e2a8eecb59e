use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, HtmlElement};

use portfolio_core::style_vars::ACCENT_VAR;
use portfolio_core::{Accent, SpotlightPosition};

fn root_style() -> Option<CssStyleDeclaration> {
    let document = web_sys::window()?.document()?;
    let root = document.document_element()?;
    let root = root.dyn_into::<HtmlElement>().ok()?;
    Some(root.style())
}

pub(crate) fn set_style_var(name: &str, value: &str) {
    let Some(style) = root_style() else {
        return;
    };
    let _ = style.set_property(name, value);
}

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) fn style_var(name: &str) -> Option<String> {
    root_style()?.get_property_value(name).ok()
}

pub(crate) fn apply_accent(accent: &Accent) {
    set_style_var(ACCENT_VAR, accent.as_str());
}

pub(crate) fn apply_spotlight(position: SpotlightPosition) {
    for (name, value) in position.css_properties() {
        set_style_var(name, &value);
    }
}
