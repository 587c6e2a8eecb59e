use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::app_config;
use portfolio_core::{Accent, SectionId, ACCENT_PALETTE, PROFILE, SECTION_ORDER};

pub(crate) fn scroll_to_section(section: SectionId) {
    if !scroll_to_element_id(section.as_str()) && app_config::debug_enabled() {
        gloo::console::log!("no scroll target", section.as_str());
    }
}

fn scroll_to_element_id(id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[derive(Properties, PartialEq)]
pub(crate) struct NavBarProps {
    pub(crate) active: SectionId,
    pub(crate) accent: Accent,
    pub(crate) on_accent: Callback<Accent>,
}

#[function_component(NavBar)]
pub(crate) fn nav_bar(props: &NavBarProps) -> Html {
    let links: Html = SECTION_ORDER
        .iter()
        .copied()
        .map(|section| {
            let active = section == props.active;
            let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(section));
            html! {
                <li>
                    <button
                        type="button"
                        class={classes!("nav-link", active.then_some("active"))}
                        aria-current={active.then_some("true")}
                        {onclick}
                    >
                        { section.label() }
                    </button>
                </li>
            }
        })
        .collect();
    let on_brand = Callback::from(|_: MouseEvent| scroll_to_section(SectionId::Home));
    html! {
        <header class="nav">
            <button type="button" class="brand" onclick={on_brand}>{ PROFILE.name }</button>
            <nav aria-label="Sections">
                <ul class="nav-links">{ links }</ul>
            </nav>
            <AccentPicker accent={props.accent.clone()} on_pick={props.on_accent.clone()} />
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct AccentPickerProps {
    pub(crate) accent: Accent,
    pub(crate) on_pick: Callback<Accent>,
}

#[function_component(AccentPicker)]
pub(crate) fn accent_picker(props: &AccentPickerProps) -> Html {
    let swatches: Html = ACCENT_PALETTE
        .iter()
        .map(|preset| {
            let selected = props.accent.preset() == Some(preset);
            let onclick = props.on_pick.reform(move |_: MouseEvent| Accent::from(preset));
            html! {
                <button
                    type="button"
                    class={classes!("swatch", selected.then_some("selected"))}
                    style={format!("background: {}", preset.value)}
                    title={preset.name}
                    aria-label={format!("Accent {}", preset.name)}
                    aria-pressed={selected.to_string()}
                    {onclick}
                />
            }
        })
        .collect();
    html! {
        <div class="accent-picker" role="group" aria-label="Accent colour">{ swatches }</div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_scroll_target_is_a_noop() {
        assert!(!scroll_to_element_id("no-such-section"));
        scroll_to_section(SectionId::Experience);
    }

    #[wasm_bindgen_test]
    fn present_scroll_target_scrolls() {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let target = document.create_element("div").expect("create target");
        target.set_id("scroll-target-test");
        document
            .body()
            .expect("body available")
            .append_child(&target)
            .expect("append target");
        assert!(scroll_to_element_id("scroll-target-test"));
        target.remove();
    }
}
