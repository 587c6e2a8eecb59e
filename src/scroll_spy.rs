use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::app_config;
use portfolio_core::{IntersectionSample, ScrollSpy, SectionId, SPY_ROOT_MARGIN, SPY_THRESHOLDS};

#[hook]
pub(crate) fn use_scroll_spy(sections: &'static [SectionId]) -> SectionId {
    let active = use_state(|| ScrollSpy::new(sections).active());
    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let document = web_sys::window().and_then(|window| window.document());
            let observer = document.and_then(|document| {
                SpyObserver::attach(
                    sections,
                    |id| document.get_element_by_id(id),
                    move |next| active.set(next),
                )
            });
            move || drop(observer)
        });
    }
    *active
}

struct SpyObserver {
    observer: IntersectionObserver,
    observed: Vec<SectionId>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl SpyObserver {
    fn attach<L, F>(sections: &[SectionId], lookup: L, on_change: F) -> Option<Self>
    where
        L: Fn(&str) -> Option<Element>,
        F: Fn(SectionId) + 'static,
    {
        let spy = Rc::new(RefCell::new(ScrollSpy::new(sections)));
        let callback = {
            let spy = spy.clone();
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, _observer: IntersectionObserver| {
                    let batch = samples_from_entries(&entries);
                    let next = {
                        let mut spy = spy.borrow_mut();
                        if !spy.observe(&batch) {
                            return;
                        }
                        spy.active()
                    };
                    if app_config::debug_enabled() {
                        gloo::console::log!("active section", next.as_str());
                    }
                    on_change(next);
                },
            )
        };
        let options = IntersectionObserverInit::new();
        options.set_root_margin(SPY_ROOT_MARGIN);
        let thresholds: Array = SPY_THRESHOLDS
            .iter()
            .map(|threshold| JsValue::from_f64(*threshold))
            .collect();
        options.set_threshold(&thresholds);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        let mut observed = Vec::new();
        for section in spy.borrow().sections() {
            // sections missing from the page are skipped
            if let Some(element) = lookup(section.as_str()) {
                observer.observe(&element);
                observed.push(*section);
            }
        }
        if app_config::debug_enabled() {
            let ids: Vec<&str> = observed.iter().map(|section| section.as_str()).collect();
            gloo::console::log!("observing sections", ids.join(","));
        }
        Some(Self {
            observer,
            observed,
            _callback: callback,
        })
    }
}

impl Drop for SpyObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn samples_from_entries(entries: &Array) -> Vec<IntersectionSample> {
    entries
        .iter()
        .filter_map(|value| {
            let entry = value.dyn_into::<IntersectionObserverEntry>().ok()?;
            let section = SectionId::parse(&entry.target().id())?;
            Some(IntersectionSample::new(
                section,
                entry.is_intersecting(),
                entry.intersection_ratio(),
            ))
        })
        .collect()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use portfolio_core::SECTION_ORDER;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container_with(ids: &[&str]) -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let container = document.create_element("div").expect("create container");
        for id in ids {
            let section = document.create_element("section").expect("create section");
            section.set_id(id);
            container.append_child(&section).expect("append section");
        }
        container
    }

    #[wasm_bindgen_test]
    fn missing_sections_are_skipped() {
        let container = container_with(&["about", "contact"]);
        let lookup = |id: &str| container.query_selector(&format!("#{id}")).ok().flatten();
        let observer =
            SpyObserver::attach(SECTION_ORDER, lookup, |_| {}).expect("observer attached");
        assert_eq!(observer.observed, vec![SectionId::About, SectionId::Contact]);
    }

    #[wasm_bindgen_test]
    fn no_sections_on_page_still_attaches() {
        let observer = SpyObserver::attach(SECTION_ORDER, |_| None, |_| {})
            .expect("observer attached");
        assert!(observer.observed.is_empty());
    }
}
