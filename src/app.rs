use yew::prelude::*;

use crate::app_config;
use crate::boot;
use crate::clipboard;
use crate::modal::{use_modal_keys, ProjectModal};
use crate::nav::NavBar;
use crate::persisted_store;
use crate::pointer::use_pointer_spotlight;
use crate::scroll_spy::use_scroll_spy;
use crate::sections::{About, Contact, ExperienceSection, Hero, Projects, Skills};
use crate::style_runtime;
use crate::toast::{use_toast, ToastView};
use portfolio_core::{Accent, ModalState, Project, TagFilter, MESSAGE_SENT, PROFILE, SECTION_ORDER};

#[function_component(App)]
pub(crate) fn app() -> Html {
    let config = app_config::site_config();
    let accent = use_state(persisted_store::load_accent);
    let accent_value = (*accent).clone();
    let filter = use_state(TagFilter::default);
    let modal = use_state(ModalState::new);
    let toast = use_toast();
    use_modal_keys(modal.clone());
    let active = use_scroll_spy(SECTION_ORDER);
    use_pointer_spotlight();

    // persist and apply together on every accent change
    use_effect_with(accent_value.clone(), |accent| {
        persisted_store::save_accent(accent);
        style_runtime::apply_accent(accent);
        || ()
    });

    use_effect_with((), |_| {
        boot::ready();
        || ()
    });

    let on_accent = {
        let accent = accent.clone();
        Callback::from(move |next: Accent| {
            if app_config::debug_enabled() {
                gloo::console::log!("accent", next.as_str());
            }
            accent.set(next);
        })
    };
    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |next: TagFilter| filter.set(next))
    };
    let on_open = {
        let modal = modal.clone();
        Callback::from(move |project: &'static Project| {
            let mut next = *modal;
            next.open(project);
            modal.set(next);
        })
    };
    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            let mut next = *modal;
            next.close();
            modal.set(next);
        })
    };
    let on_copy = {
        let toast = toast.clone();
        let email = config.contact_email.clone();
        Callback::from(move |_: ()| {
            clipboard::copy_with_toast(email.clone(), "Email", toast.clone());
        })
    };
    let on_sent = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.show(MESSAGE_SENT))
    };
    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.dismiss())
    };

    let modal_view = match (modal.project(), modal.actions()) {
        (Some(project), Some(actions)) => html! { <ProjectModal {project} {actions} {on_close} /> },
        _ => html! {},
    };
    html! {
        <>
            <div class="spotlight" aria-hidden="true"></div>
            <NavBar {active} accent={accent_value} {on_accent} />
            <main>
                <Hero />
                <About />
                <Skills />
                <Projects filter={(*filter).clone()} {on_filter} {on_open} />
                <ExperienceSection />
                <Contact email={AttrValue::from(config.contact_email)} {on_copy} {on_sent} />
            </main>
            <footer class="footer">
                <p class="muted">{ format!("\u{00a9} {}", PROFILE.name) }</p>
            </footer>
            { modal_view }
            <ToastView message={toast.message()} {on_dismiss} />
        </>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit, HtmlElement, KeyboardEvent, KeyboardEventInit};
    use yew::AppHandle;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(id: &str) -> (Element, AppHandle<App>) {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        root.set_id(id);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        let app = yew::Renderer::<App>::with_root(root.clone()).render();
        (root, app)
    }

    async fn settle() {
        for _ in 0..5 {
            TimeoutFuture::new(0).await;
        }
    }

    fn click(root: &Element, selector: &str) {
        let element = root
            .query_selector(selector)
            .expect("valid selector")
            .unwrap_or_else(|| panic!("{selector} rendered"));
        element.unchecked_into::<HtmlElement>().click();
    }

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keyboard event");
        web_sys::window()
            .expect("window available")
            .dispatch_event(&event)
            .expect("dispatch keydown");
    }

    #[wasm_bindgen_test(async)]
    async fn escape_closes_project_modal() {
        let (root, app) = mount("modal-test-root");
        settle().await;
        press("Escape");
        settle().await;
        assert!(root.query_selector(".modal-card").unwrap().is_none());

        click(&root, ".project-card");
        settle().await;
        assert!(root.query_selector(".modal-card").unwrap().is_some());

        click(&root, ".modal-card");
        settle().await;
        assert!(root.query_selector(".modal-card").unwrap().is_some());

        press("Escape");
        settle().await;
        assert!(root.query_selector(".modal-card").unwrap().is_none());

        click(&root, ".project-card");
        settle().await;
        click(&root, ".modal-backdrop");
        settle().await;
        assert!(root.query_selector(".modal-card").unwrap().is_none());
        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn contact_submit_shows_toast() {
        let (root, app) = mount("toast-test-root");
        settle().await;
        let form = root
            .query_selector(".contact-form")
            .unwrap()
            .expect("contact form rendered");
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let submit = Event::new_with_event_init_dict("submit", &init).expect("submit event");
        form.dispatch_event(&submit).expect("dispatch submit");
        assert!(submit.default_prevented());
        settle().await;
        let toast = root
            .query_selector(".toast-message")
            .unwrap()
            .expect("toast rendered");
        assert_eq!(toast.text_content().as_deref(), Some(MESSAGE_SENT));

        click(&root, ".toast-close");
        settle().await;
        assert!(root.query_selector(".toast").unwrap().is_none());
        app.destroy();
        root.remove();
    }
}
