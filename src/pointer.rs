use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::PointerEvent;
use yew::prelude::*;

use crate::style_runtime;
use portfolio_core::SpotlightPosition;

#[hook]
pub(crate) fn use_pointer_spotlight() {
    use_effect_with((), |_| {
        let listener = web_sys::window().map(|window| {
            EventListener::new(&window, "pointermove", |event| {
                let Some(event) = event.dyn_ref::<PointerEvent>() else {
                    return;
                };
                style_runtime::apply_spotlight(SpotlightPosition::new(
                    event.client_x(),
                    event.client_y(),
                ));
            })
        });
        move || drop(listener)
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::style_runtime::style_var;
    use gloo::timers::future::TimeoutFuture;
    use portfolio_core::style_vars::{POINTER_X_VAR, POINTER_Y_VAR};
    use wasm_bindgen_test::*;
    use web_sys::PointerEventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(SpotlightHost)]
    fn spotlight_host() -> Html {
        use_pointer_spotlight();
        html! {}
    }

    fn move_pointer(x: i32, y: i32) {
        let init = PointerEventInit::new();
        init.set_client_x(x);
        init.set_client_y(y);
        let event = PointerEvent::new_with_event_init_dict("pointermove", &init)
            .expect("pointer event");
        web_sys::window()
            .expect("window available")
            .dispatch_event(&event)
            .expect("dispatch pointermove");
    }

    async fn settle() {
        for _ in 0..5 {
            TimeoutFuture::new(0).await;
        }
    }

    #[wasm_bindgen_test(async)]
    async fn pointer_moves_update_vars_until_teardown() {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        let handle = yew::Renderer::<SpotlightHost>::with_root(root.clone()).render();
        settle().await;

        move_pointer(31, 17);
        move_pointer(120, 48);
        assert_eq!(style_var(POINTER_X_VAR).as_deref(), Some("120px"));
        assert_eq!(style_var(POINTER_Y_VAR).as_deref(), Some("48px"));

        handle.destroy();
        settle().await;
        move_pointer(7, 9);
        assert_eq!(style_var(POINTER_X_VAR).as_deref(), Some("120px"));
        assert_eq!(style_var(POINTER_Y_VAR).as_deref(), Some("48px"));
        root.remove();
    }
}
