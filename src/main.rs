mod app;
mod app_config;
mod boot;
mod clipboard;
mod modal;
mod nav;
mod persisted_store;
mod pointer;
mod scroll_spy;
mod sections;
mod style_runtime;
mod toast;

fn main() {
    console_error_panic_hook::set_once();
    let config = app_config::load_site_config();
    if config.debug {
        gloo::console::log!("site config", format!("{config:?}"));
    }
    app_config::set_site_config(config);
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("app"));
    let Some(root) = root else {
        boot::fail(
            "mount",
            "Missing #app element",
            "index.html must contain <div id=\"app\">",
        );
        return;
    };
    yew::Renderer::<app::App>::with_root(root).render();
}
