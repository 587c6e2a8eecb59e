use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use portfolio_core::{ModalActions, ModalState, Project};

// Registers a window keydown listener only while the modal is open and
// routes every key through `ModalState::handle_key`.
#[hook]
pub(crate) fn use_modal_keys(modal: UseStateHandle<ModalState>) {
    let listening = modal.wants_key_listener();
    use_effect_with(listening, move |listening| {
        let listener = if *listening {
            web_sys::window().map(|window| {
                EventListener::new(&window, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    let mut next = *modal;
                    if next.handle_key(&event.key()) {
                        event.prevent_default();
                        modal.set(next);
                    }
                })
            })
        } else {
            None
        };
        move || drop(listener)
    });
}

#[derive(Properties, PartialEq)]
pub(crate) struct ProjectModalProps {
    pub(crate) project: &'static Project,
    pub(crate) actions: ModalActions,
    pub(crate) on_close: Callback<()>,
}

#[function_component(ProjectModal)]
pub(crate) fn project_modal(props: &ProjectModalProps) -> Html {
    let project = props.project;
    let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
    let on_close_button = props.on_close.reform(|_: MouseEvent| ());
    let on_card = Callback::from(|event: MouseEvent| event.stop_propagation());
    let actions: Html = props
        .actions
        .entries()
        .into_iter()
        .map(|(label, url)| {
            html! {
                <a class="button" href={url} target="_blank" rel="noopener noreferrer">
                    { label }
                </a>
            }
        })
        .collect();
    let tags: Html = project
        .tags
        .iter()
        .map(|tag| html! { <span class="tag">{ *tag }</span> })
        .collect();
    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div
                class="modal-card"
                role="dialog"
                aria-modal="true"
                aria-labelledby="modal-title"
                onclick={on_card}
            >
                <button
                    type="button"
                    class="modal-close"
                    aria-label="Close"
                    onclick={on_close_button}
                >
                    { "\u{00d7}" }
                </button>
                <h3 id="modal-title">{ project.title }</h3>
                <div class="tags">{ tags }</div>
                <p>{ project.description }</p>
                <div class="modal-actions">{ actions }</div>
            </div>
        </div>
    }
}
