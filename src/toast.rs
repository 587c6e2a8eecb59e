use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use portfolio_core::{ToastState, TOAST_DURATION_MS};

#[derive(Clone)]
pub(crate) struct ToastHandle {
    message: UseStateHandle<Option<String>>,
    live: Rc<RefCell<ToastState>>,
    timer: Rc<RefCell<Option<Timeout>>>,
    mounted: Rc<Cell<bool>>,
}

impl PartialEq for ToastHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.live, &other.live) && *self.message == *other.message
    }
}

impl ToastHandle {
    pub(crate) fn message(&self) -> Option<String> {
        (*self.message).clone()
    }

    pub(crate) fn show(&self, message: impl Into<String>) {
        // late callers (a clipboard promise resolving after teardown) must
        // not arm a timer nobody will cancel
        if !self.mounted.get() {
            return;
        }
        let message = message.into();
        let ticket = self.live.borrow_mut().show(message.clone());
        self.message.set(Some(message));
        let live = self.live.clone();
        let state = self.message.clone();
        let timer = Timeout::new(TOAST_DURATION_MS, move || {
            if live.borrow_mut().expire(ticket) {
                state.set(None);
            }
        });
        // replacing the old timeout cancels it
        *self.timer.borrow_mut() = Some(timer);
    }

    pub(crate) fn dismiss(&self) {
        self.live.borrow_mut().dismiss();
        self.timer.borrow_mut().take();
        self.message.set(None);
    }
}

#[hook]
pub(crate) fn use_toast() -> ToastHandle {
    let message = use_state(|| None::<String>);
    let live = use_mut_ref(ToastState::new);
    let timer = use_mut_ref(|| None::<Timeout>);
    let mounted = use_memo((), |_| Cell::new(true));
    {
        let timer = timer.clone();
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            move || {
                mounted.set(false);
                timer.borrow_mut().take();
            }
        });
    }
    ToastHandle {
        message,
        live,
        timer,
        mounted,
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ToastViewProps {
    pub(crate) message: Option<String>,
    pub(crate) on_dismiss: Callback<()>,
}

#[function_component(ToastView)]
pub(crate) fn toast_view(props: &ToastViewProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };
    let onclick = props.on_dismiss.reform(|_: MouseEvent| ());
    html! {
        <div class="toast" role="status" aria-live="polite">
            <span class="toast-message">{ message }</span>
            <button type="button" class="toast-close" aria-label="Dismiss" {onclick}>
                { "\u{00d7}" }
            </button>
        </div>
    }
}
