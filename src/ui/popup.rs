/// Popup UI for the transcript extension

use std::cell::RefCell;
use std::rc::Rc;

use patternfly_yew::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::browser::BrowserHost;
use crate::controller::{Effect, Msg, PopupState, run_copy, run_fetch};
use crate::ui::components::{StatusLine, TranscriptView};

/// Reducer state: the popup state plus effects waiting to be run after render.
///
/// The outbox is shared by every version of the model, so effects queued by several
/// dispatches before the next render are all kept.
#[derive(Default)]
struct PopupModel {
    state: PopupState,
    outbox: Rc<RefCell<Vec<Effect>>>,
}

impl Reducible for PopupModel {
    type Action = Msg;

    fn reduce(self: Rc<Self>, msg: Msg) -> Rc<Self> {
        let mut state = self.state.clone();
        let effects = state.update(msg);
        self.outbox.borrow_mut().extend(effects);

        Rc::new(PopupModel {
            state,
            outbox: self.outbox.clone(),
        })
    }
}

fn run_effect(effect: Effect, dispatcher: UseReducerDispatcher<PopupModel>) {
    match effect {
        Effect::FetchTranscript => {
            spawn_local(async move {
                run_fetch(&BrowserHost, |msg| dispatcher.dispatch(msg)).await;
            });
        }
        Effect::WriteClipboard(text) => {
            spawn_local(async move {
                run_copy(&BrowserHost, &text, |msg| dispatcher.dispatch(msg)).await;
            });
        }
        Effect::ResetCopyLabel { after_ms } => {
            schedule(after_ms, move || dispatcher.dispatch(Msg::CopyFeedbackExpired));
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let model = use_reducer(PopupModel::default);

    // Run whatever the last dispatches queued
    {
        let outbox = model.outbox.clone();
        let dispatcher = model.dispatcher();
        use_effect(move || {
            let effects: Vec<Effect> = outbox.borrow_mut().drain(..).collect();
            for effect in effects {
                run_effect(effect, dispatcher.clone());
            }
            || ()
        });
    }

    // Get Transcript handler
    let on_fetch = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(Msg::FetchClicked))
    };

    // Copy to Clipboard handler
    let on_copy = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(Msg::CopyClicked))
    };

    let view = &model.state;

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"YouTube Transcript"}</h1>

            <div class="flex-column-gap">
                <Button
                    onclick={on_fetch}
                    disabled={view.is_fetching()}
                    variant={ButtonVariant::Primary}
                    block={true}
                >
                    {"Get Transcript"}
                </Button>
                <Button
                    onclick={on_copy}
                    disabled={!view.copy_enabled()}
                    variant={ButtonVariant::Secondary}
                    block={true}
                >
                    {view.copy_label()}
                </Button>
            </div>

            if view.is_fetching() {
                <div class="loading-text-center">
                    <Spinner />
                </div>
            }

            <StatusLine message={view.status().to_string()} />

            if view.transcript_visible() {
                if let Some(video_id) = view.video_id() {
                    <p class="video-id">{format!("Video {}", video_id)}</p>
                }
                <TranscriptView text={view.transcript().to_string()} />
            }
        </div>
    }
}

/// Run `callback` once after `after_ms` milliseconds.
fn schedule(after_ms: u32, callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let closure = Closure::once_into_js(callback);
    let timeout = i32::try_from(after_ms).unwrap_or(i32::MAX);
    if let Err(e) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), timeout)
    {
        log::warn!("Failed to schedule timer: {:?}", e);
    }
}
