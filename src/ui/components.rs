/// Reusable UI components

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusLineProps {
    pub message: AttrValue,
}

#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    if props.message.is_empty() {
        return html! {};
    }

    html! {
        <p id="status-message" class="status-message">{props.message.clone()}</p>
    }
}

#[derive(Properties, PartialEq)]
pub struct TranscriptViewProps {
    pub text: AttrValue,
}

/// Scrollable read-only transcript box
#[function_component(TranscriptView)]
pub fn transcript_view(props: &TranscriptViewProps) -> Html {
    html! {
        <div id="transcript-container" class="transcript-container">
            <div id="transcript-text" class="transcript-text">{props.text.clone()}</div>
        </div>
    }
}
