use crate::analysis::api::submit_analysis;
use crate::analysis::state::{validate_url, SubmitError};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnalyzeFormProps {
    /// Emitted once the server has accepted the request: (task id, video id).
    pub on_submit: Callback<(String, String)>,
}

#[function_component(AnalyzeForm)]
pub fn analyze_form(props: &AnalyzeFormProps) -> Html {
    let youtube_url = use_state(String::new);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<SubmitError>);

    let on_input = {
        let youtube_url = youtube_url.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            youtube_url.set(input_value);
        })
    };

    let on_submit = {
        let on_accepted = props.on_submit.clone();
        let youtube_url = youtube_url.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default(); // Prevent default form submission (page reload)
            error.set(None);

            // Local validation; nothing below touches the network on failure.
            let video_id = match validate_url(&youtube_url) {
                Ok(id) => id,
                Err(reason) => {
                    error.set(Some(reason));
                    return;
                }
            };

            submitting.set(true);
            let on_accepted = on_accepted.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match submit_analysis(&video_id).await {
                    Ok(response) => match response.task_id() {
                        Some(task_id) => {
                            // Parent navigates away; this view is done.
                            on_accepted.emit((task_id, video_id));
                        }
                        None => {
                            // Sentinel -1: server-side rejection.
                            error.set(Some(SubmitError::Rejected));
                            submitting.set(false);
                        }
                    },
                    Err(e) => {
                        log::warn!("analysis submission failed: {e}");
                        error.set(Some(SubmitError::Connection));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <form onsubmit={on_submit} class="w-full">
            <label for="youtube-url" class="block text-gray-700 mb-2">
                {"Paste the YouTube link you want analyzed"}
            </label>
            <div class="flex mb-4">
                <input
                    id="youtube-url"
                    type="text"
                    class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="https://www.youtube.com/watch?v=..."
                    value={(*youtube_url).clone()}
                    oninput={on_input}
                    disabled={*submitting}
                />
                <button
                    type="submit"
                    class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                    disabled={*submitting}
                >
                    { if *submitting { "Analyzing..." } else { "Start analysis" } }
                </button>
            </div>
            {
                if let Some(reason) = *error {
                    html! {
                        <p class="text-red-600 text-center mb-4">{ reason.message() }</p>
                    }
                } else {
                    html! {}
                }
            }
        </form>
    }
}
