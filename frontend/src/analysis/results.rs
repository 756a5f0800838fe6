use crate::analysis::api::{get_analysis_info, get_task_status};
use crate::analysis::state::{
    status_message, FatalError, PollOutcome, PollTracker, DONE_DELAY_MS, POLL_INTERVAL_MS,
};
use crate::models::{AnalysisInfo, SafetyTier};
use crate::utils::{format_duration, format_published_date, thumbnail_url};
use gloo_timers::callback::{Interval, Timeout};
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultsDisplayProps {
    pub task_id: String,
    /// Video id carried over from the submission page, only used for the
    /// thumbnail while the task is still processing.
    #[prop_or_default]
    pub initial_video_id: Option<String>,
    /// False: poll the task status. True: fetch and render the result.
    #[prop_or(false)]
    pub done: bool,
    pub on_new_analysis: Callback<()>,
    #[prop_or_default]
    pub on_done: Callback<()>,
}

#[function_component(ResultsDisplay)]
pub fn results_display(props: &ResultsDisplayProps) -> Html {
    let status_text = use_state(|| {
        if props.done {
            "Analysis complete!"
        } else {
            "Preparing..."
        }
    });
    let result = use_state(|| None::<AnalysisInfo>);
    let error = use_state(|| None::<FatalError>);
    let tracker = use_mut_ref(PollTracker::new);
    let done_timer = use_mut_ref(|| None::<Timeout>);

    // Processing mode: poll on mount, then every POLL_INTERVAL_MS. The
    // tracker denies ticks once a terminal status was seen, a poll is
    // already in flight, or the view was torn down.
    {
        let status_text = status_text.clone();
        let error = error.clone();
        let tracker = tracker.clone();
        let done_timer = done_timer.clone();
        let on_done = props.on_done.clone();
        use_effect_with((props.task_id.clone(), props.done), move |(task_id, done)| {
            let mut interval = None;
            if !done {
                let poll: Rc<dyn Fn()> = {
                    let task_id = task_id.clone();
                    let tracker = tracker.clone();
                    let done_timer = done_timer.clone();
                    Rc::new(move || {
                        if !tracker.borrow_mut().try_begin() {
                            return;
                        }
                        let task_id = task_id.clone();
                        let tracker = tracker.clone();
                        let done_timer = done_timer.clone();
                        let status_text = status_text.clone();
                        let error = error.clone();
                        let on_done = on_done.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            let (outcome, status) = match get_task_status(&task_id).await {
                                Ok(response) => (
                                    tracker.borrow_mut().complete(response.status),
                                    Some(response.status),
                                ),
                                Err(e) => {
                                    log::warn!("status poll failed: {e}");
                                    (tracker.borrow_mut().fail(), None)
                                }
                            };
                            match outcome {
                                PollOutcome::KeepPolling => {
                                    if let Some(status) = status {
                                        status_text.set(status_message(status));
                                    }
                                }
                                PollOutcome::Finished => {
                                    status_text.set("Analysis complete!");
                                    let on_done = on_done.clone();
                                    *done_timer.borrow_mut() = Some(Timeout::new(
                                        DONE_DELAY_MS,
                                        move || on_done.emit(()),
                                    ));
                                }
                                PollOutcome::Failed(fatal) => error.set(Some(fatal)),
                                PollOutcome::Ignore => {}
                            }
                        });
                    })
                };
                poll();
                interval = Some(Interval::new(POLL_INTERVAL_MS, {
                    let poll = poll.clone();
                    move || poll()
                }));
            }
            let tracker = tracker.clone();
            let done_timer = done_timer.clone();
            move || {
                // Teardown: no poll may fire and no pending transition may
                // navigate after this point.
                tracker.borrow_mut().cancel();
                done_timer.borrow_mut().take();
                drop(interval);
            }
        });
    }

    // Result mode: fetch the analysis exactly once.
    {
        let result = result.clone();
        let error = error.clone();
        use_effect_with((props.task_id.clone(), props.done), move |(task_id, done)| {
            let alive = Rc::new(Cell::new(true));
            if *done {
                let task_id = task_id.clone();
                let alive = alive.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let fetched = get_analysis_info(&task_id).await;
                    if !alive.get() {
                        return;
                    }
                    match fetched {
                        Ok(info) => {
                            if info.video_id().is_some() {
                                result.set(Some(info));
                            } else {
                                error.set(Some(FatalError::TaskNotFound));
                            }
                        }
                        Err(e) => {
                            log::warn!("result fetch failed: {e}");
                            error.set(Some(FatalError::ResultUnavailable));
                        }
                    }
                });
            }
            move || alive.set(false)
        });
    }

    if let Some(fatal) = *error {
        return html! {
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-2xl text-center">
                <p class="text-red-600 mb-6">{ fatal.message() }</p>
                <NewAnalysisButton on_new_analysis={props.on_new_analysis.clone()} />
            </div>
        };
    }

    if !props.done {
        return html! {
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-2xl text-center">
                {
                    if let Some(video_id) = &props.initial_video_id {
                        html! {
                            <img
                                src={thumbnail_url(video_id)}
                                alt="Video thumbnail"
                                class="rounded-lg mx-auto mb-6 max-w-full"
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                <Spinner />
                <p class="text-gray-700">{ *status_text }</p>
            </div>
        };
    }

    match &*result {
        None => html! {
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-2xl text-center">
                <Spinner />
                <p class="text-gray-700">{"Loading result..."}</p>
            </div>
        },
        Some(info) => {
            let tier = SafetyTier::classify(info.score);
            let tags = info.tag_list();
            html! {
                <div class="w-full max-w-2xl">
                    {
                        if let Some(video_id) = info.video_id() {
                            html! {
                                <div class="bg-white rounded-lg shadow-lg overflow-hidden mb-4">
                                    <img
                                        src={thumbnail_url(&video_id)}
                                        alt="Video thumbnail"
                                        class="w-full"
                                    />
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <div class="bg-white p-8 rounded-lg shadow-lg">
                        <div class="flex items-center mb-6">
                            <TierBadge {tier} />
                            <div class="ml-4">
                                <h2 class="text-xl font-bold text-gray-800">{ tier.headline() }</h2>
                                <p class="text-gray-600">{ format!("{}/100", info.score) }</p>
                            </div>
                        </div>
                        { render_metadata(info) }
                        <div class="text-gray-700 mb-4">
                            { Html::from_html_unchecked(AttrValue::from(info.description.as_str().to_string())) }
                        </div>
                        {
                            if tags.is_empty() {
                                html! {}
                            } else {
                                html! {
                                    <div class="flex flex-wrap gap-2 mb-6">
                                        {
                                            tags.iter().map(|tag| html! {
                                                <span class="bg-gray-100 text-gray-700 px-3 py-1 rounded-full text-sm">
                                                    { format!("#{tag}") }
                                                </span>
                                            }).collect::<Html>()
                                        }
                                    </div>
                                }
                            }
                        }
                        <NewAnalysisButton on_new_analysis={props.on_new_analysis.clone()} />
                    </div>
                </div>
            }
        }
    }
}

fn render_metadata(info: &AnalysisInfo) -> Html {
    let mut rows = Vec::new();
    if let Some(channel) = &info.channel_name {
        rows.push(("Channel", channel.clone()));
    }
    if let Some(duration) = info.duration {
        rows.push(("Duration", format_duration(duration)));
    }
    if let Some(published) = &info.published_at {
        rows.push(("Published", format_published_date(published)));
    }
    if info.title.is_none() && rows.is_empty() {
        return html! {};
    }
    html! {
        <div class="mb-4">
            {
                if let Some(title) = &info.title {
                    html! { <h3 class="text-lg font-semibold text-gray-800 mb-2">{ title }</h3> }
                } else {
                    html! {}
                }
            }
            {
                rows.into_iter().map(|(label, value)| html! {
                    <p class="text-sm text-gray-500">
                        <span class="font-medium">{ format!("{label}: ") }</span>
                        { value }
                    </p>
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TierBadgeProps {
    tier: SafetyTier,
}

#[function_component(TierBadge)]
fn tier_badge(props: &TierBadgeProps) -> Html {
    let icon = match props.tier {
        SafetyTier::Safe => "M7 12l3 3 7-7",
        SafetyTier::Caution => "M12 6v7m0 3v1",
        SafetyTier::Harmful => "M8 8l8 8M16 8l-8 8",
    };
    html! {
        <svg viewBox="0 0 24 24" width="48" height="48">
            <circle cx="12" cy="12" r="11" fill={props.tier.badge_color()} />
            <path
                d={icon}
                stroke="white"
                stroke-width="2"
                fill="none"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
struct NewAnalysisButtonProps {
    on_new_analysis: Callback<()>,
}

#[function_component(NewAnalysisButton)]
fn new_analysis_button(props: &NewAnalysisButtonProps) -> Html {
    let onclick = props.on_new_analysis.reform(|_: MouseEvent| ());
    html! {
        <button
            {onclick}
            class="bg-blue-600 text-white px-6 py-3 rounded-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500"
        >
            {"Analyze another video"}
        </button>
    }
}

#[function_component(Spinner)]
fn spinner() -> Html {
    html! {
        <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600 mx-auto mb-4"></div>
    }
}
