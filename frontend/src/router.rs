use crate::analysis::results::ResultsDisplay;
use crate::analysis::submit_form::AnalyzeForm;
use crate::env_variable_utils::get_app_name;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/processing/:taskid")]
    Processing { taskid: String },
    #[at("/done/:taskid")]
    Done { taskid: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Processing { taskid } => html! { <ProcessingPage {taskid} /> },
        Route::Done { taskid } => html! { <DonePage {taskid} /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Back to analysis"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let navigator = use_navigator().unwrap();

    // The video id rides along as transient navigation state so the
    // processing page can show a thumbnail before the first status arrives.
    // It is deliberately not part of the URL.
    let on_submit = Callback::from(move |(task_id, video_id): (String, String)| {
        navigator.push_with_state(&Route::Processing { taskid: task_id }, video_id);
    });

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-2xl">
                <header class="text-center mb-6">
                    <h1 class="text-3xl font-bold text-gray-800">
                        {"TubeSafe"}
                        <span class="text-blue-500">{" beta"}</span>
                    </h1>
                    <p class="text-gray-600 mt-2">
                        {"AI-based content safety analysis for YouTube videos"}
                    </p>
                </header>
                <AnalyzeForm {on_submit} />
            </div>
            <footer class="text-gray-400 text-sm mt-6">
                { get_app_name() }
            </footer>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TaskPageProps {
    pub taskid: String,
}

#[function_component(ProcessingPage)]
pub fn processing_page(props: &TaskPageProps) -> Html {
    let navigator = use_navigator().unwrap();
    let location = use_location();
    let initial_video_id = location
        .and_then(|l| l.state::<String>())
        .map(|s| (*s).clone());

    let on_new_analysis = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Home))
    };
    let on_done = {
        let navigator = navigator.clone();
        let taskid = props.taskid.clone();
        Callback::from(move |_| {
            navigator.push(&Route::Done {
                taskid: taskid.clone(),
            })
        })
    };

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-700 p-4">
            <ResultsDisplay
                task_id={props.taskid.clone()}
                {initial_video_id}
                done={false}
                {on_new_analysis}
                {on_done}
            />
        </div>
    }
}

#[function_component(DonePage)]
pub fn done_page(props: &TaskPageProps) -> Html {
    let navigator = use_navigator().unwrap();
    let on_new_analysis = Callback::from(move |_| navigator.push(&Route::Home));

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-700 p-4">
            <ResultsDisplay
                task_id={props.taskid.clone()}
                done={true}
                {on_new_analysis}
            />
        </div>
    }
}
