use crate::dashboard::analysis_options::{analysis_type_key, AnalysisType, AnalysisTypeSelect};
use crate::env_variable_utils::FRAME_BASE_PATH;
use crate::models::{Analysis, AnalysisRequest};
use crate::utils::{format_duration_seconds, frame_src, truncate_prompt};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const SIDEBAR_PROMPT_PREVIEW_CHARS: usize = 60;

#[derive(Properties, PartialEq)]
pub struct PromptFormProps {
    pub video_url: String,
    pub loading: bool,
    pub on_submit: Callback<AnalysisRequest>,
}

#[function_component(PromptForm)]
pub fn prompt_form(props: &PromptFormProps) -> Html {
    let prompt = use_state(String::new);
    let analysis_type = use_state(|| AnalysisType::General);
    let video_url_input = use_state(|| props.video_url.clone());

    // Adopt the page-level video URL when a deep link or reset changes it.
    {
        let video_url_input = video_url_input.clone();
        let incoming = props.video_url.clone();
        let prev_video_url = use_state(|| props.video_url.clone());

        use_effect(move || {
            if *prev_video_url != incoming {
                prev_video_url.set(incoming.clone());
                video_url_input.set(incoming);
            }
            || ()
        });
    }

    let on_prompt_input = {
        let prompt = prompt.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            prompt.set(value);
        })
    };

    let on_url_input = {
        let video_url_input = video_url_input.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            video_url_input.set(value);
        })
    };

    let on_type_change = {
        let analysis_type = analysis_type.clone();
        Callback::from(move |at: AnalysisType| {
            analysis_type.set(at);
        })
    };

    let on_form_submit = {
        let on_submit = props.on_submit.clone();
        let prompt = prompt.clone();
        let analysis_type = analysis_type.clone();
        let video_url_input = video_url_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default(); // Prevent default form submission (page reload)
            on_submit.emit(AnalysisRequest {
                prompt: (*prompt).clone(),
                video_url: (*video_url_input).clone(),
                analysis_type: analysis_type_key(&analysis_type).to_string(),
            });
        })
    };

    html! {
        <div class="bg-white p-4 rounded-lg shadow">
            <h2 class="text-xl font-semibold mb-4 text-blue-800">{"AI Prompt"}</h2>
            <form onsubmit={on_form_submit}>
                <AnalysisTypeSelect
                    value={*analysis_type}
                    disabled={props.loading}
                    on_change={on_type_change}
                />
                <input
                    type="text"
                    class="w-full p-3 border border-gray-300 rounded mb-4 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="Enter video URL"
                    value={(*video_url_input).clone()}
                    oninput={on_url_input}
                    disabled={props.loading}
                    required={true}
                />
                <textarea
                    class="w-full p-3 border border-gray-300 rounded mb-4 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="Enter your prompt about the video..."
                    rows="4"
                    value={(*prompt).clone()}
                    oninput={on_prompt_input}
                    disabled={props.loading}
                    required={true}
                />
                <button
                    type="submit"
                    class="w-full bg-blue-600 text-white p-3 rounded hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                    disabled={props.loading}
                >
                    { if props.loading { "Analyzing..." } else { "Analyze" } }
                </button>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnalysisResultsProps {
    pub analysis: Option<Analysis>,
    pub error: Option<String>,
}

#[function_component(AnalysisResults)]
pub fn analysis_results(props: &AnalysisResultsProps) -> Html {
    html! {
        <div>
            {
                if let Some(analysis) = &props.analysis {
                    html! {
                        <div class="mt-4 p-4 bg-green-50 rounded-lg">
                            <h3 class="font-semibold text-green-800 mb-2">{"Analysis Results"}</h3>
                            <div class="space-y-2 text-green-700">
                                <p><strong>{"Analysis: "}</strong>{ &analysis.result }</p>
                                {
                                    if analysis.frames.is_empty() {
                                        html! {}
                                    } else {
                                        html! {
                                            <div class="grid grid-cols-3 gap-2 mt-2">
                                                { for analysis.frames.iter().enumerate().map(|(index, frame)| html! {
                                                    <FrameThumbnail
                                                        frame={frame.clone()}
                                                        index={index}
                                                        timestamp={analysis.timestamps.get(index).cloned()}
                                                    />
                                                })}
                                            </div>
                                        }
                                    }
                                }
                                <p>
                                    <strong>{"Duration: "}</strong>
                                    { format_duration_seconds(analysis.duration) }
                                </p>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if let Some(error) = &props.error {
                    html! {
                        <div class="mt-4 p-3 bg-red-100 text-red-700 rounded">
                            <strong>{"Error: "}</strong>{ error }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FrameThumbnailProps {
    pub frame: String,
    pub index: usize,
    /// Label for this frame; the service does not guarantee one per frame.
    pub timestamp: Option<String>,
}

#[function_component(FrameThumbnail)]
pub fn frame_thumbnail(props: &FrameThumbnailProps) -> Html {
    html! {
        <div class="relative">
            <img
                src={frame_src(&*FRAME_BASE_PATH, &props.frame)}
                alt={format!("Frame {}", props.index + 1)}
                class="w-full rounded"
            />
            {
                if let Some(timestamp) = &props.timestamp {
                    html! {
                        <span class="absolute bottom-0 right-0 bg-black/50 text-white text-xs p-1 rounded">
                            { timestamp }
                        </span>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoPanelProps {
    pub url: String,
    pub visible: bool,
}

#[function_component(VideoPanel)]
pub fn video_panel(props: &VideoPanelProps) -> Html {
    if !props.visible || props.url.is_empty() {
        return html! {
            <div class="bg-gray-100 p-4 rounded-lg text-center text-gray-500">
                {"Submit a video URL to see it here."}
            </div>
        };
    }

    html! {
        <div class="bg-white p-4 rounded-lg shadow">
            <h2 class="text-xl font-semibold mb-4 text-blue-800">{"Video"}</h2>
            <video
                controls={true}
                src={props.url.clone()}
                class="w-full rounded"
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub history: Vec<String>,
    pub on_select_prompt: Callback<String>,
    pub on_reset: Callback<MouseEvent>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <aside class="w-64 bg-white border-r border-gray-200 p-4 shrink-0">
            <button
                onclick={props.on_reset.clone()}
                class="w-full bg-blue-600 text-white p-2 rounded hover:bg-blue-700 mb-4"
            >
                {"New Experience"}
            </button>
            <h2 class="text-sm font-semibold text-gray-500 uppercase mb-2">{"History"}</h2>
            {
                if props.history.is_empty() {
                    html! { <p class="text-sm text-gray-400">{"No prompts yet."}</p> }
                } else {
                    html! {
                        <ul class="space-y-1">
                            { for props.history.iter().map(|prompt| {
                                let on_select_prompt = props.on_select_prompt.clone();
                                let selected = prompt.clone();
                                html! {
                                    <li>
                                        <button
                                            onclick={move |_| on_select_prompt.emit(selected.clone())}
                                            class="w-full text-left px-2 py-1 text-sm text-gray-700 rounded hover:bg-gray-100"
                                            title={prompt.clone()}
                                        >
                                            { truncate_prompt(prompt, SIDEBAR_PROMPT_PREVIEW_CHARS) }
                                        </button>
                                    </li>
                                }
                            })}
                        </ul>
                    }
                }
            }
        </aside>
    }
}
