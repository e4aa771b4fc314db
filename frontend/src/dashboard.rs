use crate::dashboard::api::execute_analysis;
use crate::dashboard::components::{AnalysisResults, PromptForm, Sidebar, VideoPanel};
use crate::models::{Analysis, AnalysisRequest};
use crate::router::{get_video_param, update_video_param};
use yew::prelude::*;

pub mod analysis_options;
pub mod api;
pub mod components;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let video_url = use_state(String::new);
    let video_submitted = use_state(|| false);
    let analysis = use_state(|| None::<Analysis>);
    let error_message = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let history = use_state(Vec::<String>::new);
    let init_done = use_state(|| false);

    // Effect for initial load: prefill the video field from a shared link.
    {
        let video_url = video_url.clone();
        let init_done = init_done.clone();

        use_effect(move || {
            if !*init_done {
                if let Some(url) = get_video_param() {
                    video_url.set(url);
                }
                init_done.set(true);
            }
            || ()
        });
    }

    let on_analyze = {
        let video_url = video_url.clone();
        let video_submitted = video_submitted.clone();
        let analysis = analysis.clone();
        let error_message = error_message.clone();
        let loading = loading.clone();
        let history = history.clone();

        Callback::from(move |request: AnalysisRequest| {
            video_url.set(request.video_url.clone());
            video_submitted.set(true);
            // Attempted submissions count too; the entry goes in before the
            // request settles.
            history.set(prepend_history(&history, &request.prompt));
            update_video_param(&request.video_url);

            loading.set(true);
            error_message.set(None);
            analysis.set(None);

            let analysis = analysis.clone();
            let error_message = error_message.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                execute_analysis(request, analysis, error_message, loading).await;
            });
        })
    };

    let on_select_prompt = {
        let history = history.clone();
        Callback::from(move |prompt: String| {
            history.set(prepend_history(&history, &prompt));
        })
    };

    // Clears the display state. History survives on purpose.
    let on_reset = {
        let video_url = video_url.clone();
        let video_submitted = video_submitted.clone();
        let analysis = analysis.clone();
        let error_message = error_message.clone();

        Callback::from(move |_: MouseEvent| {
            video_url.set(String::new());
            video_submitted.set(false);
            analysis.set(None);
            error_message.set(None);
        })
    };

    html! {
        <div class="flex min-h-screen bg-gray-100">
            <Sidebar
                history={(*history).clone()}
                on_select_prompt={on_select_prompt}
                on_reset={on_reset}
            />
            <div class="flex-1 p-8">
                <h1 class="text-3xl font-bold mb-8 text-center text-blue-900">
                    {"Video Analysis Dashboard"}
                </h1>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <PromptForm
                        video_url={(*video_url).clone()}
                        loading={*loading}
                        on_submit={on_analyze}
                    />
                    <VideoPanel
                        url={(*video_url).clone()}
                        visible={*video_submitted}
                    />
                </div>
                <div class="mt-8">
                    <AnalysisResults
                        analysis={(*analysis).clone()}
                        error={(*error_message).clone()}
                    />
                </div>
            </div>
        </div>
    }
}

fn prepend_history(history: &[String], prompt: &str) -> Vec<String> {
    let mut updated = Vec::with_capacity(history.len() + 1);
    updated.push(prompt.to_string());
    updated.extend(history.iter().cloned());
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_newest_first() {
        let history = prepend_history(&[], "first prompt");
        let history = prepend_history(&history, "second prompt");

        assert_eq!(history, vec!["second prompt", "first prompt"]);
    }

    #[test]
    fn each_submission_adds_exactly_one_entry() {
        let mut history = Vec::new();
        for i in 0..5 {
            history = prepend_history(&history, &format!("prompt {i}"));
        }

        assert_eq!(history.len(), 5);
    }

    #[test]
    fn repeated_prompts_are_not_deduplicated() {
        let history = prepend_history(&[], "same prompt");
        let history = prepend_history(&history, "same prompt");

        assert_eq!(history, vec!["same prompt", "same prompt"]);
    }
}
