use crate::dashboard::DashboardPage;
use crate::home::{HomePage, TeamPage};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/team")]
    Team,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Team => html! { <TeamPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back home"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

// Reflects the submitted video URL into the address bar so a dashboard
// session can be shared mid-flight.
pub fn update_video_param(video_url: &str) {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let url = web_sys::Url::new(&location.href().unwrap()).unwrap();
        let search_params = url.search_params();

        search_params.set("video", video_url);

        // Update the URL without reloading the page
        if let Ok(history) = window.history() {
            let _ =
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url.href()));
        }
    }
}

// Counterpart of update_video_param, read once when the dashboard mounts.
pub fn get_video_param() -> Option<String> {
    let window = web_sys::window()?;
    let href = window.location().href().ok()?;
    let url = web_sys::Url::new(&href).ok()?;
    url.search_params().get("video")
}
