use crate::env_variable_utils::get_app_name;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();

    let nav_items = [("DASHBOARD", Route::Dashboard), ("TEAM", Route::Team)];

    html! {
        <header class="bg-blue-950 text-white shadow sticky top-0 z-50">
            <div class="container mx-auto flex items-center justify-between h-16 px-4">
                <Link<Route> to={Route::Home} classes="font-bold text-white">
                    { get_app_name() }
                </Link<Route>>
                <nav>
                    <ul class="flex space-x-1">
                        { for nav_items.iter().map(|(label, target)| {
                            let is_active = route.as_ref() == Some(target);
                            html! {
                                <li>
                                    <Link<Route>
                                        to={target.clone()}
                                        classes={if is_active {
                                            "px-3 py-2 text-base font-semibold rounded-md bg-blue-600 text-white"
                                        } else {
                                            "px-3 py-2 text-base font-semibold rounded-md text-gray-300 hover:text-white"
                                        }}
                                    >
                                        { *label }
                                    </Link<Route>>
                                </li>
                            }
                        })}
                    </ul>
                </nav>
            </div>
        </header>
    }
}
