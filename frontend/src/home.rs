use crate::home::components::{ScrollSpyNav, TeamSection};
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod content;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="min-h-screen bg-gray-100">
            <section class="bg-blue-900 text-white py-24">
                <div class="container mx-auto px-4 text-center">
                    <h1 class="text-4xl font-bold mb-4">
                        {"Statcast Metrics from Archival Baseball Video"}
                    </h1>
                    <p class="text-lg text-blue-100 mb-8">
                        {"Submit a game clip and a question; the analysis service returns a \
                          summary, annotated frames, and timestamps."}
                    </p>
                    <Link<Route> to={Route::Dashboard} classes="bg-blue-600 text-white px-6 py-3 rounded-lg hover:bg-blue-700">
                        {"Open the Dashboard"}
                    </Link<Route>>
                </div>
            </section>

            <section class="bg-white py-16">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold mb-8 text-center text-blue-900">
                        {"About Baseball"}
                    </h2>
                    <div class="max-w-3xl mx-auto">
                        <p class="text-lg text-gray-700 mb-4">
                            {"Baseball is a bat-and-ball game played between two teams of nine \
                              players each, who take turns batting and fielding. The game proceeds \
                              when a player on the fielding team, called the pitcher, throws a ball \
                              which a player on the batting team tries to hit with a bat."}
                        </p>
                        <p class="text-lg text-gray-700 mb-4">
                            {"The objective of the offensive team (batting team) is to hit the ball \
                              into the field of play, allowing its players to run the bases, having \
                              them advance counter-clockwise around four bases to score what are \
                              called \"runs\". The objective of the defensive team (fielding team) \
                              is to prevent batters from becoming runners, and to prevent runners' \
                              advance around the bases."}
                        </p>
                        <p class="text-lg text-gray-700">
                            {"A run is scored when a runner legally advances around the bases in \
                              order and touches home plate. The team that scores the most runs by \
                              the end of the game is the winner."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="bg-white py-16">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold mb-8 text-center text-blue-900">
                        {"Application Workflow"}
                    </h2>
                    <ScrollSpyNav />
                </div>
            </section>

            <TeamSection />
        </div>
    }
}

#[function_component(TeamPage)]
pub fn team_page() -> Html {
    html! {
        <div class="min-h-screen bg-gray-100 pt-8">
            <TeamSection />
        </div>
    }
}
