use crate::home::content::{ProjectSection, TeamMember, PROJECT_SECTIONS, TEAM_MEMBERS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

// Vertical offset from the viewport top used to decide which section is
// being read.
const SCROLL_REFERENCE_Y: f64 = 100.0;

const SECTION_ID_PREFIX: &str = "project-";

/// Picks the section whose bounding box spans the reference point, given
/// `(id, top, bottom)` per section in document order. When several span it,
/// the last one wins; when none does, the caller keeps whatever was active.
fn section_spanning_reference(spans: &[(String, f64, f64)]) -> Option<&str> {
    let mut current = None;
    for (id, top, bottom) in spans {
        if *top <= SCROLL_REFERENCE_Y && *bottom >= SCROLL_REFERENCE_Y {
            current = Some(id.as_str());
        }
    }
    current
}

fn scan_active_section() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let nodes = document
        .query_selector_all(&format!("section[id^='{SECTION_ID_PREFIX}']"))
        .ok()?;

    let mut spans = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let rect = element.get_bounding_client_rect();
        spans.push((element.id(), rect.top(), rect.bottom()));
    }

    section_spanning_reference(&spans).map(|id| id.trim_start_matches(SECTION_ID_PREFIX).to_string())
}

fn scroll_to_section(section_id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(&format!("{SECTION_ID_PREFIX}{section_id}")) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(ScrollSpyNav)]
pub fn scroll_spy_nav() -> Html {
    let active_section = use_state_eq(|| {
        PROJECT_SECTIONS
            .first()
            .map(|section| section.id.to_string())
            .unwrap_or_default()
    });

    {
        let active_section = active_section.clone();
        use_effect_with((), move |_| {
            // No debounce; the scan is cheap at this section count.
            let listener = Closure::<dyn FnMut()>::new(move || {
                if let Some(id) = scan_active_section() {
                    active_section.set(id);
                }
            });

            let window = web_sys::window().expect("should have a window in this context");
            window
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                .expect("failed to attach scroll listener");

            move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    html! {
        <div class="flex flex-col lg:flex-row">
            <nav class="lg:w-64 bg-white border-r border-gray-200 p-4 lg:sticky lg:top-16 overflow-y-auto">
                <div class="space-y-2">
                    { for PROJECT_SECTIONS.iter().map(|section| {
                        let is_active = *active_section == section.id;
                        let section_id = section.id;
                        html! {
                            <button
                                onclick={move |_| scroll_to_section(section_id)}
                                class={if is_active {
                                    "w-full text-left px-4 py-2 rounded-lg bg-blue-600 text-white"
                                } else {
                                    "w-full text-left px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-100"
                                }}
                            >
                                { section.title }
                            </button>
                        }
                    })}
                </div>
            </nav>
            <main class="flex-1 p-4 lg:p-8">
                { for PROJECT_SECTIONS.iter().map(section_view) }
            </main>
        </div>
    }
}

fn section_view(section: &ProjectSection) -> Html {
    html! {
        <section id={format!("{SECTION_ID_PREFIX}{}", section.id)} class="mb-16">
            <h2 class="text-2xl font-bold mb-6">{ section.title }</h2>
            <div class="prose max-w-none">
                { for section.content.split('\n').map(|paragraph| html! {
                    <p class="whitespace-pre-wrap mb-4">{ paragraph }</p>
                })}
            </div>
        </section>
    }
}

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    html! {
        <section class="py-16 bg-gray-50">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center text-gray-900 mb-12">{"Our Team"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    { for TEAM_MEMBERS.iter().map(member_card) }
                </div>
            </div>
        </section>
    }
}

fn member_card(member: &TeamMember) -> Html {
    html! {
        <div class="bg-white rounded-xl shadow-md overflow-hidden hover:shadow-lg">
            <div class="p-6">
                <h3 class="text-xl font-semibold text-gray-900 mb-1">{ member.name }</h3>
                <p class="text-blue-600 font-medium mb-3">{ member.role }</p>
                <p class="text-gray-600 mb-4">{ member.bio }</p>
                <div class="flex space-x-4 text-sm">
                    {
                        if let Some(github) = member.github {
                            html! {
                                <a href={github} target="_blank" class="text-blue-600 hover:underline">
                                    {"GitHub ↗"}
                                </a>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if let Some(linkedin) = member.linkedin {
                            html! {
                                <a href={linkedin} target="_blank" class="text-blue-600 hover:underline">
                                    {"LinkedIn ↗"}
                                </a>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if let Some(email) = member.email {
                            html! {
                                <a href={format!("mailto:{email}")} class="text-blue-600 hover:underline">
                                    {"Email"}
                                </a>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(id: &str, top: f64, bottom: f64) -> (String, f64, f64) {
        (id.to_string(), top, bottom)
    }

    #[test]
    fn the_section_spanning_the_reference_point_is_active() {
        let spans = vec![
            span("understanding", -400.0, 50.0),
            span("dataset", 50.0, 600.0),
            span("tech-stack", 600.0, 1200.0),
        ];

        assert_eq!(section_spanning_reference(&spans), Some("dataset"));
    }

    #[test]
    fn when_several_sections_span_it_the_last_wins() {
        let spans = vec![
            span("understanding", 0.0, 300.0),
            span("dataset", 90.0, 500.0),
        ];

        assert_eq!(section_spanning_reference(&spans), Some("dataset"));
    }

    #[test]
    fn no_spanning_section_means_no_change() {
        let spans = vec![
            span("understanding", 200.0, 500.0),
            span("dataset", 500.0, 900.0),
        ];

        assert_eq!(section_spanning_reference(&spans), None);
        assert_eq!(section_spanning_reference(&[]), None);
    }

    #[test]
    fn reference_point_boundaries_count_as_inside() {
        let exactly_at_top = vec![span("understanding", 100.0, 400.0)];
        assert_eq!(
            section_spanning_reference(&exactly_at_top),
            Some("understanding")
        );

        let exactly_at_bottom = vec![span("dataset", -200.0, 100.0)];
        assert_eq!(section_spanning_reference(&exactly_at_bottom), Some("dataset"));
    }
}
