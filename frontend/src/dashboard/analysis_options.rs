use js_sys::Reflect;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::Event;
use yew::{function_component, html, Callback, Html, Properties};

/// Processing mode forwarded to the analysis service. The semantics of each
/// mode are owned entirely by that service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnalysisType {
    General,
    ExitSpeed,
    HitSpeed,
    HandStrength,
}

impl AnalysisType {
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisType::General => "General Analysis",
            AnalysisType::ExitSpeed => "Exit Speed",
            AnalysisType::HitSpeed => "Hit Speed",
            AnalysisType::HandStrength => "Hand Strength",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            AnalysisType::General,
            AnalysisType::ExitSpeed,
            AnalysisType::HitSpeed,
            AnalysisType::HandStrength,
        ]
    }
}

// Keys used on the wire and in <option value="..."> so we can reliably map
// back and forth.
pub fn analysis_type_key(at: &AnalysisType) -> &'static str {
    match at {
        AnalysisType::General => "general",
        AnalysisType::ExitSpeed => "exit-speed",
        AnalysisType::HitSpeed => "hit-speed",
        AnalysisType::HandStrength => "hand-strength",
    }
}

pub fn analysis_type_from_key(key: &str) -> Option<AnalysisType> {
    match key {
        "general" => Some(AnalysisType::General),
        "exit-speed" => Some(AnalysisType::ExitSpeed),
        "hit-speed" => Some(AnalysisType::HitSpeed),
        "hand-strength" => Some(AnalysisType::HandStrength),
        _ => None,
    }
}

// Helper to read "value" from any event target without HtmlSelectElement.
fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

#[derive(Properties, PartialEq)]
pub struct AnalysisTypeSelectProps {
    pub value: AnalysisType,
    pub disabled: bool,
    pub on_change: Callback<AnalysisType>,
}

#[function_component(AnalysisTypeSelect)]
pub fn analysis_type_select(props: &AnalysisTypeSelectProps) -> Html {
    let on_change_cb = props.on_change.clone();
    let on_change = Callback::from(move |e: Event| {
        if let Some(value) = event_value(&e) {
            if let Some(at) = analysis_type_from_key(&value) {
                on_change_cb.emit(at);
            }
        }
    });

    let current_key = analysis_type_key(&props.value).to_string();

    html! {
        <select
            value={current_key}
            onchange={on_change}
            disabled={props.disabled}
            class="w-full p-3 border border-gray-300 rounded mb-4 focus:outline-none focus:ring-2 focus:ring-blue-500"
        >
            {
                for AnalysisType::all_variants().into_iter().map(|at| {
                    let key = analysis_type_key(&at).to_string();
                    html! {
                        <option value={key} selected={at == props.value}>
                            { at.display_name() }
                        </option>
                    }
                })
            }
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_round_trips_through_its_key() {
        for at in AnalysisType::all_variants() {
            assert_eq!(analysis_type_from_key(analysis_type_key(&at)), Some(at));
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert_eq!(analysis_type_from_key("spin-rate"), None);
        assert_eq!(analysis_type_from_key(""), None);
    }
}
