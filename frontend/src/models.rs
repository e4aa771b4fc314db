use serde::{Deserialize, Serialize};

/// Payload for `POST /api/analyze`. The service expects camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub prompt: String,
    pub video_url: String,
    pub analysis_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub analysis: Analysis,
}

/// What the analysis service returns for a single video. `frames` and
/// `timestamps` are parallel arrays; some analysis modes return neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub result: String,
    #[serde(default)]
    pub frames: Vec<String>,
    #[serde(default)]
    pub timestamps: Vec<String>,
    #[serde(default)]
    pub duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_camel_case_wire_keys() {
        let request = AnalysisRequest {
            prompt: "How fast does the ball leave the bat?".to_string(),
            video_url: "https://example.com/game.mp4".to_string(),
            analysis_type: "exit-speed".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["prompt"], "How fast does the ball leave the bat?");
        assert_eq!(json["videoUrl"], "https://example.com/game.mp4");
        assert_eq!(json["analysisType"], "exit-speed");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn response_parses_the_documented_shape() {
        let body = r#"{
            "analysis": {
                "result": "Estimated exit velocity: 98 mph",
                "frames": ["f1.jpg", "f2.jpg"],
                "timestamps": ["00:01", "00:02"],
                "duration": 12.5
            }
        }"#;

        let response: AnalysisResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.analysis.result, "Estimated exit velocity: 98 mph");
        assert_eq!(response.analysis.frames, vec!["f1.jpg", "f2.jpg"]);
        assert_eq!(response.analysis.timestamps, vec!["00:01", "00:02"]);
        assert_eq!(response.analysis.duration, 12.5);
    }

    #[test]
    fn response_without_frames_parses_as_empty() {
        let body = r#"{"analysis": {"result": "No notable events", "duration": 3.0}}"#;

        let response: AnalysisResponse = serde_json::from_str(body).unwrap();
        assert!(response.analysis.frames.is_empty());
        assert!(response.analysis.timestamps.is_empty());
    }

    #[test]
    fn response_tolerates_mismatched_parallel_arrays() {
        let body = r#"{
            "analysis": {
                "result": "ok",
                "frames": ["f1.jpg", "f2.jpg", "f3.jpg"],
                "timestamps": ["00:01"],
                "duration": 1.0
            }
        }"#;

        let response: AnalysisResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.analysis.frames.len(), 3);
        assert_eq!(response.analysis.timestamps.len(), 1);
    }
}
