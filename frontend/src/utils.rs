// Formats the duration reported by the analysis service as m:ss.
pub fn format_duration_seconds(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u32;
    let minutes = total / 60;
    let remaining_seconds = total % 60;
    format!("{}:{:02}", minutes, remaining_seconds)
}

/// Joins a frame identifier onto the static path prefix it is served from.
pub fn frame_src(base_path: &str, frame: &str) -> String {
    format!(
        "{}/{}",
        base_path.trim_end_matches('/'),
        frame.trim_start_matches('/')
    )
}

// Prompts can be arbitrarily long; the sidebar only has room for a preview.
pub fn truncate_prompt(prompt: &str, max_chars: usize) -> String {
    match prompt.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}…", &prompt[..byte_index]),
        None => prompt.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_formats_as_minutes_and_seconds() {
        assert_eq!(format_duration_seconds(0.0), "0:00");
        assert_eq!(format_duration_seconds(12.4), "0:12");
        assert_eq!(format_duration_seconds(83.6), "1:24");
        assert_eq!(format_duration_seconds(3599.0), "59:59");
    }

    #[test]
    fn duration_never_underflows_on_bad_input() {
        assert_eq!(format_duration_seconds(-5.0), "0:00");
    }

    #[test]
    fn frame_src_joins_without_doubled_separators() {
        assert_eq!(frame_src("/frames", "f1.jpg"), "/frames/f1.jpg");
        assert_eq!(frame_src("/frames/", "f1.jpg"), "/frames/f1.jpg");
        assert_eq!(frame_src("/frames", "/f1.jpg"), "/frames/f1.jpg");
    }

    #[test]
    fn short_prompts_are_untouched() {
        assert_eq!(truncate_prompt("exit speed?", 40), "exit speed?");
    }

    #[test]
    fn long_prompts_truncate_with_an_ellipsis() {
        let prompt = "measure the exit velocity of the third pitch in this clip";
        assert_eq!(
            truncate_prompt(prompt, 20),
            "measure the exit vel…"
        );
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        assert_eq!(truncate_prompt("⚾⚾⚾⚾", 2), "⚾⚾…");
    }
}
