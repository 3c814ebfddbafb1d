// src/config.rs

use crate::data::QuestionSource;

pub const QUESTIONS_ENV: &str = "PHARMAQUIZ_QUESTIONS";

#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_QUESTIONS: &str = "Lipinicott-Questions.json";
#[cfg(target_arch = "wasm32")]
pub const DEFAULT_QUESTIONS: &str = "/Lipinicott-Questions.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub source: QuestionSource,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            source: QuestionSource::parse(DEFAULT_QUESTIONS),
        }
    }
}

impl QuizConfig {
    /// First non-blank candidate wins; falls back to the bundled file name.
    pub fn from_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        candidates
            .into_iter()
            .flatten()
            .find_map(|c| normalize(&c))
            .map(|raw| Self {
                source: QuestionSource::parse(&raw),
            })
            .unwrap_or_default()
    }

    /// CLI argument, then `PHARMAQUIZ_QUESTIONS`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn resolve() -> Self {
        Self::from_candidates([std::env::args().nth(1), std::env::var(QUESTIONS_ENV).ok()])
    }

    /// Build-time env, `?questions=`, then `<meta name="pharmaquiz-questions">`.
    #[cfg(target_arch = "wasm32")]
    pub fn resolve() -> Self {
        Self::from_candidates([
            option_env!("PHARMAQUIZ_QUESTIONS").map(str::to_string),
            source_from_querystring(),
            source_from_meta(),
        ])
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn source_from_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "questions" {
            let decoded = js_sys::decode_uri_component(value).ok()?;
            return decoded.as_string();
        }
    }

    None
}

#[cfg(target_arch = "wasm32")]
fn source_from_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name='pharmaquiz-questions']")
        .ok()??;
    meta.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_bundled_file() {
        let config = QuizConfig::from_candidates([None, None]);
        assert_eq!(config, QuizConfig::default());
        assert_eq!(config.source.to_string(), DEFAULT_QUESTIONS);
    }

    #[test]
    fn blank_candidates_are_skipped() {
        let config = QuizConfig::from_candidates([
            Some("   ".to_string()),
            None,
            Some(" bank.yaml ".to_string()),
        ]);
        assert_eq!(config.source, QuestionSource::parse("bank.yaml"));
    }

    #[test]
    fn earlier_candidates_win() {
        let config = QuizConfig::from_candidates([
            Some("https://example.org/q.json".to_string()),
            Some("local.json".to_string()),
        ]);
        assert_eq!(
            config.source,
            QuestionSource::Url("https://example.org/q.json".to_string())
        );
    }
}
