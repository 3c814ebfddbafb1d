// src/data.rs

use crate::model::QuestionSet;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("could not read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[cfg(not(target_arch = "wasm32"))]
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid JSON question bank: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML question bank: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[cfg(target_arch = "wasm32")]
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("question loader stopped before sending a result")]
    WorkerGone,
}

/// Where the question bank lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    #[cfg(not(target_arch = "wasm32"))]
    Path(PathBuf),
    Url(String),
}

impl QuestionSource {
    /// `http(s)://` is a URL; anything else is a local path.
    /// In the browser everything is fetched, relative to the page.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            return QuestionSource::Url(raw.to_string());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            QuestionSource::Path(PathBuf::from(raw))
        }
        #[cfg(target_arch = "wasm32")]
        {
            QuestionSource::Url(raw.to_string())
        }
    }

    pub fn format(&self) -> DataFormat {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            QuestionSource::Path(path) => DataFormat::from_name(&path.to_string_lossy()),
            QuestionSource::Url(url) => DataFormat::from_name(url),
        }
    }
}

impl std::fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            QuestionSource::Path(path) => write!(f, "{}", path.display()),
            QuestionSource::Url(url) => f.write_str(url),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Picks the format from the extension, ignoring any query string.
    /// Unknown extensions are read as JSON.
    pub fn from_name(name: &str) -> Self {
        let name = name.split(['?', '#']).next().unwrap_or(name);
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            DataFormat::Yaml
        } else {
            DataFormat::Json
        }
    }
}

pub fn parse_questions(text: &str, format: DataFormat) -> Result<QuestionSet, LoadError> {
    let questions = match format {
        DataFormat::Json => serde_json::from_str(text)?,
        DataFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(questions)
}

/// Records whose answer is missing from their options. They still load;
/// they simply can never be marked correct.
pub fn integrity_warnings(questions: &QuestionSet) -> Vec<String> {
    questions
        .iter()
        .enumerate()
        .filter(|(_, q)| !q.answer_in_options())
        .map(|(i, q)| {
            format!(
                "question {} ({:?}): answer {:?} is not among its options",
                i + 1,
                q.question,
                q.answer
            )
        })
        .collect()
}

fn log_integrity(questions: &QuestionSet) {
    for warning in integrity_warnings(questions) {
        log::warn!("{warning}");
    }
}

/// Blocking load: reads the file or issues a GET.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_questions(source: &QuestionSource) -> Result<QuestionSet, LoadError> {
    let text = match source {
        QuestionSource::Path(path) => {
            std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?
        }
        QuestionSource::Url(url) => {
            let response = reqwest::blocking::Client::new()
                .get(url)
                .header(reqwest::header::ACCEPT, "application/json, application/yaml")
                .send()?;
            if !response.status().is_success() {
                return Err(LoadError::Status(response.status().as_u16()));
            }
            response.text()?
        }
    };

    let questions = parse_questions(&text, source.format())?;
    log_integrity(&questions);
    Ok(questions)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(url: &str) -> Result<QuestionSet, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let window = web_sys::window().ok_or_else(|| LoadError::Fetch("no window".into()))?;
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| LoadError::Fetch(format!("could not build request: {err:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| LoadError::Fetch(format!("{err:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| LoadError::Fetch("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let promise = response
        .text()
        .map_err(|err| LoadError::Fetch(format!("{err:?}")))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|err| LoadError::Fetch(format!("{err:?}")))?
        .as_string()
        .ok_or_else(|| LoadError::Fetch("response body is not text".into()))?;

    let questions = parse_questions(&text, DataFormat::from_name(url))?;
    log_integrity(&questions);
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionRecord;

    const BUNDLED: &str = include_str!("../Lipinicott-Questions.json");

    #[test]
    fn bundled_bank_parses_and_is_consistent() {
        let set = parse_questions(BUNDLED, DataFormat::Json).unwrap();
        assert!(!set.is_empty());
        assert!(integrity_warnings(&set).is_empty());
    }

    #[test]
    fn empty_array_is_a_valid_bank() {
        let set = parse_questions("[]", DataFormat::Json).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn yaml_bank_has_the_same_shape() {
        let yaml = "
- question: Q1
  options: [A, B]
  answer: A
  explanation: E1
";
        let set = parse_questions(yaml, DataFormat::Yaml).unwrap();
        assert_eq!(set.as_slice(), &[QuestionRecord::new("Q1", ["A", "B"], "A", "E1")]);
    }

    #[test]
    fn malformed_input_reports_the_format() {
        let err = parse_questions(r#"[{"question":"Q1"}]"#, DataFormat::Json).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));

        let err = parse_questions("- question: [", DataFormat::Yaml).unwrap_err();
        assert!(matches!(err, LoadError::Yaml(_)));
    }

    #[test]
    fn integrity_warnings_point_at_broken_records() {
        let set = QuestionSet::new(vec![
            QuestionRecord::new("ok", ["A", "B"], "A", ""),
            QuestionRecord::new("broken", ["A", "B"], "C", ""),
        ]);
        let warnings = integrity_warnings(&set);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("question 2"));
        assert!(warnings[0].contains("broken"));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(DataFormat::from_name("bank.yaml"), DataFormat::Yaml);
        assert_eq!(DataFormat::from_name("bank.YML"), DataFormat::Yaml);
        assert_eq!(DataFormat::from_name("bank.json"), DataFormat::Json);
        assert_eq!(DataFormat::from_name("/bank.yml?v=3"), DataFormat::Yaml);
        assert_eq!(DataFormat::from_name("bank"), DataFormat::Json);
    }

    #[test]
    fn source_classifies_urls_and_paths() {
        assert_eq!(
            QuestionSource::parse(" https://example.org/q.json "),
            QuestionSource::Url("https://example.org/q.json".into())
        );
        assert_eq!(
            QuestionSource::parse("data/q.yaml"),
            QuestionSource::Path(PathBuf::from("data/q.yaml"))
        );
        assert_eq!(QuestionSource::parse("data/q.yaml").format(), DataFormat::Yaml);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = QuestionSource::parse("definitely/not/here.json");
        let err = load_questions(&source).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.json"));
    }
}
