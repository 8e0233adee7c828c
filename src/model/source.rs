use log::debug;
use regex::Regex;
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Absolute http(s) URL with a non-empty host.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)https?://[^\s/?#]+(?:[/?#]\S*)?$").expect("URL pattern is valid")
});

/// Where a diagram description is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    LocalFile(PathBuf),
    RemoteUrl(String),
}

pub fn is_url(input: &str) -> bool {
    URL_PATTERN.is_match(input)
}

impl InputSource {
    pub fn classify(input: &str) -> Self {
        if is_url(input) {
            debug!("Input '{}' classified as remote URL", input);
            InputSource::RemoteUrl(input.to_string())
        } else {
            debug!("Input '{}' classified as local file", input);
            InputSource::LocalFile(PathBuf::from(input))
        }
    }

    /// Remote URLs are not checked here; the renderer reports fetch failures.
    pub fn exists(&self) -> bool {
        match self {
            InputSource::LocalFile(path) => path.exists(),
            InputSource::RemoteUrl(_) => true,
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::LocalFile(path) => write!(f, "{}", path.display()),
            InputSource::RemoteUrl(url) => f.write_str(url),
        }
    }
}
