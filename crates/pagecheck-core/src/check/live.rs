//! Checks that fetch the page: reachability and required HTML tags.

use super::offline::check_placeholder;
use super::CheckError;
use crate::fetch::{fetch_page_async, FetchSettings, PageResponse};
use crate::target::TargetUrl;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

const HTTP_OK: u32 = 200;

/// Structural tags every deployed page must open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredTag {
    Title,
    Body,
    Head,
}

// Opening tag followed by whitespace or `>`, any case.
static TITLE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<title[\s>]").expect("title regex"));
static BODY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<body[\s>]").expect("body regex"));
static HEAD_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<head[\s>]").expect("head regex"));

impl RequiredTag {
    pub const ALL: [RequiredTag; 3] = [RequiredTag::Title, RequiredTag::Body, RequiredTag::Head];

    pub fn name(self) -> &'static str {
        match self {
            RequiredTag::Title => "title",
            RequiredTag::Body => "body",
            RequiredTag::Head => "head",
        }
    }

    /// True if `html` contains an opening tag for `self`.
    pub fn is_present(self, html: &str) -> bool {
        let re = match self {
            RequiredTag::Title => &TITLE_TAG,
            RequiredTag::Body => &BODY_TAG,
            RequiredTag::Head => &HEAD_TAG,
        };
        re.is_match(html)
    }
}

impl fmt::Display for RequiredTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every required tag missing from `html`, in title, body, head order.
pub fn missing_tags(html: &str) -> Vec<RequiredTag> {
    RequiredTag::ALL
        .into_iter()
        .filter(|tag| !tag.is_present(html))
        .collect()
}

/// One GET; passes only on HTTP 200.
pub async fn check_reachability(
    target: &TargetUrl,
    settings: &FetchSettings,
) -> Result<(), CheckError> {
    let response = fetch(target, settings).await?;
    if response.status != HTTP_OK {
        return Err(CheckError::UnexpectedStatus {
            url: target.to_string(),
            status: response.status,
        });
    }
    Ok(())
}

/// One GET of its own; passes if the body opens `<title>`, `<body>` and `<head>`.
pub async fn check_content(
    target: &TargetUrl,
    settings: &FetchSettings,
) -> Result<(), CheckError> {
    let response = fetch(target, settings).await?;
    if response.status != HTTP_OK {
        return Err(CheckError::ContentUnavailable {
            url: target.to_string(),
            status: response.status,
        });
    }

    let missing = missing_tags(&response.body);
    if !missing.is_empty() {
        return Err(CheckError::MissingTags {
            url: target.to_string(),
            tags: missing,
        });
    }
    Ok(())
}

/// Placeholder short-circuit, then a single bounded GET.
async fn fetch(target: &TargetUrl, settings: &FetchSettings) -> Result<PageResponse, CheckError> {
    check_placeholder(target)?;
    fetch_page_async(target.as_str(), settings)
        .await
        .map_err(|e| CheckError::from_fetch(target.as_str(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<html><head><title>T</title></head><body>B</body></html>";

    #[test]
    fn complete_page_has_all_tags() {
        assert!(missing_tags(PAGE).is_empty());
    }

    #[test]
    fn tags_match_case_insensitively_with_attributes() {
        let html = "<HTML><HEAD lang=\"en\"><Title>x</Title></HEAD>\n<BODY\nclass=\"a\"></BODY>";
        assert!(missing_tags(html).is_empty());
    }

    #[test]
    fn prefixes_of_other_tags_do_not_count() {
        // <header>, <titled>, <bodyguard> are not the required tags
        let html = "<header></header><titled></titled><bodyguard>";
        assert_eq!(missing_tags(html), RequiredTag::ALL.to_vec());
    }

    #[test]
    fn closing_tags_alone_do_not_count() {
        assert_eq!(
            missing_tags("</title></body></head>"),
            RequiredTag::ALL.to_vec()
        );
    }

    #[test]
    fn each_missing_tag_reported() {
        let html = "<html><head><title>T</title></head></html>";
        assert_eq!(missing_tags(html), vec![RequiredTag::Body]);
        assert_eq!(
            missing_tags("<body></body>"),
            vec![RequiredTag::Title, RequiredTag::Head]
        );
    }

    #[tokio::test]
    async fn placeholder_short_circuits_both_live_checks() {
        let t = TargetUrl::from("https://example.com/{placeholder}/");
        let settings = FetchSettings::default();
        let reach = check_reachability(&t, &settings).await.unwrap_err();
        assert!(matches!(reach, CheckError::Placeholder { .. }));
        let content = check_content(&t, &settings).await.unwrap_err();
        assert!(matches!(content, CheckError::Placeholder { .. }));
        assert!(content.to_string().contains("https://example.com/{placeholder}/"));
    }

    #[tokio::test]
    async fn relative_url_is_invalid_format() {
        let t = TargetUrl::from("octocat.github.io/site/");
        let err = check_reachability(&t, &FetchSettings::default())
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid URL format: octocat.github.io/site/. Please provide a valid absolute URL."
        );
        let err = check_content(&t, &FetchSettings::default()).await.unwrap_err();
        assert!(matches!(err, CheckError::InvalidUrl { .. }));
    }
}
