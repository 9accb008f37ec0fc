use reqwest::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelIdentity {
    org_and_name: Option<(String, String)>,
    pub full_name: String,
    pub source_locator: String,
}

impl ModelIdentity {
    pub fn organization(&self) -> Option<&str> {
        self.org_and_name.as_ref().map(|(org, _)| org.as_str())
    }

    pub fn name(&self) -> Option<&str> {
        self.org_and_name.as_ref().map(|(_, name)| name.as_str())
    }

    fn fallback(locator: &str) -> Self {
        Self {
            org_and_name: None,
            full_name: locator.to_string(),
            source_locator: locator.to_string(),
        }
    }
}

/// Never fails: anything that does not yield two path segments falls back to
/// the raw locator as the full name.
pub fn parse(locator: &str) -> ModelIdentity {
    match org_and_name(locator) {
        Some((org, name)) => ModelIdentity {
            full_name: format!("{org}/{name}"),
            org_and_name: Some((org, name)),
            source_locator: locator.to_string(),
        },
        None => ModelIdentity::fallback(locator),
    }
}

fn org_and_name(locator: &str) -> Option<(String, String)> {
    let url = Url::parse(locator).ok()?;
    let mut segments = url
        .path()
        .trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty());
    let org = segments.next()?;
    let name = segments.next()?;
    Some((org.to_string(), name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_org_and_name() {
        let identity = parse("https://huggingface.co/google/gemma-3-270m");
        assert_eq!(identity.organization(), Some("google"));
        assert_eq!(identity.name(), Some("gemma-3-270m"));
        assert_eq!(identity.full_name, "google/gemma-3-270m");
        assert_eq!(identity.source_locator, "https://huggingface.co/google/gemma-3-270m");
    }

    #[test]
    fn ignores_trailing_segments() {
        let identity = parse("https://host/org/name/tree/main");
        assert_eq!(identity.organization(), Some("org"));
        assert_eq!(identity.name(), Some("name"));
        assert_eq!(identity.full_name, "org/name");
    }

    #[test]
    fn ignores_query_and_fragment() {
        let identity = parse("https://huggingface.co/org/name/?revision=main#card");
        assert_eq!(identity.full_name, "org/name");
    }

    #[test]
    fn falls_back_on_short_paths() {
        for locator in [
            "https://example.com/invalid",
            "https://huggingface.co",
            "https://huggingface.co/",
        ] {
            let identity = parse(locator);
            assert_eq!(identity.full_name, locator);
            assert_eq!(identity.organization(), None);
            assert_eq!(identity.name(), None);
        }
    }

    #[test]
    fn falls_back_on_unparseable_locators() {
        for locator in ["huggingface.co/org/name", "not a url", ""] {
            let identity = parse(locator);
            assert_eq!(identity.full_name, locator);
            assert!(identity.organization().is_none() && identity.name().is_none());
        }
    }
}
