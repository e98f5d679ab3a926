pub mod dom;
pub mod outline;
pub mod text;

pub use outline::Module;

/// Three-pass pipeline: html → preprocessed document → flat tags → outline.
pub fn extract_modules(html: &str) -> Vec<Module> {
    let document = dom::preprocess(html);
    let tags = dom::collect_tags(&document);
    outline::scan_tags(&tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn docs_page_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/docs_page.html").unwrap();
        let modules = extract_modules(&html);

        let names: Vec<_> = modules.iter().map(|m| m.module.as_str()).collect();
        assert_eq!(names, vec!["Getting Started Guide", "Configuration Reference"]);

        let guide = &modules[0];
        assert_eq!(
            guide.description.as_deref(),
            Some(" Everything you need to install and run the toolkit.")
        );
        assert_eq!(
            guide.submodules.get("Installation"),
            Some(" Download the release archive. Unpack it anywhere on your PATH.")
        );
        assert_eq!(guide.submodules.get("First Run"), Some(" Launch with the default profile."));

        let config = &modules[1];
        assert!(config.description.is_none());
        assert_eq!(
            config.submodules.get("Environment Variables"),
            Some(" All settings can be overridden from the environment.")
        );
    }

    #[test]
    fn fixture_boilerplate_never_leaks() {
        let html = std::fs::read_to_string("tests/fixtures/docs_page.html").unwrap();
        let modules = extract_modules(&html);
        let dump = serde_json::to_string(&modules).unwrap();
        assert!(!dump.contains("Sitewide Navigation"));
        assert!(!dump.contains("All rights reserved"));
        assert!(!dump.contains("trackPageView"));
    }

    #[test]
    fn page_without_content_extracts_nothing() {
        let modules = extract_modules("<html><body><div>plain divs only</div></body></html>");
        assert!(modules.is_empty());
    }
}
