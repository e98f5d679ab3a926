use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static BOILERPLATE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script, style, nav, footer, header")
        .expect("boilerplate selector is a valid selector list")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    H1,
    H2,
    H3,
    P,
}

impl TagKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "h1" => Some(TagKind::H1),
            "h2" => Some(TagKind::H2),
            "h3" => Some(TagKind::H3),
            "p" => Some(TagKind::P),
            _ => None,
        }
    }
}

/// One heading or paragraph with its raw (not yet normalized) text.
#[derive(Debug, Clone)]
pub struct Tag {
    pub kind: TagKind,
    pub text: String,
}

impl Tag {
    pub fn new(kind: TagKind, text: impl Into<String>) -> Self {
        Tag { kind, text: text.into() }
    }
}

/// Parse markup and detach boilerplate subtrees (script, style, nav,
/// footer, header) so their text never reaches the extractor.
pub fn preprocess(html: &str) -> Html {
    let mut document = Html::parse_document(html);

    let doomed: Vec<_> = document
        .select(&BOILERPLATE_SELECTOR)
        .map(|el| el.id())
        .collect();
    for id in doomed {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }

    document
}

/// Flatten the document into its h1/h2/h3/p tags in document order.
/// Nesting is deliberately discarded; only order and kind matter downstream.
///
/// Walks descendants of the root rather than using `Html::select`: select
/// iterates the whole node arena, where detached boilerplate nodes still
/// live, so it would yield them again. Only tree-reachable nodes count.
pub fn collect_tags(document: &Html) -> Vec<Tag> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter_map(|el| {
            let kind = TagKind::from_name(el.value().name())?;
            Some(Tag::new(kind, el.text().collect::<String>()))
        })
        .collect()
}
