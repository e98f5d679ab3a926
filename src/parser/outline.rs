use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::dom::{Tag, TagKind};
use super::text::{is_module_heading, normalize};

/// Insertion-ordered submodule map: heading text → accumulated description.
/// A plain Vec of pairs keeps the "last-inserted key" observable, which a
/// hash map would lose; paragraph text always lands on the newest entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmoduleMap {
    entries: Vec<(String, String)>,
}

impl SubmoduleMap {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Open an accumulator slot for `key`. A repeated key restarts its
    /// accumulated text but keeps its insertion position, so the
    /// last-inserted entry is unchanged.
    fn open(&mut self, key: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, value)) => value.clear(),
            None => self.entries.push((key.to_string(), String::new())),
        }
    }

    /// Append `" " + text` to the last-inserted entry.
    fn append_to_last(&mut self, text: &str) {
        if let Some((_, value)) = self.entries.last_mut() {
            value.push(' ');
            value.push_str(text);
        }
    }
}

impl Serialize for SubmoduleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SubmoduleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = SubmoduleMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of submodule headings to descriptions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(SubmoduleMap { entries })
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// One extracted documentation section, anchored by a qualifying h1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub module: String,
    pub submodules: SubmoduleMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Cursor state for the linear scan: the append-only result sequence, a
/// dedup set of lowercased module headings, and the index of the module
/// currently absorbing submodules and paragraphs.
#[derive(Default)]
struct Scan {
    modules: Vec<Module>,
    seen: HashSet<String>,
    current: Option<usize>,
}

impl Scan {
    fn feed(&mut self, tag: &Tag) {
        let text = normalize(&tag.text);
        if text.is_empty() {
            return;
        }

        match tag.kind {
            TagKind::H1 if is_module_heading(&text) => {
                // Repeated module headings are dropped, not merged: the
                // cursor stays on whatever module was already open.
                if self.seen.insert(text.to_lowercase()) {
                    self.modules.push(Module {
                        module: text,
                        submodules: SubmoduleMap::default(),
                        description: None,
                    });
                    self.current = Some(self.modules.len() - 1);
                }
            }
            TagKind::H2 | TagKind::H3 => {
                if let Some(idx) = self.current {
                    self.modules[idx].submodules.open(&text);
                }
            }
            TagKind::P => {
                if let Some(idx) = self.current {
                    let module = &mut self.modules[idx];
                    if module.submodules.is_empty() {
                        // Legacy accumulation: every appended paragraph
                        // carries a leading space, the first included.
                        let description = module.description.get_or_insert_with(String::new);
                        description.push(' ');
                        description.push_str(&text);
                    } else {
                        module.submodules.append_to_last(&text);
                    }
                }
            }
            // h1 too short to anchor a module: no state change at all.
            TagKind::H1 => {}
        }
    }
}

/// Linear scan over the flat tag sequence, rebuilding the two-level
/// module → submodule hierarchy from tag order alone.
pub fn scan_tags(tags: &[Tag]) -> Vec<Module> {
    let mut scan = Scan::default();
    for tag in tags {
        scan.feed(tag);
    }
    scan.modules
}
