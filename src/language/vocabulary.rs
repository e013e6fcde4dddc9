//! The fixed set of tags this validator recognizes, along with the structural
//! rank each one holds within a document.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpec {
    pub name: &'static str,
    pub priority: u8,
    pub empty: bool,
}

const fn spec(name: &'static str, priority: u8) -> TagSpec {
    TagSpec {
        name,
        priority,
        empty: false,
    }
}

const fn void(name: &'static str, priority: u8) -> TagSpec {
    TagSpec {
        name,
        priority,
        empty: true,
    }
}

/// The tag every document must begin with.
pub const ROOT: &str = "html";

pub const ROOT_PRIORITY: u8 = 1;
pub const HEAD_PRIORITY: u8 = 2;
pub const TITLE_PRIORITY: u8 = 3;
pub const BODY_PRIORITY: u8 = 4;

// Order matters: when several tags share a priority the first listed is the
// one named in "expected" messages.
pub static VOCABULARY: [TagSpec; 19] = [
    spec("html", ROOT_PRIORITY),
    spec("head", HEAD_PRIORITY),
    spec("title", TITLE_PRIORITY),
    spec("body", BODY_PRIORITY),
    spec("h1", 5),
    spec("h2", 5),
    spec("h3", 5),
    spec("p", 5),
    void("br", 5),
    void("hr", 5),
    void("img", 5),
    spec("ul", 5),
    spec("ol", 5),
    spec("li", 5),
    spec("table", 5),
    spec("tr", 7),
    spec("th", 5),
    spec("td", 8),
    spec("form", 8),
];

fn strip(name: &str) -> &str {
    name.strip_prefix('/')
        .unwrap_or(name)
}

/// Find the table entry for a canonical name. A leading closing marker is
/// ignored.
pub fn lookup(name: &str) -> Option<&'static TagSpec> {
    let name = strip(name);
    VOCABULARY
        .iter()
        .find(|spec| spec.name == name)
}

pub fn is_valid(name: &str) -> bool {
    lookup(name).is_some()
}

pub fn priority_of(name: &str) -> Option<u8> {
    lookup(name).map(|spec| spec.priority)
}

pub fn is_empty_element(name: &str) -> bool {
    match lookup(name) {
        Some(spec) => spec.empty,
        None => false,
    }
}

/// The first tag holding the given priority, if any does.
pub fn name_of_priority(priority: u8) -> Option<&'static str> {
    VOCABULARY
        .iter()
        .find(|spec| spec.priority == priority)
        .map(|spec| spec.name)
}
