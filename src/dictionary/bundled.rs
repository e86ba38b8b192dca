//! Dictionaries compiled into the binary

const BUNDLED: &[(&str, &str)] = &[
    ("data/dictionary.txt", include_str!("../../data/dictionary.txt")),
];

/// Find a bundled dictionary by name
pub fn lookup(name: &str) -> Option<(&'static str, &'static str)> {
    let name = name.trim_start_matches("./");
    BUNDLED.iter().copied().find(|(bundled, _)| *bundled == name)
}

/// Names of all bundled dictionaries
pub fn names() -> impl Iterator<Item = &'static str> {
    BUNDLED.iter().map(|(name, _)| *name)
}
