/// Unique string identity for graph payloads.
///
/// Two vertices in the same graph must never share an id; every
/// graph operation addresses vertices through it.
pub trait Identifiable {
    fn id(&self) -> &str;
}

impl Identifiable for String {
    fn id(&self) -> &str {
        self
    }
}

impl Identifiable for &str {
    fn id(&self) -> &str {
        self
    }
}
