use std::fmt::Display;

/// A type annotation. Types are plain names; no structure is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type(pub String);

impl Type {
    pub fn new(name: impl Into<String>) -> Self {
        Type(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
