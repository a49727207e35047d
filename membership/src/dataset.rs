use itertools::Itertools;
use rug::Integer;

/// Server-side set S, kept in insertion order without repeated elements.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Dataset {
    elements: Vec<Integer>,
}

impl Dataset {
    pub fn new<I, T>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Integer>,
    {
        let elements: Vec<Integer> = elements.into_iter().map(Into::into).unique().collect();
        Self { elements }
    }

    pub fn elements(&self) -> &[Integer] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Plaintext membership, for diagnostics only.
    pub fn contains(&self, x: &Integer) -> bool {
        self.elements.contains(x)
    }
}
