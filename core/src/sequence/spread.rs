use super::IndexedSequence;

/// One argument to [`IndexedSequence::concat`], or one result of a
/// [`IndexedSequence::flat_map`] transform.
///
/// A `Sequence` is spliced in element by element; an `Element` is kept whole,
/// even when it is itself some other kind of collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Spread<T> {
    Element(T),
    Sequence(IndexedSequence<T>),
}

impl<T> Spread<T> {
    pub fn element(value: T) -> Self {
        Spread::Element(value)
    }

    pub fn sequence(items: impl Into<IndexedSequence<T>>) -> Self {
        Spread::Sequence(items.into())
    }
}
