pub mod category;
pub mod content;
pub mod order;
pub mod playlist;
pub mod product;
pub mod product_detail;

/// Direction applied to a single ordering term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Ordering term over a typed set of sortable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<F> {
    /// Field the results are ordered by.
    pub field: F,
    /// Whether the field is ordered ascending or descending.
    pub direction: SortDirection,
}

impl<F> SortKey<F> {
    /// Ascending ordering on `field`.
    pub fn asc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Descending ordering on `field`.
    pub fn desc(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// Parse a `field` or `-field` ordering term, resolving the field name with `resolve`.
    ///
    /// Returns `None` when the name is not a known field.
    pub fn parse(term: &str, resolve: impl Fn(&str) -> Option<F>) -> Option<Self> {
        match term.strip_prefix('-') {
            Some(name) => resolve(name).map(Self::desc),
            None => resolve(term).map(Self::asc),
        }
    }
}
