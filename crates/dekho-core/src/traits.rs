// crates/dekho-core/src/traits.rs
use crate::text::{equals_folded, fold_key};
use std::fmt::Debug;
use std::sync::Arc;

/// Storage backend for the strings held by catalog nodes.
///
/// This abstraction allows the crate to swap how textual data is stored
/// internally without changing the public API of accessors that return
/// `&str` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` so a built catalog can
/// be shared between readers.
pub trait CatalogBackend: Clone + Debug + Send + Sync + 'static {
    type Str: Clone + Send + Sync + Debug + AsRef<str>;

    /// Convert an `&str` into the backend string representation.
    fn str_from(s: &str) -> Self::Str;

    /// Convert backend string to owned Rust `String`.
    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
}

/// Default backend: plain `String`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBackend;

impl CatalogBackend for DefaultBackend {
    type Str = String;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }
}

/// Reference-counted backend: `Arc<str>`, cheap to clone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedBackend;

impl CatalogBackend for SharedBackend {
    type Str = Arc<str>;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        Arc::from(s)
    }
}

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get folded (case and accent insensitive)
/// comparisons built on [`fold_key`].
///
/// # Examples
/// ```rust
/// use dekho_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Varkala").is_named("VARKALA"));
/// assert!(Place("Jim Corbett").name_starts_with("jim c"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Returns `true` if `q` equals the display name after folding.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }

    /// Returns `true` if the folded display name starts with the folded `q`.
    #[inline]
    fn name_starts_with(&self, q: &str) -> bool {
        fold_key(self.name_str()).starts_with(&fold_key(q))
    }
}
