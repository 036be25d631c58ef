//! Declarative resource kinds.
//!
//! A [`ResourceKind`] is a small, `const`-constructible description of one
//! category of remote entity: where to fetch it from, which JSON key its
//! data may be nested under, and how individual fields are coerced when
//! read. Everything else (fetching, wrapping, relationship traversal) is
//! derived from it.
//!
//! # Example
//!
//! ```rust
//! use harvest_api::rest::{Coercion, ResourceKind, COMMON_COERCIONS};
//!
//! static NOTE: ResourceKind = ResourceKind::new("Note")
//!     .with_get_path("/notes/")
//!     .with_list_path("/notes/");
//!
//! static NOTEBOOK: ResourceKind = ResourceKind::new("Notebook")
//!     .with_item_name("book")
//!     .with_get_path("/books/%s")
//!     .with_coercions(&[
//!         ("created_at", Coercion::DateTime),
//!         ("notes", Coercion::Nested(&NOTE)),
//!     ]);
//!
//! assert_eq!(NOTE.envelope_key(), "note");
//! assert_eq!(NOTEBOOK.envelope_key(), "book");
//! assert_eq!(NOTE.coercion("updated_at"), Some(Coercion::DateTime));
//! assert!(NOTE.coercions == COMMON_COERCIONS);
//! ```

use std::fmt;

use crate::rest::bound::{BoundChildKind, BoundKind};
use crate::session::Session;

/// How a raw field value is turned into its typed form.
///
/// Fields without a declared coercion are returned as raw JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coercion {
    /// `%Y-%m-%dT%H:%M:%SZ`, read as UTC.
    DateTime,
    /// `%H:%M`.
    Time,
    /// `%Y-%m-%d`.
    Date,
    /// An object (or array of objects) of another kind.
    Nested(&'static ResourceKind),
}

/// Coercions shared by nearly every kind.
pub const COMMON_COERCIONS: &[(&str, Coercion)] = &[
    ("created_at", Coercion::DateTime),
    ("updated_at", Coercion::DateTime),
];

/// The declarative description of a resource kind.
///
/// Kinds are meant to live in `static`s so that nested coercions and
/// relationships can refer to each other by `&'static` reference.
pub struct ResourceKind {
    /// The kind name, e.g. `"ExpenseCategory"`. Unique within a
    /// [`Registry`](crate::rest::Registry).
    pub name: &'static str,
    /// The JSON envelope key; defaults to the lower-cased name.
    pub item_name: Option<&'static str>,
    /// Template used by `get`. A bare prefix has the id appended.
    pub get_path: Option<&'static str>,
    /// Path used by `all`.
    pub list_path: Option<&'static str>,
    /// Template for kinds addressed under a parent, taking the parent id
    /// and then the child id.
    pub child_path: Option<&'static str>,
    /// Field coercions, looked up by field name.
    pub coercions: &'static [(&'static str, Coercion)],
}

impl ResourceKind {
    /// Creates a kind with no paths and the [`COMMON_COERCIONS`].
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            item_name: None,
            get_path: None,
            list_path: None,
            child_path: None,
            coercions: COMMON_COERCIONS,
        }
    }

    /// Sets the JSON envelope key.
    #[must_use]
    pub const fn with_item_name(self, item_name: &'static str) -> Self {
        Self {
            item_name: Some(item_name),
            ..self
        }
    }

    /// Sets the single-item path template.
    #[must_use]
    pub const fn with_get_path(self, path: &'static str) -> Self {
        Self {
            get_path: Some(path),
            ..self
        }
    }

    /// Sets the collection path.
    #[must_use]
    pub const fn with_list_path(self, path: &'static str) -> Self {
        Self {
            list_path: Some(path),
            ..self
        }
    }

    /// Sets the parent-scoped path template.
    #[must_use]
    pub const fn with_child_path(self, path: &'static str) -> Self {
        Self {
            child_path: Some(path),
            ..self
        }
    }

    /// Replaces the coercion table.
    #[must_use]
    pub const fn with_coercions(self, coercions: &'static [(&'static str, Coercion)]) -> Self {
        Self { coercions, ..self }
    }

    /// Returns the key raw item data may be nested under.
    #[must_use]
    pub fn envelope_key(&self) -> String {
        self.item_name
            .map_or_else(|| self.name.to_lowercase(), ToString::to_string)
    }

    /// Returns the declared coercion for `field`, if any.
    #[must_use]
    pub fn coercion(&self, field: &str) -> Option<Coercion> {
        self.coercions
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, coercion)| *coercion)
    }

    /// Returns `true` if the kind is only addressable under a parent.
    #[must_use]
    pub const fn is_child_only(&self) -> bool {
        self.child_path.is_some() && self.get_path.is_none() && self.list_path.is_none()
    }

    /// Binds the kind's `get`/`all` operations to a session.
    #[must_use]
    pub fn bind<'s>(&'static self, session: &'s Session) -> BoundKind<'s> {
        BoundKind::new(session, self)
    }

    /// Binds the kind's parent-scoped operations to a session.
    #[must_use]
    pub fn bind_child<'s>(&'static self, session: &'s Session) -> BoundChildKind<'s> {
        BoundChildKind::new(session, self)
    }
}

// Kinds are identified by name; comparing tables would chase nested kinds.
impl PartialEq for ResourceKind {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ResourceKind {}

impl fmt::Debug for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceKind")
            .field("name", &self.name)
            .field("item_name", &self.item_name)
            .field("get_path", &self.get_path)
            .field("list_path", &self.list_path)
            .field("child_path", &self.child_path)
            .field(
                "coercions",
                &self.coercions.iter().map(|(f, _)| *f).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static WIDGET: ResourceKind = ResourceKind::new("Widget").with_get_path("/widgets/");
    static GADGET: ResourceKind = ResourceKind::new("GadgetPart")
        .with_item_name("part")
        .with_child_path("/widgets/%s/parts/%s")
        .with_coercions(&[("widget", Coercion::Nested(&WIDGET))]);

    #[test]
    fn test_envelope_key_defaults_to_lowercase_name() {
        assert_eq!(WIDGET.envelope_key(), "widget");
        assert_eq!(GADGET.envelope_key(), "part");
    }

    #[test]
    fn test_common_coercions_by_default() {
        assert_eq!(WIDGET.coercion("created_at"), Some(Coercion::DateTime));
        assert_eq!(WIDGET.coercion("name"), None);
    }

    #[test]
    fn test_replaced_coercions_drop_common_ones() {
        assert_eq!(GADGET.coercion("created_at"), None);
        assert_eq!(GADGET.coercion("widget"), Some(Coercion::Nested(&WIDGET)));
    }

    #[test]
    fn test_child_only() {
        assert!(GADGET.is_child_only());
        assert!(!WIDGET.is_child_only());
    }

    #[test]
    fn test_kinds_compare_by_name() {
        assert_eq!(&WIDGET, &WIDGET);
        assert_ne!(&WIDGET, &GADGET);
        assert!(format!("{:?}", GADGET).contains("GadgetPart"));
    }
}
