//! The kind registry and relationship capability table.
//!
//! Relationships are wired once, when a [`Registry`] is built, by recording
//! named [`Accessor`]s against the parent kind. A [`Resource`] looks its
//! accessor up by name at call time; no type is ever mutated.
//!
//! # Example
//!
//! ```rust
//! use harvest_api::rest::{Registry, ResourceKind};
//!
//! static INVOICE: ResourceKind = ResourceKind::new("Invoice").with_get_path("/invoices/");
//! static PAYMENT: ResourceKind = ResourceKind::new("InvoicePayment")
//!     .with_item_name("payment")
//!     .with_child_path("/invoices/%s/payments/%s");
//!
//! let mut registry = Registry::new();
//! registry.register_children(&INVOICE, &PAYMENT);
//!
//! assert_eq!(registry.accessor_names(&INVOICE), vec!["get_payment", "get_payments"]);
//! ```
//!
//! [`Resource`]: crate::rest::Resource

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

use crate::rest::kind::ResourceKind;

/// A relationship operation available on instances of a parent kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accessor {
    /// `get_<singular>(child_id)`: one child through the child kind's `child_path`.
    Child {
        /// The child kind.
        kind: &'static ResourceKind,
    },
    /// `get_<plural>(params)`: all children through the child kind's `child_path`.
    Children {
        /// The child kind.
        kind: &'static ResourceKind,
    },
    /// A list found under the parent's own path, e.g. `/clients/{id}/contacts`.
    Scoped {
        /// The listed kind.
        kind: &'static ResourceKind,
        /// Template taking the parent id.
        path: &'static str,
    },
    /// A list of another kind filtered by the parent's id, e.g. `?client={id}`.
    Filtered {
        /// The listed kind.
        kind: &'static ResourceKind,
        /// The query parameter that receives the parent id.
        param: &'static str,
    },
    /// A single item of another kind whose id is stored in one of the
    /// parent's fields, e.g. `project_id`.
    Reference {
        /// The referenced kind.
        kind: &'static ResourceKind,
        /// The field holding the referenced id.
        id_field: &'static str,
    },
}

/// The set of known kinds plus the relationship accessors wired between them.
///
/// Kinds and accessor tables are keyed by [`ResourceKind::name`], so names
/// must be unique within one registry.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    kinds: BTreeMap<&'static str, &'static ResourceKind>,
    accessors: HashMap<&'static str, BTreeMap<String, Accessor>>,
}

static STANDARD: OnceLock<Arc<Registry>> = OnceLock::new();

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registry of built-in Harvest kinds, wiring it on first use.
    #[must_use]
    pub fn standard() -> Arc<Self> {
        Arc::clone(STANDARD.get_or_init(|| {
            let mut registry = Self::new();
            crate::rest::resources::register(&mut registry);
            Arc::new(registry)
        }))
    }

    /// Adds a kind. Registering the same kind again is a no-op.
    ///
    /// A different kind carrying an already registered name is ignored with
    /// a warning; the first registration wins.
    pub fn register(&mut self, kind: &'static ResourceKind) -> &mut Self {
        match self.kinds.get(kind.name) {
            Some(existing) if !std::ptr::eq(*existing, kind) => {
                tracing::warn!(kind = kind.name, "kind name already registered, ignoring");
            }
            Some(_) => {}
            None => {
                self.kinds.insert(kind.name, kind);
            }
        }
        self
    }

    /// Looks a kind up by name.
    #[must_use]
    pub fn kind(&self, name: &str) -> Option<&'static ResourceKind> {
        self.kinds.get(name).copied()
    }

    /// Returns every registered kind, ordered by name.
    pub fn kinds(&self) -> impl Iterator<Item = &'static ResourceKind> + '_ {
        self.kinds.values().copied()
    }

    /// Wires `child` under `parent` with the default accessor names:
    /// `get_<envelope key>` and `get_<envelope key>s`.
    pub fn register_children(
        &mut self,
        parent: &'static ResourceKind,
        child: &'static ResourceKind,
    ) -> &mut Self {
        self.register_children_as(parent, child, None, None)
    }

    /// Wires `child` under `parent`, overriding either accessor name.
    ///
    /// `singular` and `plural` are the parts after `get_`. Re-registering the
    /// same pair replaces the earlier accessors.
    pub fn register_children_as(
        &mut self,
        parent: &'static ResourceKind,
        child: &'static ResourceKind,
        singular: Option<&str>,
        plural: Option<&str>,
    ) -> &mut Self {
        let singular = singular.map_or_else(|| child.envelope_key(), ToString::to_string);
        let plural = plural.map_or_else(|| format!("{singular}s"), ToString::to_string);

        tracing::trace!(
            parent = parent.name,
            child = child.name,
            %singular,
            %plural,
            "wiring child accessors"
        );

        self.register(parent).register(child);
        self.add_accessor(parent, format!("get_{singular}"), Accessor::Child { kind: child });
        self.add_accessor(parent, format!("get_{plural}"), Accessor::Children { kind: child })
    }

    /// Records an arbitrary accessor on `parent`, replacing any accessor of
    /// the same name.
    pub fn add_accessor(
        &mut self,
        parent: &'static ResourceKind,
        name: impl Into<String>,
        accessor: Accessor,
    ) -> &mut Self {
        self.accessors
            .entry(parent.name)
            .or_default()
            .insert(name.into(), accessor);
        self
    }

    /// Looks up an accessor of `parent` by name.
    #[must_use]
    pub fn accessor(&self, parent: &ResourceKind, name: &str) -> Option<Accessor> {
        self.accessors
            .get(parent.name)
            .and_then(|table| table.get(name))
            .copied()
    }

    /// Returns the accessor names of `parent`, sorted.
    #[must_use]
    pub fn accessor_names(&self, parent: &ResourceKind) -> Vec<&str> {
        self.accessors
            .get(parent.name)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
