//! Session-scoped kind handles.
//!
//! A handle pairs a [`ResourceKind`] with a [`Session`] and exposes only the
//! operations that kind supports: top-level kinds get [`BoundKind`], kinds
//! addressed under a parent get [`BoundChildKind`], and the daily summary gets
//! [`BoundDay`](crate::rest::BoundDay). Constructing a handle never fails.

use std::fmt::Display;

use serde_json::Value;

use crate::rest::errors::ResourceError;
use crate::rest::fetch::{self, Params};
use crate::rest::kind::ResourceKind;
use crate::rest::resource::Resource;
use crate::session::Session;

/// `get`/`all` for a top-level kind.
#[derive(Clone, Copy, Debug)]
pub struct BoundKind<'s> {
    session: &'s Session,
    kind: &'static ResourceKind,
}

impl<'s> BoundKind<'s> {
    /// Binds `kind` to `session`.
    #[must_use]
    pub const fn new(session: &'s Session, kind: &'static ResourceKind) -> Self {
        Self { session, kind }
    }

    /// Returns the bound kind.
    #[must_use]
    pub const fn kind(&self) -> &'static ResourceKind {
        self.kind
    }

    /// Fetches one item by id.
    ///
    /// # Errors
    ///
    /// See [`get_one`](crate::rest::get_one).
    pub fn get(&self, id: impl Display) -> Result<Resource<'s>, ResourceError> {
        fetch::get_one(self.session, self.kind, id)
    }

    /// Lists items matching `params`.
    ///
    /// # Errors
    ///
    /// See [`get_many`](crate::rest::get_many).
    pub fn all(&self, params: &Params) -> Result<Vec<Resource<'s>>, ResourceError> {
        fetch::get_many(self.session, self.kind, params)
    }

    /// Wraps data obtained elsewhere, e.g. from [`Session::request`].
    ///
    /// # Errors
    ///
    /// See [`Resource::new`].
    pub fn wrap(&self, value: Value) -> Result<Resource<'s>, ResourceError> {
        Resource::new(self.kind, value, self.session)
    }
}

/// `get`/`all` for a kind addressed under a parent id.
#[derive(Clone, Copy, Debug)]
pub struct BoundChildKind<'s> {
    session: &'s Session,
    kind: &'static ResourceKind,
}

impl<'s> BoundChildKind<'s> {
    /// Binds `kind` to `session`.
    #[must_use]
    pub const fn new(session: &'s Session, kind: &'static ResourceKind) -> Self {
        Self { session, kind }
    }

    /// Returns the bound kind.
    #[must_use]
    pub const fn kind(&self) -> &'static ResourceKind {
        self.kind
    }

    /// Fetches one child of `parent_id`.
    ///
    /// # Errors
    ///
    /// See [`get_child`](crate::rest::get_child).
    pub fn get(
        &self,
        parent_id: impl Display,
        child_id: impl Display,
    ) -> Result<Resource<'s>, ResourceError> {
        fetch::get_child(self.session, self.kind, parent_id, child_id)
    }

    /// Lists the children of `parent_id`.
    ///
    /// # Errors
    ///
    /// See [`get_all_children`](crate::rest::get_all_children).
    pub fn all(
        &self,
        parent_id: impl Display,
        params: &Params,
    ) -> Result<Vec<Resource<'s>>, ResourceError> {
        fetch::get_all_children(self.session, self.kind, parent_id, params)
    }

    /// Wraps data obtained elsewhere.
    ///
    /// # Errors
    ///
    /// See [`Resource::new`].
    pub fn wrap(&self, value: Value) -> Result<Resource<'s>, ResourceError> {
        Resource::new(self.kind, value, self.session)
    }
}
