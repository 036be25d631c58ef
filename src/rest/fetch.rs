//! Fetch orchestration.
//!
//! These functions turn a kind's path templates into requests, send them
//! through the session's transport, and wrap what comes back. They are the
//! only place the resource layer talks to the transport.

use std::collections::HashMap;
use std::fmt::Display;

use serde_json::Value;

use crate::clients::HttpRequest;
use crate::rest::errors::ResourceError;
use crate::rest::kind::ResourceKind;
use crate::rest::path::build_path;
use crate::rest::resource::Resource;
use crate::session::Session;

/// Query parameters for list fetches.
pub type Params = HashMap<String, String>;

/// Fetches one item by id using the kind's `get_path`.
///
/// A JSON `null` body wraps as a resource with no fields, so reads on it
/// report [`ResourceError::FieldNotFound`].
///
/// # Errors
///
/// Returns [`ResourceError::NotSupported`] if the kind has no `get_path`,
/// a decode error if the response is not a single object, and any transport
/// error unchanged.
pub fn get_one<'s>(
    session: &'s Session,
    kind: &'static ResourceKind,
    id: impl Display,
) -> Result<Resource<'s>, ResourceError> {
    let template = kind
        .get_path
        .ok_or_else(|| ResourceError::not_supported(kind.name, "get"))?;
    let path = build_path(template, &[("id", id)]);
    fetch_one(session, kind, &path, &Params::new())
}

/// Fetches every item matching `params` using the kind's `list_path`.
///
/// # Errors
///
/// Returns [`ResourceError::NotSupported`] if the kind has no `list_path`,
/// a decode error if the response is not an array, and any transport error
/// unchanged.
pub fn get_many<'s>(
    session: &'s Session,
    kind: &'static ResourceKind,
    params: &Params,
) -> Result<Vec<Resource<'s>>, ResourceError> {
    let path = kind
        .list_path
        .ok_or_else(|| ResourceError::not_supported(kind.name, "all"))?;
    fetch_many(session, kind, path, params)
}

/// Fetches one child of a parent using the kind's `child_path`.
///
/// A `null` body wraps as an empty resource, as in [`get_one`].
///
/// # Errors
///
/// Returns [`ResourceError::NotSupported`] if the kind has no `child_path`;
/// otherwise fails like [`get_one`].
pub fn get_child<'s>(
    session: &'s Session,
    kind: &'static ResourceKind,
    parent_id: impl Display,
    child_id: impl Display,
) -> Result<Resource<'s>, ResourceError> {
    let template = kind
        .child_path
        .ok_or_else(|| ResourceError::not_supported(kind.name, "get"))?;
    let path = build_path(
        template,
        &[
            ("parent_id", parent_id.to_string()),
            ("id", child_id.to_string()),
        ],
    );
    fetch_one(session, kind, &path, &Params::new())
}

/// Fetches every child of a parent using the kind's `child_path` with an
/// empty child id.
///
/// # Errors
///
/// Returns [`ResourceError::NotSupported`] if the kind has no `child_path`;
/// otherwise fails like [`get_many`].
pub fn get_all_children<'s>(
    session: &'s Session,
    kind: &'static ResourceKind,
    parent_id: impl Display,
    params: &Params,
) -> Result<Vec<Resource<'s>>, ResourceError> {
    let template = kind
        .child_path
        .ok_or_else(|| ResourceError::not_supported(kind.name, "all"))?;
    let path = build_path(
        template,
        &[("parent_id", parent_id.to_string()), ("id", String::new())],
    );
    fetch_many(session, kind, &path, params)
}

/// Lists items of `kind` found under another resource's path, such as a
/// client's contacts at `/clients/{id}/contacts`.
pub(crate) fn get_scoped<'s>(
    session: &'s Session,
    kind: &'static ResourceKind,
    template: &str,
    owner_id: &str,
    params: &Params,
) -> Result<Vec<Resource<'s>>, ResourceError> {
    let path = build_path(template, &[("id", owner_id)]);
    fetch_many(session, kind, &path, params)
}

/// Fetches `path` and wraps a single-object response.
pub(crate) fn fetch_one<'s>(
    session: &'s Session,
    kind: &'static ResourceKind,
    path: &str,
    params: &Params,
) -> Result<Resource<'s>, ResourceError> {
    match send(session, kind, path, params)? {
        Value::Array(_) => Err(ResourceError::unexpected_shape(kind.name, "a JSON object")),
        value => Resource::new(kind, value, session),
    }
}

/// Fetches `path` and wraps each element of an array response.
pub(crate) fn fetch_many<'s>(
    session: &'s Session,
    kind: &'static ResourceKind,
    path: &str,
    params: &Params,
) -> Result<Vec<Resource<'s>>, ResourceError> {
    match send(session, kind, path, params)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| Resource::new(kind, item, session))
            .collect(),
        _ => Err(ResourceError::unexpected_shape(kind.name, "a JSON array")),
    }
}

fn send(
    session: &Session,
    kind: &'static ResourceKind,
    path: &str,
    params: &Params,
) -> Result<Value, ResourceError> {
    tracing::trace!(kind = kind.name, path, "fetching");
    let request = HttpRequest::get(path, Some(params.clone()));
    Ok(session.request(&request)?)
}
