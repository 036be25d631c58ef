//! The resource model for the Harvest REST API.
//!
//! This module turns small declarative descriptions into working fetch, list
//! and traversal operations:
//!
//! - **[`ResourceKind`]**: a `const`-built description of one kind (paths,
//!   envelope key, field coercions)
//! - **[`Resource`]**: one fetched item, with fields coerced lazily on read
//! - **[`Registry`]**: the known kinds plus the relationship accessors
//!   available on each
//! - **[`BoundKind`] / [`BoundChildKind`] / [`BoundDay`]**: session-scoped
//!   handles exposing only the operations a kind supports
//! - **[`ResourceError`]**: everything that can go wrong above the transport
//!
//! # Example
//!
//! ```rust,ignore
//! use harvest_api::Session;
//! use harvest_api::rest::Params;
//!
//! let session = Session::connect(&config)?;
//!
//! // Single item, path built from `/clients/` + id
//! let client = session.clients().get(42)?;
//! println!("{}", client.field::<String>("name")?);
//!
//! // Relationship accessors registered for Client
//! for contact in client.fetch_children("get_contacts", &Params::new())? {
//!     println!("- {}", contact.field::<String>("email")?);
//! }
//!
//! // The daily summary and its nested entries
//! let today = session.day().today()?;
//! for entry in today.nested_list("day_entries")? {
//!     println!("{:?} {}", entry.time("started_at")?, entry.field::<f64>("hours")?);
//! }
//! ```

mod bound;
mod daily;
mod errors;
mod fetch;
mod field;
mod kind;
mod path;
mod registry;
mod resource;

pub mod resources;

// Public exports
pub use bound::{BoundChildKind, BoundKind};
pub use daily::{resolve_day, BoundDay, DayArg};
pub use errors::ResourceError;
pub use fetch::{get_all_children, get_child, get_many, get_one, Params};
pub use field::{
    parse_date, parse_datetime, parse_time, Field, DATETIME_FORMAT, DATE_FORMAT, TIME_FORMAT,
};
pub use kind::{Coercion, ResourceKind, COMMON_COERCIONS};
pub use path::{build_path, has_placeholders};
pub use registry::{Accessor, Registry};
pub use resource::Resource;
