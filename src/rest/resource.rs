//! Resource instances.
//!
//! A [`Resource`] is one fetched item: its raw JSON object, the kind that
//! describes it, and a borrowed reference to the [`Session`] it came from.
//! Fields are coerced on read, and relationship accessors registered for the
//! kind are resolved through the session's registry at call time.
//!
//! # Example
//!
//! ```rust,ignore
//! let project = session.projects().get(42)?;
//!
//! let name: String = project.field("name")?;
//! let created = project.datetime("created_at")?;
//!
//! for assignment in project.fetch_children("get_user_assignments", &Params::new())? {
//!     let user = assignment.fetch_linked("get_user")?;
//!     println!("{} on {}", user.field::<String>("email")?, name);
//! }
//! ```

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::rest::errors::ResourceError;
use crate::rest::field::{coerce, Field};
use crate::rest::fetch::Params;
use crate::rest::kind::ResourceKind;
use crate::rest::registry::Accessor;
use crate::session::Session;

/// One item of a [`ResourceKind`], bound to the session it was fetched through.
#[derive(Clone)]
pub struct Resource<'s> {
    kind: &'static ResourceKind,
    data: Map<String, Value>,
    session: &'s Session,
}

impl<'s> Resource<'s> {
    /// Wraps raw item data.
    ///
    /// If the object has the kind's envelope key (e.g. `{"project": {...}}`)
    /// and that key holds an object, the inner object is used. `null` wraps
    /// as an empty item.
    ///
    /// # Errors
    ///
    /// Returns a decode [`ResourceError::Http`] if `value` is an array or a
    /// scalar.
    pub fn new(
        kind: &'static ResourceKind,
        value: Value,
        session: &'s Session,
    ) -> Result<Self, ResourceError> {
        let data = match value {
            Value::Object(mut map) => {
                let key = kind.envelope_key();
                match map.remove(&key) {
                    Some(Value::Object(inner)) => inner,
                    Some(other) => {
                        map.insert(key, other);
                        map
                    }
                    None => map,
                }
            }
            Value::Null => Map::new(),
            _ => return Err(ResourceError::unexpected_shape(kind.name, "a JSON object")),
        };

        Ok(Self {
            kind,
            data,
            session,
        })
    }

    pub(crate) fn wrap_nested(
        kind: &'static ResourceKind,
        value: &Value,
        session: &'s Session,
    ) -> Result<Self, ResourceError> {
        Self::new(kind, value.clone(), session)
    }

    /// Returns the kind of this resource.
    #[must_use]
    pub const fn kind(&self) -> &'static ResourceKind {
        self.kind
    }

    /// Returns the session this resource was fetched through.
    #[must_use]
    pub const fn session(&self) -> &'s Session {
        self.session
    }

    /// Returns the unwrapped raw data.
    #[must_use]
    pub const fn raw(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Consumes the resource and returns its raw data.
    #[must_use]
    pub fn into_raw(self) -> Map<String, Value> {
        self.data
    }

    /// Returns `true` if the raw data has `field`, even if it is `null`.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.data.contains_key(field)
    }

    /// Returns the raw value of `field` without coercion.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] if the field is absent.
    pub fn value(&self, field: &str) -> Result<&Value, ResourceError> {
        self.data
            .get(field)
            .ok_or_else(|| ResourceError::FieldNotFound {
                kind: self.kind.name,
                field: field.to_string(),
            })
    }

    /// Reads `field` and applies the kind's declared coercion.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] if the field is absent and
    /// [`ResourceError::InvalidField`] if its coercion fails.
    pub fn get(&self, field: &str) -> Result<Field<'s>, ResourceError> {
        let value = self.value(field)?;
        coerce(self.kind, field, value, self.session)
    }

    /// Deserializes the raw value of `field` into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] if the field is absent and
    /// [`ResourceError::InvalidField`] if it does not deserialize as `T`.
    pub fn field<T: DeserializeOwned>(&self, field: &str) -> Result<T, ResourceError> {
        let value = self.value(field)?;
        serde_json::from_value(value.clone()).map_err(|e| self.invalid(field, e.to_string()))
    }

    /// Returns the `id` field rendered for use in a URL path.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] if there is no `id`, or
    /// [`ResourceError::InvalidField`] if it is neither a number nor a string.
    pub fn id(&self) -> Result<String, ResourceError> {
        self.id_field("id")
    }

    /// Reads a datetime field. `null` reads as `None`.
    ///
    /// # Errors
    ///
    /// Fails like [`get`](Self::get), or with [`ResourceError::InvalidField`]
    /// if the field is not declared as a datetime.
    pub fn datetime(&self, field: &str) -> Result<Option<DateTime<Utc>>, ResourceError> {
        match self.get(field)? {
            Field::DateTime(dt) => Ok(Some(dt)),
            f if f.is_null() => Ok(None),
            _ => Err(self.invalid(field, "not a datetime field")),
        }
    }

    /// Reads a date field. `null` reads as `None`.
    ///
    /// # Errors
    ///
    /// Fails like [`get`](Self::get), or with [`ResourceError::InvalidField`]
    /// if the field is not declared as a date.
    pub fn date(&self, field: &str) -> Result<Option<NaiveDate>, ResourceError> {
        match self.get(field)? {
            Field::Date(d) => Ok(Some(d)),
            f if f.is_null() => Ok(None),
            _ => Err(self.invalid(field, "not a date field")),
        }
    }

    /// Reads a clock-time field. `null` reads as `None`.
    ///
    /// # Errors
    ///
    /// Fails like [`get`](Self::get), or with [`ResourceError::InvalidField`]
    /// if the field is not declared as a time.
    pub fn time(&self, field: &str) -> Result<Option<NaiveTime>, ResourceError> {
        match self.get(field)? {
            Field::Time(t) => Ok(Some(t)),
            f if f.is_null() => Ok(None),
            _ => Err(self.invalid(field, "not a time field")),
        }
    }

    /// Reads a nested single-object field. `null` reads as `None`.
    ///
    /// # Errors
    ///
    /// Fails like [`get`](Self::get), or with [`ResourceError::InvalidField`]
    /// if the field does not hold a nested object.
    pub fn nested(&self, field: &str) -> Result<Option<Resource<'s>>, ResourceError> {
        match self.get(field)? {
            Field::Resource(r) => Ok(Some(r)),
            f if f.is_null() => Ok(None),
            _ => Err(self.invalid(field, "not a nested object field")),
        }
    }

    /// Reads a nested array field. `null` reads as an empty list.
    ///
    /// # Errors
    ///
    /// Fails like [`get`](Self::get), or with [`ResourceError::InvalidField`]
    /// if the field does not hold a nested array.
    pub fn nested_list(&self, field: &str) -> Result<Vec<Resource<'s>>, ResourceError> {
        match self.get(field)? {
            Field::Resources(r) => Ok(r),
            f if f.is_null() => Ok(Vec::new()),
            _ => Err(self.invalid(field, "not a nested list field")),
        }
    }

    /// Returns the names of the relationship accessors available on this
    /// resource's kind, sorted.
    #[must_use]
    pub fn accessors(&self) -> Vec<&str> {
        self.session.registry().accessor_names(self.kind)
    }

    /// Returns `true` if `name` is a relationship accessor for this kind.
    #[must_use]
    pub fn has_accessor(&self, name: &str) -> bool {
        self.session.registry().accessor(self.kind, name).is_some()
    }

    /// Invokes a single-child accessor such as `get_user_assignment`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotSupported`] if `name` is not a single-child
    /// accessor of this kind; otherwise fails like the underlying fetch.
    pub fn fetch_child(
        &self,
        name: &str,
        child_id: impl fmt::Display,
    ) -> Result<Resource<'s>, ResourceError> {
        match self.accessor(name)? {
            Accessor::Child { kind } => kind.bind_child(self.session).get(self.id()?, child_id),
            _ => Err(ResourceError::not_supported(self.kind.name, name)),
        }
    }

    /// Invokes a list accessor such as `get_user_assignments` or `get_contacts`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotSupported`] if `name` is not a list
    /// accessor of this kind; otherwise fails like the underlying fetch.
    pub fn fetch_children(
        &self,
        name: &str,
        params: &Params,
    ) -> Result<Vec<Resource<'s>>, ResourceError> {
        match self.accessor(name)? {
            Accessor::Children { kind } => kind.bind_child(self.session).all(self.id()?, params),
            Accessor::Scoped { kind, path } => {
                crate::rest::fetch::get_scoped(self.session, kind, path, &self.id()?, params)
            }
            Accessor::Filtered { kind, param } => {
                let mut params = params.clone();
                params.insert(param.to_string(), self.id()?);
                kind.bind(self.session).all(&params)
            }
            _ => Err(ResourceError::not_supported(self.kind.name, name)),
        }
    }

    /// Invokes a reference accessor such as `get_project`, which follows an
    /// id field of this resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotSupported`] if `name` is not a reference
    /// accessor of this kind; otherwise fails like the underlying fetch.
    pub fn fetch_linked(&self, name: &str) -> Result<Resource<'s>, ResourceError> {
        match self.accessor(name)? {
            Accessor::Reference { kind, id_field } => {
                kind.bind(self.session).get(self.id_field(id_field)?)
            }
            _ => Err(ResourceError::not_supported(self.kind.name, name)),
        }
    }

    fn accessor(&self, name: &str) -> Result<Accessor, ResourceError> {
        self.session
            .registry()
            .accessor(self.kind, name)
            .ok_or_else(|| ResourceError::not_supported(self.kind.name, name))
    }

    fn id_field(&self, field: &str) -> Result<String, ResourceError> {
        match self.value(field)? {
            Value::Number(n) => Ok(n.to_string()),
            Value::String(s) => Ok(s.clone()),
            other => Err(self.invalid(field, format!("{other} is not an id"))),
        }
    }

    fn invalid(&self, field: &str, reason: impl Into<String>) -> ResourceError {
        ResourceError::InvalidField {
            kind: self.kind.name,
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Debug for Resource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("kind", &self.kind.name)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpError, HttpRequest, Transport};
    use crate::rest::kind::Coercion;
    use crate::rest::registry::Registry;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    struct NoTransport;

    impl Transport for NoTransport {
        fn request(&self, _request: &HttpRequest) -> Result<Value, HttpError> {
            unreachable!("field access never touches the transport")
        }
    }

    static LINE: ResourceKind = ResourceKind::new("Line");
    static SHEET: ResourceKind = ResourceKind::new("Sheet").with_coercions(&[
        ("created_at", Coercion::DateTime),
        ("started_at", Coercion::Time),
        ("spent_at", Coercion::Date),
        ("lines", Coercion::Nested(&LINE)),
        ("owner", Coercion::Nested(&LINE)),
    ]);

    fn session() -> Session {
        Session::with_registry(NoTransport, Registry::new())
    }

    #[test]
    fn test_envelope_is_unwrapped() {
        let session = session();
        let sheet = Resource::new(&SHEET, json!({"sheet": {"id": 1}}), &session).unwrap();
        assert_eq!(sheet.id().unwrap(), "1");
        assert!(!sheet.contains("sheet"));
    }

    #[test]
    fn test_unenveloped_data_is_used_as_is() {
        let session = session();
        let sheet = Resource::new(&SHEET, json!({"id": "abc"}), &session).unwrap();
        assert_eq!(sheet.id().unwrap(), "abc");
    }

    #[test]
    fn test_null_wraps_as_empty() {
        let session = session();
        let sheet = Resource::new(&SHEET, Value::Null, &session).unwrap();
        assert!(sheet.raw().is_empty());
    }

    #[test]
    fn test_array_is_rejected() {
        let session = session();
        let err = Resource::new(&SHEET, json!([{"id": 1}]), &session).unwrap_err();
        assert!(matches!(err, ResourceError::Http(HttpError::Api(_))));
    }

    #[test]
    fn test_missing_field_is_distinct_from_null() {
        let session = session();
        let sheet = Resource::new(&SHEET, json!({"notes": null}), &session).unwrap();

        assert!(sheet.get("notes").unwrap().is_null());
        assert!(matches!(
            sheet.get("missing"),
            Err(ResourceError::FieldNotFound { kind: "Sheet", .. })
        ));
    }

    #[test]
    fn test_datetime_coercion_is_stable_across_reads() {
        let session = session();
        let sheet = Resource::new(
            &SHEET,
            json!({"created_at": "2011-03-14T09:30:00Z"}),
            &session,
        )
        .unwrap();

        let first = sheet.datetime("created_at").unwrap().unwrap();
        let second = sheet.datetime("created_at").unwrap().unwrap();
        assert_eq!(first, second);
        assert_eq!((first.year(), first.month(), first.day()), (2011, 3, 14));
        assert_eq!((first.hour(), first.minute(), first.second()), (9, 30, 0));
    }

    #[test]
    fn test_time_and_date_coercions() {
        let session = session();
        let sheet = Resource::new(
            &SHEET,
            json!({"started_at": "08:15", "spent_at": "2011-03-14"}),
            &session,
        )
        .unwrap();

        let started = sheet.time("started_at").unwrap().unwrap();
        assert_eq!((started.hour(), started.minute()), (8, 15));
        assert_eq!(
            sheet.date("spent_at").unwrap(),
            NaiveDate::from_ymd_opt(2011, 3, 14)
        );
    }

    #[test]
    fn test_null_date_reads_as_none() {
        let session = session();
        let sheet = Resource::new(&SHEET, json!({"spent_at": null}), &session).unwrap();
        assert_eq!(sheet.date("spent_at").unwrap(), None);
    }

    #[test]
    fn test_malformed_date_is_invalid_field() {
        let session = session();
        let sheet = Resource::new(&SHEET, json!({"spent_at": "yesterday"}), &session).unwrap();
        assert!(matches!(
            sheet.get("spent_at"),
            Err(ResourceError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_nested_list_wraps_each_element() {
        let session = session();
        let sheet = Resource::new(
            &SHEET,
            json!({"lines": [{"id": 1, "hours": 2.5}, {"id": 2, "hours": 1.0}]}),
            &session,
        )
        .unwrap();

        let lines = sheet.nested_list("lines").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].kind().name, "Line");
        assert_eq!(lines[1].field::<f64>("hours").unwrap(), 1.0);
        assert!(matches!(
            lines[0].get("missing"),
            Err(ResourceError::FieldNotFound { kind: "Line", .. })
        ));
    }

    #[test]
    fn test_nested_object_wraps_once() {
        let session = session();
        let sheet =
            Resource::new(&SHEET, json!({"owner": {"line": {"id": 9}}}), &session).unwrap();
        let owner = sheet.nested("owner").unwrap().unwrap();
        assert_eq!(owner.id().unwrap(), "9");
    }

    #[test]
    fn test_uncoerced_fields_pass_through() {
        let session = session();
        let sheet = Resource::new(
            &SHEET,
            json!({"tags": ["a", "b"], "billable": true}),
            &session,
        )
        .unwrap();

        assert_eq!(
            sheet.get("tags").unwrap().as_value(),
            Some(&json!(["a", "b"]))
        );
        assert!(sheet.field::<bool>("billable").unwrap());
    }

    #[test]
    fn test_typed_field_mismatch_is_invalid_field() {
        let session = session();
        let sheet = Resource::new(&SHEET, json!({"billable": "yes"}), &session).unwrap();
        assert!(matches!(
            sheet.field::<bool>("billable"),
            Err(ResourceError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_unknown_accessor_is_not_supported() {
        let session = session();
        let sheet = Resource::new(&SHEET, json!({"id": 1}), &session).unwrap();
        assert!(sheet.accessors().is_empty());
        assert!(matches!(
            sheet.fetch_linked("get_owner"),
            Err(ResourceError::NotSupported { kind: "Sheet", .. })
        ));
    }
}
