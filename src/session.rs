//! The session: one transport plus the registry of kinds it serves.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpRequest, Transport};
use crate::config::HarvestConfig;
use crate::rest::resources::{
    CLIENT, CLIENT_CONTACT, DAY, ENTRY, EXPENSE, EXPENSE_CATEGORY, INVOICE, INVOICE_CATEGORY,
    INVOICE_MESSAGE, INVOICE_PAYMENT, PROJECT, TASK, TASK_ASSIGNMENT, USER, USER_ASSIGNMENT,
};
use crate::rest::{BoundChildKind, BoundDay, BoundKind, Registry};

/// A transport bound to a registry of resource kinds.
///
/// Every [`Resource`](crate::rest::Resource) borrows the session it was
/// fetched through, so relationship accessors reuse the same transport. The
/// session holds no mutable state; sharing one across threads is safe when
/// its transport is.
///
/// # Example
///
/// ```rust,no_run
/// use harvest_api::{AccountUrl, HarvestConfig, Password, Session, Username};
/// use harvest_api::rest::Params;
///
/// let config = HarvestConfig::builder()
///     .account(AccountUrl::new("acme").unwrap())
///     .credentials(Username::new("me@example.com").unwrap(), Password::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let session = Session::connect(&config).unwrap();
/// for project in session.projects().all(&Params::new()).unwrap() {
///     println!("{}", project.field::<String>("name").unwrap());
/// }
/// ```
pub struct Session {
    transport: Box<dyn Transport>,
    registry: Arc<Registry>,
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

impl Session {
    /// Creates a session over `transport` with the built-in Harvest kinds.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
            registry: Registry::standard(),
        }
    }

    /// Creates a session over `transport` with a caller-supplied registry.
    pub fn with_registry(transport: impl Transport + 'static, registry: Registry) -> Self {
        Self {
            transport: Box::new(transport),
            registry: Arc::new(registry),
        }
    }

    /// Creates a session backed by an [`HttpClient`] for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn connect(config: &HarvestConfig) -> Result<Self, HttpError> {
        Ok(Self::new(HttpClient::new(config)?))
    }

    /// Returns the registry of kinds and relationship accessors.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Sends `request` straight to the transport.
    ///
    /// This is also the way to issue writes, which the resource layer does
    /// not model.
    ///
    /// # Errors
    ///
    /// Returns the transport's [`HttpError`] unchanged.
    pub fn request(&self, request: &HttpRequest) -> Result<Value, HttpError> {
        tracing::debug!(method = %request.http_method, path = %request.path, "session request");
        self.transport.request(request)
    }

    /// Clients.
    #[must_use]
    pub fn clients(&self) -> BoundKind<'_> {
        CLIENT.bind(self)
    }

    /// Client contacts.
    #[must_use]
    pub fn contacts(&self) -> BoundKind<'_> {
        CLIENT_CONTACT.bind(self)
    }

    /// Projects.
    #[must_use]
    pub fn projects(&self) -> BoundKind<'_> {
        PROJECT.bind(self)
    }

    /// Time entries (get only).
    #[must_use]
    pub fn entries(&self) -> BoundKind<'_> {
        ENTRY.bind(self)
    }

    /// Tasks.
    #[must_use]
    pub fn tasks(&self) -> BoundKind<'_> {
        TASK.bind(self)
    }

    /// People.
    #[must_use]
    pub fn users(&self) -> BoundKind<'_> {
        USER.bind(self)
    }

    /// Expense categories.
    #[must_use]
    pub fn expense_categories(&self) -> BoundKind<'_> {
        EXPENSE_CATEGORY.bind(self)
    }

    /// Expenses.
    #[must_use]
    pub fn expenses(&self) -> BoundKind<'_> {
        EXPENSE.bind(self)
    }

    /// Invoices.
    #[must_use]
    pub fn invoices(&self) -> BoundKind<'_> {
        INVOICE.bind(self)
    }

    /// Invoice item categories (list only).
    #[must_use]
    pub fn invoice_categories(&self) -> BoundKind<'_> {
        INVOICE_CATEGORY.bind(self)
    }

    /// Users assigned to a project.
    #[must_use]
    pub fn user_assignments(&self) -> BoundChildKind<'_> {
        USER_ASSIGNMENT.bind_child(self)
    }

    /// Tasks assigned to a project.
    #[must_use]
    pub fn task_assignments(&self) -> BoundChildKind<'_> {
        TASK_ASSIGNMENT.bind_child(self)
    }

    /// Messages on an invoice.
    #[must_use]
    pub fn invoice_messages(&self) -> BoundChildKind<'_> {
        INVOICE_MESSAGE.bind_child(self)
    }

    /// Payments on an invoice.
    #[must_use]
    pub fn invoice_payments(&self) -> BoundChildKind<'_> {
        INVOICE_PAYMENT.bind_child(self)
    }

    /// The daily summary.
    #[must_use]
    pub fn day(&self) -> BoundDay<'_> {
        BoundDay::new(self, &DAY)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("kinds", &self.registry.kinds().map(|k| k.name).collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
