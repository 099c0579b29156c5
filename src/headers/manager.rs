//! Request headers manager.
//!
//! Records header operations at two scopes and replays them onto requests.
//!
//! # Replay Order
//! ```text
//! apply_configuration(request):
//!     permanent operations     (insertion order)
//!     → next-request operations (insertion order)
//!     → next-request list cleared
//! ```
//!
//! # Pruning
//! - ADD never prunes: several values for one name coexist
//! - SET/REMOVE drops every pending next-request operation for the same name
//! - SET/REMOVE for all requests also drops earlier permanent operations for that name
//! - A next-request SET/REMOVE leaves permanent operations alone
//!
//! A permanent ADD is also queued once for the next request. Without it, a
//! pending next-request REMOVE for the same name would run after the permanent
//! ADD and hide the header on the very next request.

use std::sync::Arc;

use crate::error::{HeaderError, HeaderResult};
use crate::headers::configuration::{HeaderConfiguration, HeaderConfigurator};
use crate::headers::header::{ApiHeader, SharedHeader};
use crate::headers::operation::{HeaderOperation, Operation, Scope};
use crate::request::HeaderTarget;

/// Manager of request headers, for all requests or only the next one.
///
/// One manager lives for the duration of one test.
#[derive(Debug, Default)]
pub struct HeadersManager {
    permanent: Vec<HeaderOperation>,
    next_request: Vec<HeaderOperation>,
}

impl HeadersManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an operation on `header`.
    ///
    /// Fails with [`HeaderError::InvalidArgument`] if the header name is empty.
    pub fn configure<H>(&mut self, op: Operation, header: H, scope: Scope) -> HeaderResult<&mut Self>
    where
        H: ApiHeader + 'static,
    {
        self.configure_shared(op, Arc::new(header), scope)
    }

    /// Same as [`configure`](Self::configure) for an already shared header.
    pub fn configure_shared(
        &mut self,
        op: Operation,
        header: SharedHeader,
        scope: Scope,
    ) -> HeaderResult<&mut Self> {
        validate_header(header.as_ref())?;
        self.record(HeaderOperation::new(header, op), scope);
        Ok(self)
    }

    /// Record `op` for every header of `group`, in the group's order.
    ///
    /// Stricter than calling [`configure`](Self::configure) once per header:
    /// the whole group is validated first, and nothing is recorded if any
    /// header is rejected.
    pub fn configure_group<C>(&mut self, op: Operation, group: &C, scope: Scope) -> HeaderResult<&mut Self>
    where
        C: HeaderConfiguration + ?Sized,
    {
        let headers = group.headers();
        for header in &headers {
            validate_header(header.as_ref())?;
        }

        for header in headers {
            self.record(HeaderOperation::new(header, op), scope);
        }
        Ok(self)
    }

    /// SET every configuration produced by `configurators` for all requests.
    pub fn apply_configurators(
        &mut self,
        configurators: &[&dyn HeaderConfigurator],
    ) -> HeaderResult<&mut Self> {
        for configurator in configurators {
            for configuration in configurator.header_configurations() {
                self.configure_group(Operation::Set, configuration.as_ref(), Scope::AllRequests)?;
            }
        }
        Ok(self)
    }

    /// Replay permanent then next-request operations onto `request`, then
    /// forget the next-request operations.
    ///
    /// Errors from the request are returned unchanged; pending next-request
    /// operations are kept in that case.
    pub fn apply_configuration<R>(&mut self, request: &mut R) -> Result<&mut Self, R::Error>
    where
        R: HeaderTarget + ?Sized,
    {
        for op in self.permanent.iter().chain(self.next_request.iter()) {
            tracing::trace!(
                header = op.header_name(),
                operation = %op.operation(),
                "Applying header operation"
            );
            op.apply(request)?;
        }

        tracing::debug!(
            permanent = self.permanent.len(),
            next_request = self.next_request.len(),
            "Header configuration applied"
        );
        self.next_request.clear();

        Ok(self)
    }

    /// Operations replayed on every request.
    pub fn permanent_operations(&self) -> &[HeaderOperation] {
        &self.permanent
    }

    /// Operations replayed on the next request only.
    pub fn next_request_operations(&self) -> &[HeaderOperation] {
        &self.next_request
    }

    fn record(&mut self, operation: HeaderOperation, scope: Scope) {
        let pruned = self.prune(&operation, scope);

        tracing::debug!(
            header = operation.header_name(),
            operation = %operation.operation(),
            scope = ?scope,
            pruned,
            "Header operation configured"
        );

        if operation.operation() == Operation::Add && scope.is_all_requests() {
            self.next_request.push(operation.clone());
        }

        match scope {
            Scope::AllRequests => self.permanent.push(operation),
            Scope::NextRequest => self.next_request.push(operation),
        }
    }

    /// Drop operations made redundant by `operation`. Returns how many.
    fn prune(&mut self, operation: &HeaderOperation, scope: Scope) -> usize {
        if !operation.operation().supersedes() {
            return 0;
        }

        let name = operation.header_name();
        let mut pruned = remove_targeting(&mut self.next_request, name);
        if scope.is_all_requests() {
            pruned += remove_targeting(&mut self.permanent, name);
        }
        pruned
    }
}

fn remove_targeting(operations: &mut Vec<HeaderOperation>, name: &str) -> usize {
    let before = operations.len();
    operations.retain(|op| !op.targets(name));
    before - operations.len()
}

fn validate_header(header: &dyn ApiHeader) -> HeaderResult<()> {
    if header.name().trim().is_empty() {
        return Err(HeaderError::InvalidArgument(
            "header name cannot be empty".to_string(),
        ));
    }
    Ok(())
}
