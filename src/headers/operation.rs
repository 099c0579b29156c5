//! Header operations: what to do with a header, and for how long.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::headers::header::{ApiHeader, SharedHeader};
use crate::request::HeaderTarget;

/// Modification of a request header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Append the header. Existing headers with the same name are kept.
    Add,
    /// Overwrite every header with the same name.
    Set,
    /// Delete every header with the same name.
    Remove,
}

impl Operation {
    /// Apply this operation for `header` to `request`.
    pub fn apply<R>(self, request: &mut R, header: &dyn ApiHeader) -> Result<(), R::Error>
    where
        R: HeaderTarget + ?Sized,
    {
        match self {
            Operation::Add => {
                let value = header.compute_value(&request.context());
                request.add_header(header.name(), value)
            }
            Operation::Set => {
                let value = header.compute_value(&request.context());
                request.set_header(header.name(), value)
            }
            Operation::Remove => request.remove_header(header.name()),
        }
    }

    /// SET and REMOVE make earlier operations on the same name redundant.
    pub fn supersedes(self) -> bool {
        !matches!(self, Operation::Add)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "ADD",
            Operation::Set => "SET",
            Operation::Remove => "REMOVE",
        };
        f.write_str(name)
    }
}

/// How long a configured operation stays in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Every subsequent request, until superseded.
    AllRequests,
    /// Only the next request.
    NextRequest,
}

impl Scope {
    pub fn is_all_requests(self) -> bool {
        matches!(self, Scope::AllRequests)
    }
}

impl From<bool> for Scope {
    fn from(for_all_requests: bool) -> Self {
        if for_all_requests {
            Scope::AllRequests
        } else {
            Scope::NextRequest
        }
    }
}

/// A header paired with the operation to perform on it. Immutable.
#[derive(Debug, Clone)]
pub struct HeaderOperation {
    header: SharedHeader,
    operation: Operation,
}

impl HeaderOperation {
    pub fn new(header: SharedHeader, operation: Operation) -> Self {
        Self { header, operation }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn header(&self) -> &SharedHeader {
        &self.header
    }

    pub fn header_name(&self) -> &str {
        self.header.name()
    }

    /// True if this operation targets exactly `name`.
    pub fn targets(&self, name: &str) -> bool {
        self.header.name() == name
    }

    pub fn apply<R>(&self, request: &mut R) -> Result<(), R::Error>
    where
        R: HeaderTarget + ?Sized,
    {
        self.operation.apply(request, self.header.as_ref())
    }
}
