/// Result type alias using EvError
pub type Result<T> = std::result::Result<T, EvError>;

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the eventos system. Each kind maps to a stable error code that can be
/// used for programmatic handling, testing, and boundary responses (a
/// validation failure maps to HTTP 400, a lookup miss to 404, lock
/// contention to 503, and so on — the boundary owns that mapping).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvErrorKind {
    // Input/Validation
    Validation,
    InvalidUpdate,
    NotFound,

    // Store classification
    Constraint,
    Busy,
    Corrupt,
    Persistence,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl EvErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            EvErrorKind::Validation => "ERR_VALIDATION",
            EvErrorKind::InvalidUpdate => "ERR_INVALID_UPDATE",
            EvErrorKind::NotFound => "ERR_NOT_FOUND",
            EvErrorKind::Constraint => "ERR_CONSTRAINT_VIOLATION",
            EvErrorKind::Busy => "ERR_BUSY",
            EvErrorKind::Corrupt => "ERR_CORRUPT",
            EvErrorKind::Persistence => "ERR_PERSISTENCE",
            EvErrorKind::Io => "ERR_IO",
            EvErrorKind::Serialization => "ERR_SERIALIZATION",
            EvErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether the caller may safely retry the failed operation
    pub fn is_retryable(&self) -> bool {
        matches!(self, EvErrorKind::Busy)
    }
}

/// Canonical structured error type
///
/// Carries a kind for classification plus optional context for debugging.
/// Validation failures additionally carry the full ordered list of
/// human-readable messages in `details` — callers must surface all of them,
/// not just the first.
#[derive(Debug, Clone)]
pub struct EvError {
    kind: EvErrorKind,
    op: Option<String>,
    entity: Option<String>,
    id: Option<i64>,
    message: String,
    details: Vec<String>,
}

impl EvError {
    /// Create a new error with the specified kind
    pub fn new(kind: EvErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            id: None,
            message: String::new(),
            details: Vec::new(),
        }
    }

    /// Create a validation error carrying the collected messages
    pub fn validation(details: Vec<String>) -> Self {
        Self::new(EvErrorKind::Validation)
            .with_message("The provided data contains validation errors")
            .with_details(details)
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity name context
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add record id context
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add detail lines (ordered validation messages)
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> EvErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity name context, if any
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Get the record id context, if any
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the detail lines (empty for non-validation errors)
    pub fn details(&self) -> &[String] {
        &self.details
    }
}

impl std::fmt::Display for EvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity) = &self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        if let Some(id) = self.id {
            write!(f, " (id: {})", id)?;
        }
        Ok(())
    }
}

impl std::error::Error for EvError {}

impl From<serde_json::Error> for EvError {
    fn from(err: serde_json::Error) -> Self {
        EvError::new(EvErrorKind::Serialization).with_message(err.to_string())
    }
}
