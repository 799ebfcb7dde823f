use thiserror::Error;

/// Result type alias using AegError
pub type Result<T> = std::result::Result<T, AegError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// raised by the graph core, the store and the CLI. Each kind maps to a stable
/// error code that can be used for programmatic error handling and testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Construction/Validation
    InvalidInput,
    InvalidGeometry,
    InvalidIdentifier,
    InvalidConfig,

    // Structural
    NotFound,
    InsertConflict,
    InvariantViolation,

    // Session
    IllegalState,
    OutOfRange,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidGeometry => "ERR_INVALID_GEOMETRY",
            ExErrorKind::InvalidIdentifier => "ERR_INVALID_IDENTIFIER",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InsertConflict => "ERR_INSERT_CONFLICT",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::IllegalState => "ERR_ILLEGAL_STATE",
            ExErrorKind::OutOfRange => "ERR_OUT_OF_RANGE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// This error type provides a structured representation of errors with
/// classification fields for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    node_path: Option<String>,
    step: Option<usize>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            node_path: None,
            step: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add node path context
    pub fn with_node_path(mut self, path: impl Into<String>) -> Self {
        self.node_path = Some(path.into());
        self
    }

    /// Add proof step context
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = Some(step);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
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

    /// Get the node path context, if any
    pub fn node_path(&self) -> Option<&str> {
        self.node_path.as_deref()
    }

    /// Get the proof step context, if any
    pub fn step(&self) -> Option<usize> {
        self.step
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.node_path {
            write!(f, " (node_path: {})", path)?;
        }
        if let Some(step) = self.step {
            write!(f, " (step: {})", step)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for graph construction, tree mutation and proof sessions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AegError {
    // ===== Construction Errors =====
    /// A geometric value is non-finite, or a dimension is negative
    #[error("Invalid geometry: {field} = {value}")]
    InvalidGeometry { field: String, value: f64 },

    /// Atom identifiers are single Latin letters
    #[error("Invalid atom identifier: {identifier:?}")]
    InvalidIdentifier { identifier: char },

    // ===== Structural Errors =====
    /// The node conflicts with a node already present at its destination
    #[error("Cannot insert {kind} into {target}: it conflicts with an existing node")]
    InsertConflict { kind: String, target: String },

    /// The sheet of assertion is the root and never a child
    #[error("The sheet of assertion cannot be inserted into a tree")]
    SheetNotInsertable,

    /// The receiving node does not cover the queried point
    #[error("Point ({x}, {y}) is not covered by the receiving node")]
    PointNotCovered { x: f64, y: f64 },

    /// No node other than the sheet covers the point
    #[error("No node at point ({x}, {y})")]
    NoNodeAtPoint { x: f64, y: f64 },

    /// Path does not address a node of the tree
    #[error("No node at path {path}")]
    InvalidPath { path: String },

    /// The tree violates containment or sibling non-overlap
    #[error("Invalid graph: {reason}")]
    InvalidGraph { reason: String },

    // ===== Session Errors =====
    /// Commit or cancel without an active preview
    #[error("No preview is active")]
    NoPreview,

    /// A preview is already in progress
    #[error("A preview is already active")]
    PreviewActive,

    /// The operation belongs to the other editing mode
    #[error("Operation {op} requires {expected} mode")]
    WrongMode { op: String, expected: String },

    /// Proof step index outside the history
    #[error("Proof step {index} is out of range (history has {len} steps)")]
    StepOutOfRange { index: usize, len: usize },

    /// Configuration value rejected
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

/// Conversion from AegError to ExError
///
/// Classifies each error into the stable kind taxonomy so that logging and
/// external callers can match on codes rather than messages.
impl From<AegError> for ExError {
    fn from(err: AegError) -> Self {
        let message = err.to_string();
        match err {
            AegError::InvalidGeometry { .. } => {
                ExError::new(ExErrorKind::InvalidGeometry).with_message(message)
            }

            AegError::InvalidIdentifier { .. } => {
                ExError::new(ExErrorKind::InvalidIdentifier).with_message(message)
            }

            AegError::InsertConflict { target, .. } => ExError::new(ExErrorKind::InsertConflict)
                .with_op("insert")
                .with_node_path(target)
                .with_message(message),

            AegError::SheetNotInsertable => ExError::new(ExErrorKind::InvalidInput)
                .with_op("insert")
                .with_message(message),

            AegError::PointNotCovered { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("get_lowest_parent")
                .with_message(message),

            AegError::NoNodeAtPoint { .. } => {
                ExError::new(ExErrorKind::NotFound).with_message(message)
            }

            AegError::InvalidPath { path } => ExError::new(ExErrorKind::NotFound)
                .with_node_path(path)
                .with_message("No node at path"),

            AegError::InvalidGraph { .. } => {
                ExError::new(ExErrorKind::InvariantViolation).with_message(message)
            }

            AegError::NoPreview | AegError::PreviewActive | AegError::WrongMode { .. } => {
                ExError::new(ExErrorKind::IllegalState).with_message(message)
            }

            AegError::StepOutOfRange { index, .. } => ExError::new(ExErrorKind::OutOfRange)
                .with_step(index)
                .with_message(message),

            AegError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }
        }
    }
}
