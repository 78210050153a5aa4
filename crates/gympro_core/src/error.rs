use std::fmt;

/// Errors raised by a key-value backend or the session store on top of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend could not be read or written
    Io(String),
    /// Stored content exists but is not in the expected shape
    Corrupt(String),
    /// A session must carry both token and role to be persisted
    IncompleteSession,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "storage I/O error: {msg}"),
            StoreError::Corrupt(msg) => write!(f, "storage content is corrupt: {msg}"),
            StoreError::IncompleteSession => {
                write!(f, "session must have both a token and a role")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Errors from the authentication gateway, shown to the user as alert text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Client-side validation failed before any request was made
    MissingFields,
    /// The server answered with a non-success status
    Rejected { operation: AuthOperation, message: String },
    /// The request never produced a usable response
    Transport(String),
    /// The success body could not be understood
    InvalidResponse(String),
}

/// Which gateway call an [`AuthError::Rejected`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOperation {
    Login,
    Register,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingFields => write!(f, "All fields are required."),
            AuthError::Rejected {
                operation: AuthOperation::Login,
                message,
            } => write!(f, "Login failed: {message}"),
            AuthError::Rejected {
                operation: AuthOperation::Register,
                message,
            } => write!(f, "Registration failed: {message}"),
            AuthError::Transport(msg) => write!(f, "Network error: {msg}"),
            AuthError::InvalidResponse(msg) => write!(f, "Unexpected server response: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Invalid navigator transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// The transition requires an authenticated navigator
    NotAuthenticated,
    /// The transition requires an unauthenticated navigator
    AlreadyAuthenticated,
    /// Drawer or tab index outside the current configuration
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::NotAuthenticated => write!(f, "navigator is not authenticated"),
            NavigationError::AlreadyAuthenticated => {
                write!(f, "navigator is already authenticated")
            }
            NavigationError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for {len} entries")
            }
        }
    }
}

impl std::error::Error for NavigationError {}
