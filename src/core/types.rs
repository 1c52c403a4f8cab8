//! Type aliases for domain concepts.

/// An environment variable name taken from a secrets file key.
pub type SecretKey = String;

/// A secret value already coerced to its string form.
pub type SecretValue = String;
