use thiserror::Error;

/// Errors that can occur when building Cognito Identity Provider model values.
///
/// The model layer has exactly two failure modes; everything else about
/// these types is total. Constraint validation (lengths, patterns, numeric
/// ranges) is performed by the service, not here.
#[derive(Debug, Error)]
pub enum CognitoError {
    /// A map-entry convenience method was called with a key that is already
    /// present. The first insertion wins; the map is left unmodified.
    #[error("duplicate key `{key}` for map field {field}")]
    DuplicateKey {
        field: &'static str,
        key: String,
    },

    /// A string is not part of the wire vocabulary of an enumeration.
    #[error("`{value}` is not a valid {kind} value")]
    UnknownEnumValue {
        kind: &'static str,
        value: String,
    },
}

/// A specialized Result type for model operations.
pub type Result<T> = std::result::Result<T, CognitoError>;
