//! Data-model types for the Amazon Cognito Identity Provider API.
//!
//! This crate is the typed, in-memory image of the service's JSON wire
//! bodies: one struct per request and response, shared descriptor types
//! such as [`UserPoolClientType`], and the closed wire-string
//! enumerations ([`UserPoolMfaType`], [`OAuthFlowType`], …). It contains
//! no transport: a client layer serializes the request types, signs and
//! sends them, and deserializes the response types back.
//!
//! Every field is optional. `None` means "unspecified" on a request (the
//! service applies its default) and "not returned" on a response, and is
//! distinct from an explicitly empty value. All types compare field-wise
//! and hash consistently with equality, so they can be used as set
//! members or map keys.
//!
//! # Quick Start
//!
//! ```
//! use cognito_idp_model::{
//!     CreateUserPoolClientRequest, OAuthFlowType, PreventUserExistenceErrorTypes,
//! };
//!
//! let request = CreateUserPoolClientRequest::default()
//!     .with_user_pool_id("us-east-1_EXAMPLE")
//!     .with_client_name("portal")
//!     .with_generate_secret(true)
//!     .add_allowed_o_auth_flow(OAuthFlowType::Code)
//!     .add_callback_url("https://example.com/cb")
//!     .with_prevent_user_existence_errors(PreventUserExistenceErrorTypes::Enabled);
//!
//! assert_eq!(request.client_name.as_deref(), Some("portal"));
//! ```
//!
//! The one fallible operation is map-entry insertion, which rejects
//! duplicate keys:
//!
//! ```
//! use cognito_idp_model::CreateUserPoolRequest;
//!
//! # fn main() -> cognito_idp_model::Result<()> {
//! let mut request = CreateUserPoolRequest::default().with_pool_name("test-pool");
//! request.add_user_pool_tags_entry("env", "prod")?;
//! assert!(request.add_user_pool_tags_entry("env", "staging").is_err());
//! # Ok(())
//! # }
//! ```

pub mod enums;
pub mod error;
pub mod request;
pub mod response;
pub mod types;

mod text;

pub use enums::{
    AliasAttributeType, DeletionProtectionType, DeliveryMediumType, ExplicitAuthFlowsType,
    MessageActionType, OAuthFlowType, PreventUserExistenceErrorTypes, StatusType, TimeUnitsType,
    UserPoolMfaType, UserStatusType, UsernameAttributeType, VerifiedAttributeType,
};
pub use error::{CognitoError, Result};
pub use request::{
    AdminCreateUserRequest, CreateUserPoolClientRequest, CreateUserPoolRequest,
    DeleteUserPoolClientRequest, DeleteUserPoolRequest, DescribeUserPoolClientRequest,
    DescribeUserPoolRequest, GetUserRequest, ListUserPoolClientsRequest, ListUserPoolsRequest,
    UpdateUserPoolClientRequest, UpdateUserPoolRequest,
};
pub use response::{
    AdminCreateUserResult, CreateUserPoolClientResult, CreateUserPoolResult,
    DescribeUserPoolClientResult, DescribeUserPoolResult, GetUserResult,
    ListUserPoolClientsResult, ListUserPoolsResult, UpdateUserPoolClientResult,
    UpdateUserPoolResult,
};
pub use types::{
    AnalyticsConfigurationType, AttributeType, MfaOptionType, PasswordPolicyType,
    TokenValidityUnitsType, UserPoolClientDescription, UserPoolClientType,
    UserPoolDescriptionType, UserPoolPolicyType, UserPoolType, UserType,
};

// Compile-time assertions: model types must be Send + Sync for use across threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<CreateUserPoolRequest>;
    let _ = assert_send_sync::<UserPoolClientType>;
    let _ = assert_send_sync::<GetUserResult>;
    let _ = assert_send_sync::<CognitoError>;
};
