//! Shared model types nested inside requests and responses.
//!
//! These are plain value types: every field is independently optional
//! (`None` means the caller left it unspecified, or the service did not
//! return it), equality is field-wise, and `Display` renders the present
//! fields under their wire names.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{
    AliasAttributeType, DeletionProtectionType, DeliveryMediumType, ExplicitAuthFlowsType,
    OAuthFlowType, PreventUserExistenceErrorTypes, StatusType, TimeUnitsType,
    UserPoolMfaType, UserStatusType, UsernameAttributeType, VerifiedAttributeType,
};
use crate::text::display_fields;

/// A name/value pair of a user attribute, such as `email` or a
/// `custom:`-prefixed attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeType {
    /// The attribute name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The attribute value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl AttributeType {
    /// Creates an attribute with both name and value set.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

display_fields!(AttributeType {
    "Name" => name,
    "Value" => value,
});

/// A registered MFA option for a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MfaOptionType {
    /// The delivery medium for MFA codes. Only SMS is supported here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_medium: Option<DeliveryMediumType>,

    /// The attribute the codes are delivered to, such as `phone_number`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
}

display_fields!(MfaOptionType {
    "DeliveryMedium" => delivery_medium,
    "AttributeName" => attribute_name,
});

/// The units in which a user pool client's token validity periods are
/// expressed. Each token defaults to hours when its unit is unspecified.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TokenValidityUnitsType {
    /// Unit for the access token validity period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<TimeUnitsType>,

    /// Unit for the ID token validity period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<TimeUnitsType>,

    /// Unit for the refresh token validity period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<TimeUnitsType>,
}

impl TokenValidityUnitsType {
    /// Sets the access token unit.
    pub fn with_access_token(mut self, unit: TimeUnitsType) -> Self {
        self.access_token = Some(unit);
        self
    }

    /// Sets the ID token unit.
    pub fn with_id_token(mut self, unit: TimeUnitsType) -> Self {
        self.id_token = Some(unit);
        self
    }

    /// Sets the refresh token unit.
    pub fn with_refresh_token(mut self, unit: TimeUnitsType) -> Self {
        self.refresh_token = Some(unit);
        self
    }
}

display_fields!(TokenValidityUnitsType {
    "AccessToken" => access_token,
    "IdToken" => id_token,
    "RefreshToken" => refresh_token,
});

/// Amazon Pinpoint analytics settings for a user pool client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalyticsConfigurationType {
    /// The Pinpoint project application ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    /// The ARN of the Pinpoint project. Either this or the application ID
    /// identifies the project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_arn: Option<String>,

    /// The IAM role the service assumes when publishing events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// The external ID of the role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Whether user data is included in the published events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data_shared: Option<bool>,
}

impl AnalyticsConfigurationType {
    /// Sets the Pinpoint application ID.
    pub fn with_application_id(mut self, id: impl Into<String>) -> Self {
        self.application_id = Some(id.into());
        self
    }

    /// Sets the Pinpoint project ARN.
    pub fn with_application_arn(mut self, arn: impl Into<String>) -> Self {
        self.application_arn = Some(arn.into());
        self
    }

    /// Sets the publishing role ARN.
    pub fn with_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.role_arn = Some(arn.into());
        self
    }

    /// Sets the external ID of the role.
    pub fn with_external_id(mut self, id: impl Into<String>) -> Self {
        self.external_id = Some(id.into());
        self
    }

    /// Sets whether user data is shared with the analytics project.
    pub fn with_user_data_shared(mut self, shared: bool) -> Self {
        self.user_data_shared = Some(shared);
        self
    }
}

display_fields!(AnalyticsConfigurationType {
    "ApplicationId" => application_id,
    "ApplicationArn" => application_arn,
    "RoleArn" => role_arn,
    "ExternalId" => external_id,
    "UserDataShared" => user_data_shared,
});

/// Password complexity requirements for a user pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PasswordPolicyType {
    /// Minimum password length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_length: Option<i32>,

    /// Whether at least one uppercase letter is required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_uppercase: Option<bool>,

    /// Whether at least one lowercase letter is required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_lowercase: Option<bool>,

    /// Whether at least one digit is required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_numbers: Option<bool>,

    /// Whether at least one symbol character is required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_symbols: Option<bool>,

    /// Days until an admin-assigned temporary password expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary_password_validity_days: Option<i32>,
}

impl PasswordPolicyType {
    /// Sets the minimum password length.
    pub fn with_minimum_length(mut self, length: i32) -> Self {
        self.minimum_length = Some(length);
        self
    }

    /// Sets whether an uppercase letter is required.
    pub fn with_require_uppercase(mut self, required: bool) -> Self {
        self.require_uppercase = Some(required);
        self
    }

    /// Sets whether a lowercase letter is required.
    pub fn with_require_lowercase(mut self, required: bool) -> Self {
        self.require_lowercase = Some(required);
        self
    }

    /// Sets whether a digit is required.
    pub fn with_require_numbers(mut self, required: bool) -> Self {
        self.require_numbers = Some(required);
        self
    }

    /// Sets whether a symbol character is required.
    pub fn with_require_symbols(mut self, required: bool) -> Self {
        self.require_symbols = Some(required);
        self
    }

    /// Sets the temporary password validity period in days.
    pub fn with_temporary_password_validity_days(mut self, days: i32) -> Self {
        self.temporary_password_validity_days = Some(days);
        self
    }
}

display_fields!(PasswordPolicyType {
    "MinimumLength" => minimum_length,
    "RequireUppercase" => require_uppercase,
    "RequireLowercase" => require_lowercase,
    "RequireNumbers" => require_numbers,
    "RequireSymbols" => require_symbols,
    "TemporaryPasswordValidityDays" => temporary_password_validity_days,
});

/// The policies of a user pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolPolicyType {
    /// The password complexity policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_policy: Option<PasswordPolicyType>,
}

impl UserPoolPolicyType {
    /// Sets the password policy.
    pub fn with_password_policy(mut self, policy: PasswordPolicyType) -> Self {
        self.password_policy = Some(policy);
        self
    }
}

display_fields!(UserPoolPolicyType {
    "PasswordPolicy" => password_policy,
});

/// Full description of a user pool app client, as returned by the
/// create/describe/update client operations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolClientType {
    /// The user pool the client belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The client name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    /// The client ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// The client secret, present only for clients created with one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// When the client was last modified.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_date: Option<DateTime<Utc>>,

    /// When the client was created.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<DateTime<Utc>>,

    /// Refresh token validity period, in the refresh token's unit
    /// (defaulting to days).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token_validity: Option<i32>,

    /// Access token validity period, in the access token's unit
    /// (defaulting to hours).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_validity: Option<i32>,

    /// ID token validity period, in the ID token's unit (defaulting to
    /// hours).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token_validity: Option<i32>,

    /// Units for the three validity periods above.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_validity_units: Option<TokenValidityUnitsType>,

    /// Attributes the client may read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_attributes: Option<Vec<String>>,

    /// Attributes the client may write.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_attributes: Option<Vec<String>>,

    /// Authentication flows the client may start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_auth_flows: Option<Vec<ExplicitAuthFlowsType>>,

    /// Identity providers supported by the client, such as `COGNITO` or a
    /// configured SAML provider name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_identity_providers: Option<Vec<String>>,

    /// Allowed redirect (callback) URLs for the identity providers.
    #[serde(rename = "CallbackURLs", skip_serializing_if = "Option::is_none")]
    pub callback_urls: Option<Vec<String>>,

    /// Allowed sign-out URLs for the identity providers.
    #[serde(rename = "LogoutURLs", skip_serializing_if = "Option::is_none")]
    pub logout_urls: Option<Vec<String>>,

    /// The default redirect URI; must appear in `callback_urls`.
    #[serde(rename = "DefaultRedirectURI", skip_serializing_if = "Option::is_none")]
    pub default_redirect_uri: Option<String>,

    /// OAuth grant kinds the client may use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_o_auth_flows: Option<Vec<OAuthFlowType>>,

    /// OAuth scopes the client may request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_o_auth_scopes: Option<Vec<String>>,

    /// Whether the client may use the OAuth features configured above.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_o_auth_flows_user_pool_client: Option<bool>,

    /// Pinpoint analytics settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_configuration: Option<AnalyticsConfigurationType>,

    /// Whether sign-in errors reveal user existence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_user_existence_errors: Option<PreventUserExistenceErrorTypes>,

    /// Whether revoking refresh tokens is enabled for the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_token_revocation: Option<bool>,
}

display_fields!(UserPoolClientType {
    "UserPoolId" => user_pool_id,
    "ClientName" => client_name,
    "ClientId" => client_id,
    "ClientSecret" => client_secret,
    "LastModifiedDate" => last_modified_date,
    "CreationDate" => creation_date,
    "RefreshTokenValidity" => refresh_token_validity,
    "AccessTokenValidity" => access_token_validity,
    "IdTokenValidity" => id_token_validity,
    "TokenValidityUnits" => token_validity_units,
    "ReadAttributes" => read_attributes,
    "WriteAttributes" => write_attributes,
    "ExplicitAuthFlows" => explicit_auth_flows,
    "SupportedIdentityProviders" => supported_identity_providers,
    "CallbackURLs" => callback_urls,
    "LogoutURLs" => logout_urls,
    "DefaultRedirectURI" => default_redirect_uri,
    "AllowedOAuthFlows" => allowed_o_auth_flows,
    "AllowedOAuthScopes" => allowed_o_auth_scopes,
    "AllowedOAuthFlowsUserPoolClient" => allowed_o_auth_flows_user_pool_client,
    "AnalyticsConfiguration" => analytics_configuration,
    "PreventUserExistenceErrors" => prevent_user_existence_errors,
    "EnableTokenRevocation" => enable_token_revocation,
});

/// Short description of a user pool client, as returned by
/// `ListUserPoolClients`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolClientDescription {
    /// The client ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// The user pool the client belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The client name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

display_fields!(UserPoolClientDescription {
    "ClientId" => client_id,
    "UserPoolId" => user_pool_id,
    "ClientName" => client_name,
});

/// Short description of a user pool, as returned by `ListUserPools`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolDescriptionType {
    /// The user pool ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The user pool name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The user pool status. No longer used by the service; retained for
    /// wire compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusType>,

    /// When the pool was last modified.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_date: Option<DateTime<Utc>>,

    /// When the pool was created.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<DateTime<Utc>>,
}

display_fields!(UserPoolDescriptionType {
    "Id" => id,
    "Name" => name,
    "Status" => status,
    "LastModifiedDate" => last_modified_date,
    "CreationDate" => creation_date,
});

/// Full description of a user pool, as returned by the create/describe
/// pool operations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolType {
    /// The user pool ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The user pool name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The pool's policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<UserPoolPolicyType>,

    /// Whether the pool is protected from accidental deletion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<DeletionProtectionType>,

    /// The pool status. No longer used by the service; retained for wire
    /// compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusType>,

    /// When the pool was last modified.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified_date: Option<DateTime<Utc>>,

    /// When the pool was created.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<DateTime<Utc>>,

    /// Attributes verified automatically on sign-up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_verified_attributes: Option<Vec<VerifiedAttributeType>>,

    /// Attributes usable as sign-in aliases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_attributes: Option<Vec<AliasAttributeType>>,

    /// Attributes usable as the username at sign-up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_attributes: Option<Vec<UsernameAttributeType>>,

    /// SMS verification message template. No longer used by the service;
    /// retained for wire compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_verification_message: Option<String>,

    /// Email verification message template. No longer used by the service;
    /// retained for wire compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verification_message: Option<String>,

    /// Email verification subject line. No longer used by the service;
    /// retained for wire compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verification_subject: Option<String>,

    /// MFA enforcement for the pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_configuration: Option<UserPoolMfaType>,

    /// Rough number of users in the pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_number_of_users: Option<i32>,

    /// The ARN of the user pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    /// Tags assigned to the pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_tags: Option<BTreeMap<String, String>>,
}

display_fields!(UserPoolType {
    "Id" => id,
    "Name" => name,
    "Policies" => policies,
    "DeletionProtection" => deletion_protection,
    "Status" => status,
    "LastModifiedDate" => last_modified_date,
    "CreationDate" => creation_date,
    "AutoVerifiedAttributes" => auto_verified_attributes,
    "AliasAttributes" => alias_attributes,
    "UsernameAttributes" => username_attributes,
    "SmsVerificationMessage" => sms_verification_message,
    "EmailVerificationMessage" => email_verification_message,
    "EmailVerificationSubject" => email_verification_subject,
    "MfaConfiguration" => mfa_configuration,
    "EstimatedNumberOfUsers" => estimated_number_of_users,
    "Arn" => arn,
    "UserPoolTags" => user_pool_tags,
});

/// A user of a user pool, as returned by `ListUsers` and in the
/// `AdminCreateUser` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserType {
    /// The user's username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// The user's attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeType>>,

    /// When the user was created.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_create_date: Option<DateTime<Utc>>,

    /// When the user was last modified.
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_last_modified_date: Option<DateTime<Utc>>,

    /// Whether the user is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// The user's confirmation state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<UserStatusType>,

    /// The user's registered MFA options.
    #[serde(rename = "MFAOptions", skip_serializing_if = "Option::is_none")]
    pub mfa_options: Option<Vec<MfaOptionType>>,
}

display_fields!(UserType {
    "Username" => username,
    "Attributes" => attributes,
    "UserCreateDate" => user_create_date,
    "UserLastModifiedDate" => user_last_modified_date,
    "Enabled" => enabled,
    "UserStatus" => user_status,
    "MFAOptions" => mfa_options,
});
