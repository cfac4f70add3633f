//! Request types for the Cognito Identity Provider operations.
//!
//! Requests are built by the caller: start from `Default`, then chain
//! `with_*` (replace a field) and `add_*` (append to a list) methods, or
//! use struct-literal syntax directly — the fields are public. A field left
//! `None` is omitted from the marshalled request and the service applies
//! its default.
//!
//! The map-valued fields (`user_pool_tags`, `client_metadata`) additionally
//! carry `add_*_entry` / `clear_*_entries` conveniences. Entry insertion is
//! the one fallible operation in this crate: inserting a key that is
//! already present returns [`CognitoError::DuplicateKey`] and leaves the
//! map untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{
    AliasAttributeType, DeletionProtectionType, DeliveryMediumType, ExplicitAuthFlowsType,
    MessageActionType, OAuthFlowType, PreventUserExistenceErrorTypes, UserPoolMfaType,
    UsernameAttributeType, VerifiedAttributeType,
};
use crate::error::{CognitoError, Result};
use crate::text::display_fields;
use crate::types::{
    AnalyticsConfigurationType, AttributeType, TokenValidityUnitsType, UserPoolPolicyType,
};

fn insert_unique(
    map: &mut Option<BTreeMap<String, String>>,
    field: &'static str,
    key: String,
    value: String,
) -> Result<()> {
    let entries = map.get_or_insert_with(BTreeMap::new);
    if entries.contains_key(&key) {
        return Err(CognitoError::DuplicateKey { field, key });
    }
    entries.insert(key, value);
    Ok(())
}

/// Request to create a new user pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserPoolRequest {
    /// A name for the pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_name: Option<String>,

    /// The pool's policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<UserPoolPolicyType>,

    /// Whether the pool is protected from accidental deletion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<DeletionProtectionType>,

    /// Attributes to verify automatically on sign-up.
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

    /// Tags to assign to the pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_tags: Option<BTreeMap<String, String>>,
}

impl CreateUserPoolRequest {
    /// Sets the pool name.
    pub fn with_pool_name(mut self, name: impl Into<String>) -> Self {
        self.pool_name = Some(name.into());
        self
    }

    /// Sets the pool policies.
    pub fn with_policies(mut self, policies: UserPoolPolicyType) -> Self {
        self.policies = Some(policies);
        self
    }

    /// Sets the deletion protection state.
    pub fn with_deletion_protection(mut self, protection: DeletionProtectionType) -> Self {
        self.deletion_protection = Some(protection);
        self
    }

    /// Replaces the auto-verified attributes.
    pub fn with_auto_verified_attributes(
        mut self,
        attributes: impl IntoIterator<Item = VerifiedAttributeType>,
    ) -> Self {
        self.auto_verified_attributes = Some(attributes.into_iter().collect());
        self
    }

    /// Appends one auto-verified attribute, initializing the list if absent.
    pub fn add_auto_verified_attribute(mut self, attribute: VerifiedAttributeType) -> Self {
        self.auto_verified_attributes
            .get_or_insert_with(Vec::new)
            .push(attribute);
        self
    }

    /// Replaces the alias attributes.
    pub fn with_alias_attributes(
        mut self,
        attributes: impl IntoIterator<Item = AliasAttributeType>,
    ) -> Self {
        self.alias_attributes = Some(attributes.into_iter().collect());
        self
    }

    /// Appends one alias attribute, initializing the list if absent.
    pub fn add_alias_attribute(mut self, attribute: AliasAttributeType) -> Self {
        self.alias_attributes
            .get_or_insert_with(Vec::new)
            .push(attribute);
        self
    }

    /// Replaces the username attributes.
    pub fn with_username_attributes(
        mut self,
        attributes: impl IntoIterator<Item = UsernameAttributeType>,
    ) -> Self {
        self.username_attributes = Some(attributes.into_iter().collect());
        self
    }

    /// Appends one username attribute, initializing the list if absent.
    pub fn add_username_attribute(mut self, attribute: UsernameAttributeType) -> Self {
        self.username_attributes
            .get_or_insert_with(Vec::new)
            .push(attribute);
        self
    }

    /// Sets the legacy SMS verification message.
    pub fn with_sms_verification_message(mut self, message: impl Into<String>) -> Self {
        self.sms_verification_message = Some(message.into());
        self
    }

    /// Sets the legacy email verification message.
    pub fn with_email_verification_message(mut self, message: impl Into<String>) -> Self {
        self.email_verification_message = Some(message.into());
        self
    }

    /// Sets the legacy email verification subject.
    pub fn with_email_verification_subject(mut self, subject: impl Into<String>) -> Self {
        self.email_verification_subject = Some(subject.into());
        self
    }

    /// Sets the MFA enforcement.
    pub fn with_mfa_configuration(mut self, mfa: UserPoolMfaType) -> Self {
        self.mfa_configuration = Some(mfa);
        self
    }

    /// Replaces the pool tags.
    pub fn with_user_pool_tags<K, V>(mut self, tags: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.user_pool_tags = Some(
            tags.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Adds one pool tag, initializing the map if absent.
    ///
    /// Fails with [`CognitoError::DuplicateKey`] if the key is already
    /// present; the map is left unmodified.
    pub fn add_user_pool_tags_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        insert_unique(
            &mut self.user_pool_tags,
            "UserPoolTags",
            key.into(),
            value.into(),
        )
    }

    /// Removes all pool tags, resetting the field to absent.
    pub fn clear_user_pool_tags_entries(&mut self) {
        self.user_pool_tags = None;
    }
}

display_fields!(CreateUserPoolRequest {
    "PoolName" => pool_name,
    "Policies" => policies,
    "DeletionProtection" => deletion_protection,
    "AutoVerifiedAttributes" => auto_verified_attributes,
    "AliasAttributes" => alias_attributes,
    "UsernameAttributes" => username_attributes,
    "SmsVerificationMessage" => sms_verification_message,
    "EmailVerificationMessage" => email_verification_message,
    "EmailVerificationSubject" => email_verification_subject,
    "MfaConfiguration" => mfa_configuration,
    "UserPoolTags" => user_pool_tags,
});

/// Request to update an existing user pool's settings.
///
/// A field left absent keeps its current value on the pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserPoolRequest {
    /// The pool to update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The pool's policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<UserPoolPolicyType>,

    /// Whether the pool is protected from accidental deletion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<DeletionProtectionType>,

    /// Attributes to verify automatically on sign-up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_verified_attributes: Option<Vec<VerifiedAttributeType>>,

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

    /// Tags to assign to the pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_tags: Option<BTreeMap<String, String>>,
}

impl UpdateUserPoolRequest {
    /// Sets the pool to update.
    pub fn with_user_pool_id(mut self, id: impl Into<String>) -> Self {
        self.user_pool_id = Some(id.into());
        self
    }

    /// Sets the pool policies.
    pub fn with_policies(mut self, policies: UserPoolPolicyType) -> Self {
        self.policies = Some(policies);
        self
    }

    /// Sets the deletion protection state.
    pub fn with_deletion_protection(mut self, protection: DeletionProtectionType) -> Self {
        self.deletion_protection = Some(protection);
        self
    }

    /// Replaces the auto-verified attributes.
    pub fn with_auto_verified_attributes(
        mut self,
        attributes: impl IntoIterator<Item = VerifiedAttributeType>,
    ) -> Self {
        self.auto_verified_attributes = Some(attributes.into_iter().collect());
        self
    }

    /// Appends one auto-verified attribute, initializing the list if absent.
    pub fn add_auto_verified_attribute(mut self, attribute: VerifiedAttributeType) -> Self {
        self.auto_verified_attributes
            .get_or_insert_with(Vec::new)
            .push(attribute);
        self
    }

    /// Sets the MFA enforcement.
    pub fn with_mfa_configuration(mut self, mfa: UserPoolMfaType) -> Self {
        self.mfa_configuration = Some(mfa);
        self
    }

    /// Replaces the pool tags.
    pub fn with_user_pool_tags<K, V>(mut self, tags: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.user_pool_tags = Some(
            tags.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Adds one pool tag, initializing the map if absent.
    ///
    /// Fails with [`CognitoError::DuplicateKey`] if the key is already
    /// present; the map is left unmodified.
    pub fn add_user_pool_tags_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        insert_unique(
            &mut self.user_pool_tags,
            "UserPoolTags",
            key.into(),
            value.into(),
        )
    }

    /// Removes all pool tags, resetting the field to absent.
    pub fn clear_user_pool_tags_entries(&mut self) {
        self.user_pool_tags = None;
    }
}

display_fields!(UpdateUserPoolRequest {
    "UserPoolId" => user_pool_id,
    "Policies" => policies,
    "DeletionProtection" => deletion_protection,
    "AutoVerifiedAttributes" => auto_verified_attributes,
    "SmsVerificationMessage" => sms_verification_message,
    "EmailVerificationMessage" => email_verification_message,
    "EmailVerificationSubject" => email_verification_subject,
    "MfaConfiguration" => mfa_configuration,
    "UserPoolTags" => user_pool_tags,
});

/// Request to delete a user pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteUserPoolRequest {
    /// The pool to delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
}

impl DeleteUserPoolRequest {
    /// Sets the pool to delete.
    pub fn with_user_pool_id(mut self, id: impl Into<String>) -> Self {
        self.user_pool_id = Some(id.into());
        self
    }
}

display_fields!(DeleteUserPoolRequest {
    "UserPoolId" => user_pool_id,
});

/// Request to describe a user pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserPoolRequest {
    /// The pool to describe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
}

impl DescribeUserPoolRequest {
    /// Sets the pool to describe.
    pub fn with_user_pool_id(mut self, id: impl Into<String>) -> Self {
        self.user_pool_id = Some(id.into());
        self
    }
}

display_fields!(DescribeUserPoolRequest {
    "UserPoolId" => user_pool_id,
});

/// Request to list the user pools of the account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserPoolsRequest {
    /// Continuation token from a previous listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Maximum number of pools to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListUserPoolsRequest {
    /// Sets the continuation token.
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }

    /// Sets the page size.
    pub fn with_max_results(mut self, max: i32) -> Self {
        self.max_results = Some(max);
        self
    }
}

display_fields!(ListUserPoolsRequest {
    "NextToken" => next_token,
    "MaxResults" => max_results,
});

/// Request to create an app client in a user pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserPoolClientRequest {
    /// The pool to create the client in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The client name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    /// Whether to generate a client secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_secret: Option<bool>,

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

    /// Identity providers supported by the client.
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

impl CreateUserPoolClientRequest {
    /// Sets the pool to create the client in.
    pub fn with_user_pool_id(mut self, id: impl Into<String>) -> Self {
        self.user_pool_id = Some(id.into());
        self
    }

    /// Sets the client name.
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }

    /// Sets whether to generate a client secret.
    pub fn with_generate_secret(mut self, generate: bool) -> Self {
        self.generate_secret = Some(generate);
        self
    }

    /// Sets the refresh token validity period.
    pub fn with_refresh_token_validity(mut self, validity: i32) -> Self {
        self.refresh_token_validity = Some(validity);
        self
    }

    /// Sets the access token validity period.
    pub fn with_access_token_validity(mut self, validity: i32) -> Self {
        self.access_token_validity = Some(validity);
        self
    }

    /// Sets the ID token validity period.
    pub fn with_id_token_validity(mut self, validity: i32) -> Self {
        self.id_token_validity = Some(validity);
        self
    }

    /// Sets the units for the validity periods.
    pub fn with_token_validity_units(mut self, units: TokenValidityUnitsType) -> Self {
        self.token_validity_units = Some(units);
        self
    }

    /// Replaces the readable attributes.
    pub fn with_read_attributes(
        mut self,
        attributes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.read_attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one readable attribute, initializing the list if absent.
    pub fn add_read_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.read_attributes
            .get_or_insert_with(Vec::new)
            .push(attribute.into());
        self
    }

    /// Replaces the writable attributes.
    pub fn with_write_attributes(
        mut self,
        attributes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.write_attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one writable attribute, initializing the list if absent.
    pub fn add_write_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.write_attributes
            .get_or_insert_with(Vec::new)
            .push(attribute.into());
        self
    }

    /// Replaces the allowed authentication flows.
    pub fn with_explicit_auth_flows(
        mut self,
        flows: impl IntoIterator<Item = ExplicitAuthFlowsType>,
    ) -> Self {
        self.explicit_auth_flows = Some(flows.into_iter().collect());
        self
    }

    /// Appends one allowed authentication flow, initializing the list if
    /// absent.
    pub fn add_explicit_auth_flow(mut self, flow: ExplicitAuthFlowsType) -> Self {
        self.explicit_auth_flows
            .get_or_insert_with(Vec::new)
            .push(flow);
        self
    }

    /// Replaces the supported identity providers.
    pub fn with_supported_identity_providers(
        mut self,
        providers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.supported_identity_providers =
            Some(providers.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one supported identity provider, initializing the list if
    /// absent.
    pub fn add_supported_identity_provider(mut self, provider: impl Into<String>) -> Self {
        self.supported_identity_providers
            .get_or_insert_with(Vec::new)
            .push(provider.into());
        self
    }

    /// Replaces the callback URLs.
    pub fn with_callback_urls(
        mut self,
        urls: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.callback_urls = Some(urls.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one callback URL, initializing the list if absent.
    pub fn add_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_urls
            .get_or_insert_with(Vec::new)
            .push(url.into());
        self
    }

    /// Replaces the sign-out URLs.
    pub fn with_logout_urls(mut self, urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.logout_urls = Some(urls.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one sign-out URL, initializing the list if absent.
    pub fn add_logout_url(mut self, url: impl Into<String>) -> Self {
        self.logout_urls
            .get_or_insert_with(Vec::new)
            .push(url.into());
        self
    }

    /// Sets the default redirect URI.
    pub fn with_default_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.default_redirect_uri = Some(uri.into());
        self
    }

    /// Replaces the allowed OAuth grant kinds.
    pub fn with_allowed_o_auth_flows(
        mut self,
        flows: impl IntoIterator<Item = OAuthFlowType>,
    ) -> Self {
        self.allowed_o_auth_flows = Some(flows.into_iter().collect());
        self
    }

    /// Appends one allowed OAuth grant kind, initializing the list if
    /// absent.
    pub fn add_allowed_o_auth_flow(mut self, flow: OAuthFlowType) -> Self {
        self.allowed_o_auth_flows
            .get_or_insert_with(Vec::new)
            .push(flow);
        self
    }

    /// Replaces the allowed OAuth scopes.
    pub fn with_allowed_o_auth_scopes(
        mut self,
        scopes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.allowed_o_auth_scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one allowed OAuth scope, initializing the list if absent.
    pub fn add_allowed_o_auth_scope(mut self, scope: impl Into<String>) -> Self {
        self.allowed_o_auth_scopes
            .get_or_insert_with(Vec::new)
            .push(scope.into());
        self
    }

    /// Sets whether the client may use the configured OAuth features.
    pub fn with_allowed_o_auth_flows_user_pool_client(mut self, allowed: bool) -> Self {
        self.allowed_o_auth_flows_user_pool_client = Some(allowed);
        self
    }

    /// Sets the analytics configuration.
    pub fn with_analytics_configuration(mut self, config: AnalyticsConfigurationType) -> Self {
        self.analytics_configuration = Some(config);
        self
    }

    /// Sets whether sign-in errors reveal user existence.
    pub fn with_prevent_user_existence_errors(
        mut self,
        setting: PreventUserExistenceErrorTypes,
    ) -> Self {
        self.prevent_user_existence_errors = Some(setting);
        self
    }

    /// Sets whether refresh token revocation is enabled.
    pub fn with_enable_token_revocation(mut self, enabled: bool) -> Self {
        self.enable_token_revocation = Some(enabled);
        self
    }
}

display_fields!(CreateUserPoolClientRequest {
    "UserPoolId" => user_pool_id,
    "ClientName" => client_name,
    "GenerateSecret" => generate_secret,
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

/// Request to update an app client's settings.
///
/// A field left absent keeps its current value on the client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserPoolClientRequest {
    /// The pool the client belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The client to update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// The client name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

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

    /// Identity providers supported by the client.
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

impl UpdateUserPoolClientRequest {
    /// Sets the pool the client belongs to.
    pub fn with_user_pool_id(mut self, id: impl Into<String>) -> Self {
        self.user_pool_id = Some(id.into());
        self
    }

    /// Sets the client to update.
    pub fn with_client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }

    /// Sets the client name.
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }

    /// Sets the refresh token validity period.
    pub fn with_refresh_token_validity(mut self, validity: i32) -> Self {
        self.refresh_token_validity = Some(validity);
        self
    }

    /// Sets the access token validity period.
    pub fn with_access_token_validity(mut self, validity: i32) -> Self {
        self.access_token_validity = Some(validity);
        self
    }

    /// Sets the ID token validity period.
    pub fn with_id_token_validity(mut self, validity: i32) -> Self {
        self.id_token_validity = Some(validity);
        self
    }

    /// Sets the units for the validity periods.
    pub fn with_token_validity_units(mut self, units: TokenValidityUnitsType) -> Self {
        self.token_validity_units = Some(units);
        self
    }

    /// Replaces the readable attributes.
    pub fn with_read_attributes(
        mut self,
        attributes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.read_attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one readable attribute, initializing the list if absent.
    pub fn add_read_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.read_attributes
            .get_or_insert_with(Vec::new)
            .push(attribute.into());
        self
    }

    /// Replaces the writable attributes.
    pub fn with_write_attributes(
        mut self,
        attributes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.write_attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one writable attribute, initializing the list if absent.
    pub fn add_write_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.write_attributes
            .get_or_insert_with(Vec::new)
            .push(attribute.into());
        self
    }

    /// Replaces the allowed authentication flows.
    pub fn with_explicit_auth_flows(
        mut self,
        flows: impl IntoIterator<Item = ExplicitAuthFlowsType>,
    ) -> Self {
        self.explicit_auth_flows = Some(flows.into_iter().collect());
        self
    }

    /// Appends one allowed authentication flow, initializing the list if
    /// absent.
    pub fn add_explicit_auth_flow(mut self, flow: ExplicitAuthFlowsType) -> Self {
        self.explicit_auth_flows
            .get_or_insert_with(Vec::new)
            .push(flow);
        self
    }

    /// Replaces the supported identity providers.
    pub fn with_supported_identity_providers(
        mut self,
        providers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.supported_identity_providers =
            Some(providers.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one supported identity provider, initializing the list if
    /// absent.
    pub fn add_supported_identity_provider(mut self, provider: impl Into<String>) -> Self {
        self.supported_identity_providers
            .get_or_insert_with(Vec::new)
            .push(provider.into());
        self
    }

    /// Replaces the callback URLs.
    pub fn with_callback_urls(
        mut self,
        urls: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.callback_urls = Some(urls.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one callback URL, initializing the list if absent.
    pub fn add_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_urls
            .get_or_insert_with(Vec::new)
            .push(url.into());
        self
    }

    /// Replaces the sign-out URLs.
    pub fn with_logout_urls(mut self, urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.logout_urls = Some(urls.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one sign-out URL, initializing the list if absent.
    pub fn add_logout_url(mut self, url: impl Into<String>) -> Self {
        self.logout_urls
            .get_or_insert_with(Vec::new)
            .push(url.into());
        self
    }

    /// Sets the default redirect URI.
    pub fn with_default_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.default_redirect_uri = Some(uri.into());
        self
    }

    /// Replaces the allowed OAuth grant kinds.
    pub fn with_allowed_o_auth_flows(
        mut self,
        flows: impl IntoIterator<Item = OAuthFlowType>,
    ) -> Self {
        self.allowed_o_auth_flows = Some(flows.into_iter().collect());
        self
    }

    /// Appends one allowed OAuth grant kind, initializing the list if
    /// absent.
    pub fn add_allowed_o_auth_flow(mut self, flow: OAuthFlowType) -> Self {
        self.allowed_o_auth_flows
            .get_or_insert_with(Vec::new)
            .push(flow);
        self
    }

    /// Replaces the allowed OAuth scopes.
    pub fn with_allowed_o_auth_scopes(
        mut self,
        scopes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.allowed_o_auth_scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one allowed OAuth scope, initializing the list if absent.
    pub fn add_allowed_o_auth_scope(mut self, scope: impl Into<String>) -> Self {
        self.allowed_o_auth_scopes
            .get_or_insert_with(Vec::new)
            .push(scope.into());
        self
    }

    /// Sets whether the client may use the configured OAuth features.
    pub fn with_allowed_o_auth_flows_user_pool_client(mut self, allowed: bool) -> Self {
        self.allowed_o_auth_flows_user_pool_client = Some(allowed);
        self
    }

    /// Sets the analytics configuration.
    pub fn with_analytics_configuration(mut self, config: AnalyticsConfigurationType) -> Self {
        self.analytics_configuration = Some(config);
        self
    }

    /// Sets whether sign-in errors reveal user existence.
    pub fn with_prevent_user_existence_errors(
        mut self,
        setting: PreventUserExistenceErrorTypes,
    ) -> Self {
        self.prevent_user_existence_errors = Some(setting);
        self
    }

    /// Sets whether refresh token revocation is enabled.
    pub fn with_enable_token_revocation(mut self, enabled: bool) -> Self {
        self.enable_token_revocation = Some(enabled);
        self
    }
}

display_fields!(UpdateUserPoolClientRequest {
    "UserPoolId" => user_pool_id,
    "ClientId" => client_id,
    "ClientName" => client_name,
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

/// Request to describe an app client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserPoolClientRequest {
    /// The pool the client belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The client to describe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl DescribeUserPoolClientRequest {
    /// Sets the pool the client belongs to.
    pub fn with_user_pool_id(mut self, id: impl Into<String>) -> Self {
        self.user_pool_id = Some(id.into());
        self
    }

    /// Sets the client to describe.
    pub fn with_client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }
}

display_fields!(DescribeUserPoolClientRequest {
    "UserPoolId" => user_pool_id,
    "ClientId" => client_id,
});

/// Request to delete an app client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteUserPoolClientRequest {
    /// The pool the client belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The client to delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl DeleteUserPoolClientRequest {
    /// Sets the pool the client belongs to.
    pub fn with_user_pool_id(mut self, id: impl Into<String>) -> Self {
        self.user_pool_id = Some(id.into());
        self
    }

    /// Sets the client to delete.
    pub fn with_client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }
}

display_fields!(DeleteUserPoolClientRequest {
    "UserPoolId" => user_pool_id,
    "ClientId" => client_id,
});

/// Request to list the app clients of a user pool.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserPoolClientsRequest {
    /// The pool whose clients to list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// Maximum number of clients to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Continuation token from a previous listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListUserPoolClientsRequest {
    /// Sets the pool whose clients to list.
    pub fn with_user_pool_id(mut self, id: impl Into<String>) -> Self {
        self.user_pool_id = Some(id.into());
        self
    }

    /// Sets the page size.
    pub fn with_max_results(mut self, max: i32) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Sets the continuation token.
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

display_fields!(ListUserPoolClientsRequest {
    "UserPoolId" => user_pool_id,
    "MaxResults" => max_results,
    "NextToken" => next_token,
});

/// Request for the attributes of the user who owns an access token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserRequest {
    /// A valid access token for the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl GetUserRequest {
    /// Sets the access token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

display_fields!(GetUserRequest {
    "AccessToken" => access_token,
});

/// Request to create a user as an administrator.
///
/// The new user receives an invitation over the desired delivery mediums
/// unless the message action suppresses it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminCreateUserRequest {
    /// The pool to create the user in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The username; cannot be changed after creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Attributes to set on the new user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attributes: Option<Vec<AttributeType>>,

    /// Temporary data passed to pre-sign-up triggers; not persisted on the
    /// user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_data: Option<Vec<AttributeType>>,

    /// The user's temporary password; one is generated when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary_password: Option<String>,

    /// Whether to reassign an alias already held by another user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_alias_creation: Option<bool>,

    /// What to do about the invitation when the user already exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_action: Option<MessageActionType>,

    /// Channels to deliver the invitation over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_delivery_mediums: Option<Vec<DeliveryMediumType>>,

    /// Custom key-value pairs passed to the pre-sign-up trigger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_metadata: Option<BTreeMap<String, String>>,
}

impl AdminCreateUserRequest {
    /// Sets the pool to create the user in.
    pub fn with_user_pool_id(mut self, id: impl Into<String>) -> Self {
        self.user_pool_id = Some(id.into());
        self
    }

    /// Sets the username.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Replaces the user attributes.
    pub fn with_user_attributes(
        mut self,
        attributes: impl IntoIterator<Item = AttributeType>,
    ) -> Self {
        self.user_attributes = Some(attributes.into_iter().collect());
        self
    }

    /// Appends one user attribute, initializing the list if absent.
    pub fn add_user_attribute(mut self, attribute: AttributeType) -> Self {
        self.user_attributes
            .get_or_insert_with(Vec::new)
            .push(attribute);
        self
    }

    /// Replaces the validation data.
    pub fn with_validation_data(
        mut self,
        data: impl IntoIterator<Item = AttributeType>,
    ) -> Self {
        self.validation_data = Some(data.into_iter().collect());
        self
    }

    /// Appends one validation data entry, initializing the list if absent.
    pub fn add_validation_data(mut self, data: AttributeType) -> Self {
        self.validation_data
            .get_or_insert_with(Vec::new)
            .push(data);
        self
    }

    /// Sets the temporary password.
    pub fn with_temporary_password(mut self, password: impl Into<String>) -> Self {
        self.temporary_password = Some(password.into());
        self
    }

    /// Sets whether to reassign an alias already held by another user.
    pub fn with_force_alias_creation(mut self, force: bool) -> Self {
        self.force_alias_creation = Some(force);
        self
    }

    /// Sets the invitation message action.
    pub fn with_message_action(mut self, action: MessageActionType) -> Self {
        self.message_action = Some(action);
        self
    }

    /// Replaces the delivery mediums.
    pub fn with_desired_delivery_mediums(
        mut self,
        mediums: impl IntoIterator<Item = DeliveryMediumType>,
    ) -> Self {
        self.desired_delivery_mediums = Some(mediums.into_iter().collect());
        self
    }

    /// Appends one delivery medium, initializing the list if absent.
    pub fn add_desired_delivery_medium(mut self, medium: DeliveryMediumType) -> Self {
        self.desired_delivery_mediums
            .get_or_insert_with(Vec::new)
            .push(medium);
        self
    }

    /// Replaces the client metadata.
    pub fn with_client_metadata<K, V>(
        mut self,
        metadata: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.client_metadata = Some(
            metadata
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Adds one client metadata entry, initializing the map if absent.
    ///
    /// Fails with [`CognitoError::DuplicateKey`] if the key is already
    /// present; the map is left unmodified.
    pub fn add_client_metadata_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        insert_unique(
            &mut self.client_metadata,
            "ClientMetadata",
            key.into(),
            value.into(),
        )
    }

    /// Removes all client metadata, resetting the field to absent.
    pub fn clear_client_metadata_entries(&mut self) {
        self.client_metadata = None;
    }
}

display_fields!(AdminCreateUserRequest {
    "UserPoolId" => user_pool_id,
    "Username" => username,
    "UserAttributes" => user_attributes,
    "ValidationData" => validation_data,
    "TemporaryPassword" => temporary_password,
    "ForceAliasCreation" => force_alias_creation,
    "MessageAction" => message_action,
    "DesiredDeliveryMediums" => desired_delivery_mediums,
    "ClientMetadata" => client_metadata,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::TimeUnitsType;

    #[test]
    fn with_chain_stores_every_field() {
        let request = CreateUserPoolClientRequest::default()
            .with_user_pool_id("us-east-1_EXAMPLE")
            .with_client_name("portal")
            .with_generate_secret(true)
            .with_refresh_token_validity(30)
            .with_token_validity_units(
                TokenValidityUnitsType::default().with_refresh_token(TimeUnitsType::Days),
            )
            .with_callback_urls(["https://example.com/cb"])
            .with_allowed_o_auth_flows([OAuthFlowType::Code])
            .with_prevent_user_existence_errors(PreventUserExistenceErrorTypes::Enabled);

        assert_eq!(request.user_pool_id.as_deref(), Some("us-east-1_EXAMPLE"));
        assert_eq!(request.client_name.as_deref(), Some("portal"));
        assert_eq!(request.generate_secret, Some(true));
        assert_eq!(request.refresh_token_validity, Some(30));
        assert_eq!(
            request.token_validity_units,
            Some(TokenValidityUnitsType::default().with_refresh_token(TimeUnitsType::Days))
        );
        assert_eq!(
            request.callback_urls,
            Some(vec!["https://example.com/cb".to_string()])
        );
        assert_eq!(request.allowed_o_auth_flows, Some(vec![OAuthFlowType::Code]));
        assert_eq!(
            request.prevent_user_existence_errors,
            Some(PreventUserExistenceErrorTypes::Enabled)
        );
        assert!(request.client_name.is_some());
        assert!(request.access_token_validity.is_none());
    }

    #[test]
    fn add_appends_in_call_order_from_absent() {
        let request = CreateUserPoolClientRequest::default()
            .add_callback_url("https://a.example.com")
            .add_callback_url("https://b.example.com");
        assert_eq!(
            request.callback_urls,
            Some(vec![
                "https://a.example.com".to_string(),
                "https://b.example.com".to_string(),
            ])
        );
    }

    #[test]
    fn with_empty_collection_is_present_and_empty() {
        let request =
            CreateUserPoolClientRequest::default().with_read_attributes(Vec::<String>::new());
        assert_eq!(request.read_attributes, Some(vec![]));
        assert_ne!(request, CreateUserPoolClientRequest::default());
    }

    #[test]
    fn stored_collection_does_not_alias_caller_storage() {
        let mut urls = vec!["https://example.com/cb".to_string()];
        let request = CreateUserPoolClientRequest::default().with_callback_urls(urls.clone());

        urls.push("https://evil.example.com".to_string());
        assert_eq!(
            request.callback_urls,
            Some(vec!["https://example.com/cb".to_string()])
        );
    }

    #[test]
    fn duplicate_tag_key_is_rejected_and_map_unchanged() {
        let mut request = CreateUserPoolRequest::default().with_pool_name("test-pool");
        request.add_user_pool_tags_entry("env", "prod").unwrap();

        let err = request.add_user_pool_tags_entry("env", "staging").unwrap_err();
        match err {
            CognitoError::DuplicateKey { field, key } => {
                assert_eq!(field, "UserPoolTags");
                assert_eq!(key, "env");
            }
            other => panic!("expected DuplicateKey, got: {:?}", other),
        }

        let tags = request.user_pool_tags.as_ref().unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get("env").map(String::as_str), Some("prod"));
    }

    #[test]
    fn clear_entries_resets_to_absent() {
        let mut request = AdminCreateUserRequest::default();
        request.add_client_metadata_entry("source", "import").unwrap();
        assert!(request.client_metadata.is_some());

        request.clear_client_metadata_entries();
        assert!(request.client_metadata.is_none(), "absent, not empty");
    }

    #[test]
    fn enum_setter_stores_canonical_wire_string() {
        let request =
            CreateUserPoolRequest::default().with_mfa_configuration(UserPoolMfaType::On);
        assert_eq!(request.mfa_configuration.unwrap().as_str(), "ON");
    }

    #[test]
    fn display_renders_present_fields_in_declaration_order() {
        let request = CreateUserPoolRequest::default()
            .with_pool_name("test-pool")
            .with_auto_verified_attributes([
                VerifiedAttributeType::Email,
                VerifiedAttributeType::PhoneNumber,
            ]);
        assert_eq!(
            request.to_string(),
            "{PoolName: test-pool,AutoVerifiedAttributes: [email, phone_number]}"
        );
    }

    #[test]
    fn display_of_empty_request_is_braces() {
        assert_eq!(GetUserRequest::default().to_string(), "{}");
    }

    #[test]
    fn serialization_omits_absent_fields_and_uses_wire_names() {
        let request = UpdateUserPoolClientRequest::default()
            .with_user_pool_id("us-east-1_EXAMPLE")
            .with_client_id("abc123")
            .with_callback_urls(["https://example.com/cb"])
            .with_default_redirect_uri("https://example.com/cb");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["UserPoolId"], "us-east-1_EXAMPLE");
        assert_eq!(json["ClientId"], "abc123");
        assert_eq!(json["CallbackURLs"][0], "https://example.com/cb");
        assert_eq!(json["DefaultRedirectURI"], "https://example.com/cb");
        assert!(json.get("ClientName").is_none());
        assert!(json.get("ReadAttributes").is_none());
    }

    #[test]
    fn admin_create_user_serializes_nested_attributes() {
        let request = AdminCreateUserRequest::default()
            .with_user_pool_id("us-east-1_EXAMPLE")
            .with_username("alice")
            .add_user_attribute(AttributeType::new("email", "alice@example.com"))
            .with_desired_delivery_mediums([DeliveryMediumType::Email])
            .with_message_action(MessageActionType::Suppress);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Username"], "alice");
        assert_eq!(json["UserAttributes"][0]["Name"], "email");
        assert_eq!(json["UserAttributes"][0]["Value"], "alice@example.com");
        assert_eq!(json["DesiredDeliveryMediums"][0], "EMAIL");
        assert_eq!(json["MessageAction"], "SUPPRESS");
    }

    #[test]
    fn equality_distinguishes_absent_from_set() {
        let base = ListUserPoolClientsRequest::default().with_user_pool_id("us-east-1_EXAMPLE");
        let with_page = base.clone().with_max_results(10);
        assert_ne!(base, with_page);
        assert_eq!(
            with_page,
            ListUserPoolClientsRequest::default()
                .with_user_pool_id("us-east-1_EXAMPLE")
                .with_max_results(10)
        );
    }
}
