//! Response types for the Cognito Identity Provider operations.
//!
//! Responses are produced by deserializing the service's JSON body and are
//! read by field access. A `None` field means the service did not return
//! that value. The delete operations return empty bodies and have no
//! result types.

use serde::{Deserialize, Serialize};

use crate::text::display_fields;
use crate::types::{
    AttributeType, MfaOptionType, UserPoolClientDescription, UserPoolClientType,
    UserPoolDescriptionType, UserPoolType, UserType,
};

/// Response from `CreateUserPool`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserPoolResult {
    /// The newly created pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool: Option<UserPoolType>,
}

display_fields!(CreateUserPoolResult {
    "UserPool" => user_pool,
});

/// Response from `DescribeUserPool`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserPoolResult {
    /// The described pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool: Option<UserPoolType>,
}

display_fields!(DescribeUserPoolResult {
    "UserPool" => user_pool,
});

/// Response from `UpdateUserPool`. Carries no data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateUserPoolResult {}

display_fields!(UpdateUserPoolResult {});

/// Response from `ListUserPools`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserPoolsResult {
    /// One page of pool descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pools: Option<Vec<UserPoolDescriptionType>>,

    /// Token for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

display_fields!(ListUserPoolsResult {
    "UserPools" => user_pools,
    "NextToken" => next_token,
});

/// Response from `CreateUserPoolClient`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserPoolClientResult {
    /// The newly created client, including its generated secret when one
    /// was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_client: Option<UserPoolClientType>,
}

display_fields!(CreateUserPoolClientResult {
    "UserPoolClient" => user_pool_client,
});

/// Response from `DescribeUserPoolClient`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserPoolClientResult {
    /// The described client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_client: Option<UserPoolClientType>,
}

display_fields!(DescribeUserPoolClientResult {
    "UserPoolClient" => user_pool_client,
});

/// Response from `UpdateUserPoolClient`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserPoolClientResult {
    /// The client after the update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_client: Option<UserPoolClientType>,
}

display_fields!(UpdateUserPoolClientResult {
    "UserPoolClient" => user_pool_client,
});

/// Response from `ListUserPoolClients`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserPoolClientsResult {
    /// One page of client descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pool_clients: Option<Vec<UserPoolClientDescription>>,

    /// Token for the next page, absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

display_fields!(ListUserPoolClientsResult {
    "UserPoolClients" => user_pool_clients,
    "NextToken" => next_token,
});

/// Response from `GetUser`: the attributes of the user who owns the
/// access token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserResult {
    /// The user's username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// The user's attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_attributes: Option<Vec<AttributeType>>,

    /// The user's registered MFA options.
    #[serde(rename = "MFAOptions", skip_serializing_if = "Option::is_none")]
    pub mfa_options: Option<Vec<MfaOptionType>>,

    /// The MFA method the user prefers when several are registered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_mfa_setting: Option<String>,

    /// All MFA methods enabled for the user.
    #[serde(rename = "UserMFASettingList", skip_serializing_if = "Option::is_none")]
    pub user_mfa_setting_list: Option<Vec<String>>,
}

display_fields!(GetUserResult {
    "Username" => username,
    "UserAttributes" => user_attributes,
    "MFAOptions" => mfa_options,
    "PreferredMfaSetting" => preferred_mfa_setting,
    "UserMFASettingList" => user_mfa_setting_list,
});

/// Response from `AdminCreateUser`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminCreateUserResult {
    /// The newly created user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserType>,
}

display_fields!(AdminCreateUserResult {
    "User" => user,
});

#[cfg(test)]
mod tests {
    use std::hash::{DefaultHasher, Hash, Hasher};

    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn sample_get_user_result() -> GetUserResult {
        GetUserResult {
            username: Some("alice".to_string()),
            user_attributes: Some(vec![
                AttributeType::new("email", "alice@example.com"),
                AttributeType::new("phone_number", "+15555550123"),
            ]),
            ..Default::default()
        }
    }

    #[test]
    fn equal_results_hash_identically() {
        let a = sample_get_user_result();
        let b = sample_get_user_result();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn differing_field_breaks_equality_and_hash() {
        let a = sample_get_user_result();
        let mut b = sample_get_user_result();
        b.preferred_mfa_setting = Some("SOFTWARE_TOKEN_MFA".to_string());
        assert_ne!(a, b);
        assert_ne!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn attribute_order_matters_for_equality() {
        let a = sample_get_user_result();
        let mut b = sample_get_user_result();
        b.user_attributes.as_mut().unwrap().reverse();
        assert_ne!(a, b);
    }

    #[test]
    fn deserialize_get_user_result() {
        let json = r#"{
            "Username": "alice",
            "UserAttributes": [
                {"Name": "email", "Value": "alice@example.com"}
            ],
            "MFAOptions": [
                {"DeliveryMedium": "SMS", "AttributeName": "phone_number"}
            ],
            "PreferredMfaSetting": "SMS_MFA",
            "UserMFASettingList": ["SMS_MFA", "SOFTWARE_TOKEN_MFA"]
        }"#;
        let result: GetUserResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.username.as_deref(), Some("alice"));
        assert_eq!(
            result.user_attributes,
            Some(vec![AttributeType::new("email", "alice@example.com")])
        );
        assert_eq!(result.preferred_mfa_setting.as_deref(), Some("SMS_MFA"));
        assert_eq!(
            result.user_mfa_setting_list,
            Some(vec![
                "SMS_MFA".to_string(),
                "SOFTWARE_TOKEN_MFA".to_string()
            ])
        );
    }

    #[test]
    fn deserialize_list_user_pool_clients_result() {
        let json = r#"{
            "UserPoolClients": [
                {"ClientId": "abc123", "UserPoolId": "us-east-1_EXAMPLE", "ClientName": "portal"},
                {"ClientId": "def456", "UserPoolId": "us-east-1_EXAMPLE", "ClientName": "mobile"}
            ],
            "NextToken": "page-2"
        }"#;
        let result: ListUserPoolClientsResult = serde_json::from_str(json).unwrap();
        let clients = result.user_pool_clients.unwrap();
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].client_id.as_deref(), Some("abc123"));
        assert_eq!(clients[1].client_name.as_deref(), Some("mobile"));
        assert_eq!(result.next_token.as_deref(), Some("page-2"));
    }

    #[test]
    fn deserialize_create_user_pool_result() {
        let json = r#"{
            "UserPool": {
                "Id": "us-east-1_EXAMPLE",
                "Name": "test-pool",
                "CreationDate": 1700000000,
                "MfaConfiguration": "OPTIONAL",
                "EstimatedNumberOfUsers": 0
            }
        }"#;
        let result: CreateUserPoolResult = serde_json::from_str(json).unwrap();
        let pool = result.user_pool.unwrap();
        assert_eq!(pool.id.as_deref(), Some("us-east-1_EXAMPLE"));
        assert_eq!(pool.name.as_deref(), Some("test-pool"));
        assert_eq!(pool.creation_date.map(|d| d.timestamp()), Some(1700000000));
        assert_eq!(
            pool.mfa_configuration,
            Some(crate::enums::UserPoolMfaType::Optional)
        );
        assert_eq!(pool.estimated_number_of_users, Some(0));
        assert!(pool.status.is_none());
    }

    #[test]
    fn empty_result_deserializes_from_empty_body() {
        let result: UpdateUserPoolResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result, UpdateUserPoolResult::default());
        assert_eq!(result.to_string(), "{}");
    }

    #[test]
    fn get_user_result_display_skips_absent_fields() {
        let result = GetUserResult {
            username: Some("alice".to_string()),
            preferred_mfa_setting: Some("SMS_MFA".to_string()),
            ..Default::default()
        };
        assert_eq!(
            result.to_string(),
            "{Username: alice,PreferredMfaSetting: SMS_MFA}"
        );
    }
}
