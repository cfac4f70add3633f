use std::collections::HashSet;

use cognito_idp_model::{
    AdminCreateUserRequest, AttributeType, CognitoError, CreateUserPoolRequest,
    DeliveryMediumType, DescribeUserPoolClientResult, ExplicitAuthFlowsType, GetUserResult,
    ListUserPoolsResult, MessageActionType, OAuthFlowType, PreventUserExistenceErrorTypes,
    TimeUnitsType, TokenValidityUnitsType, UpdateUserPoolClientRequest, UserPoolMfaType,
    VerifiedAttributeType,
};

#[test]
fn request_round_trips_through_wire_json() {
    let request = UpdateUserPoolClientRequest::default()
        .with_user_pool_id("us-east-1_EXAMPLE")
        .with_client_id("abc123")
        .with_client_name("portal")
        .with_refresh_token_validity(30)
        .with_access_token_validity(60)
        .with_token_validity_units(
            TokenValidityUnitsType::default()
                .with_access_token(TimeUnitsType::Minutes)
                .with_refresh_token(TimeUnitsType::Days),
        )
        .with_explicit_auth_flows([
            ExplicitAuthFlowsType::AllowUserSrpAuth,
            ExplicitAuthFlowsType::AllowRefreshTokenAuth,
        ])
        .with_callback_urls(["https://example.com/cb"])
        .with_default_redirect_uri("https://example.com/cb")
        .with_allowed_o_auth_flows([OAuthFlowType::Code])
        .with_allowed_o_auth_scopes(["openid", "email"])
        .with_allowed_o_auth_flows_user_pool_client(true)
        .with_prevent_user_existence_errors(PreventUserExistenceErrorTypes::Enabled)
        .with_enable_token_revocation(true);

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["UserPoolId"], "us-east-1_EXAMPLE");
    assert_eq!(json["TokenValidityUnits"]["AccessToken"], "minutes");
    assert_eq!(json["TokenValidityUnits"]["RefreshToken"], "days");
    assert_eq!(json["ExplicitAuthFlows"][0], "ALLOW_USER_SRP_AUTH");
    assert_eq!(json["CallbackURLs"][0], "https://example.com/cb");
    assert_eq!(json["DefaultRedirectURI"], "https://example.com/cb");
    assert_eq!(json["AllowedOAuthFlows"][0], "code");
    assert_eq!(json["PreventUserExistenceErrors"], "ENABLED");
    // absent fields are omitted entirely
    assert!(json.get("IdTokenValidity").is_none());
    assert!(json.get("ReadAttributes").is_none());

    let back: UpdateUserPoolClientRequest = serde_json::from_value(json).unwrap();
    assert_eq!(back, request);
}

#[test]
fn describe_client_fixture_deserializes_fully() {
    let body = r#"{
        "UserPoolClient": {
            "UserPoolId": "us-east-1_EXAMPLE",
            "ClientName": "portal",
            "ClientId": "abc123",
            "ClientSecret": "shhh",
            "LastModifiedDate": 1700000500,
            "CreationDate": 1700000000,
            "RefreshTokenValidity": 30,
            "AccessTokenValidity": 60,
            "TokenValidityUnits": {
                "AccessToken": "minutes",
                "RefreshToken": "days"
            },
            "ExplicitAuthFlows": ["ALLOW_USER_SRP_AUTH", "ALLOW_REFRESH_TOKEN_AUTH"],
            "SupportedIdentityProviders": ["COGNITO"],
            "CallbackURLs": ["https://example.com/cb"],
            "DefaultRedirectURI": "https://example.com/cb",
            "AllowedOAuthFlows": ["code"],
            "AllowedOAuthScopes": ["openid", "email"],
            "AllowedOAuthFlowsUserPoolClient": true,
            "AnalyticsConfiguration": {
                "ApplicationId": "pinpoint-app",
                "RoleArn": "arn:aws:iam::123456789012:role/pinpoint",
                "UserDataShared": false
            },
            "PreventUserExistenceErrors": "ENABLED",
            "EnableTokenRevocation": true
        }
    }"#;

    let result: DescribeUserPoolClientResult = serde_json::from_str(body).unwrap();
    let client = result.user_pool_client.unwrap();

    assert_eq!(client.client_id.as_deref(), Some("abc123"));
    assert_eq!(client.client_secret.as_deref(), Some("shhh"));
    assert_eq!(client.creation_date.map(|d| d.timestamp()), Some(1700000000));
    assert_eq!(
        client.last_modified_date.map(|d| d.timestamp()),
        Some(1700000500)
    );
    assert_eq!(
        client.token_validity_units.as_ref().unwrap().access_token,
        Some(TimeUnitsType::Minutes)
    );
    assert_eq!(
        client.explicit_auth_flows,
        Some(vec![
            ExplicitAuthFlowsType::AllowUserSrpAuth,
            ExplicitAuthFlowsType::AllowRefreshTokenAuth,
        ])
    );
    assert_eq!(
        client.supported_identity_providers,
        Some(vec!["COGNITO".to_string()])
    );
    let analytics = client.analytics_configuration.as_ref().unwrap();
    assert_eq!(analytics.application_id.as_deref(), Some("pinpoint-app"));
    assert_eq!(analytics.user_data_shared, Some(false));
    assert!(analytics.external_id.is_none());
    // fields the service did not return stay absent
    assert!(client.id_token_validity.is_none());
    assert!(client.logout_urls.is_none());
}

#[test]
fn fixture_reserializes_to_the_same_wire_shape() {
    let body = r#"{
        "UserPools": [
            {"Id": "us-east-1_ONE", "Name": "first", "CreationDate": 1690000000},
            {"Id": "us-east-1_TWO", "Name": "second"}
        ],
        "NextToken": "page-2"
    }"#;
    let fixture: serde_json::Value = serde_json::from_str(body).unwrap();
    let result: ListUserPoolsResult = serde_json::from_str(body).unwrap();
    assert_eq!(serde_json::to_value(&result).unwrap(), fixture);
}

#[test]
fn unknown_enum_string_in_body_is_rejected() {
    let body = r#"{"UserPoolClient": {"AllowedOAuthFlows": ["password"]}}"#;
    let result = serde_json::from_str::<DescribeUserPoolClientResult>(body);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("password"), "unexpected error: {}", err);
    assert!(err.contains("OAuthFlowType"), "unexpected error: {}", err);
}

#[test]
fn admin_create_user_full_build_and_render() {
    let mut request = AdminCreateUserRequest::default()
        .with_user_pool_id("us-east-1_EXAMPLE")
        .with_username("alice")
        .add_user_attribute(AttributeType::new("email", "alice@example.com"))
        .add_user_attribute(AttributeType::new("phone_number", "+15555550123"))
        .with_temporary_password("Tempor4ry!")
        .with_force_alias_creation(false)
        .with_message_action(MessageActionType::Suppress)
        .add_desired_delivery_medium(DeliveryMediumType::Email);
    request.add_client_metadata_entry("source", "import").unwrap();

    assert_eq!(
        request.to_string(),
        concat!(
            "{UserPoolId: us-east-1_EXAMPLE,",
            "Username: alice,",
            "UserAttributes: [{Name: email,Value: alice@example.com}, ",
            "{Name: phone_number,Value: +15555550123}],",
            "TemporaryPassword: Tempor4ry!,",
            "ForceAliasCreation: false,",
            "MessageAction: SUPPRESS,",
            "DesiredDeliveryMediums: [EMAIL],",
            "ClientMetadata: {source=import}}",
        )
    );
}

#[test]
fn duplicate_metadata_key_is_the_only_failure_mode() {
    let mut request = AdminCreateUserRequest::default().with_username("alice");
    request.add_client_metadata_entry("a", "1").unwrap();
    request.add_client_metadata_entry("b", "2").unwrap();

    let err = request.add_client_metadata_entry("a", "3").unwrap_err();
    assert!(matches!(err, CognitoError::DuplicateKey { .. }));

    let metadata = request.client_metadata.as_ref().unwrap();
    assert_eq!(metadata.len(), 2);
    assert_eq!(metadata.get("a").map(String::as_str), Some("1"));

    request.clear_client_metadata_entries();
    assert!(request.client_metadata.is_none());
}

#[test]
fn create_pool_request_display_matches_declared_order() {
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

    // the MFA setting renders between the two, per declaration order
    let request = request.with_mfa_configuration(UserPoolMfaType::On);
    assert_eq!(
        request.to_string(),
        "{PoolName: test-pool,AutoVerifiedAttributes: [email, phone_number],MfaConfiguration: ON}"
    );
}

#[test]
fn results_are_usable_as_set_members() {
    let alice = GetUserResult {
        username: Some("alice".to_string()),
        user_attributes: Some(vec![AttributeType::new("email", "alice@example.com")]),
        ..Default::default()
    };
    let bob = GetUserResult {
        username: Some("bob".to_string()),
        ..Default::default()
    };

    let mut seen = HashSet::new();
    assert!(seen.insert(alice.clone()));
    assert!(seen.insert(bob));
    assert!(!seen.insert(alice), "structurally equal value already present");
    assert_eq!(seen.len(), 2);
}
