//! Closed wire-string vocabularies used by the Cognito Identity Provider API.
//!
//! Each enumeration stores its canonical wire literal exactly as the service
//! defines it. Typed values and raw strings funnel through the same pair of
//! conversions: [`as_str`](UserPoolMfaType::as_str) going out, `FromStr`
//! coming in. Unknown strings are rejected, never preserved.

use crate::error::{CognitoError, Result};

/// Defines a wire-vocabulary enumeration: the variants, their exact wire
/// strings, and the conversions (`as_str`, `Display`, `FromStr`, serde)
/// that all share the one canonical string form.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// The canonical wire string for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = CognitoError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $( $wire => Ok(Self::$variant), )+
                    other => Err(CognitoError::UnknownEnumValue {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                value.parse().map_err(::serde::de::Error::custom)
            }
        }

        impl crate::text::FieldFmt for $name {
            fn field_fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Attributes that can serve as a sign-in alias alongside the username.
    AliasAttributeType {
        PhoneNumber => "phone_number",
        Email => "email",
        PreferredUsername => "preferred_username",
    }
}

wire_enum! {
    /// Attributes that can be used *as* the username at sign-up.
    UsernameAttributeType {
        PhoneNumber => "phone_number",
        Email => "email",
    }
}

wire_enum! {
    /// Attributes the user pool automatically verifies on sign-up.
    VerifiedAttributeType {
        PhoneNumber => "phone_number",
        Email => "email",
    }
}

wire_enum! {
    /// Whether a user pool is protected from accidental deletion.
    ///
    /// When active, a `DeleteUserPool` call fails until protection is
    /// deactivated in a separate update.
    DeletionProtectionType {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

wire_enum! {
    /// Multi-factor authentication enforcement for a user pool.
    UserPoolMfaType {
        /// MFA is disabled for all users.
        Off => "OFF",
        /// MFA is required for all users.
        On => "ON",
        /// Users choose individually whether to register a second factor.
        Optional => "OPTIONAL",
    }
}

wire_enum! {
    /// The status of a user pool. No longer used by the service; retained
    /// for wire compatibility.
    StatusType {
        Enabled => "Enabled",
        Disabled => "Disabled",
    }
}

wire_enum! {
    /// The confirmation state of a user in a user pool.
    UserStatusType {
        Unconfirmed => "UNCONFIRMED",
        Confirmed => "CONFIRMED",
        /// No longer used.
        Archived => "ARCHIVED",
        Compromised => "COMPROMISED",
        Unknown => "UNKNOWN",
        ResetRequired => "RESET_REQUIRED",
        /// The user signed in with a temporary password and must set a
        /// permanent one.
        ForceChangePassword => "FORCE_CHANGE_PASSWORD",
    }
}

wire_enum! {
    /// The channel over which the service delivers codes and invitations.
    DeliveryMediumType {
        Sms => "SMS",
        Email => "EMAIL",
    }
}

wire_enum! {
    /// What `AdminCreateUser` does about the invitation message when the
    /// user already exists.
    MessageActionType {
        /// Resend the invitation to an existing user.
        Resend => "RESEND",
        /// Create the user without sending any message.
        Suppress => "SUPPRESS",
    }
}

wire_enum! {
    /// OAuth 2.0 grant kinds a user pool client may use.
    ///
    /// The wire literals are the lowercase RFC 6749 grant names, not the
    /// service's usual uppercase style.
    OAuthFlowType {
        Code => "code",
        Implicit => "implicit",
        ClientCredentials => "client_credentials",
    }
}

wire_enum! {
    /// Authentication flows a user pool client is allowed to start.
    ///
    /// The `ALLOW_`-prefixed values are the current vocabulary; the bare
    /// legacy values cannot be mixed with them in one request.
    ExplicitAuthFlowsType {
        AdminNoSrpAuth => "ADMIN_NO_SRP_AUTH",
        CustomAuthFlowOnly => "CUSTOM_AUTH_FLOW_ONLY",
        UserPasswordAuth => "USER_PASSWORD_AUTH",
        AllowAdminUserPasswordAuth => "ALLOW_ADMIN_USER_PASSWORD_AUTH",
        AllowCustomAuth => "ALLOW_CUSTOM_AUTH",
        AllowUserPasswordAuth => "ALLOW_USER_PASSWORD_AUTH",
        AllowUserSrpAuth => "ALLOW_USER_SRP_AUTH",
        AllowRefreshTokenAuth => "ALLOW_REFRESH_TOKEN_AUTH",
    }
}

wire_enum! {
    /// Whether sign-in errors reveal that a user does not exist.
    PreventUserExistenceErrorTypes {
        /// Pre-2019 behavior: distinct errors for missing users.
        Legacy => "LEGACY",
        /// Ambiguous errors that do not confirm user existence.
        Enabled => "ENABLED",
    }
}

wire_enum! {
    /// Units for the token validity periods of a user pool client.
    TimeUnitsType {
        Seconds => "seconds",
        Minutes => "minutes",
        Hours => "hours",
        Days => "days",
    }
}
