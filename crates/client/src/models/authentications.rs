//! Authentication models.
//!
//! Secret fields use `secrecy::SecretString`: they serialize into request
//! bodies through an explicit helper and never appear in Debug output. The
//! service never returns a password, so read models carry none.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Resource type value linking an authentication to its endpoint.
pub const ENDPOINT_RESOURCE_TYPE: &str = "Endpoint";

/// Credentials attached to an endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Authentication {
    pub id: String,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub authtype: Option<String>,
}

/// Module for serializing an optional SecretString as a plain string.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(secret) => serializer.serialize_str(secret.expose_secret()),
            None => serializer.serialize_none(),
        }
    }
}

/// Request body for creating an authentication.
#[derive(Debug, Serialize, Clone)]
pub struct AuthenticationCreate {
    pub resource_id: String,
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "secret_string::serialize"
    )]
    pub password: Option<SecretString>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authtype: Option<String>,
}

/// Request body for updating an authentication.
#[derive(Debug, Serialize, Clone)]
pub struct AuthenticationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "secret_string::serialize"
    )]
    pub password: Option<SecretString>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_create_serializes_password() {
        let payload = AuthenticationCreate {
            resource_id: "871".to_string(),
            resource_type: ENDPOINT_RESOURCE_TYPE.to_string(),
            username: Some("u".to_string()),
            password: Some(SecretString::new("p".to_string().into())),
            authtype: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "resource_id": "871",
                "resource_type": "Endpoint",
                "username": "u",
                "password": "p"
            })
        );
    }

    #[test]
    fn test_authentication_update_omits_unset_fields() {
        let payload = AuthenticationUpdate {
            username: Some("u".to_string()),
            password: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "username": "u" }));
    }

    #[test]
    fn test_authentication_create_debug_does_not_expose_password() {
        let payload = AuthenticationCreate {
            resource_id: "871".to_string(),
            resource_type: ENDPOINT_RESOURCE_TYPE.to_string(),
            username: Some("u".to_string()),
            password: Some(SecretString::new("super-secret".to_string().into())),
            authtype: Some("kubernetes".to_string()),
        };
        let debug_output = format!("{:?}", payload);
        assert!(
            !debug_output.contains("super-secret"),
            "Debug output should not contain the password"
        );
    }

    #[test]
    fn test_deserialize_authentication_has_no_password() {
        let json = r#"{
            "id": "944",
            "resource_id": "871",
            "resource_type": "Endpoint",
            "username": "u",
            "authtype": "kubernetes"
        }"#;
        let auth: Authentication = serde_json::from_str(json).unwrap();
        assert_eq!(auth.id, "944");
        assert_eq!(auth.username.as_deref(), Some("u"));
    }
}
