use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AuthError;

/// Email/password pair that passed presence validation.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Parses a raw request body. Anything that is not a JSON object with
    /// non-empty string `email` and `password` is `InvalidInput`.
    pub fn from_body(body: &[u8]) -> Result<Self, AuthError> {
        let object: Map<String, Value> =
            serde_json::from_slice(body).map_err(|_| AuthError::InvalidInput)?;
        let field = |name: &str| match object.get(name) {
            Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
            _ => Err(AuthError::InvalidInput),
        };
        Ok(Self {
            email: field("email")?,
            password: field("password")?,
        })
    }
}

/// `{"status": "...", "message": "..."}` body shared by every JSON response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: &str) -> Self {
        Self {
            status: "success".into(),
            message: message.into(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            status: "error".into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_body() {
        let creds =
            Credentials::from_body(br#"{"email":"a@stu.bmcc.cuny.edu","password":"p1"}"#).unwrap();
        assert_eq!(creds.email, "a@stu.bmcc.cuny.edu");
        assert_eq!(creds.password, "p1");
    }

    #[test]
    fn rejects_missing_or_malformed_fields() {
        let bodies: [&[u8]; 8] = [
            br#"{"email":"a@stu.bmcc.cuny.edu"}"#,
            br#"{"password":"p1"}"#,
            br#"{"email":"","password":"p1"}"#,
            br#"{"email":"a@stu.bmcc.cuny.edu","password":42}"#,
            br#"["a@stu.bmcc.cuny.edu","p1"]"#,
            br#""a@stu.bmcc.cuny.edu""#,
            br#"{"email":null,"password":"p1"}"#,
            b"not json",
        ];
        for body in bodies {
            assert!(
                matches!(Credentials::from_body(body), Err(AuthError::InvalidInput)),
                "body {:?} should be rejected",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn status_response_serialization() {
        let json = serde_json::to_string(&StatusResponse::success("Login successful")).unwrap();
        assert_eq!(json, r#"{"status":"success","message":"Login successful"}"#);
    }
}
