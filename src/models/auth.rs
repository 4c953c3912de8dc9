//
//  catchtrend
//  models/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Login response.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of a successful `POST /api/v1/stocks/auth/login`.
///
/// `expires_in` is reported in seconds. The client stores the token as-is and
/// never invalidates it on its own; a 401 from a later call is the only
/// expiry signal.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,

    #[serde(default)]
    pub message: String,

    pub access_token: String,

    #[serde(default = "default_token_type")]
    pub token_type: String,

    #[serde(default)]
    pub expires_in: i64,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("success", &self.success)
            .field("message", &self.message)
            .field("access_token", &"***")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal() {
        let login: LoginResponse =
            serde_json::from_str(r#"{"success":true,"access_token":"abc123"}"#).unwrap();
        assert_eq!(login.token_type, "bearer");
        assert_eq!(login.expires_in, 0);
        assert!(login.message.is_empty());
    }

    #[test]
    fn test_debug_hides_token() {
        let login: LoginResponse =
            serde_json::from_str(r#"{"success":true,"access_token":"abc123"}"#).unwrap();
        assert!(!format!("{:?}", login).contains("abc123"));
    }

    #[test]
    fn test_echoed_response_decodes_identically() {
        let login = LoginResponse {
            success: true,
            message: "ok".to_string(),
            access_token: "abc123".to_string(),
            token_type: "bearer".to_string(),
            expires_in: 3600,
        };
        let bytes = serde_json::to_vec(&login).unwrap();
        let echoed: LoginResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(echoed, login);
    }
}
