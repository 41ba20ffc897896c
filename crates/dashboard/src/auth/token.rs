//! ID token decoding
//!
//! The session only needs the identity claims, so the token is decoded
//! without signature verification; the server remains the authority.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::models::UserInfo;

/// Failure to read claims out of an ID token
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("No id_token found in fragment")]
    MissingToken,
    #[error("ID token is not a three-part JWT")]
    Malformed,
    #[error("ID token payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("ID token payload is not valid JSON: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Decode the identity claims of a bare ID token
pub fn decode_user_info(id_token: &str) -> Result<UserInfo, TokenError> {
    let mut parts = id_token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
        _ => return Err(TokenError::Malformed),
    };

    // Some issuers pad the payload even though JWTs shouldn't be
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Extract the `id_token` parameter from a URL fragment such as
/// `#id_token=<jwt>&state=...`
pub fn id_token_from_fragment(fragment: &str) -> Option<&str> {
    fragment
        .trim_start_matches('#')
        .split('&')
        .find_map(|param| param.strip_prefix("id_token="))
        .filter(|token| !token.is_empty())
}

/// Decode user identity from a `#id_token=...` fragment
pub fn user_info_from_fragment(fragment: &str) -> Result<UserInfo, TokenError> {
    let token = id_token_from_fragment(fragment).ok_or(TokenError::MissingToken)?;
    decode_user_info(token)
}

#[cfg(test)]
pub(crate) fn encode_test_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_claims() {
        let token = encode_test_token(&json!({
            "email": "root@example.com",
            "name": "Root User",
            "exp": 1_700_000_000
        }));

        let info = decode_user_info(&token).unwrap();
        assert_eq!(info.email, "root@example.com");
        assert_eq!(info.name.as_deref(), Some("Root User"));
        assert_eq!(info.exp, Some(1_700_000_000));
    }

    #[test]
    fn test_from_fragment() {
        let token = encode_test_token(&json!({"email": "a@b.c", "exp": 5}));
        let fragment = format!("#id_token={}&state=xyz", token);

        assert_eq!(id_token_from_fragment(&fragment), Some(token.as_str()));
        let info = user_info_from_fragment(&fragment).unwrap();
        assert_eq!(info.email, "a@b.c");
    }

    #[test]
    fn test_missing_token_in_fragment() {
        assert!(matches!(
            user_info_from_fragment("#state=abc"),
            Err(TokenError::MissingToken)
        ));
        assert!(matches!(
            user_info_from_fragment("#id_token="),
            Err(TokenError::MissingToken)
        ));
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(matches!(decode_user_info("opaque"), Err(TokenError::Malformed)));
        assert!(matches!(decode_user_info("a..c"), Err(TokenError::Malformed)));
        assert!(matches!(decode_user_info("a.b.c.d"), Err(TokenError::Malformed)));
        assert!(matches!(
            decode_user_info("a.!!!.c"),
            Err(TokenError::Encoding(_))
        ));
    }

    #[test]
    fn test_payload_not_json() {
        let payload = URL_SAFE_NO_PAD.encode("not json");
        let token = format!("h.{}.s", payload);
        assert!(matches!(decode_user_info(&token), Err(TokenError::Claims(_))));
    }
}
