//! Response interpretation

use serde_json::Value;

use crate::error::SubmitFailure;

/// How the endpoint judged a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// 200, or any code without a dedicated meaning.
    Success(i64),
    /// 400 or 500.
    Error(i64),
}

/// Decodes a response body and classifies its `status_code`.
///
/// The body must be a JSON object with an integer `status_code`; anything
/// else is a [`SubmitFailure::MalformedResponse`].
pub fn interpret(body: &str) -> Result<Verdict, SubmitFailure> {
    let decoded: Value =
        serde_json::from_str(body).map_err(|e| SubmitFailure::malformed(e.to_string(), body))?;
    let Value::Object(fields) = decoded else {
        return Err(SubmitFailure::malformed("expected a JSON object", body));
    };
    let status_code = fields
        .get("status_code")
        .and_then(Value::as_i64)
        .ok_or_else(|| SubmitFailure::malformed("missing integer status_code", body))?;

    Ok(match status_code {
        code @ (400 | 500) => Verdict::Error(code),
        code => Verdict::Success(code),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(interpret(r#"{"status_code": 200}"#).unwrap(), Verdict::Success(200));
        assert_eq!(interpret(r#"{"status_code": 400}"#).unwrap(), Verdict::Error(400));
        assert_eq!(interpret(r#"{"status_code": 500}"#).unwrap(), Verdict::Error(500));
    }

    #[test]
    fn test_unrecognized_code_is_success() {
        assert_eq!(interpret(r#"{"status_code": 302}"#).unwrap(), Verdict::Success(302));
        assert_eq!(interpret(r#"{"status_code": 404}"#).unwrap(), Verdict::Success(404));
    }

    #[test]
    fn test_extra_keys_ignored() {
        assert_eq!(
            interpret(r#"{"status_code": 200, "message": "thanks"}"#).unwrap(),
            Verdict::Success(200)
        );
    }

    #[test]
    fn test_malformed_bodies() {
        for body in ["", "alert('hi')", "{}", r#"{"status_code": "200"}"#, "[200]"] {
            let err = interpret(body).unwrap_err();
            assert!(
                matches!(err, SubmitFailure::MalformedResponse { .. }),
                "{:?} was accepted",
                body
            );
        }
    }

    #[test]
    fn test_non_object_bodies_are_malformed() {
        for body in ["[200]", "[500]", "200", "null", r#"{"status_code": 200.5}"#] {
            assert!(
                matches!(interpret(body), Err(SubmitFailure::MalformedResponse { .. })),
                "{:?} was accepted",
                body
            );
        }
    }
}
