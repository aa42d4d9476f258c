//! Fail-fast validation of mutating requests
//!
//! Every rule here runs before any SQL is constructed or executed, so a
//! rejected request has no partial side effects. Character counts are
//! Unicode scalar values, not bytes.

use crate::errors::{EmotionError, Result};
use crate::model::UseYn;
use crate::requests::{CreateRequest, PatchRequest, ReplaceRequest};

/// Maximum character count for `content`
pub const CONTENT_MAX_CHARS: usize = 1000;

/// Maximum character count for `subject`
pub const SUBJECT_MAX_CHARS: usize = 100;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_content_required(content: Option<&str>) -> Result<()> {
    match content {
        Some(content) if !is_blank(content) => check_content_length(content),
        _ => Err(EmotionError::MissingField { field: "content" }),
    }
}

fn check_content_length(content: &str) -> Result<()> {
    if content.chars().count() > CONTENT_MAX_CHARS {
        return Err(EmotionError::TooLong {
            field: "content",
            limit: CONTENT_MAX_CHARS,
        });
    }
    Ok(())
}

fn check_subject_length(subject: Option<&str>) -> Result<()> {
    if let Some(subject) = subject {
        if subject.chars().count() > SUBJECT_MAX_CHARS {
            return Err(EmotionError::TooLong {
                field: "subject",
                limit: SUBJECT_MAX_CHARS,
            });
        }
    }
    Ok(())
}

fn check_use_yn(value: &str) -> Result<UseYn> {
    UseYn::parse(value).ok_or(EmotionError::InvalidEnum {
        field: "useYn",
        reason: "only accepts uppercase 'Y' or 'N'",
    })
}

/// Validate a create request
///
/// # Errors
///
/// - `MissingField` — content absent or blank after trimming
/// - `TooLong` — content over 1000 characters, or subject over 100
pub fn validate_create(request: &CreateRequest) -> Result<()> {
    check_content_required(request.content.as_deref())?;
    check_subject_length(request.subject.as_deref())?;
    Ok(())
}

/// Validate a full-update request
///
/// All mutable fields are required except `subject`. Returns the parsed
/// `useYn` so callers do not re-parse the raw value.
///
/// # Errors
///
/// - `MissingField` — content or useYn absent or blank after trimming
/// - `InvalidEnum` — useYn present but not exactly `"Y"`/`"N"`
/// - `TooLong` — content over 1000 characters, or subject over 100
pub fn validate_replace(request: &ReplaceRequest) -> Result<UseYn> {
    check_content_required(request.content.as_deref())?;

    let use_yn = match request.use_yn.as_deref() {
        Some(value) if !is_blank(value) => check_use_yn(value)?,
        _ => return Err(EmotionError::MissingField { field: "useYn" }),
    };

    check_subject_length(request.subject.as_deref())?;
    Ok(use_yn)
}

/// Validate a partial-update request
///
/// Each field is checked only when present; absent fields are skipped
/// entirely, never defaulted or errored. An all-absent patch is valid
/// (it becomes a timestamp-only touch).
///
/// # Errors
///
/// - `MissingField` — content or useYn present but blank after trimming
/// - `InvalidEnum` — useYn present but not exactly `"Y"`/`"N"`
/// - `TooLong` — content over 1000 characters, or subject over 100
pub fn validate_patch(request: &PatchRequest) -> Result<()> {
    if let Some(content) = request.content.as_deref() {
        if is_blank(content) {
            return Err(EmotionError::MissingField { field: "content" });
        }
        check_content_length(content)?;
    }

    if let Some(use_yn) = request.use_yn.as_deref() {
        if is_blank(use_yn) {
            return Err(EmotionError::MissingField { field: "useYn" });
        }
        check_use_yn(use_yn)?;
    }

    check_subject_length(request.subject.as_deref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(content: Option<&str>, subject: Option<&str>) -> CreateRequest {
        CreateRequest {
            content: content.map(str::to_string),
            subject: subject.map(str::to_string),
        }
    }

    #[test]
    fn test_create_ok() {
        assert!(validate_create(&create(Some("a"), None)).is_ok());
        assert!(validate_create(&create(Some("다들 나만 미워해"), Some("불만"))).is_ok());
        // Boundary lengths are accepted
        let max_content = "x".repeat(CONTENT_MAX_CHARS);
        let max_subject = "s".repeat(SUBJECT_MAX_CHARS);
        assert!(validate_create(&create(Some(&max_content), Some(&max_subject))).is_ok());
    }

    #[test]
    fn test_create_requires_content() {
        let err = validate_create(&create(None, None)).unwrap_err();
        assert_eq!(err, EmotionError::MissingField { field: "content" });

        let err = validate_create(&create(Some("   "), None)).unwrap_err();
        assert_eq!(err, EmotionError::MissingField { field: "content" });
    }

    #[test]
    fn test_create_length_limits() {
        let long_content = "x".repeat(CONTENT_MAX_CHARS + 1);
        let err = validate_create(&create(Some(&long_content), None)).unwrap_err();
        assert_eq!(
            err,
            EmotionError::TooLong {
                field: "content",
                limit: CONTENT_MAX_CHARS,
            }
        );

        let long_subject = "s".repeat(SUBJECT_MAX_CHARS + 1);
        let err = validate_create(&create(Some("ok"), Some(&long_subject))).unwrap_err();
        assert_eq!(
            err,
            EmotionError::TooLong {
                field: "subject",
                limit: SUBJECT_MAX_CHARS,
            }
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 1000 Hangul characters is far more than 1000 bytes but still valid
        let content = "감".repeat(CONTENT_MAX_CHARS);
        assert!(validate_create(&create(Some(&content), None)).is_ok());
    }

    #[test]
    fn test_replace_requires_all_but_subject() {
        let ok = ReplaceRequest {
            content: Some("a".to_string()),
            subject: None,
            use_yn: Some("N".to_string()),
        };
        assert_eq!(validate_replace(&ok).unwrap(), UseYn::N);

        let missing_use_yn = ReplaceRequest {
            content: Some("a".to_string()),
            subject: None,
            use_yn: None,
        };
        assert_eq!(
            validate_replace(&missing_use_yn).unwrap_err(),
            EmotionError::MissingField { field: "useYn" }
        );
    }

    #[test]
    fn test_replace_rejects_bad_use_yn() {
        for bad in ["y", "n", "YN", "yes", "0"] {
            let request = ReplaceRequest {
                content: Some("a".to_string()),
                subject: None,
                use_yn: Some(bad.to_string()),
            };
            assert_eq!(
                validate_replace(&request).unwrap_err().code(),
                "ERR_INVALID_ENUM",
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn test_patch_skips_absent_fields() {
        // The same absent useYn that fails replace passes patch
        assert!(validate_patch(&PatchRequest::default()).is_ok());

        let only_use_yn = PatchRequest {
            use_yn: Some("N".to_string()),
            ..Default::default()
        };
        assert!(validate_patch(&only_use_yn).is_ok());
    }

    #[test]
    fn test_patch_validates_present_fields() {
        let blank_content = PatchRequest {
            content: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate_patch(&blank_content).unwrap_err(),
            EmotionError::MissingField { field: "content" }
        );

        let bad_use_yn = PatchRequest {
            use_yn: Some("maybe".to_string()),
            ..Default::default()
        };
        assert_eq!(validate_patch(&bad_use_yn).unwrap_err().code(), "ERR_INVALID_ENUM");

        let long_subject = PatchRequest {
            subject: Some("s".repeat(SUBJECT_MAX_CHARS + 1)),
            ..Default::default()
        };
        assert_eq!(validate_patch(&long_subject).unwrap_err().code(), "ERR_TOO_LONG");
    }
}
