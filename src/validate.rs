// ============================================================================
// Input Validation
// ============================================================================
//
// Declarative request validation via garde, translated into a single
// BusinessError. Every field is checked in one pass; per-field messages are
// cleaned of bracketed annotation segments and joined with `|`; field names
// are mapped to their camelCase wire form.
//
// ============================================================================

use garde::Validate;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::error::BusinessError;

/// Validate a request candidate, collecting every violation into one
/// field-to-message mapping
pub fn validate_or_business_error<T>(candidate: &T) -> Result<(), BusinessError>
where
    T: Validate,
    T::Context: Default,
{
    let report = match candidate.validate() {
        Ok(()) => return Ok(()),
        Err(report) => report,
    };

    let mut messages: BTreeMap<String, String> = BTreeMap::new();
    for (path, error) in report.iter() {
        let field = wire_field_name(&path.to_string());
        let cleaned = strip_bracketed(&error.message().to_string());
        messages
            .entry(field)
            .and_modify(|joined| {
                joined.push('|');
                joined.push_str(&cleaned);
            })
            .or_insert(cleaned);
    }

    Err(BusinessError::fields(messages))
}

/// Constraint: value must be a version-4 UUID
///
/// Used for the caller-supplied device identifier.
pub fn is_uuid_v4(value: &str, _context: &()) -> garde::Result {
    let parsed = Uuid::try_parse(value)
        .map_err(|_| garde::Error::new("deviceId must be a valid UUID version 4"))?;
    if parsed.get_version_num() != 4 {
        return Err(garde::Error::new("deviceId must be a valid UUID version 4"));
    }
    Ok(())
}

/// Remove every bracketed `[...]` annotation segment from a constraint message
fn strip_bracketed(message: &str) -> String {
    let mut cleaned = message.to_string();
    while let Some(open) = cleaned.find('[') {
        match cleaned[open..].find(']') {
            Some(offset) => cleaned.replace_range(open..=open + offset, ""),
            None => break,
        }
    }
    cleaned.trim().to_string()
}

/// Map a validation path (snake_case field name) to its wire (camelCase) form
fn wire_field_name(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut upper_next = false;
    for ch in path.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use garde::Validate;

    #[derive(Validate)]
    struct SampleRequest {
        #[garde(length(min = 1))]
        topic: String,
        #[garde(custom(is_uuid_v4))]
        device_id: String,
    }

    #[test]
    fn test_valid_candidate_passes() {
        let request = SampleRequest {
            topic: "rust ownership".to_string(),
            device_id: uuid::Uuid::new_v4().to_string(),
        };
        assert!(validate_or_business_error(&request).is_ok());
    }

    #[test]
    fn test_all_fields_reported_in_one_pass() {
        let request = SampleRequest {
            topic: String::new(),
            device_id: "not-a-uuid".to_string(),
        };
        let error = validate_or_business_error(&request).unwrap_err();

        assert_eq!(error.messages.len(), 2);
        assert!(error.messages.contains_key("topic"));
        assert_eq!(
            error.messages.get("deviceId").map(String::as_str),
            Some("deviceId must be a valid UUID version 4")
        );
    }

    #[test]
    fn test_multiple_violations_joined_with_pipe() {
        #[derive(Validate)]
        struct TwoRules {
            #[garde(length(min = 5), custom(is_uuid_v4))]
            device_id: String,
        }

        let error = validate_or_business_error(&TwoRules {
            device_id: "abc".to_string(),
        })
        .unwrap_err();

        let message = error.messages.get("deviceId").unwrap();
        assert_eq!(message.matches('|').count(), 1);
        assert!(message.contains("deviceId must be a valid UUID version 4"));
    }

    #[test]
    fn test_uuid_v1_is_rejected() {
        // Version nibble says 1, not 4
        assert!(is_uuid_v4("c232ab00-9414-11ec-b3c8-9f6bdeced846", &()).is_err());
    }

    #[test]
    fn test_uuid_v4_is_accepted() {
        assert!(is_uuid_v4(&uuid::Uuid::new_v4().to_string(), &()).is_ok());
    }

    #[test]
    fn test_strip_bracketed_segment() {
        assert_eq!(
            strip_bracketed("topic must not be empty [NOT_EMPTY]"),
            "topic must not be empty"
        );
        assert_eq!(strip_bracketed("no annotation here"), "no annotation here");
        assert_eq!(strip_bracketed("[A] leading and trailing [B]"), "leading and trailing");
    }

    #[test]
    fn test_wire_field_name_is_camel_case() {
        assert_eq!(wire_field_name("device_id"), "deviceId");
        assert_eq!(wire_field_name("topic"), "topic");
    }
}
