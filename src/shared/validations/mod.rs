use validator::ValidationErrors;

use crate::shared::types::PageRequest;

pub fn validate_pagination(page: Option<u32>, limit: Option<u32>) -> PageRequest {
    PageRequest::new(page.unwrap_or(1), limit.unwrap_or(20))
}

/// Flattens validator output into one line, `field: message` pairs joined by `; `.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            format!("{}: {}", field, messages.join(", "))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn pagination_defaults() {
        let p = validate_pagination(None, None);
        assert_eq!((p.page, p.limit), (1, 20));
        let p = validate_pagination(Some(0), Some(1000));
        assert_eq!((p.page, p.limit), (1, 100));
    }

    #[test]
    fn message_lists_fields_in_order() {
        let sample = Sample {
            name: String::new(),
            email: "nope".into(),
        };
        let errors = sample.validate().unwrap_err();
        assert_eq!(
            validation_message(&errors),
            "email: email; name: must not be empty"
        );
    }
}
