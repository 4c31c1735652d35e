use validator::ValidationErrors;

/// Extract one violated constraint's description from a validation failure.
///
/// Falls back to a generic per-field message when the constraint carries no
/// message of its own.
pub fn first_violation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .next()
        .and_then(|(field, field_errors)| {
            field_errors.first().map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .unwrap_or_else(|| "invalid payload".to_string())
}
