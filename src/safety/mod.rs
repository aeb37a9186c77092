use crate::errors::UiforgeError;

/// Phrases that mark an attempt to steer the completion service away from its
/// instructions. Matched case-insensitively as substrings, the same policy on
/// the task text and on any previous-plan context.
const INJECTION_SIGNALS: &[&str] = &[
    "ignore previous",
    "disregard previous",
    "system prompt",
    "developer message",
    "override",
    "jailbreak",
    "act as",
    "bypass",
];

/// Returns the first injection signal found in `text`, if any.
pub fn injection_signal(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    INJECTION_SIGNALS
        .iter()
        .copied()
        .find(|signal| lowered.contains(signal))
}

/// Gate a request before anything is sent to a provider. Rejects when either
/// the task or the supplied context carries an injection signal.
pub fn check_request(task: &str, context: Option<&str>) -> Result<(), UiforgeError> {
    if let Some(signal) = injection_signal(task) {
        return Err(UiforgeError::Safety(format!(
            "task contains blocked phrase '{signal}'"
        )));
    }
    if let Some(context) = context {
        if let Some(signal) = injection_signal(context) {
            return Err(UiforgeError::Safety(format!(
                "context contains blocked phrase '{signal}'"
            )));
        }
    }
    Ok(())
}
