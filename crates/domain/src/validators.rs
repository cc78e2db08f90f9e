/// Returns the trimmed value of a required text field.
pub fn require_text<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, String> {
    match value.map(str::trim) {
        None => Err(format!("{field} is required")),
        Some("") => Err(format!("{field} cannot be empty")),
        Some(v) => Ok(v),
    }
}

/// Rejects a field that is present but empty. Absent is fine.
pub fn reject_empty(value: Option<&str>, field: &str) -> Result<(), String> {
    match value {
        Some(v) if v.trim().is_empty() => Err(format!("{field} cannot be empty")),
        _ => Ok(()),
    }
}
