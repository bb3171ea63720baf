use std::str::FromStr;

use ulid::Ulid;

/// Storage key for a new record.
pub fn new_id() -> String {
    Ulid::new().to_string()
}

/// Accepts only well-formed storage keys, `what` names the value in the error.
pub fn parse_id(value: &str, what: &str) -> crate::Result<String> {
    match Ulid::from_str(value) {
        Ok(id) => Ok(id.to_string()),
        Err(_) => Err(crate::Error::User(format!("Invalid {what} format"))),
    }
}

pub fn is_id(value: &str) -> bool {
    Ulid::from_str(value).is_ok()
}
