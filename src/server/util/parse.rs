use uuid::Uuid;

use crate::server::error::{internal::InternalError, AppError};

/// Parses a UUID from a String stored outside the database (e.g. the session).
///
/// # Arguments
/// - `value` - The String to attempt to parse into `Uuid`
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed
/// - `Err(AppError::InternalErr(ParseStringUuid))` - The value is not a UUID
pub fn parse_uuid_from_string(value: String) -> Result<Uuid, AppError> {
    let result = Uuid::parse_str(&value).map_err(|e| InternalError::ParseStringUuid {
        value,
        source: e,
    })?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_uuid() {
        let id = Uuid::new_v4();

        assert_eq!(parse_uuid_from_string(id.to_string()).unwrap(), id);
    }

    #[test]
    fn rejects_invalid_uuid() {
        let result = parse_uuid_from_string("not-a-uuid".to_string());

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::ParseStringUuid { .. }))
        ));
    }
}
