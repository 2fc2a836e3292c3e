/// Maximum number of interests a user may keep.
pub const MAX_INTERESTS: usize = 20;

const MAX_INTEREST_LEN: usize = 50;

/// Trims and lower-cases interest names, dropping blanks and duplicates while keeping
/// first-seen order.
///
/// # Returns
/// - `Ok(names)` - The normalized set
/// - `Err(message)` - A name is longer than 50 characters or more than 20 remain
pub fn normalize_interests(names: Vec<String>) -> Result<Vec<String>, String> {
    let mut normalized: Vec<String> = Vec::with_capacity(names.len());

    for name in names {
        let name = name.trim().to_lowercase();
        if name.is_empty() || normalized.contains(&name) {
            continue;
        }
        if name.chars().count() > MAX_INTEREST_LEN {
            return Err(format!(
                "interests: each interest must be at most {} characters",
                MAX_INTEREST_LEN
            ));
        }
        normalized.push(name);
    }

    if normalized.len() > MAX_INTERESTS {
        return Err(format!("interests: at most {} interests", MAX_INTERESTS));
    }

    Ok(normalized)
}
