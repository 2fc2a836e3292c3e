//! URL slug derivation for groups and services.

/// Derives a URL slug from a display name.
///
/// The name is lower-cased, every run of characters outside `[a-z0-9]` becomes a single
/// `-`, and leading or trailing hyphens are dropped. The result may be empty when the
/// name has no ASCII alphanumerics; callers reject such names.
///
/// `slugify(&slugify(x)) == slugify(x)` for every input.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Returns the `n`th candidate slug: the base itself, then `base-2`, `base-3`, ...
pub fn candidate(base: &str, n: u32) -> String {
    if n <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Rust & Go: Best Friends!"), "rust-go-best-friends");
    }

    #[test]
    fn collapses_and_trims_separators() {
        assert_eq!(slugify("  --Bulk   Buying--  "), "bulk-buying");
        assert_eq!(slugify("a___b"), "a-b");
    }

    #[test]
    fn drops_non_ascii_characters() {
        assert_eq!(slugify("Café Crème 2024"), "caf-cr-me-2024");
    }

    #[test]
    fn is_empty_without_alphanumerics() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn is_deterministic_and_idempotent() {
        for name in ["Group Buy #1", "  MiXeD case ", "already-a-slug", "x--y"] {
            let once = slugify(name);
            assert_eq!(slugify(name), once);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn numbers_candidates_after_the_first() {
        assert_eq!(candidate("shop", 1), "shop");
        assert_eq!(candidate("shop", 2), "shop-2");
        assert_eq!(candidate("shop", 3), "shop-3");
    }
}
