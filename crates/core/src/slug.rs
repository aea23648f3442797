//! URL slugs for products and categories.

use crate::error::CoreError;

/// Maximum slug length accepted from clients and produced by [`slugify`].
pub const MAX_SLUG_LEN: usize = 120;

/// Derive a slug from a display name.
///
/// Lowercases the name, keeps alphanumeric characters and collapses every
/// other run of characters into a single `-`, with no leading or trailing
/// dash. A name without any alphanumeric character yields an empty string,
/// which [`validate_slug`] rejects.
///
/// ```
/// use storefront_core::slug::slugify;
///
/// assert_eq!(slugify("Sofá Chesterfield 3 cuerpos"), "sofá-chesterfield-3-cuerpos");
/// assert_eq!(slugify("  Chair!! "), "chair");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    // Lowercasing can emit combining marks (`İ` -> `i\u{307}`), so filter
    // after the case mapping.
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() && !ch.is_uppercase() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else if !is_combining_mark(ch) {
            pending_dash = true;
        }
    }

    slug.chars().take(MAX_SLUG_LEN).collect::<String>().trim_end_matches('-').to_string()
}

fn is_combining_mark(ch: char) -> bool {
    matches!(ch, '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' | '\u{20D0}'..='\u{20FF}')
}

/// Check a client-supplied slug: non-empty, lowercase alphanumerics and
/// single dashes, no leading or trailing dash.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() || slug.chars().count() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "slug must be between 1 and {MAX_SLUG_LEN} characters"
        )));
    }
    let well_formed = slug
        .chars()
        .all(|c| c == '-' || (c.is_alphanumeric() && !c.is_uppercase()))
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--");
    if !well_formed {
        return Err(CoreError::Validation(format!(
            "slug '{slug}' must contain only lowercase letters, digits and single dashes"
        )));
    }
    Ok(())
}
