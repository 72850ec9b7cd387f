//! Identifier normalizer for pillar and question ids.

/// Converts a free-text label into a lowercase, hyphen-separated identifier.
///
/// Letters and digits of any script are kept and lowercased. Every other run
/// collapses into a single hyphen, and leading/trailing hyphens are trimmed.
/// A label with no letters or digits yields an empty id.
///
/// ```
/// use lens_builder::domain::foundation::slugify;
///
/// assert_eq!(slugify("Hello World!"), "hello-world");
/// assert_eq!(slugify(&slugify("Is backup enabled?")), "is-backup-enabled");
/// assert_eq!(slugify("¿Está habilitado?"), "está-habilitado");
/// ```
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_hyphen = false;

    for ch in label.chars() {
        if !ch.is_alphanumeric() {
            pending_hyphen = true;
            continue;
        }
        // Lowercasing may add combining marks (`İ` -> `i̇`); only letters and digits stay.
        for lower in ch.to_lowercase().filter(|c| c.is_alphanumeric()) {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(lower);
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello World!"), "hello-world");
        assert_eq!(slugify("Security"), "security");
        assert_eq!(slugify("Is backup enabled?"), "is-backup-enabled");
    }

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slugify("Cost  --  Optimization"), "cost-optimization");
        assert_eq!(slugify("a_b.c/d"), "a-b-c-d");
    }

    #[test]
    fn slugify_trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  --Reliability--  "), "reliability");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slugify_empty_input_yields_empty_id() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn slugify_keeps_letters_of_any_script() {
        assert_eq!(slugify("Café Ops"), "café-ops");
        assert_eq!(slugify("¿Está habilitado?"), "está-habilitado");
        assert_eq!(slugify("Безопасность"), "безопасность");
        assert_eq!(slugify("信頼性 2"), "信頼性-2");
    }

    #[test]
    fn slugify_drops_marks_added_by_lowercasing() {
        let once = slugify("İstanbul Region");
        assert_eq!(once, "istanbul-region");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn slugify_keeps_digits() {
        assert_eq!(slugify("Q1 2024 Review"), "q1-2024-review");
    }

    #[test]
    fn slugify_is_idempotent_on_normalized_input() {
        let once = slugify("Operational Excellence & Safety");
        assert_eq!(slugify(&once), once);
    }
}
