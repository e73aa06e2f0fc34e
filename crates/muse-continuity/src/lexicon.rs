//! Category lexicon: static map from idea category to domain terms used
//! to boost continuation matches. Pure lookup, no mutation.

/// Fallback terms for categories the lexicon does not know.
pub const GENERIC_TERMS: &[&str] = &["general", "idea", "concept", "plan"];

/// Domain terms for a category. Unknown categories fall back to
/// [`GENERIC_TERMS`].
pub fn terms_for(category: &str) -> &'static [&'static str] {
    match category {
        "Business" => &[
            "business", "startup", "revenue", "market", "customer", "product", "sales", "growth",
        ],
        "Technology" => &[
            "technology", "software", "platform", "system", "data", "automation", "cloud", "tool",
        ],
        "Creative" => &[
            "creative", "design", "story", "music", "writing", "visual", "artistic",
        ],
        "Personal" => &[
            "personal", "habit", "routine", "goal", "lifestyle", "relationship", "journal",
        ],
        "Health" => &[
            "health", "fitness", "wellness", "nutrition", "exercise", "sleep", "mental",
        ],
        "Productivity" => &[
            "productivity", "workflow", "schedule", "planning", "focus", "tracking", "efficiency",
        ],
        "Education" => &[
            "education", "learning", "course", "teaching", "skill", "study", "curriculum",
        ],
        "Finance" => &[
            "finance", "budget", "investment", "savings", "income", "spending", "portfolio",
        ],
        _ => GENERIC_TERMS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_has_domain_terms() {
        let terms = terms_for("Business");
        assert!(terms.contains(&"startup"));
        assert!(terms.len() >= 6 && terms.len() <= 10);
    }

    #[test]
    fn unknown_category_falls_back_to_generic() {
        assert_eq!(terms_for("Astrology"), GENERIC_TERMS);
        assert_eq!(terms_for(""), GENERIC_TERMS);
    }

    #[test]
    fn lookup_is_case_sensitive_by_convention() {
        // Categories are stored with the conventional capitalization.
        assert_eq!(terms_for("business"), GENERIC_TERMS);
    }
}
