use std::collections::HashMap;

use lazy_static::lazy_static;

/// Language every unknown language code falls back to.
pub const DEFAULT_LANGUAGE: &str = "en";

lazy_static! {
    /// Canned answers keyed by language code, then by the exact question
    /// text. Lookups are case sensitive; anything not matched verbatim
    /// goes to the completion backend instead.
    static ref FAQS: HashMap<&'static str, HashMap<&'static str, &'static str>> = {
        let mut en = HashMap::new();
        en.insert(
            "What are your working hours?",
            "Our support team is available 24/7.",
        );
        en.insert(
            "How can I reset my password?",
            "You can reset your password by clicking on 'Forgot Password' on the login page.",
        );
        en.insert(
            "Do you offer refunds?",
            "Yes, we offer refunds within 30 days of purchase.",
        );

        let mut es = HashMap::new();
        es.insert(
            "What are your working hours?",
            "Nuestro equipo de soporte está disponible 24/7.",
        );
        es.insert(
            "How can I reset my password?",
            "Puede restablecer su contraseña haciendo clic en 'Olvidé mi contraseña' en la página de inicio de sesión.",
        );
        es.insert(
            "Do you offer refunds?",
            "Sí, ofrecemos reembolsos dentro de los 30 días posteriores a la compra.",
        );

        let mut faqs = HashMap::new();
        faqs.insert("en", en);
        faqs.insert("es", es);
        faqs
    };
}

/// Map a requested language to one we have a table for.
pub fn resolve_language(requested: &str) -> &'static str {
    FAQS.get_key_value(requested)
        .map(|(lang, _)| *lang)
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Look up a question in the given language's table. The language is
/// expected to be already resolved; there is no second fallback here.
pub fn lookup(language: &str, question: &str) -> Option<&'static str> {
    FAQS.get(language)?.get(question).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_question_returns_canned_answer() {
        let answer = lookup("en", "Do you offer refunds?");
        assert_eq!(answer, Some("Yes, we offer refunds within 30 days of purchase."));
    }

    #[test]
    fn spanish_table_is_localized() {
        let answer = lookup("es", "What are your working hours?");
        assert_eq!(answer, Some("Nuestro equipo de soporte está disponible 24/7."));
    }

    #[test]
    fn unknown_language_resolves_to_default() {
        assert_eq!(resolve_language("fr"), "en");
        assert_eq!(resolve_language("es"), "es");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(lookup("en", "do you offer refunds?").is_none());
    }

    #[test]
    fn unknown_question_misses() {
        assert!(lookup("en", "What is the meaning of life?").is_none());
    }
}
