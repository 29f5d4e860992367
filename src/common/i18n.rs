// src/common/i18n.rs

use std::collections::HashMap;

// Catálogo de mensagens em memória. As chaves são os códigos internos de
// erro; cada idioma tem o seu mapa. Inglês é o idioma de fallback.
#[derive(Debug, Clone)]
pub struct I18nStore {
    catalogs: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

const DEFAULT_LANG: &str = "en";

impl I18nStore {
    pub fn new() -> Self {
        let mut catalogs = HashMap::new();

        let mut en = HashMap::new();
        en.insert("validation_failed", "One or more fields are invalid.");
        en.insert("email_exists", "This e-mail is already in use.");
        en.insert("invalid_credentials", "Invalid e-mail or password.");
        en.insert("invalid_token", "Missing or invalid authentication token.");
        en.insert("user_not_found", "User not found.");
        en.insert("business_not_found", "Business not found.");
        en.insert("booking_not_found", "Booking not found.");
        en.insert("settlement_not_found", "Settlement not found.");
        en.insert("notification_not_found", "Notification not found.");
        en.insert("category_not_found", "Category not found.");
        en.insert("business_not_approved", "This business is not approved for bookings.");
        en.insert("invalid_transition", "A booking cannot move from '{from}' to '{to}'.");
        en.insert("forbidden", "You do not have permission to perform this action.");
        en.insert("cancellation_reason_required", "A cancellation reason is required.");
        en.insert("internal_error", "An unexpected error occurred.");
        catalogs.insert("en", en);

        let mut hi = HashMap::new();
        hi.insert("validation_failed", "एक या अधिक फ़ील्ड अमान्य हैं।");
        hi.insert("email_exists", "यह ईमेल पहले से उपयोग में है।");
        hi.insert("invalid_credentials", "ईमेल या पासवर्ड गलत है।");
        hi.insert("invalid_token", "प्रमाणीकरण टोकन अनुपस्थित या अमान्य है।");
        hi.insert("user_not_found", "उपयोगकर्ता नहीं मिला।");
        hi.insert("business_not_found", "व्यवसाय नहीं मिला।");
        hi.insert("booking_not_found", "बुकिंग नहीं मिली।");
        hi.insert("settlement_not_found", "सेटलमेंट नहीं मिला।");
        hi.insert("notification_not_found", "सूचना नहीं मिली।");
        hi.insert("category_not_found", "श्रेणी नहीं मिली।");
        hi.insert("business_not_approved", "यह व्यवसाय बुकिंग के लिए स्वीकृत नहीं है।");
        hi.insert("invalid_transition", "बुकिंग '{from}' से '{to}' में नहीं बदल सकती।");
        hi.insert("forbidden", "आपको यह कार्य करने की अनुमति नहीं है।");
        hi.insert("cancellation_reason_required", "रद्द करने का कारण आवश्यक है।");
        hi.insert("internal_error", "एक अप्रत्याशित त्रुटि हुई।");
        catalogs.insert("hi", hi);

        Self { catalogs }
    }

    // Busca a mensagem no idioma pedido; cai para o inglês e, em último
    // caso, devolve a própria chave.
    pub fn translate(&self, lang: &str, key: &str) -> &'static str {
        if let Some(msg) = self.catalogs.get(lang).and_then(|catalog| catalog.get(key)).copied() {
            return msg;
        }

        self.catalogs
            .get(DEFAULT_LANG)
            .and_then(|catalog| catalog.get(key))
            .copied()
            .unwrap_or("internal_error")
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_language() {
        let store = I18nStore::new();
        assert_eq!(store.translate("hi", "user_not_found"), "उपयोगकर्ता नहीं मिला।");
    }

    #[test]
    fn falls_back_to_english_for_unknown_language() {
        let store = I18nStore::new();
        assert_eq!(store.translate("fr", "user_not_found"), "User not found.");
    }

    #[test]
    fn unknown_key_degrades_to_generic_message() {
        let store = I18nStore::new();
        assert_eq!(store.translate("en", "no_such_key"), "internal_error");
    }
}
