//! # Localization Module
//!
//! Languages, bundled message catalogs, and the key-resolution fallback
//! chain.
//!
//! ## Fallback Chain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Resolving a Message Key                               │
//! │                                                                         │
//! │  tr("saveToDb")                                                         │
//! │       │                                                                 │
//! │       ├── 1. Database override for the active language?                 │
//! │       │      └── yes → return it (admins can retranslate at runtime)    │
//! │       │                                                                 │
//! │       ├── 2. Bundled catalog for the active language?                   │
//! │       │      └── yes → return it (shipped with the binary)              │
//! │       │                                                                 │
//! │       └── 3. Return the key itself, verbatim                            │
//! │              └── worst case the UI shows "saveToDb", never an error     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The database tier lives in `ostoskori-db`; this module only consumes the
//! already-loaded override map, so the chain itself stays pure and testable.
//!
//! ## Placeholder Convention
//! Catalog entries that take an argument use `{0}` (e.g. `promptPriceFor`),
//! substituted by [`Translator::tr_arg`].

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Language
// =============================================================================

/// Languages the demo ships catalogs for.
///
/// The set mirrors the original app's language menu: English, French,
/// Urdu, Vietnamese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Ur,
    Vi,
}

impl Language {
    /// All supported languages, in menu order.
    pub const ALL: [Language; 4] = [Language::En, Language::Fr, Language::Ur, Language::Vi];

    /// Returns the short ISO 639-1 code ("en", "fr", ...).
    pub const fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ur => "ur",
            Language::Vi => "vi",
        }
    }

    /// Parses a language code, case-insensitively.
    ///
    /// Returns `None` for codes outside the supported set.
    pub fn try_from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            "ur" => Some(Language::Ur),
            "vi" => Some(Language::Vi),
            _ => None,
        }
    }

    /// Parses a language code, falling back to English for anything
    /// unrecognized. Mirrors the original's default-locale bundle behavior.
    pub fn from_code(code: &str) -> Language {
        Language::try_from_code(code).unwrap_or(Language::En)
    }

    /// True for right-to-left scripts.
    ///
    /// The original flipped its widget orientation for Urdu; the console
    /// front end only uses this as a display hint.
    pub const fn is_right_to_left(&self) -> bool {
        matches!(self, Language::Ur)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Bundled Catalogs
// =============================================================================

/// Every message key the UI layer is allowed to ask for.
///
/// Each bundled catalog below covers all of these, so tier 3 of the
/// fallback chain (raw key) only ever fires for keys outside this list.
pub const MESSAGE_KEYS: [&str; 18] = [
    "title",
    "selectLanguage",
    "confirmLanguage",
    "enterItemsCount",
    "itemsCountPlaceholder",
    "enterItems",
    "calculateTotal",
    "saveToDb",
    "itemWord",
    "promptPriceFor",
    "ok",
    "cancel",
    "errInvalidCount",
    "errInvalidPrice",
    "errNoItems",
    "msgCancelled",
    "savedToDb",
    "messageTitle",
];

const CATALOG_EN: [(&str, &str); 18] = [
    ("title", "Shopping Cart"),
    ("selectLanguage", "Select language:"),
    ("confirmLanguage", "Confirm"),
    ("enterItemsCount", "Enter the number of items:"),
    ("itemsCountPlaceholder", "e.g. 3"),
    ("enterItems", "Enter items"),
    ("calculateTotal", "Calculate total"),
    ("saveToDb", "Save to database"),
    ("itemWord", "Item"),
    ("promptPriceFor", "Enter price for item {0}:"),
    ("ok", "OK"),
    ("cancel", "Cancel"),
    ("errInvalidCount", "Please enter a valid number of items."),
    ("errInvalidPrice", "Please enter a valid price."),
    ("errNoItems", "No items entered."),
    ("msgCancelled", "Entry cancelled after {0} item(s)."),
    ("savedToDb", "Shopping cart saved to database."),
    ("messageTitle", "Message"),
];

const CATALOG_FR: [(&str, &str); 18] = [
    ("title", "Panier"),
    ("selectLanguage", "Choisissez la langue :"),
    ("confirmLanguage", "Confirmer"),
    ("enterItemsCount", "Entrez le nombre d'articles :"),
    ("itemsCountPlaceholder", "p. ex. 3"),
    ("enterItems", "Saisir les articles"),
    ("calculateTotal", "Calculer le total"),
    ("saveToDb", "Enregistrer dans la base"),
    ("itemWord", "Article"),
    ("promptPriceFor", "Entrez le prix de l'article {0} :"),
    ("ok", "OK"),
    ("cancel", "Annuler"),
    ("errInvalidCount", "Veuillez entrer un nombre d'articles valide."),
    ("errInvalidPrice", "Veuillez entrer un prix valide."),
    ("errNoItems", "Aucun article saisi."),
    ("msgCancelled", "Saisie annulée après {0} article(s)."),
    ("savedToDb", "Panier enregistré dans la base de données."),
    ("messageTitle", "Message"),
];

const CATALOG_UR: [(&str, &str); 18] = [
    ("title", "خریداری کی ٹوکری"),
    ("selectLanguage", "زبان منتخب کریں:"),
    ("confirmLanguage", "تصدیق کریں"),
    ("enterItemsCount", "اشیاء کی تعداد درج کریں:"),
    ("itemsCountPlaceholder", "مثلاً 3"),
    ("enterItems", "اشیاء درج کریں"),
    ("calculateTotal", "کل حساب کریں"),
    ("saveToDb", "ڈیٹابیس میں محفوظ کریں"),
    ("itemWord", "شے"),
    ("promptPriceFor", "شے {0} کی قیمت درج کریں:"),
    ("ok", "ٹھیک ہے"),
    ("cancel", "منسوخ کریں"),
    ("errInvalidCount", "براہ کرم اشیاء کی درست تعداد درج کریں۔"),
    ("errInvalidPrice", "براہ کرم درست قیمت درج کریں۔"),
    ("errNoItems", "کوئی شے درج نہیں کی گئی۔"),
    ("msgCancelled", "{0} اشیاء کے بعد اندراج منسوخ کر دیا گیا۔"),
    ("savedToDb", "ٹوکری ڈیٹابیس میں محفوظ ہو گئی۔"),
    ("messageTitle", "پیغام"),
];

const CATALOG_VI: [(&str, &str); 18] = [
    ("title", "Giỏ hàng"),
    ("selectLanguage", "Chọn ngôn ngữ:"),
    ("confirmLanguage", "Xác nhận"),
    ("enterItemsCount", "Nhập số lượng mặt hàng:"),
    ("itemsCountPlaceholder", "vd. 3"),
    ("enterItems", "Nhập mặt hàng"),
    ("calculateTotal", "Tính tổng"),
    ("saveToDb", "Lưu vào cơ sở dữ liệu"),
    ("itemWord", "Mặt hàng"),
    ("promptPriceFor", "Nhập giá cho mặt hàng {0}:"),
    ("ok", "OK"),
    ("cancel", "Hủy"),
    ("errInvalidCount", "Vui lòng nhập số lượng mặt hàng hợp lệ."),
    ("errInvalidPrice", "Vui lòng nhập giá hợp lệ."),
    ("errNoItems", "Chưa nhập mặt hàng nào."),
    ("msgCancelled", "Đã hủy nhập sau {0} mặt hàng."),
    ("savedToDb", "Đã lưu giỏ hàng vào cơ sở dữ liệu."),
    ("messageTitle", "Thông báo"),
];

/// Looks up a key in the bundled catalog for one language.
fn bundled(language: Language, key: &str) -> Option<&'static str> {
    let catalog: &[(&str, &str)] = match language {
        Language::En => &CATALOG_EN,
        Language::Fr => &CATALOG_FR,
        Language::Ur => &CATALOG_UR,
        Language::Vi => &CATALOG_VI,
    };

    catalog.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

// =============================================================================
// Translator
// =============================================================================

/// Resolves message keys for one language through the fallback chain.
///
/// ## Lifecycle
/// Constructed fresh on every language switch, with whatever overrides the
/// database produced at that moment. Immutable afterwards; the previous
/// translator is simply dropped.
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    overrides: HashMap<String, String>,
}

impl Translator {
    /// Creates a translator using only the bundled catalog.
    pub fn new(language: Language) -> Self {
        Translator {
            language,
            overrides: HashMap::new(),
        }
    }

    /// Creates a translator with database-sourced overrides layered on top
    /// of the bundled catalog.
    ///
    /// An empty map is the normal degraded state when the store is
    /// unreachable; the bundled tier then serves every key.
    pub fn with_overrides(language: Language, overrides: HashMap<String, String>) -> Self {
        Translator {
            language,
            overrides,
        }
    }

    /// Returns the active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolves a message key.
    ///
    /// Resolution order: database override → bundled catalog → the key
    /// itself, verbatim. This can never fail, so the UI can never show a
    /// missing-translation error.
    pub fn tr<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(text) = self.overrides.get(key) {
            return text;
        }
        if let Some(text) = bundled(self.language, key) {
            return text;
        }
        key
    }

    /// Resolves a key and substitutes `{0}` with `arg`.
    ///
    /// Used for the parameterized messages `promptPriceFor` and
    /// `msgCancelled`.
    pub fn tr_arg(&self, key: &str, arg: impl fmt::Display) -> String {
        self.tr(key).replace("{0}", &arg.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
    }

    #[test]
    fn test_unknown_code_falls_back_to_english() {
        assert_eq!(Language::from_code("xx"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
        assert_eq!(Language::try_from_code("xx"), None);
    }

    #[test]
    fn test_code_parsing_is_case_insensitive() {
        assert_eq!(Language::from_code("FR"), Language::Fr);
        assert_eq!(Language::from_code(" Ur "), Language::Ur);
    }

    #[test]
    fn test_only_urdu_is_right_to_left() {
        assert!(Language::Ur.is_right_to_left());
        assert!(!Language::En.is_right_to_left());
        assert!(!Language::Fr.is_right_to_left());
        assert!(!Language::Vi.is_right_to_left());
    }

    /// Every bundled catalog must cover the full key contract, otherwise
    /// tier 3 (raw key) would leak into normal operation.
    #[test]
    fn test_catalogs_cover_all_message_keys() {
        for lang in Language::ALL {
            for key in MESSAGE_KEYS {
                assert!(
                    bundled(lang, key).is_some(),
                    "catalog {} is missing key {}",
                    lang,
                    key
                );
            }
        }
    }

    #[test]
    fn test_override_beats_bundle() {
        let mut overrides = HashMap::new();
        overrides.insert("title".to_string(), "Korin sisältö".to_string());

        let t = Translator::with_overrides(Language::En, overrides);
        assert_eq!(t.tr("title"), "Korin sisältö");
        // Keys without an override still come from the bundle
        assert_eq!(t.tr("ok"), "OK");
    }

    #[test]
    fn test_bundle_beats_raw_key() {
        let t = Translator::new(Language::Fr);
        assert_eq!(t.tr("cancel"), "Annuler");
    }

    #[test]
    fn test_unknown_key_returned_verbatim() {
        let t = Translator::new(Language::Vi);
        assert_eq!(t.tr("noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_tr_arg_substitution() {
        let t = Translator::new(Language::En);
        assert_eq!(t.tr_arg("promptPriceFor", 2), "Enter price for item 2:");
        assert_eq!(t.tr_arg("msgCancelled", 1), "Entry cancelled after 1 item(s).");
    }
}
