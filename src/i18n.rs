// src/i18n.rs
use serde::Deserialize;

/// Cookie that stores the visitor's display language.
pub const LANG_COOKIE: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Hindi,
    Gujarati,
    English,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::Hindi, Lang::Gujarati, Lang::English];

    /// Stable storage key; never change these once shipped.
    pub fn key(self) -> &'static str {
        match self {
            Lang::Hindi => "hindi",
            Lang::Gujarati => "gujarati",
            Lang::English => "english",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "hindi" => Some(Lang::Hindi),
            "gujarati" => Some(Lang::Gujarati),
            "english" => Some(Lang::English),
            _ => None,
        }
    }

    /// Value for `<html lang>`.
    pub fn html_code(self) -> &'static str {
        match self {
            Lang::Hindi => "hi",
            Lang::Gujarati => "gu",
            Lang::English => "en",
        }
    }

    /// Name of the language written in itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::Hindi => "हिन्दी",
            Lang::Gujarati => "ગુજરાતી",
            Lang::English => "English",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    SiteTitle,
    Tagline,
    Directory,
    Register,
    SearchPlaceholder,
    AllDistricts,
    AllCategories,
    PincodePlaceholder,
    GridView,
    ListView,
    ResultsFound,
    NoResults,
    Featured,
    Owner,
    Call,
    WhatsApp,
    Email,
    Share,
    Website,
    Address,
    BackToDirectory,
    LoadFailed,
    Reload,
    Close,
    Newsletter,
    Subscribe,
    Category,
    District,
    Pincode,
    NotFound,
}

pub fn t(lang: Lang, key: Key) -> &'static str {
    use Key::*;
    match (key, lang) {
        (SiteTitle, Lang::Hindi) => "केवल सनातनी व्यापार",
        (SiteTitle, Lang::Gujarati) => "કેવળ સનાતની વ્યાપાર",
        (SiteTitle, Lang::English) => "Keval Sanatani Vyapar",

        (Tagline, Lang::Hindi) => "सनातनी व्यापार नेटवर्क",
        (Tagline, Lang::Gujarati) => "સનાતની વ્યાપાર નેટવર્ક",
        (Tagline, Lang::English) => "Sanatani business network",

        (Directory, Lang::Hindi) => "व्यापार सूची",
        (Directory, Lang::Gujarati) => "વ્યાપાર યાદી",
        (Directory, Lang::English) => "Directory",

        (Register, Lang::Hindi) => "अपना व्यापार जोड़ें",
        (Register, Lang::Gujarati) => "તમારો વ્યાપાર ઉમેરો",
        (Register, Lang::English) => "Add your business",

        (SearchPlaceholder, Lang::Hindi) => "व्यापार, मालिक या विवरण खोजें",
        (SearchPlaceholder, Lang::Gujarati) => "વ્યાપાર, માલિક અથવા વિગત શોધો",
        (SearchPlaceholder, Lang::English) => "Search business, owner or description",

        (AllDistricts, Lang::Hindi) => "सभी जिले",
        (AllDistricts, Lang::Gujarati) => "બધા જિલ્લા",
        (AllDistricts, Lang::English) => "All districts",

        (AllCategories, Lang::Hindi) => "सभी श्रेणियाँ",
        (AllCategories, Lang::Gujarati) => "બધી શ્રેણીઓ",
        (AllCategories, Lang::English) => "All categories",

        (PincodePlaceholder, Lang::Hindi) => "पिनकोड",
        (PincodePlaceholder, Lang::Gujarati) => "પિનકોડ",
        (PincodePlaceholder, Lang::English) => "Pincode",

        (GridView, Lang::Hindi) => "ग्रिड",
        (GridView, Lang::Gujarati) => "ગ્રિડ",
        (GridView, Lang::English) => "Grid",

        (ListView, Lang::Hindi) => "सूची",
        (ListView, Lang::Gujarati) => "યાદી",
        (ListView, Lang::English) => "List",

        (ResultsFound, Lang::Hindi) => "व्यापार मिले",
        (ResultsFound, Lang::Gujarati) => "વ્યાપાર મળ્યા",
        (ResultsFound, Lang::English) => "businesses found",

        (NoResults, Lang::Hindi) => "कोई व्यापार नहीं मिला",
        (NoResults, Lang::Gujarati) => "કોઈ વ્યાપાર મળ્યો નથી",
        (NoResults, Lang::English) => "No businesses found",

        (Featured, Lang::Hindi) => "विशेष व्यापार",
        (Featured, Lang::Gujarati) => "વિશેષ વ્યાપાર",
        (Featured, Lang::English) => "Featured businesses",

        (Owner, Lang::Hindi) => "मालिक",
        (Owner, Lang::Gujarati) => "માલિક",
        (Owner, Lang::English) => "Owner",

        (Call, Lang::Hindi) => "कॉल करें",
        (Call, Lang::Gujarati) => "કૉલ કરો",
        (Call, Lang::English) => "Call",

        (WhatsApp, _) => "WhatsApp",

        (Email, Lang::Hindi) => "ईमेल",
        (Email, Lang::Gujarati) => "ઈમેલ",
        (Email, Lang::English) => "Email",

        (Share, Lang::Hindi) => "शेयर करें",
        (Share, Lang::Gujarati) => "શેર કરો",
        (Share, Lang::English) => "Share",

        (Website, Lang::Hindi) => "वेबसाइट",
        (Website, Lang::Gujarati) => "વેબસાઇટ",
        (Website, Lang::English) => "Website",

        (Address, Lang::Hindi) => "पता",
        (Address, Lang::Gujarati) => "સરનામું",
        (Address, Lang::English) => "Address",

        (BackToDirectory, Lang::Hindi) => "← सूची पर वापस",
        (BackToDirectory, Lang::Gujarati) => "← યાદી પર પાછા",
        (BackToDirectory, Lang::English) => "← Back to directory",

        (LoadFailed, Lang::Hindi) => "व्यापार लोड करने में समस्या हुई",
        (LoadFailed, Lang::Gujarati) => "વ્યાપાર લોડ કરવામાં સમસ્યા આવી",
        (LoadFailed, Lang::English) => "There was a problem loading businesses",

        (Reload, Lang::Hindi) => "फिर से लोड करें",
        (Reload, Lang::Gujarati) => "ફરી લોડ કરો",
        (Reload, Lang::English) => "Reload",

        (Close, Lang::Hindi) => "बंद करें",
        (Close, Lang::Gujarati) => "બંધ કરો",
        (Close, Lang::English) => "Close",

        (Newsletter, Lang::Hindi) => "न्यूज़लेटर के लिए ईमेल",
        (Newsletter, Lang::Gujarati) => "ન્યૂઝલેટર માટે ઈમેલ",
        (Newsletter, Lang::English) => "Email for the newsletter",

        (Subscribe, Lang::Hindi) => "सदस्यता लें",
        (Subscribe, Lang::Gujarati) => "સભ્ય બનો",
        (Subscribe, Lang::English) => "Subscribe",

        (Category, Lang::Hindi) => "श्रेणी",
        (Category, Lang::Gujarati) => "શ્રેણી",
        (Category, Lang::English) => "Category",

        (District, Lang::Hindi) => "जिला",
        (District, Lang::Gujarati) => "જિલ્લો",
        (District, Lang::English) => "District",

        (Pincode, Lang::Hindi) => "पिनकोड",
        (Pincode, Lang::Gujarati) => "પિનકોડ",
        (Pincode, Lang::English) => "Pincode",

        (NotFound, Lang::Hindi) => "पृष्ठ नहीं मिला",
        (NotFound, Lang::Gujarati) => "પાનું મળ્યું નથી",
        (NotFound, Lang::English) => "Page not found",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_key(lang.key()), Some(lang));
        }
        assert_eq!(Lang::from_key("marathi"), None);
    }
}
