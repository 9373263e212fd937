use std::str::FromStr;

use crate::foundation::error::{PhotocalError, PhotocalResult};

/// Supported locales. A closed enumeration: adding a locale means adding a
/// variant and a table entry, never changing control flow.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// Lithuanian (the application default).
    #[default]
    Lt,
}

impl Language {
    /// Lowercase locale code used in project files and file names.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Lt => "lt",
        }
    }

    /// All supported locales in a stable order.
    pub fn all() -> [Language; 2] {
        [Language::En, Language::Lt]
    }
}

impl FromStr for Language {
    type Err = PhotocalError;

    fn from_str(s: &str) -> PhotocalResult<Self> {
        match s {
            "en" => Ok(Language::En),
            "lt" => Ok(Language::Lt),
            other => Err(PhotocalError::validation(format!(
                "unsupported locale code '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// User-facing interface strings for one locale.
#[derive(Clone, Copy, Debug)]
pub struct UiStrings {
    /// Application title.
    pub title: &'static str,
    /// "Year" label.
    pub year: &'static str,
    /// "Language" label.
    pub language: &'static str,
    /// Export action label.
    pub export_pdf: &'static str,
    /// Save action label.
    pub save_project: &'static str,
    /// Load action label.
    pub load_project: &'static str,
    /// Add-photo action label.
    pub add_photo: &'static str,
    /// Remove-photo action label.
    pub remove_photo: &'static str,
    /// "Page" label used in page counters.
    pub page: &'static str,
    /// "of" connective used in page counters.
    pub of: &'static str,
    /// Empty-slot hint (click).
    pub click_to_add_photo: &'static str,
    /// Empty-slot hint (drag or click).
    pub drag_or_click: &'static str,
    /// Export-in-progress message.
    pub generating: &'static str,
}

/// Full translation table for one locale.
#[derive(Clone, Copy, Debug)]
pub struct LocalePack {
    /// Month names, January first.
    pub months: [&'static str; 12],
    /// Weekday abbreviations, Monday first.
    pub days_short: [&'static str; 7],
    /// Interface strings.
    pub ui: UiStrings,
}

static EN: LocalePack = LocalePack {
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    days_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    ui: UiStrings {
        title: "Calendar Maker",
        year: "Year",
        language: "Language",
        export_pdf: "Export PDF",
        save_project: "Save Project",
        load_project: "Load Project",
        add_photo: "Add Photo",
        remove_photo: "Remove",
        page: "Page",
        of: "of",
        click_to_add_photo: "Click to add photo",
        drag_or_click: "Drag & drop or click to add photo",
        generating: "Generating PDF...",
    },
};

static LT: LocalePack = LocalePack {
    months: [
        "Sausis",
        "Vasaris",
        "Kovas",
        "Balandis",
        "Gegužė",
        "Birželis",
        "Liepa",
        "Rugpjūtis",
        "Rugsėjis",
        "Spalis",
        "Lapkritis",
        "Gruodis",
    ],
    days_short: ["Pr", "An", "Tr", "Kt", "Pn", "Št", "Sk"],
    ui: UiStrings {
        title: "Kalendoriaus Kūrėjas",
        year: "Metai",
        language: "Kalba",
        export_pdf: "Eksportuoti PDF",
        save_project: "Išsaugoti projektą",
        load_project: "Įkelti projektą",
        add_photo: "Pridėti nuotrauką",
        remove_photo: "Pašalinti",
        page: "Puslapis",
        of: "iš",
        click_to_add_photo: "Paspauskite, kad pridėtumėte nuotrauką",
        drag_or_click: "Vilkite arba paspauskite, kad pridėtumėte nuotrauką",
        generating: "Generuojamas PDF...",
    },
};

/// Look up the translation table for a locale.
pub fn locale_strings(lang: Language) -> &'static LocalePack {
    match lang {
        Language::En => &EN,
        Language::Lt => &LT,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/locale/table.rs"]
mod tests;
