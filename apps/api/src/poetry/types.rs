//! Poem request vocabulary — languages, poetic forms and moods.
//!
//! Each enum (de)serializes as its display label, the same strings the front-end
//! shows in its dropdowns. Labels outside the known set are kept as `Other` and
//! handled permissively downstream (generic instructions, no truncation).

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    English,
    German,
    Hindi,
    Russian,
    Chinese,
    Other(String),
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::German,
        Language::Hindi,
        Language::Russian,
        Language::Chinese,
    ];

    pub fn label(&self) -> &str {
        match self {
            Language::English => "English",
            Language::German => "Deutsch (German)",
            Language::Hindi => "Hindi",
            Language::Russian => "Русский (Russian)",
            Language::Chinese => "中文 (Chinese)",
            Language::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|l| l.label() == label)
            .unwrap_or_else(|| Language::Other(label.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PoeticForm {
    #[default]
    Haiku,
    Quatrain,
    Couplets,
    Sonnet,
    FreeForm,
    Other(String),
}

impl PoeticForm {
    pub const ALL: [PoeticForm; 5] = [
        PoeticForm::Haiku,
        PoeticForm::Quatrain,
        PoeticForm::Couplets,
        PoeticForm::Sonnet,
        PoeticForm::FreeForm,
    ];

    pub fn label(&self) -> &str {
        match self {
            PoeticForm::Haiku => "Haiku-like (3 lines)",
            PoeticForm::Quatrain => "Quatrain (4 lines)",
            PoeticForm::Couplets => "Couplets (2–4 rhymed lines)",
            PoeticForm::Sonnet => "Sonnet (14 lines)",
            PoeticForm::FreeForm => "Free form (up to 10 lines)",
            PoeticForm::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.label() == label)
            .unwrap_or_else(|| PoeticForm::Other(label.to_string()))
    }

    /// Upper bound on kept lines. `None` for unrecognized forms (no truncation).
    pub fn max_lines(&self) -> Option<usize> {
        match self {
            PoeticForm::Haiku => Some(3),
            PoeticForm::Quatrain => Some(4),
            PoeticForm::Couplets => Some(4),
            PoeticForm::Sonnet => Some(14),
            PoeticForm::FreeForm => Some(10),
            PoeticForm::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    #[default]
    Romantic,
    Melancholic,
    Nature,
    Other(String),
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Romantic, Mood::Melancholic, Mood::Nature];

    pub fn label(&self) -> &str {
        match self {
            Mood::Romantic => "Romantic",
            Mood::Melancholic => "Melancholic",
            Mood::Nature => "Nature",
            Mood::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.label() == label)
            .unwrap_or_else(|| Mood::Other(label.to_string()))
    }
}

macro_rules! label_conversions {
    ($($ty:ty),*) => {$(
        impl From<String> for $ty {
            fn from(label: String) -> Self {
                <$ty>::from_label(&label)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.label().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    )*};
}

label_conversions!(Language, PoeticForm, Mood);

/// Per-form `num_predict` budgets sent to the model.
///
/// Interactive and dataset call sites keep their own table; they agree on every
/// known form and differ only in the fallback for unrecognized forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBudgets {
    pub haiku: u32,
    pub quatrain: u32,
    pub couplets: u32,
    pub sonnet: u32,
    pub free_form: u32,
    pub fallback: u32,
}

impl TokenBudgets {
    pub const fn interactive() -> Self {
        Self {
            haiku: 40,
            quatrain: 80,
            couplets: 100,
            sonnet: 180,
            free_form: 120,
            fallback: 80,
        }
    }

    pub const fn dataset() -> Self {
        Self {
            fallback: 120,
            ..Self::interactive()
        }
    }

    pub fn for_form(&self, form: &PoeticForm) -> u32 {
        match form {
            PoeticForm::Haiku => self.haiku,
            PoeticForm::Quatrain => self.quatrain,
            PoeticForm::Couplets => self.couplets,
            PoeticForm::Sonnet => self.sonnet,
            PoeticForm::FreeForm => self.free_form,
            PoeticForm::Other(_) => self.fallback,
        }
    }
}

impl Default for TokenBudgets {
    fn default() -> Self {
        Self::interactive()
    }
}
