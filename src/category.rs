use std::fmt;

/// A bucket emails are sorted into. Every category is backed by one file in
/// the output directory (see [`Category::file_name`]).
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(into = "String", from = "String"))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Microsoft,
    Outlook,
    GmailPersonal,
    GmailEnterprise,
    Other,
    InvalidFormat,
    /// Label coming from an MX dictionary entry.
    Custom(String),
}

impl Category {
    /// Categories reloaded by `--reuse-existing`.
    pub const BUILTIN: [Category; 4] = [
        Category::Microsoft,
        Category::Outlook,
        Category::GmailPersonal,
        Category::GmailEnterprise,
    ];

    pub fn label(&self) -> &str {
        match self {
            Self::Microsoft => "Microsoft",
            Self::Outlook => "Outlook",
            Self::GmailPersonal => "Gmail_Personal",
            Self::GmailEnterprise => "Gmail_Enterprise",
            Self::Other => "Other",
            Self::InvalidFormat => "invalid_format",
            Self::Custom(label) => label.as_str(),
        }
    }

    /// Maps a label back to its category. Labels of the fixed set resolve to
    /// their variant, anything else becomes [`Category::Custom`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "Microsoft" => Self::Microsoft,
            "Outlook" => Self::Outlook,
            "Gmail_Personal" => Self::GmailPersonal,
            "Gmail_Enterprise" => Self::GmailEnterprise,
            "Other" => Self::Other,
            "invalid_format" => Self::InvalidFormat,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn is_builtin(&self) -> bool {
        Self::BUILTIN.contains(self)
    }

    /// `<label>.txt` with every `.` replaced by `_`.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.label().replace('.', "_"))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}
