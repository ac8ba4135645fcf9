//! Built-in provider rules, evaluated in order against the primary MX host.

use crate::{Category, Dictionary};

/// What a matching rule classifies the email as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Always(Category),
    /// `personal` when the email domain equals `domain`, else `hosted`.
    ByEmailDomain {
        domain: &'static str,
        personal: Category,
        hosted: Category,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRule {
    pub name: &'static str,
    /// Trailing labels of the MX host, left to right.
    pub labels: &'static [&'static str],
    pub outcome: RuleOutcome,
}

// Microsoft must stay ahead of Outlook: its labels are a longer suffix.
pub static PROVIDER_RULES: &[ProviderRule] = &[
    ProviderRule {
        name: "microsoft",
        labels: &["mail", "protection", "outlook", "com"],
        outcome: RuleOutcome::Always(Category::Microsoft),
    },
    ProviderRule {
        name: "outlook",
        labels: &["outlook", "com"],
        outcome: RuleOutcome::Always(Category::Outlook),
    },
    ProviderRule {
        name: "google",
        labels: &["google", "com"],
        outcome: RuleOutcome::ByEmailDomain {
            domain: "gmail.com",
            personal: Category::GmailPersonal,
            hosted: Category::GmailEnterprise,
        },
    },
];

impl ProviderRule {
    pub fn matches(&self, mx_host: &str) -> bool {
        let host_labels: Vec<&str> = mx_host.split('.').collect();
        host_labels.ends_with(self.labels)
    }

    pub fn category(&self, email_domain: &str) -> Category {
        match &self.outcome {
            RuleOutcome::Always(category) => category.clone(),
            RuleOutcome::ByEmailDomain {
                domain,
                personal,
                hosted,
            } => {
                if email_domain == *domain {
                    personal.clone()
                } else {
                    hosted.clone()
                }
            }
        }
    }
}

/// First built-in rule matching `mx_host`.
pub fn match_provider(mx_host: &str) -> Option<&'static ProviderRule> {
    PROVIDER_RULES.iter().find(|rule| rule.matches(mx_host))
}

/// Full cascade: built-in rules, then dictionary suffixes, then `Other`.
pub fn categorize(mx_host: &str, email_domain: &str, dictionary: Option<&Dictionary>) -> Category {
    if let Some(rule) = match_provider(mx_host) {
        return rule.category(email_domain);
    }
    dictionary
        .and_then(|dict| dict.match_category(mx_host))
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn protection_host_is_microsoft() {
        assert_eq!(
            categorize("contoso-com.mail.protection.outlook.com", "contoso.com", None),
            Category::Microsoft
        );
    }

    #[test]
    fn plain_outlook_host_is_outlook() {
        assert_eq!(
            categorize("eur.olc.protection.outlook.com", "hotmail.fr", None),
            Category::Outlook
        );
        assert_eq!(categorize("outlook.com", "live.com", None), Category::Outlook);
    }

    #[test]
    fn google_host_splits_on_email_domain() {
        assert_eq!(
            categorize("gmail-smtp-in.l.google.com", "gmail.com", None),
            Category::GmailPersonal
        );
        assert_eq!(
            categorize("aspmx.l.google.com", "startup.io", None),
            Category::GmailEnterprise
        );
    }

    #[test]
    fn label_match_is_not_a_string_suffix() {
        assert_eq!(categorize("mx.notgoogle.com", "a.com", None), Category::Other);
        assert_eq!(categorize("myoutlook.com", "a.com", None), Category::Other);
    }

    #[test]
    fn builtin_rules_win_over_dictionary() {
        let dict: Dictionary = [("outlook.com", "Acme")].into_iter().collect();
        assert_eq!(
            categorize("x.outlook.com", "a.com", Some(&dict)),
            Category::Outlook
        );
    }

    #[test]
    fn dictionary_fallback_then_other() {
        let dict: Dictionary = [("corp.com", "Acme")].into_iter().collect();
        assert_eq!(
            categorize("mx.x.corp.com", "x.corp.com", Some(&dict)),
            Category::Custom("Acme".into())
        );
        assert_eq!(
            categorize("mx.elsewhere.net", "x.corp.com", Some(&dict)),
            Category::Other
        );
        assert_eq!(categorize("mx.x.corp.com", "x.corp.com", None), Category::Other);
    }

    #[test]
    fn rule_names_are_ordered() {
        let names: Vec<_> = PROVIDER_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, ["microsoft", "outlook", "google"]);
    }

    proptest! {
        #[test]
        fn protection_prefix_never_outlook(prefix in "[a-z0-9-]{1,20}") {
            let host = format!("{prefix}.mail.protection.outlook.com");
            prop_assert_eq!(categorize(&host, "example.org", None), Category::Microsoft);
        }

        #[test]
        fn non_gmail_google_is_enterprise(domain in "[a-z]{1,10}\\.(org|net|io)") {
            prop_assert_eq!(
                categorize("aspmx.l.google.com", &domain, None),
                Category::GmailEnterprise
            );
        }
    }
}
