/// Institutional domain policy applied at registration.
#[derive(Debug, Clone)]
pub struct DomainPolicy {
    suffix: String,
}

impl DomainPolicy {
    pub fn new(suffix: &str) -> Self {
        Self {
            suffix: suffix.trim().to_owned(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The email as supplied must end with the suffix, preceded by a
    /// non-empty local part.
    pub fn allows(&self, email: &str) -> bool {
        match email.strip_suffix(self.suffix.as_str()) {
            Some(local) => {
                !local.is_empty()
                    && !local.contains('@')
                    && !local.chars().any(char::is_whitespace)
            }
            None => false,
        }
    }
}

impl Default for DomainPolicy {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_EMAIL_SUFFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_institutional_addresses() {
        let policy = DomainPolicy::default();
        assert!(policy.allows("jane.doe@stu.bmcc.cuny.edu"));
        assert!(policy.allows("Jane.Doe@stu.bmcc.cuny.edu"));
    }

    #[test]
    fn rejects_everything_else() {
        let policy = DomainPolicy::default();
        for email in [
            "jane@gmail.com",
            "@stu.bmcc.cuny.edu",
            "jane@stu.bmcc.cuny.edu.evil.com",
            "jane@bmcc.cuny.edu",
            "a@b@stu.bmcc.cuny.edu",
            "ja ne@stu.bmcc.cuny.edu",
            " jane@stu.bmcc.cuny.edu",
        ] {
            assert!(!policy.allows(email), "{email} should be rejected");
        }
    }

    #[test]
    fn custom_suffix_is_trimmed() {
        let policy = DomainPolicy::new(" @example.edu ");
        assert_eq!(policy.suffix(), "@example.edu");
        assert!(policy.allows("x@example.edu"));
    }
}
