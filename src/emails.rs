/// Role mailboxes that most organisations expose.
pub const EMAIL_ROLES: [&str; 5] = ["admin", "contact", "security", "support", "hr"];

/// Guess the role-based addresses of `domain`. Always returns five entries in role order.
pub fn guess_emails(domain: &str) -> Vec<String> {
    EMAIL_ROLES
        .iter()
        .map(|role| format!("{}@{}", role, domain))
        .collect()
}
