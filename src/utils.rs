// src/utils.rs
use std::collections::HashSet;

/// Labels prefixed to the target when the live lookup fails.
pub const FALLBACK_LABELS: [&str; 6] = ["www", "mail", "admin", "api", "dev", "test"];

/// The single form of the target used everywhere: trimmed and lowercased.
pub fn normalize_domain(domain: &str) -> String {
    domain.trim().to_lowercase()
}

/// Remove duplicate subdomains, keeping the first occurrence of each.
pub fn deduplicate_subdomains(subdomains: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for subdomain in subdomains {
        if seen.insert(subdomain.clone()) {
            unique.push(subdomain);
        }
    }

    unique
}

/// Synthetic list used when the host search cannot be completed.
pub fn fallback_subdomains(domain: &str) -> Vec<String> {
    FALLBACK_LABELS
        .iter()
        .map(|label| format!("{}.{}", label, domain))
        .collect()
}

/// `PhantomEye_Report_<domain>_<unix_timestamp>.pdf`
pub fn report_filename(domain: &str, timestamp: i64) -> String {
    format!("PhantomEye_Report_{}_{}.pdf", domain, timestamp)
}

/// Built-in PDF fonts only cover Latin-1 style encodings; keep output to printable ASCII.
pub fn pdf_safe(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
        .collect()
}
