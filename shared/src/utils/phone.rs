//! Mobile number helpers for SMS code delivery

use once_cell::sync::Lazy;
use regex::Regex;

// Mainland China mobile numbers
static CHINA_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^1[3-9]\d{9}$").expect("valid china mobile regex")
});

// E.164
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").expect("valid E.164 regex")
});

/// Strip spaces, dashes and brackets, keeping digits and a leading `+`
pub fn normalize_mobile(mobile: &str) -> String {
    mobile
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Whether the number is a mainland mobile or an E.164 number
pub fn is_valid_mobile(mobile: &str) -> bool {
    let normalized = normalize_mobile(mobile);
    CHINA_MOBILE_REGEX.is_match(&normalized) || INTERNATIONAL_PHONE_REGEX.is_match(&normalized)
}

/// Mask a mobile number for logs (e.g., 138****5678)
pub fn mask_mobile(mobile: &str) -> String {
    let normalized = normalize_mobile(mobile);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_mobile() {
        assert_eq!(normalize_mobile("138-1234-5678"), "13812345678");
        assert_eq!(normalize_mobile("+86 138 1234 5678"), "+8613812345678");
    }

    #[test]
    fn test_is_valid_mobile() {
        assert!(is_valid_mobile("13812345678"));
        assert!(is_valid_mobile("+14155552671"));
        assert!(is_valid_mobile("138 1234 5678"));
        assert!(!is_valid_mobile("12812345678"));
        assert!(!is_valid_mobile("+0123456789"));
        assert!(!is_valid_mobile(""));
    }

    #[test]
    fn test_mask_mobile() {
        assert_eq!(mask_mobile("13812345678"), "138****5678");
        assert_eq!(mask_mobile("+8613812345678"), "+86****5678");
        assert_eq!(mask_mobile("12345"), "****");
    }
}
