//! Verification code entity

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

/// A generated verification code and its expiry
///
/// Produced by a generator, delivered by a sender and stored in the client's
/// session until it is consumed, found expired, or overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateCode {
    /// The code the client has to submit back
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Instant from which the code is no longer accepted
    pub expire_time: DateTime<Utc>,

    /// Rendered captcha as a `data:` URI; never written to the session
    #[serde(skip)]
    pub image: Option<String>,
}

impl ValidateCode {
    /// Creates a code that expires `expire_in` from now
    ///
    /// An expiry past the representable range saturates at
    /// `DateTime::<Utc>::MAX_UTC`; use [`ValidateCode::try_new`] to reject it.
    pub fn new(code: impl Into<String>, expire_in: Duration) -> Self {
        let now = Utc::now();
        Self {
            code: code.into(),
            created_at: now,
            expire_time: now
                .checked_add_signed(expire_in)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            image: None,
        }
    }

    /// Creates a code that expires `expire_in` from now, `None` on overflow
    pub fn try_new(code: impl Into<String>, expire_in: Duration) -> Option<Self> {
        let now = Utc::now();
        let expire_time = now.checked_add_signed(expire_in)?;
        Some(Self {
            code: code.into(),
            created_at: now,
            expire_time,
            image: None,
        })
    }

    /// Creates a code with an absolute expiry instant
    pub fn with_expire_time(code: impl Into<String>, expire_time: DateTime<Utc>) -> Self {
        Self {
            code: code.into(),
            created_at: Utc::now(),
            expire_time,
            image: None,
        }
    }

    /// Attaches the rendered captcha image
    pub fn with_image(mut self, data_uri: impl Into<String>) -> Self {
        self.image = Some(data_uri.into());
        self
    }

    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Checks expiry against a given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expire_time
    }

    /// Exact, case-sensitive comparison in constant time
    pub fn matches(&self, submitted: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

    /// Time remaining until expiry, zero once expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expire_time > now {
            self.expire_time - now
        } else {
            Duration::zero()
        }
    }

    /// Whole seconds remaining until expiry
    pub fn expire_in_seconds(&self) -> i64 {
        self.time_until_expiration().num_seconds()
    }

    /// Copy suitable for session storage, without the image payload
    pub fn for_session(&self) -> Self {
        Self {
            code: self.code.clone(),
            created_at: self.created_at,
            expire_time: self.expire_time,
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validate_code() {
        let code = ValidateCode::new("4821", Duration::minutes(5));

        assert_eq!(code.code, "4821");
        assert_eq!(code.expire_time, code.created_at + Duration::minutes(5));
        assert!(code.image.is_none());
        assert!(!code.is_expired());
    }

    #[test]
    fn test_overflowing_expiry_does_not_panic() {
        let huge = Duration::try_seconds(i64::MAX / 1000).expect("within TimeDelta range");

        let code = ValidateCode::new("4821", huge);
        assert_eq!(code.expire_time, DateTime::<Utc>::MAX_UTC);
        assert!(!code.is_expired());

        assert!(ValidateCode::try_new("4821", huge).is_none());
        let bounded = ValidateCode::try_new("4821", Duration::minutes(5)).unwrap();
        assert_eq!(bounded.expire_time, bounded.created_at + Duration::minutes(5));
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let code = ValidateCode::new("4821", Duration::minutes(5));

        assert!(!code.is_expired_at(code.expire_time - Duration::milliseconds(1)));
        assert!(code.is_expired_at(code.expire_time));
        assert!(code.is_expired_at(code.expire_time + Duration::seconds(1)));
    }

    #[test]
    fn test_past_expire_time() {
        let code = ValidateCode::with_expire_time("4821", Utc::now() - Duration::seconds(1));

        assert!(code.is_expired());
        assert_eq!(code.time_until_expiration(), Duration::zero());
        assert_eq!(code.expire_in_seconds(), 0);
    }

    #[test]
    fn test_matches_is_exact() {
        let code = ValidateCode::new("aB3x", Duration::seconds(60));

        assert!(code.matches("aB3x"));
        assert!(!code.matches("ab3x"));
        assert!(!code.matches("aB3x "));
        assert!(!code.matches("aB3"));
        assert!(!code.matches(""));
    }

    #[test]
    fn test_time_until_expiration() {
        let code = ValidateCode::new("4821", Duration::minutes(5));

        let remaining = code.time_until_expiration();
        assert!(remaining <= Duration::minutes(5));
        assert!(remaining > Duration::minutes(4));
    }

    #[test]
    fn test_image_is_not_serialized() {
        let code = ValidateCode::new("K7PQ", Duration::seconds(60))
            .with_image("data:image/svg+xml;base64,AAAA");

        let json = serde_json::to_value(&code).unwrap();
        assert!(json.get("image").is_none());

        let restored: ValidateCode = serde_json::from_value(json).unwrap();
        assert_eq!(restored, code.for_session());
    }

    #[test]
    fn test_for_session_strips_image() {
        let code = ValidateCode::new("K7PQ", Duration::seconds(60)).with_image("data:,x");
        let stored = code.for_session();

        assert!(stored.image.is_none());
        assert_eq!(stored.code, code.code);
        assert_eq!(stored.expire_time, code.expire_time);
    }
}
