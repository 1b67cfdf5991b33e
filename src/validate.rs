use super::*;

use fancy_regex::Regex;

/// Exactly `+252 61` followed by eight digits, single spaces between groups.
const PHONE_PATTERN: &str = r"^\+252\s61\s\d{8}$";

/// Permissive `local@domain.tld` shape; no further validation.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Submit-time validators, compiled once per page.
#[derive(Debug, Clone)]
pub struct Validators {
    phone: Regex,
    email: Regex,
}

impl Validators {
    pub fn new() -> Result<Self> {
        Ok(Self {
            phone: compile(PHONE_PATTERN)?,
            email: compile(EMAIL_PATTERN)?,
        })
    }

    /// A phone value is valid iff it matches the canonical grammar exactly,
    /// after trimming surrounding whitespace. No semantically-equivalent
    /// alternative spelling is accepted.
    pub fn is_valid_phone(&self, value: &str) -> bool {
        matches!(self.phone.is_match(value.trim()), Ok(true))
    }

    pub fn is_valid_email(&self, value: &str) -> bool {
        matches!(self.email.is_match(value.trim()), Ok(true))
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|err| Error::Pattern(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_phone_validates() -> Result<()> {
        let validators = Validators::new()?;
        assert!(validators.is_valid_phone("+252 61 12345678"));
        assert!(validators.is_valid_phone("  +252 61 12345678  "));
        Ok(())
    }

    #[test]
    fn non_canonical_phones_are_rejected() -> Result<()> {
        let validators = Validators::new()?;
        assert!(!validators.is_valid_phone("+252 6 12345678"));
        assert!(!validators.is_valid_phone("252 61 12345678"));
        assert!(!validators.is_valid_phone("+252 61 1234567"));
        assert!(!validators.is_valid_phone("+252 61 123456789"));
        assert!(!validators.is_valid_phone("+252 62 12345678"));
        assert!(!validators.is_valid_phone(""));
        Ok(())
    }

    #[test]
    fn email_shape_is_permissive_but_requires_a_tld_dot() -> Result<()> {
        let validators = Validators::new()?;
        assert!(validators.is_valid_email("a@b.co"));
        assert!(validators.is_valid_email("first.last+tag@sub.example.org"));
        assert!(!validators.is_valid_email("a@b"));
        assert!(!validators.is_valid_email("a b@c.com"));
        assert!(!validators.is_valid_email("@b.co"));
        assert!(!validators.is_valid_email("a@."));
        Ok(())
    }
}
