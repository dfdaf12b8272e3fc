//! φ-salted identity keys.
//!
//! An identity and password are joined around the decimal form of the golden
//! ratio and hashed with SHA-256. The key is the first 15 decimal digits of
//! the lowercase hex digest.

use sha2::{Digest, Sha256};

/// Salt placed between identity and password.
pub const PHI_SALT: &str = "1.61803398875";

/// Number of digits in a full key.
pub const KEY_DIGITS: usize = 15;

/// Derive the 15-digit key for an identity and password.
///
/// A digest with fewer than 15 decimal hex digits yields a shorter key.
///
/// # Examples
///
/// ```
/// use latticesync::handshake::omega_key;
///
/// let key = omega_key("architect@example.com", "hunter2");
/// assert_eq!(key, "643869047781158");
/// assert_eq!(key, omega_key("architect@example.com", "hunter2"));
/// ```
pub fn omega_key(identity: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(identity.as_bytes());
    hasher.update(PHI_SALT.as_bytes());
    hasher.update(password.as_bytes());
    let digest = hasher.finalize();

    digest
        .iter()
        .flat_map(|byte| [byte >> 4, byte & 0x0f])
        .filter(|&nibble| nibble < 10)
        .take(KEY_DIGITS)
        .map(|digit| char::from(b'0' + digit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert_eq!(omega_key("architect@example.com", "hunter2"), "643869047781158");
        assert_eq!(omega_key("", ""), "425133518386704");
    }

    #[test]
    fn test_key_is_fifteen_digits() {
        let key = omega_key("user", "pw");
        assert_eq!(key.len(), KEY_DIGITS);
        assert!(key.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_salt_separates_fields() {
        // moving a character across the salt changes the hashed message
        assert_ne!(omega_key("ab", "c"), omega_key("a", "bc"));
        assert_ne!(omega_key("user", "pw"), omega_key("pw", "user"));
    }
}
