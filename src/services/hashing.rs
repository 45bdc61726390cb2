use sha2::{Digest, Sha256};

/// Cache key for a page identifier: hex SHA-256 of `salt` followed by `page_id`.
pub fn page_hash(salt: &str, page_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(page_id.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_length_hex() {
        for page in ["", "a", "github.com/someone/some-repo/with/a/long/path?x=1"] {
            let h = page_hash("guess_what", page);
            assert_eq!(h.len(), 64);
            assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn deterministic_and_salted() {
        assert_eq!(page_hash("k", "page"), page_hash("k", "page"));
        assert_ne!(page_hash("k", "page"), page_hash("k", "other"));
        assert_ne!(page_hash("k1", "page"), page_hash("k2", "page"));
    }

    #[test]
    fn empty_salt_is_plain_sha256() {
        assert_eq!(
            page_hash("", "abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
