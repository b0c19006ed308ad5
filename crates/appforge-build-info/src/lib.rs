#![doc = include_str!("../README.md")]

/// The `SemVer` version of the build (from Cargo).
pub const SEMVER: &str = env!("CARGO_PKG_VERSION");

/// Seven lowercase hex digits of the build commit, or `"unknown"`.
pub const GIT_SHA_SHORT: &str = env!("APPFORGE_GIT_SHA_SHORT");

/// False when the build had no git metadata.
pub const HAS_GIT_SHA: bool = is_short_hex(GIT_SHA_SHORT);

const LONG_VERSION_WITH_SHA: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("APPFORGE_GIT_SHA_SHORT"),
    ")"
);

/// Version string for `--version` output.
pub const LONG_VERSION: &str = if HAS_GIT_SHA {
    LONG_VERSION_WITH_SHA
} else {
    SEMVER
};

const fn is_short_hex(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 {
        return false;
    }

    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_hexdigit() {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_detection() {
        assert!(is_short_hex("a1b2c3d"));
        assert!(is_short_hex("ABCDEF0"));
        assert!(!is_short_hex("unknown"));
        assert!(!is_short_hex("a1b2c3"));
        assert!(!is_short_hex("a1b2c3g"));
    }

    #[test]
    fn git_sha_is_short_hex_or_unknown() {
        assert!(HAS_GIT_SHA || GIT_SHA_SHORT == "unknown");
        assert!(!GIT_SHA_SHORT.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn long_version_starts_with_semver() {
        assert!(LONG_VERSION.starts_with(SEMVER));
        if HAS_GIT_SHA {
            assert!(LONG_VERSION.contains(GIT_SHA_SHORT));
        }
    }
}
