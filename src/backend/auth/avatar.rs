/**
 * Avatar URLs
 *
 * Users get a Gravatar URL at registration. The URL is a pure function of
 * the email: the address is trimmed and lowercased, hashed with SHA-256, and
 * combined with fixed size, rating and default-image parameters.
 *
 * URLs use SHA-256 over `https`, not the MD5 protocol-relative form
 * (`//www.gravatar.com/avatar/<md5>`). Avatars stored by a deployment that
 * used MD5 URLs will not match the ones generated here for the same email.
 */

use sha2::{Digest, Sha256};

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar/";

/// Image size in pixels
pub const AVATAR_SIZE: u32 = 200;
/// Maximum content rating
pub const AVATAR_RATING: &str = "pg";
/// Fallback image when the address has no Gravatar ("mystery man")
pub const AVATAR_DEFAULT: &str = "mm";

/// Build the avatar URL for an email address
pub fn avatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());

    format!(
        "{GRAVATAR_BASE}{}?s={AVATAR_SIZE}&r={AVATAR_RATING}&d={AVATAR_DEFAULT}",
        hex::encode(digest)
    )
}
