//! Avatar source selection with the generated-avatar fallback.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

/// Generated avatar URL for `user_name`.
///
/// The name is inserted verbatim, without percent-encoding, so existing
/// fallback links stay byte-identical.
pub fn fallback_avatar_url(user_name: &str) -> String {
    format!("https://ui-avatars.com/api/?name={user_name}&background=random")
}

/// An empty or blank `avatar_url` can never load, so it starts on the fallback.
pub fn starts_on_fallback(avatar_url: &str) -> bool {
    avatar_url.trim().is_empty()
}

/// Image source for a row given whether the original image has failed.
pub fn avatar_src(avatar_url: &str, user_name: &str, failed: bool) -> String {
    if failed || starts_on_fallback(avatar_url) {
        fallback_avatar_url(user_name)
    } else {
        avatar_url.to_owned()
    }
}
