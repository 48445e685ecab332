//! Endpoint path construction. Usernames come from page scrapes and are
//! percent-encoded before landing in a path.

pub fn messages_url(base: &str) -> String {
    format!("{}/messages", base.trim_end_matches('/'))
}

pub fn profile_url(base: &str, username: &str) -> String {
    format!(
        "{}/profile/{}",
        base.trim_end_matches('/'),
        urlencoding::encode(username)
    )
}

pub fn profile_questions_url(base: &str, username: &str) -> String {
    format!("{}/questions", profile_url(base, username))
}
