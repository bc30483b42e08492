pub const MIN_PASSWORD_LEN: usize = 4;
pub const MAX_MESSAGE_LEN: usize = 255;

/// Empty or whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Lengths are counted in characters, not bytes.
pub fn valid_message_text(text: &str) -> bool {
    !is_blank(text) && text.chars().count() <= MAX_MESSAGE_LEN
}
