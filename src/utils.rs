pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(name: &str, value: &str, secure: bool) -> String {
    let secure_flag = if secure { " Secure;" } else { "" };
    format!("{name}={value}; HttpOnly;{secure_flag} Max-Age=86400; Path=/; SameSite=Strict")
}

/// Expired cookie, used to log out or drop a stale session.
pub fn clear_cookie(name: &str, secure: bool) -> String {
    let secure_flag = if secure { " Secure;" } else { "" };
    format!("{name}=; HttpOnly;{secure_flag} Max-Age=0; Path=/; SameSite=Strict")
}
