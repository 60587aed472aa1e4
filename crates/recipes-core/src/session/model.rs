//! Session domain model.

/// Domain appended to the synthetic email address.
pub const EMAIL_DOMAIN: &str = "gmail.com";

/// The locally logged-in identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Display name as entered at login (trimmed)
    pub name: String,
    /// Synthetic address derived from the name
    pub email: String,
}

impl Session {
    /// Builds a session for `name`, deriving the email.
    pub fn for_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let email = derive_email(&name);
        Self { name, email }
    }
}

/// Derives the synthetic email: the name lowercased with all whitespace removed.
///
/// # Examples
///
/// ```
/// use recipes_core::session::derive_email;
///
/// assert_eq!(derive_email("Maria da Silva"), "mariadasilva@gmail.com");
/// ```
pub fn derive_email(name: &str) -> String {
    let local: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    format!("{}@{}", local, EMAIL_DOMAIN)
}
