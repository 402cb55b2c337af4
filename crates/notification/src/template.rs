use std::fmt::{self, Write};

/// HTML body for a contact or trial request notification.
///
/// Every interpolated value goes through [`NamedEntities`], so `& < > " '`
/// in user supplied values never reach the message as markup.
#[derive(askama::Template)]
#[template(path = "contact.html")]
pub(crate) struct ContactHtmlTemplate<'a> {
    pub site_name: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub plan: Option<&'a str>,
}

/// Escaper registered for `.html` templates in `askama.toml`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NamedEntities;

impl askama::filters::Escaper for NamedEntities {
    fn write_escaped_str<W: Write>(&self, mut dest: W, string: &str) -> fmt::Result {
        let mut last = 0;

        for (index, byte) in string.bytes().enumerate() {
            let entity = match byte {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                b'\'' => "&#039;",
                _ => continue,
            };

            dest.write_str(&string[last..index])?;
            dest.write_str(entity)?;
            last = index + 1;
        }

        dest.write_str(&string[last..])
    }
}
