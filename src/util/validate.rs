//! Field validators for the registration and allocation forms.
//!
//! Both checks are literal pattern matches over the trimmed field value; they
//! never consult any backend.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// `UGR/` followed by a four-digit year, a slash and a two-digit sequence.
pub fn is_valid_student_id(text: &str) -> bool {
    let Some(rest) = text.strip_prefix("UGR/") else {
        return false;
    };
    let Some((year, seq)) = rest.split_once('/') else {
        return false;
    };
    is_ascii_digits(year, 4) && is_ascii_digits(seq, 2)
}

/// Loose email shape: `local@domain.tld`, no whitespace and a single `@`.
///
/// Whitespace is the set the page's script engine uses (`is_js_whitespace`), so
/// a value the markup accepts is accepted here too.
///
/// The domain needs a dot with at least one character on either side. This is
/// deliberately far from RFC 5322.
pub fn is_valid_email(text: &str) -> bool {
    if text.chars().any(is_js_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}

/// Strip everything but ASCII digits (phone number fields).
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// ECMAScript `WhiteSpace` plus `LineTerminator`, the set matched by `\s` and
/// stripped by `String.prototype.trim`. Unlike `char::is_whitespace` it
/// includes U+FEFF and excludes U+0085.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_ascii_digits(text: &str, len: usize) -> bool {
    text.len() == len && text.bytes().all(|b| b.is_ascii_digit())
}

/// Validation rule bound to a class of form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRule {
    StudentId,
    Email,
}

impl FieldRule {
    /// Message shown beside a field that fails this rule.
    pub fn message(self) -> &'static str {
        match self {
            Self::StudentId => "Student ID must be in format: UGR/YYYY/XX",
            Self::Email => "Please enter a valid email address",
        }
    }

    /// Check a raw field value. Blank values pass; required-ness is the form's concern.
    ///
    /// # Errors
    ///
    /// Returns the rule's message when the trimmed value is non-empty and invalid.
    pub fn check(self, raw: &str) -> Result<(), &'static str> {
        let value = raw.trim_matches(is_js_whitespace);
        if value.is_empty() {
            return Ok(());
        }
        let valid = match self {
            Self::StudentId => is_valid_student_id(value),
            Self::Email => is_valid_email(value),
        };
        if valid { Ok(()) } else { Err(self.message()) }
    }
}
