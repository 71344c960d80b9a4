//! Character classes and the text collaborators of the downcoder: cleaning,
//! invalid-byte removal, url decoding and the generic ASCII fallback.
use memchr::memchr2;
use std::borrow::Cow;

/// Decoding repeats until stable, at most this often.
const MAX_DECODE_ROUNDS: usize = 8;

#[inline(always)]
pub const fn is_format_control(c: char) -> bool {
    let cp = c as u32;

    // Early exit: 99.9% of characters are outside this range
    if cp < 0x00AD || cp > 0xFEFF {
        return false;
    }

    matches!(cp,
        0x00AD |
        0x200B..=0x200F |
        0x202A..=0x202E |
        0x2060..=0x2064 |
        0x2066..=0x2069 |
        0x206A..=0x206F |
        0xFEFF
    )
}

// Unicode whitespace mapped to an ASCII space (ASCII whitespace excluded).
#[inline(always)]
pub fn is_unicode_whitespace(c: char) -> bool {
    matches!(
        c as u32,
        0x0085 | // NEXT LINE (NEL)
        0x00A0 | // NO-BREAK SPACE
        0x1680 | // OGHAM SPACE MARK
        0x2000
            ..=0x200A | // EN QUAD through HAIR SPACE
        0x2028 | // LINE SEPARATOR
        0x2029 | // PARAGRAPH SEPARATOR
        0x202F | // NARROW NO-BREAK SPACE
        0x205F | // MEDIUM MATHEMATICAL SPACE
        0x3000 // IDEOGRAPHIC SPACE
    )
}

// Control characters (Category Cc) except tab, newline and carriage return.
#[inline(always)]
pub const fn is_removable_control(c: char) -> bool {
    let cp = c as u32;
    (cp <= 0x1F && !matches!(c, '\t' | '\n' | '\r')) || (cp >= 0x7F && cp <= 0x9F)
}

/// Typographic punctuation as produced by word processors, in ASCII.
#[inline]
pub fn ascii_punctuation(c: char) -> Option<&'static str> {
    Some(match c {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2039}' | '\u{203A}' => "'",
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{00AB}' | '\u{00BB}' => "\"",
        '\u{2013}' | '\u{2014}' => "-",
        '\u{2026}' => "...",
        _ => return None,
    })
}

#[inline(always)]
fn is_unclean(c: char) -> bool {
    is_removable_control(c)
        || is_format_control(c)
        || is_unicode_whitespace(c)
        || ascii_punctuation(c).is_some()
}

/// Whether [`clean`] would change `text`.
#[inline]
pub fn needs_clean(text: &str) -> bool {
    text.chars().any(is_unclean)
}

/// Drop control and zero-width characters (BOM included), turn Unicode
/// whitespace into a plain space and typographic quotes, dashes and the
/// ellipsis into ASCII.
pub fn clean(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(is_unclean) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        if is_removable_control(c) || is_format_control(c) {
            continue;
        }
        if is_unicode_whitespace(c) {
            out.push(' ');
        } else if let Some(ascii) = ascii_punctuation(c) {
            out.push_str(ascii);
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Decode `bytes` as UTF-8, silently dropping invalid sequences.
pub fn drop_invalid_utf8(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(valid) = validate(bytes) {
        return Cow::Borrowed(valid);
    }
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    Cow::Owned(out)
}

#[cfg(feature = "simd")]
#[inline]
fn validate(bytes: &[u8]) -> Result<&str, simdutf8::basic::Utf8Error> {
    simdutf8::basic::from_utf8(bytes)
}

#[cfg(not(feature = "simd"))]
#[inline]
fn validate(bytes: &[u8]) -> Result<&str, std::str::Utf8Error> {
    std::str::from_utf8(bytes)
}

/// [`drop_invalid_utf8`] followed by [`clean`].
pub fn clean_bytes(bytes: &[u8]) -> Cow<'_, str> {
    match drop_invalid_utf8(bytes) {
        Cow::Borrowed(text) => clean(text),
        Cow::Owned(text) => {
            let cleaned = match clean(&text) {
                Cow::Owned(s) => Some(s),
                Cow::Borrowed(_) => None,
            };
            Cow::Owned(cleaned.unwrap_or(text))
        }
    }
}

/// Decode `%XX` escapes and HTML entities until nothing changes.
///
/// Decoded bytes that do not form UTF-8 are read as Latin-1, so `%F6`
/// becomes `ö`. `+` is left alone.
pub fn url_decode(text: &str) -> Cow<'_, str> {
    if memchr2(b'%', b'&', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }

    let mut current: Option<String> = None;
    for _ in 0..MAX_DECODE_ROUNDS {
        let input = current.as_deref().unwrap_or(text);
        let percent = percent_decode(input);
        let source = percent.as_deref().unwrap_or(input);
        let mut entities = String::with_capacity(source.len());
        html_escape::decode_html_entities_to_string(source, &mut entities);
        if entities == input {
            break;
        }
        current = Some(entities);
    }

    match current {
        Some(decoded) => Cow::Owned(decoded),
        None => Cow::Borrowed(text),
    }
}

fn percent_decode(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    memchr::memchr(b'%', bytes)?;

    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    let mut changed = false;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                changed = true;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    if !changed {
        return None;
    }

    let mut decoded = String::with_capacity(out.len());
    for chunk in out.utf8_chunks() {
        decoded.push_str(chunk.valid());
        decoded.extend(chunk.invalid().iter().map(|&b| char::from(b)));
    }
    Some(decoded)
}

#[inline(always)]
fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Generic Unicode → ASCII fallback. Characters without a transliteration
/// become `unknown`.
pub fn to_ascii<'a>(text: &'a str, unknown: &str) -> Cow<'a, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(deunicode::deunicode_with_tofu(text, unknown))
}
