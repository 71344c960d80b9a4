use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use memchr::{memchr_iter, memmem};
use std::borrow::Cow;

/// Strips HTML tags while keeping the visible text.
///
/// - **Zero-copy** when no tag opener appears in the input
/// - A `<` only opens a tag when followed by a letter, `/`, `!` or `?`, so
///   prose like `1 < 2` survives
/// - Comments are dropped entirely, CDATA sections keep their content
/// - A `>` inside a quoted attribute value does not close the tag
/// - Entities are left alone; the separator rules handle the ones slugs
///   care about
/// - An unterminated tag swallows the rest of the input
pub struct StripHtml;

impl Stage for StripHtml {
    fn name(&self) -> &'static str {
        "strip_html"
    }

    #[inline]
    fn needs_apply(&self, text: &str, _ctx: &Context<'_>) -> Result<bool, StageError> {
        Ok(find_tag_start(text).is_some())
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        _ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        let first = find_tag_start(&text);
        match first {
            Some(start) => Ok(Cow::Owned(strip_tags(&text, start))),
            None => Ok(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Markup {
    Comment,
    Cdata,
    Tag,
}

#[inline(always)]
fn opens_tag(next: u8) -> bool {
    next.is_ascii_alphabetic() || matches!(next, b'/' | b'!' | b'?')
}

/// Byte offset of the first `<` that opens markup.
fn find_tag_start(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    memchr_iter(b'<', bytes).find(|&i| bytes.get(i + 1).is_some_and(|&b| opens_tag(b)))
}

fn classify(rest: &[u8]) -> Markup {
    if rest.starts_with(b"<!--") {
        Markup::Comment
    } else if rest.len() >= 9 && rest[..9].eq_ignore_ascii_case(b"<![CDATA[") {
        Markup::Cdata
    } else {
        Markup::Tag
    }
}

/// End of a tag starting at `from` (just past its `>`), honoring quoted
/// attribute values.
fn tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (offset, &b) in bytes[from..].iter().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(from + offset + 1),
            None => {}
        }
    }
    None
}

fn strip_tags(text: &str, first: usize) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);

    let mut pos = first;
    while pos < bytes.len() {
        let markup = classify(&bytes[pos..]);
        pos = match markup {
            Markup::Comment => match memmem::find(&bytes[pos + 4..], b"-->") {
                Some(end) => pos + 4 + end + 3,
                None => bytes.len(),
            },
            Markup::Cdata => {
                let content = pos + 9;
                match memmem::find(&bytes[content..], b"]]>") {
                    Some(end) => {
                        out.push_str(&text[content..content + end]);
                        content + end + 3
                    }
                    None => {
                        out.push_str(&text[content..]);
                        bytes.len()
                    }
                }
            }
            Markup::Tag => tag_end(bytes, pos + 1).unwrap_or(bytes.len()),
        };

        // Copy plain text up to the next tag opener.
        let rest = &text[pos..];
        match find_tag_start(rest) {
            Some(next) => {
                out.push_str(&rest[..next]);
                pos += next;
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }
    out
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for StripHtml {
        fn samples() -> &'static [&'static str] {
            &[
                "<p>Hello</p>",
                "a <b>bold</b> move",
                "<!-- note -->text",
                "<![CDATA[kept]]>",
                "1 < 2 and 3 > 2",
                "Tom &amp; Jerry",
                "",
            ]
        }

        fn should_transform(_lang: &str) -> &'static [(&'static str, &'static str)] {
            &[
                ("<p>Hello</p>", "Hello"),
                ("<div class=\"test\">content</div>", "content"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(StripHtml);
    }
}
