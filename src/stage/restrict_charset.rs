use crate::{
    context::Context,
    stage::{Stage, StageError, rewrite},
};
use std::borrow::Cow;

/// Reduces text to ASCII letters and digits joined by the separator.
///
/// Runs of whitespace and separator characters become one separator, every
/// other character is dropped (a `.` survives when file extensions are
/// kept) and surrounding whitespace is trimmed.
pub struct RestrictCharset;

impl Stage for RestrictCharset {
    fn name(&self) -> &'static str {
        "restrict_charset"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> Result<bool, StageError> {
        let keep_dot = ctx.options.keep_extension_dot;
        let sep_is_plain = !ctx.separator.chars().any(|c| is_kept(c, keep_dot));
        if sep_is_plain && text.bytes().all(|b| is_kept(b as char, keep_dot)) {
            return Ok(false);
        }
        Ok(matches!(
            restrict(text, ctx.separator, keep_dot),
            Cow::Owned(_)
        ))
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        let keep_dot = ctx.options.keep_extension_dot;
        Ok(rewrite(text, |t| restrict(t, ctx.separator, keep_dot)))
    }
}

#[inline(always)]
fn is_kept(c: char, keep_dot: bool) -> bool {
    c.is_ascii_alphanumeric() || (keep_dot && c == '.')
}

#[inline(always)]
fn is_gap(c: char, separator: &str) -> bool {
    c.is_whitespace() || separator.contains(c)
}

/// Borrowed only when nothing changes.
pub fn restrict<'a>(text: &'a str, separator: &str, keep_dot: bool) -> Cow<'a, str> {
    let mut out = String::with_capacity(text.len());
    let mut gap = false;
    for c in text.chars() {
        if is_gap(c, separator) {
            gap = true;
        } else if is_kept(c, keep_dot) {
            if gap {
                out.push_str(separator);
                gap = false;
            }
            out.push(c);
        }
    }
    if gap {
        out.push_str(separator);
    }

    let trimmed = out.trim_matches(char::is_whitespace);
    if trimmed == text {
        Cow::Borrowed(text)
    } else if trimmed.len() == out.len() {
        Cow::Owned(out)
    } else {
        Cow::Owned(trimmed.to_owned())
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for RestrictCharset {
        fn samples() -> &'static [&'static str] {
            &[
                "Hello World 123",
                "J'etudie le francais",
                "a--b",
                "file.name.jpg",
                "-already-clean-",
                "  padded  ",
                "plain",
                "",
            ]
        }

        fn should_transform(_lang: &str) -> &'static [(&'static str, &'static str)] {
            &[
                ("Hello World 123", "Hello-World-123"),
                ("a - ! - b", "a-b"),
                ("file.name.jpg", "filenamejpg"),
                ("  J'etudie le francais  ", "-Jetudie-le-francais-"),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(RestrictCharset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_extension_dot_on_request() {
        assert_eq!(restrict("image.jpg", "-", true), "image.jpg");
        assert_eq!(restrict("image.jpg", "-", false), "imagejpg");
    }

    #[test]
    fn empty_separator_joins_words() {
        assert_eq!(restrict("foo bar  baz", "", false), "foobarbaz");
    }

    #[test]
    fn other_separators() {
        assert_eq!(restrict("a b-c__d", "_", false), "a_bc_d");
        assert_eq!(restrict("a\tb\nc", "_", false), "a_b_c");
    }

    #[test]
    fn space_separator_is_trimmed() {
        assert_eq!(restrict("  a  b  ", " ", false), "a b");
    }

    #[test]
    fn non_ascii_is_dropped() {
        assert_eq!(restrict("naïve ☃ x", "-", false), "nave-x");
    }
}
