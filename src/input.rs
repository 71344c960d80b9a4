//! Stringification of loosely typed slug input.
use crate::unicode::drop_invalid_utf8;
use std::borrow::Cow;

/// Anything that can be turned into slug text.
///
/// `true` becomes `"1"`, `false` and `None` become `""`, numbers use their
/// `Display` form and raw bytes lose their invalid UTF-8 sequences.
pub trait SlugInput {
    fn to_slug_text(&self) -> Cow<'_, str>;
}

impl SlugInput for str {
    #[inline]
    fn to_slug_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl SlugInput for String {
    #[inline]
    fn to_slug_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl SlugInput for Cow<'_, str> {
    #[inline]
    fn to_slug_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl SlugInput for bool {
    #[inline]
    fn to_slug_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "1" } else { "" })
    }
}

impl SlugInput for char {
    fn to_slug_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

macro_rules! display_input {
    ($($t:ty),* $(,)?) => {
        $(
            impl SlugInput for $t {
                fn to_slug_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

display_input!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl SlugInput for [u8] {
    #[inline]
    fn to_slug_text(&self) -> Cow<'_, str> {
        drop_invalid_utf8(self)
    }
}

impl SlugInput for Vec<u8> {
    #[inline]
    fn to_slug_text(&self) -> Cow<'_, str> {
        drop_invalid_utf8(self)
    }
}

impl<T: SlugInput> SlugInput for Option<T> {
    fn to_slug_text(&self) -> Cow<'_, str> {
        match self {
            Some(value) => value.to_slug_text(),
            None => Cow::Borrowed(""),
        }
    }
}

impl<T: SlugInput + ?Sized> SlugInput for &T {
    #[inline]
    fn to_slug_text(&self) -> Cow<'_, str> {
        (**self).to_slug_text()
    }
}
