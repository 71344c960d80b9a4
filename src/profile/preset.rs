use crate::{
    process::Process,
    profile::Profile,
    stage::{
        clean_utf8::CleanUtf8, downcode::Downcode, lower_case::LowerCase,
        remove_words::RemoveWords, replace_separators::ReplaceSeparators,
        restrict_charset::RestrictCharset, strip_html::StripHtml,
        trim_separator::TrimSeparator, truncate::Truncate,
    },
};

/// The full slug filter: every stage in order, each gated by its option.
pub fn url_filter() -> Profile<impl Process> {
    Profile::builder("url_filter")
        .stage(CleanUtf8)
        .stage(ReplaceSeparators)
        .stage(StripHtml)
        .stage(Downcode)
        .stage(ReplaceSeparators)
        .stage(RemoveWords)
        .stage(RestrictCharset)
        .stage(LowerCase)
        .stage(Truncate)
        .stage(TrimSeparator)
        .build()
}

/// Transliteration only: the text keeps its spacing and punctuation.
pub fn ascii_only() -> Profile<impl Process> {
    Profile::builder("ascii_only")
        .stage(CleanUtf8)
        .stage(Downcode)
        .build()
}
