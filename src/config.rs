//! Process configuration derived from the environment.
//!
//! The URL parser needs to know what character encoding command-line input
//! arrives in. That used to be a process-global concern; here it is a value
//! computed once at startup and threaded into the parser explicitly.

/// Returns the codeset of the process locale, when one is configured.
///
/// Checks `LC_ALL`, `LC_CTYPE` and `LANG` in POSIX precedence order and
/// extracts the codeset suffix (`en_US.UTF-8` → `UTF-8`). Locales without a
/// codeset (`C`, `POSIX`) yield `None`, which the parser treats as UTF-8.
#[must_use]
pub fn locale_encoding() -> Option<String> {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|value| !value.is_empty()))
        .and_then(|locale| codeset(&locale).map(str::to_string))
}

/// Extracts the codeset from a locale name: the part after `.`, up to an
/// optional `@modifier`.
fn codeset(locale: &str) -> Option<&str> {
    let after_dot = locale.split_once('.')?.1;
    let codeset = after_dot.split('@').next().unwrap_or(after_dot);
    (!codeset.is_empty()).then_some(codeset)
}
