use std::{error::Error, fmt, str::FromStr};

use crate::{
    initialism::{lower_initialism, upper_initialism},
    runes::{discard_start, lower_first, spell_leading_digit, title},
};

/// Returns `s` as a MixedCase string that can be used for exported identifiers.
///
/// Leading punctuation is dropped, the rest is split on `_` and every part is
/// title cased, with initialisms spelled in UPPER case.
///
/// ```
/// assert_eq!(mixedcase::exported("cpu_count"), "CPUCount");
/// assert_eq!(mixedcase::exported("9Bar"), "NineBar");
/// ```
pub fn exported(s: &str) -> String {
    let s = &s[discard_start(s)..];
    let mut ident = String::with_capacity(s.len());

    for (idx, segment) in s.split('_').enumerate() {
        if segment.is_empty() {
            continue;
        }
        let segment = match idx {
            0 => spell_leading_digit(segment),
            _ => segment.to_owned(),
        };
        ident.push_str(&upper_initialism(&title(&segment)));
    }

    ident
}

/// Returns `s` as a mixedCase string that can be used for unexported identifiers.
///
/// Same as [`exported`] except for the first part, which starts with a lower
/// case char, or is all lower case when it is an initialism.
///
/// ```
/// assert_eq!(mixedcase::unexported("cpu_count"), "cpuCount");
/// assert_eq!(mixedcase::unexported("Train_Engine"), "trainEngine");
/// ```
pub fn unexported(s: &str) -> String {
    let s = &s[discard_start(s)..];
    let mut segments = s.split('_');

    // leading underscores are discarded, so only an empty `s` has an empty head
    let mut ident = segments
        .next()
        .map(|head| lower_initialism(&lower_first(&spell_leading_digit(head))))
        .unwrap_or_default();

    for segment in segments.filter(|segment| !segment.is_empty()) {
        ident.push_str(&upper_initialism(&title(segment)));
    }

    ident
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Exported,
    Unexported,
}

impl Visibility {
    pub fn apply(self, s: &str) -> String {
        match self {
            Visibility::Exported => exported(s),
            Visibility::Unexported => unexported(s),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Exported => f.write_str("exported"),
            Visibility::Unexported => f.write_str("unexported"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVisibilityError(String);

impl fmt::Display for ParseVisibilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown visibility {:?}, expected `exported` or `unexported`",
            self.0
        )
    }
}

impl Error for ParseVisibilityError {}

impl FromStr for Visibility {
    type Err = ParseVisibilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exported" => Ok(Visibility::Exported),
            "unexported" => Ok(Visibility::Unexported),
            _ => Err(ParseVisibilityError(s.to_owned())),
        }
    }
}

/// Mixed case conversions on anything that derefs to a string.
///
/// ```
/// use mixedcase::MixedCase;
///
/// assert_eq!("apple_oranges".to_exported(), "AppleOranges");
/// assert_eq!(String::from("apple_oranges").to_unexported(), "appleOranges");
/// ```
pub trait MixedCase {
    fn to_exported(&self) -> String;
    fn to_unexported(&self) -> String;
    fn to_visibility(&self, visibility: Visibility) -> String;
}

impl<T: AsRef<str> + ?Sized> MixedCase for T {
    fn to_exported(&self) -> String {
        exported(self.as_ref())
    }

    fn to_unexported(&self) -> String {
        unexported(self.as_ref())
    }

    fn to_visibility(&self, visibility: Visibility) -> String {
        visibility.apply(self.as_ref())
    }
}
