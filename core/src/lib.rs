//! Initialism aware identifier casing for generated code.
//!
//! ```
//! use mixedcase::{exported, unexported};
//!
//! assert_eq!(exported("~http_server_id"), "HTTPServerID");
//! assert_eq!(unexported("~http_server_id"), "httpServerID");
//! ```

mod convert;
mod initialism;
mod runes;

pub use convert::{MixedCase, ParseVisibilityError, Visibility, exported, unexported};
pub use initialism::{INITIALISMS, is_initialism, lower_initialism, upper_initialism};
pub use runes::{lower_first, spell_leading_digit, title};
