//! Caller resolution.
//!
//! Every façade method is `#[track_caller]`, so the chain of internal frames
//! between the user's call and [`SourceLocation::caller`] collapses and
//! `Location::caller()` lands on the first frame outside the logger. Any new
//! public logging method must carry the attribute too, or it will report its
//! own line.
//!
//! `Location` has no function name, so [`SourceLocation::caller`] walks the
//! stack once per call site and takes the symbol of the frame sitting on that
//! file and line. Results are cached for the life of the process. Without
//! debug info nothing matches and `function` stays absent.

use serde::Serialize;
use std::collections::HashMap;
use std::panic::Location;
use std::path::Path;
use std::sync::{LazyLock, Mutex, PoisonError};

type CallSite = (&'static str, u32);

/// Enclosing function per call site. Resolved names are leaked, once per site.
static FUNCTIONS: LazyLock<Mutex<HashMap<CallSite, Option<&'static str>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Where a log call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<&'static str>,
}

impl SourceLocation {
    /// Location of the nearest caller that is not itself `#[track_caller]`,
    /// with the enclosing function resolved from the stack.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let site = Self::call_site();
        Self {
            function: enclosing_function(site.file, site.line),
            ..site
        }
    }

    /// File and line only; no stack walk.
    #[must_use]
    #[track_caller]
    pub fn call_site() -> Self {
        Self::from(Location::caller())
    }

    /// Attaches a function name, as the logging macros do.
    #[must_use]
    pub const fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function);
        self
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            function: None,
        }
    }
}

fn enclosing_function(file: &'static str, line: u32) -> Option<&'static str> {
    let key = (file, line);
    if let Some(cached) = FUNCTIONS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return *cached;
    }

    let resolved: Option<&'static str> =
        resolve_symbol(file, line).map(|name| &*Box::leak(name.into_boxed_str()));

    *FUNCTIONS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .entry(key)
        .or_insert(resolved)
}

fn resolve_symbol(file: &str, line: u32) -> Option<String> {
    let mut found = None;
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() || symbol.lineno() != Some(line) {
                return;
            }
            if symbol.filename().is_some_and(|path| path.ends_with(Path::new(file))) {
                found = symbol.name().map(|name| {
                    let demangled = format!("{name:#}");
                    clean_function_name(strip_hash(&demangled)).to_string()
                });
            }
        });
        found.is_none()
    });
    found
}

/// Drops a trailing `::h<16 hex digits>` left by legacy symbol mangling.
fn strip_hash(name: &str) -> &str {
    match name.rsplit_once("::h") {
        Some((path, hash)) if hash.len() == 16 && hash.bytes().all(|b| b.is_ascii_hexdigit()) => {
            path
        }
        _ => name,
    }
}

/// Trims the `::{{closure}}` suffixes and the helper name left by
/// [`function_name!`](crate::function_name) so only the enclosing path remains.
#[doc(hidden)]
#[must_use]
pub fn clean_function_name(raw: &str) -> &str {
    let mut name = raw.strip_suffix("::__f").unwrap_or(raw);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}

/// Expands to the path of the enclosing function, e.g. `my_app::handlers::root`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::record::clean_function_name(type_name_of(__f))
    }};
}
