/// How thoroughly multi-byte UTF-8 sequences inside strings are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Utf8Validation {
    /// Checks that each leading byte is followed by the number of
    /// `10xxxxxx` continuation bytes it announces. Overlong encodings and
    /// surrogate halves are accepted.
    #[default]
    Structural,
    /// Additionally rejects overlong encodings, encoded UTF-16 surrogates and
    /// code points above U+10FFFF.
    Strict,
}

/// Configuration options for the scanner.
///
/// # Examples
///
/// ```rust
/// use jsonscan::{ScanOptions, Scanner, Utf8Validation};
///
/// let scanner = Scanner::new(ScanOptions {
///     allow_trailing_content: false,
///     utf8: Utf8Validation::Strict,
///     ..Default::default()
/// });
/// assert!(scanner.scan("[] ", &mut ()).is_ok());
/// assert!(scanner.scan("[] x", &mut ()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Whether bytes after the root collection are ignored.
    ///
    /// The scanner stops as soon as the root object or array closes. When
    /// this is `false`, it then skips whitespace and fails with a
    /// malformed-token error if anything else remains.
    ///
    /// # Default
    ///
    /// `true`
    pub allow_trailing_content: bool,

    /// UTF-8 validation applied to non-ASCII bytes inside strings.
    ///
    /// # Default
    ///
    /// [`Utf8Validation::Structural`]
    pub utf8: Utf8Validation,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on scan errors instead of returning them.
    ///
    /// Enabled only in test builds to produce backtraces at the error site.
    pub panic_on_error: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            allow_trailing_content: true,
            utf8: Utf8Validation::Structural,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: false,
        }
    }
}
