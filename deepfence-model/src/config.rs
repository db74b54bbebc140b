//! Codec configuration.

/// Controls how models are written to and read from JSON.
///
/// The default writes compact JSON and ignores unknown fields on decode,
/// which is what the API server expects.
///
/// ```
/// use deepfence_model::CodecConfig;
///
/// let config = CodecConfig::default().with_strict(true);
/// assert!(config.strict);
/// assert!(!config.pretty);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecConfig {
    /// Emit indented JSON instead of compact JSON.
    pub pretty: bool,
    /// Reject objects carrying fields the model does not declare.
    pub strict: bool,
}

impl CodecConfig {
    /// Set pretty printing.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set strict decoding.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
