//! `print`'s configuration.

/// Options accepted by [`crate::print`].
///
/// Built with a `with_*`-method builder. [`Default`] yields the
/// documented defaults: no source recorded, VLQ-encoded mappings, and an
/// identity `getName`.
pub struct PrinterOptions {
    pub(crate) source_map_source: Option<String>,
    pub(crate) source_map_content: Option<String>,
    pub(crate) source_map_encode_mappings: bool,
    pub(crate) get_name: Option<Box<dyn Fn(&str) -> String>>,
}

impl PrinterOptions {
    /// Sets the file name recorded as `sources[0]` in the emitted map.
    #[must_use]
    pub fn with_source_map_source(mut self, source: impl Into<String>) -> Self {
        self.source_map_source = Some(source.into());
        self
    }

    /// Sets the verbatim original source stored in `sourcesContent[0]`.
    #[must_use]
    pub fn with_source_map_content(mut self, content: impl Into<String>) -> Self {
        self.source_map_content = Some(content.into());
        self
    }

    /// Controls whether `mappings` is VLQ-encoded (`true`, the default) or
    /// left as a decoded array of integer fields.
    #[must_use]
    pub const fn with_source_map_encode_mappings(mut self, encode: bool) -> Self {
        self.source_map_encode_mappings = encode;
        self
    }

    /// Installs a hook applied to every binding `Identifier` before it is
    /// emitted. Not applied to property keys or non-computed member
    /// expression property names.
    #[must_use]
    pub fn with_get_name(mut self, get_name: impl Fn(&str) -> String + 'static) -> Self {
        self.get_name = Some(Box::new(get_name));
        self
    }

    pub(crate) fn has_source(&self) -> bool {
        self.source_map_source.is_some()
    }

    pub(crate) fn rename(&self, name: &str) -> String {
        self.get_name
            .as_ref()
            .map_or_else(|| name.to_string(), |get_name| get_name(name))
    }
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            source_map_source: None,
            source_map_content: None,
            source_map_encode_mappings: true,
            get_name: None,
        }
    }
}
