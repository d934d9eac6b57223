// Rust guideline compliant 2026-10-14

//! Explicit output settings threaded through every rendering function.

use helium_core::{display_id, Config, OutputFormat};

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputContext {
    /// Output format.
    pub format: OutputFormat,
    /// Whether ids are displayed in full.
    pub show_uuid: bool,
}

impl OutputContext {
    /// Creates a context.
    pub fn new(format: OutputFormat, show_uuid: bool) -> Self {
        Self { format, show_uuid }
    }

    /// Builds the context from command-line flags and configuration.
    ///
    /// A format given on the command line wins over the configured one;
    /// `--uuid` can only switch full ids on.
    pub fn from_flags(format: Option<OutputFormat>, uuid: bool, config: &Config) -> Self {
        Self {
            format: format.unwrap_or(config.output_format),
            show_uuid: uuid || config.show_uuid,
        }
    }

    /// Returns `id` as it should be displayed.
    pub fn id<'a>(&self, id: &'a str) -> &'a str {
        display_id(id, self.show_uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            output_format: OutputFormat::Csv,
            show_uuid: false,
            data_dir: None,
        };
        let ctx = OutputContext::from_flags(Some(OutputFormat::Json), true, &config);
        assert_eq!(ctx, OutputContext::new(OutputFormat::Json, true));

        let ctx = OutputContext::from_flags(None, false, &config);
        assert_eq!(ctx, OutputContext::new(OutputFormat::Csv, false));
    }

    #[test]
    fn test_default_is_tabular_short_ids() {
        let ctx = OutputContext::default();
        assert_eq!(ctx.format, OutputFormat::Tabular);
        assert_eq!(ctx.id("dd18bc71-8a5d-4a4e-a308-1c44e1688b7a"), "dd18bc71");
    }
}
