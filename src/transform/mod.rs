//! Content transformation pipeline.
//!
//! Every registry file passes through the same ordered stages before it is
//! compared with or written to the project:
//!
//! 1. **Imports** - registry-internal specifiers become project aliases
//!    ([`imports`]).
//! 2. **Directives** - React only: a leading `"use client"` is dropped when the
//!    project is configured for server components ([`directives`]).
//! 3. **Classes** - class strings located by [`scanner`] are converted to
//!    static light/dark colors when CSS variables are disabled, then prefixed
//!    when a Tailwind prefix is configured ([`classes`]).
//! 4. **File name** - extensions follow the project's language mode.
//!
//! The pipeline is deterministic: the same file, configuration and palette
//! always yield byte-identical output. The base-color palette is fetched
//! lazily, at most once per [`Transformer`], and only when a file actually
//! contains class strings that need color conversion.

pub mod classes;
pub mod directives;
pub mod imports;
pub mod scanner;

pub use classes::{ClassToken, apply_color_mapping, apply_prefix};
pub use directives::strip_client_directive;
pub use imports::{ImportRewriter, ImportRules};
pub use scanner::ClassScanner;

use std::cell::OnceCell;
use tracing::debug;

use crate::config::{Framework, LocalConfig};
use crate::core::Result;
use crate::registry::{ColorPalette, ComponentFile};

/// Pipeline settings derived from one read of the project configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    pub framework: Framework,
    pub imports: ImportRules,
    pub strip_client_directive: bool,
    pub css_variables: bool,
    pub prefix: String,
    pub typescript: bool,
}

impl TransformOptions {
    #[must_use]
    pub fn from_config(config: &LocalConfig) -> Self {
        let framework = config.framework();
        Self {
            framework,
            imports: ImportRules::from_config(config),
            strip_client_directive: framework.supports_directives() && config.rsc(),
            css_variables: config.tailwind().css_variables,
            prefix: config.tailwind().prefix.clone(),
            typescript: config.is_typescript(),
        }
    }

    fn rewrites_classes(&self) -> bool {
        !self.css_variables || !self.prefix.is_empty()
    }
}

/// A registry file after the pipeline ran: its project file name and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedFile {
    pub file_name: String,
    pub content: String,
}

/// Runs the pipeline for the files of one operation.
pub struct Transformer<'a> {
    options: TransformOptions,
    imports: ImportRewriter,
    scanner: ClassScanner,
    fetch_palette: Box<dyn Fn() -> Result<ColorPalette> + 'a>,
    palette: OnceCell<ColorPalette>,
}

impl<'a> Transformer<'a> {
    /// Creates a transformer; `fetch_palette` runs on first need only.
    pub fn new(
        options: TransformOptions,
        fetch_palette: impl Fn() -> Result<ColorPalette> + 'a,
    ) -> Result<Self> {
        Ok(Self {
            imports: ImportRewriter::new(options.imports.clone())?,
            scanner: ClassScanner::new()?,
            options,
            fetch_palette: Box::new(fetch_palette),
            palette: OnceCell::new(),
        })
    }

    #[must_use]
    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    pub fn transform_file(&self, file: &ComponentFile) -> Result<TransformedFile> {
        Ok(TransformedFile {
            file_name: self.options.framework.adapt_file_name(file.file_name(), self.options.typescript),
            content: self.transform_content(&file.content)?,
        })
    }

    /// Applies the content stages to one source text.
    pub fn transform_content(&self, source: &str) -> Result<String> {
        let mut content = self.imports.rewrite(source);

        if self.options.strip_client_directive {
            content = strip_client_directive(&content);
        }

        if self.options.rewrites_classes() {
            content = self.rewrite_classes(&content)?;
        }

        Ok(content)
    }

    fn rewrite_classes(&self, source: &str) -> Result<String> {
        let ranges = self.scanner.class_ranges(source);
        if ranges.is_empty() {
            return Ok(source.to_string());
        }

        let palette = if self.options.css_variables {
            None
        } else {
            Some(self.palette()?)
        };

        let mut output = String::with_capacity(source.len());
        let mut last = 0;
        for range in ranges {
            output.push_str(&source[last..range.start]);
            output.push_str(&self.rewrite_class_string(&source[range.clone()], palette));
            last = range.end;
        }
        output.push_str(&source[last..]);
        Ok(output)
    }

    fn rewrite_class_string(&self, classes: &str, palette: Option<&ColorPalette>) -> String {
        let mut rewritten = match palette {
            Some(palette) => apply_color_mapping(classes, palette),
            None => classes.to_string(),
        };
        if !self.options.prefix.is_empty() {
            rewritten = apply_prefix(&rewritten, &self.options.prefix);
        }
        rewritten
    }

    fn palette(&self) -> Result<&ColorPalette> {
        if let Some(palette) = self.palette.get() {
            return Ok(palette);
        }
        debug!("Fetching base color palette");
        let palette = (self.fetch_palette)()?;
        Ok(self.palette.get_or_init(|| palette))
    }
}
