//! Template engine implementation

mod scan;

use crate::args::NamedArgs;
use crate::config::{FormatOptions, StrayClosePolicy, UnterminatedPolicy};
use crate::error::{FormatError, Result};
use crate::template::resolve::{FnResolver, IndexResolver, NameResolver, NoArguments, Resolver};
use crate::value::Value;

use scan::{Scanner, Segment};

/// Placeholder formatter
///
/// Holds only the [`FormatOptions`]; every call is independent, so one
/// formatter can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    /// Create a formatter that fails closed on every malformed input
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Render a template, resolving each placeholder through `resolver`
    ///
    /// Resolver errors are returned unchanged; nothing is returned on failure.
    pub fn render<R: Resolver>(&self, template: &str, mut resolver: R) -> Result<String> {
        let mut output = String::with_capacity(template.len());

        for segment in Scanner::new(template) {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Escape(delimiter) => output.push(delimiter),
                Segment::Placeholder { key, .. } => {
                    tracing::trace!(key, "resolving placeholder");
                    let value = resolver.resolve(key)?;
                    value.render_into(&mut output);
                }
                Segment::Unterminated { key, start } => {
                    self.process_unterminated(template, key, start, &mut output)?
                }
                Segment::StrayClose { pos } => self.process_stray_close(template, pos, &mut output)?,
            }
        }

        Ok(output)
    }

    /// Apply the unterminated-placeholder policy to `{key` at end of input
    fn process_unterminated(
        &self,
        template: &str,
        key: &str,
        start: usize,
        output: &mut String,
    ) -> Result<()> {
        match self.options.unterminated {
            UnterminatedPolicy::Error => Err(FormatError::malformed(
                template,
                start,
                format!("unterminated placeholder '{{{}'", key),
            )),
            UnterminatedPolicy::Literal => {
                tracing::debug!(start, "unterminated placeholder kept as literal text");
                output.push('{');
                output.push_str(key);
                Ok(())
            }
            UnterminatedPolicy::Drop => {
                tracing::debug!(start, "unterminated placeholder dropped");
                Ok(())
            }
        }
    }

    /// Apply the stray-close policy to a lone `}`
    fn process_stray_close(&self, template: &str, pos: usize, output: &mut String) -> Result<()> {
        match self.options.stray_close {
            StrayClosePolicy::Error => Err(FormatError::malformed(
                template,
                pos,
                "unmatched '}' (write '}}' for a literal brace)",
            )),
            StrayClosePolicy::Literal => {
                tracing::debug!(pos, "unmatched '}}' kept as literal text");
                output.push('}');
                Ok(())
            }
        }
    }

    /// Render with a closure resolver
    pub fn format<F>(&self, template: &str, resolve: F) -> Result<String>
    where
        F: FnMut(&str) -> Result<Value>,
    {
        self.render(template, FnResolver(resolve))
    }

    /// Render with positional arguments: `{0}`, `{1}`, ...
    pub fn format_by_index(&self, template: &str, args: impl AsRef<[Value]>) -> Result<String> {
        self.render(template, IndexResolver::new(args.as_ref()))
    }

    /// Render with named arguments: `{name}`
    pub fn format_by_name(&self, template: &str, args: &NamedArgs) -> Result<String> {
        let resolver = NameResolver::new(args).with_missing_policy(self.options.missing_name);
        self.render(template, resolver)
    }

    /// Render a template that takes no arguments; any placeholder fails
    pub fn format_plain(&self, template: &str) -> Result<String> {
        self.render(template, NoArguments)
    }
}

/// Render a template with a closure resolver and default options
///
/// ```
/// use bracefmt_core::{format, Value};
///
/// let out = format("{a}-{b}", |key| Ok(Value::from(key.to_uppercase()))).unwrap();
/// assert_eq!(out, "A-B");
/// ```
pub fn format<F>(template: &str, resolve: F) -> Result<String>
where
    F: FnMut(&str) -> Result<Value>,
{
    Formatter::new().format(template, resolve)
}

/// Render with positional arguments and default options
pub fn format_by_index(template: &str, args: impl AsRef<[Value]>) -> Result<String> {
    Formatter::new().format_by_index(template, args)
}

/// Render with named arguments and default options
pub fn format_by_name(template: &str, args: &NamedArgs) -> Result<String> {
    Formatter::new().format_by_name(template, args)
}

/// Render a template without arguments and default options
pub fn format_plain(template: &str) -> Result<String> {
    Formatter::new().format_plain(template)
}

#[cfg(test)]
mod tests;
