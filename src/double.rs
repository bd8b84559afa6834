//! The double-translation workflow.
//!
//! Text goes source -> pivot -> source through one backend, and the result
//! is diffed against the original. Each step runs only after the previous
//! one succeeded; the first error ends the run and is returned unchanged.

use std::io::Write;

use tracing::debug;

use crate::backend::Backend;
use crate::clipboard::ClipboardSink;
use crate::diff::DiffRenderer;
use crate::error::Error;

/// Settings for one double-translation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationConfig {
    pub source_lang: String,
    pub pivot_lang: String,
    /// Print only the diff, none of the intermediate sections.
    pub diff_only: bool,
    /// Copy the double-translated text to the clipboard afterwards.
    pub copy_to_clipboard: bool,
}

pub struct DoubleTranslator<'a> {
    config: TranslationConfig,
    backend: &'a dyn Backend,
    diff: &'a dyn DiffRenderer,
    clipboard: &'a dyn ClipboardSink,
}

impl<'a> DoubleTranslator<'a> {
    pub fn new(
        config: TranslationConfig,
        backend: &'a dyn Backend,
        diff: &'a dyn DiffRenderer,
        clipboard: &'a dyn ClipboardSink,
    ) -> Self {
        Self {
            config,
            backend,
            diff,
            clipboard,
        }
    }

    /// Runs the workflow on `text`, writing every section to `out`.
    ///
    /// Returns the double-translated text. Sections written before a
    /// failure stay written.
    pub async fn translate<W: Write>(&self, text: &str, out: &mut W) -> Result<String, Error> {
        let TranslationConfig {
            source_lang,
            pivot_lang,
            diff_only,
            copy_to_clipboard,
        } = &self.config;
        let name = self.backend.name();

        if !diff_only {
            writeln!(out, "# Original text")?;
            writeln!(out, "{text}")?;
        }

        debug!(from = %source_lang, to = %pivot_lang, "first pass");
        let pivot = self.backend.translate(text, source_lang, pivot_lang).await?;
        if !diff_only {
            writeln!(out, "# Pivot text ({source_lang} -> {pivot_lang} by {name})")?;
            writeln!(out, "{pivot}")?;
        }

        debug!(from = %pivot_lang, to = %source_lang, "second pass");
        let double = self
            .backend
            .translate(&pivot, pivot_lang, source_lang)
            .await?;
        if !diff_only {
            writeln!(
                out,
                "# Double translated text ({pivot_lang} -> {source_lang} by {name})"
            )?;
            writeln!(out, "{double}")?;
            writeln!(out, "# Diff version")?;
        }

        writeln!(out, "{}", self.diff.render(text, &double))?;
        out.flush()?;

        if *copy_to_clipboard {
            self.clipboard.write(&double)?;
            debug!("result copied to clipboard");
        }

        Ok(double)
    }
}
