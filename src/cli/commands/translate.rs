use anyhow::Result;
use std::io;

use super::{backend_for, load_config};
use crate::cli::GlobalArgs;
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::diff::InlineDiff;
use crate::double::DoubleTranslator;
use crate::input::InputReader;
use crate::ui::{Style, WithSpinner};

/// Where the text to translate comes from.
pub enum TextSource {
    /// Positional argument, or stdin when absent.
    Argument(Option<String>),
    /// The system clipboard.
    Clipboard,
}

pub struct TranslateOptions {
    pub input: TextSource,
    pub source: Option<String>,
    pub pivot: Option<String>,
    pub global: GlobalArgs,
}

/// Runs one double translation and prints every section to stdout.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = load_config(&options.global, options.source, options.pivot)?;
    let backend = backend_for(&config)?;

    let clipboard = SystemClipboard;
    let text = match options.input {
        TextSource::Argument(text) => InputReader::read(text.as_deref())?,
        TextSource::Clipboard => InputReader::check(clipboard.read()?)?,
    };

    let copy_to_clipboard = config.translation.copy_to_clipboard;
    let diff = InlineDiff::from_output_config();
    let backend = WithSpinner::new(backend.as_ref());
    let translator = DoubleTranslator::new(config.translation, &backend, &diff, &clipboard);

    let mut stdout = io::stdout().lock();
    translator.translate(&text, &mut stdout).await?;

    if copy_to_clipboard {
        crate::status!("{}", Style::success("Copied to clipboard."));
    }

    Ok(())
}
