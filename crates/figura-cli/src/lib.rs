//! CLI logic for the Figura markup checker.
//!
//! The CLI parses a markup file into a multiline text node, applies the
//! configured text defaults, and writes a listing of the styled runs.

pub mod error_adapter;

mod args;
mod config;
mod error;
mod listing;

pub use args::Args;
pub use error::CliError;
pub use listing::render_listing;

use std::fs;

use log::info;

use figura::Diagram;

/// Run the Figura CLI application
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Markup errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Checking markup"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let style = app_config.style().to_style()?;
    let text = app_config.text().to_text_data();
    let line_spacing = args
        .line_spacing
        .as_deref()
        .or(app_config.markup().line_spacing());

    let source = fs::read_to_string(&args.input)?;
    let diagram =
        Diagram::multiline_markup(&source, line_spacing)?.with_default_style(&style, &text);
    let listing = render_listing(&diagram);

    match &args.output {
        Some(path) => {
            fs::write(path, listing)?;
            info!(output_file = path; "Run listing written");
        }
        None => print!("{listing}"),
    }

    Ok(())
}
