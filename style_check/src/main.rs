//! `style-check` entry point: parse arguments, check the document, report.

use clap::Parser;

use style_check::cli::StyleCheckCli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = StyleCheckCli::parse();
    style_check::init_tracing(cli.verbose);
    let stdout = std::io::stdout();
    style_check::run(&cli, &mut stdout.lock()).map_err(color_eyre::eyre::Report::from)
}
