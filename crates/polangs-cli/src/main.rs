use clap::{ArgAction, Parser, Subcommand};
use miette::Result as MietteResult;
use polangs_cli::commands::{
    GenerateLanguagesArgs, UpdateManifestArgs, run_generate_languages, run_update_manifest,
};
use polangs_cli::utils::ui;

#[derive(Parser)]
#[command(name = "polangs")]
#[command(about = "Generate the supported-languages manifest from translation coverage")]
#[command(version)]
struct Cli {
    /// Increase logging verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the supported languages as JSON on standard output
    GenerateLanguages(GenerateLanguagesArgs),

    /// Replace the `locales` key of a manifest file with the supported languages
    UpdateManifest(UpdateManifestArgs),
}

fn main() -> MietteResult<()> {
    let cli = Cli::parse();

    let color = !cli.no_color;
    if !color {
        ui::disable_colors();
    }

    miette::set_hook(Box::new(move |_| {
        let opts = miette::MietteHandlerOpts::new()
            .terminal_links(color)
            .unicode(true)
            .context_lines(2)
            .tab_width(4);
        // Without --no-color, miette detects color support itself.
        let opts = if color { opts } else { opts.color(false) };
        Box::new(opts.build())
    }))
    .ok();

    ui::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::GenerateLanguages(args) => run_generate_languages(args),
        Commands::UpdateManifest(args) => run_update_manifest(args),
    };

    result.map_err(miette::Report::new)
}
