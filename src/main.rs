use clap::Parser;
use iconkit::cli::{load_project, Cli, Commands};
use iconkit::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_verbose(cli.verbose);

    match cli.command {
        Commands::Recolor(args) => {
            let project = load_project(cli.manifest.as_deref(), &printer)?;
            iconkit::cli::recolor::run(args, &project, &printer)?;
        }
        Commands::Extract(args) => {
            let project = load_project(cli.manifest.as_deref(), &printer)?;
            iconkit::cli::extract::run(args, &project, &printer)?;
        }
        Commands::Build(args) => {
            let project = load_project(cli.manifest.as_deref(), &printer)?;
            iconkit::cli::build::run(args, &project, &printer)?;
        }
        Commands::Init(args) => iconkit::cli::init::run(args, &printer)?,
        Commands::Completions(args) => iconkit::cli::completions::run(args)?,
    }

    Ok(())
}
