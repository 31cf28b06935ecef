use clap::Parser;
use bookshelf::{
    cli::{Cli, Commands},
    cli::commands::{
        browse::BrowseCommand,
        list::ListCommand,
        load_settings,
        show::ShowCommand,
        CommandHandler,
    },
    cli::logging,
    config::loader::log_path_candidates,
    Result,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The browser owns the terminal, so its log goes to a file
    match cli.command {
        Commands::Browse => {
            logging::init_file(cli.log_level, &log_path_candidates());
        }
        _ => logging::init_stderr(cli.log_level),
    }

    let settings = load_settings(cli.config.as_deref(), cli.overrides())?;

    let command: Box<dyn CommandHandler> = match cli.command {
        Commands::List { genre, title, author, pages, format } => {
            Box::new(ListCommand::new(settings, &genre, title, &author, pages, format))
        }
        Commands::Show { id, format } => Box::new(ShowCommand::new(settings, id, format)),
        Commands::Browse => Box::new(BrowseCommand::new(settings)),
    };

    tracing::debug!("Running {} command", command.name());
    command.execute()
}
