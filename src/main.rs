use clap::Parser;
use newsboard::application::init::init;
use newsboard::application::{ConfigService, EditorSession, NewsBoard, SubmitOutcome};
use newsboard::cli::{format_entry, format_entry_list, format_event, Cli, Commands};
use newsboard::domain::EntryId;
use newsboard::error::{NewsboardError, Result};
use newsboard::infrastructure::logging::init_logging;
use newsboard::infrastructure::{
    BoardRepository, Config, FileKeyValueStore, FileSystemRepository, KeyValueEntryStore,
};

type FileBoard = NewsBoard<KeyValueEntryStore<FileKeyValueStore>>;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Init { path } = &cli.command {
        let _logger = init_logging("warn")?;
        init(path)?;
        println!("Initialized newsboard at {}", path.display());
        return Ok(());
    }

    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    let _logger = init_logging(&config.log_level)?;

    match cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("storage_key = {}", config.storage_key);
                println!("log_level = {}", config.log_level);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: newsboard config [--list | <key> [<value>]]");
                println!("Valid keys: storage_key, log_level, created");
            }
            Ok(())
        }
        Commands::List => {
            let board = open_board(&repo, &config)?;
            print!("{}", format_entry_list(board.entries()));
            if board.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Show { id } => {
            let board = open_board(&repo, &config)?;
            let id = EntryId::new(id);
            let entry = board.get(id).ok_or(NewsboardError::EntryNotFound(id))?;
            print!("{}", format_entry(entry));
            Ok(())
        }
        Commands::Add { title, text } => {
            let mut session = EditorSession::new(open_board(&repo, &config)?);
            session.set_title(title);
            session.set_text(text);

            match session.submit()? {
                SubmitOutcome::Rejected => Err(NewsboardError::BlankSubmission),
                _ => Ok(()),
            }
        }
        Commands::Edit { id, title, text } => {
            let mut session = EditorSession::new(open_board(&repo, &config)?);
            let id = EntryId::new(id);

            if !session.begin_edit(id) {
                return Err(NewsboardError::EntryNotFound(id));
            }
            if let Some(title) = title {
                session.set_title(title);
            }
            if let Some(text) = text {
                session.set_text(text);
            }

            match session.submit()? {
                SubmitOutcome::Rejected => Err(NewsboardError::BlankSubmission),
                _ => Ok(()),
            }
        }
        Commands::Delete { id } => {
            let mut board = open_board(&repo, &config)?;
            let id = EntryId::new(id);
            if !board.delete(id)? {
                log::info!("no entry {} to delete", id);
            }
            Ok(())
        }
    }
}

/// Load the board for this workspace and echo every change to stdout
fn open_board(repo: &FileSystemRepository, config: &Config) -> Result<FileBoard> {
    let store = repo.entry_store(config)?;

    let mut board = NewsBoard::open(store)?;
    board.subscribe(|event| println!("{}", format_event(event)));
    Ok(board)
}
