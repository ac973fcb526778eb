use clap::Parser;
use moodj::application::{
    compose_in_editor, init::init, parse_day, parse_month, parse_mood, ConfigService,
    DashboardService, DeleteEntryService, ListEntriesService, SaveEntryService, SessionService,
    CONFIG_KEYS,
};
use moodj::cli::{
    format_calendar, format_dashboard, format_entry, format_entry_list, format_milestone, Cli,
    Commands,
};
use moodj::domain::{EntryFilter, Identity};
use moodj::error::Result;
use moodj::infrastructure::{Config, EditorSession, FileSystemRepository, JournalRepository};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by MOODJ_LOG (default: warn)
fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("MOODJ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

/// Discover the journal and load its config, which doubles as the identity
fn open_journal() -> Result<(FileSystemRepository, Config)> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    Ok((repo, config))
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("moodj - Mood journal");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized moodj journal at {}", path.display());
            Ok(())
        }
        Commands::Login { name } => {
            let repo = FileSystemRepository::discover()?;
            let principal = SessionService::new(repo).login(&name)?;
            println!("Logged in as {}", principal);
            Ok(())
        }
        Commands::Logout => {
            let repo = FileSystemRepository::discover()?;
            SessionService::new(repo).logout()?;
            println!("Logged out");
            Ok(())
        }
        Commands::Whoami => {
            let repo = FileSystemRepository::discover()?;
            println!("{}", SessionService::new(repo).whoami()?);
            Ok(())
        }
        Commands::Write { title, content } => {
            let (repo, config) = open_journal()?;
            config.require_authenticated()?;

            let (title, content) = match content {
                Some(content) => (title, content),
                None => {
                    let editor = EditorSession::new(config.get_editor());
                    let draft = compose_in_editor(&repo, &editor, &title, "")?;
                    (draft.title, draft.content)
                }
            };

            let mut service = SaveEntryService::new(repo, config);
            let outcome = service.save(None, &title, &content)?;
            println!("Saved entry #{} ({})", outcome.entry.id, outcome.entry.mood);
            println!();
            println!("{}", outcome.entry.reflection());
            if let Some(level) = outcome.milestone {
                println!();
                println!("{}", format_milestone(level));
            }
            Ok(())
        }
        Commands::Edit { id, title, content } => {
            let (repo, config) = open_journal()?;
            let existing = ListEntriesService::new(repo.clone(), config.clone()).show(id)?;
            let title = title.unwrap_or(existing.title);

            let (title, content) = match content {
                Some(content) => (title, content),
                None => {
                    let editor = EditorSession::new(config.get_editor());
                    let draft = compose_in_editor(&repo, &editor, &title, &existing.content)?;
                    (draft.title, draft.content)
                }
            };

            let mut service = SaveEntryService::new(repo, config);
            let outcome = service.save(Some(id), &title, &content)?;
            println!("Updated entry #{} ({})", outcome.entry.id, outcome.entry.mood);
            println!();
            println!("{}", outcome.entry.reflection());
            Ok(())
        }
        Commands::Show { id } => {
            let (repo, config) = open_journal()?;
            let entry = ListEntriesService::new(repo, config).show(id)?;
            print!("{}", format_entry(&entry));
            Ok(())
        }
        Commands::Delete { id } => {
            let (repo, config) = open_journal()?;
            DeleteEntryService::new(repo, config).delete(id)?;
            println!("Deleted entry #{}", id);
            Ok(())
        }
        Commands::List { search, date, mood } => {
            let (repo, config) = open_journal()?;

            let mut criteria = EntryFilter::default().with_text(search);
            if let Some(date) = date {
                criteria = criteria.with_date(parse_day(&date)?);
            }
            if let Some(mood) = mood {
                criteria = criteria.with_mood(parse_mood(&mood)?);
            }

            let entries = ListEntriesService::new(repo, config).list(&criteria)?;
            let output = format_entry_list(&entries);
            if entries.is_empty() {
                println!("{}", output);
            } else {
                print!("{}", output);
            }
            Ok(())
        }
        Commands::Stats => {
            let (repo, config) = open_journal()?;
            let nickname = config.display_name().to_string();
            let dashboard = DashboardService::new(repo, config).summary()?;
            print!("{}", format_dashboard(&dashboard, &nickname));
            Ok(())
        }
        Commands::Calendar { month } => {
            let (repo, config) = open_journal()?;
            let month = month.as_deref().map(parse_month).transpose()?;
            let index = DashboardService::new(repo, config).calendar(month)?;
            let output = format_calendar(&index);
            if index.is_empty() {
                println!("{}", output);
            } else {
                print!("{}", output);
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("nickname = {}", config.nickname.unwrap_or_default());
                println!("principal = {}", config.principal.unwrap_or_default());
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodj config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS.join(", "));
                Ok(())
            }
        }
    }
}
