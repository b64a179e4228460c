use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    config::{load_settings, normalize_api_base_url},
    CatalogEvent, CatalogSession, HttpBookStore, StoreOp, TransportError,
};
use shared::domain::BookRecord;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Manage the book catalog from the command line")]
struct Cli {
    /// Catalog API base url; overrides catalog.toml and the environment.
    #[arg(long)]
    api_url: Option<String>,
    /// Print the resulting catalog as JSON instead of a table.
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    List,
    Insert {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
    },
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let api_base_url =
        normalize_api_base_url(cli.api_url.as_deref().unwrap_or(&settings.api_base_url))?;
    let mut session = CatalogSession::new(HttpBookStore::new(api_base_url));
    session
        .dispatch(CatalogEvent::Mounted)
        .await
        .context("failed to load catalog")?;

    match cli.command {
        Command::List => {}
        Command::Insert { title, author } => {
            session.dispatch(CatalogEvent::TitleEdited(title)).await?;
            session.dispatch(CatalogEvent::AuthorEdited(author)).await?;
            session
                .dispatch(CatalogEvent::Submitted)
                .await
                .map_err(|err| mutation_error("insert".to_string(), err))?;
        }
        Command::Update { id, title, author } => {
            let record = find_book(session.state().books(), &id)?;
            session.dispatch(CatalogEvent::BeginEdit(record)).await?;
            if let Some(title) = title {
                session.dispatch(CatalogEvent::TitleEdited(title)).await?;
            }
            if let Some(author) = author {
                session.dispatch(CatalogEvent::AuthorEdited(author)).await?;
            }
            session
                .dispatch(CatalogEvent::Submitted)
                .await
                .map_err(|err| mutation_error(format!("update of book {id}"), err))?;
        }
        Command::Delete { id } => {
            let record = find_book(session.state().books(), &id)?;
            session
                .dispatch(CatalogEvent::DeletePressed(record.id))
                .await
                .map_err(|err| mutation_error(format!("delete of book {id}"), err))?;
        }
    }

    let books = session.state().books();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(books)?);
    } else {
        print_table(books);
    }
    Ok(())
}

fn find_book(books: &[BookRecord], id: &str) -> Result<BookRecord> {
    books
        .iter()
        .find(|book| book.id.to_string() == id)
        .cloned()
        .with_context(|| format!("no book with id {id} in the catalog"))
}

/// The refresh after a mutation fails as a `list`; the mutation itself was
/// applied by then.
fn mutation_error(action: String, err: TransportError) -> anyhow::Error {
    let context = if err.op == StoreOp::List {
        format!("{action} succeeded but refreshing the catalog failed")
    } else {
        format!("{action} failed")
    };
    anyhow::Error::new(err).context(context)
}

fn print_table(books: &[BookRecord]) {
    let id_width = books
        .iter()
        .map(|book| book.id.to_string().len())
        .chain(std::iter::once("ID".len()))
        .max()
        .unwrap_or_default();
    let title_width = books
        .iter()
        .map(|book| book.title.chars().count())
        .chain(std::iter::once("Title".len()))
        .max()
        .unwrap_or_default();

    println!("{:<id_width$}  {:<title_width$}  Author", "ID", "Title");
    for book in books {
        println!(
            "{:<id_width$}  {:<title_width$}  {}",
            book.id.to_string(),
            book.title,
            book.author
        );
    }
}
