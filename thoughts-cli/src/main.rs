use std::io::{self, BufRead, Write};

use anyhow::bail;
use clap::Parser;
use thoughts_client::ThoughtsClient;
use thoughts_domain::{
    CreateThoughtRequest, Dominant, FieldErrors, Pager, Thought, ThoughtStatus,
    UpdateThoughtRequest, rating_summary, truncate, validate_thought_fields,
};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

const DEFAULT_SERVER: &str = "http://localhost:8080";

#[derive(Parser, Debug)]
#[clap(about = "Admin console for the thoughts backend")]
struct Cli {
    /// Backend base URL; falls back to THOUGHTS_API_URL, then localhost
    #[clap(short, long)]
    server: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// List a page of thoughts
    List {
        #[clap(long, default_value_t = 0)]
        page: u32,
        #[clap(long, default_value_t = 20)]
        size: u32,
    },
    /// Show one thought in full
    Get { id: Uuid },
    /// Create a thought (starts IN_REVIEW)
    Create {
        #[clap(long)]
        content: String,
        #[clap(long, default_value = "")]
        author: String,
        #[clap(long, default_value = "")]
        author_bio: String,
    },
    /// Update a thought's fields and status
    Update {
        id: Uuid,
        #[clap(long)]
        content: String,
        #[clap(long, default_value = "")]
        author: String,
        #[clap(long, default_value = "")]
        author_bio: String,
        #[clap(long, value_parser = parse_status)]
        status: ThoughtStatus,
    },
    /// Delete a thought (asks for confirmation)
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt
        #[clap(long)]
        yes: bool,
    },
    /// Fetch one random approved thought
    Random,
    /// Record an up-vote
    ThumbsUp { id: Uuid },
    /// Record a down-vote
    ThumbsDown { id: Uuid },
}

fn parse_status(s: &str) -> Result<ThoughtStatus, String> {
    s.parse()
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let args = Cli::parse();
    let server = args
        .server
        .or_else(|| std::env::var("THOUGHTS_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    let client = ThoughtsClient::new(&server)?;
    tracing::debug!(server = client.base_url(), "talking to backend");

    match args.command {
        Command::List { page, size } => {
            let thoughts = client.list_thoughts(page, size).await?;
            let mut pager = Pager::new(size);
            pager.observe(page, thoughts.len());
            print_list(&thoughts);
            println!("{}", pager.label());
        }
        Command::Get { id } => {
            let thought = client.get_thought(id).await?;
            print_detail(&thought);
        }
        Command::Create {
            content,
            author,
            author_bio,
        } => {
            check_fields(&content, &author, &author_bio)?;
            let request = CreateThoughtRequest::new(&content, &author, &author_bio);
            let thought = client.create_thought(&request).await?;
            println!("Created thought {}", thought.id);
        }
        Command::Update {
            id,
            content,
            author,
            author_bio,
            status,
        } => {
            check_fields(&content, &author, &author_bio)?;
            let request = UpdateThoughtRequest::new(&content, &author, &author_bio, status);
            let thought = client.update_thought(id, &request).await?;
            println!("Thought updated: {thought}");
        }
        Command::Delete { id, yes } => {
            let thought = client.get_thought(id).await?;
            if !yes && !confirm_delete(&thought)? {
                println!("Aborted.");
                return Ok(());
            }
            client.delete_thought(id).await?;
            println!("Thought deleted.");
        }
        Command::Random => {
            let thought = client.random_thought().await?;
            print_detail(&thought);
        }
        Command::ThumbsUp { id } => {
            let thought = client.thumbs_up(id).await?;
            println!("+{}/-{}", thought.thumbs_up, thought.thumbs_down);
        }
        Command::ThumbsDown { id } => {
            let thought = client.thumbs_down(id).await?;
            println!("+{}/-{}", thought.thumbs_up, thought.thumbs_down);
        }
    }

    Ok(())
}

/// Block the request entirely when the form fields are invalid.
fn check_fields(content: &str, author: &str, author_bio: &str) -> anyhow::Result<()> {
    match validate_thought_fields(content, author, author_bio) {
        Ok(()) => Ok(()),
        Err(errors) => {
            print_field_errors(&errors);
            bail!("validation failed, nothing was sent")
        }
    }
}

fn print_field_errors(errors: &FieldErrors) {
    for message in [&errors.content, &errors.author, &errors.author_bio]
        .into_iter()
        .flatten()
    {
        eprintln!("error: {message}");
    }
}

fn confirm_delete(thought: &Thought) -> anyhow::Result<bool> {
    println!(
        "Are you sure you want to delete this thought? This action cannot be undone.\n  {}",
        truncate(&thought.content, 150)
    );
    print!("Delete? [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn print_list(thoughts: &[Thought]) {
    if thoughts.is_empty() {
        println!("No thoughts found. Create your first thought to get started.");
        return;
    }
    for thought in thoughts {
        let rating = rating_summary(thought.thumbs_up, thought.thumbs_down);
        let rating_label = match rating.dominant {
            Dominant::None => "No ratings yet".to_string(),
            Dominant::Up => format!("up {}", rating.percent_label()),
            Dominant::Down => format!("down {}", rating.percent_label()),
        };
        println!(
            "{}  {:9}  +{}/-{}  {}  {}",
            thought.id,
            thought.status.to_string(),
            thought.thumbs_up,
            thought.thumbs_down,
            rating_label,
            truncate(&thought.content, 60),
        );
    }
}

fn print_detail(thought: &Thought) {
    println!("{}", thought.content);
    if !thought.author.is_empty() {
        println!("  {}, {}", thought.author, thought.author_bio);
    }
    println!(
        "id: {}  status: {}  votes: +{}/-{}  created: {}",
        thought.id,
        thought.status,
        thought.thumbs_up,
        thought.thumbs_down,
        thought.created_at.format("%Y-%m-%d"),
    );
}
