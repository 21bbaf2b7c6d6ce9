/// Roster - terminal client for the user API
use clap::{Args, Parser, Subcommand};
use roster_console::{render, views, FieldInput};
use roster_core::types::UserId;
use roster_server_client::{ClientConfig, UserClient, DEFAULT_API_URL};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "List, view, add, edit and delete users", long_about = None)]
struct Cli {
    /// Base URL of the API
    #[arg(long, env = "ROSTER_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users
    List,
    /// Show one user
    Show {
        /// User ID
        id: String,
    },
    /// Add a new user
    Add(FieldArgs),
    /// Edit an existing user; omitted fields keep their current value
    Edit {
        /// User ID
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: String,
    },
}

#[derive(Args)]
struct FieldArgs {
    /// Name
    #[arg(long)]
    name: Option<String>,
    /// Email address
    #[arg(long)]
    email: Option<String>,
    /// Mobile number
    #[arg(long)]
    mobile: Option<String>,
    /// Age
    #[arg(long)]
    age: Option<String>,
    /// Comma-separated interests
    #[arg(long)]
    interests: Option<String>,
}

impl From<FieldArgs> for FieldInput {
    fn from(args: FieldArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            phone: args.mobile,
            age: args.age,
            interests: args.interests,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = UserClient::new(ClientConfig::new(cli.api_url))?;

    let page = match cli.command {
        Commands::List => views::list_users(&client).await,
        Commands::Show { id } => views::show_user(&client, &UserId::new(id)).await,
        Commands::Add(fields) => views::add_user(&client, fields.into()).await,
        Commands::Edit { id, fields } => {
            views::edit_user(&client, &UserId::new(id), fields.into()).await
        }
        Commands::Delete { id } => views::delete_user(&client, &UserId::new(id)).await,
    };

    print!("{}", render(&page));
    Ok(())
}
