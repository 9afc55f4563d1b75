//! # Voxia CLI
//!
//! Command-line front end over `voxia_client`.
//!
//! ## Usage
//!
//! ```bash
//! voxia login ana@example.com --password segredo1
//! voxia favorites categories
//! voxia favorites create-card "Água" --image agua.jpg --audio agua.m4a --new-category Bebidas
//! voxia play 42
//! voxia stats --period week
//! ```
//!
//! Failures print a single message on stderr and exit with status 1.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use shared::{Card, CardId, Category, CategoryId};

use voxia_client::debug::{logger, LogConfig};
use voxia_client::services::api::{auth, ApiClient, CardUpdate};
use voxia_client::services::statistics::{self, StatsPeriod};
use voxia_client::utils::wizard::{submit_draft, CardWizard, CategoryChoice};
use voxia_client::{ApiService, AppError, ClientConfig, Result};

#[derive(Parser)]
#[command(name = "voxia")]
#[command(about = "Voxia communication cards from the command line", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL (overrides VOXIA_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Directory holding the stored session (overrides VOXIA_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Log request details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Register {
        email: String,
        #[arg(long, env = "VOXIA_PASSWORD", hide_env_values = true)]
        password: String,
        /// Defaults to --password
        #[arg(long)]
        confirm: Option<String>,
    },
    /// Log in and store the session token
    Login {
        email: String,
        #[arg(long, env = "VOXIA_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Show the logged-in user
    Profile,
    /// Built-in categories and cards
    Home {
        #[command(subcommand)]
        command: HomeCommand,
    },
    /// Your own categories and cards
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },
    /// Register one play of a card
    Play { card: String },
    /// Play-count ranking of your cards
    Stats {
        #[arg(long, default_value_t = StatsPeriod::Day)]
        period: StatsPeriod,
    },
}

#[derive(Subcommand)]
enum HomeCommand {
    /// List built-in categories
    Categories,
    /// List the cards of a built-in category
    Cards { category: String },
}

#[derive(Subcommand)]
enum FavoritesCommand {
    /// List your categories
    Categories,
    /// List the cards of one of your categories
    Cards { category: String },
    CreateCategory { name: String },
    RenameCategory { category: String, name: String },
    /// Delete a category and its cards
    DeleteCategory { category: String },
    ShowCard { card: String },
    /// Create a card (image required, audio optional)
    CreateCard(CreateCardArgs),
    /// Change a card's name, image or audio
    UpdateCard {
        card: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        image: Option<PathBuf>,
        #[arg(long)]
        audio: Option<PathBuf>,
    },
    DeleteCard { card: String },
}

#[derive(Args)]
struct CreateCardArgs {
    name: String,
    #[arg(long)]
    image: PathBuf,
    #[arg(long)]
    audio: Option<PathBuf>,
    /// Existing category id
    #[arg(long, conflicts_with = "new_category", required_unless_present = "new_category")]
    category: Option<String>,
    /// Create this category first and put the card in it
    #[arg(long)]
    new_category: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config = log_config.verbose();
    }
    let _guard = logger::init(&log_config);

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_api_base_url(url);
    }
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir);
    }
    let client = ApiClient::from_config(&config)?;

    match run(&client, cli.command).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("Error: {}", err.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(client: &ApiClient, command: Commands) -> Result<()> {
    match command {
        Commands::Register {
            email,
            password,
            confirm,
        } => {
            let confirm = confirm.unwrap_or_else(|| password.clone());
            let response = auth::register(client, &email, &password, &confirm).await?;
            println!("{}", response.message.unwrap_or_else(|| "Account created".to_string()));
        }
        Commands::Login { email, password } => {
            auth::login(client, &email, &password).await?;
            println!("Logged in as {}", email);
        }
        Commands::Logout => {
            client.logout().await;
            println!("Logged out");
        }
        Commands::Profile => {
            let profile = client.profile().await?;
            println!("{} <{}>", profile.name, profile.email);
            if let Some(photo) = &profile.photo_url {
                println!("photo: {}", photo);
            }
        }
        Commands::Home { command } => match command {
            HomeCommand::Categories => print_categories(&client.home_categories().await?),
            HomeCommand::Cards { category } => {
                print_cards(&client.home_category_cards(&CategoryId::from(category)).await?)
            }
        },
        Commands::Favorites { command } => run_favorites(client, command).await?,
        Commands::Play { card } => {
            client.increment_play_count(&CardId::from(card)).await?;
            println!("Play registered");
        }
        Commands::Stats { period } => print_stats(client, period).await?,
    }
    Ok(())
}

async fn run_favorites(client: &ApiClient, command: FavoritesCommand) -> Result<()> {
    match command {
        FavoritesCommand::Categories => print_categories(&client.favorite_categories().await?),
        FavoritesCommand::Cards { category } => {
            print_cards(&client.favorite_category_cards(&CategoryId::from(category)).await?)
        }
        FavoritesCommand::CreateCategory { name } => {
            let category = client.create_category(&name).await?;
            println!("Created category {} ({})", category.name, category.id);
        }
        FavoritesCommand::RenameCategory { category, name } => {
            let category = client.update_category(&CategoryId::from(category), &name).await?;
            println!("Renamed category {} to {}", category.id, category.name);
        }
        FavoritesCommand::DeleteCategory { category } => {
            client.delete_category(&CategoryId::from(category)).await?;
            println!("Category deleted");
        }
        FavoritesCommand::ShowCard { card } => {
            let card = client.get_card(&CardId::from(card)).await?;
            print_card_details(&card);
        }
        FavoritesCommand::CreateCard(args) => {
            let card = create_card(client, args).await?;
            println!("Created card {} ({})", card.name, card.id);
        }
        FavoritesCommand::UpdateCard {
            card,
            name,
            image,
            audio,
        } => {
            let update = CardUpdate { name, image, audio };
            let card = client.update_card(&CardId::from(card), update).await?;
            print_card_details(&card);
        }
        FavoritesCommand::DeleteCard { card } => {
            client.delete_card(&CardId::from(card)).await?;
            println!("Card deleted");
        }
    }
    Ok(())
}

/// Walk the card wizard with the values given on the command line.
async fn create_card(client: &ApiClient, args: CreateCardArgs) -> Result<Card> {
    let choice = match (args.category, args.new_category) {
        (Some(id), _) => CategoryChoice::Existing(CategoryId::from(id)),
        (None, Some(name)) => CategoryChoice::New(name),
        (None, None) => return Err(AppError::Validation("Choose a category".to_string())),
    };

    let mut wizard = CardWizard::with_optional_audio();
    wizard.set_name(args.name).set_image(args.image);
    if let Some(audio) = args.audio {
        wizard.set_audio(audio);
    }
    wizard.choose_category(choice);

    wizard.advance()?;
    wizard.advance()?;
    let draft = wizard.finish()?;

    submit_draft(client, draft).await
}

async fn print_stats(client: &ApiClient, period: StatsPeriod) -> Result<()> {
    let cards = statistics::collect_favorite_cards(client).await?;
    let summary = statistics::summarize(period, &cards);

    println!("{}", period.label());
    println!("Total plays: {}", summary.total_plays);
    match &summary.most_played {
        Some(top) => println!("Most played: {} ({})", top.card_name, top.play_count),
        None => println!("No cards yet"),
    }
    for (position, entry) in summary.top.iter().enumerate() {
        println!("{:>2}. {:<24} {}", position + 1, entry.card_name, entry.play_count);
    }
    Ok(())
}

fn print_categories(categories: &[Category]) {
    if categories.is_empty() {
        println!("No categories");
    }
    for category in categories {
        println!("{:>6}  {}", category.id, category.name);
    }
}

fn print_cards(cards: &[Card]) {
    if cards.is_empty() {
        println!("No cards");
    }
    for card in cards {
        println!("{:>6}  {:<24} {:>5} plays", card.id, card.name, card.play_count);
    }
}

fn print_card_details(card: &Card) {
    println!("{} ({})", card.name, card.id);
    println!("  image: {}", card.image_url);
    if let Some(audio) = &card.audio_url {
        println!("  audio: {}", audio);
    }
    println!("  plays: {}", card.play_count);
    if let Some(created) = card.created_at_utc() {
        println!("  created: {}", created.format("%Y-%m-%d %H:%M"));
    }
}
