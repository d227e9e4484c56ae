use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use folio::auth;
use folio::config::Config;
use folio::mail::{self, ContactMessage, Mailer};
use folio::seed;
use folio::server;
use folio::store::PortfolioDb;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Portfolio content API server")]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (the default when no subcommand is given)
    Serve,
    /// Reset the database and load sample portfolio content
    Seed,
    /// Print the digest to store in ADMIN_PASSWORD_HASH
    HashPassword { password: String },
    /// Send a test message through the configured mail transport
    MailTest,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => server::start_server(config).await,
        Commands::Seed => seed_command(&config),
        Commands::HashPassword { password } => {
            hash_password_command(&password);
            Ok(())
        }
        Commands::MailTest => mail_test_command(&config).await,
    }
}

fn seed_command(config: &Config) -> Result<()> {
    let db = PortfolioDb::open(&config.database_path)?;
    let summary = seed::run(&db)?;

    println!(
        "{} sample content into {}",
        style("Seeded").green().bold(),
        config.database_path.display()
    );
    println!("  projects:     {}", summary.projects);
    println!("  skills:       {}", summary.skills);
    println!("  socials:      {}", summary.socials);
    println!("  testimonials: {}", summary.testimonials);
    Ok(())
}

fn hash_password_command(password: &str) {
    let digest = auth::hash_password(password);
    println!("{}", style("Password digest generated.").green().bold());
    println!("\nAdd this to your .env file:");
    println!("ADMIN_PASSWORD_HASH={digest}\n");
    println!(
        "{}",
        style("Keep the digest out of version control.").yellow()
    );
}

async fn mail_test_command(config: &Config) -> Result<()> {
    mail::log_transport_status(&config.mail);

    let mailer = Mailer::from_config(&config.mail);
    let message = ContactMessage {
        name: "Mail transport test".into(),
        email: config
            .mail
            .from
            .clone()
            .unwrap_or_else(|| "test@example.com".into()),
        message: "Test message from the folio mail transport.".into(),
    };

    match mailer.send(&message).await {
        Ok(()) => {
            println!(
                "{} test message accepted by the transport",
                style("OK").green().bold()
            );
            Ok(())
        }
        Err(err) => Err(anyhow::anyhow!("test send failed: {err}")),
    }
}
