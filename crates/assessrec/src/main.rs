use anyhow::Result;
use assessrec_common::{logger, AppConfig};
use assessrec_embed::OllamaClient;
use assessrec_vector::IndexBuilder;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "assessrec")]
#[command(about = "Assessment catalog retrieval service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Build the vector index from the catalog CSV
    Index {
        /// Catalog CSV path (defaults to CSV_PATH from the environment)
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            // CLI arguments override environment configuration
            if let Some(host) = &host {
                std::env::set_var("HOST", host);
            }
            if let Some(port) = port {
                std::env::set_var("PORT", port.to_string());
            }

            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("Assessrec starting...");
            tracing::info!("Configuration loaded:");
            tracing::info!("  Catalog: {}", config.csv_path.display());
            tracing::info!("  Vector store: {}", config.vectorstore_dir.display());
            tracing::info!("  Embedding model: {}", config.embedding_model);

            println!("Server listening on http://{}", config.server_bind_address());

            assessrec_server::start_server(config).await?;
        }
        Some(Commands::Index { csv }) => {
            if let Some(path) = &csv {
                std::env::set_var("CSV_PATH", path);
            }

            let config = AppConfig::from_env()?;
            config.validate()?;
            logger::setup_console_logging(&config.log_level)?;

            let client = Arc::new(OllamaClient::new(&config.ollama_base_url)?);
            let builder = IndexBuilder::new(
                config.vectorstore_dir.clone(),
                client,
                config.embedding_model.clone(),
            );

            let index = builder.build(&config.csv_path).await?;

            println!(
                "Indexed {} chunks into {}",
                index.count(),
                config.vectorstore_dir.display()
            );
        }
        None => {
            // Default: start server with environment configuration
            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("Assessrec starting with default configuration...");

            println!("Server listening on http://{}", config.server_bind_address());

            assessrec_server::start_server(config).await?;
        }
    }

    Ok(())
}
