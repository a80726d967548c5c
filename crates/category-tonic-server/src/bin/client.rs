//! Command-line client for the category service.
//!
//! ```bash
//! category-client create Books "Paper and ink"
//! category-client list
//! category-client get 01J1Q5W6ZJ0C1X8Y6R3T0N9M2K
//! category-client create-stream Books=paper Music=vinyl
//! category-client bidi Books=paper Music=vinyl
//! ```

use anyhow::{Context, bail};
use category_tonic_core::proto::{
    Blank, Category, CategoryGetRequest, CreateCategoryRequest,
    category_service_client::CategoryServiceClient,
};
use clap::{Parser, Subcommand};
use tokio_stream::StreamExt;
use tonic::{codec::CompressionEncoding, transport::Channel};

#[derive(Parser, Debug)]
#[command(
    name = "category-client",
    version,
    about = "Talks to a running category-tonic-server"
)]
struct Cli {
    /// Server endpoint.
    ///
    /// Environment variable: `CATEGORY_ENDPOINT`
    #[arg(long, env = "CATEGORY_ENDPOINT", default_value = "http://127.0.0.1:50051")]
    endpoint: String,

    /// Compress requests with zstd.
    #[arg(long, default_value_t = false)]
    zstd: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create one category.
    Create { name: String, description: String },
    /// List every category.
    List,
    /// Fetch one category by id.
    Get { id: String },
    /// Create several categories over a client stream, then print them all.
    CreateStream {
        /// Categories as `name=description`.
        #[arg(required = true)]
        categories: Vec<String>,
    },
    /// Create several categories over a bidirectional stream, printing each
    /// reply as it arrives.
    Bidi {
        /// Categories as `name=description`.
        #[arg(required = true)]
        categories: Vec<String>,
    },
}

fn parse_pair(raw: &str) -> anyhow::Result<CreateCategoryRequest> {
    let Some((name, description)) = raw.split_once('=') else {
        bail!("expected `name=description`, got `{raw}`");
    };
    Ok(CreateCategoryRequest {
        name: name.to_string(),
        description: description.to_string(),
    })
}

fn print_category(category: &Category) {
    println!(
        "{:<26} | {:<20} | {}",
        category.id, category.name, category.description
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let channel = Channel::from_shared(cli.endpoint.clone())
        .context("invalid endpoint")?
        .connect()
        .await
        .with_context(|| format!("failed to connect to {}", cli.endpoint))?;
    let mut client = CategoryServiceClient::new(channel)
        .accept_compressed(CompressionEncoding::Zstd)
        .accept_compressed(CompressionEncoding::Gzip);
    if cli.zstd {
        client = client.send_compressed(CompressionEncoding::Zstd);
    }

    match cli.command {
        Command::Create { name, description } => {
            let response = client
                .create_category(CreateCategoryRequest { name, description })
                .await?
                .into_inner();
            if let Some(category) = response.category {
                print_category(&category);
            }
        }
        Command::List => {
            let list = client.list_categories(Blank {}).await?.into_inner();
            for category in &list.categories {
                print_category(category);
            }
        }
        Command::Get { id } => {
            let category = client
                .get_category(CategoryGetRequest { id })
                .await?
                .into_inner();
            print_category(&category);
        }
        Command::CreateStream { categories } => {
            let requests = categories
                .iter()
                .map(|raw| parse_pair(raw))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let list = client
                .create_category_stream(tokio_stream::iter(requests))
                .await?
                .into_inner();
            for category in &list.categories {
                print_category(category);
            }
        }
        Command::Bidi { categories } => {
            let requests = categories
                .iter()
                .map(|raw| parse_pair(raw))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let mut replies = client
                .create_category_bi_di_stream(tokio_stream::iter(requests))
                .await?
                .into_inner();
            while let Some(reply) = replies.next().await {
                print_category(&reply?);
            }
        }
    }

    Ok(())
}
