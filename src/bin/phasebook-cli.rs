use clap::{Parser, Subcommand};
use reqwest::header::{ETAG, IF_NONE_MATCH};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "phasebook-cli")]
#[command(about = "Query a phasebook search service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search profiles
    Search {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<String>,
        #[arg(long)]
        occupation: Option<String>,
        /// Send as If-None-Match to revalidate a previous result
        #[arg(long)]
        etag: Option<String>,
    },
    /// Check service health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Search {
            id,
            name,
            age,
            occupation,
            etag,
        } => {
            let query: Vec<(&str, String)> = [
                ("id", id),
                ("name", name),
                ("age", age),
                ("occupation", occupation),
            ]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect();

            let mut request = client.get(format!("{}/search", cli.url)).query(&query);
            if let Some(etag) = etag {
                request = request.header(IF_NONE_MATCH, etag);
            }
            print_response(request.send().await?).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    println!("Status: {}", status);
    if let Some(etag) = res.headers().get(ETAG).and_then(|v| v.to_str().ok()) {
        println!("ETag: {}", etag);
    }

    if status == reqwest::StatusCode::NOT_MODIFIED {
        println!("Not modified; cached result is current");
        return Ok(());
    }

    let text = res.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
    }
    Ok(())
}
