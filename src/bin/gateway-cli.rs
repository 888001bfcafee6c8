use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Command-line client for the HR gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the welcome payload
    Home,
    /// List employees
    List {
        #[arg(long, default_value_t = 0)]
        skip: i64,
        #[arg(long, default_value_t = 50)]
        page_size: i64,
    },
    /// Create an employee from a JSON record
    Create {
        /// e.g. '{"name":"C","code":"123"}'
        json: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Home => client.get(format!("{}/", base)).send().await?,
        Commands::List { skip, page_size } => {
            client
                .get(format!("{}/employees", base))
                .query(&[("skip", skip), ("pageSize", page_size)])
                .send()
                .await?
        }
        Commands::Create { json } => {
            let employee: Value = serde_json::from_str(&json)?;
            client
                .post(format!("{}/employees", base))
                .json(&employee)
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
