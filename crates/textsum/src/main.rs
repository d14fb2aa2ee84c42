use textsum_common::{load_input, logger, AppConfig};
use textsum_llm::{InferenceClient, RetryPolicy, Summarizer, SummaryStyle};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

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
#[command(name = "textsum")]
#[command(about = "Summarize a text file with the HuggingFace Inference API", long_about = None)]
struct Cli {
    /// Summary type: short, medium, or bullet
    #[arg(short = 't', long = "type", default_value = "medium")]
    summary_type: String,

    /// Path to the text file to summarize
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to the text file (when --input is not given)
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    let config = AppConfig::from_env()?;
    logger::setup_console_logging(&config.log_level)?;

    let token = config.require_token()?.to_string();

    let style: SummaryStyle = cli.summary_type.parse()?;

    let Some(path) = cli.input.or(cli.file) else {
        bail!(
            "No input file specified\n\
             Usage: textsum --input <file> --type <short|medium|bullet>\n\
             \x20  or: textsum -t <short|medium|bullet> <file>"
        );
    };

    let text = load_input(&path, config.max_input_chars)
        .with_context(|| format!("Error reading file '{}'", path.display()))?;

    let client = InferenceClient::new(&config.api_url, Duration::from_secs(config.timeout_secs))?;
    let policy = RetryPolicy::new(
        config.max_retries,
        Duration::from_secs(config.retry_delay_secs),
    );
    let summarizer = Summarizer::new(client, policy);

    tracing::info!("Summarizing {} as {}", path.display(), style);

    let summary = summarizer
        .summarize(&text, style, &token)
        .await
        .context("Error generating summary")?;

    println!("{}", summary);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["textsum", "notes.txt"]);
        assert_eq!(cli.summary_type, "medium");
        assert_eq!(cli.file, Some(PathBuf::from("notes.txt")));
        assert!(cli.input.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["textsum", "-t", "bullet", "--input", "a.txt"]);
        assert_eq!(cli.summary_type, "bullet");
        assert_eq!(cli.input, Some(PathBuf::from("a.txt")));

        let cli = Cli::parse_from(["textsum", "--type", "short", "b.txt"]);
        assert_eq!(cli.summary_type, "short");
        assert_eq!(cli.file, Some(PathBuf::from("b.txt")));
    }
}
