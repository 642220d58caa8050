/// Interactive terminal chat against OpenRouter.
///
/// Reads the key from `OPENROUTER_API_KEY` (a `.env` file works too), keeps the
/// latest 30 messages including the system prompt, and prints retry progress to
/// stderr. Type `/clear` to reset the history or `/quit` to exit.
///
/// Run with: cargo run --example chat
use dotenv::dotenv;
use routerchat::{ApiKey, CompletionClient, Conversation, HttpClientConfig, OpenRouterConfig};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

const SYSTEM_PROMPT: &str = "You are Apna Ghar Chatbot, a concise, helpful assistant for \
home-related queries in India. Keep answers clear, practical, and polite.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let api_key = ApiKey::Default.resolve();
    if api_key.is_empty() {
        eprintln!("Set OPENROUTER_API_KEY (or add it to .env) to get replies.");
    }

    let config = OpenRouterConfig::new()
        .with_x_title("Apna Ghar Chatbot")
        .with_http_config(HttpClientConfig::default());
    let client = CompletionClient::new(config)?.on_status(|update| eprintln!("… {update}"));

    let mut conversation = Conversation::with_system_prompt(SYSTEM_PROMPT).with_max_len(30);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "" => continue,
            "/quit" => break,
            "/clear" => {
                conversation.clear();
                println!("(history cleared)");
                continue;
            }
            prompt => conversation.push_user(prompt),
        }

        let reply = client.reply(&api_key, &conversation).await;
        println!("{reply}\n");

        // Errors are kept too, so the history shows what the user saw.
        conversation.push_assistant(reply);
    }

    Ok(())
}
