use clap::Parser;
use shared::client::{DEFAULT_SUBPROTOCOL, DEFAULT_SUBSCRIPTION_ID, DEFAULT_TOKEN, DEFAULT_URL};
use shared::{ClientConfig, Outcome, Variant, WriterConsole};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "subscription-tester")]
#[command(about = "Open a graphql-ws subscription and print what the server sends")]
struct Args {
    /// GraphQL subscriptions endpoint
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// WebSocket subprotocol to request
    #[arg(long, default_value = DEFAULT_SUBPROTOCOL)]
    subprotocol: String,

    /// JWT sent in the connection_init payload
    #[arg(long, default_value = DEFAULT_TOKEN)]
    token: String,

    /// Client-assigned subscription id
    #[arg(long, default_value = DEFAULT_SUBSCRIPTION_ID)]
    id: String,

    /// Subscription document to send
    #[arg(long, value_enum, default_value_t = Variant::Chatroom)]
    variant: Variant,
}

impl From<Args> for ClientConfig {
    fn from(args: Args) -> Self {
        Self {
            url: args.url,
            subprotocol: args.subprotocol,
            token: args.token,
            subscription_id: args.id,
            variant: args.variant,
        }
    }
}

/// 0 after a clean close, 1 once a transport error was reported
fn exit_code(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Closed => 0,
        Outcome::Failed => 1,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the transcript only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from(Args::parse());
    let mut console = WriterConsole::stdio();

    let outcome = shared::run(&config, &mut console).await?;
    match exit_code(outcome) {
        0 => Ok(()),
        code => std::process::exit(code),
    }
}
