use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "placepick-server")]
#[command(about = "AI-backed nearby place recommendation server", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "placepick-server.yaml")]
    config: String,
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine.
    dotenv::dotenv().ok();

    let args = Args::parse();

    let default_filter = if args.debug {
        "placepick_rs=debug,tower_http=debug"
    } else {
        "placepick_rs=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = placepick_rs::run(&args.config, args.debug).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
