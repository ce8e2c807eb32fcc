use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use placepick_rs::client::{ClientError, Location, PlaceBoard, RecommendClient, CATEGORIES};
use placepick_rs::presentation::{markers, navigation_url, share_text, theme_for};

#[derive(Parser, Debug)]
#[command(name = "placepick")]
#[command(about = "Ask a placepick server for nearby places", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "http://localhost:3001")]
    server: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in categories.
    Categories,
    /// Check that the server is up.
    Health,
    /// Recommend places in a category around a location.
    Recommend {
        category: String,
        /// Defaults to Seoul City Hall when latitude or longitude is omitted.
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        lng: Option<f64>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "placepick_rs=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), ClientError> {
    let client = RecommendClient::new(&args.server);

    match args.command {
        Command::Categories => {
            for c in CATEGORIES {
                println!("{:<6} {} {} ({})", c.id, c.icon, c.name, c.keyword);
            }
        }
        Command::Health => {
            let health = client.health().await?;
            println!("{} at {}", health.status, health.timestamp);
        }
        Command::Recommend { category, lat, lng } => {
            let device = lat.zip(lng).map(|(lat, lng)| Location::new(lat, lng));
            let mut board = PlaceBoard::new(device);
            let here = board.location;
            let places = board.select_category(&client, &category).await?;

            let theme = theme_for(&category);
            println!(
                "{} places near {}, {} [{}]",
                places.len(),
                here.latitude,
                here.longitude,
                theme.primary
            );
            let pins = markers(places, &category);
            for (i, (place, pin)) in places.iter().zip(&pins).enumerate() {
                println!("{:>2}. {}", i + 1, share_text(place));
                println!(
                    "    {}, {} [{}]  {}",
                    pin.latitude,
                    pin.longitude,
                    pin.color,
                    navigation_url(place)
                );
            }
        }
    }

    Ok(())
}
