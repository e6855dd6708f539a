use clap::Parser;
use serde_json::json;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use content::{ContentClient, ContentConfig};
use globe::{CONTINENT_OUTLINES, GlobeConfig, GlobeFrame, RenderSurface, Stop};
use runtime::{AutoRotate, Frame};

/// Fetch a ship's itinerary from the content store and build the globe
/// geometry a render surface would draw.
#[derive(Parser, Debug)]
struct Args {
    /// Content store base URL.
    #[arg(long, env = "CONTENT_URL", default_value = "http://localhost:1337")]
    content_url: String,

    /// Ship slug. Defaults to the first ship the store returns.
    #[arg(long)]
    ship: Option<String>,

    /// Emit the built frame as JSON on stdout instead of a summary.
    #[arg(long)]
    json: bool,
}

/// Render surface that just reports what it was asked to draw.
struct LogSurface;

impl RenderSurface for LogSurface {
    fn render(&mut self, frame: &GlobeFrame) {
        info!(
            arcs = frame.route_arcs.len(),
            labels = frame.labels.len(),
            triangles = frame.continent_triangles.len() / 3,
            "frame ready"
        );
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if let Err(err) = run(args).await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let client = ContentClient::new(ContentConfig::new(&args.content_url));

    let ship = match &args.ship {
        Some(slug) => client.ship(slug).await?,
        None => client.ships().await?.into_iter().next(),
    };
    let Some(ship) = ship else {
        warn!("content store has no matching ship");
        return Ok(());
    };
    info!(ship = %ship.name, status = ship.status.label(), "loaded ship");

    let itineraries = client.itineraries(&ship.document_id).await?;
    let stops: Vec<Stop> = itineraries
        .first()
        .map(|itinerary| {
            itinerary
                .stops_in_order()
                .into_iter()
                .map(|s| Stop::new(s.name, s.latitude, s.longitude))
                .collect()
        })
        .unwrap_or_default();
    if stops.is_empty() {
        warn!(ship = %ship.slug, "no itinerary stops, globe will be empty");
    }

    let frame = GlobeFrame::build(&stops, CONTINENT_OUTLINES, &GlobeConfig::default());
    LogSurface.render(&frame);

    // One simulated second of the idle spin, to show what the host loop
    // would apply per frame.
    let clock = Frame::start().advance(1.0);
    let spin = AutoRotate::globe().tick(clock.dt_s);
    info!(yaw_deg = spin.yaw_deg, "idle spin after {}s", clock.time.0);

    if args.json {
        println!("{}", frame_to_json(&frame));
    }
    Ok(())
}

fn frame_to_json(frame: &GlobeFrame) -> String {
    let arcs: Vec<Vec<[f64; 3]>> = frame
        .route_arcs
        .iter()
        .map(|arc| arc.iter().map(|p| p.as_array()).collect())
        .collect();
    let labels: Vec<serde_json::Value> = frame
        .labels
        .iter()
        .map(|l| json!({"text": l.text, "position": l.position.as_array()}))
        .collect();
    let triangles: Vec<[f64; 3]> = frame
        .continent_triangles
        .iter()
        .map(|p| p.as_array())
        .collect();

    json!({
        "arcs": arcs,
        "labels": labels,
        "continentTriangles": triangles,
    })
    .to_string()
}
