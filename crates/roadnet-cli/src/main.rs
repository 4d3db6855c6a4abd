use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadnet_lib::{
    build_graph, plan_route, tick, Algorithm, Coordinate, GraphStore, NetworkConfig, RoutePlan,
    RouteRequest, TrafficSimulator,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "roadnet routing engine utilities")]
struct Cli {
    #[command(flatten)]
    network: NetworkArgs,

    #[command(subcommand)]
    command: Command,
}

/// Shape of the synthetic network every subcommand operates on.
#[derive(Args, Debug)]
struct NetworkArgs {
    /// Center latitude in degrees.
    #[arg(long, default_value_t = 40.7128)]
    center_lat: f64,

    /// Center longitude in degrees.
    #[arg(long, default_value_t = -74.0060)]
    center_lng: f64,

    /// Network radius in kilometres.
    #[arg(long, default_value_t = 12.0)]
    radius_km: f64,

    /// Concentric rings of nodes around the center.
    #[arg(long, default_value_t = 2)]
    rings: usize,

    /// Nodes placed on each ring.
    #[arg(long, default_value_t = 8)]
    nodes_per_ring: usize,

    /// Seed for network variation and traffic jitter.
    #[arg(long, default_value_t = 7)]
    seed: u64,
}

impl NetworkArgs {
    fn build_store(&self) -> Result<GraphStore> {
        let config = NetworkConfig {
            rings: self.rings,
            nodes_per_ring: self.nodes_per_ring,
            seed: self.seed,
        };
        build_graph(
            Coordinate::new(self.center_lat, self.center_lng),
            self.radius_km,
            &config,
        )
        .context("failed to build the synthetic network")
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize the generated network.
    Network,
    /// Compute a route between two nodes (by id, name, or "lat,lng").
    Route {
        /// Starting node.
        #[arg(long = "from")]
        from: String,
        /// Destination node.
        #[arg(long = "to")]
        to: String,
        /// Search algorithm: dijkstra, a-star, or bellman-ford.
        #[arg(long, default_value_t = Algorithm::Dijkstra)]
        algorithm: Algorithm,
        /// Apply a traffic tick at this RFC 3339 timestamp before routing.
        #[arg(long)]
        at: Option<String>,
        /// Emit the plan as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Apply one traffic tick and report per-edge congestion.
    Tick {
        /// RFC 3339 timestamp for the tick; defaults to now.
        #[arg(long)]
        at: Option<String>,
        /// Emit the updated edges as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Network => handle_network(&cli.network),
        Command::Route {
            ref from,
            ref to,
            algorithm,
            ref at,
            json,
        } => handle_route(&cli.network, from, to, algorithm, at.as_deref(), json),
        Command::Tick { ref at, json } => handle_tick(&cli.network, at.as_deref(), json),
    }
}

fn handle_network(network: &NetworkArgs) -> Result<()> {
    let store = network.build_store()?;
    println!(
        "Network: {} nodes, {} directed edges within {} km",
        store.node_count(),
        store.edge_count(),
        network.radius_km
    );
    for node in store.nodes() {
        println!(
            "- {} ({}, {}) at {:.4},{:.4}",
            node.name, node.id, node.kind, node.location.lat, node.location.lng
        );
    }
    Ok(())
}

fn handle_route(
    network: &NetworkArgs,
    from: &str,
    to: &str,
    algorithm: Algorithm,
    at: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut store = network.build_store()?;
    if let Some(at) = at {
        let now = parse_timestamp(at)?;
        let mut simulator = TrafficSimulator::from_seed(network.seed);
        tick(&mut store, &mut simulator, now);
    }

    let request = RouteRequest::new(from, to).with_algorithm(algorithm);
    let plan = plan_route(&store, &request)
        .with_context(|| format!("failed to plan a route from {from} to {to}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    if plan.is_unreachable() {
        println!("No route found between {from} and {to}.");
        return Ok(());
    }

    print_plan(&store, &plan);
    Ok(())
}

fn handle_tick(network: &NetworkArgs, at: Option<&str>, json: bool) -> Result<()> {
    let mut store = network.build_store()?;
    let now = match at {
        Some(at) => parse_timestamp(at)?,
        None => Utc::now(),
    };

    let mut simulator = TrafficSimulator::from_seed(network.seed);
    let edges = tick(&mut store, &mut simulator, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&edges)?);
        return Ok(());
    }

    println!("Traffic at {now}:");
    for edge in &edges {
        let status = if edge.is_blocked { " [blocked]" } else { "" };
        println!(
            "- {} ({}) {}: {:.1} -> {:.1}{}",
            edge.id, edge.road_kind, edge.traffic_level, edge.base_weight, edge.current_weight, status
        );
    }
    Ok(())
}

fn print_plan(store: &GraphStore, plan: &RoutePlan) {
    println!(
        "Route ({}): {} -> {} | {} hops, cost {:.1}, about {:.0} min",
        plan.result.algorithm,
        plan.start,
        plan.end,
        plan.hop_count(),
        plan.result.total_cost,
        plan.result.estimated_time_minutes
    );
    for (index, node_id) in plan.result.path.iter().enumerate() {
        let name = store
            .node(node_id)
            .map(|node| node.name.as_str())
            .unwrap_or("<unknown>");
        println!("{index:>3}. {name} ({node_id})");
    }
    println!("Examined {} nodes", plan.result.visited_nodes.len());
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .with_context(|| format!("invalid RFC 3339 timestamp: {raw}"))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
