use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use region_reveal::ascii;
use region_reveal::commands::{parse_script, PluginCommand};
use region_reveal::config::RevealParams;
use region_reveal::map::{load_map, map_id_from_path, GameMap, TileStore};
use region_reveal::region::{RegionChange, RegionReveal};
use region_reveal::synthetic::{generate_map, SyntheticParams};

#[derive(Parser, Debug)]
#[command(name = "region_reveal")]
#[command(about = "Hide and show map regions and the events standing in them")]
struct Args {
    /// Map file to load (generates a synthetic map if omitted)
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Width of the synthetic map in tiles
    #[arg(short = 'W', long, default_value = "24")]
    width: usize,

    /// Height of the synthetic map in tiles
    #[arg(short = 'H', long, default_value = "12")]
    height: usize,

    /// Number of regions in the synthetic map
    #[arg(long, default_value = "4")]
    regions: u8,

    /// Number of events in the synthetic map
    #[arg(long, default_value = "6")]
    events: u32,

    /// Random seed for the synthetic map (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Parameter file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Command to run, e.g. "hide 3" (repeatable, runs after --script)
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,

    /// File with one command per line
    #[arg(long)]
    script: Option<PathBuf>,

    /// Only build the index on hide, like the editor plugin does
    #[arg(long)]
    no_index_on_show: bool,

    /// Export the final map state to a text file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Don't print the map before and after each command
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    if let Err(message) = run(args) {
        error!("{}", message);
        eprintln!("{}", message);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let mut params = match args.config {
        Some(ref path) => RevealParams::load(path).map_err(|e| e.to_string())?,
        None => RevealParams::default(),
    };
    if args.no_index_on_show {
        params.index_on_show = false;
    }

    let commands = collect_commands(&args)?;
    let mut map = open_map(&args)?;

    println!(
        "Map {}: {}x{}, {} layers, {} events",
        map.map_id,
        map.width(),
        map.height(),
        map.layer_count(),
        map.events().len()
    );
    if !args.quiet {
        ascii::print_map(&map);
    }

    let mut reveal = RegionReveal::new(params);
    reveal.on_map_loaded(map.map_id);

    for command in commands {
        match reveal.execute(&mut map, command) {
            RegionChange::NotFound => {
                println!("{}: region {} has no tiles", command, command.region());
            }
            RegionChange::Applied { tiles, events } => {
                println!("{}: {} tiles, {} events", command, tiles, events);
            }
        }
        if !args.quiet {
            ascii::print_map(&map);
        }
    }

    let hidden: Vec<String> = reveal.hidden_regions().map(|r| r.to_string()).collect();
    if !hidden.is_empty() {
        println!("Hidden regions: {}", hidden.join(", "));
    }

    if let Some(ref path) = args.export {
        ascii::export_map_file(&map, path)
            .map_err(|e| format!("Failed to export map: {}", e))?;
        println!("Exported map to: {}", path.display());
    }

    Ok(())
}

fn collect_commands(args: &Args) -> Result<Vec<PluginCommand>, String> {
    let mut commands = Vec::new();

    if let Some(ref path) = args.script {
        let script = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read script {}: {}", path.display(), e))?;
        commands.extend(parse_script(&script).map_err(|e| e.to_string())?);
    }

    for line in &args.commands {
        let command = line
            .parse::<PluginCommand>()
            .map_err(|e| format!("Bad command '{}': {}", line, e))?;
        commands.push(command);
    }

    Ok(commands)
}

fn open_map(args: &Args) -> Result<GameMap, String> {
    match args.map {
        Some(ref path) => {
            let map_id = map_id_from_path(path).unwrap_or(0);
            load_map(path, map_id).map_err(|e| e.to_string())
        }
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            println!("Generating synthetic map with seed: {}", seed);
            let params = SyntheticParams {
                width: args.width,
                height: args.height,
                region_count: args.regions,
                event_count: args.events,
                ..SyntheticParams::default()
            };
            Ok(generate_map(&params, seed))
        }
    }
}
