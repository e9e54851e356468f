use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use netgen_core::{DiagramStyle, generate_net, render_text};

use netgen_cli::config_store::{self, LoadedConfig};
use netgen_cli::export::write_diagram;
use netgen_cli::prompt::Prompter;
use netgen_cli::seed::generate_runtime_seed;

#[derive(Parser)]
#[command(author, version, about = "Generate a NET run map as an ASCII diagram", long_about = None)]
struct Args {
    /// Seed for reproducible generation; derived from process entropy when absent
    #[arg(short, long)]
    seed: Option<u64>,
    /// Difficulty in decimals (0-3); prompted for when absent
    #[arg(short, long)]
    difficulty: Option<f64>,
    /// Number of floors to generate; prompted for when absent
    #[arg(short, long)]
    floors: Option<u32>,
    /// Directory holding FloorConfig.json and LobbyFloor.json
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,
    /// Directory receiving the rendered diagram artifact
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = config_store::load_or_seed(&args.config_dir).with_context(|| {
        format!("failed to load floor config from {}", args.config_dir.display())
    })?;
    let LoadedConfig { floor_table, lobby_pool } = &config;

    let (Some(min_floors), Some(max_floors)) = (floor_table.min_level(), floor_table.max_level())
    else {
        bail!("the floor table has no levels; check FloorConfig.json");
    };

    let interactive = args.difficulty.is_none() || args.floors.is_none();
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    loop {
        let difficulty = match args.difficulty {
            Some(value) => value,
            None => prompter.get_number(
                "Difficulty in decimals (0-3).\n\t1.5 would be half level 1 half level 2 difficulty",
                0.0,
                3.0,
            )?,
        };
        let floors = match args.floors {
            Some(value) => {
                if let Err(message) = config_store::check_floor_count(value, min_floors, max_floors)
                {
                    bail!(message);
                }
                value
            }
            None => prompter.get_number(
                &format!("Number of floors? {min_floors} - {max_floors}"),
                u32::from(min_floors),
                u32::from(max_floors),
            )?,
        };
        let seed = args.seed.unwrap_or_else(generate_runtime_seed);

        let net = generate_net(seed, difficulty, floors, floor_table, lobby_pool)
            .with_context(|| format!("net generation failed for seed {seed}"))?;
        let text = render_text(&net, &DiagramStyle::default())
            .context("diagram layout failed; a configured program name is too long")?;

        println!("{text}");
        let path = write_diagram(&args.out_dir, difficulty, floors, &net.signature, &text)
            .with_context(|| format!("failed to write diagram under {}", args.out_dir.display()))?;
        println!("{}", path.display());

        if !interactive || !prompter.get_bool("Do you want to continue? [yes|no]")? {
            return Ok(());
        }
    }
}
