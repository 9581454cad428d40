mod app;

use clap::Parser;
use common::best_score::PersistentBestScore;
use common::games::puzzle2048::{GameSession, RandomTileSource};
use common::{log, logger};
use eframe::egui;

use app::GameApp;

#[derive(Parser)]
#[command(name = "puzzle2048_client")]
struct Args {
    /// Spawner seed; a random one is drawn (and logged) when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// YAML file holding the persisted best score.
    #[arg(long, default_value = "puzzle2048_best.yaml")]
    best_score_file: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger();

    let tile_source = match args.seed {
        Some(seed) => RandomTileSource::with_seed(seed),
        None => RandomTileSource::from_random(),
    };
    log!("Starting session with seed {}", tile_source.seed());

    let best_store = PersistentBestScore::from_yaml_file(&args.best_score_file);
    let session = GameSession::create(tile_source, best_store);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 680.0])
            .with_title("2048"),
        ..Default::default()
    };

    eframe::run_native(
        "2048",
        options,
        Box::new(|_cc| Ok(Box::new(GameApp::new(session)))),
    )?;

    Ok(())
}
