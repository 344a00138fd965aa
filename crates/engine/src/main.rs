//! World Explorer - command-line walkthrough of the persisted game state.

use std::path::Path;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use worldexplorer_domain::{CharacterDraft, OathCeremony, OathStatus};
use worldexplorer_engine::catalog::avatar_options;
use worldexplorer_engine::stores::{CategoryFilter, MissionStats};
use worldexplorer_engine::use_cases::FlightOutcome;
use worldexplorer_engine::{App, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worldexplorer_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting World Explorer");

    let config = AppConfig::from_env();
    let app = App::from_config(&config).await?;

    if !app.stores.academy.is_completed() {
        walk_academy(&app).await?;
    }
    let certificate = app.use_cases.academy.certificate()?;
    println!(
        "{} is a certified {} (issued {})",
        certificate.explorer_name,
        certificate.title,
        certificate.issued_at.format("%B %-d, %Y")
    );

    let cancel = CancellationToken::new();
    setup_shutdown_signal(cancel.clone());

    match app.stores.flight.list_routes().into_iter().find(|r| r.unlocked) {
        Some(route) => {
            println!(
                "Flying {}: {} -> {}",
                route.name, route.start_location.name, route.end_location.name
            );
            match app.use_cases.flight.fly(&route.id, cancel).await? {
                FlightOutcome::Arrived { destination, .. } => {
                    println!("Landed in {}, {}", destination.name, destination.country)
                }
                FlightOutcome::Cancelled { .. } => println!("Flight cancelled"),
            }
        }
        None => println!("No unlocked routes yet"),
    }

    print_summary(&app);
    Ok(())
}

async fn walk_academy(app: &App) -> anyhow::Result<()> {
    let flow = &app.use_cases.academy;
    let progress = app.stores.academy.progress();

    if !progress.intro {
        flow.start().await?;
    }

    if !progress.character {
        let options = avatar_options();
        let mut draft = CharacterDraft::new();
        if let Some(hair) = options.hair.first() {
            draft.select_hair(hair.clone())?;
        }
        if let Some(eyes) = options.eyes.first() {
            draft.select_eyes(eyes.clone())?;
        }
        if let Some(outfit) = options.outfits.first() {
            draft.select_outfit(outfit.clone())?;
        }
        if let Some(vehicle) = options.vehicles.first() {
            draft.select_vehicle(vehicle.clone());
        }
        for tool in options.tools.iter().take(2) {
            draft.toggle_tool(tool.clone());
        }
        flow.create_character(&draft).await?;
    }

    let mut ceremony = OathCeremony::new();
    while let OathStatus::Reciting { pledge, .. } = ceremony.status() {
        println!("  \"{}\"", pledge);
        ceremony.recite();
    }
    flow.take_oath(&ceremony).await?;
    Ok(())
}

fn print_summary(app: &App) {
    if let Some(user) = app.stores.user.get() {
        println!(
            "{}: level {}, {} / {} XP, {} stamps",
            user.name,
            user.level,
            user.experience,
            user.experience_to_next_level(),
            user.passport.stamps.len()
        );
    }

    for route in app.stores.flight.list_routes() {
        let state = match (route.unlocked, route.completed) {
            (_, true) => "completed",
            (true, false) => "open",
            (false, false) => "locked",
        };
        println!("  [{}] {} ({} km)", state, route.name, route.distance);
    }

    let MissionStats {
        completed,
        available,
        locked,
    } = app.stores.mission.stats();
    println!(
        "Missions: {} completed, {} available, {} locked",
        completed, available, locked
    );
    for mission in app.stores.mission.missions_in(CategoryFilter::All) {
        println!(
            "  {} [{}] {}%",
            mission.title, mission.category, mission.progress
        );
    }
}

/// Cancel `cancel_token` on Ctrl+C.
fn setup_shutdown_signal(cancel_token: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, cancelling flight"),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
                return;
            }
        }
        cancel_token.cancel();
    });
}

fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
