mod config;
mod display;
mod input;
mod interactive;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::resolve_config;
use crate::display::{display_batch, display_final, display_parse_report, display_profiles, display_stats};
use crate::input::read_draw_text;
use tirage_core::models::Zone;
use tirage_core::profile::{ProfileKey, all_profiles};
use tirage_core::random::StdRandom;
use tirage_core::session::Session;

#[derive(Parser)]
#[command(name = "tirage", about = "Analyse de fréquences et grilles pondérées (Da Le Tou, Shuang Se Qiu)")]
struct Cli {
    /// Fichier de configuration JSON (défaut : tirage.json s'il existe)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Lister les jeux disponibles
    Profiles,

    /// Afficher les fréquences d'un historique de tirages
    Stats {
        /// Jeu
        #[arg(short, long)]
        profile: Option<ProfileKey>,

        /// Fichier de tirages, une ligne par tirage (- pour l'entrée standard)
        #[arg(short, long, default_value = "-")]
        file: PathBuf,
    },

    /// Générer 5 grilles candidates pondérées par les fréquences
    Generate {
        /// Jeu
        #[arg(short, long)]
        profile: Option<ProfileKey>,

        /// Fichier de tirages, une ligne par tirage (- pour l'entrée standard)
        #[arg(short, long, default_value = "-")]
        file: PathBuf,

        /// Seed pour la reproductibilité
        #[arg(long)]
        seed: Option<u64>,

        /// Synthétiser aussi la grille finale
        #[arg(long)]
        finalize: bool,
    },

    /// Mode interactif (REPL)
    Interactive {
        /// Jeu au démarrage
        #[arg(short, long)]
        profile: Option<ProfileKey>,

        /// Seed pour la reproductibilité
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref())?;

    match cli.command {
        Command::Profiles => {
            display_profiles(&all_profiles());
            Ok(())
        }
        Command::Stats { profile, file } => {
            let (profile, seed) = config.merge(profile, None);
            cmd_stats(profile, seed, &file)
        }
        Command::Generate {
            profile,
            file,
            seed,
            finalize,
        } => {
            let (profile, seed) = config.merge(profile, seed);
            cmd_generate(profile, seed, &file, finalize)
        }
        Command::Interactive { profile, seed } => {
            let (profile, seed) = config.merge(profile, seed);
            let mut session = Session::new(profile, StdRandom::new(seed));
            interactive::run_interactive(&mut session)
        }
    }
}

fn analyzed_session(profile: ProfileKey, seed: Option<u64>, file: &Path) -> Result<Session<StdRandom>> {
    let text = read_draw_text(file)?;
    let mut session = Session::new(profile, StdRandom::new(seed));
    let report = session.analyze(&text)?;
    display_parse_report(&report, session.profile());
    Ok(session)
}

fn cmd_stats(profile: ProfileKey, seed: Option<u64>, file: &Path) -> Result<()> {
    let session = analyzed_session(profile, seed, file)?;
    display_stats(
        &session.stats(Zone::Front),
        &session.stats(Zone::Back),
        session.profile(),
        session.valid_lines(),
    );
    Ok(())
}

fn cmd_generate(profile: ProfileKey, seed: Option<u64>, file: &Path, finalize: bool) -> Result<()> {
    let mut session = analyzed_session(profile, seed, file)?;

    let batch = session.generate()?;
    display_batch(batch);

    if finalize {
        let final_set = session.finalize()?;
        display_final(final_set);
    }

    Ok(())
}
