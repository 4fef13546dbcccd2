use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tirage_core::models::Zone;
use tirage_core::profile::{ProfileKey, all_profiles};
use tirage_core::random::StdRandom;
use tirage_core::session::Session;

use crate::display;
use crate::input::{collect_until_blank, read_draw_text};

#[derive(Debug, PartialEq)]
enum InteractiveCommand {
    Paste,
    Load,
    Stats,
    Generate,
    Finalize,
    Reset,
    Clear,
    Profile,
    Quit,
}

fn parse_command(input: &str) -> Option<InteractiveCommand> {
    match input.trim().to_lowercase().as_str() {
        "1" | "saisir" | "paste" => Some(InteractiveCommand::Paste),
        "2" | "charger" | "load" => Some(InteractiveCommand::Load),
        "3" | "stats" | "frequences" | "fréquences" => Some(InteractiveCommand::Stats),
        "4" | "generer" | "générer" | "generate" | "gen" => Some(InteractiveCommand::Generate),
        "5" | "final" | "finale" | "finalize" => Some(InteractiveCommand::Finalize),
        "6" | "reinitialiser" | "réinitialiser" | "reset" => Some(InteractiveCommand::Reset),
        "7" | "effacer" | "clear" => Some(InteractiveCommand::Clear),
        "8" | "profil" | "profile" => Some(InteractiveCommand::Profile),
        "9" | "quitter" | "quit" | "q" | "exit" => Some(InteractiveCommand::Quit),
        _ => None,
    }
}

fn parse_profile(input: &str) -> Option<ProfileKey> {
    match input.trim().to_lowercase().as_str() {
        "dlt" | "1" => Some(ProfileKey::Dlt),
        "ssq" | "2" => Some(ProfileKey::Ssq),
        _ => None,
    }
}

fn flag(on: bool) -> &'static str {
    if on { "✓" } else { "✗" }
}

fn display_menu(session: &Session<StdRandom>) {
    println!();
    println!(
        "── {} ── analysé {}  lot {}  final {}",
        session.profile().name,
        flag(session.is_analyzed()),
        flag(session.is_batch_ready()),
        flag(session.is_final_ready()),
    );
    println!("  1. saisir         Coller les tirages (ligne vide pour terminer)");
    println!("  2. charger        Charger les tirages depuis un fichier");
    println!("  3. stats          Afficher les fréquences");
    println!("  4. generer        Générer 5 grilles candidates");
    println!("  5. final          Synthétiser la grille finale");
    println!("  6. reinitialiser  Effacer les grilles générées");
    println!("  7. effacer        Tout effacer");
    println!("  8. profil         Changer de jeu");
    println!("  9. quitter        Quitter");
    println!();
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    if read == 0 {
        anyhow::bail!("Fin de l'entrée");
    }
    Ok(input.trim().to_string())
}

fn analyze_text(session: &mut Session<StdRandom>, text: &str) {
    match session.analyze(text) {
        Ok(report) => display::display_parse_report(&report, session.profile()),
        Err(e) => println!("Erreur: {e}"),
    }
}

fn cmd_paste(session: &mut Session<StdRandom>) -> Result<()> {
    println!("Format : {}", session.profile().example_format);
    println!("Collez les tirages, une ligne par tirage, puis une ligne vide :");
    let text = collect_until_blank(io::stdin().lock().lines().map_while(Result::ok));
    analyze_text(session, &text);
    Ok(())
}

/// Chemin saisi au prompt ; `-` est refusé, l'entrée standard sert déjà au REPL.
fn load_path(input: &str) -> Result<PathBuf> {
    match input.trim() {
        "" => anyhow::bail!("Aucun chemin saisi"),
        "-" => anyhow::bail!("Entrée standard indisponible ici, utilisez « saisir »"),
        path => Ok(PathBuf::from(path)),
    }
}

fn cmd_load(session: &mut Session<StdRandom>) -> Result<()> {
    let path = load_path(&prompt("Chemin du fichier : ")?)?;
    let text = read_draw_text(&path)?;
    analyze_text(session, &text);
    Ok(())
}

fn cmd_stats(session: &Session<StdRandom>) {
    if !session.is_analyzed() {
        println!("Aucune donnée analysée.");
        return;
    }
    display::display_stats(
        &session.stats(Zone::Front),
        &session.stats(Zone::Back),
        session.profile(),
        session.valid_lines(),
    );
}

fn cmd_profile(session: &mut Session<StdRandom>) -> Result<()> {
    display::display_profiles(&all_profiles());
    let input = prompt("Profil (dlt/ssq) : ")?;
    match parse_profile(&input) {
        Some(key) => {
            session.switch_profile(key);
            println!("Jeu actif : {}", session.profile().name);
        }
        None => println!("Profil inconnu : '{}'.", input),
    }
    Ok(())
}

pub fn run_interactive(session: &mut Session<StdRandom>) -> Result<()> {
    println!("Bienvenue dans le mode interactif de tirage !");

    loop {
        display_menu(session);
        let input = match prompt("> ") {
            Ok(s) => s,
            Err(_) => break,
        };

        if input.is_empty() {
            continue;
        }

        match parse_command(&input) {
            Some(InteractiveCommand::Quit) => {
                println!("Au revoir !");
                break;
            }
            Some(InteractiveCommand::Paste) => {
                if let Err(e) = cmd_paste(session) {
                    println!("Erreur: {e:#}");
                }
            }
            Some(InteractiveCommand::Load) => {
                if let Err(e) = cmd_load(session) {
                    println!("Erreur: {e:#}");
                }
            }
            Some(InteractiveCommand::Stats) => cmd_stats(session),
            Some(InteractiveCommand::Generate) => match session.generate() {
                Ok(batch) => display::display_batch(batch),
                Err(e) => println!("Erreur: {e}"),
            },
            Some(InteractiveCommand::Finalize) => match session.finalize() {
                Ok(final_set) => display::display_final(final_set),
                Err(e) => println!("Erreur: {e}"),
            },
            Some(InteractiveCommand::Reset) => {
                session.reset_generation();
                println!("Grilles effacées.");
            }
            Some(InteractiveCommand::Clear) => {
                session.clear();
                println!("Session effacée.");
            }
            Some(InteractiveCommand::Profile) => {
                if let Err(e) = cmd_profile(session) {
                    println!("Erreur: {e:#}");
                }
            }
            None => {
                println!("Commande inconnue : '{}'. Tapez un numéro (1-9) ou un nom de commande.", input);
            }
        }
    }

    Ok(())
}
