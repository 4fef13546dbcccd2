use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use tirage_core::models::{CandidateBatch, FinalSet, NumberStats, ZoneFinal};
use tirage_core::parser::{LineOutcome, ParseReport};
use tirage_core::profile::GameProfile;

fn format_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(" - ")
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn display_profiles(profiles: &[&GameProfile]) {
    let mut table = new_table();
    table.set_header(vec!["Clé", "Jeu", "Avant", "Arrière", "Fréquents requis", "Seuil froid", "Format"]);

    for p in profiles {
        table.add_row(vec![
            p.key.to_string(),
            p.name.to_string(),
            format!("{} parmi 1-{}", p.front_count, p.front_range),
            format!("{} parmi 1-{}", p.back_count, p.back_range),
            format!("{} / {}", p.front_high_freq_required, p.back_high_freq_required),
            format!("{:.0} % ({} tirages)", p.cold_threshold * 100.0, p.cold_periods),
            p.example_format.to_string(),
        ]);
    }
    println!("{table}");

    for p in profiles {
        println!("  Résultats officiels {} : {}", p.name, p.official_url);
    }
}

pub fn display_parse_report(report: &ParseReport, profile: &GameProfile) {
    println!("Analyse terminée ({}) :", profile.name);
    println!("  Lignes lues      : {}", report.lines.len());
    println!("  Tirages valides  : {}", report.accepted());
    if report.rejected() > 0 {
        println!("  Lignes ignorées  : {}", report.rejected());
        for line in &report.lines {
            if let LineOutcome::Rejected(reason) = &line.outcome {
                println!("    ligne {:>3} : {}", line.line_number, reason);
            }
        }
    }
}

fn display_stats_table(stats: &[NumberStats]) {
    let mut table = new_table();
    table.set_header(vec!["Numéro", "Fréquence", "%", ""]);

    for stat in stats {
        let bar = "█".repeat((stat.percentage / 10.0).round() as usize);
        table.add_row(vec![
            Cell::new(format!("{:02}", stat.number)),
            Cell::new(stat.frequency),
            Cell::new(format!("{:.1}", stat.percentage)),
            Cell::new(bar).fg(Color::Cyan),
        ]);
    }
    println!("{table}");
}

pub fn display_stats(front: &[NumberStats], back: &[NumberStats], profile: &GameProfile, valid_lines: usize) {
    println!("\n📊 Fréquences sur {} tirages ({})\n", valid_lines, profile.name);

    println!("── Zone avant (1-{}) ──", profile.front_range);
    display_stats_table(front);

    println!("\n── Zone arrière (1-{}) ──", profile.back_range);
    display_stats_table(back);
}

pub fn display_batch(batch: &CandidateBatch) {
    println!("\n🎲 Grilles candidates\n");

    let mut table = new_table();
    table.set_header(vec!["#", "Avant", "Arrière"]);

    for (i, set) in batch.sets().iter().enumerate() {
        table.add_row(vec![
            format!("{}", i + 1),
            format_numbers(&set.front),
            format_numbers(&set.back),
        ]);
    }
    println!("{table}");
}

fn zone_row(label: &str, zone: &ZoneFinal) -> Vec<Cell> {
    let cold = zone
        .cold
        .map(|c| format!("{:02} → {:02}", c.replaced, c.inserted))
        .unwrap_or_else(|| "—".to_string());
    let high = if zone.high_frequency.is_empty() {
        "—".to_string()
    } else {
        format_numbers(&zone.high_frequency)
    };
    vec![
        Cell::new(label),
        Cell::new(format_numbers(&zone.numbers)).fg(Color::Green),
        Cell::new(high),
        Cell::new(cold).fg(Color::Blue),
    ]
}

pub fn display_final(final_set: &FinalSet) {
    println!("\n🎯 Grille finale\n");

    let mut table = new_table();
    table.set_header(vec!["Zone", "Numéros", "Fréquents", "Froid"]);
    table.add_row(zone_row("Avant", &final_set.front));
    table.add_row(zone_row("Arrière", &final_set.back));
    println!("{table}");

    println!("  Avant   : {}", final_set.front.logic);
    println!("  Arrière : {}", final_set.back.logic);
    println!("  {}", final_set.explanation);
}
