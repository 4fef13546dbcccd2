use crate::error::{Result, SessionError};
use crate::models::DrawRecord;
use crate::profile::GameProfile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    TokenCount { expected: usize, found: usize },
    NotANumber(String),
    FrontOutOfRange(i64),
    BackOutOfRange(i64),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::TokenCount { expected, found } => {
                write!(f, "{found} nombres au lieu de {expected}")
            }
            RejectReason::NotANumber(token) => write!(f, "'{token}' n'est pas un entier"),
            RejectReason::FrontOutOfRange(n) => write!(f, "numéro avant {n} hors limites"),
            RejectReason::BackOutOfRange(n) => write!(f, "numéro arrière {n} hors limites"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Accepted(DrawRecord),
    Rejected(RejectReason),
}

#[derive(Debug, Clone)]
pub struct LineReport {
    /// Numéro de ligne dans le texte brut, à partir de 1.
    pub line_number: usize,
    pub outcome: LineOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub lines: Vec<LineReport>,
}

impl ParseReport {
    pub fn records(&self) -> impl Iterator<Item = &DrawRecord> {
        self.lines.iter().filter_map(|l| match &l.outcome {
            LineOutcome::Accepted(draw) => Some(draw),
            LineOutcome::Rejected(_) => None,
        })
    }

    pub fn accepted(&self) -> usize {
        self.records().count()
    }

    pub fn rejected(&self) -> usize {
        self.lines.len() - self.accepted()
    }
}

fn split_tokens(line: &str) -> Vec<&str> {
    if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    }
}

/// Classe une ligne déjà nettoyée (non vide).
pub fn classify_line(line: &str, profile: &GameProfile) -> LineOutcome {
    let tokens = split_tokens(line);
    let expected = profile.total_count();
    if tokens.len() != expected {
        return LineOutcome::Rejected(RejectReason::TokenCount {
            expected,
            found: tokens.len(),
        });
    }

    let mut values = Vec::with_capacity(expected);
    for token in tokens {
        match token.parse::<i64>() {
            Ok(v) => values.push(v),
            Err(_) => return LineOutcome::Rejected(RejectReason::NotANumber(token.to_string())),
        }
    }

    let (front, back) = values.split_at(profile.front_count);
    if let Some(&n) = front.iter().find(|&&n| n < 1 || n > profile.front_range as i64) {
        return LineOutcome::Rejected(RejectReason::FrontOutOfRange(n));
    }
    if let Some(&n) = back.iter().find(|&&n| n < 1 || n > profile.back_range as i64) {
        return LineOutcome::Rejected(RejectReason::BackOutOfRange(n));
    }

    LineOutcome::Accepted(DrawRecord {
        front: front.iter().map(|&n| n as u8).collect(),
        back: back.iter().map(|&n| n as u8).collect(),
    })
}

fn has_duplicates(numbers: &[u8]) -> bool {
    numbers
        .iter()
        .enumerate()
        .any(|(i, n)| numbers[i + 1..].contains(n))
}

/// Parse le texte brut ligne par ligne. Les lignes invalides sont écartées
/// sans erreur ; seule l'absence totale de ligne valide est signalée.
pub fn parse_draws(raw: &str, profile: &GameProfile) -> Result<ParseReport> {
    if raw.trim().is_empty() {
        return Err(SessionError::EmptyInput);
    }

    let mut report = ParseReport::default();
    for (i, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let outcome = classify_line(line, profile);
        match &outcome {
            LineOutcome::Accepted(draw) => {
                // Doublons acceptés tels quels.
                if has_duplicates(&draw.front) || has_duplicates(&draw.back) {
                    log::warn!("Ligne {} : numéros en double acceptés ({line})", i + 1);
                }
            }
            LineOutcome::Rejected(reason) => {
                log::warn!("Ligne {} ignorée : {reason}", i + 1);
            }
        }
        report.lines.push(LineReport {
            line_number: i + 1,
            outcome,
        });
    }

    if report.accepted() == 0 {
        return Err(SessionError::NoValidLines {
            profile: profile.name.to_string(),
        });
    }

    log::debug!(
        "{} lignes acceptées, {} rejetées ({})",
        report.accepted(),
        report.rejected(),
        profile.name
    );
    Ok(report)
}
