use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Lit le texte brut des tirages ; `-` désigne l'entrée standard.
pub fn read_draw_text(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Erreur de lecture de l'entrée standard")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Impossible d'ouvrir {:?}", path))
}

/// Accumule des lignes jusqu'à la première ligne vide.
pub fn collect_until_blank<I>(lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    lines
        .into_iter()
        .take_while(|l| !l.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_until_blank() {
        let lines = vec![
            "03 12 18 25 33 05 11".to_string(),
            "01,07,12,18,30,02,05".to_string(),
            "   ".to_string(),
            "ignorée".to_string(),
        ];
        assert_eq!(
            collect_until_blank(lines),
            "03 12 18 25 33 05 11\n01,07,12,18,30,02,05"
        );
    }

    #[test]
    fn test_read_missing_file() {
        let path = std::env::temp_dir().join("tirage-absent.txt");
        assert!(read_draw_text(&path).is_err());
    }

    #[test]
    fn test_read_file() {
        let path = std::env::temp_dir().join("tirage-input-test.txt");
        std::fs::write(&path, "03 12 18 25 33 05 11\n").unwrap();
        assert_eq!(read_draw_text(&path).unwrap(), "03 12 18 25 33 05 11\n");
        std::fs::remove_file(&path).ok();
    }
}
