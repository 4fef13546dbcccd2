use thiserror::Error;

/// Erreurs récupérables d'une session : le message remplace le précédent
/// et l'état de la session reste inchangé.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Veuillez saisir des données de tirages historiques")]
    EmptyInput,

    #[error("Aucune ligne valide, vérifiez que le format respecte les règles du {profile}")]
    NoValidLines { profile: String },

    #[error("Analysez d'abord les données historiques")]
    PrematureGenerate,

    #[error("Numéros finaux déjà générés, réinitialisez d'abord")]
    DuplicateGenerate,

    #[error("Générez d'abord les grilles candidates")]
    PrematureFinalize,
}

pub type Result<T> = std::result::Result<T, SessionError>;
