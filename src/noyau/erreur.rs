//! Erreurs du noyau.
//!
//! - `EvaluationError` : seule famille d’erreur de l’évaluation (syntaxe, symbole, division par zéro).
//!   Elle ne dépasse jamais `ExpressionState::evaluate` : elle devient `Failure(..)`.
//! - `ExportError` : sérialisation / écriture de l’historique exporté.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("expression vide")]
    Vide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: \"{0}\"")]
    NombreInvalide(String),

    #[error("opérateur inattendu: '{0}'")]
    OperateurInattendu(char),

    /// `++` / `--` collés : refusés (incrément / décrément, pas de l’arithmétique).
    #[error("opérateur doublé: '{0}{0}'")]
    OperateurDouble(char),

    #[error("expression incomplète")]
    Incomplete,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("modulo par zéro")]
    ModuloParZero,

    #[error("expression invalide")]
    Invalide,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("sérialisation de l’historique: {0}")]
    Serialisation(#[from] serde_json::Error),

    #[error("écriture du fichier: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(target_arch = "wasm32")]
    #[error("navigateur: {0}")]
    Navigateur(String),
}
