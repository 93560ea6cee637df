// src/noyau/historique.rs
//
// Historique : entrées immuables + sérialisation d’export.

use serde::{Deserialize, Serialize};

use super::erreur::ExportError;

/// Nom du fichier proposé à l’export.
pub const NOM_FICHIER_EXPORT: &str = "calculator_history.txt";

/// Une évaluation réussie. Immuable : champs privés, lecture seule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    expression: String,
    result: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn result(&self) -> &str {
        &self.result
    }
}

/// Export : tableau JSON de `{ "expression", "result" }`, dans l’ordre d’insertion.
/// Lecture seule (prend une tranche, ne peut pas muter l’historique).
pub fn exporter_json(historique: &[HistoryEntry]) -> Result<Vec<u8>, ExportError> {
    Ok(serde_json::to_vec(historique)?)
}
