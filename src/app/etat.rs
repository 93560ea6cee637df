//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : réunir le noyau (tampon + historique), les préférences et le dernier statut d’export,
//! et offrir les actions que la vue et le clavier déclenchent.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `ExpressionState`.
//! - Une commande = une opération, menée jusqu’au bout avant la suivante.

use crate::noyau::{exporter_json, Commande, ExportError, ExpressionState, NOM_FICHIER_EXPORT};

use super::export::telecharger;
use super::preferences::Preferences;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatutExport {
    Ok(String),
    Echec(String),
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- noyau ---
    pub calcul: ExpressionState,

    // --- paramètres ---
    pub preferences: Preferences,

    // --- UX ---
    pub statut_export: Option<StatutExport>,
}

impl AppCalc {
    /// Point d’entrée unique des boutons et du clavier.
    pub fn appliquer(&mut self, commande: Commande) {
        let apres = self.calcul.appliquer(commande);
        log::trace!("{commande:?} -> tampon {:?}", apres.buffer);
    }

    /// Sérialise l’historique (lecture seule) puis l’envoie au fichier / navigateur.
    pub fn exporter_historique(&mut self) {
        let statut = match self.exporter() {
            Ok(destination) => {
                log::info!(
                    "historique exporté ({} entrées) -> {destination}",
                    self.calcul.history().len()
                );
                StatutExport::Ok(destination)
            }
            Err(e) => {
                log::warn!("export de l’historique impossible: {e}");
                StatutExport::Echec(e.to_string())
            }
        };
        self.statut_export = Some(statut);
    }

    fn exporter(&self) -> Result<String, ExportError> {
        let octets = exporter_json(self.calcul.history())?;
        telecharger(&octets, NOM_FICHIER_EXPORT)
    }
}
