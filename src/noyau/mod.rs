//! Noyau de la calculatrice (sans egui)
//!
//! Organisation interne :
//! - jetons.rs     : alphabet + tokenisation (décimaux exacts)
//! - rpn.rs        : shunting-yard + calcul de la RPN
//! - lecture.rs    : texte décimal d’un résultat (exact ou tronqué)
//! - eval.rs       : pipeline complet
//! - expression.rs : tampon + historique + machine d’états
//! - historique.rs : entrées d’historique + export JSON
//! - clavier.rs    : touches -> commandes
//! - erreur.rs     : erreurs typées

pub mod clavier;
pub mod erreur;
pub mod eval;
pub mod expression;
pub mod historique;
pub mod jetons;
pub mod lecture;
pub mod rpn;

#[cfg(test)]
mod tests_etat;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use clavier::{commandes_pour_touche, Commande, Touche};
pub use erreur::ExportError;
pub use expression::{ExpressionState, Phase, DIGITS_MAX};
pub use historique::{exporter_json, HistoryEntry, NOM_FICHIER_EXPORT};
