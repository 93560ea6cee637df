//! src/noyau/expression.rs
//!
//! État d’expression : tampon + historique + machine d’états.
//!
//! Contrats :
//! - Le tampon ne contient que des symboles de l’alphabet tant qu’il est construit par `append_token`
//!   (ou le texte d’un résultat, ou le marqueur d’erreur).
//! - L’historique ne fait que grandir, sauf `clear_history` ; une entrée n’est jamais modifiée.
//! - Un échec d’évaluation ne touche jamais l’historique et ne remonte jamais plus haut (`Failure`).
//!
//! Transitions :
//!   Vide -> Saisie -> (Resultat | Erreur) -> Vide | Saisie
//! - Erreur   : le prochain symbole repart d’un tampon neuf.
//! - Resultat : un chiffre ou '.' repart d’un tampon neuf ; un opérateur prolonge le résultat.
//!
//! Valeur exacte :
//! - Le texte d’un résultat peut être tronqué (1/3 => "0.333333333333").
//! - Tant que le tampon commence par ce texte suivi d’opérateurs, on calcule sur la valeur exacte :
//!   1/3 puis "=" redonne 1/3 ; 2/3 puis "*3" donne 2.

use std::sync::Arc;

use num_rational::BigRational;

use super::clavier::Commande;
use super::erreur::EvaluationError;
use super::eval::{eval_apres_valeur, eval_expression};
use super::historique::HistoryEntry;
use super::jetons::est_symbole;
use super::lecture::format_nombre;

/// Texte affiché dans le tampon après un échec.
pub const MARQUEUR_ERREUR: &str = "Error";

/// Chiffres significatifs affichés pour un développement infini (1/3…).
pub const DIGITS_DEFAUT: usize = 12;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvaluationOutcome {
    Success(BigRational),
    Failure(EvaluationError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Vide,
    Saisie,
    Resultat,
    Erreur,
}

/// Vue figée publiée après chaque opération (lecture seule pour la vue / l’export).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub buffer: String,
    pub history: Arc<Vec<HistoryEntry>>,
}

#[derive(Clone, Debug)]
pub struct ExpressionState {
    buffer: String,
    // Copie-sur-écriture : un Snapshot déjà publié ne change jamais.
    history: Arc<Vec<HistoryEntry>>,
    phase: Phase,
    digits: usize,
    // (longueur du texte du dernier résultat en tête du tampon, valeur exacte)
    exact: Option<(usize, BigRational)>,
}

impl Default for ExpressionState {
    fn default() -> Self {
        Self {
            buffer: String::new(),
            history: Arc::new(Vec::new()),
            phase: Phase::Vide,
            digits: DIGITS_DEFAUT,
            exact: None,
        }
    }
}

impl ExpressionState {
    /* ------------------------ Lecture ------------------------ */

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            buffer: self.buffer.clone(),
            history: Arc::clone(&self.history),
        }
    }

    /* ------------------------ Opérations ------------------------ */

    /// Ajoute un symbole (ou une suite de symboles) en fin de tampon.
    /// Un jeton hors alphabet est ignoré en entier ; aucune vérification de forme ici.
    pub fn append_token(&mut self, token: &str) {
        if token.is_empty() || !token.chars().all(est_symbole) {
            log::debug!("jeton refusé: {token:?}");
            return;
        }

        let repart = match self.phase {
            Phase::Erreur => true,
            Phase::Resultat => token.starts_with(|c: char| c.is_ascii_digit() || c == '.'),
            Phase::Vide | Phase::Saisie => false,
        };
        if repart {
            self.buffer.clear();
            self.exact = None;
        }

        self.buffer.push_str(token);
        self.phase = Phase::Saisie;
    }

    /// C : tampon vide, historique intact.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
        self.exact = None;
        self.phase = Phase::Vide;
    }

    /// Retire le dernier symbole (rien si vide). Sur le marqueur d’erreur : efface tout.
    pub fn delete_last(&mut self) {
        if self.phase == Phase::Erreur {
            self.clear_buffer();
            return;
        }

        self.buffer.pop();
        if matches!(self.exact, Some((n, _)) if self.buffer.len() < n) {
            self.exact = None;
        }
        self.phase = if self.buffer.is_empty() {
            Phase::Vide
        } else {
            Phase::Saisie
        };
    }

    /// Évalue le tampon.
    /// - tampon vide : `Failure(Vide)`, rien ne bouge
    /// - succès : tampon = résultat, +1 entrée d’historique
    /// - échec : tampon = marqueur, historique intact
    pub fn evaluate(&mut self) -> EvaluationOutcome {
        if self.buffer.is_empty() {
            return EvaluationOutcome::Failure(EvaluationError::Vide);
        }

        match self.valeur_du_tampon() {
            Ok(valeur) => {
                let texte = format_nombre(&valeur, self.digits);
                log::debug!("évaluation: {} = {}", self.buffer, texte);

                self.exact = Some((texte.len(), valeur.clone()));
                let expression = std::mem::replace(&mut self.buffer, texte.clone());
                Arc::make_mut(&mut self.history).push(HistoryEntry::new(expression, texte));
                self.phase = Phase::Resultat;

                EvaluationOutcome::Success(valeur)
            }
            Err(e) => {
                log::debug!("évaluation échouée: {:?} ({e})", self.buffer);

                self.buffer.clear();
                self.buffer.push_str(MARQUEUR_ERREUR);
                self.exact = None;
                self.phase = Phase::Erreur;

                EvaluationOutcome::Failure(e)
            }
        }
    }

    /// Valeur exacte si le tampon prolonge le dernier résultat par un opérateur (ou rien),
    /// sinon évaluation du texte.
    fn valeur_du_tampon(&self) -> Result<BigRational, EvaluationError> {
        if let Some((n, valeur)) = &self.exact {
            if let Some(reste) = self.buffer.get(*n..) {
                if reste.is_empty() || reste.starts_with(['+', '-', '*', '/', '%']) {
                    return eval_apres_valeur(valeur, reste);
                }
            }
        }
        eval_expression(&self.buffer)
    }

    /// Historique vide, tampon intact.
    pub fn clear_history(&mut self) {
        self.history = Arc::new(Vec::new());
    }

    /// Garde-fou : limite digits (évite abus / gel).
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
    }

    /* ------------------------ Point d’entrée unique (InputSource) ------------------------ */

    /// Applique une commande jusqu’au bout, puis publie le nouvel état.
    pub fn appliquer(&mut self, commande: Commande) -> Snapshot {
        match commande {
            Commande::Ajouter(c) => {
                let mut tmp = [0u8; 4];
                self.append_token(c.encode_utf8(&mut tmp));
            }
            Commande::Effacer => self.clear_buffer(),
            Commande::SupprimerDernier => self.delete_last(),
            Commande::Evaluer => {
                self.evaluate();
            }
            Commande::EffacerHistorique => self.clear_history(),
        }
        self.snapshot()
    }
}
