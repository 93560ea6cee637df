//! Tests de contrat : machine d’états tampon / historique.
//!
//! Chaque test pilote `ExpressionState` comme le ferait la vue (symbole par symbole).

use num_bigint::BigInt;
use num_rational::BigRational;

use super::erreur::EvaluationError;
use super::expression::{EvaluationOutcome, ExpressionState, MARQUEUR_ERREUR};
use super::historique::HistoryEntry;

fn n(v: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(v))
}

/// Tape `s` symbole par symbole (comme le pavé).
fn taper(e: &mut ExpressionState, s: &str) {
    for c in s.chars() {
        e.append_token(&c.to_string());
    }
}

fn etat_tape(s: &str) -> ExpressionState {
    let mut e = ExpressionState::default();
    taper(&mut e, s);
    e
}

#[test]
fn concatenation_des_symboles() {
    for s in ["", "7", "12.5", "2+3*4", "9%4-1/8", "..--", "+*%/"] {
        let e = etat_tape(s);
        assert_eq!(e.buffer(), s);
    }
}

#[test]
fn retour_arriere_sur_vide() {
    let mut e = ExpressionState::default();
    e.delete_last();
    assert_eq!(e.buffer(), "");
    e.delete_last();
    assert_eq!(e.buffer(), "");
}

#[test]
fn retour_arriere_retire_un_symbole() {
    let mut e = etat_tape("12+3");
    e.delete_last();
    assert_eq!(e.buffer(), "12+");
    e.delete_last();
    e.delete_last();
    assert_eq!(e.buffer(), "1");
}

#[test]
fn effacer_donne_toujours_vide() {
    let mut vide = ExpressionState::default();
    vide.clear_buffer();
    assert_eq!(vide.buffer(), "");

    let mut saisie = etat_tape("4*4");
    saisie.clear_buffer();
    assert_eq!(saisie.buffer(), "");

    let mut resultat = etat_tape("4*4");
    resultat.evaluate();
    resultat.clear_buffer();
    assert_eq!(resultat.buffer(), "");
    assert_eq!(resultat.history().len(), 1);

    let mut erreur = etat_tape("4/0");
    erreur.evaluate();
    erreur.clear_buffer();
    assert_eq!(erreur.buffer(), "");
}

#[test]
fn precedence_2_plus_3_fois_4() {
    let mut e = etat_tape("2+3*4");
    assert_eq!(e.evaluate(), EvaluationOutcome::Success(n(14)));
    assert_eq!(e.buffer(), "14");
}

#[test]
fn division_par_zero_marqueur_sans_historique() {
    let mut e = etat_tape("1+1");
    e.evaluate();
    let avant = e.history().len();

    e.clear_buffer();
    taper(&mut e, "10/0");
    assert_eq!(
        e.evaluate(),
        EvaluationOutcome::Failure(EvaluationError::DivisionParZero)
    );
    assert_eq!(e.buffer(), MARQUEUR_ERREUR);
    assert_eq!(e.history().len(), avant);
}

#[test]
fn succes_ajoute_une_seule_entree() {
    let mut e = etat_tape("7-2");
    assert_eq!(e.evaluate(), EvaluationOutcome::Success(n(5)));
    assert_eq!(e.history(), &[HistoryEntry::new("7-2", "5")]);
}

#[test]
fn historique_dans_l_ordre() {
    let mut e = ExpressionState::default();
    for s in ["1+1", "2*3", "9/0", "10%4"] {
        e.clear_buffer();
        taper(&mut e, s);
        e.evaluate();
    }
    let exprs: Vec<&str> = e.history().iter().map(|h| h.expression()).collect();
    let res: Vec<&str> = e.history().iter().map(|h| h.result()).collect();
    assert_eq!(exprs, ["1+1", "2*3", "10%4"]);
    assert_eq!(res, ["2", "6", "2"]);
}

#[test]
fn effacer_historique_garde_le_tampon() {
    let mut e = etat_tape("3*3");
    e.evaluate();
    taper(&mut e, "+1");
    e.clear_history();
    assert!(e.history().is_empty());
    assert_eq!(e.buffer(), "9+1");
}

#[test]
fn apres_erreur_tampon_neuf() {
    let mut e = etat_tape("5/0");
    e.evaluate();
    assert_eq!(e.buffer(), MARQUEUR_ERREUR);

    e.append_token("8");
    assert_eq!(e.buffer(), "8");

    // même pour un opérateur
    let mut e = etat_tape("2+");
    e.evaluate();
    assert_eq!(e.buffer(), MARQUEUR_ERREUR);
    e.append_token("-");
    assert_eq!(e.buffer(), "-");
}

#[test]
fn evaluer_deux_fois_meme_valeur() {
    let mut e = etat_tape("2+3*4");
    let premier = e.evaluate();
    let second = e.evaluate();
    assert_eq!(premier, EvaluationOutcome::Success(n(14)));
    assert_eq!(second, premier);
    assert_eq!(e.buffer(), "14");
    assert_eq!(e.history()[1], HistoryEntry::new("14", "14"));
}

#[test]
fn evaluer_le_marqueur_echoue_sans_historique() {
    let mut e = etat_tape("1/0");
    e.evaluate();
    let res = e.evaluate();
    assert!(matches!(res, EvaluationOutcome::Failure(_)));
    assert_eq!(e.buffer(), MARQUEUR_ERREUR);
    assert!(e.history().is_empty());
}

#[test]
fn resultat_negatif_reevaluable() {
    let mut e = etat_tape("2-9");
    assert_eq!(e.evaluate(), EvaluationOutcome::Success(n(-7)));
    taper(&mut e, "*2");
    assert_eq!(e.buffer(), "-7*2");
    assert_eq!(e.evaluate(), EvaluationOutcome::Success(n(-14)));
}

#[test]
fn evaluer_deux_fois_un_tiers() {
    let tiers = BigRational::new(BigInt::from(1), BigInt::from(3));
    let mut e = etat_tape("1/3");
    let premier = e.evaluate();
    let second = e.evaluate();
    assert_eq!(premier, EvaluationOutcome::Success(tiers));
    assert_eq!(second, premier);
    assert_eq!(e.history()[0].result(), e.history()[1].result());
}

#[test]
fn petit_resultat_non_nul() {
    let mut e = etat_tape("1/30000000000000");
    assert!(matches!(e.evaluate(), EvaluationOutcome::Success(_)));
    assert_ne!(e.buffer(), "0");
    assert_eq!(e.buffer(), "0.0000000000000333333333333");
    assert_eq!(e.history()[0].result(), e.buffer());
}

#[test]
fn deux_tiers_fois_trois() {
    let mut e = etat_tape("2/3");
    e.evaluate();
    taper(&mut e, "*3");
    assert_eq!(e.evaluate(), EvaluationOutcome::Success(n(2)));
    assert_eq!(e.buffer(), "2");
}
