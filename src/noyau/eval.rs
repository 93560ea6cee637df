//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> calcul exact (rationnels)
//!
//! Aucune exécution de code : seuls chiffres, point décimal et `+ - * / %` sont compris.

use num_rational::BigRational;

use super::erreur::EvaluationError;
use super::jetons::{format_tokens, tokenize, Tok};
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue une expression et retourne sa valeur exacte.
pub fn eval_expression(expr_str: &str) -> Result<BigRational, EvaluationError> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(EvaluationError::Vide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    log::debug!(
        "jetons: [{}] ; rpn: [{}]",
        format_tokens(&jetons),
        format_tokens(&rpn)
    );

    // 3) Calcul
    eval_rpn(&rpn)
}

/// Évalue `valeur <reste>` sans repasser par le texte de `valeur`.
/// Sert à prolonger un résultat affiché tronqué (1/3 => "0.333…") avec sa valeur exacte.
/// `reste` vide => `valeur` telle quelle.
pub fn eval_apres_valeur(
    valeur: &BigRational,
    reste: &str,
) -> Result<BigRational, EvaluationError> {
    let mut jetons = vec![Tok::Num(valeur.clone())];
    jetons.extend(tokenize(reste)?);

    let rpn = to_rpn(&jetons)?;
    log::debug!("rpn (valeur exacte): [{}]", format_tokens(&rpn));

    eval_rpn(&rpn)
}
