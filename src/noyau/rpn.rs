// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur exacte
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis calculer la RPN sur des rationnels exacts
//
// Règles:
// - Précédence : * / % (2) au-dessus de + - (1), associativité à gauche.
// - Signe : un '+' ou '-' qui arrive quand on n’attend PAS une valeur est un signe.
//     '-' => Tok::Neg (unaire, précédence 3, préfixe), '+' => ignoré.
//   "2*-3" => "2 3 ~ *" (et non "2*0-3").
// - Pas de parenthèses (aucun bouton ne les produit).

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::EvaluationError;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        Tok::Neg => 3,
        Tok::Num(_) => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, EvaluationError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre déjà lu (éventuellement signé).
    // Sert à distinguer signe et opérateur binaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    // deux nombres collés : impossible via tokenize, mais on reste strict
                    return Err(EvaluationError::Invalide);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                if matches!(tok, Tok::Minus) {
                    // préfixe : rien à dépiler
                    ops.push(Tok::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent => {
                if !prev_was_value {
                    return Err(EvaluationError::OperateurInattendu(tok.symbole()));
                }

                while let Some(top) = ops.last() {
                    if precedence(top) >= precedence(&tok) {
                        if let Some(op) = ops.pop() {
                            out.push(op);
                        }
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => return Err(EvaluationError::Invalide),
        }
    }

    // fin sur un opérateur (ou rien du tout) : incomplet
    if !prev_was_value {
        return Err(EvaluationError::Incomplete);
    }

    while let Some(op) = ops.pop() {
        out.push(op);
    }

    Ok(out)
}

/// Calcule une RPN sur des rationnels exacts.
///
/// - `/` et `%` par zéro : erreur (jamais d’infini ni de NaN).
/// - `%` : reste tronqué, du signe du dividende (a - b·trunc(a/b)).
pub fn eval_rpn(rpn: &[Tok]) -> Result<BigRational, EvaluationError> {
    let mut st: Vec<BigRational> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(r) => st.push(r.clone()),

            Tok::Neg => {
                let x = st.pop().ok_or(EvaluationError::Invalide)?;
                st.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent => {
                let b = st.pop().ok_or(EvaluationError::Invalide)?;
                let a = st.pop().ok_or(EvaluationError::Invalide)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => {
                        if b.is_zero() {
                            return Err(EvaluationError::DivisionParZero);
                        }
                        a / b
                    }
                    _ => {
                        if b.is_zero() {
                            return Err(EvaluationError::ModuloParZero);
                        }
                        let q = (&a / &b).trunc();
                        a - b * q
                    }
                };

                st.push(v);
            }
        }
    }

    if st.len() != 1 {
        return Err(EvaluationError::Invalide);
    }
    st.pop().ok_or(EvaluationError::Invalide)
}
