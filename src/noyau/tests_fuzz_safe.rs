//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la machine d’états sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs bornées
//! - budget temps global
//! - invariants clés : historique +1 sur succès, inchangé sur échec ; tampon dans l’alphabet

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;

use super::clavier::Commande;
use super::eval::eval_expression;
use super::expression::{EvaluationOutcome, ExpressionState, MARQUEUR_ERREUR};
use super::jetons::{est_symbole, ALPHABET};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

fn gen_commande(rng: &mut Rng) -> Commande {
    let alphabet: Vec<char> = ALPHABET.chars().collect();
    match rng.pick(20) {
        0..=13 => Commande::Ajouter(alphabet[rng.pick(alphabet.len() as u32) as usize]),
        14 | 15 => Commande::Evaluer,
        16 | 17 => Commande::SupprimerDernier,
        18 => Commande::Effacer,
        _ => Commande::EffacerHistorique,
    }
}

/// Expression entière bien formée (sans / ni %) + sa valeur attendue en i128.
fn gen_expr_entiere(rng: &mut Rng, termes: usize) -> (String, i128) {
    let ops = ['+', '-', '*'];

    let mut txt = String::new();
    let mut nombres: Vec<i128> = Vec::new();
    let mut operateurs: Vec<char> = Vec::new();

    for k in 0..termes {
        let v = rng.pick(100) as i128;
        if k > 0 {
            let op = ops[rng.pick(3) as usize];
            txt.push(op);
            operateurs.push(op);
        }
        txt.push_str(&v.to_string());
        nombres.push(v);
    }

    // Référence : d’abord les '*', ensuite + / - de gauche à droite.
    let mut termes_add: Vec<i128> = vec![nombres[0]];
    let mut signes: Vec<char> = Vec::new();
    for (op, v) in operateurs.iter().zip(nombres.iter().skip(1)) {
        if *op == '*' {
            if let Some(dernier) = termes_add.last_mut() {
                *dernier *= v;
            }
        } else {
            signes.push(*op);
            termes_add.push(*v);
        }
    }
    let mut attendu = termes_add[0];
    for (s, v) in signes.iter().zip(termes_add.iter().skip(1)) {
        if *s == '+' {
            attendu += v;
        } else {
            attendu -= v;
        }
    }

    (txt, attendu)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_machine() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..60 {
        budget(t0, max);

        let mut e = ExpressionState::default();
        for _ in 0..40 {
            let cmd = gen_commande(&mut rng);
            let avant = e.history().len();

            match cmd {
                Commande::Evaluer => match e.evaluate() {
                    EvaluationOutcome::Success(_) => {
                        assert_eq!(e.history().len(), avant + 1);
                        let derniere = &e.history()[avant];
                        assert_eq!(derniere.result(), e.buffer());
                        seen_ok += 1;
                    }
                    EvaluationOutcome::Failure(_) => {
                        assert_eq!(e.history().len(), avant);
                        assert!(e.buffer().is_empty() || e.buffer() == MARQUEUR_ERREUR);
                        seen_err += 1;
                    }
                },
                autre => {
                    let s = e.appliquer(autre);
                    if autre == Commande::EffacerHistorique {
                        assert!(s.history.is_empty());
                    } else {
                        assert_eq!(s.history.len(), avant);
                    }
                }
            }

            let b = e.buffer();
            assert!(
                b == MARQUEUR_ERREUR || b.chars().all(est_symbole),
                "tampon hors alphabet: {b:?}"
            );
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 5, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 5, "trop peu d’échecs: {seen_err}");
}

#[test]
fn fuzz_safe_precedence_entiers() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let termes = 1 + rng.pick(6) as usize;
        let (expr, attendu) = gen_expr_entiere(&mut rng, termes);

        let v = eval_expression(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert_eq!(
            v,
            BigRational::from_integer(BigInt::from(attendu)),
            "expr={expr:?}"
        );
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let rejouer = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut e = ExpressionState::default();
        for _ in 0..300 {
            e.appliquer(gen_commande(&mut rng));
        }
        e.snapshot()
    };

    assert_eq!(rejouer(42), rejouer(42));
}

#[test]
fn fuzz_safe_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.5"; 800].join("+");

    let mut e = ExpressionState::default();
    e.append_token(&expr);
    let issue = e.evaluate();
    budget(t0, max);

    assert_eq!(
        issue,
        EvaluationOutcome::Success(BigRational::from_integer(BigInt::from(400)))
    );
    assert_eq!(e.buffer(), "400");
}
