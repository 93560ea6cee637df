// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::erreur::EvaluationError;

/// Symboles acceptés dans le tampon (pavé + clavier).
pub const ALPHABET: &str = "0123456789.+-*/%";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Moins unaire : produit par to_rpn, jamais par tokenize.
    Neg,
}

impl Tok {
    /// Symbole d’affichage (démarche / messages d’erreur).
    pub fn symbole(&self) -> char {
        match self {
            Tok::Num(_) => '#',
            Tok::Plus => '+',
            Tok::Minus => '-',
            Tok::Star => '*',
            Tok::Slash => '/',
            Tok::Percent => '%',
            Tok::Neg => '~',
        }
    }
}

/// Vrai si `c` appartient à l’alphabet du tampon.
pub fn est_symbole(c: char) -> bool {
    ALPHABET.contains(c)
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux : 12, 3.5, .5, 5. (un seul point par littéral)
/// - opérateurs + - * / %
/// - espaces ignorés
///
/// Refuse `++` et `--` collés (pas d’incrément / décrément).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, EvaluationError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Opérateurs
        let op = match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '%' => Some(Tok::Percent),
            _ => None,
        };
        if let Some(op) = op {
            if matches!(op, Tok::Plus | Tok::Minus) && chars.get(i + 1) == Some(&c) {
                return Err(EvaluationError::OperateurDouble(c));
            }
            out.push(op);
            i += 1;
            continue;
        }

        // Littéral décimal : [0-9]* ('.' [0-9]*)?
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let litteral: String = chars[start..i].iter().collect();
            out.push(Tok::Num(parse_decimal(&litteral)?));
            continue;
        }

        return Err(EvaluationError::CaractereInattendu(c));
    }

    Ok(out)
}

/// "12.5" -> 125/10 (exact). Un point seul ou deux points : invalide.
fn parse_decimal(litteral: &str) -> Result<BigRational, EvaluationError> {
    let invalide = || EvaluationError::NombreInvalide(litteral.to_string());

    let (ent, frac) = match litteral.split_once('.') {
        Some((e, f)) => (e, f),
        None => (litteral, ""),
    };
    if frac.contains('.') || (ent.is_empty() && frac.is_empty()) {
        return Err(invalide());
    }

    let chiffres = format!("{ent}{frac}");
    let n = if chiffres.is_empty() {
        BigInt::zero()
    } else {
        BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?
    };

    let d = if frac.is_empty() {
        BigInt::one()
    } else {
        BigInt::from(10).pow(frac.len() as u32)
    };

    Ok(BigRational::new(n, d))
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => format_rat(r),
            autre => autre.symbole().to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
