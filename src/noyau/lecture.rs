// src/noyau/lecture.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

/// Garde-fou : décimales écrites au plus (borne aussi l’exposant de pow10).
pub const LIMITE_DECIMALES: usize = 4096;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// r -> entier “scalé” = trunc(r * 10^digits) (vers zéro)
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    let scale = pow10(digits);
    (r.numer() * scale) / r.denom()
}

/* ------------------------ Développement décimal fini ? ------------------------ */

/// Si r a un développement décimal fini, renvoie son nombre de décimales.
/// (dénominateur réduit de la forme 2^a · 5^b => max(a, b) décimales)
fn decimales_exactes(r: &BigRational) -> Option<usize> {
    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);

    let mut d = r.denom().clone();
    let mut a = 0usize;
    let mut b = 0usize;

    while (&d % &deux).is_zero() {
        d /= &deux;
        a += 1;
    }
    while (&d % &cinq).is_zero() {
        d /= &cinq;
        b += 1;
    }

    if d == BigInt::from(1) {
        Some(a.max(b))
    } else {
        None
    }
}

/* ------------------------ Premier chiffre significatif ------------------------ */

/// e tel que |r|·10^e ∈ [1, 10) (r non nul).
/// Ex: 1/3 => 1 ; 1/30000000000000 => 14 ; 1000/3 => -2.
fn exposant_premier_chiffre(r: &BigRational) -> i64 {
    let n = r.numer().abs();
    let d = r.denom().clone();

    // |r|·10^e >= k ?
    let au_moins = |e: i64, k: u32| -> bool {
        if e >= 0 {
            n.clone() * pow10(e as usize) >= &d * k
        } else {
            n.clone() >= &d * pow10((-e) as usize) * k
        }
    };

    // estimation par les longueurs : juste à ±1 près
    let mut e = d.to_str_radix(10).len() as i64 - n.to_str_radix(10).len() as i64;
    loop {
        if !au_moins(e, 1) {
            e += 1;
        } else if au_moins(e, 10) {
            e -= 1;
        } else {
            return e;
        }
    }
}

/* ------------------------ Texte affiché / historisé ------------------------ */

/// Texte d’un résultat (écran + historique) :
/// - décimal fini => exact (0.1+0.2 => "0.3")
/// - sinon => `digits` chiffres significatifs, tronqués (1/3 => "0.333…", 1/3·10^-13 => "0.0000000000000333…")
/// - zéros finaux retirés, jamais de "-0", jamais "0" pour une valeur non nulle
/// - au plus LIMITE_DECIMALES décimales
///
/// Le texte produit est lui-même une expression valide (ré-évaluable).
pub fn format_nombre(r: &BigRational, digits: usize) -> String {
    if r.is_zero() {
        return "0".to_string();
    }

    let d = match decimales_exactes(r) {
        Some(d) => d,
        None => {
            let e = exposant_premier_chiffre(r);
            (e + digits.max(1) as i64 - 1).max(0) as usize
        }
    };
    let d = d.min(LIMITE_DECIMALES);

    let scaled = rational_scaled(r, d);
    if scaled.is_zero() {
        return "0".to_string();
    }

    let mut txt = scaled_to_decimal(scaled, d);
    if txt.contains('.') {
        while txt.ends_with('0') {
            txt.pop();
        }
        if txt.ends_with('.') {
            txt.pop();
        }
    }
    txt
}
