// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive};

use super::eval::Resultat;

/// Texte d’aide affiché quand la requête est vide.
pub const AIDE: &str = "Entrez une probabilité (0.n ou n/m) ou une cote (n:m), \
puis, si voulu, la confiance souhaitée (défaut : 0.5) !";

/* ------------------------ Helpers rationnels ------------------------ */

/// "n" si entier, sinon "n/d" (forme réduite).
pub fn format_rat(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// Rationnel + lecture décimale : "3/2 (≈ 1.5)".
pub fn format_valeur(r: &BigRational) -> String {
    if r.denom().is_one() {
        return format_rat(r);
    }
    match r.to_f64() {
        Some(x) if x.is_finite() => format!("{} (≈ {})", format_rat(r), format_nombre(x, 6)),
        _ => format_rat(r),
    }
}

/* ------------------------ Nombres décimaux ------------------------ */

/// Arrondi à `decimales` chiffres puis retrait des zéros finaux ("16.430" -> "16.43", "1.00" -> "1").
pub fn format_nombre(x: f64, decimales: usize) -> String {
    let s = format!("{x:.decimales$}");
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Valeur arrondie à `decimales` chiffres (même arrondi que l’affichage).
pub fn arrondir(x: f64, decimales: usize) -> f64 {
    // au-delà de 2^53 un f64 n’a plus de partie fractionnaire
    const ENTIER_EXACT: f64 = 9_007_199_254_740_992.0;

    let echelle = 10f64.powi(decimales as i32);
    let mis_a_echelle = x * echelle;
    if x.abs() >= ENTIER_EXACT || !mis_a_echelle.is_finite() {
        return x;
    }
    mis_a_echelle.round() / echelle
}

/* ------------------------ Phrase résultat ------------------------ */

/// Phrase affichée par l’hôte :
/// "Événement attendu avec une probabilité de 95 % après 17 (16.43) essais."
/// La valeur arrondie n’apparaît entre parenthèses que si elle diffère du nombre entier d’essais.
pub fn titre(r: &Resultat, decimales: usize) -> String {
    let entiers = format_nombre(r.essais_entiers(decimales), 0);
    let arrondi = format_nombre(r.essais, decimales);

    let detail = if arrondi == entiers {
        String::new()
    } else {
        format!(" ({arrondi})")
    };
    // singulier seulement pour exactement 1 (0.15 essais, 0 essais)
    let mot = if arrondi == "1" { "essai" } else { "essais" };

    let pourcent = (&r.confiance * BigRational::from_integer(BigInt::from(100)))
        .to_f64()
        .map(|x| format_nombre(x, 2))
        .unwrap_or_else(|| format_rat(&r.confiance));

    format!("Événement attendu avec une probabilité de {pourcent} % après {entiers}{detail} {mot}.")
}
