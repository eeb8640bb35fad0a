//! Noyau — calcul du nombre d’essais attendus
//!
//! essais = ln(1 - c) / ln(1 - p)
//!
//! La validation ]0, 1[ se fait sur les rationnels EXACTS (aucun arrondi avant le test),
//! le logarithme seulement en f64.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive};

use super::erreur::{ErreurRequete, Grandeur};
use super::format::format_valeur;

/// Vérifie 0 < x < 1 (strict des deux côtés).
pub fn valider(grandeur: Grandeur, x: &BigRational) -> Result<(), ErreurRequete> {
    if x.is_positive() && *x < BigRational::one() {
        return Ok(());
    }
    Err(ErreurRequete::HorsDomaine {
        grandeur,
        valeur: format_valeur(x),
    })
}

/// ln(1 - x) pour x dans ]0, 1[.
/// - x ≤ 1/2 : ln_1p(-x) (précis quand x est petit)
/// - x > 1/2 : ln du complément exact (précis quand x est proche de 1)
fn ln_complement(x: &BigRational) -> Option<f64> {
    let demi = BigRational::new(BigInt::one(), BigInt::from(2));
    if *x <= demi {
        let xf = x.to_f64()?;
        Some((-xf).ln_1p())
    } else {
        let q = (BigRational::one() - x).to_f64()?;
        Some(q.ln())
    }
}

/// Nombre d’essais attendus (non arrondi) pour atteindre la confiance `c`
/// avec une probabilité `p` par essai.
pub fn essais_attendus(p: &BigRational, c: &BigRational) -> Result<f64, ErreurRequete> {
    valider(Grandeur::Probabilite, p)?;
    valider(Grandeur::Confiance, c)?;

    let numerateur = ln_complement(c).ok_or(ErreurRequete::NonRepresentable)?;
    let denominateur = ln_complement(p).ok_or(ErreurRequete::NonRepresentable)?;

    let essais = numerateur / denominateur;

    // p ou c hors de portée du f64 (ex: 1e-400) => ln nul ou infini
    if !essais.is_finite() || essais <= 0.0 {
        log::debug!("essais non représentable: {numerateur} / {denominateur}");
        return Err(ErreurRequete::NonRepresentable);
    }

    Ok(essais)
}
