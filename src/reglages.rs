//! src/reglages.rs
//!
//! Réglages en mémoire (aucune persistance).
//!
//! - confiance par défaut quand la requête n’en donne pas (1/2)
//! - nombre de décimales de l’affichage (borné)

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::noyau::calcul::valider;
use crate::noyau::{ErreurRequete, Grandeur};

/// Décimales d’affichage par défaut (comme le lanceur d’origine).
pub const DECIMALES_DEFAUT: usize = 2;

/// Garde-fou : au-delà, le f64 n’a plus rien à dire.
pub const DECIMALES_MAX: usize = 12;

#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    pub confiance_defaut: BigRational,
    pub decimales: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            confiance_defaut: BigRational::new(BigInt::from(1), BigInt::from(2)),
            decimales: DECIMALES_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn avec_decimales(mut self, decimales: usize) -> Self {
        self.decimales = decimales.min(DECIMALES_MAX);
        self
    }

    /// La confiance par défaut doit elle-même être dans ]0, 1[.
    pub fn avec_confiance_defaut(mut self, c: BigRational) -> Result<Self, ErreurRequete> {
        valider(Grandeur::Confiance, &c)?;
        self.confiance_defaut = c;
        Ok(self)
    }
}
