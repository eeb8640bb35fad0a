//! Noyau — évaluation (pipeline réel)
//!
//! requête -> découpage (1 ou 2 termes) -> terme de probabilité (cote / fraction / décimal)
//!         -> normalisation exacte -> confiance (ou défaut) -> validation ]0, 1[ -> ln(1-c)/ln(1-p)
//!
//! Aucun état : deux appels avec la même requête donnent le même résultat.

use num_rational::BigRational;

use super::calcul::essais_attendus;
use super::erreur::ErreurRequete;
use super::format::{arrondir, format_rat};
use super::jetons::{decouper, format_terme, lire_confiance, lire_terme};
use crate::reglages::Reglages;

/// Démarche (panneau d’explication côté hôte).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub terme: String,
    pub probabilite: String,
    pub confiance: String,
    pub formule: String,
}

/// Résultat d’une requête (immuable).
#[derive(Clone, Debug, PartialEq)]
pub struct Resultat {
    pub probabilite: BigRational,
    pub confiance: BigRational,
    /// Valeur non arrondie.
    pub essais: f64,
    pub demarche: Demarche,
}

impl Resultat {
    /// Nombre entier d’essais : plafond de la valeur arrondie à `decimales`.
    /// Reste en f64 : avec p minuscule le nombre dépasse vite u64.
    pub fn essais_entiers(&self, decimales: usize) -> f64 {
        arrondir(self.essais, decimales).ceil()
    }
}

/// API publique : `p [c]` avec la confiance par défaut (1/2).
pub fn evaluer(requete: &str) -> Result<Resultat, ErreurRequete> {
    evaluer_avec(requete, &Reglages::default())
}

/// API publique : `p [c]` avec réglages explicites.
pub fn evaluer_avec(requete: &str, reglages: &Reglages) -> Result<Resultat, ErreurRequete> {
    // 1) Découpage
    let (terme_p, terme_c) = decouper(requete)?;

    // 2) Probabilité (forme reconnue puis normalisée)
    let terme = lire_terme(terme_p)?;
    let probabilite = terme.normaliser()?;
    log::debug!(
        "terme {:?} reconnu: {} -> p = {}",
        terme_p,
        format_terme(&terme),
        format_rat(&probabilite)
    );

    // 3) Confiance (défaut si absente)
    let confiance = match terme_c {
        Some(c) => lire_confiance(c)?,
        None => reglages.confiance_defaut.clone(),
    };

    // 4) Calcul (valide ]0, 1[ avant tout log)
    let essais = essais_attendus(&probabilite, &confiance)?;
    log::debug!(
        "p = {}, c = {} -> {essais} essais",
        format_rat(&probabilite),
        format_rat(&confiance)
    );

    let demarche = Demarche {
        terme: format_terme(&terme),
        probabilite: format_rat(&probabilite),
        confiance: format_rat(&confiance),
        formule: format!(
            "ln(1 - {}) / ln(1 - {}) = {essais}",
            format_rat(&confiance),
            format_rat(&probabilite)
        ),
    };

    Ok(Resultat {
        probabilite,
        confiance,
        essais,
        demarche,
    })
}
