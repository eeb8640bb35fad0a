// src/noyau/erreur.rs

use std::fmt;

/// Quantité concernée par une erreur de domaine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grandeur {
    Probabilite,
    Confiance,
}

impl fmt::Display for Grandeur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grandeur::Probabilite => f.write_str("probabilité"),
            Grandeur::Confiance => f.write_str("confiance"),
        }
    }
}

/// Classe d’erreur vue par l’hôte.
/// - Analyse : requête mal formée (l’utilisateur doit corriger la saisie)
/// - Domaine : valeurs lues mais hors de ]0, 1[ (ou non représentables)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreErreur {
    Analyse,
    Domaine,
}

/// Erreurs du noyau. Le message (`Display`) est directement affichable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErreurRequete {
    #[error("Entrée vide")]
    Vide,

    #[error("Trop d’entrées : {0} termes (au plus 2 : probabilité puis confiance)")]
    TropDeTermes(usize),

    #[error("Nombre invalide : « {0} »")]
    NombreInvalide(String),

    #[error("Dénominateur nul dans « {0} »")]
    DenominateurNul(String),

    #[error("La {grandeur} doit être strictement entre 0 et 1 (lu : {valeur})")]
    HorsDomaine { grandeur: Grandeur, valeur: String },

    #[error("Résultat non représentable (valeurs trop proches de 0 ou de 1)")]
    NonRepresentable,
}

impl ErreurRequete {
    pub fn genre(&self) -> GenreErreur {
        match self {
            ErreurRequete::Vide
            | ErreurRequete::TropDeTermes(_)
            | ErreurRequete::NombreInvalide(_)
            | ErreurRequete::DenominateurNul(_) => GenreErreur::Analyse,

            ErreurRequete::HorsDomaine { .. } | ErreurRequete::NonRepresentable => {
                GenreErreur::Domaine
            }
        }
    }
}
