//! Noyau « quand espérer »
//!
//! Organisation interne :
//! - erreur.rs  : taxonomie des erreurs (analyse / domaine)
//! - jetons.rs  : découpage de la requête + lecture exacte des termes
//! - calcul.rs  : validation ]0, 1[ + formule ln(1 - c) / ln(1 - p)
//! - format.rs  : phrase d’affichage + rationnels “jolis”
//! - eval.rs    : pipeline complet

pub mod calcul;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use erreur::{ErreurRequete, GenreErreur, Grandeur};
pub use eval::{evaluer, evaluer_avec, Demarche, Resultat};
