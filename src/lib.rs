//! Quand espérer — nombre d’essais attendus avant un événement
//!
//! Noyau pur (lecture de la requête + calcul) et réglages en mémoire.
//! L’hôte (egui, natif + web) vit dans le binaire et n’appelle que `noyau::evaluer_avec`.

pub mod noyau;
pub mod reglages;

pub use noyau::{evaluer, evaluer_avec, ErreurRequete, GenreErreur, Resultat};
pub use reglages::Reglages;
