//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de l’hôte (requête, phrase résultat, erreur, décimales, démarche)
//! et offrir des opérations simples (C/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucun calcul ici : la lecture des nombres passe par le noyau.
//! - Actions déterministes, sans effet de bord caché.

use quand_esperer::noyau::format::AIDE;
use quand_esperer::noyau::jetons::lire_confiance;
use quand_esperer::reglages::{DECIMALES_DEFAUT, DECIMALES_MAX};
use quand_esperer::{ErreurRequete, Reglages};

/// Confiance utilisée quand la requête n’a qu’un terme (texte saisi).
const CONFIANCE_DEFAUT: &str = "0.5";

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub terme: String,
    pub probabilite: String,
    pub confiance: String,
    pub formule: String,
}

#[derive(Clone, Debug)]
pub struct AppEsperer {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub titre: String,  // phrase résultat (ou aide si entrée vide)
    pub erreur: String, // message d’erreur (analyse / domaine)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub decimales: usize,
    pub confiance_defaut: String,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppEsperer {
    fn default() -> Self {
        Self {
            entree: String::new(),
            titre: AIDE.to_string(), // au démarrage : l’aide
            erreur: String::new(),
            demarche: Demarche::default(),
            decimales: DECIMALES_DEFAUT,
            confiance_defaut: CONFIANCE_DEFAUT.to_string(),
            focus_entree: true,
        }
    }
}

impl AppEsperer {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + décimales par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.decimales = DECIMALES_DEFAUT;
        self.confiance_defaut = CONFIANCE_DEFAUT.to_string();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Efface phrase + erreur + démarche (sans toucher à l’entrée), l’aide revient.
    pub fn clear_resultats(&mut self) {
        self.titre = AIDE.to_string();
        self.erreur.clear();
        self.demarche = Demarche::default();
    }

    /// Erreur : on garde la dernière phrase, la démarche n’est plus fiable.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
    }

    pub fn set_resultats(&mut self, titre: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.titre = titre.into();
        self.demarche = demarche;
    }

    /// Garde-fou : décimales bornées.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
        self.focus_entree = true;
    }

    /// Réglages transmis au noyau (la confiance par défaut doit être dans ]0, 1[).
    pub fn reglages(&self) -> Result<Reglages, ErreurRequete> {
        let c = lire_confiance(self.confiance_defaut.trim())?;
        Reglages::default()
            .avec_decimales(self.decimales)
            .avec_confiance_defaut(c)
    }
}
