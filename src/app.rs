// src/app.rs
//
// Hôte egui : état (etat.rs), vue (vue.rs) et la boucle eframe qui les relie.
// Aucun calcul ici, tout passe par quand_esperer::evaluer_avec.

pub mod etat;
pub mod vue;

pub use etat::AppEsperer;

use eframe::egui;

impl eframe::App for AppEsperer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement l’entrée (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
            self.clear_resultats();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
