// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppEsperer (etat.rs) pour natif + wasm
// - Évaluation à chaque frappe (le noyau est pur, pas d’état entre deux requêtes)
// - Tactile : boutons d’insertion, focus redonné après clic (focus_entree)

use eframe::egui;

use quand_esperer::noyau::format::titre;
use quand_esperer::{evaluer_avec, ErreurRequete};

use super::etat::{AppEsperer, Demarche};

impl AppEsperer {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Quand espérer ?");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Requête (p [c]) :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 1/6 0.95, 1:5, 0.3 0.9")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Une requête par frappe
        if resp.changed() {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Décimales :");
            let mut d = self.decimales as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=quand_esperer::reglages::DECIMALES_MAX as u32),
            );
            if resp.changed() {
                self.set_decimales(d as usize);
                self.eval_via_noyau();
            }

            ui.separator();

            ui.label("Confiance par défaut :");
            let resp = ui.add(
                egui::TextEdit::singleline(&mut self.confiance_defaut)
                    .desired_width(56.0)
                    .id_source("confiance_defaut_edit"),
            );
            if resp.changed() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        // Séparateurs + confiances usuelles
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "/", "/");
            self.bouton_insert(ui, ":", ":");
            self.bouton_insert(ui, ".", ".");
            self.bouton_insert(ui, "␣", " ");

            ui.separator();

            for c in ["0.5", "0.9", "0.95", "0.99"] {
                self.bouton_confiance(ui, c);
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "titre_out", &self.titre, 2);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Terme", "demarche_terme", &self.demarche.terme);
                Self::champ_demarche(ui, "p", "demarche_p", &self.demarche.probabilite);
                Self::champ_demarche(ui, "c", "demarche_c", &self.demarche.confiance);
                Self::champ_demarche(ui, "Formule", "demarche_formule", &self.demarche.formule);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ResetTotal => self.reset_total(),
            }
            self.eval_via_noyau();
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }
        self.entree.push_str(to_insert);
        self.eval_via_noyau();
        self.focus_entree = true;
    }

    /// Remplace (ou ajoute) le second terme de la requête.
    fn bouton_confiance(&mut self, ui: &mut egui::Ui, c: &str) {
        let resp = ui
            .add_sized([46.0, 28.0], egui::Button::new(c))
            .on_hover_text("Confiance voulue");
        if !resp.clicked() {
            return;
        }
        let premier = self.entree.split_whitespace().next().unwrap_or("").to_string();
        self.entree = format!("{premier} {c}");
        self.eval_via_noyau();
        self.focus_entree = true;
    }

    /// Évalue la requête via le noyau, puis dépose phrase/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let reglages = match self.reglages() {
            Ok(r) => r,
            Err(e) => {
                self.set_erreur(format!("Confiance par défaut : {e}"));
                return;
            }
        };

        match evaluer_avec(&self.entree, &reglages) {
            Ok(r) => {
                let d_ui = Demarche {
                    terme: r.demarche.terme.clone(),
                    probabilite: r.demarche.probabilite.clone(),
                    confiance: r.demarche.confiance.clone(),
                    formule: r.demarche.formule.clone(),
                };
                self.set_resultats(titre(&r, reglages.decimales), d_ui);
            }
            // Entrée vide : pas une faute, on affiche l’aide
            Err(ErreurRequete::Vide) => self.clear_resultats(),
            Err(e) => {
                log::debug!("requête {:?} refusée ({:?}): {e}", self.entree, e.genre());
                self.set_erreur(e.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ResetTotal,
}
