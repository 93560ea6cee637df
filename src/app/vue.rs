// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Lecture seule du noyau (tampon, phase, Snapshot de l’historique) : les mutations passent par Commande
// - Chaque bouton produit une Commande (même chemin que le clavier)
// - Pavé 4 colonnes : Effacer % ÷ × / 7 8 9 - / 4 5 6 + / 1 2 3 = / 0 . Exporter
// - Historique défilant + "Effacer l'Historique"

use eframe::egui;

use crate::noyau::{Commande, HistoryEntry, Phase, DIGITS_MAX};

use super::etat::{AppCalc, StatutExport};
use super::preferences::{Langue, Theme};

const TAILLE_TOUCHE: [f32; 2] = [72.0, 40.0];
const HAUTEUR_HISTORIQUE: f32 = 160.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_preferences(ui);
                ui.add_space(6.0);

                self.ui_ecran(ui);
                ui.add_space(6.0);

                ui.vertical_centered(|ui| {
                    ui.heading(self.preferences.textes().calc);
                });
                ui.add_space(6.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_preferences(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let lune = if self.preferences.mode_sombre() {
                "🌞"
            } else {
                "🌙"
            };
            if clic(ui.button(lune)) {
                self.preferences.basculer_mode_sombre();
            }

            let mut neon = self.preferences.theme == Theme::Neon;
            let resp = ui.toggle_value(&mut neon, "Neon");
            if resp.changed() {
                resp.surrender_focus();
                self.preferences.theme = if neon { Theme::Neon } else { Theme::Sombre };
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let drapeau = match self.preferences.langue {
                    Langue::En => "FR",
                    Langue::Fr => "EN",
                };
                if clic(ui.button(drapeau)) {
                    self.preferences.basculer_langue();
                }

                let mut d = self.calcul.digits() as u32;
                let resp = ui.add(
                    egui::DragValue::new(&mut d)
                        .speed(1)
                        .range(0..=DIGITS_MAX as u32),
                );
                if resp.changed() {
                    self.calcul.set_digits(d as usize);
                }
                ui.label(self.preferences.textes().chiffres);
            });
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let buffer = self.calcul.buffer();
        let (texte, couleur) = match self.calcul.phase() {
            Phase::Vide => ("0", ui.visuals().weak_text_color()),
            Phase::Erreur => (buffer, ui.visuals().error_fg_color),
            Phase::Saisie | Phase::Resultat => (buffer, ui.visuals().strong_text_color()),
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(texte).size(24.0).monospace().color(couleur));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let t = self.preferences.textes();

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, t.effacer, Bouton::Commande(Commande::Effacer));
                self.bouton(ui, "%", Bouton::Symbole('%'));
                self.bouton(ui, "÷", Bouton::Symbole('/'));
                self.bouton(ui, "×", Bouton::Symbole('*'));
                ui.end_row();

                for rangee in [['7', '8', '9', '-'], ['4', '5', '6', '+']] {
                    for c in rangee {
                        self.bouton(ui, &c.to_string(), Bouton::Symbole(c));
                    }
                    ui.end_row();
                }

                for c in ['1', '2', '3'] {
                    self.bouton(ui, &c.to_string(), Bouton::Symbole(c));
                }
                self.bouton(ui, "=", Bouton::Commande(Commande::Evaluer));
                ui.end_row();

                self.bouton(ui, "0", Bouton::Symbole('0'));
                self.bouton(ui, ".", Bouton::Symbole('.'));
                self.bouton(ui, t.exporter, Bouton::Exporter);
                ui.end_row();
            });

        if let Some(statut) = &self.statut_export {
            let (msg, couleur) = match statut {
                StatutExport::Ok(dest) => (format!("{} : {dest}", t.export_ok), None),
                StatutExport::Echec(e) => (
                    format!("{} : {e}", t.export_echec),
                    Some(ui.visuals().error_fg_color),
                ),
            };
            ui.add_space(4.0);
            match couleur {
                Some(c) => ui.colored_label(c, msg),
                None => ui.small(msg),
            };
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let t = self.preferences.textes();
        let instantane = self.calcul.snapshot();

        ui.label(egui::RichText::new(t.historique).strong());

        egui::ScrollArea::vertical()
            .id_salt("historique")
            .max_height(HAUTEUR_HISTORIQUE)
            .auto_shrink([false, true])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for entree in instantane.history.iter() {
                    Self::ligne_historique(ui, entree);
                }
            });

        ui.add_space(6.0);
        let resp = ui.add_sized(
            [ui.available_width(), 32.0],
            egui::Button::new(t.effacer_historique),
        );
        if clic(resp) {
            self.appliquer(Commande::EffacerHistorique);
        }
    }

    fn ligne_historique(ui: &mut egui::Ui, entree: &HistoryEntry) {
        ui.monospace(format!("{} = {}", entree.expression(), entree.result()));
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, bouton: Bouton) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
        if !clic(resp) {
            return;
        }

        match bouton {
            Bouton::Symbole(c) => self.appliquer(Commande::Ajouter(c)),
            Bouton::Commande(cmd) => self.appliquer(cmd),
            Bouton::Exporter => self.exporter_historique(),
        }
    }
}

/// Clic sur un bouton, qui rend le focus aussitôt :
/// Enter est réservé à "=" (clavier global), aucun bouton focalisé ne doit se re-cliquer.
fn clic(resp: egui::Response) -> bool {
    let clique = resp.clicked();
    if clique {
        resp.surrender_focus();
    }
    clique
}

#[derive(Clone, Copy, Debug)]
enum Bouton {
    Symbole(char),
    Commande(Commande),
    Exporter,
}
