// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs, vue.rs, preferences.rs, export.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier : un seul abonnement pour toute la vie de l’app.
// Chaque frame, on lit les événements et on les applique à l’état courant, dans l’ordre.
// Si un widget texte a le focus (champ de précision…), le clavier lui appartient.

pub mod etat;
pub mod export;
pub mod preferences;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::{commandes_pour_touche, Commande, Touche};

/// Événements clavier de la frame -> commandes du noyau (ordre conservé).
/// `occupe` : un widget de saisie a le focus, rien n’est routé vers le tampon.
fn commandes_clavier(input: &egui::InputState, occupe: bool) -> Vec<Commande> {
    let mut out = Vec::new();
    if occupe {
        return out;
    }

    for ev in &input.events {
        let touche = match ev {
            egui::Event::Text(t) => Touche::Texte(t),
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => Touche::Entree,
                egui::Key::Backspace => Touche::RetourArriere,
                egui::Key::Escape => Touche::Echap,
                _ => continue,
            },
            _ => continue,
        };
        out.extend(commandes_pour_touche(touche));
    }

    out
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.preferences.visuals());

        let occupe = ctx.wants_keyboard_input();
        for commande in ctx.input(|i| commandes_clavier(i, occupe)) {
            self.appliquer(commande);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
