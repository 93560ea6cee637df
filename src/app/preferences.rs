//! src/app/preferences.rs
//!
//! Préférences cosmétiques (thème + langue).
//! Indépendantes du noyau : rien ici ne lit ni ne modifie le tampon ou l’historique.

use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Clair,
    Sombre,
    Neon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Langue {
    En,
    Fr,
}

/// Table de libellés (une par langue).
#[derive(Debug)]
pub struct Textes {
    pub effacer: &'static str,
    pub calc: &'static str,
    pub exporter: &'static str,
    pub historique: &'static str,
    pub effacer_historique: &'static str,
    pub chiffres: &'static str,
    pub export_ok: &'static str,
    pub export_echec: &'static str,
}

static TEXTES_EN: Textes = Textes {
    effacer: "Clear",
    calc: "Calculator",
    exporter: "Export History",
    historique: "History",
    effacer_historique: "Clear History",
    chiffres: "Digits",
    export_ok: "History exported",
    export_echec: "Export failed",
};

static TEXTES_FR: Textes = Textes {
    effacer: "Effacer",
    calc: "Calculatrice",
    exporter: "Exporter l'Historique",
    historique: "Historique",
    effacer_historique: "Effacer l'Historique",
    chiffres: "Chiffres",
    export_ok: "Historique exporté",
    export_echec: "Échec de l'export",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub langue: Langue,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Clair,
            langue: Langue::En,
        }
    }
}

impl Preferences {
    pub fn textes(&self) -> &'static Textes {
        match self.langue {
            Langue::En => &TEXTES_EN,
            Langue::Fr => &TEXTES_FR,
        }
    }

    pub fn mode_sombre(&self) -> bool {
        self.theme != Theme::Clair
    }

    /// Bouton lune/soleil : clair <-> sombre (le néon repasse en clair).
    pub fn basculer_mode_sombre(&mut self) {
        self.theme = if self.mode_sombre() {
            Theme::Clair
        } else {
            Theme::Sombre
        };
    }

    /// Bouton drapeau : en <-> fr.
    pub fn basculer_langue(&mut self) {
        self.langue = match self.langue {
            Langue::En => Langue::Fr,
            Langue::Fr => Langue::En,
        };
    }

    pub fn visuals(&self) -> egui::Visuals {
        match self.theme {
            Theme::Clair => egui::Visuals::light(),
            Theme::Sombre => egui::Visuals::dark(),
            Theme::Neon => {
                let mut v = egui::Visuals::dark();
                v.panel_fill = egui::Color32::BLACK;
                v.window_fill = egui::Color32::BLACK;
                v.override_text_color = Some(egui::Color32::from_rgb(74, 222, 128));
                v
            }
        }
    }
}
