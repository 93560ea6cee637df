//! Entrées → commandes.
//!
//! Traduction pure (sans egui) des gestes utilisateur en commandes du noyau.
//! La vue et la boucle clavier d’app.rs passent toutes par ici.

use super::jetons::est_symbole;

/// Une commande = au plus une opération de `ExpressionState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Ajouter(char),
    Effacer,
    SupprimerDernier,
    Evaluer,
    EffacerHistorique,
}

/// Touche reçue (clavier physique ou virtuel).
#[derive(Clone, Copy, Debug)]
pub enum Touche<'a> {
    /// Texte saisi (un ou plusieurs caractères).
    Texte(&'a str),
    Entree,
    RetourArriere,
    Echap,
}

/// Commandes produites par une touche.
/// Texte : un `Ajouter` par caractère de l’alphabet, le reste est ignoré.
pub fn commandes_pour_touche(touche: Touche<'_>) -> Vec<Commande> {
    match touche {
        Touche::Texte(t) => t
            .chars()
            .filter(|c| est_symbole(*c))
            .map(Commande::Ajouter)
            .collect(),
        Touche::Entree => vec![Commande::Evaluer],
        Touche::RetourArriere => vec![Commande::SupprimerDernier],
        Touche::Echap => vec![Commande::Effacer],
    }
}
