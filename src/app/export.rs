// src/app/export.rs
//
// Export de l’historique — écriture selon la plateforme
// -----------------------------------------------------
// - NATIF : fichier dans le répertoire courant
// - WEB   : Blob + <a download> temporaire (téléchargement navigateur)
//
// La sérialisation (JSON) vit dans le noyau : ici, seulement les octets -> destination.

use crate::noyau::ExportError;

/* ------------------------ NATIF ------------------------ */

/// Écrit `octets` dans `nom` ; renvoie le chemin écrit.
#[cfg(not(target_arch = "wasm32"))]
pub fn telecharger(octets: &[u8], nom: &str) -> Result<String, ExportError> {
    let chemin = std::env::current_dir()?.join(nom);
    std::fs::write(&chemin, octets)?;
    Ok(chemin.display().to_string())
}

/* ------------------------ WEB (WASM) ------------------------ */

/// Déclenche le téléchargement de `octets` sous le nom `nom`.
#[cfg(target_arch = "wasm32")]
pub fn telecharger(octets: &[u8], nom: &str) -> Result<String, ExportError> {
    use wasm_bindgen::JsCast;
    use web_sys::{window, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let w = window().ok_or_else(|| js_err("window() indisponible"))?;
    let d = w
        .document()
        .ok_or_else(|| js_err("document() indisponible"))?;

    // Blob text/plain (une seule part : les octets JSON)
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(octets));
    let opts = BlobPropertyBag::new();
    opts.set_type("text/plain");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts).map_err(js_val)?;

    let url = Url::create_object_url_with_blob(&blob).map_err(js_val)?;

    let lien: HtmlAnchorElement = d
        .create_element("a")
        .map_err(js_val)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| js_err("l’élément créé n’est pas un <a>"))?;
    lien.set_href(&url);
    lien.set_download(nom);
    lien.click();

    Url::revoke_object_url(&url).map_err(js_val)?;
    Ok(nom.to_string())
}

#[cfg(target_arch = "wasm32")]
fn js_err(msg: &str) -> ExportError {
    ExportError::Navigateur(msg.to_string())
}

#[cfg(target_arch = "wasm32")]
fn js_val(v: wasm_bindgen::JsValue) -> ExportError {
    ExportError::Navigateur(format!("{v:?}"))
}
