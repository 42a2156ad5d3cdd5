//! Prompt construction for structure proposals.

use crate::models::catalog::{CATALOG, CLOSING_TYPE, EXCLUDED_TYPE};
use crate::models::templates;

/// Inclusive bounds on the number of proposed sections
pub const MIN_SECTIONS: usize = 7;
pub const MAX_SECTIONS: usize = 9;

/// Note text required for the reassurance section
pub const REASSURANCE_NOTE: &str = "Éléments de réassurance avec les chiffres clés x4";

const STYLE_EXAMPLE: &str = "STRATE 1 : Nos formations\n\
Encarts administrables\n\
Affichage x3\n\
\n\
STRATE 2 : Présentation\n\
Gauche : Titre + description\n\
Droite : Photo simple x1";

/// Available sections as pretty JSON (type, label, isUnique, options)
pub fn catalog_json() -> String {
    serde_json::to_string_pretty(CATALOG).unwrap_or_else(|_| "[]".to_string())
}

/// Note templates as pretty JSON
pub fn templates_json() -> String {
    serde_json::to_string_pretty(&templates::TemplateStore).unwrap_or_else(|_| "{}".to_string())
}

/// Build the full prompt sent to the generator
pub fn build_prompt(description: &str, context_json: Option<&str>) -> String {
    let additional_context = match context_json {
        Some(json) => format!(
            "CONTEXTE ADDITIONNEL : Voici des données extraites du site web actuel. \
             Utilise-les pour mieux comprendre le métier.\n\
             Données JSON :\n{json}\n"
        ),
        None => String::new(),
    };

    format!(
        "Vous êtes un architecte de l'information créant un brief technique pour un graphiste.\n\
         Votre mission est de créer la structure d'une page d'accueil et les notes techniques associées.\n\
         Les notes doivent être BRÈVES, TECHNIQUES, et CONCISES. NE PAS rédiger de contenu marketing, \
         de slogans ou de descriptions. Le graphiste a seulement besoin de la structure.\n\
         \n\
         Voici un exemple du style EXACT attendu pour les notes :\n\
         \"{STYLE_EXAMPLE}\"\n\
         \n\
         DESCRIPTION DE L'ACTIVITÉ :\n\
         \"{description}\"\n\
         \n\
         {additional_context}\n\
         SECTIONS DISPONIBLES :\n\
         {catalog}\n\
         \n\
         TEMPLATES DE NOTES (base de travail) :\n\
         {templates}\n\
         \n\
         Générez la structure en respectant IMPÉRATIVEMENT les règles suivantes :\n\
         1. Format : Un tableau JSON d'objets.\n\
         2. Propriétés de l'objet : \"type\", \"label\", \"subtype\", \"noteContent\".\n\
         3. \"label\": Un titre descriptif et COURT (ex: \"Nos réalisations\", \"Présentation de l'équipe\").\n\
         4. \"subtype\": Une valeur valide des 'options' de la section, ou null.\n\
         5. \"noteContent\": Le brief technique pour le graphiste. Doit être extrêmement concis.\n\
            - Utilisez les templates comme base.\n\
            - Adaptez-les au contexte (ex: changez \"Encart x…\" en \"Encart x3\" si pertinent).\n\
            - Restez purement structurel (ex: \"Gauche : Photo\", \"Droite : Titre + Texte\").\n\
         6. Règle spéciale pour \"reassurance\": Le \"noteContent\" DOIT être \"{REASSURANCE_NOTE}\". \
         NE PAS inventer de chiffres.\n\
         7. La section \"{closing}\" doit être en DERNIÈRE position si utilisée.\n\
         8. Nombre total de sections : entre {MIN_SECTIONS} et {MAX_SECTIONS}.\n\
         9. N'incluez PAS de section de type '{excluded}'.\n",
        description = description.trim(),
        catalog = catalog_json(),
        templates = templates_json(),
        closing = CLOSING_TYPE,
        excluded = EXCLUDED_TYPE,
    )
}
