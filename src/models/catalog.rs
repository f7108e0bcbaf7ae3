//! Fixed option lists offered by the search and publish screens.
//!
//! Labels are kept verbatim in French because they are stored as-is in the
//! backend and matched against provider records by exact string comparison.

/// Profile type identifiers selectable in the search filters.
pub const PROFILE_TYPES: [&str; 4] = ["employee", "employer", "service_provider", "agency"];

/// Job/service categories.
pub const JOB_CATEGORIES: [&str; 8] = [
    "Bâtiment, électricité, plomberie",
    "Informatique / digital",
    "Nettoyage",
    "Coiffure / Esthétique",
    "Transport / Livraison",
    "Santé",
    "Garde d'enfants / Assistance à domicile",
    "Autres",
];

/// Multi-select availability options.
pub const AVAILABILITY_OPTIONS: [&str; 5] = [
    "Disponible maintenant",
    "Disponible aujourd'hui",
    "Libre les week-ends",
    "À plein temps",
    "À temps partiel",
];

/// Experience levels, ordered from least to most experienced.
pub const EXPERIENCE_LEVELS: [&str; 4] = ["0 à 1 an", "1 à 3 ans", "3 à 5 ans", "5 ans et plus"];

/// Spoken languages, multi-select.
pub const LANGUAGES: [&str; 5] = ["Français", "Anglais", "Lingala", "Swahili", "Tshiluba"];

/// Publication type identifiers for the publish form.
pub const PUBLICATION_TYPES: [&str; 3] = ["job_offer", "service_offer", "job_request"];
