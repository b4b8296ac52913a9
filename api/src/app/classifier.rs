//! Keyword classifier
//!
//! Derives category and subcategory from ticket text. Categories are scanned in
//! `CATEGORY_TABLE` order and the first one with any keyword hit wins; there is
//! no scoring.

use crate::domain::entities::{PqrCategory, TagSet};

/// A subcategory and the keywords that select it
pub struct SubcategoryKeywords {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

/// Keywords for one category, in precedence order
pub struct CategoryKeywords {
    pub category: PqrCategory,
    /// Keywords that select the category without implying a subcategory
    pub keywords: &'static [&'static str],
    pub subcategories: &'static [SubcategoryKeywords],
}

/// Precedence: SECURITY, MAINTENANCE, FINANCIAL, ADMINISTRATIVE, COMMUNITY,
/// SERVICES, SUGGESTION, COMPLAINT. Anything else is OTHER.
pub const CATEGORY_TABLE: &[CategoryKeywords] = &[
    CategoryKeywords {
        category: PqrCategory::Security,
        keywords: &["seguridad", "sospechoso", "sospechosa", "amenaza"],
        subcategories: &[
            SubcategoryKeywords {
                label: "Videovigilancia",
                keywords: &["cámara", "camara", "cctv", "video"],
            },
            SubcategoryKeywords {
                label: "Alarmas",
                keywords: &["alarma", "sensor"],
            },
            SubcategoryKeywords {
                label: "Incidentes",
                keywords: &["robo", "hurto", "intrusión", "intrusion", "intruso"],
            },
            SubcategoryKeywords {
                label: "Personal",
                keywords: &["vigilante", "vigilancia", "guardia", "portero"],
            },
        ],
    },
    CategoryKeywords {
        category: PqrCategory::Maintenance,
        keywords: &[
            "mantenimiento",
            "reparar",
            "reparación",
            "reparacion",
            "arreglar",
            "arreglo",
            "dañado",
            "dañada",
            "daño",
        ],
        subcategories: &[
            SubcategoryKeywords {
                label: "Plomería",
                keywords: &[
                    "fuga", "gotera", "goteo", "humedad", "inunda", "tubería", "tuberia", "baño",
                    "agua",
                ],
            },
            SubcategoryKeywords {
                label: "Eléctrico",
                keywords: &[
                    "luz",
                    "luces",
                    "iluminación",
                    "iluminacion",
                    "eléctric",
                    "electric",
                    "bombillo",
                    "enchufe",
                    "corto circuito",
                    "apagón",
                    "apagon",
                ],
            },
            SubcategoryKeywords {
                label: "Ascensores",
                keywords: &["ascensor", "elevador"],
            },
            SubcategoryKeywords {
                label: "Cerrajería",
                keywords: &["puerta", "cerradura", "llave", "chapa"],
            },
            SubcategoryKeywords {
                label: "Estructural",
                keywords: &["pared", "muro", "grieta", "fisura", "pintura"],
            },
        ],
    },
    CategoryKeywords {
        category: PqrCategory::Financial,
        keywords: &["financiero", "financiera", "estado de cuenta"],
        subcategories: &[
            SubcategoryKeywords {
                label: "Pagos",
                keywords: &["pago", "pagar", "transferencia", "cuota"],
            },
            SubcategoryKeywords {
                label: "Facturación",
                keywords: &["factura", "recibo", "cobro", "descuento"],
            },
            SubcategoryKeywords {
                label: "Cartera",
                keywords: &["en mora", "morosidad", "intereses", "deuda"],
            },
        ],
    },
    CategoryKeywords {
        category: PqrCategory::Administrative,
        keywords: &["administración", "administracion", "trámite", "tramite"],
        subcategories: &[
            SubcategoryKeywords {
                label: "Documentos",
                keywords: &["documento", "certificado", "certificación", "paz y salvo"],
            },
            SubcategoryKeywords {
                label: "Contratos",
                keywords: &["contrato", "arrendamiento"],
            },
            SubcategoryKeywords {
                label: "Reglamento",
                keywords: &["reglamento", "estatuto"],
            },
        ],
    },
    CategoryKeywords {
        category: PqrCategory::Community,
        keywords: &["comunidad"],
        subcategories: &[
            SubcategoryKeywords {
                label: "Ruido",
                keywords: &["ruido", "música", "musica", "fiesta", "escándalo"],
            },
            SubcategoryKeywords {
                label: "Mascotas",
                keywords: &["mascota", "perro", "gato", "excremento"],
            },
            SubcategoryKeywords {
                label: "Basuras",
                keywords: &["basura", "reciclaje", "residuos"],
            },
            SubcategoryKeywords {
                label: "Convivencia",
                keywords: &["vecino", "convivencia", "pelea", "discusión"],
            },
        ],
    },
    CategoryKeywords {
        category: PqrCategory::Services,
        keywords: &["servicio"],
        subcategories: &[
            SubcategoryKeywords {
                label: "Internet",
                keywords: &["internet", "wifi"],
            },
            SubcategoryKeywords {
                label: "Gimnasio",
                keywords: &["gimnasio", "gym"],
            },
            SubcategoryKeywords {
                label: "Piscina",
                keywords: &["piscina", "alberca", "jacuzzi"],
            },
            SubcategoryKeywords {
                label: "Salón comunal",
                keywords: &["salón", "salon", "evento"],
            },
            SubcategoryKeywords {
                label: "Zonas infantiles",
                keywords: &["parque", "juegos", "infantil"],
            },
        ],
    },
    CategoryKeywords {
        category: PqrCategory::Suggestion,
        keywords: &[
            "sugerencia",
            "sugiero",
            "propuesta",
            "propongo",
            "mejorar",
            "recomiendo",
            "recomendación",
        ],
        subcategories: &[],
    },
    CategoryKeywords {
        category: PqrCategory::Complaint,
        keywords: &[
            "queja",
            "reclamo",
            "inconforme",
            "inconformidad",
            "molesto",
            "molestia",
            "insatisfecho",
        ],
        subcategories: &[],
    },
];

/// Output of the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: PqrCategory,
    pub subcategory: Option<String>,
    pub tags: TagSet,
}

impl Classification {
    fn bare(category: PqrCategory) -> Self {
        Self {
            category,
            subcategory: None,
            tags: TagSet::new(),
        }
    }
}

fn hits(text: &str, keywords: &[&'static str]) -> Vec<&'static str> {
    keywords
        .iter()
        .copied()
        .filter(|k| text.contains(k))
        .collect()
}

/// Classify a ticket.
///
/// `text` must already be lowercased (see `TicketSubmission::searchable_text`).
/// An explicit category always wins and produces no subcategory and no tags.
pub fn classify(
    text: &str,
    explicit_category: Option<PqrCategory>,
    auto_categorize_enabled: bool,
) -> Classification {
    if let Some(category) = explicit_category {
        return Classification::bare(category);
    }
    if !auto_categorize_enabled {
        return Classification::bare(PqrCategory::Other);
    }

    for entry in CATEGORY_TABLE {
        let mut tags = TagSet::new();
        tags.extend(hits(text, entry.keywords));

        let mut subcategory = None;
        for sub in entry.subcategories {
            let matched = hits(text, sub.keywords);
            if matched.is_empty() {
                continue;
            }
            if subcategory.is_none() {
                subcategory = Some(sub.label);
            }
            tags.extend(matched);
        }

        if tags.is_empty() {
            continue;
        }

        if let Some(label) = subcategory {
            tags.insert(label);
        }

        return Classification {
            category: entry.category,
            subcategory: subcategory.map(str::to_string),
            tags,
        };
    }

    Classification::bare(PqrCategory::Other)
}
