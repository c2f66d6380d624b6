// src/vocabulary/defaults.rs
//! Built-in Spanish cooking vocabulary.

/// Canonical ingredient names.
pub const DEFAULT_TERMS: &[&str] = &[
    "ajo", "cebolla", "pimiento", "tomate", "patata", "berenjena", "calabacín", "pepino",
    "zanahoria", "espinacas", "alcachofa", "judías verdes", "guisantes", "setas",
    "champiñones", "garbanzos", "cebollino", "puerro", "maíz", "aguacate", "aceitunas",
    "aceitunas rellenas", "limón", "naranja", "lima", "melon", "sandía", "piña",
    "ciruelas pasas", "higos secos", "orejones", "piñones", "sal", "pimienta", "pimentón",
    "comino", "nuez moscada", "clavo", "canela", "azafrán", "tomillo", "romero", "orégano",
    "laurel", "perejil", "albahaca", "aceite", "vinagre", "agua", "harina", "arroz", "pasta",
    "pan", "azúcar", "miel", "chocolate", "almendras", "nueces", "avellanas", "galletas",
    "hojaldre", "ketchup", "mayonesa", "huevo", "leche", "nata", "yogur", "mantequilla",
    "queso", "vino", "pollo", "conejo", "cerdo", "chorizo", "jamón", "atún en conserva",
    "anchoas", "salmón", "bacalao", "gambas", "langostinos", "sepia", "pulpo", "vieiras",
    "mejillones", "almejas", "langosta", "marisco", "esparragos",
];

/// Surface forms that collapse onto a canonical term.
pub const DEFAULT_SYNONYMS: &[(&str, &str)] = &[
    ("ajo en polvo", "ajo"),
    ("cebolla en polvo", "cebolla"),
    ("vino blanco", "vino"),
    ("vino tinto", "vino"),
    ("vino de jerez", "vino"),
    ("queso manchego", "queso"),
    ("queso cabra", "queso"),
    ("queso azul", "queso"),
];
