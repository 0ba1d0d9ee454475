//! Multilingual trigger-term lexicons for the heuristic classifier.
//!
//! Each language contributes two disjoint sets of trigger terms. The tables
//! are fixed configuration: loaded once, never mutated at runtime. Matching
//! is plain substring containment, so short terms will also fire inside
//! longer unrelated words; that imprecision is part of the contract.

/// Trigger terms for a single language.
pub struct Lexicon {
    /// BCP-47-ish language tag, informational only.
    pub language: &'static str,
    /// Terms that count toward a positive classification.
    pub positive: &'static [&'static str],
    /// Terms that count toward a negative classification.
    pub negative: &'static [&'static str],
}

const POSITIVE_EN: &[&str] = &[
    "good", "great", "excellent", "amazing", "love", "happy", "wonderful", "fantastic", "best",
    "awesome", "brilliant", "outstanding", "perfect", "enjoy", "pleased", "delighted", "glad",
    "satisfied", "impressive",
];

const NEGATIVE_EN: &[&str] = &[
    "bad", "terrible", "horrible", "hate", "awful", "worst", "poor", "disappointed", "unhappy",
    "sad", "annoying", "frustrating", "useless", "waste", "dislike", "failure", "problem",
    "difficult", "complaint",
];

const POSITIVE_ES: &[&str] = &[
    "bueno", "buena", "genial", "excelente", "increíble", "encanta", "feliz", "maravilloso",
    "fantástico", "perfecto", "contento", "satisfecho", "impresionante",
];

const NEGATIVE_ES: &[&str] = &[
    "malo", "mala", "pésimo", "odio", "espantoso", "decepcionado", "triste", "molesto",
    "frustrante", "inútil", "fracaso", "queja",
];

const POSITIVE_FR: &[&str] = &[
    "bon", "bonne", "super", "génial", "incroyable", "adore", "magnifique", "heureux",
    "merveilleux", "parfait", "content", "satisfait", "impressionnant",
];

const NEGATIVE_FR: &[&str] = &[
    "mauvais", "mauvaise", "affreux", "déteste", "épouvantable", "pire", "déçu", "agaçant",
    "frustrant", "inutile", "nul", "problème", "plainte",
];

const POSITIVE_DE: &[&str] = &[
    "gut", "großartig", "ausgezeichnet", "erstaunlich", "liebe", "glücklich", "wunderbar",
    "fantastisch", "perfekt", "zufrieden", "beeindruckend", "toll",
];

const NEGATIVE_DE: &[&str] = &[
    "schlecht", "schrecklich", "furchtbar", "hasse", "enttäuscht", "traurig", "nervig",
    "frustrierend", "nutzlos", "ärgerlich", "beschwerde", "mies",
];

const POSITIVE_PT: &[&str] = &[
    "ótimo", "ótima", "adorei", "incrível", "maravilhoso", "perfeito", "gostei", "amei",
    "sensacional",
];

const NEGATIVE_PT: &[&str] = &[
    "péssimo", "péssima", "horrível", "odeio", "ruim", "decepcionante", "chato", "irritante",
    "lixo", "reclamação",
];

/// Every configured lexicon, in the order the classifier scans them.
pub const LEXICONS: &[Lexicon] = &[
    Lexicon {
        language: "en",
        positive: POSITIVE_EN,
        negative: NEGATIVE_EN,
    },
    Lexicon {
        language: "es",
        positive: POSITIVE_ES,
        negative: NEGATIVE_ES,
    },
    Lexicon {
        language: "fr",
        positive: POSITIVE_FR,
        negative: NEGATIVE_FR,
    },
    Lexicon {
        language: "de",
        positive: POSITIVE_DE,
        negative: NEGATIVE_DE,
    },
    Lexicon {
        language: "pt",
        positive: POSITIVE_PT,
        negative: NEGATIVE_PT,
    },
];
