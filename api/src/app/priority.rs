//! Priority evaluation
//!
//! Explicit priority > urgency keywords > category default > MEDIUM.

use crate::domain::entities::{PqrCategory, PqrPriority};

/// Urgency keywords, in scan order. The first hit becomes a tag.
pub const URGENCY_KEYWORDS: &[&str] = &[
    "urgente",
    "emergencia",
    "inmediato",
    "peligro",
    "incendio",
    "fuego",
    "humo",
    "inundación",
    "inundacion",
    "fuga de gas",
    "corto circuito",
    "explosión",
];

/// Output of the priority evaluator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityDecision {
    pub priority: PqrPriority,
    /// Urgency keyword that forced `URGENT`, if any
    pub urgency_tag: Option<&'static str>,
}

/// Default priority for a category, `None` when the category is unmapped
pub fn category_default_priority(category: PqrCategory) -> Option<PqrPriority> {
    match category {
        PqrCategory::Security => Some(PqrPriority::High),
        PqrCategory::Maintenance => Some(PqrPriority::Medium),
        PqrCategory::Suggestion => Some(PqrPriority::Low),
        _ => None,
    }
}

/// Evaluate the priority of a ticket. `text` must already be lowercased.
pub fn evaluate_priority(
    text: &str,
    explicit_priority: Option<PqrPriority>,
    category: PqrCategory,
) -> PriorityDecision {
    if let Some(priority) = explicit_priority {
        return PriorityDecision {
            priority,
            urgency_tag: None,
        };
    }

    if let Some(keyword) = URGENCY_KEYWORDS.iter().copied().find(|k| text.contains(k)) {
        return PriorityDecision {
            priority: PqrPriority::Urgent,
            urgency_tag: Some(keyword),
        };
    }

    PriorityDecision {
        priority: category_default_priority(category).unwrap_or(PqrPriority::Medium),
        urgency_tag: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_priority_skips_heuristics() {
        let decision = evaluate_priority(
            "urgente: incendio en el sótano",
            Some(PqrPriority::Low),
            PqrCategory::Security,
        );
        assert_eq!(decision.priority, PqrPriority::Low);
        assert!(decision.urgency_tag.is_none());
    }

    #[test]
    fn urgency_keyword_forces_urgent() {
        let decision = evaluate_priority(
            "urgente: fuga de agua en el baño",
            None,
            PqrCategory::Maintenance,
        );
        assert_eq!(decision.priority, PqrPriority::Urgent);
        assert_eq!(decision.urgency_tag, Some("urgente"));
    }

    #[test]
    fn first_keyword_in_scan_order_is_reported() {
        let decision = evaluate_priority("hay humo y peligro", None, PqrCategory::Other);
        assert_eq!(decision.priority, PqrPriority::Urgent);
        assert_eq!(decision.urgency_tag, Some("peligro"));
    }

    #[test]
    fn category_defaults() {
        let plain = "la cámara no graba";
        assert_eq!(
            evaluate_priority(plain, None, PqrCategory::Security).priority,
            PqrPriority::High
        );
        assert_eq!(
            evaluate_priority(plain, None, PqrCategory::Maintenance).priority,
            PqrPriority::Medium
        );
        assert_eq!(
            evaluate_priority(plain, None, PqrCategory::Suggestion).priority,
            PqrPriority::Low
        );
    }

    #[test]
    fn unmapped_category_is_medium() {
        assert_eq!(category_default_priority(PqrCategory::Financial), None);
        let decision = evaluate_priority("consulta", None, PqrCategory::Financial);
        assert_eq!(decision.priority, PqrPriority::Medium);
        assert!(decision.urgency_tag.is_none());
    }

    #[test]
    fn security_wording_alone_is_not_urgent() {
        let decision = evaluate_priority(
            "problema de seguridad hay una cámara de seguridad que no funciona",
            None,
            PqrCategory::Security,
        );
        assert_eq!(decision.priority, PqrPriority::High);
    }
}
