//! Plain-text checklist for printing

use std::fmt::Write;

use crate::model::{ConsolidatedIngredient, QuantityEntry};

const EMPTY_LIST_TEXT: &str = "Your shopping list is empty.";

/// Render consolidated rows as a printable checklist
///
/// ```text
/// [ ] Garlic
///     - 2 cloves (from Aglio e Olio)
///     - 1 tsp (from Garlic Bread)
///     notes: crushed
/// ```
pub fn render_checklist(items: &[ConsolidatedIngredient]) -> String {
    if items.is_empty() {
        return format!("{}\n", EMPTY_LIST_TEXT);
    }

    let mut out = String::new();
    for item in items {
        // Writing into a String cannot fail
        let _ = writeln!(out, "[ ] {}", item.name);
        for quantity in &item.quantities {
            let _ = writeln!(out, "    - {} (from {})", amount_text(quantity), quantity.from);
        }
        if !item.notes.is_empty() {
            let _ = writeln!(out, "    notes: {}", item.notes.join(", "));
        }
    }
    out
}

fn amount_text(quantity: &QuantityEntry) -> String {
    match (quantity.quantity.is_empty(), quantity.unit.is_empty()) {
        (true, true) => "as needed".to_string(),
        (false, true) => quantity.quantity.clone(),
        (true, false) => quantity.unit.clone(),
        (false, false) => format!("{} {}", quantity.quantity, quantity.unit),
    }
}
