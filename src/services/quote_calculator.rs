//! Cálculo de totales de presupuesto
//!
//! Funciones puras. El total de una línea es siempre cantidad × precio
//! unitario y el del presupuesto la suma de sus líneas.

use rust_decimal::Decimal;

use crate::models::quote::{LineItemInput, QuoteLineItem};

/// Total de una línea. Satura en `Decimal::MAX`; los DTOs acotan cantidad
/// y precio para que no se llegue ahí desde la API.
pub fn line_item_total(quantity: u32, unit_price: Decimal) -> Decimal {
    Decimal::from(quantity).saturating_mul(unit_price)
}

/// Total del presupuesto
pub fn quote_total(items: &[QuoteLineItem]) -> Decimal {
    items.iter().fold(Decimal::ZERO, |sum, item| {
        sum.saturating_add(line_item_total(item.quantity, item.unit_price))
    })
}

/// Convierte las líneas de entrada calculando sus totales.
/// Las líneas sin id reciben `s<posición>`.
pub fn build_line_items(inputs: Vec<LineItemInput>) -> Vec<QuoteLineItem> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| QuoteLineItem {
            id: input
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| format!("s{}", index + 1)),
            total: line_item_total(input.quantity, input.unit_price),
            description: input.description,
            quantity: input.quantity,
            unit_price: input.unit_price,
        })
        .collect()
}

/// Descarta líneas con descripción en blanco, como hace el formulario
pub fn retain_described_items(inputs: Vec<LineItemInput>) -> Vec<LineItemInput> {
    inputs
        .into_iter()
        .filter(|item| !item.description.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(quantity: u32, cents: i64) -> LineItemInput {
        LineItemInput {
            id: None,
            description: "Mão de obra".to_string(),
            quantity,
            unit_price: Decimal::new(cents, 2),
        }
    }

    #[test]
    fn test_line_item_total() {
        assert_eq!(line_item_total(2, Decimal::new(12000, 2)), Decimal::from(240));
        assert_eq!(line_item_total(1, Decimal::new(2550, 2)), Decimal::new(2550, 2));
    }

    #[test]
    fn test_quote_total_from_two_items() {
        let items = build_line_items(vec![input(2, 5000), input(1, 3000)]);
        assert_eq!(items[0].total, Decimal::from(100));
        assert_eq!(quote_total(&items), Decimal::new(1300, 1));
    }

    #[test]
    fn test_quote_total_ignores_stale_item_totals() {
        let mut items = build_line_items(vec![input(1, 4500)]);
        items[0].total = Decimal::from(999);
        assert_eq!(quote_total(&items), Decimal::new(4500, 2));
    }

    #[test]
    fn test_build_line_items_assigns_missing_ids() {
        let mut first = input(1, 100);
        first.id = Some("custom".to_string());
        let items = build_line_items(vec![first, input(1, 100)]);
        assert_eq!(items[0].id, "custom");
        assert_eq!(items[1].id, "s2");
    }

    #[test]
    fn test_retain_described_items() {
        let mut blank = input(1, 100);
        blank.description = "  ".to_string();
        let kept = retain_described_items(vec![blank, input(1, 100)]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_huge_values_saturate_instead_of_panicking() {
        let huge = Decimal::from_str_exact("100000000000000000000").unwrap();
        assert_eq!(line_item_total(4_000_000_000, huge), Decimal::MAX);

        let items = build_line_items(vec![
            LineItemInput {
                id: None,
                description: "Peça".to_string(),
                quantity: u32::MAX,
                unit_price: huge,
            },
            input(1, 100),
        ]);
        assert_eq!(quote_total(&items), Decimal::MAX);
    }

    #[test]
    fn test_empty_quote_total_is_zero() {
        assert_eq!(quote_total(&[]), Decimal::ZERO);
    }
}
