//! Quantity rules for cart line items.

/// Largest quantity the `INTEGER` column can hold.
pub const MAX_QUANTITY: u32 = 2_147_483_647;

/// Quantity stored when a line item is first added: at least one, saturating at
/// [`MAX_QUANTITY`].
pub(crate) fn initial_quantity(requested: i64) -> u32 {
    u32::try_from(requested.clamp(1, i64::from(MAX_QUANTITY))).unwrap_or(MAX_QUANTITY)
}

/// The positive quantity to store for an update, or `None` when the request
/// means "remove this line item".
pub(crate) fn positive_quantity(requested: i64) -> Option<u32> {
    if requested <= 0 {
        return None;
    }

    Some(u32::try_from(requested.min(i64::from(MAX_QUANTITY))).unwrap_or(MAX_QUANTITY))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CappedQuantity {
    pub(crate) quantity: u32,
    pub(crate) clamped: bool,
}

/// Cap a requested quantity to current stock.
///
/// Unknown or zero stock leaves the request untouched.
pub(crate) fn cap_to_stock(requested: u32, stock: Option<u32>) -> CappedQuantity {
    match stock {
        Some(stock) if stock > 0 && requested > stock => CappedQuantity {
            quantity: stock,
            clamped: true,
        },
        Some(_) | None => CappedQuantity {
            quantity: requested,
            clamped: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_quantity_floors_non_positive_requests_to_one() {
        assert_eq!(initial_quantity(0), 1);
        assert_eq!(initial_quantity(-5), 1);
        assert_eq!(initial_quantity(i64::MIN), 1);
    }

    #[test]
    fn initial_quantity_keeps_positive_requests() {
        assert_eq!(initial_quantity(1), 1);
        assert_eq!(initial_quantity(7), 7);
    }

    #[test]
    fn initial_quantity_saturates_at_column_limit() {
        assert_eq!(initial_quantity(i64::MAX), MAX_QUANTITY);
    }

    #[test]
    fn positive_quantity_is_none_for_removal_requests() {
        assert_eq!(positive_quantity(0), None);
        assert_eq!(positive_quantity(-1), None);
    }

    #[test]
    fn positive_quantity_passes_through_and_saturates() {
        assert_eq!(positive_quantity(3), Some(3));
        assert_eq!(positive_quantity(i64::MAX), Some(MAX_QUANTITY));
    }

    #[test]
    fn cap_to_stock_clamps_requests_above_stock() {
        assert_eq!(
            cap_to_stock(10, Some(3)),
            CappedQuantity {
                quantity: 3,
                clamped: true
            }
        );
    }

    #[test]
    fn cap_to_stock_leaves_requests_within_stock() {
        assert_eq!(
            cap_to_stock(3, Some(3)),
            CappedQuantity {
                quantity: 3,
                clamped: false
            }
        );
        assert_eq!(
            cap_to_stock(2, Some(3)),
            CappedQuantity {
                quantity: 2,
                clamped: false
            }
        );
    }

    #[test]
    fn cap_to_stock_ignores_unknown_or_empty_stock() {
        assert_eq!(
            cap_to_stock(10, None),
            CappedQuantity {
                quantity: 10,
                clamped: false
            }
        );
        assert_eq!(
            cap_to_stock(10, Some(0)),
            CappedQuantity {
                quantity: 10,
                clamped: false
            }
        );
    }
}
