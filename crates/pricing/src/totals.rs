use serde::{Deserialize, Serialize};

use tidewater_cart::Cart;

/// Tax rate applied to the desktop total, in percent.
pub const TAX_RATE_PCT: u64 = 8;

/// Gratuity rate applied to the mobile total, in percent.
pub const GRATUITY_RATE_PCT: u64 = 15;

/// Totals bundle derived from one cart snapshot.
///
/// The desktop summary presents `subtotal + tax`, the mobile summary
/// presents `subtotal + gratuity`. Those are two different business rules
/// over the same cart and the duality is kept as observed behavior; see
/// DESIGN.md for the open product question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of extended prices across all lines.
    pub subtotal: u64,
    /// 8% of the subtotal, rounded to the nearest whole unit.
    pub tax: u64,
    /// 15% of the subtotal, rounded to the nearest whole unit. Independent
    /// of `tax`, never added to it.
    pub gratuity: u64,
    /// Desktop total: subtotal plus tax.
    pub total: u64,
    /// Mobile total: subtotal plus gratuity.
    pub mobile_total: u64,
    /// Sum of line quantities, used for badge counts.
    pub item_count: u32,
}

impl Totals {
    /// Compute all derived figures for a cart snapshot. Pure and
    /// deterministic; an empty cart yields all zeros.
    pub fn compute(cart: &Cart) -> Self {
        let subtotal: u64 = cart.lines().iter().map(|line| line.extended_price()).sum();
        let tax = rate_of(subtotal, TAX_RATE_PCT);
        let gratuity = rate_of(subtotal, GRATUITY_RATE_PCT);
        let item_count: u32 = cart.lines().iter().map(|line| line.quantity).sum();

        Self {
            subtotal,
            tax,
            gratuity,
            total: subtotal + tax,
            mobile_total: subtotal + gratuity,
            item_count,
        }
    }
}

/// Percentage of an amount, rounded half-up.
///
/// Amounts are non-negative, so half-up coincides with the
/// half-away-from-zero rounding of the summary displays.
fn rate_of(amount: u64, rate_pct: u64) -> u64 {
    (amount * rate_pct + 50) / 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tidewater_cart::CartLine;
    use tidewater_catalog::{Category, MenuItem};
    use tidewater_core::ItemId;

    fn test_item(id: u32, price: u64) -> MenuItem {
        MenuItem {
            id: ItemId::new(id).unwrap(),
            name: format!("item {id}"),
            description: String::new(),
            price,
            category: Category::Mains,
            category_display: String::new(),
            image: String::new(),
        }
    }

    fn cart_of(entries: &[(u32, u64, u32)]) -> Cart {
        let mut cart = Cart::new();
        for &(id, price, quantity) in entries {
            let item = test_item(id, price);
            for _ in 0..quantity {
                cart.add(&item);
            }
        }
        cart
    }

    #[test]
    fn worked_example_from_the_summary_panels() {
        // 32x1 + 18x2: subtotal 68, tax 5, total 73, gratuity 10,
        // mobile total 78, three units in the cart.
        let cart = cart_of(&[(1, 32, 1), (2, 18, 2)]);
        let totals = Totals::compute(&cart);

        assert_eq!(totals.subtotal, 68);
        assert_eq!(totals.tax, 5);
        assert_eq!(totals.total, 73);
        assert_eq!(totals.gratuity, 10);
        assert_eq!(totals.mobile_total, 78);
        assert_eq!(totals.item_count, 3);
    }

    #[test]
    fn empty_cart_is_all_zeros() {
        let totals = Totals::compute(&Cart::new());
        assert_eq!(
            totals,
            Totals {
                subtotal: 0,
                tax: 0,
                gratuity: 0,
                total: 0,
                mobile_total: 0,
                item_count: 0,
            }
        );
    }

    #[test]
    fn rounding_is_half_up() {
        // subtotal 31: 8% = 2.48 -> 2, 15% = 4.65 -> 5.
        let cart = cart_of(&[(1, 31, 1)]);
        let totals = Totals::compute(&cart);
        assert_eq!(totals.tax, 2);
        assert_eq!(totals.gratuity, 5);

        // subtotal 50: 15% = 7.5 rounds up to 8.
        let cart = cart_of(&[(1, 50, 1)]);
        assert_eq!(Totals::compute(&cart).gratuity, 8);
    }

    fn arb_lines() -> impl Strategy<Value = Vec<CartLine>> {
        prop::collection::vec((1u64..200u64, 1u32..6u32), 0..12).prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (price, quantity))| CartLine {
                    item_id: ItemId::new(i as u32 + 1).unwrap(),
                    quantity,
                    name: String::new(),
                    unit_price: price,
                    image: String::new(),
                    category_display: String::new(),
                })
                .collect()
        })
    }

    fn cart_from_lines(lines: &[CartLine]) -> Cart {
        let mut cart = Cart::new();
        for line in lines {
            let item = test_item(line.item_id.get(), line.unit_price);
            for _ in 0..line.quantity {
                cart.add(&item);
            }
        }
        cart
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: both totals decompose into subtotal plus their own
        /// surcharge, and the surcharges stay within half a unit of the
        /// exact percentage.
        #[test]
        fn totals_decompose_and_round_within_half_a_unit(lines in arb_lines()) {
            let cart = cart_from_lines(&lines);
            let totals = Totals::compute(&cart);

            let subtotal: u64 = lines.iter().map(|l| l.unit_price * u64::from(l.quantity)).sum();
            prop_assert_eq!(totals.subtotal, subtotal);
            prop_assert_eq!(totals.total, totals.subtotal + totals.tax);
            prop_assert_eq!(totals.mobile_total, totals.subtotal + totals.gratuity);

            let exact_tax = subtotal as f64 * 0.08;
            let exact_gratuity = subtotal as f64 * 0.15;
            prop_assert!((totals.tax as f64 - exact_tax).abs() <= 0.5);
            prop_assert!((totals.gratuity as f64 - exact_gratuity).abs() <= 0.5);
        }

        /// Property: the badge count is the sum of line quantities.
        #[test]
        fn item_count_sums_quantities(lines in arb_lines()) {
            let cart = cart_from_lines(&lines);
            let totals = Totals::compute(&cart);
            let expected: u32 = lines.iter().map(|l| l.quantity).sum();
            prop_assert_eq!(totals.item_count, expected);
        }
    }
}
