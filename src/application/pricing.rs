use crate::domain::money::Balance;
use crate::domain::order::Order;

pub struct PricingService;

impl PricingService {
    /// Sums the line totals of every item in the order. Pure; an empty
    /// order prices at zero.
    pub fn calculate_total_price(order: &Order) -> Balance {
        order
            .items
            .iter()
            .map(|item| item.line_total())
            .fold(Balance::ZERO, |total, line| total + line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Price;
    use crate::domain::order::OrderItem;
    use rust_decimal_macros::dec;

    fn item(name: &str, quantity: u32, price: rust_decimal::Decimal) -> OrderItem {
        OrderItem::new(name, quantity, Price::new(price).unwrap())
    }

    #[test]
    fn test_empty_order_prices_at_zero() {
        let order = Order::new();
        assert_eq!(PricingService::calculate_total_price(&order), Balance::ZERO);
    }

    #[test]
    fn test_total_is_sum_of_line_totals() {
        let mut order = Order::new();
        order.add_item(item("Laptop", 5, dec!(1500)));
        order.add_item(item("Speaker", 3, dec!(1000)));
        order.add_item(item("Keyboard", 2, dec!(800)));

        assert_eq!(
            PricingService::calculate_total_price(&order),
            Balance::new(dec!(12100))
        );
    }

    #[test]
    fn test_total_is_order_independent() {
        let mut forward = Order::new();
        forward.add_item(item("Laptop", 5, dec!(1500)));
        forward.add_item(item("Speaker", 3, dec!(1000)));

        let mut reversed = Order::new();
        reversed.add_item(item("Speaker", 3, dec!(1000)));
        reversed.add_item(item("Laptop", 5, dec!(1500)));

        assert_eq!(
            PricingService::calculate_total_price(&forward),
            PricingService::calculate_total_price(&reversed)
        );
    }
}
