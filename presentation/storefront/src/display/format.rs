use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rusty_money::{Money, iso};

use business::domain::order::model::OrderStatus;

/// Formats a currency amount the way the storefront displays prices.
pub fn format_currency(value: Decimal) -> String {
    Money::from_decimal(value, iso::BRL).to_string()
}

/// Renders an order timestamp; a date-only value (parsed as midnight) is
/// shown without the time, and an unknown date as a dash.
pub fn format_order_date(value: Option<NaiveDateTime>) -> String {
    match value {
        Some(datetime) if datetime.time() == chrono::NaiveTime::MIN => {
            datetime.format("%d/%m/%Y").to_string()
        }
        Some(datetime) => datetime.format("%d/%m/%Y %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Badge color for an order status row.
pub fn status_color(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Finished => "#27ae60",
        OrderStatus::Cancelled => "#e74c3c",
        OrderStatus::Processing => "#f39c12",
        OrderStatus::Pending => "#6c757d",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn should_format_amounts_in_brl() {
        assert_eq!(format_currency(Decimal::new(123456, 2)), "R$1.234,56");
        assert_eq!(format_currency(Decimal::new(750, 2)), "R$7,50");
    }

    #[test]
    fn should_format_date_with_time() {
        let datetime = NaiveDate::from_ymd_opt(2026, 8, 2)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(format_order_date(Some(datetime)), "02/08/2026 14:30");
    }

    #[test]
    fn should_hide_midnight_time_component() {
        let datetime = NaiveDate::from_ymd_opt(2026, 8, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_order_date(Some(datetime)), "02/08/2026");
    }

    #[test]
    fn should_render_unknown_dates_as_dash() {
        assert_eq!(format_order_date(None), "-");
    }

    #[test]
    fn should_map_statuses_to_badge_colors() {
        assert_eq!(status_color(OrderStatus::Finished), "#27ae60");
        assert_eq!(status_color(OrderStatus::Pending), "#6c757d");
    }
}
