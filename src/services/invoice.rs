// src/services/invoice.rs

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// CGST and SGST are each levied at 9% of the line amount.
pub const GST_COMPONENT_RATE: Decimal = dec!(0.09);

/// (cgst, sgst, total) for an invoice line.
pub fn gst_components(amount: Decimal, gst_applied: bool) -> (Decimal, Decimal, Decimal) {
    if !gst_applied {
        return (Decimal::ZERO, Decimal::ZERO, amount);
    }
    let cgst = (amount * GST_COMPONENT_RATE).round_dp(2);
    let sgst = (amount * GST_COMPONENT_RATE).round_dp(2);
    (cgst, sgst, amount + cgst + sgst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gst_splits_nine_percent_each_way() {
        let (cgst, sgst, total) = gst_components(dec!(10000), true);
        assert_eq!(cgst, dec!(900));
        assert_eq!(sgst, dec!(900));
        assert_eq!(total, dec!(11800));
    }

    #[test]
    fn no_gst_means_total_equals_amount() {
        let (cgst, sgst, total) = gst_components(dec!(5000), false);
        assert_eq!(cgst, Decimal::ZERO);
        assert_eq!(sgst, Decimal::ZERO);
        assert_eq!(total, dec!(5000));
    }

    #[test]
    fn fractional_amounts_round_to_paise() {
        let (cgst, _, total) = gst_components(dec!(101.11), true);
        assert_eq!(cgst, dec!(9.10));
        assert_eq!(total, dec!(119.31));
    }
}
