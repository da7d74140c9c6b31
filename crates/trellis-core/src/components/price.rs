use serde::{Deserialize, Serialize};

use crate::view::{Node, Tag, class_names_with_mods};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub symbol: String,
    /// Number of minor units digits, e.g. 2 for cents
    pub decimals: u32,
    /// Whether the symbol goes before the amount
    pub symbol_first: bool,
}

impl Default for Currency {
    fn default() -> Self {
        Self {
            symbol: "€".to_string(),
            decimals: 2,
            symbol_first: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PriceProps {
    /// Amount in minor units (cents for EUR)
    pub amount: i64,
    pub currency: Currency,
    pub mods: Vec<String>,
}

/// Split an amount in minor units into (negative, integer part, decimal part)
pub fn split_amount(amount: i64, decimals: u32) -> (bool, String, String) {
    let negative = amount < 0;
    let abs = amount.unsigned_abs();
    if decimals == 0 {
        return (negative, abs.to_string(), String::new());
    }
    // past 10^19 every u64 fits in the decimal part
    let (integer, decimal) = match 10u64.checked_pow(decimals) {
        Some(factor) => (abs / factor, abs % factor),
        None => (0, abs),
    };
    (
        negative,
        integer.to_string(),
        format!("{:0width$}", decimal, width = decimals as usize),
    )
}

pub fn format_price(amount: i64, currency: &Currency) -> String {
    let (negative, integer, decimal) = split_amount(amount, currency.decimals);
    let number = if decimal.is_empty() {
        integer
    } else {
        format!("{integer}.{decimal}")
    };
    let sign = if negative { "-" } else { "" };
    if currency.symbol_first {
        format!("{sign}{}{number}", currency.symbol)
    } else {
        format!("{sign}{number} {}", currency.symbol)
    }
}

pub fn render_price<M: Clone>(props: &PriceProps) -> Node<M> {
    let (negative, integer, decimal) = split_amount(props.amount, props.currency.decimals);
    let mut mods = props.mods.clone();
    if negative {
        mods.push("negative".to_string());
    }

    let symbol = Node::new(Tag::Span)
        .class("ui-price__symbol")
        .text(props.currency.symbol.clone());
    let mut parts = Vec::new();
    if negative {
        parts.push(Node::new(Tag::Span).class("ui-price__sign").text("-"));
    }
    if props.currency.symbol_first {
        parts.push(symbol.clone());
    }
    parts.push(Node::new(Tag::Span).class("ui-price__integer").text(integer));
    if !decimal.is_empty() {
        parts.push(
            Node::new(Tag::Span)
                .class("ui-price__decimals")
                .text(format!(".{decimal}")),
        );
    }
    if !props.currency.symbol_first {
        parts.push(symbol);
    }

    Node::new(Tag::Span)
        .class(class_names_with_mods("ui-price", &mods))
        .attr("aria-label", format_price(props.amount, &props.currency))
        .children(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_amount() {
        assert_eq!(split_amount(12_50, 2), (false, "12".into(), "50".into()));
        assert_eq!(split_amount(-5, 2), (true, "0".into(), "05".into()));
        assert_eq!(split_amount(1200, 0), (false, "1200".into(), String::new()));
    }

    #[test]
    fn test_split_amount_with_many_decimals() {
        let (negative, integer, decimal) = split_amount(-1234, 25);
        assert!(negative);
        assert_eq!(integer, "0");
        assert_eq!(decimal, format!("{}1234", "0".repeat(21)));

        let (_, integer, decimal) = split_amount(i64::MIN, 20);
        assert_eq!(integer, "0");
        assert_eq!(decimal, format!("0{}", i64::MIN.unsigned_abs()));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1250, &Currency::default()), "€12.50");
        let sek = Currency {
            symbol: "kr".to_string(),
            decimals: 2,
            symbol_first: false,
        };
        assert_eq!(format_price(-99900, &sek), "-999.00 kr");
    }

    #[test]
    fn test_render_price() {
        let node: Node<()> = render_price(&PriceProps {
            amount: -1250,
            ..Default::default()
        });
        assert_eq!(node.class_name, "ui-price ui-price--negative");
        assert_eq!(node.text_content(), "-€12.50");
        assert_eq!(node.attr_value("aria-label"), Some("-€12.50"));
    }
}
