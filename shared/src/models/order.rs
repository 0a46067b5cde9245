//! Order, fulfilment and payment enums with their chart label/color tables

use serde::{Deserialize, Serialize};

use crate::types::Language;

/// Fallback color for any value the tables below do not know
pub const UNKNOWN_COLOR: &str = "#9CA3AF";

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    ReadyForPickup,
    Completed,
    Cancelled,
    /// Any status this build does not know about
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (OrderStatus::Pending, Language::Portuguese) => "Pendente",
            (OrderStatus::ReadyForPickup, Language::Portuguese) => "Pronto para retirada",
            (OrderStatus::Completed, Language::Portuguese) => "Entregue",
            (OrderStatus::Cancelled, Language::Portuguese) => "Cancelado",
            (OrderStatus::Unknown, Language::Portuguese) => "Outro",
            (OrderStatus::Pending, Language::English) => "Pending",
            (OrderStatus::ReadyForPickup, Language::English) => "Ready for pickup",
            (OrderStatus::Completed, Language::English) => "Delivered",
            (OrderStatus::Cancelled, Language::English) => "Cancelled",
            (OrderStatus::Unknown, Language::English) => "Other",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "#F59E0B",
            OrderStatus::ReadyForPickup => "#3B82F6",
            OrderStatus::Completed => "#10B981",
            OrderStatus::Cancelled => "#EF4444",
            OrderStatus::Unknown => UNKNOWN_COLOR,
        }
    }
}

/// Whether an order was baked on demand or served from shelf stock
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentType {
    OnDemand,
    Stock,
    #[serde(other)]
    Unknown,
}

impl FulfillmentType {
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (FulfillmentType::OnDemand, Language::Portuguese) => "Sob encomenda",
            (FulfillmentType::Stock, Language::Portuguese) => "Pronta entrega",
            (FulfillmentType::Unknown, Language::Portuguese) => "Outro",
            (FulfillmentType::OnDemand, Language::English) => "On demand",
            (FulfillmentType::Stock, Language::English) => "From stock",
            (FulfillmentType::Unknown, Language::English) => "Other",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FulfillmentType::OnDemand => "#8B5CF6",
            FulfillmentType::Stock => "#EC4899",
            FulfillmentType::Unknown => UNKNOWN_COLOR,
        }
    }
}

/// How an order was paid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Pix,
    Cash,
    CreditCard,
    DebitCard,
    #[serde(other)]
    Unknown,
}

impl PaymentMethod {
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (PaymentMethod::Pix, _) => "Pix",
            (PaymentMethod::Cash, Language::Portuguese) => "Dinheiro",
            (PaymentMethod::CreditCard, Language::Portuguese) => "Cartão de crédito",
            (PaymentMethod::DebitCard, Language::Portuguese) => "Cartão de débito",
            (PaymentMethod::Unknown, Language::Portuguese) => "Outro",
            (PaymentMethod::Cash, Language::English) => "Cash",
            (PaymentMethod::CreditCard, Language::English) => "Credit card",
            (PaymentMethod::DebitCard, Language::English) => "Debit card",
            (PaymentMethod::Unknown, Language::English) => "Other",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "#14B8A6",
            PaymentMethod::Cash => "#22C55E",
            PaymentMethod::CreditCard => "#6366F1",
            PaymentMethod::DebitCard => "#0EA5E9",
            PaymentMethod::Unknown => UNKNOWN_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_names() {
        let statuses: Vec<OrderStatus> =
            serde_json::from_str(r#"["PENDING", "READY_FOR_PICKUP", "COMPLETED", "CANCELLED"]"#)
                .unwrap();
        assert_eq!(
            statuses,
            vec![
                OrderStatus::Pending,
                OrderStatus::ReadyForPickup,
                OrderStatus::Completed,
                OrderStatus::Cancelled
            ]
        );
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let status: OrderStatus = serde_json::from_str(r#""IN_OVEN""#).unwrap();
        assert_eq!(status, OrderStatus::Unknown);
        assert_eq!(status.color(), UNKNOWN_COLOR);

        let kind: FulfillmentType = serde_json::from_str(r#""DELIVERY""#).unwrap();
        assert_eq!(kind, FulfillmentType::Unknown);

        let method: PaymentMethod = serde_json::from_str(r#""BOLETO""#).unwrap();
        assert_eq!(method.label(Language::Portuguese), "Outro");
    }

    #[test]
    fn test_label_tables() {
        assert_eq!(OrderStatus::Pending.label(Language::Portuguese), "Pendente");
        assert_eq!(OrderStatus::Completed.label(Language::Portuguese), "Entregue");
        assert_eq!(OrderStatus::Completed.label(Language::English), "Delivered");
        assert_eq!(FulfillmentType::OnDemand.label(Language::Portuguese), "Sob encomenda");
        assert_eq!(PaymentMethod::Pix.label(Language::English), "Pix");
    }
}
