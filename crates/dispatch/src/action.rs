//! The fixed enumeration of recognized webhook actions.

/// A recognized action name.
///
/// Routing is an exhaustive match on this enum; an unrecognized name never
/// reaches a handler and is rejected as a bad request at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    GetOrderById,
    GetProductById,
    GetDeliveryStatusById,
    CancelOrderById,
    CreateOrder,
    SearchProductsByName,
}

impl Action {
    /// All recognized actions, in routing-table order.
    pub const ALL: [Action; 6] = [
        Action::GetOrderById,
        Action::GetProductById,
        Action::GetDeliveryStatusById,
        Action::CancelOrderById,
        Action::CreateOrder,
        Action::SearchProductsByName,
    ];

    /// Resolves a wire-level action name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "get_order_by_id" => Some(Action::GetOrderById),
            "get_product_by_id" => Some(Action::GetProductById),
            "get_delivery_status_by_id" => Some(Action::GetDeliveryStatusById),
            "cancel_order_by_id" => Some(Action::CancelOrderById),
            "create_order" => Some(Action::CreateOrder),
            "search_products_by_name" => Some(Action::SearchProductsByName),
            _ => None,
        }
    }

    /// Returns the wire-level action name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::GetOrderById => "get_order_by_id",
            Action::GetProductById => "get_product_by_id",
            Action::GetDeliveryStatusById => "get_delivery_status_by_id",
            Action::CancelOrderById => "cancel_order_by_id",
            Action::CreateOrder => "create_order",
            Action::SearchProductsByName => "search_products_by_name",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
