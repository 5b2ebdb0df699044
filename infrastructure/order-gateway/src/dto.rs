use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::order::model::{
    CheckoutRequest, OrderPage, OrderStatus, OrderSummary,
};
use business::domain::shared::value_objects::ProductId;

/// Order submission wire format. Field names and the numeric price encoding
/// are the backend's contract, not ours to rename.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub itens: Vec<OrderItemDto>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderItemDto {
    #[serde(rename = "produtoId")]
    pub produto_id: ProductId,
    pub quantidade: u32,
    #[serde(rename = "precoVenda", with = "rust_decimal::serde::float")]
    pub preco_venda: Decimal,
}

impl From<&CheckoutRequest> for CreateOrderRequest {
    fn from(request: &CheckoutRequest) -> Self {
        Self {
            itens: request
                .items
                .iter()
                .map(|item| OrderItemDto {
                    produto_id: item.product_id.clone(),
                    quantidade: item.quantity,
                    preco_venda: item.unit_price,
                })
                .collect(),
            total: request.total,
        }
    }
}

fn success_default() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderResponse {
    #[serde(default = "success_default")]
    pub success: bool,
    #[serde(rename = "orderId", default)]
    pub order_id: Option<String>,
}

/// Error payload of a non-success response.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Backend ids appear as numbers in most responses and strings in some.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for WireId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireId::Number(n) => write!(f, "{n}"),
            WireId::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderDto {
    pub id: WireId,
    #[serde(rename = "dataPedido", default)]
    pub data_pedido: Option<String>,
    #[serde(rename = "valorTotal", default, with = "rust_decimal::serde::float_option")]
    pub valor_total: Option<Decimal>,
    #[serde(default)]
    pub status: Option<String>,
}

impl OrderDto {
    pub fn into_summary(self) -> OrderSummary {
        OrderSummary {
            id: self.id.to_string(),
            placed_at: self.data_pedido.as_deref().and_then(parse_order_date),
            total: self.valor_total.unwrap_or(Decimal::ZERO),
            status: OrderStatus::from_wire(self.status.as_deref()),
        }
    }
}

/// The listing endpoint answers either a paged envelope or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OrderListResponse {
    Paged {
        content: Vec<OrderDto>,
        #[serde(rename = "totalPages", default)]
        total_pages: Option<u32>,
    },
    Plain(Vec<OrderDto>),
}

impl OrderListResponse {
    pub fn into_page(self) -> OrderPage {
        let (orders, total_pages) = match self {
            OrderListResponse::Paged {
                content,
                total_pages,
            } => (content, total_pages.unwrap_or(1)),
            OrderListResponse::Plain(orders) => (orders, 1),
        };

        OrderPage {
            orders: orders.into_iter().map(OrderDto::into_summary).collect(),
            total_pages,
        }
    }
}

/// Backend dates come as `dd/MM/yyyy`, optionally with an `HH:mm` time.
/// Anything else renders as an unknown date rather than failing the listing.
fn parse_order_date(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%d/%m/%Y %H:%M")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%d/%m/%Y")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
