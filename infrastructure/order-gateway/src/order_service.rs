use async_trait::async_trait;
use reqwest::{StatusCode, header::AUTHORIZATION};

use business::domain::order::errors::OrderServiceError;
use business::domain::order::model::{CheckoutRequest, OrderPage, OrderReceipt};
use business::domain::order::service::OrderService;

use crate::client::ApiClient;
use crate::dto::{CreateOrderRequest, CreateOrderResponse, ErrorBody, OrderListResponse};

/// Order service adapter over the commerce backend's REST API.
pub struct OrderServiceHttp {
    client: ApiClient,
}

impl OrderServiceHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn reject_from(response: reqwest::Response) -> OrderServiceError {
        if response.status() == StatusCode::UNAUTHORIZED {
            return OrderServiceError::Unauthorized;
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| "order_service.rejected".to_string());
        OrderServiceError::Rejected(message)
    }
}

#[async_trait]
impl OrderService for OrderServiceHttp {
    async fn create_order(
        &self,
        request: &CheckoutRequest,
    ) -> Result<OrderReceipt, OrderServiceError> {
        let body = CreateOrderRequest::from(request);

        let response = self
            .client
            .client
            .post(self.client.orders_url())
            .header(AUTHORIZATION, self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|_| OrderServiceError::Connection)?;

        if !response.status().is_success() {
            return Err(Self::reject_from(response).await);
        }

        let ack: CreateOrderResponse = response
            .json()
            .await
            .map_err(|_| OrderServiceError::InvalidResponse)?;

        if !ack.success {
            return Err(OrderServiceError::Rejected(
                "order_service.rejected".to_string(),
            ));
        }

        Ok(OrderReceipt {
            order_id: ack.order_id,
        })
    }

    async fn list_orders(&self, page: u32, limit: u32) -> Result<OrderPage, OrderServiceError> {
        let response = self
            .client
            .client
            .get(self.client.orders_url())
            .query(&[("page", page), ("limit", limit)])
            .header(AUTHORIZATION, self.client.auth_header())
            .send()
            .await
            .map_err(|_| OrderServiceError::Connection)?;

        if !response.status().is_success() {
            return Err(Self::reject_from(response).await);
        }

        let listing: OrderListResponse = response
            .json()
            .await
            .map_err(|_| OrderServiceError::InvalidResponse)?;

        Ok(listing.into_page())
    }
}
