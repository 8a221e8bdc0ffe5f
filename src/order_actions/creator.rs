use crate::model::{Order, OrderId, OrderRequestBody, RequestOptions};
use crate::order_actions::OrderActionError;
use crate::store::CheckoutAction;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Produces the store actions for submitting and finalizing orders.
///
/// Each call is one asynchronous round trip; the returned action is dispatched
/// by the caller.
#[async_trait]
pub trait OrderActionCreator: Send + Sync {
    async fn submit_order(
        &self,
        payload: OrderRequestBody,
        use_stored_instrument: bool,
        options: RequestOptions,
    ) -> Result<CheckoutAction, OrderActionError>;

    async fn finalize_order(
        &self,
        order_id: OrderId,
        options: RequestOptions,
    ) -> Result<CheckoutAction, OrderActionError>;
}

/// Transport to the checkout backend.
#[async_trait]
pub trait OrderRequestSender: Send + Sync {
    async fn submit_order(
        &self,
        body: &OrderRequestBody,
        use_stored_instrument: bool,
        options: &RequestOptions,
    ) -> Result<Order, OrderActionError>;

    async fn finalize_order(
        &self,
        order_id: OrderId,
        options: &RequestOptions,
    ) -> Result<Order, OrderActionError>;
}

/// [`OrderActionCreator`] backed by an [`OrderRequestSender`].
#[derive(Clone)]
pub struct RemoteOrderActionCreator<S> {
    sender: S,
}

impl<S: OrderRequestSender> RemoteOrderActionCreator<S> {
    pub fn new(sender: S) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl<S: OrderRequestSender> OrderActionCreator for RemoteOrderActionCreator<S> {
    #[instrument(skip(self, payload, options))]
    async fn submit_order(
        &self,
        payload: OrderRequestBody,
        use_stored_instrument: bool,
        options: RequestOptions,
    ) -> Result<CheckoutAction, OrderActionError> {
        debug!(?payload, "submit_order called");
        if payload.payment.as_ref().is_some_and(|p| p.name.is_empty()) {
            return Err(OrderActionError::InvalidRequest(
                "payment name is empty".to_string(),
            ));
        }

        let order = self
            .sender
            .submit_order(&payload, use_stored_instrument, &options)
            .await?;
        if !order.is_placed() {
            return Err(OrderActionError::UnexpectedResponse(
                "submitted order has no id".to_string(),
            ));
        }

        info!(order_id = ?order.order_id, "Order submitted");
        Ok(CheckoutAction::SubmitOrderSucceeded(order))
    }

    #[instrument(skip(self, options))]
    async fn finalize_order(
        &self,
        order_id: OrderId,
        options: RequestOptions,
    ) -> Result<CheckoutAction, OrderActionError> {
        let order = self.sender.finalize_order(order_id, &options).await?;
        info!(%order_id, "Order finalized");
        Ok(CheckoutAction::FinalizeOrderSucceeded(order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaymentStatus;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubSender {
        response: Option<Order>,
        calls: Mutex<Vec<(OrderRequestBody, bool)>>,
    }

    #[async_trait]
    impl OrderRequestSender for StubSender {
        async fn submit_order(
            &self,
            body: &OrderRequestBody,
            use_stored_instrument: bool,
            _options: &RequestOptions,
        ) -> Result<Order, OrderActionError> {
            self.calls
                .lock()
                .unwrap()
                .push((body.clone(), use_stored_instrument));
            self.response
                .clone()
                .ok_or_else(|| OrderActionError::RequestFailed("503".to_string()))
        }

        async fn finalize_order(
            &self,
            order_id: OrderId,
            _options: &RequestOptions,
        ) -> Result<Order, OrderActionError> {
            let mut order = self
                .response
                .clone()
                .ok_or_else(|| OrderActionError::RequestFailed("503".to_string()))?;
            order.order_id = Some(order_id);
            order.is_complete = true;
            Ok(order)
        }
    }

    #[tokio::test]
    async fn test_submit_order_produces_submit_action() {
        let order = Order::placed(10, "paypalexpress", Some("https://x/checkout"), None);
        let creator = RemoteOrderActionCreator::new(StubSender {
            response: Some(order.clone()),
            ..StubSender::default()
        });
        let payload = OrderRequestBody::with_payment("paypalexpress");

        let action = creator
            .submit_order(payload.clone(), true, RequestOptions::default())
            .await
            .unwrap();

        assert_eq!(action, CheckoutAction::SubmitOrderSucceeded(order));
        assert_eq!(*creator.sender.calls.lock().unwrap(), vec![(payload, true)]);
    }

    #[tokio::test]
    async fn test_submit_order_rejects_unplaced_response() {
        let creator = RemoteOrderActionCreator::new(StubSender {
            response: Some(Order::incomplete()),
            ..StubSender::default()
        });

        let result = creator
            .submit_order(OrderRequestBody::default(), true, RequestOptions::default())
            .await;

        assert!(matches!(result, Err(OrderActionError::UnexpectedResponse(_))));
    }

    #[tokio::test]
    async fn test_submit_order_rejects_empty_payment_name() {
        let creator = RemoteOrderActionCreator::new(StubSender::default());

        let result = creator
            .submit_order(OrderRequestBody::with_payment(""), true, RequestOptions::default())
            .await;

        assert!(matches!(result, Err(OrderActionError::InvalidRequest(_))));
        assert!(creator.sender.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_finalize_order_produces_finalize_action() {
        let order = Order::placed(
            10,
            "paypalexpress",
            None,
            Some(PaymentStatus::Finalized),
        );
        let creator = RemoteOrderActionCreator::new(StubSender {
            response: Some(order),
            ..StubSender::default()
        });

        let action = creator
            .finalize_order(OrderId(10), RequestOptions::default())
            .await
            .unwrap();

        match action {
            CheckoutAction::FinalizeOrderSucceeded(order) => assert!(order.is_complete),
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let creator = RemoteOrderActionCreator::new(StubSender::default());

        let result = creator
            .finalize_order(OrderId(1), RequestOptions::default())
            .await;

        assert_eq!(
            result,
            Err(OrderActionError::RequestFailed("503".to_string()))
        );
    }
}
