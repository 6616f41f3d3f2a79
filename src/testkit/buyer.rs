//! Share buyer that records orders instead of sending them.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::submit::{BuyOrder, ShareBuyer};

/// Records every order it receives; optionally fails each one.
#[derive(Debug, Default)]
pub struct RecordingBuyer {
    orders: Mutex<Vec<BuyOrder>>,
    failure: Option<String>,
}

impl RecordingBuyer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buyer that records orders and then reports `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            failure: Some(reason.into()),
        }
    }

    /// Orders received so far, oldest first.
    pub fn orders(&self) -> Vec<BuyOrder> {
        self.orders.lock().clone()
    }
}

#[async_trait]
impl ShareBuyer for RecordingBuyer {
    async fn buy_shares(&self, order: BuyOrder) -> Result<()> {
        self.orders.lock().push(order);
        match &self.failure {
            Some(reason) => Err(Error::Buy(reason.clone())),
            None => Ok(()),
        }
    }
}
