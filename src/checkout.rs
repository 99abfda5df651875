//! Shopping cart with interchangeable payment methods.

use crate::error::{HubError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// A product priced in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub price: u32,
}

impl Product {
    pub fn new(price: u32) -> Self {
        Self { price }
    }
}

/// Outcome of a payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub amount: u64,
    pub method: String,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paid {} using {}", self.amount, self.method)
    }
}

/// A way of paying a checkout total.
pub trait PaymentStrategy: Send + Sync {
    fn pay(&self, amount: u64) -> Receipt;
}

/// Built-in payment methods.
///
/// Parses from kebab-case names (`credit-card`, `paypal`, `upi`, `crypto`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum PaymentMethod {
    CreditCard,
    #[strum(serialize = "paypal")]
    PayPal,
    Upi,
    Crypto,
}

impl PaymentMethod {
    /// Label used on receipts.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit card",
            PaymentMethod::PayPal => "Paypal",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Crypto => "CryptoPayment",
        }
    }
}

impl PaymentStrategy for PaymentMethod {
    fn pay(&self, amount: u64) -> Receipt {
        let receipt = Receipt {
            amount,
            method: self.label().to_string(),
        };
        info!("{}", receipt);
        receipt
    }
}

/// Cart of products paid through the selected strategy.
#[derive(Default)]
pub struct ShoppingCart {
    products: Vec<Product>,
    strategy: Option<Box<dyn PaymentStrategy>>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_product(&mut self, product: Product) {
        info!("Added item worth {}", product.price);
        self.products.push(product);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn total(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.price)).sum()
    }

    pub fn set_payment_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = Some(strategy);
    }

    /// Pay the current total with the selected strategy.
    ///
    /// The cart keeps its products; checking out twice pays twice.
    pub fn checkout(&self) -> Result<Receipt> {
        let strategy = self.strategy.as_ref().ok_or(HubError::NoPaymentStrategy)?;
        Ok(strategy.pay(self.total()))
    }
}
