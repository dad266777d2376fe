use crate::application::pricing::PricingService;
use crate::domain::authorizer::{Authorizer, AuthorizerHandle};
use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderStatus};
use crate::error::{CheckoutError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Debit,
    Credit,
    PayPal,
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debit => write!(f, "DEBIT"),
            Self::Credit => write!(f, "CREDIT"),
            Self::PayPal => write!(f, "PAYPAL"),
        }
    }
}

/// A way of paying for an order, gated by a shared [`AuthorizerHandle`].
///
/// All methods share one settlement flow; they differ only in the
/// credential they hold and how it is verified (masked and logged).
pub trait PaymentMethod {
    fn payment_type(&self) -> PaymentType;

    /// Runs the full authorize → verify → settle flow against the order.
    ///
    /// An unauthorized gate is fatal: the `Authorization` error propagates
    /// to the caller. Insufficient balance is an ordinary business failure:
    /// it is logged here and swallowed, leaving the order open.
    fn pay(&self, order: &mut Order, customer: &mut Customer) -> Result<()>;
}

pub struct DebitCardPayment {
    security_code: u32,
    authorizer: AuthorizerHandle,
}

impl DebitCardPayment {
    pub fn new(security_code: u32, authorizer: AuthorizerHandle) -> Self {
        Self {
            security_code,
            authorizer,
        }
    }
}

impl PaymentMethod for DebitCardPayment {
    fn payment_type(&self) -> PaymentType {
        PaymentType::Debit
    }

    fn pay(&self, order: &mut Order, customer: &mut Customer) -> Result<()> {
        verify_and_settle(&self.authorizer, self.payment_type(), order, customer, || {
            verify_security_code(self.security_code)
        })
    }
}

pub struct CreditCardPayment {
    security_code: u32,
    authorizer: AuthorizerHandle,
}

impl CreditCardPayment {
    pub fn new(security_code: u32, authorizer: AuthorizerHandle) -> Self {
        Self {
            security_code,
            authorizer,
        }
    }
}

impl PaymentMethod for CreditCardPayment {
    fn payment_type(&self) -> PaymentType {
        PaymentType::Credit
    }

    fn pay(&self, order: &mut Order, customer: &mut Customer) -> Result<()> {
        verify_and_settle(&self.authorizer, self.payment_type(), order, customer, || {
            verify_security_code(self.security_code)
        })
    }
}

pub struct PayPalPayment {
    email_address: String,
    authorizer: AuthorizerHandle,
}

impl PayPalPayment {
    pub fn new(email_address: impl Into<String>, authorizer: AuthorizerHandle) -> Self {
        Self {
            email_address: email_address.into(),
            authorizer,
        }
    }
}

impl PaymentMethod for PayPalPayment {
    fn payment_type(&self) -> PaymentType {
        PaymentType::PayPal
    }

    fn pay(&self, order: &mut Order, customer: &mut Customer) -> Result<()> {
        verify_and_settle(&self.authorizer, self.payment_type(), order, customer, || {
            verify_email_address(&self.email_address)
        })
    }
}

/// The shared payment flow: authorization gate, credential verification,
/// then settlement. Verification is injected per payment method.
fn verify_and_settle(
    authorizer: &AuthorizerHandle,
    payment_type: PaymentType,
    order: &mut Order,
    customer: &mut Customer,
    verification: impl FnOnce(),
) -> Result<()> {
    authorizer.authorize()?;
    verification();

    match settle(payment_type, order, customer) {
        Err(CheckoutError::InsufficientBalance { balance }) => {
            warn!(%balance, "payment failed due to insufficient balance");
            Ok(())
        }
        result => result,
    }
}

/// Prices the order, debits the customer, and marks the order paid.
fn settle(payment_type: PaymentType, order: &mut Order, customer: &mut Customer) -> Result<()> {
    let total = PricingService::calculate_total_price(order);
    customer.withdraw_balance(total)?;

    info!(%payment_type, "processing payment");
    order.status = OrderStatus::Paid;
    info!(remaining_balance = %customer.balance, "payment successful");
    Ok(())
}

fn verify_security_code(security_code: u32) {
    info!(
        code = %masked_security_code(security_code),
        "verifying security code"
    );
}

fn verify_email_address(email_address: &str) {
    info!(email = %masked_email(email_address), "verifying email address");
}

fn masked_security_code(security_code: u32) -> String {
    "*".repeat(security_code.to_string().len())
}

/// Masks the local part of an email except its final 3 characters; the
/// domain stays visible. Local parts of 3 characters or fewer are shown
/// as-is. A string without an `@` is masked entirely.
fn masked_email(email_address: &str) -> String {
    let Some((username, domain)) = email_address.split_once('@') else {
        return "*".repeat(email_address.chars().count());
    };
    let hidden = username.chars().count().saturating_sub(3);
    let visible: String = username.chars().skip(hidden).collect();
    format!("{}{}@{}", "*".repeat(hidden), visible, domain)
}
