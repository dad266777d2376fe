use checkout_engine::application::payment::{
    CreditCardPayment, DebitCardPayment, PayPalPayment, PaymentMethod,
};
use checkout_engine::application::pricing::PricingService;
use checkout_engine::domain::authorizer::{
    AuthorizerHandle, GoogleAuthorizer, RobotAuthorizer, SmsAuthorizer,
};
use checkout_engine::domain::customer::Customer;
use checkout_engine::domain::money::{Balance, Price};
use checkout_engine::domain::order::{Order, OrderItem, OrderStatus};
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone, Copy, ValueEnum)]
enum MethodKind {
    Debit,
    Credit,
    Paypal,
}

#[derive(Clone, Copy, ValueEnum)]
enum AuthorizerKind {
    Sms,
    Google,
    Robot,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Starting customer balance
    #[arg(long, default_value = "20000")]
    balance: Decimal,

    /// Payment method to settle with
    #[arg(long, value_enum, default_value = "paypal")]
    method: MethodKind,

    /// Second-factor authorizer gating the payment
    #[arg(long, value_enum, default_value = "google")]
    authorizer: AuthorizerKind,

    /// MFA code for the sms/google authorizers
    #[arg(long, default_value_t = 13216)]
    mfa_code: u32,

    /// Card security code for the debit/credit methods
    #[arg(long, default_value_t = 7389)]
    security_code: u32,

    /// Account email for the paypal method
    #[arg(long, default_value = "jane_doe_customer@example.com")]
    email: String,

    /// Leave the authorizer unverified; the payment then fails fatally
    #[arg(long)]
    skip_verification: bool,

    /// Print the final order as a JSON receipt
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Receipt<'a> {
    order: &'a Order,
    total: Balance,
    remaining_balance: Balance,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing();

    let mut customer = Customer::new(Balance::new(cli.balance));
    let mut order = Order::new();
    order.add_item(OrderItem::new(
        "Laptop",
        5,
        Price::new(Decimal::from(1500)).into_diagnostic()?,
    ));
    order.add_item(OrderItem::new(
        "Speaker",
        3,
        Price::new(Decimal::from(1000)).into_diagnostic()?,
    ));
    order.add_item(OrderItem::new(
        "Keyboard",
        2,
        Price::new(Decimal::from(800)).into_diagnostic()?,
    ));

    let authorizer: AuthorizerHandle = match cli.authorizer {
        AuthorizerKind::Sms => {
            let authorizer = Arc::new(SmsAuthorizer::new());
            if !cli.skip_verification {
                authorizer.verify_mfa_code(cli.mfa_code);
            }
            authorizer
        }
        AuthorizerKind::Google => {
            let authorizer = Arc::new(GoogleAuthorizer::new());
            if !cli.skip_verification {
                authorizer.verify_mfa_code(cli.mfa_code);
            }
            authorizer
        }
        AuthorizerKind::Robot => {
            let authorizer = Arc::new(RobotAuthorizer::new());
            if !cli.skip_verification {
                authorizer.not_a_robot();
            }
            authorizer
        }
    };

    let method: Box<dyn PaymentMethod> = match cli.method {
        MethodKind::Debit => Box::new(DebitCardPayment::new(cli.security_code, authorizer)),
        MethodKind::Credit => Box::new(CreditCardPayment::new(cli.security_code, authorizer)),
        MethodKind::Paypal => Box::new(PayPalPayment::new(cli.email.clone(), authorizer)),
    };

    method.pay(&mut order, &mut customer).into_diagnostic()?;

    if cli.json {
        let receipt = Receipt {
            order: &order,
            total: PricingService::calculate_total_price(&order),
            remaining_balance: customer.balance,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&receipt).into_diagnostic()?
        );
    } else {
        let status = match order.status {
            OrderStatus::Open => "open",
            OrderStatus::Paid => "paid",
        };
        println!("order status: {status}");
        println!("customer balance: {}", customer.balance);
    }

    Ok(())
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
