//! Scripted demo session
//!
//! Walks one account through the paths a client exercises most: a rejected
//! login, a successful one, then buys and sells on both sides of the
//! compliance limits.

use brokerx_core::AuthenticatedUser;
use brokerx_order_manager::PlaceOrderCommand;
use brokerx_ports::{OrderRepository, PositionRepository, UserRepository, WalletRepository};
use log::{info, warn};
use rust_decimal_macros::dec;

use crate::bootstrap::{DemoAccount, Services};

/// Result of one scripted step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Accepted(String),
    Refused(String),
}

impl StepOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, StepOutcome::Accepted(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStep {
    pub name: &'static str,
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct SessionReport {
    pub steps: Vec<SessionStep>,
}

impl SessionReport {
    pub fn outcome(&self, name: &str) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|step| step.name == name)
            .map(|step| &step.outcome)
    }

    fn push(&mut self, name: &'static str, outcome: StepOutcome) {
        match &outcome {
            StepOutcome::Accepted(detail) => info!("[{}] accepted: {}", name, detail),
            StepOutcome::Refused(reason) => warn!("[{}] refused: {}", name, reason),
        }
        self.steps.push(SessionStep { name, outcome });
    }
}

/// Run the scripted session against `services`
///
/// Order steps are skipped when the login itself is refused.
pub async fn run_demo_session<U, W, P, O>(
    services: &Services<U, W, P, O>,
    account: &DemoAccount,
) -> SessionReport
where
    U: UserRepository,
    W: WalletRepository,
    P: PositionRepository,
    O: OrderRepository,
{
    let mut report = SessionReport::default();

    let wrong_password = format!("{}-wrong", account.password);
    let outcome = match services.auth.authenticate(&account.email, &wrong_password).await {
        Ok(user) => StepOutcome::Accepted(format!("user={}", user.id)),
        Err(err) => StepOutcome::Refused(err.to_string()),
    };
    report.push("failed login", outcome);

    let identity = match services
        .auth
        .authenticate(&account.email, &account.password)
        .await
    {
        Ok(user) => {
            report.push("login", StepOutcome::Accepted(format!("user={}", user.id)));
            AuthenticatedUser::from(&user)
        }
        Err(err) => {
            report.push("login", StepOutcome::Refused(err.to_string()));
            return report;
        }
    };

    let script = [
        ("compliant buy", PlaceOrderCommand::limit_buy("AAPL", 5, dec!(150))),
        ("over-budget buy", PlaceOrderCommand::limit_buy("AAPL", 10, dec!(150))),
        ("sell", PlaceOrderCommand::limit_sell("AAPL", 9, dec!(160))),
        ("oversell", PlaceOrderCommand::limit_sell("AAPL", 10, dec!(160))),
    ];

    for (name, command) in script {
        let outcome = match services.orders.submit(&identity, command).await {
            Ok(id) => StepOutcome::Accepted(format!("order id={}", id)),
            Err(err) => StepOutcome::Refused(err.to_string()),
        };
        report.push(name, outcome);
    }

    report
}
