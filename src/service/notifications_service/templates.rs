//!
//! Fixed copy of notifications created by the category helpers
//!

use crate::dto::{AgentRequestType, EarningType, TransactionStatus, TransactionType};

#[derive(Debug, PartialEq, Eq)]
pub struct NotificationText {
    pub title: String,
    pub message: String,
}

impl NotificationText {
    fn new(title: &str, message: String) -> Self {
        Self {
            title: title.to_string(),
            message,
        }
    }

    pub fn with_additional_info(mut self, additional_info: Option<&str>) -> Self {
        if let Some(info) = additional_info.map(str::trim).filter(|info| !info.is_empty()) {
            self.message = format!("{} {info}", self.message);
        }
        self
    }
}

///
/// Returns [None] for combinations without dedicated copy
///
pub fn transaction(
    transaction_type: TransactionType,
    status: TransactionStatus,
    amount: &str,
) -> Option<NotificationText> {
    use TransactionStatus as S;
    use TransactionType as T;

    let text = match (transaction_type, status) {
        (T::Deposit, S::Pending) => NotificationText::new(
            "Deposit pending",
            format!("Your deposit of {amount} was received and is awaiting agent confirmation."),
        ),
        (T::Deposit, S::Approved) => NotificationText::new(
            "Deposit approved",
            format!("Your deposit of {amount} has been approved and added to your balance."),
        ),
        (T::Deposit, S::Rejected) => NotificationText::new(
            "Deposit rejected",
            format!("Your deposit of {amount} was rejected."),
        ),
        (T::Withdrawal, S::Pending) => NotificationText::new(
            "Withdrawal requested",
            format!("Your withdrawal of {amount} is being processed by an agent."),
        ),
        (T::Withdrawal, S::Approved) => NotificationText::new(
            "Withdrawal approved",
            format!("Your withdrawal of {amount} has been approved."),
        ),
        (T::Withdrawal, S::Rejected) => NotificationText::new(
            "Withdrawal rejected",
            format!(
                "Your withdrawal of {amount} was rejected and the amount was returned to your balance."
            ),
        ),
        (T::Withdrawal, S::Completed) => NotificationText::new(
            "Withdrawal completed",
            format!("Your withdrawal of {amount} has been paid out."),
        ),
        (T::TransferSent, S::Completed) => {
            NotificationText::new("Transfer sent", format!("You sent {amount}."))
        }
        (T::TransferReceived, S::Completed) => {
            NotificationText::new("Transfer received", format!("You received {amount}."))
        }
        (T::Purchase, S::Completed) => NotificationText::new(
            "Lot purchased",
            format!("Your lot purchase of {amount} is complete. Daily returns start tomorrow."),
        ),
        _ => return None,
    };

    Some(text)
}

pub fn transaction_fallback(
    transaction_type: TransactionType,
    status: TransactionStatus,
) -> NotificationText {
    NotificationText::new(
        "Transaction",
        format!("Transaction {transaction_type} - {status}"),
    )
}

pub fn earning(earning_type: EarningType, amount: &str) -> NotificationText {
    match earning_type {
        EarningType::Daily => NotificationText::new(
            "Daily earnings credited",
            format!("You earned {amount} from your active lots today."),
        ),
        EarningType::Commission => NotificationText::new(
            "Referral commission",
            format!("You received a commission of {amount} from your referral network."),
        ),
    }
}

pub fn agent(request_type: AgentRequestType, amount: &str, user_id: u64) -> NotificationText {
    match request_type {
        AgentRequestType::Deposit => NotificationText::new(
            "New deposit request",
            format!("User #{user_id} requested a deposit of {amount}."),
        ),
        AgentRequestType::Withdrawal => NotificationText::new(
            "New withdrawal request",
            format!("User #{user_id} requested a withdrawal of {amount}."),
        ),
    }
}

pub fn welcome(user_name: &str) -> NotificationText {
    NotificationText::new(
        "Welcome!",
        format!(
            "Hello {user_name}, your account is ready. Purchase your first lot to start earning daily returns."
        ),
    )
}

pub fn low_balance(balance: &str) -> NotificationText {
    NotificationText::new(
        "Low balance",
        format!("Your balance is {balance}. Make a deposit to keep purchasing lots."),
    )
}
