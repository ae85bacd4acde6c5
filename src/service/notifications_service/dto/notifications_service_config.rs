pub struct NotificationsServiceConfig {
    /// Low balance notification is sent only below this balance
    pub low_balance_threshold: f64,

    /// Suffix of every formatted amount
    pub currency_label: String,
}

impl Default for NotificationsServiceConfig {
    fn default() -> Self {
        Self {
            low_balance_threshold: 10_000.0,
            currency_label: "FCFA".to_string(),
        }
    }
}
