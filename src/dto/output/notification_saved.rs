use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotificationSaved {
    pub saved: bool,
}
