use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: u32,           // ⇔ students[].id (1-based, stable)
    pub name: String,      // ⇔ students[].name
    pub qr_code: String,   // ⇔ students[].qrCode (data URL, "" until first refresh)
}

impl Student {
    /// Roster entry without a QR payload yet.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            qr_code: String::new(),
        }
    }

    pub fn has_qr_code(&self) -> bool {
        !self.qr_code.is_empty()
    }
}
