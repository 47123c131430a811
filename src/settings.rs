//! Well-known preference-store key names.
//!
//! This crate never reads or writes a preference store; host
//! applications own storage and pass the already-resolved values
//! (webhook URL, payload content) into the dispatchers. These
//! constants exist so every host spells the same key the same way:
//! constants survive renames, autocomplete, and catch typos at compile
//! time where raw strings would not.

/// Keys for values hosts persist for the library's own bookkeeping.
pub mod internal {
    /// Timestamp of the last delivered notification.
    pub const SAVED_DATE: &str = "savedDate";
}

/// Privacy preferences shared by all hosts.
pub mod privacy {
    /// Whether the device name may be included in payloads (bool).
    pub const SEND_DEVICE_NAME: &str = "sendDeviceName";

    /// Whether the device model may be included in payloads (bool).
    pub const SEND_DEVICE_MODEL: &str = "sendDeviceModel";
}

/// Identity preferences shared by all hosts.
pub mod identity {
    /// The user's display name.
    pub const USER_DISPLAY_NAME: &str = "userDisplayName";

    /// The user's pronoun.
    pub const USER_PRONOUN: &str = "userPronoun";

    /// The display name of the user's device.
    pub const USER_DEVICE_DISPLAY_NAME: &str = "userDeviceDisplayName";
}

/// Keys specific to the "Discord" service.
pub mod discord {
    /// Webhook URL for the "Discord" service (string).
    pub const WEBHOOK_URL: &str = "discordWebhookUrl";
}
