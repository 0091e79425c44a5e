use uuid::Uuid;

// ============================================================================
// Gift Card Fulfillment
// ============================================================================

/// Delivers a gift card to its recipient.
pub trait GiftCardNotifier: Send + Sync {
    fn send_gift(&self, item_id: Uuid, recipient_email: &str);
}

/// Simulated delivery: the notification is only logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingGiftCardNotifier;

impl GiftCardNotifier for LoggingGiftCardNotifier {
    fn send_gift(&self, item_id: Uuid, recipient_email: &str) {
        tracing::info!(
            item_id = %item_id,
            recipient = %recipient_email,
            "🎁 Sending gift card"
        );
    }
}
