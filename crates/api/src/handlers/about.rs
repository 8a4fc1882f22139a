//! Static contact-page handlers. Plain-text payloads, no state.

/// GET /pages/about/bob/phone
pub async fn phone() -> &'static str {
    "+44 07777 777 777"
}

/// GET /pages/about/bob/address
pub async fn address() -> &'static str {
    "123 Fake Street,\nMadeupville,\nNowhere"
}
