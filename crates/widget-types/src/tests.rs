#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::event::*;
    use crate::config::*;
    use crate::session::*;
    use crate::error::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::new(MessageId(1), Sender::User, "Hello");
        assert_eq!(msg.sender(), Sender::User);
        assert_eq!(msg.content(), "Hello");
        assert_eq!(msg.id(), MessageId(1));
    }

    #[test]
    fn test_message_bot() {
        let msg = Message::bot(MessageId(0), "Welcome");
        assert_eq!(msg.sender(), Sender::Bot);
        assert_eq!(msg.id(), MessageId(0));
    }

    #[test]
    fn test_message_timestamp_is_fixed_at_creation() {
        let msg = Message::new(MessageId(3), Sender::User, "hi");
        let first = msg.timestamp();
        let cloned = msg.clone();
        assert_eq!(cloned.timestamp(), first);
    }

    #[test]
    fn test_message_serde_keeps_timestamp() {
        let msg = Message::bot(MessageId(4), "Saved");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""sender":"bot""#));

        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
        assert_eq!(back.timestamp(), msg.timestamp());
    }

    #[test]
    fn test_message_id_display_and_order() {
        assert_eq!(MessageId(7).to_string(), "msg-7");
        assert!(MessageId(1) < MessageId(2));
    }

    #[test]
    fn test_sender_serialization() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), r#""bot""#);
        let s: Sender = serde_json::from_str(r#""bot""#).unwrap();
        assert_eq!(s, Sender::Bot);
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_visibility_default_is_closed() {
        assert_eq!(Visibility::default(), Visibility::Closed);
        assert!(!Visibility::Closed.is_visible());
        assert!(Visibility::Open.is_visible());
        assert!(Visibility::OpenMinimized.is_visible());
    }

    #[test]
    fn test_widget_event_serialization() {
        let event = WidgetEvent::ReplyFailed {
            ticket: ReplyTicket(2),
            message: "Reply timed out after 10ms".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("ReplyFailed"));
        assert!(json.contains("timed out"));
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = WidgetConfig::default();
        assert_eq!(config.title, "Chat Support");
        assert_eq!(config.bot_name, "AI Assistant");
        assert_eq!(config.colors.primary, "#4f46e5");
        assert_eq!(config.position, WidgetPosition::BottomRight);
        assert_eq!(config.size.width, 350);
        assert_eq!(config.size.height, 500);
        assert_eq!(config.behavior.reply_delay_ms, 1500);
        assert!(!config.behavior.auto_open);
        assert_eq!(config.content.welcome_message, "Hello! How can I help you today?");
        assert_eq!(config.content.input_placeholder, "Type your message here...");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_position_serialization() {
        let json = serde_json::to_string(&WidgetPosition::BottomLeft).unwrap();
        assert_eq!(json, r#""bottom-left""#);
        let p: WidgetPosition = serde_json::from_str(r#""top-right""#).unwrap();
        assert_eq!(p, WidgetPosition::TopRight);
        assert!(serde_json::from_str::<WidgetPosition>(r#""middle""#).is_err());
    }

    #[test]
    fn test_position_helpers() {
        assert_eq!(WidgetPosition::all().len(), 4);
        assert!(WidgetPosition::TopLeft.is_top());
        assert!(WidgetPosition::TopLeft.is_left());
        assert!(!WidgetPosition::BottomRight.is_top());
        assert!(!WidgetPosition::BottomRight.is_left());
        assert_eq!(WidgetPosition::BottomRight.label(), "Bottom Right");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r##"{"title":"Help desk","colors":{"primary":"#000000"}}"##).unwrap();
        assert_eq!(config.title, "Help desk");
        assert_eq!(config.colors.primary, "#000000");
        assert_eq!(config.colors.text, "#1f2937");
        assert_eq!(config.bot_name, "AI Assistant");
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#4f46e5"), Some([0x4f, 0x46, 0xe5]));
        assert_eq!(parse_hex_color("#fff"), Some([255, 255, 255]));
        assert_eq!(parse_hex_color("  #000000 "), Some([0, 0, 0]));
        assert_eq!(parse_hex_color("4f46e5"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_validate_rejects_bad_color() {
        let mut config = WidgetConfig::default();
        config.colors.primary = "blue".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            WidgetError::invalid("colors.primary", "'blue' is not a hex color")
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_size() {
        let mut config = WidgetConfig::default();
        config.size.width = 100;
        assert!(matches!(
            config.validate(),
            Err(WidgetError::ConfigurationInvalid { ref field, .. }) if field == "size.width"
        ));
    }

    #[test]
    fn test_validate_rejects_timeout_below_delay() {
        let mut config = WidgetConfig::default();
        config.behavior.reply_timeout_ms = 1000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_timeout() {
        let mut config = WidgetConfig::default();
        config.behavior.reply_timeout_ms = u32::MAX;
        assert!(matches!(
            config.validate(),
            Err(WidgetError::ConfigurationInvalid { ref field, .. }) if field == "behavior.reply_timeout_ms"
        ));

        config.behavior.reply_timeout_ms = REPLY_TIMEOUT_MAX_MS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sanitized_bounds_restored_timeout() {
        let stored = format!(r#"{{"behavior":{{"reply_timeout_ms":{}}}}}"#, u32::MAX);
        let config: WidgetConfig = serde_json::from_str(&stored).unwrap();
        assert!(config.validate().is_err());

        let clean = config.sanitized();
        assert!(clean.validate().is_ok());
        assert!(clean.behavior.reply_timeout_ms <= REPLY_TIMEOUT_MAX_MS);
        assert!(clean.behavior.reply_timeout_ms > clean.behavior.reply_delay_ms);
    }

    #[test]
    fn test_sanitized_resets_only_invalid_fields() {
        let mut config = WidgetConfig::default();
        config.title = "Support".to_string();
        config.colors.primary = "not-a-color".to_string();
        config.colors.secondary = "#123".to_string();
        config.chat_icon_size = 200;

        let clean = config.sanitized();
        assert!(clean.validate().is_ok());
        assert_eq!(clean.title, "Support");
        assert_eq!(clean.colors.primary, "#4f46e5");
        assert_eq!(clean.colors.secondary, "#123");
        assert_eq!(clean.chat_icon_size, 40);
    }

    #[test]
    fn test_sanitized_repairs_timeout_against_valid_delay() {
        let mut config = WidgetConfig::default();
        config.behavior.reply_delay_ms = 20_000;
        config.behavior.reply_timeout_ms = 5_000;

        let clean = config.sanitized();
        assert_eq!(clean.behavior.reply_delay_ms, 20_000);
        assert!(clean.behavior.reply_timeout_ms > clean.behavior.reply_delay_ms);
        assert!(clean.validate().is_ok());
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_session_ids_are_unique() {
        let a = SessionId::new();
        let b = SessionId::new();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
        assert_eq!(a.to_string(), a.as_str());
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(
            WidgetError::ReplyTimeout(5000).to_string(),
            "Reply timed out after 5000ms"
        );
        assert_eq!(
            WidgetError::ReplyFailed("backend down".to_string()).to_string(),
            "Reply failed: backend down"
        );
        assert_eq!(
            WidgetError::invalid("position", "unknown").to_string(),
            "Invalid configuration: position: unknown"
        );
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: WidgetError = serde_err.into();
        assert!(matches!(err, WidgetError::Serialization(_)));
    }
}
