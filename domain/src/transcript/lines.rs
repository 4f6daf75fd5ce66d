//! Fixed transcript lines and line builders.

pub const HELP: [&str; 6] = [
    "Available commands:",
    "• scan - Open QR code scanner",
    "• track - Show tracked tools",
    "• sage [query] - Ask AI assistant",
    "• clear - Clear command history",
    "• help - Show this help",
];

pub const SCANNER_OPENED: &str = "📷 QR Scanner opened";

pub const SAGE_THINKING: &str = "🤖 Sage is thinking...";

pub const UNKNOWN_COMMAND: &str = "❌ Unknown command. Type 'help' for available commands";

/// Echo of a command as the user typed it
pub fn echo(raw: &str) -> String {
    format!("> {}", raw)
}

pub fn track_total(count: usize) -> String {
    format!("📦 Total tools tracked: {}", count)
}

pub fn track_entry(name: &str, qr_code: &str) -> String {
    format!("• {}: {}", name, qr_code)
}

pub fn tool_added(name: &str, qr_code: &str) -> String {
    format!("✅ Tool added: {} ({})", name, qr_code)
}

pub fn sage_response(text: &str) -> String {
    format!("🤖 Sage: {}", text)
}

pub fn sage_error(message: &str) -> String {
    format!("❌ Sage error: {}", message)
}
