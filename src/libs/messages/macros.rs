//! Macros for application messaging and logging.
//!
//! Each display macro switches between structured `tracing` output and plain
//! console output depending on whether debug mode is enabled:
//!
//! - **`TICKLIST_DEBUG`**: explicit debug mode
//! - **`RUST_LOG`**: standard Rust logging configuration
//!
//! ```rust
//! use ticklist::{msg_info, msg_success};
//! use ticklist::libs::messages::Message;
//!
//! msg_success!(Message::TodoCreated(1));
//! msg_info!(Message::TrashAlreadyEmpty, true);
//! ```

use std::fmt::Display;
use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns whether debug mode is enabled. The environment is checked once.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TICKLIST_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// `prefix` and `msg` joined by a space, surrounded by blank lines when `spaced`.
#[doc(hidden)]
pub fn render(prefix: &str, msg: &dyn Display, spaced: bool) -> String {
    let line = if prefix.is_empty() { msg.to_string() } else { format!("{} {}", prefix, msg) };
    if spaced {
        format!("\n{}\n", line)
    } else {
        line
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $print:ident, $prefix:expr, $msg:expr, $spaced:expr) => {{
        let line = $crate::libs::messages::macros::render($prefix, &$msg, $spaced);
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}", line);
        } else {
            $print!("{}", line);
        }
    }};
}

/// Print a message as-is. Pass `true` to surround it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "✅", $msg, true)
    };
}

/// Errors go to stderr outside debug mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(error, eprintln, "❌", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, println, "⚠️", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(warn, println, "⚠️", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "ℹ️", $msg, true)
    };
}

/// Debug-only output; silent unless debug mode is enabled.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Build an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Return early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::messages::Message;

    #[test]
    fn render_joins_prefix_and_message() {
        assert_eq!(render("✅", &Message::TodoCreated(3), false), "✅ Todo #3 created");
        assert_eq!(render("", &Message::MigrationHistory, false), "Migration history:");
        assert_eq!(render("", &Message::FilterRemoved, true), "\nTrash\n");
    }
}
