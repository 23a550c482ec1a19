//! Server-side HTML for the web front end.
//!
//! Pages are plain strings built from the session record. Every piece of
//! user or backend text goes through `escape` before it is written out.
use std::fmt::Write;
use std::time::{Duration, Instant};

use crate::session::Notification;

pub mod admin;
pub mod index;

pub use admin::render_admin;
pub use index::render_index;

const STYLE: &str = r#"
body { font-family: Roboto, Helvetica, Arial, sans-serif; margin: 0; background: #fafafa; color: #212121; }
main { max-width: 900px; margin: 32px auto; padding: 0 16px; }
h1 { font-size: 3.2rem; font-weight: 300; margin: 0 0 16px; }
label { display: block; margin: 12px 0 4px; font-size: 0.9rem; color: #555; }
input[type=text], select, textarea { width: 100%; padding: 10px; box-sizing: border-box; font-size: 1rem; }
button { margin: 16px 8px 0 0; padding: 8px 16px; border: 1px solid #6200ea; background: #fff; color: #6200ea; border-radius: 4px; cursor: pointer; text-transform: uppercase; }
button.primary { background: #6200ea; color: #fff; }
.card { background: #fff; border-radius: 4px; box-shadow: 0 1px 3px rgba(0,0,0,.2); padding: 16px; margin: 16px 0; }
.card h2 { font-size: 1.5rem; font-weight: 400; margin: 0 0 8px; }
dialog { border: none; border-radius: 4px; box-shadow: 0 8px 24px rgba(0,0,0,.3); max-width: 560px; }
fieldset { border: none; padding: 0; margin: 16px 0 0; }
.choices label { display: inline-block; margin-right: 12px; color: #212121; }
.notification { position: fixed; left: 24px; bottom: 24px; background: #edf7ed; color: #1e4620; padding: 12px 16px; border-radius: 4px; box-shadow: 0 2px 6px rgba(0,0,0,.2); }
.notification form { display: inline; }
.notification button { margin: 0 0 0 12px; }
.notification { animation-name: notification-expire; animation-duration: 1ms; animation-fill-mode: forwards; }
@keyframes notification-expire { to { visibility: hidden; opacity: 0; } }
"#;

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps `body` in the page shell. The page never reloads itself, so text
/// typed into an open dialog survives a notification expiring.
fn layout(title: &str, body: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(title));
    let _ = writeln!(html, "<style>{STYLE}</style>");
    html.push_str("</head>\n<body>\n<main>\n");
    html.push_str(body);
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Time left before a visible notification disappears.
fn remaining(notification: &Notification, now: Instant, ttl: Duration) -> Option<Duration> {
    if !notification.is_visible(now, ttl) {
        return None;
    }
    let shown_at = notification.shown_at?;
    Some(ttl.saturating_sub(now.saturating_duration_since(shown_at)))
}

/// Renders the notification if it is still on screen. The browser hides it
/// with a CSS animation delayed by the time it has left.
fn render_notification(
    notification: &Notification,
    now: Instant,
    ttl: Duration,
    dismiss_to: &str,
) -> Option<String> {
    let left = remaining(notification, now, ttl)?;
    Some(format!(
        "<div class=\"notification\" role=\"status\" style=\"animation-delay: {}ms\">{}\
         <form method=\"post\" action=\"/notification/dismiss\">\
         <input type=\"hidden\" name=\"return_to\" value=\"{}\">\
         <button type=\"submit\">Close</button></form></div>\n",
        left.as_millis(),
        escape(&notification.message),
        escape(dismiss_to),
    ))
}
