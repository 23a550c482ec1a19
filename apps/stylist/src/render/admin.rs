use std::fmt::Write;
use std::time::{Duration, Instant};

use super::{escape, layout, render_notification};
use crate::models::{BodyType, StyleLabel};
use crate::session::SessionState;

/// Knowledge-base update page. Plain fields take comma-separated lists,
/// bracketed fields fill one entry of a nested mapping.
pub fn render_admin(state: &SessionState, now: Instant, ttl: Duration) -> String {
    let mut body = String::new();
    body.push_str("<h1>Update Knowledge Base</h1>\n");
    body.push_str("<form method=\"post\" action=\"/admin/knowledge\" id=\"updateKnowledgeBase\">\n");

    body.push_str("<section class=\"card\"><h2>Lists</h2>\n");
    text_field(&mut body, "occasions", "New occasions (comma separated)");
    text_field(&mut body, "current_trends", "New trends (comma separated)");
    body.push_str("</section>\n");

    body.push_str("<section class=\"card\"><h2>Style Personalities</h2>\n");
    for label in StyleLabel::ALL {
        text_field(
            &mut body,
            &format!("style_personalities[{}]", label.as_str()),
            label.label(),
        );
    }
    body.push_str("</section>\n");

    body.push_str("<section class=\"card\"><h2>Body Type Recommendations</h2>\n");
    for body_type in BodyType::ALL {
        text_field(
            &mut body,
            &format!("body_type_recommendations[{}]", body_type.as_str()),
            body_type.label(),
        );
    }
    body.push_str("</section>\n");

    body.push_str("<button type=\"submit\" class=\"primary\">Update Knowledge Base</button>\n</form>\n");
    body.push_str("<p><a href=\"/\">Back to FashionStyleAI</a></p>\n");

    if let Some(notification) = render_notification(&state.notification, now, ttl, "/admin") {
        body.push_str(&notification);
    }

    layout("FashionStyleAI Admin", &body)
}

/// Element id for a field name. Ids may not hold spaces or brackets, so
/// `body_type_recommendations[inverted triangle]` becomes
/// `body_type_recommendations-inverted-triangle`.
fn field_id(name: &str) -> String {
    name.trim_end_matches(']')
        .chars()
        .map(|c| match c {
            ' ' | '[' | ']' => '-',
            _ => c,
        })
        .collect()
}

fn text_field(html: &mut String, name: &str, label: &str) {
    let id = escape(&field_id(name));
    let _ = writeln!(
        html,
        "<label for=\"{id}\">{}</label><input type=\"text\" id=\"{id}\" name=\"{}\">",
        escape(label),
        escape(name)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_form_uses_bracket_names() {
        let html = render_admin(&SessionState::default(), Instant::now(), Duration::from_secs(6));
        assert!(html.contains("action=\"/admin/knowledge\""));
        assert!(html.contains("name=\"occasions\""));
        assert!(html.contains("name=\"style_personalities[edgy]\""));
        assert!(html.contains("name=\"body_type_recommendations[inverted triangle]\""));
        assert!(!html.contains("class=\"notification\""));
    }

    #[test]
    fn test_admin_field_ids_have_no_spaces() {
        let html = render_admin(&SessionState::default(), Instant::now(), Duration::from_secs(6));
        assert!(html.contains(
            "<label for=\"body_type_recommendations-inverted-triangle\">Inverted Triangle</label>\
             <input type=\"text\" id=\"body_type_recommendations-inverted-triangle\" \
             name=\"body_type_recommendations[inverted triangle]\">"
        ));
        assert!(html.contains("id=\"occasions\" name=\"occasions\""));
        for id in html.split("id=\"").skip(1) {
            let id = &id[..id.find('"').unwrap()];
            assert!(!id.contains(' '), "id {id:?} contains a space");
            assert!(!id.contains('['), "id {id:?} contains a bracket");
        }
        assert_eq!(field_id("style_personalities[edgy]"), "style_personalities-edgy");
    }

    #[test]
    fn test_admin_notification_returns_to_admin() {
        let mut state = SessionState::default();
        let now = Instant::now();
        state.notify("AI model updated and retrained successfully", now);
        let html = render_admin(&state, now, Duration::from_secs(6));
        assert!(html.contains("AI model updated and retrained successfully"));
        assert!(html.contains("name=\"return_to\" value=\"/admin\""));
    }
}
