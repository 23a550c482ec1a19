use std::fmt::Write;
use std::time::{Duration, Instant};

use super::{escape, layout, render_notification};
use crate::models::{BodyType, StyleLabel, QUIZ_QUESTIONS};
use crate::session::SessionState;

/// Main page: input form, action buttons, result panels, and whichever
/// dialogs are open.
pub fn render_index(state: &SessionState, now: Instant, ttl: Duration) -> String {
    let mut body = String::new();
    body.push_str("<h1>FashionStyleAI</h1>\n");
    body.push_str(&render_form(state));

    if !state.recommendation.is_empty() {
        let _ = writeln!(
            body,
            "<section class=\"card\" id=\"recommendation\"><h2>Style Recommendation:</h2><p>{}</p></section>",
            escape(&state.recommendation)
        );
    }

    if !state.trends.is_empty() {
        body.push_str("<section class=\"card\" id=\"trends\"><h2>Current Trends:</h2><ul>\n");
        for trend in &state.trends {
            let _ = writeln!(body, "<li>{}</li>", escape(trend));
        }
        body.push_str("</ul></section>\n");
    }

    if !state.quiz_result.is_empty() {
        let _ = writeln!(
            body,
            "<section class=\"card\" id=\"quiz-result\"><h2>Your Style Personality:</h2><p>{}</p></section>",
            escape(&state.quiz_result)
        );
    }

    body.push_str(&render_upload(state));

    if state.quiz_open {
        body.push_str(&render_quiz_dialog(state));
    }
    if state.new_data_open {
        body.push_str(&render_new_data_dialog(state));
    }

    if let Some(notification) = render_notification(&state.notification, now, ttl, "/") {
        body.push_str(&notification);
    }

    layout("FashionStyleAI", &body)
}

fn render_form(state: &SessionState) -> String {
    let mut html = String::new();
    html.push_str("<form method=\"post\" action=\"/recommendation\">\n");
    let _ = writeln!(
        html,
        "<label for=\"occasion\">Occasion</label>\
         <input type=\"text\" id=\"occasion\" name=\"occasion\" value=\"{}\">",
        escape(&state.occasion)
    );
    let _ = writeln!(
        html,
        "<label for=\"preferred_color\">Preferred Color</label>\
         <input type=\"text\" id=\"preferred_color\" name=\"preferred_color\" value=\"{}\">",
        escape(&state.preferred_color)
    );
    html.push_str("<label for=\"body_type\">Body Type</label><select id=\"body_type\" name=\"body_type\">\n");
    html.push_str("<option value=\"\"></option>\n");
    for body_type in BodyType::ALL {
        let selected = if state.body_type == Some(body_type) {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{selected}>{}</option>",
            body_type.as_str(),
            body_type.label()
        );
    }
    html.push_str("</select>\n");
    html.push_str("<button type=\"submit\" class=\"primary\">Get Style Recommendation</button>");
    html.push_str("<button type=\"submit\" formaction=\"/trends\">Get Trend Analysis</button>");
    html.push_str("<button type=\"submit\" formaction=\"/quiz/open\">Take Style Quiz</button>");
    html.push_str("<button type=\"submit\" formaction=\"/new-data/open\">Add New Data</button>\n");
    html.push_str("</form>\n");
    html
}

fn render_upload(state: &SessionState) -> String {
    let mut html = String::new();
    html.push_str(
        "<section class=\"card\" id=\"image-upload\"><h2>Analyze an Outfit Photo</h2>\
         <form method=\"post\" action=\"/upload\" enctype=\"multipart/form-data\">\
         <input type=\"file\" name=\"file\" accept=\".png,.jpg,.jpeg,.gif\" required>\
         <button type=\"submit\">Upload</button></form>\n",
    );
    if let Some(style) = &state.image_style {
        let _ = writeln!(html, "<p>Analyzed style: {}</p>", escape(style));
    }
    html.push_str("</section>\n");
    html
}

fn render_quiz_dialog(state: &SessionState) -> String {
    let mut html = String::new();
    html.push_str("<dialog open id=\"quiz\"><h2>Style Personality Quiz</h2>\n");
    html.push_str("<form method=\"post\" action=\"/quiz/submit\">\n");
    for (index, question) in QUIZ_QUESTIONS.iter().enumerate() {
        let _ = write!(
            html,
            "<fieldset><legend>{}</legend><div class=\"choices\">",
            escape(question)
        );
        let current = state.quiz_answers.get(index);
        for label in StyleLabel::ALL {
            let checked = if current == Some(label) { " checked" } else { "" };
            let _ = write!(
                html,
                "<label><input type=\"radio\" name=\"answer_{index}\" value=\"{}\"{checked}> {}</label>",
                label.as_str(),
                label.label()
            );
        }
        html.push_str("</div></fieldset>\n");
    }
    html.push_str("<button type=\"submit\" formaction=\"/quiz/cancel\">Cancel</button>");
    html.push_str("<button type=\"submit\" class=\"primary\">Submit</button>\n");
    html.push_str("</form></dialog>\n");
    html
}

fn render_new_data_dialog(state: &SessionState) -> String {
    format!(
        "<dialog open id=\"new-data\"><h2>Add New Fashion Data</h2>\n\
         <form method=\"post\" action=\"/new-data/submit\">\
         <label for=\"new_data\">New Data (JSON format)</label>\
         <textarea id=\"new_data\" name=\"new_data\" rows=\"4\">{}</textarea>\
         <button type=\"submit\" formaction=\"/new-data/cancel\">Cancel</button>\
         <button type=\"submit\" class=\"primary\">Submit</button>\
         </form></dialog>\n",
        escape(&state.new_data)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: &SessionState) -> String {
        render_index(state, Instant::now(), Duration::from_secs(6))
    }

    #[test]
    fn test_empty_session_has_no_result_panels() {
        let html = render(&SessionState::default());
        assert!(html.contains("<h1>FashionStyleAI</h1>"));
        assert!(!html.contains("id=\"recommendation\""));
        assert!(!html.contains("id=\"trends\""));
        assert!(!html.contains("id=\"quiz-result\""));
        assert!(!html.contains("<dialog"));
        assert!(!html.contains("class=\"notification\""));
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn test_results_rendered_when_present() {
        let state = SessionState {
            recommendation: "Try a <silk> scarf".to_string(),
            trends: vec!["Capes".to_string(), "Loafers".to_string()],
            quiz_result: "Your dominant style is edgy: Bold".to_string(),
            image_style: Some("classic".to_string()),
            ..Default::default()
        };
        let html = render(&state);
        assert!(html.contains("<p>Try a &lt;silk&gt; scarf</p>"));
        assert!(html.contains("<li>Capes</li>\n<li>Loafers</li>"));
        assert!(html.contains("Your dominant style is edgy: Bold"));
        assert!(html.contains("Analyzed style: classic"));
    }

    #[test]
    fn test_form_keeps_field_values() {
        let state = SessionState {
            occasion: "gala \"night\"".to_string(),
            body_type: Some(BodyType::InvertedTriangle),
            ..Default::default()
        };
        let html = render(&state);
        assert!(html.contains("value=\"gala &quot;night&quot;\""));
        assert!(html.contains("<option value=\"inverted triangle\" selected>Inverted Triangle</option>"));
        assert!(html.contains("<option value=\"pear\">Pear</option>"));
    }

    #[test]
    fn test_quiz_dialog_marks_selected_answers() {
        let mut state = SessionState::default();
        state.open_quiz();
        state.set_answer(3, StyleLabel::Preppy);
        let html = render(&state);
        assert!(html.contains("<dialog open id=\"quiz\">"));
        assert!(html.contains("name=\"answer_3\" value=\"preppy\" checked"));
        assert!(html.contains("name=\"answer_0\" value=\"preppy\">"));
        assert_eq!(html.matches("<fieldset>").count(), QUIZ_QUESTIONS.len());
    }

    #[test]
    fn test_new_data_dialog_keeps_text() {
        let mut state = SessionState::default();
        state.open_new_data();
        state.set_new_data_text("{\"a\": 1}");
        let html = render(&state);
        assert!(html.contains("<textarea id=\"new_data\" name=\"new_data\" rows=\"4\">{&quot;a&quot;: 1}</textarea>"));
    }

    #[test]
    fn test_notification_expires_without_reload() {
        let mut state = SessionState::default();
        let now = Instant::now();
        state.notify("Saved!", now);
        let html = render_index(&state, now, Duration::from_secs(6));
        assert!(html.contains("class=\"notification\""));
        assert!(html.contains("Saved!"));
        assert!(html.contains("animation-delay: 6000ms"));
        assert!(!html.contains("http-equiv=\"refresh\""));

        let later = render_index(&state, now + Duration::from_secs(7), Duration::from_secs(6));
        assert!(!later.contains("class=\"notification\""));
    }

    #[test]
    fn test_failed_new_data_keeps_dialog_without_reload() {
        let mut state = SessionState::default();
        let now = Instant::now();
        state.open_new_data();
        state.set_new_data_text("{bad");
        state.notify(crate::session::actions::NEW_DATA_FAILURE, now);
        let html = render_index(&state, now, Duration::from_secs(6));
        assert!(html.contains("<dialog open id=\"new-data\">"));
        assert!(html.contains(">{bad</textarea>"));
        assert!(html.contains("class=\"notification\""));
        assert!(!html.contains("http-equiv"));
    }
}
