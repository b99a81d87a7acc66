//! Presentation Commands
//!
//! One function per user-facing operation. Each renders to stdout or
//! stderr and returns a process exit code; the console reuses the
//! line-building helpers instead of printing.

use crate::logic::content;
use crate::logic::controller::{PageController, PredictError};
use crate::logic::form::PatientForm;
use crate::logic::report;
use crate::logic::sections::Section;
use crate::logic::session::AdminSession;

/// Header plus static body for a section; the admin section swaps in
/// the panel while a session is active.
pub fn section_lines(section: Section, session: &AdminSession) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", section.title())];

    if section == Section::Admin && session.is_logged_in() {
        if let Some(username) = session.username() {
            lines.push(format!("Signed in as {}", username));
        }
        lines.extend(content::ADMIN_PANEL.iter().map(|s| s.to_string()));
    } else {
        lines.extend(content::section_body(section).iter().map(|s| s.to_string()));
    }

    lines
}

/// Flatten an info payload into display lines
pub fn info_lines(value: &serde_json::Value) -> Vec<String> {
    match value.as_object() {
        Some(object) => object
            .iter()
            .map(|(key, entry)| match entry {
                serde_json::Value::String(s) => format!("{}: {}", key, s),
                other => format!("{}: {}", key, other),
            })
            .collect(),
        None => vec![value.to_string()],
    }
}

/// One-shot risk assessment
pub async fn run_predict(
    controller: &mut PageController,
    form: &PatientForm,
    verbose: bool,
) -> i32 {
    controller.show_section(Section::Predict);

    // The gate runs before the loading indicator, like the form handler:
    // a failing field never shows "analyzing".
    if let Err(e) = form.parse() {
        eprintln!("{}", e);
        return 1;
    }

    println!("Analyzing patient data...");
    match controller.submit_prediction(form).await {
        Ok(response) => {
            for line in report::render(&response, verbose) {
                println!("{}", line);
            }
            0
        }
        Err(e @ (PredictError::Validation(_) | PredictError::InFlight)) => {
            eprintln!("{}", e);
            1
        }
        Err(e @ PredictError::Request(_)) => {
            eprintln!("{}", e);
            2
        }
    }
}

/// Show an informational section; its background load is fire-and-forget
pub fn run_info(controller: &mut PageController, section: Section) -> i32 {
    controller.show_section(section);
    for line in section_lines(section, controller.session()) {
        println!("{}", line);
    }
    0
}

/// Foreground about load. Unavailability is informational, not an error.
pub async fn run_about(controller: &PageController) -> i32 {
    match controller.load_about().await {
        Ok(value) => {
            println!("== About ==");
            for line in info_lines(&value) {
                println!("{}", line);
            }
        }
        Err(_) => {
            println!("About information is unavailable right now.");
        }
    }
    0
}

/// One-shot admin credential check
pub async fn run_admin_login(
    controller: &mut PageController,
    email: &str,
    password: &str,
) -> i32 {
    match controller.admin_login(email, password).await {
        Ok(()) => {
            println!("Admin login successful. Welcome, {}.", email);
            for line in section_lines(Section::Admin, controller.session()) {
                println!("{}", line);
            }
            0
        }
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_section_shows_login_hint_until_a_session_exists() {
        let mut session = AdminSession::new();
        let lines = section_lines(Section::Admin, &session);
        assert!(lines.iter().any(|l| l.contains("Sign in")));
        assert!(!lines.iter().any(|l| l.contains("Random Forest")));

        session.login("admin@example.com");
        let lines = section_lines(Section::Admin, &session);
        assert!(lines.iter().any(|l| l.contains("Signed in as admin@example.com")));
        assert!(lines.iter().any(|l| l.contains("Random Forest")));
    }

    #[test]
    fn non_admin_sections_ignore_the_session() {
        let mut session = AdminSession::new();
        session.login("admin@example.com");
        let lines = section_lines(Section::Home, &session);
        assert!(!lines.iter().any(|l| l.contains("Signed in")));
    }

    #[test]
    fn info_lines_flatten_string_fields() {
        let value = serde_json::json!({
            "title": "Heart Disease Prediction System",
            "features_used": 13
        });
        let lines = info_lines(&value);
        assert!(lines.contains(&"title: Heart Disease Prediction System".to_string()));
        assert!(lines.contains(&"features_used: 13".to_string()));
    }
}
