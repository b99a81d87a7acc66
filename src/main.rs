//! CardioCheck Client - Main Entry Point
//!
//! Command line and interactive console front ends over the page
//! controller. One-shot subcommands cover scripted use; the console
//! hosts the full section experience.

mod api;
mod logic;
pub mod constants;

use clap::{Args, Parser, Subcommand};

use api::commands;
use logic::backend::ApiConfig;
use logic::controller::PageController;
use logic::diagnostics;
use logic::form::{PatientForm, FIELDS, FIELD_COUNT};
use logic::report;
use logic::sections::Section;

#[derive(Debug, Parser)]
#[command(
    name = "cardiocheck",
    version,
    about = "Heart disease risk prediction console client",
    long_about = "Terminal client for the CardioCheck prediction service.\n\n\
        Collects the 13 medical indicators, validates them locally and asks\n\
        the backend for a risk assessment.\n\n\
        EXAMPLES:\n\
        \n  cardiocheck                                Start the interactive console\n\
        \n  cardiocheck predict --age 52 --sex 1 ...   One-shot risk assessment\n\
        \n  cardiocheck info disease                   Heart disease information\n\
        \n  cardiocheck admin --email a@b.c --password pw   Check admin credentials"
)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Prediction API base URL (overrides CARDIO_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit the 13 indicators and print the risk assessment
    Predict(PredictArgs),

    /// Show an informational section and trigger its background load
    Info(InfoArgs),

    /// Check admin credentials against the backend
    Admin(AdminArgs),

    /// Start the interactive console (default)
    Console,
}

#[derive(Debug, Args)]
struct PredictArgs {
    /// Age in years (18-120)
    #[arg(long)]
    age: f64,

    /// Sex: 0 female, 1 male
    #[arg(long)]
    sex: f64,

    /// Chest pain type (0-3)
    #[arg(long)]
    cp: f64,

    /// Resting blood pressure in mm Hg (80-250)
    #[arg(long)]
    trestbps: f64,

    /// Serum cholesterol in mg/dL (100-600)
    #[arg(long)]
    chol: f64,

    /// Fasting blood sugar > 120 mg/dL: 0 no, 1 yes
    #[arg(long)]
    fbs: f64,

    /// Resting ECG result (0-2)
    #[arg(long)]
    restecg: f64,

    /// Maximum heart rate achieved (60-220)
    #[arg(long)]
    thalach: f64,

    /// Exercise induced angina: 0 no, 1 yes
    #[arg(long)]
    exang: f64,

    /// ST depression induced by exercise (0-10)
    #[arg(long)]
    oldpeak: f64,

    /// Slope of peak exercise ST segment (1-3)
    #[arg(long)]
    slope: f64,

    /// Major vessels colored by fluoroscopy (0-3)
    #[arg(long)]
    ca: f64,

    /// Thalassemia: 0 normal, 1 fixed defect, 2 reversible defect
    #[arg(long)]
    thal: f64,
}

impl PredictArgs {
    fn to_form(&self) -> PatientForm {
        let values = [
            self.age,
            self.sex,
            self.cp,
            self.trestbps,
            self.chol,
            self.fbs,
            self.restecg,
            self.thalach,
            self.exang,
            self.oldpeak,
            self.slope,
            self.ca,
            self.thal,
        ];

        let mut form = PatientForm::new();
        for (i, value) in values.iter().enumerate() {
            form.set(i, &value.to_string());
        }
        form
    }
}

#[derive(Debug, Args)]
struct InfoArgs {
    /// Topic to show
    #[arg(value_parser = ["disease", "developers", "about"])]
    topic: String,
}

#[derive(Debug, Args)]
struct AdminArgs {
    /// Admin email
    #[arg(long)]
    email: String,

    /// Admin password
    #[arg(long)]
    password: String,
}

/// What the next console line means
#[derive(Debug)]
enum InputMode {
    Command,
    FormEntry { form: PatientForm, next: usize },
    LoginEmail,
    LoginPassword { email: String },
}

/// Interactive console over the page controller. Pure state machine
/// over input lines; the terminal loop lives in `run_console`.
struct ConsoleSession {
    controller: PageController,
    mode: InputMode,
}

impl ConsoleSession {
    fn new(controller: PageController) -> Self {
        Self {
            controller,
            mode: InputMode::Command,
        }
    }

    fn open(&mut self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "{} v{} - heart disease risk console",
                constants::APP_NAME,
                constants::APP_VERSION
            ),
            format!("Backend: {}", self.controller.backend_url()),
            String::new(),
        ];
        lines.extend(commands::section_lines(
            Section::Home,
            self.controller.session(),
        ));
        lines.push("Type 'help' for commands.".to_string());
        lines
    }

    fn prompt(&self) -> String {
        match &self.mode {
            InputMode::Command => format!("{}> ", self.controller.active_section().id()),
            InputMode::FormEntry { next, .. } => format!("{}> ", FIELDS[*next].name),
            InputMode::LoginEmail => "email> ".to_string(),
            InputMode::LoginPassword { .. } => "password> ".to_string(),
        }
    }

    /// Abandon any multi-line input (Ctrl-C)
    fn cancel_input(&mut self) {
        self.mode = InputMode::Command;
    }

    async fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let mode = std::mem::replace(&mut self.mode, InputMode::Command);
        match mode {
            InputMode::Command => self.handle_command(line.trim()).await,
            InputMode::FormEntry { form, next } => {
                (self.handle_form_entry(form, next, line.trim()).await, false)
            }
            InputMode::LoginEmail => (self.handle_login_email(line.trim()), false),
            InputMode::LoginPassword { email } => {
                (self.handle_login_password(email, line).await, false)
            }
        }
    }

    async fn handle_command(&mut self, input: &str) -> (Vec<String>, bool) {
        match input {
            "" => (Vec::new(), false),
            "help" => (help_lines(), false),
            "quit" | "exit" | "q" => (Vec::new(), true),
            "predict" | "assess" => {
                let mut lines = self.show(Section::Predict);
                lines.push("Enter each value as prompted, or 'cancel' to abort.".to_string());
                lines.push(field_label(0));
                self.mode = InputMode::FormEntry {
                    form: PatientForm::new(),
                    next: 0,
                };
                (lines, false)
            }
            "disease" => (self.show(Section::DiseaseInfo), false),
            "team" => (self.show(Section::Developers), false),
            "about" => (self.about_lines().await, false),
            "admin" => {
                let mut lines = self.show(Section::Admin);
                if !self.controller.session().is_logged_in() {
                    lines.push("Enter your admin email, or 'cancel' to abort.".to_string());
                    self.mode = InputMode::LoginEmail;
                }
                (lines, false)
            }
            "logout" => {
                if self.controller.session().is_logged_in() {
                    self.controller.admin_logout();
                    (vec!["Logged out.".to_string()], false)
                } else {
                    (vec!["Not signed in.".to_string()], false)
                }
            }
            "status" => (self.status_lines(), false),
            "diag" => (diag_lines(), false),
            // Bare section identifiers switch sections too
            other => match Section::from_id(other) {
                Some(section) => (self.show(section), false),
                None => (
                    vec![format!("unknown command '{}' (try 'help')", other)],
                    false,
                ),
            },
        }
    }

    fn show(&mut self, section: Section) -> Vec<String> {
        self.controller.show_section(section);
        commands::section_lines(section, self.controller.session())
    }

    async fn handle_form_entry(
        &mut self,
        mut form: PatientForm,
        next: usize,
        input: &str,
    ) -> Vec<String> {
        if input == "cancel" {
            return vec!["Assessment cancelled.".to_string()];
        }

        form.set(next, input);
        let next = next + 1;
        if next < FIELD_COUNT {
            self.mode = InputMode::FormEntry { form, next };
            return vec![field_label(next)];
        }

        // All 13 captured: the gate runs before anything is sent.
        if let Err(e) = form.parse() {
            return vec![e.to_string()];
        }

        let mut lines = vec!["Analyzing patient data...".to_string()];
        match self.controller.submit_prediction(&form).await {
            Ok(response) => lines.extend(report::render(&response, false)),
            Err(e) => lines.push(e.to_string()),
        }
        lines
    }

    fn handle_login_email(&mut self, input: &str) -> Vec<String> {
        if input == "cancel" {
            return vec!["Login cancelled.".to_string()];
        }
        if input.is_empty() {
            self.mode = InputMode::LoginEmail;
            return vec!["Email is required.".to_string()];
        }
        self.mode = InputMode::LoginPassword {
            email: input.to_string(),
        };
        Vec::new()
    }

    async fn handle_login_password(&mut self, email: String, password: &str) -> Vec<String> {
        match self.controller.admin_login(&email, password).await {
            Ok(()) => {
                let mut lines = vec![format!("Admin login successful. Welcome, {}.", email)];
                lines.extend(commands::section_lines(
                    Section::Admin,
                    self.controller.session(),
                ));
                lines
            }
            Err(e) => vec![e.to_string()],
        }
    }

    async fn about_lines(&self) -> Vec<String> {
        match self.controller.load_about().await {
            Ok(value) => {
                let mut lines = vec!["== About ==".to_string()];
                lines.extend(commands::info_lines(&value));
                lines
            }
            Err(_) => vec!["About information is unavailable right now.".to_string()],
        }
    }

    fn status_lines(&self) -> Vec<String> {
        let session = self.controller.session();
        vec![
            format!("Active section: {}", self.controller.active_section().id()),
            match (session.username(), session.logged_in_at()) {
                (Some(name), Some(at)) => {
                    format!("Admin: signed in as {} since {}", name, at.format("%H:%M:%S"))
                }
                _ => "Admin: not signed in".to_string(),
            },
            format!(
                "Submission: {}",
                if self.controller.is_submitting() {
                    "in flight"
                } else {
                    "idle"
                }
            ),
            format!("Backend: {}", self.controller.backend_url()),
        ]
    }
}

fn field_label(index: usize) -> String {
    format!("{}:", FIELDS[index].label)
}

fn help_lines() -> Vec<String> {
    vec![
        "commands:".to_string(),
        "  home        show the landing section".to_string(),
        "  predict     start a risk assessment (13 values)".to_string(),
        "  disease     heart disease information".to_string(),
        "  developers  development team".to_string(),
        "  about       project details from the backend".to_string(),
        "  admin       admin sign-in".to_string(),
        "  logout      end the admin session".to_string(),
        "  status      session and section state".to_string(),
        "  diag        recent background request outcomes".to_string(),
        "  quit        leave the console".to_string(),
    ]
}

fn diag_lines() -> Vec<String> {
    let entries = diagnostics::recent(10);
    if entries.is_empty() {
        return vec!["No background requests recorded yet.".to_string()];
    }
    entries
        .iter()
        .map(|e| format!("{} {} - {}", e.at.format("%H:%M:%S"), e.source, e.outcome))
        .collect()
}

async fn run_console(controller: PageController) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;

    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize console: {e}");
            return 2;
        }
    };

    let mut session = ConsoleSession::new(controller);
    for line in session.open() {
        println!("{line}");
    }

    loop {
        match rl.readline(&session.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = session.handle_line(&line).await;
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => {
                session.cancel_input();
                continue;
            }
            Err(ReadlineError::Eof) => {
                return 0;
            }
            Err(e) => {
                eprintln!("error: console failed: {e}");
                return 2;
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose > 0 { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config = ApiConfig {
        base_url: cli
            .api_url
            .clone()
            .unwrap_or_else(constants::get_api_url),
        timeout_seconds: constants::get_request_timeout(),
    };
    let mut controller = PageController::new(config);

    let code = match cli.command {
        Some(Command::Predict(args)) => {
            commands::run_predict(&mut controller, &args.to_form(), cli.verbose > 0).await
        }
        Some(Command::Info(args)) => match args.topic.as_str() {
            "about" => commands::run_about(&controller).await,
            "developers" => commands::run_info(&mut controller, Section::Developers),
            _ => commands::run_info(&mut controller, Section::DiseaseInfo),
        },
        Some(Command::Admin(args)) => {
            commands::run_admin_login(&mut controller, &args.email, &args.password).await
        }
        Some(Command::Console) | None => run_console(controller).await,
    };

    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Port 1 is unassigned; console tests never complete a request.
    fn test_session() -> ConsoleSession {
        let controller = PageController::new(ApiConfig {
            base_url: "http://127.0.0.1:1/api".to_string(),
            timeout_seconds: 1,
        });
        ConsoleSession::new(controller)
    }

    #[test]
    fn console_help_lists_commands() {
        let mut session = test_session();
        let (out, exit) = tokio_test::block_on(session.handle_line("help"));
        assert!(!exit);
        assert!(out.iter().any(|l| l.contains("predict")));
        assert!(out.iter().any(|l| l.contains("admin")));
    }

    #[test]
    fn console_quit_exits() {
        let mut session = test_session();
        let (_out, exit) = tokio_test::block_on(session.handle_line("quit"));
        assert!(exit);
    }

    #[test]
    fn console_reports_unknown_commands() {
        let mut session = test_session();
        let (out, exit) = tokio_test::block_on(session.handle_line("teleport"));
        assert!(!exit);
        assert!(out.iter().any(|l| l.contains("unknown command 'teleport'")));
    }

    #[test]
    fn console_switches_sections() {
        let mut session = test_session();
        let (out, _) = tokio_test::block_on(session.handle_line("developers"));
        assert_eq!(session.controller.active_section(), Section::Developers);
        assert!(out.iter().any(|l| l.contains("Development Team")));
        assert_eq!(session.prompt(), "developers> ");
    }

    #[test]
    fn console_form_entry_walks_the_catalog_and_validates_on_submit() {
        let mut session = test_session();
        let (out, _) = tokio_test::block_on(session.handle_line("predict"));
        assert!(out.iter().any(|l| l.contains("cancel")));
        assert!(out.iter().any(|l| l.contains("Age in years")));
        assert_eq!(session.prompt(), "age> ");

        // age below the minimum; everything else in range
        let values = [
            "17", "1", "0", "130", "240", "0", "1", "150", "0", "1.0", "2", "0", "1",
        ];
        let mut last = Vec::new();
        for value in values {
            let (out, _) = tokio_test::block_on(session.handle_line(value));
            last = out;
        }

        assert!(last.iter().any(|l| l.contains("valid value for age")));
        assert!(matches!(session.mode, InputMode::Command));
        assert!(!session.controller.is_submitting());
    }

    #[test]
    fn console_form_cancel_returns_to_commands() {
        let mut session = test_session();
        let _ = tokio_test::block_on(session.handle_line("predict"));
        let (out, _) = tokio_test::block_on(session.handle_line("cancel"));
        assert!(out.iter().any(|l| l.contains("Assessment cancelled")));
        assert!(matches!(session.mode, InputMode::Command));
        assert_eq!(session.prompt(), "predict> ");
    }

    #[test]
    fn console_login_prompts_then_cancels_cleanly() {
        let mut session = test_session();
        let _ = tokio_test::block_on(session.handle_line("admin"));
        assert_eq!(session.prompt(), "email> ");

        let (out, _) = tokio_test::block_on(session.handle_line(""));
        assert!(out.iter().any(|l| l.contains("Email is required")));
        assert_eq!(session.prompt(), "email> ");

        let _ = tokio_test::block_on(session.handle_line("admin@example.com"));
        assert_eq!(session.prompt(), "password> ");

        session.cancel_input();
        assert!(matches!(session.mode, InputMode::Command));
        assert!(!session.controller.session().is_logged_in());
    }

    #[test]
    fn cli_parses_predict_with_all_fields() {
        let cli = Cli::try_parse_from([
            "cardiocheck",
            "predict",
            "--age", "52",
            "--sex", "1",
            "--cp", "0",
            "--trestbps", "130",
            "--chol", "240",
            "--fbs", "0",
            "--restecg", "1",
            "--thalach", "150",
            "--exang", "0",
            "--oldpeak", "1.5",
            "--slope", "2",
            "--ca", "0",
            "--thal", "1",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Predict(args)) => {
                let request = args.to_form().parse().unwrap();
                assert_eq!(request.age, 52);
                assert_eq!(request.oldpeak, 1.5);
            }
            _ => panic!("expected Predict command"),
        }
    }

    #[test]
    fn cli_rejects_predict_with_missing_fields() {
        assert!(Cli::try_parse_from(["cardiocheck", "predict", "--age", "52"]).is_err());
    }

    #[test]
    fn cli_rejects_non_numeric_predict_values() {
        let mut args = vec![
            "cardiocheck".to_string(),
            "predict".to_string(),
        ];
        for (name, value) in [
            ("age", "abc"),
            ("sex", "1"),
            ("cp", "0"),
            ("trestbps", "130"),
            ("chol", "240"),
            ("fbs", "0"),
            ("restecg", "1"),
            ("thalach", "150"),
            ("exang", "0"),
            ("oldpeak", "1.0"),
            ("slope", "2"),
            ("ca", "0"),
            ("thal", "1"),
        ] {
            args.push(format!("--{}", name));
            args.push(value.to_string());
        }
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn cli_restricts_info_topics() {
        assert!(Cli::try_parse_from(["cardiocheck", "info", "disease"]).is_ok());
        assert!(Cli::try_parse_from(["cardiocheck", "info", "weather"]).is_err());
    }

    #[test]
    fn cli_defaults_to_the_console() {
        let cli = Cli::try_parse_from(["cardiocheck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::try_parse_from(["cardiocheck", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
