//! Gradebook CLI
//!
//! The `gradebook` command computes GPA and CGPA and keeps per-student
//! course records.
//!
//! ## Commands
//!
//! - `gpa`: GPA of one semester from `CODE:UNIT:GRADE` triples
//! - `cgpa`: one step of the CGPA recurrence
//! - `result`: full result sheet from a JSON submission
//! - `trajectory`: CGPA after each semester for a list of GPAs
//! - `signup` / `login`: account management
//! - `course`: add, edit, delete and list recorded courses
//! - `dashboard`: profile, courses and standing
//! - `calculate`: compute and record a semester from stored courses

mod config;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use gradebook_core::{
    cgpa_trajectory, compute_cgpa, compute_gpa, generate_result, level_for_verbosity,
    render_result_md, write_result_json, write_result_md, AcademicPosition, AdmissionMode,
    CourseRecord, Level, ResultSheet, Semester, SemesterSubmission,
};
use gradebook_state::{
    Accounts, CourseForm, CourseId, Gradebook, GradebookStore, JsonFileStore, Session,
    SignupForm,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::GradebookConfig;

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(author = "Gradebook Developers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "GPA and CGPA calculator with per-student course records", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Emit JSON output and JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    /// Config file (default: ./gradebook.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the JSON store (overrides config and GRADEBOOK_STORE)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Credentials for commands that act on a student's records.
#[derive(Args, Debug, Clone)]
struct Auth {
    /// Account email
    #[arg(long, env = "GRADEBOOK_EMAIL")]
    email: String,

    /// Account password
    #[arg(long, env = "GRADEBOOK_PASSWORD", hide_env_values = true)]
    password: String,
}

/// Course fields as entered.
#[derive(Args, Debug, Clone)]
struct CourseFields {
    /// Course code, e.g. CSC101
    #[arg(long)]
    code: String,

    /// Course title
    #[arg(long)]
    title: String,

    /// Credit units (1-6)
    #[arg(long)]
    unit: u32,

    /// Letter grade (A-F)
    #[arg(long)]
    grade: String,

    /// Level the course was taken at (100-600)
    #[arg(long)]
    level: u16,

    /// Semester the course was taken in (1 or 2)
    #[arg(long)]
    semester: u8,
}

impl From<CourseFields> for CourseForm {
    fn from(f: CourseFields) -> Self {
        CourseForm {
            code: f.code,
            title: f.title,
            unit: f.unit,
            grade: f.grade,
            level: f.level,
            semester: f.semester,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a semester GPA
    Gpa {
        /// Course as CODE:UNIT:GRADE or UNIT:GRADE (repeatable)
        #[arg(long = "course", required = true)]
        courses: Vec<String>,
    },

    /// Compute one step of the CGPA recurrence
    Cgpa {
        /// Admission mode (standard or advanced; default from config)
        #[arg(long)]
        mode: Option<AdmissionMode>,

        /// Current level (100-600)
        #[arg(long)]
        level: u16,

        /// Current semester (1 or 2)
        #[arg(long)]
        semester: u8,

        /// CGPA before this semester
        #[arg(long, default_value = "0")]
        prev: f64,

        /// This semester's GPA
        #[arg(long)]
        gpa: f64,
    },

    /// Produce a result sheet from a JSON submission
    Result {
        /// Submission file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Also write result.json and result.md into this directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show the CGPA after each semester for a sequence of GPAs
    Trajectory {
        /// Admission mode (standard or advanced; default from config)
        #[arg(long)]
        mode: Option<AdmissionMode>,

        /// Semester GPA, in pathway order (repeatable)
        #[arg(long = "gpa", required = true)]
        gpas: Vec<f64>,
    },

    /// Create a student account
    Signup {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[command(flatten)]
        auth: Auth,

        /// Password confirmation (defaults to --password)
        #[arg(long)]
        confirm_password: Option<String>,

        /// Admission mode (standard or advanced; default from config)
        #[arg(long)]
        mode: Option<AdmissionMode>,
    },

    /// Check credentials
    Login {
        #[command(flatten)]
        auth: Auth,
    },

    /// Manage recorded courses
    Course {
        #[command(subcommand)]
        action: CourseAction,
    },

    /// Show profile, courses and standing
    Dashboard {
        #[command(flatten)]
        auth: Auth,
    },

    /// Compute and record one semester from the stored courses
    Calculate {
        #[command(flatten)]
        auth: Auth,

        /// Level (100-600)
        #[arg(long)]
        level: u16,

        /// Semester (1 or 2)
        #[arg(long)]
        semester: u8,

        /// Also write result.json and result.md into this directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum CourseAction {
    /// Record a course
    Add {
        #[command(flatten)]
        auth: Auth,

        #[command(flatten)]
        fields: CourseFields,
    },

    /// Replace a recorded course
    Edit {
        #[command(flatten)]
        auth: Auth,

        /// Course ID
        id: String,

        #[command(flatten)]
        fields: CourseFields,
    },

    /// Delete a recorded course
    Delete {
        #[command(flatten)]
        auth: Auth,

        /// Course ID
        id: String,
    },

    /// List recorded courses
    List {
        #[command(flatten)]
        auth: Auth,

        /// Only courses at this level (requires --semester)
        #[arg(long, requires = "semester")]
        level: Option<u16>,

        /// Only courses in this semester (requires --level)
        #[arg(long, requires = "level")]
        semester: Option<u8>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    gradebook_core::init_tracing(cli.json, level_for_verbosity(cli.verbose));

    let cfg = GradebookConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_store_path(cli.store.clone());
    debug!(store = %cfg.store_path.display(), mode = %cfg.admission_mode, "configuration loaded");

    let json = cli.json;
    match cli.command {
        Commands::Gpa { courses } => cmd_gpa(&courses, json),
        Commands::Cgpa {
            mode,
            level,
            semester,
            prev,
            gpa,
        } => cmd_cgpa(
            mode.unwrap_or(cfg.admission_mode),
            level,
            semester,
            prev,
            gpa,
            json,
        ),
        Commands::Result { input, out } => cmd_result(&input, out.as_deref(), json),
        Commands::Trajectory { mode, gpas } => {
            cmd_trajectory(mode.unwrap_or(cfg.admission_mode), &gpas, json)
        }
        command => {
            let store = Arc::new(
                JsonFileStore::open(&cfg.store_path).with_context(|| {
                    format!("Failed to open store at {}", cfg.store_path.display())
                })?,
            );
            run_stateful(command, store, &cfg, json).await
        }
    }
}

/// Dispatch commands that need a store.
async fn run_stateful<S: GradebookStore>(
    command: Commands,
    store: Arc<S>,
    cfg: &GradebookConfig,
    json: bool,
) -> Result<()> {
    match command {
        Commands::Signup {
            first_name,
            last_name,
            auth,
            confirm_password,
            mode,
        } => {
            let form = SignupForm {
                first_name,
                last_name,
                email: auth.email,
                confirm_password: confirm_password.unwrap_or_else(|| auth.password.clone()),
                password: auth.password,
                admission_mode: mode.unwrap_or(cfg.admission_mode),
            };
            cmd_signup(&store, form, cfg.digest_rounds, json).await
        }
        Commands::Login { auth } => cmd_login(&store, &auth, json).await,
        Commands::Course { action } => match action {
            CourseAction::Add { auth, fields } => {
                cmd_course_add(&store, &auth, fields.into(), json).await
            }
            CourseAction::Edit { auth, id, fields } => {
                cmd_course_edit(&store, &auth, &id, fields.into(), json).await
            }
            CourseAction::Delete { auth, id } => cmd_course_delete(&store, &auth, &id).await,
            CourseAction::List {
                auth,
                level,
                semester,
            } => cmd_course_list(&store, &auth, level.zip(semester), json).await,
        },
        Commands::Dashboard { auth } => cmd_dashboard(&store, &auth, json).await,
        Commands::Calculate {
            auth,
            level,
            semester,
            out,
        } => cmd_calculate(&store, &auth, level, semester, out.as_deref(), json).await,
        Commands::Gpa { .. }
        | Commands::Cgpa { .. }
        | Commands::Result { .. }
        | Commands::Trajectory { .. } => bail!("command does not use the store"),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse `CODE:UNIT:GRADE` or `UNIT:GRADE`.
fn parse_course_spec(spec: &str) -> Result<CourseRecord> {
    let parts: Vec<&str> = spec.split(':').map(str::trim).collect();
    let (code, unit, grade) = match parts.as_slice() {
        [code, unit, grade] => (Some(*code), *unit, *grade),
        [unit, grade] => (None, *unit, *grade),
        _ => bail!("invalid course '{spec}': expected CODE:UNIT:GRADE"),
    };
    let unit: u32 = unit
        .parse()
        .with_context(|| format!("invalid unit '{unit}' in course '{spec}'"))?;
    let record = CourseRecord::new(unit, grade);
    Ok(match code {
        Some(code) if !code.is_empty() => record.with_code(code),
        _ => record,
    })
}

fn gpa_for(specs: &[String]) -> Result<f64> {
    let records = specs
        .iter()
        .map(|s| parse_course_spec(s))
        .collect::<Result<Vec<_>>>()?;
    Ok(compute_gpa(&records)?)
}

fn cmd_gpa(specs: &[String], json: bool) -> Result<()> {
    let gpa = gpa_for(specs).context("GPA calculation failed")?;
    if json {
        print_json(&serde_json::json!({ "gpa": gpa }))
    } else {
        println!("GPA: {gpa:.2}");
        Ok(())
    }
}

fn cmd_cgpa(
    mode: AdmissionMode,
    level: u16,
    semester: u8,
    prev: f64,
    gpa: f64,
    json: bool,
) -> Result<()> {
    let position = AcademicPosition::from_raw(level, semester, mode)?;
    let cgpa = compute_cgpa(&position, prev, gpa).context("CGPA calculation failed")?;
    if json {
        print_json(&serde_json::json!({ "position": position, "cgpa": cgpa }))
    } else {
        println!("CGPA at {position}: {cgpa:.2}");
        Ok(())
    }
}

fn cmd_trajectory(mode: AdmissionMode, gpas: &[f64], json: bool) -> Result<()> {
    let steps = cgpa_trajectory(mode, gpas)?;
    if json {
        return print_json(&steps);
    }
    for step in &steps {
        println!(
            "{}  GPA {:.2}  CGPA {:.2}",
            step.position, step.gpa, step.cgpa
        );
    }
    Ok(())
}

fn write_sheet(dir: &Path, sheet: &ResultSheet) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    write_result_json(&dir.join("result.json"), sheet).context("Failed to write result.json")?;
    write_result_md(&dir.join("result.md"), sheet).context("Failed to write result.md")?;
    info!(dir = %dir.display(), "result sheet written");
    Ok(())
}

fn show_sheet(sheet: &ResultSheet, out: Option<&Path>, json: bool) -> Result<()> {
    if let Some(dir) = out {
        write_sheet(dir, sheet)?;
    }
    if json {
        print_json(sheet)
    } else {
        print!("{}", render_result_md(sheet));
        Ok(())
    }
}

fn cmd_result(input: &Path, out: Option<&Path>, json: bool) -> Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let submission = SemesterSubmission::from_json(&raw)
        .with_context(|| format!("Invalid submission in {}", input.display()))?;
    let sheet = generate_result(&submission).context("Result calculation failed")?;
    show_sheet(&sheet, out, json)
}

async fn open_session<S: GradebookStore>(store: &Arc<S>, auth: &Auth) -> Result<Session> {
    Accounts::new(store.clone())
        .login(&auth.email, &auth.password)
        .await
        .context("Login failed")
}

fn close_session<S: GradebookStore>(store: &Arc<S>, session: Session) {
    Accounts::new(store.clone()).logout(session);
}

async fn cmd_signup<S: GradebookStore>(
    store: &Arc<S>,
    form: SignupForm,
    digest_rounds: u32,
    json: bool,
) -> Result<()> {
    let profile = Accounts::new(store.clone())
        .with_digest_rounds(digest_rounds)
        .signup(form)
        .await
        .context("Sign-up failed")?;
    if json {
        return print_json(&profile);
    }
    println!(
        "Created account for {} {} <{}> ({})",
        profile.first_name, profile.last_name, profile.email, profile.admission_mode
    );
    Ok(())
}

async fn cmd_login<S: GradebookStore>(store: &Arc<S>, auth: &Auth, json: bool) -> Result<()> {
    let session = open_session(store, auth).await?;
    if json {
        print_json(&serde_json::json!({
            "student_id": session.student_id(),
            "email": session.email(),
            "issued_at": session.issued_at(),
        }))?;
    } else {
        println!("Logged in as {}", session.email());
    }
    close_session(store, session);
    Ok(())
}

async fn cmd_course_add<S: GradebookStore>(
    store: &Arc<S>,
    auth: &Auth,
    form: CourseForm,
    json: bool,
) -> Result<()> {
    let session = open_session(store, auth).await?;
    let course = Gradebook::new(store.clone())
        .add_course(&session, form)
        .await
        .context("Failed to add course")?;
    close_session(store, session);
    if json {
        return print_json(&course);
    }
    println!("Added {} ({})", course.code, course.id);
    Ok(())
}

async fn cmd_course_edit<S: GradebookStore>(
    store: &Arc<S>,
    auth: &Auth,
    id: &str,
    form: CourseForm,
    json: bool,
) -> Result<()> {
    let session = open_session(store, auth).await?;
    let course = Gradebook::new(store.clone())
        .edit_course(&session, &CourseId(id.to_string()), form)
        .await
        .with_context(|| format!("Failed to edit course '{id}'"))?;
    close_session(store, session);
    if json {
        return print_json(&course);
    }
    println!("Updated {} ({})", course.code, course.id);
    Ok(())
}

async fn cmd_course_delete<S: GradebookStore>(store: &Arc<S>, auth: &Auth, id: &str) -> Result<()> {
    let session = open_session(store, auth).await?;
    Gradebook::new(store.clone())
        .delete_course(&session, &CourseId(id.to_string()))
        .await
        .with_context(|| format!("Failed to delete course '{id}'"))?;
    close_session(store, session);
    println!("Deleted course {id}");
    Ok(())
}

fn term(level: u16, semester: u8) -> Result<(Level, Semester)> {
    Ok((Level::try_from(level)?, Semester::try_from(semester)?))
}

async fn cmd_course_list<S: GradebookStore>(
    store: &Arc<S>,
    auth: &Auth,
    filter: Option<(u16, u8)>,
    json: bool,
) -> Result<()> {
    let filter = filter.map(|(l, s)| term(l, s)).transpose()?;
    let session = open_session(store, auth).await?;
    let courses = Gradebook::new(store.clone())
        .courses(&session, filter)
        .await
        .context("Failed to list courses")?;
    close_session(store, session);

    if json {
        return print_json(&courses);
    }
    if courses.is_empty() {
        println!("No courses recorded.");
        return Ok(());
    }
    for c in courses {
        println!(
            "{}  {:<8} {:<32} {}u  {}  L{}/S{}",
            c.id, c.code, c.title, c.unit, c.grade, c.level, c.semester
        );
    }
    Ok(())
}

async fn cmd_dashboard<S: GradebookStore>(store: &Arc<S>, auth: &Auth, json: bool) -> Result<()> {
    let session = open_session(store, auth).await?;
    let dashboard = Gradebook::new(store.clone())
        .dashboard(&session)
        .await
        .context("Failed to load dashboard")?;
    close_session(store, session);

    if json {
        return print_json(&dashboard);
    }
    let student = &dashboard.student;
    println!(
        "{} {} <{}>  {}",
        student.first_name, student.last_name, student.email, student.admission_mode
    );
    println!("CGPA: {:.2}", dashboard.standing.cgpa);
    println!();
    for s in &dashboard.standing.history {
        println!("  {}  GPA {:.2}  CGPA {:.2}", s.position, s.gpa, s.cgpa);
    }
    println!("Courses: {}", dashboard.courses.len());
    for c in &dashboard.courses {
        println!(
            "  {:<8} {}u  {}  L{}/S{}",
            c.code, c.unit, c.grade, c.level, c.semester
        );
    }
    Ok(())
}

async fn cmd_calculate<S: GradebookStore>(
    store: &Arc<S>,
    auth: &Auth,
    level: u16,
    semester: u8,
    out: Option<&Path>,
    json: bool,
) -> Result<()> {
    let (level, semester) = term(level, semester)?;
    let session = open_session(store, auth).await?;
    let sheet = Gradebook::new(store.clone())
        .calculate(&session, level, semester)
        .await
        .with_context(|| format!("Failed to calculate level {level} semester {semester}"))?;
    close_session(store, session);
    show_sheet(&sheet, out, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_state::{MemoryStore, StorageError};

    fn auth(email: &str) -> Auth {
        Auth {
            email: email.to_string(),
            password: "password123".to_string(),
        }
    }

    fn fields(code: &str, grade: &str, level: u16, semester: u8) -> CourseForm {
        CourseForm {
            code: code.to_string(),
            title: format!("{code} title"),
            unit: 3,
            grade: grade.to_string(),
            level,
            semester,
        }
    }

    async fn signed_up(email: &str) -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        let form = SignupForm {
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
            confirm_password: "password123".to_string(),
            admission_mode: AdmissionMode::StandardEntry,
        };
        cmd_signup(&store, form, 2, false).await.unwrap();
        store
    }

    #[test]
    fn course_spec_parsing() {
        let r = parse_course_spec("CSC101:3:A").unwrap();
        assert_eq!(r.code.as_deref(), Some("CSC101"));
        assert_eq!(r.unit, 3);

        let r = parse_course_spec("2: b").unwrap();
        assert!(r.code.is_none());
        assert_eq!(r.unit, 2);

        assert!(parse_course_spec("CSC101").is_err());
        assert!(parse_course_spec("CSC101:three:A").is_err());
        assert!(parse_course_spec("a:b:c:d").is_err());
    }

    #[test]
    fn gpa_from_specs() {
        let specs = vec!["CSC101:3:A".to_string(), "MTH101:2:B".to_string()];
        assert_eq!(gpa_for(&specs).unwrap(), 4.6);
        assert!(gpa_for(&["CSC101:0:A".to_string()]).is_err());
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gradebook", "gpa", "--course", "CSC101:3:A", "--json", "-vv",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Gpa { ref courses } if courses.len() == 1));
    }

    #[test]
    fn cli_parses_admission_mode() {
        let cli = Cli::try_parse_from([
            "gradebook", "trajectory", "--mode", "advanced", "--gpa", "4", "--gpa", "3.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Trajectory { mode, gpas } => {
                assert_eq!(mode, Some(AdmissionMode::AdvancedEntry));
                assert_eq!(gpas, vec![4.0, 3.5]);
            }
            _ => panic!("expected trajectory"),
        }
        assert!(Cli::try_parse_from(["gradebook", "trajectory", "--mode", "x", "--gpa", "4"])
            .is_err());
    }

    #[test]
    fn course_list_filter_needs_both_parts() {
        assert!(Cli::try_parse_from([
            "gradebook", "course", "list", "--email", "a@b.co", "--password", "p", "--level",
            "100",
        ])
        .is_err());
    }

    #[test]
    fn cgpa_command_rejects_bad_position() {
        assert!(cmd_cgpa(AdmissionMode::AdvancedEntry, 100, 1, 0.0, 4.0, false).is_err());
        assert!(cmd_cgpa(AdmissionMode::StandardEntry, 100, 2, 0.0, 4.0, false).is_ok());
    }

    #[test]
    fn result_command_writes_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("submission.json");
        std::fs::write(
            &input,
            r#"{"admission_mode":"standard_entry","level":100,"semester":2,"prev_cgpa":0.0,
               "courses":[{"code":"CSC102","unit":3,"grade":"A"},{"code":"MTH102","unit":2,"grade":"B"}]}"#,
        )
        .unwrap();
        let out = dir.path().join("out");
        cmd_result(&input, Some(&out), true).unwrap();

        let sheet: ResultSheet =
            serde_json::from_str(&std::fs::read_to_string(out.join("result.json")).unwrap())
                .unwrap();
        assert_eq!(sheet.gpa, 4.6);
        assert_eq!(sheet.cgpa, 2.3);
        assert!(out.join("result.md").exists());
    }

    #[test]
    fn result_command_rejects_incomplete_submission() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("submission.json");
        std::fs::write(&input, r#"{"level":100,"semester":1,"courses":[]}"#).unwrap();
        assert!(cmd_result(&input, None, false).is_err());
    }

    #[tokio::test]
    async fn stateful_commands_round_trip() {
        let store = signed_up("ada@example.com").await;
        let who = auth("ada@example.com");

        cmd_login(&store, &who, false).await.unwrap();
        cmd_course_add(&store, &who, fields("GST101", "A", 100, 1), false)
            .await
            .unwrap();
        cmd_course_add(&store, &who, fields("GST102", "C", 100, 2), false)
            .await
            .unwrap();
        cmd_course_list(&store, &who, Some((100, 1)), false).await.unwrap();

        cmd_calculate(&store, &who, 100, 1, None, false).await.unwrap();
        cmd_calculate(&store, &who, 100, 2, None, true).await.unwrap();
        cmd_dashboard(&store, &who, false).await.unwrap();

        let session = open_session(&store, &who).await.unwrap();
        let standing = Gradebook::new(store.clone())
            .dashboard(&session)
            .await
            .unwrap()
            .standing;
        assert_eq!(standing.version, 2);
        assert_eq!(standing.cgpa, 1.5);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let store = signed_up("ada@example.com").await;
        let mut who = auth("ada@example.com");
        who.password = "not-the-password".to_string();

        let err = cmd_dashboard(&store, &who, false).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StorageError>(),
            Some(StorageError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn edit_and_delete_by_id() {
        let store = signed_up("ada@example.com").await;
        let who = auth("ada@example.com");
        let session = open_session(&store, &who).await.unwrap();
        let book = Gradebook::new(store.clone());
        let course = book
            .add_course(&session, fields("CSC101", "B", 100, 1))
            .await
            .unwrap();

        cmd_course_edit(&store, &who, &course.id.0, fields("CSC101", "A", 100, 1), false)
            .await
            .unwrap();
        assert_eq!(book.courses(&session, None).await.unwrap()[0].grade.symbol(), "A");

        cmd_course_delete(&store, &who, &course.id.0).await.unwrap();
        assert!(book.courses(&session, None).await.unwrap().is_empty());
        assert!(cmd_course_delete(&store, &who, &course.id.0).await.is_err());
    }
}
