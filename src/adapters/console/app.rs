//! Console application loop.

use std::io::Write;
use std::path::PathBuf;

use colored::Colorize;
use tracing::{debug, info};

use crate::application::{
    BuildCaseStudyCommand, BuildCaseStudyHandler, ClassifyDecisionCommand,
    ClassifyDecisionHandler, ExportReportHandler, RequestAdviceHandler,
};
use crate::domain::classification::{
    CostOfReversal, DecisionAttribute, ImpactDuration, StakeholderInvolvement,
};
use crate::domain::foundation::ErrorCode;
use crate::domain::session::DecisionSession;
use crate::domain::walkthrough::{FrameworkStep, WalkthroughField};

use super::input::{ConsoleError, LineSource};
use super::render;
use super::screen::Screen;

const PROMPT: &str = "> ";

/// Use cases the console drives.
pub struct ConsoleHandlers {
    pub classify: ClassifyDecisionHandler,
    pub advice: RequestAdviceHandler,
    pub report: ExportReportHandler,
    pub case_study: BuildCaseStudyHandler,
}

/// Interactive front end over one decision session.
pub struct ConsoleApp<L: LineSource, W: Write> {
    session: DecisionSession,
    handlers: ConsoleHandlers,
    output_dir: PathBuf,
    input: L,
    out: W,
}

impl<L: LineSource, W: Write> ConsoleApp<L, W> {
    pub fn new(handlers: ConsoleHandlers, output_dir: PathBuf, input: L, out: W) -> Self {
        Self {
            session: DecisionSession::start(),
            handlers,
            output_dir,
            input,
            out,
        }
    }

    pub fn session(&self) -> &DecisionSession {
        &self.session
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Runs until the user quits or input ends.
    pub async fn run(&mut self) -> Result<(), ConsoleError> {
        info!(session_id = %self.session.id(), "Session started");

        let mut screen = Screen::Home;
        loop {
            debug!(screen = ?screen, "Entering screen");
            match screen {
                Screen::Home => self.write(&render::home())?,
                Screen::Classification => self.classification_screen()?,
                Screen::Walkthrough => self.walkthrough_screen().await?,
                Screen::CaseStudy => self.case_study_screen()?,
                Screen::Quit => break,
            }
            screen = self.choose_screen()?;
        }

        self.write("Goodbye!\n")?;
        info!(session_id = %self.session.id(), "Session ended");
        Ok(())
    }

    fn choose_screen(&mut self) -> Result<Screen, ConsoleError> {
        loop {
            self.write(&render::main_menu())?;
            let Some(choice) = self.input.read_line(PROMPT)? else {
                return Ok(Screen::Quit);
            };
            match Screen::from_choice(&choice) {
                Some(screen) => return Ok(screen),
                None => self.write(&render::notice(&format!("Unknown choice: {}", choice.trim())))?,
            }
        }
    }

    // ════════════════════════════════════════════════════════════════════
    // Classification
    // ════════════════════════════════════════════════════════════════════

    fn classification_screen(&mut self) -> Result<(), ConsoleError> {
        self.write(&render::heading(Screen::Classification.title()))?;
        self.write("Rate the decision on three attributes. Type a number or a level name.\n\n")?;

        let Some(impact) = self.select::<ImpactDuration>()? else {
            return Ok(());
        };
        let Some(cost) = self.select::<CostOfReversal>()? else {
            return Ok(());
        };
        let Some(stakeholders) = self.select::<StakeholderInvolvement>()? else {
            return Ok(());
        };

        let cmd = ClassifyDecisionCommand {
            impact,
            cost,
            stakeholders,
        };
        match self.handlers.classify.handle(&mut self.session, cmd) {
            Ok(result) => self.write(&render::classification(&result)),
            Err(err) => self.write(&render::failure(&err.to_string())),
        }
    }

    /// Reads one selector value, re-asking until it names a level.
    fn select<A: DecisionAttribute>(&mut self) -> Result<Option<String>, ConsoleError> {
        loop {
            self.write(&render::selector::<A>())?;
            let Some(line) = self.input.read_line(PROMPT)? else {
                return Ok(None);
            };
            let raw = line.trim();

            let by_number = raw
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| A::all().get(i));
            if let Some(level) = by_number {
                return Ok(Some(level.key().to_string()));
            }
            if A::parse_level(raw).is_ok() {
                return Ok(Some(raw.to_string()));
            }
            self.write(&render::notice(&format!(
                "'{}' is not one of the {} options.",
                raw,
                A::NAME
            )))?;
        }
    }

    // ════════════════════════════════════════════════════════════════════
    // Walkthrough
    // ════════════════════════════════════════════════════════════════════

    async fn walkthrough_screen(&mut self) -> Result<(), ConsoleError> {
        self.write(&render::heading(Screen::Walkthrough.title()))?;
        match self.session.classification(self.handlers.classify.engine()) {
            Some(result) => self.write(&render::classification(&result))?,
            None => self.write(&render::notice(
                "Decision not classified yet. The Decision Classification Tool sets the stakes.",
            ))?,
        }

        if !self.collect_answers()? {
            return Ok(());
        }

        loop {
            self.write(&render::walkthrough_actions())?;
            let Some(choice) = self.input.read_line(PROMPT)? else {
                return Ok(());
            };
            match choice.trim().to_lowercase().as_str() {
                "a" => self.request_advice().await?,
                "p" => self.export_pdf().await?,
                "h" => self.save_preview().await?,
                "e" => {
                    if !self.collect_answers()? {
                        return Ok(());
                    }
                }
                "b" => return Ok(()),
                other => self.write(&render::notice(&format!("Unknown choice: {}", other)))?,
            }
        }
    }

    /// Walks the five steps. Returns false if input ended midway.
    fn collect_answers(&mut self) -> Result<bool, ConsoleError> {
        for &step in FrameworkStep::all() {
            self.write(&render::step_header(step))?;
            for field in step.fields() {
                if !self.ask(field)? {
                    return Ok(false);
                }
            }
            let checklist = render::checklist(step);
            if !checklist.is_empty() {
                self.write(&checklist)?;
            }
        }
        Ok(true)
    }

    fn ask(&mut self, field: WalkthroughField) -> Result<bool, ConsoleError> {
        let current = self.session.answers().get(field).trim().to_string();
        self.write(&format!("{}\n", field.prompt().bold()))?;
        if !current.is_empty() {
            self.write(&format!("{} {}\n", "(Enter keeps)".dimmed(), current))?;
        }

        let Some(line) = self.input.read_line(PROMPT)? else {
            return Ok(false);
        };
        let answer = line.trim();
        if !answer.is_empty() || current.is_empty() {
            self.session.set_answer(field, answer);
        }
        Ok(true)
    }

    async fn request_advice(&mut self) -> Result<(), ConsoleError> {
        self.write("Requesting advice...\n")?;
        match self.handlers.advice.handle(&mut self.session).await {
            Ok(advice) => {
                self.write(&render::heading("AI Advice"))?;
                self.write(&format!("{}\n", advice.as_str()))
            }
            Err(err) if err.code() == ErrorCode::ServiceError => {
                self.write(&render::failure(&err.user_message()))
            }
            Err(err) => {
                self.write(&render::notice(&err.user_message()))?;
                if err.code() == ErrorCode::IncompleteInput {
                    let missing: Vec<&str> = self
                        .session
                        .answers()
                        .missing_fields()
                        .iter()
                        .map(|field| field.display_name())
                        .collect();
                    self.write(&format!("Missing: {}\n", missing.join(", ")))?;
                }
                Ok(())
            }
        }
    }

    async fn export_pdf(&mut self) -> Result<(), ConsoleError> {
        let saved = match self.handlers.report.export(&self.session).await {
            Ok(document) => self.handlers.report.save(&document, &self.output_dir).await,
            Err(err) => Err(err),
        };
        match saved {
            Ok(path) => self.write(&format!("Report saved to {}\n", path.display())),
            Err(err) => self.write(&render::failure(&err.to_string())),
        }
    }

    async fn save_preview(&mut self) -> Result<(), ConsoleError> {
        let saved = match self.handlers.report.preview_html(&self.session).await {
            Ok(document) => self.handlers.report.save(&document, &self.output_dir).await,
            Err(err) => Err(err),
        };
        match saved {
            Ok(path) => self.write(&format!("Preview saved to {}\n", path.display())),
            Err(err) => self.write(&render::failure(&err.to_string())),
        }
    }

    // ════════════════════════════════════════════════════════════════════
    // Case study
    // ════════════════════════════════════════════════════════════════════

    fn case_study_screen(&mut self) -> Result<(), ConsoleError> {
        self.write(&render::heading("Build Your Own Case Study"))?;
        self.write("Document your decision-making process using the AIMED framework.\n")?;

        let mut values = Vec::with_capacity(4);
        for label in [
            "Case Study Title",
            "Describe the Decision Context",
            "Steps Taken (using AIMED)",
            "Outcomes and Lessons Learned",
        ] {
            self.write(&format!("{}\n", label.bold()))?;
            let Some(line) = self.input.read_line(PROMPT)? else {
                return Ok(());
            };
            values.push(line.trim().to_string());
        }

        let mut values = values.into_iter();
        let cmd = BuildCaseStudyCommand {
            title: values.next().unwrap_or_default(),
            context: values.next().unwrap_or_default(),
            steps_taken: values.next().unwrap_or_default(),
            outcomes: values.next().unwrap_or_default(),
        };

        match self.handlers.case_study.handle(cmd) {
            Ok(result) => {
                self.write(&render::heading("Your Case Study"))?;
                self.write(&result.markdown)
            }
            Err(err) => self.write(&render::notice(&err.to_string())),
        }
    }

    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
