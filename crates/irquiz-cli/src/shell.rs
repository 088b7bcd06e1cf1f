//! Line-oriented interactive shell.
//!
//! Reads one command per line, maps it onto engine operations and prints the
//! resulting screen. End of input always exits cleanly.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;

use irquiz_core::config::QuizConfig;
use irquiz_core::evaluator::ScoreReport;
use irquiz_core::generator::generate_with;
use irquiz_core::{evaluate, Phase, QuizSession, Taxonomy};
use irquiz_report::study::format_phase_details;
use irquiz_report::text::{recommendation_line, review_blocks, score_line};

const RESULTS_HINT: &str = "[s]ave  [n]ew test  [h]ome  e[x]it";

/// Which screen the shell is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Learn,
    Quiz,
    Results,
}

/// Answer to a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Confirm {
    Yes,
    No,
    Save,
}

enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    input: R,
    out: W,
    taxonomy: Taxonomy,
    options: Vec<Phase>,
    config: QuizConfig,
    rng: StdRng,
    screen: Screen,
    /// Present while a quiz is running or its results are shown.
    session: Option<QuizSession>,
    report: Option<ScoreReport>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, taxonomy: Taxonomy, config: QuizConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let options = taxonomy.phases().collect();
        Self {
            input,
            out,
            taxonomy,
            options,
            config,
            rng,
            screen: Screen::Home,
            session: None,
            report: None,
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(mut self, start: Screen) -> Result<()> {
        match start {
            Screen::Quiz => self.start_quiz()?,
            Screen::Learn => self.screen = Screen::Learn,
            Screen::Home | Screen::Results => self.screen = Screen::Home,
        }
        self.render()?;

        while let Some(line) = self.read_line()? {
            let flow = match self.screen {
                Screen::Home => self.on_home(&line)?,
                Screen::Learn => self.on_learn(&line)?,
                Screen::Quiz => self.on_quiz(&line)?,
                Screen::Results => self.on_results(&line)?,
            };
            if let Flow::Exit = flow {
                break;
            }
        }

        writeln!(self.out, "Goodbye.")?;
        self.out.flush()?;
        Ok(())
    }

    fn on_home(&mut self, line: &str) -> Result<Flow> {
        match line {
            "l" | "learn" => {
                self.screen = Screen::Learn;
                self.render()?;
            }
            "t" | "test" => {
                self.start_quiz()?;
                self.render()?;
            }
            "x" | "exit" | "q" => return Ok(Flow::Exit),
            other => self.unrecognized(other)?,
        }
        Ok(Flow::Continue)
    }

    fn on_learn(&mut self, line: &str) -> Result<Flow> {
        match line {
            "h" | "home" => self.go_home()?,
            "x" | "exit" | "q" => return Ok(Flow::Exit),
            other => match self.option_for(other) {
                Some(phase) => {
                    if let Some(entry) = self.taxonomy.get(phase) {
                        writeln!(self.out, "\n{}", format_phase_details(entry))?;
                    }
                    self.prompt("Pick another phase, [h]ome, e[x]it")?;
                }
                None => self.unrecognized(other)?,
            },
        }
        Ok(Flow::Continue)
    }

    fn on_quiz(&mut self, line: &str) -> Result<Flow> {
        let picked = self.option_for(line);
        let Some(session) = self.session.as_mut() else {
            self.go_home()?;
            return Ok(Flow::Continue);
        };

        match line {
            "n" | "next" => {
                if session.is_last() {
                    writeln!(self.out, "Already at the last question.")?;
                }
                session.go_next();
                self.render()?;
            }
            "p" | "prev" | "previous" => {
                if session.is_first() {
                    writeln!(self.out, "Already at the first question.")?;
                }
                session.go_prev();
                self.render()?;
            }
            "e" | "evaluate" => {
                let answer =
                    self.confirm("Are you sure you want to finish and evaluate the quiz?", false)?;
                if answer == Confirm::Yes {
                    self.evaluate_session();
                }
                self.render()?;
            }
            "s" | "save" => {
                self.save_results()?;
                self.prompt(RESULTS_HINT)?;
            }
            "h" | "home" => {
                match self.confirm("Are you sure you want to exit the quiz?", true)? {
                    Confirm::Yes => self.go_home()?,
                    Confirm::Save => {
                        if self.save_results()? {
                            self.go_home()?;
                        } else {
                            self.render()?;
                        }
                    }
                    Confirm::No => self.render()?,
                }
            }
            "x" | "exit" | "q" => return Ok(Flow::Exit),
            other => match picked {
                Some(phase) => {
                    session.record_answer(phase);
                    self.render()?;
                }
                None => self.unrecognized(other)?,
            },
        }
        Ok(Flow::Continue)
    }

    fn on_results(&mut self, line: &str) -> Result<Flow> {
        match line {
            "s" | "save" => {
                self.save_results()?;
                self.prompt(RESULTS_HINT)?;
            }
            "n" | "new" => {
                match self.confirm("Are you sure you want to start a new test?", true)? {
                    Confirm::Yes => {
                        self.start_quiz()?;
                        self.render()?;
                    }
                    Confirm::Save => {
                        if self.save_results()? {
                            self.start_quiz()?;
                        }
                        self.render()?;
                    }
                    Confirm::No => self.render()?,
                }
            }
            "h" | "home" => {
                if self.confirm("Are you sure you want to return to the main menu?", false)?
                    == Confirm::Yes
                {
                    self.go_home()?;
                } else {
                    self.render()?;
                }
            }
            "x" | "exit" | "q" => return Ok(Flow::Exit),
            other => self.unrecognized(other)?,
        }
        Ok(Flow::Continue)
    }

    /// Begin a new quiz, replacing any previous session.
    ///
    /// Stays on the home screen when the taxonomy has nothing to ask.
    fn start_quiz(&mut self) -> Result<()> {
        let questions = generate_with(&self.taxonomy, &mut self.rng);
        self.report = None;
        if questions.is_empty() {
            self.session = None;
            self.screen = Screen::Home;
            writeln!(
                self.out,
                "The taxonomy has no activities, so there is nothing to quiz on."
            )?;
            return Ok(());
        }
        self.session = Some(QuizSession::start(questions));
        self.screen = Screen::Quiz;
        Ok(())
    }

    fn evaluate_session(&mut self) {
        if let Some(session) = &self.session {
            self.report = Some(evaluate(session));
            self.screen = Screen::Results;
        }
    }

    fn go_home(&mut self) -> Result<()> {
        self.session = None;
        self.report = None;
        self.screen = Screen::Home;
        self.render()
    }

    /// Ask for a destination and write the report.
    ///
    /// Saving from the quiz screen evaluates first. Returns `true` only when
    /// the file was written.
    fn save_results(&mut self) -> Result<bool> {
        if self.screen == Screen::Quiz {
            self.evaluate_session();
            self.render()?;
        }
        if self.report.is_none() {
            return Ok(false);
        }

        let default_path = self.config.default_export_path();
        write!(
            self.out,
            "Save results to [{}] ('-' to cancel): ",
            default_path.display()
        )?;
        self.out.flush()?;

        let path = match self.read_line()? {
            None => return Ok(false),
            Some(line) if line == "-" => {
                writeln!(self.out, "Save cancelled.")?;
                return Ok(false);
            }
            Some(line) if line.is_empty() => default_path,
            Some(line) => PathBuf::from(line),
        };

        let Some(report) = &self.report else {
            return Ok(false);
        };
        let now = chrono::Local::now().naive_local();
        match irquiz_report::write_report(report, &path, now) {
            Ok(_) => {
                writeln!(self.out, "Results saved to {}", path.display())?;
                Ok(true)
            }
            Err(e) => {
                tracing::warn!("export failed: {e:#}");
                writeln!(self.out, "Could not save file: {e:#}")?;
                Ok(false)
            }
        }
    }

    fn confirm(&mut self, message: &str, offer_save: bool) -> Result<Confirm> {
        if offer_save {
            writeln!(self.out, "{message}")?;
            write!(
                self.out,
                "Your current results will be lost unless saved. [y]es / [n]o / [s]ave results: "
            )?;
        } else {
            write!(self.out, "{message} [y]es / [n]o: ")?;
        }
        self.out.flush()?;

        let answer = match self.read_line()?.as_deref() {
            Some("y" | "yes") => Confirm::Yes,
            Some("s" | "save") if offer_save => Confirm::Save,
            _ => Confirm::No,
        };
        Ok(answer)
    }

    /// Map a 1-based option number onto a phase.
    fn option_for(&self, line: &str) -> Option<Phase> {
        let n: usize = line.parse().ok()?;
        n.checked_sub(1).and_then(|i| self.options.get(i)).copied()
    }

    fn render(&mut self) -> Result<()> {
        match self.screen {
            Screen::Home => self.render_home(),
            Screen::Learn => self.render_learn(),
            Screen::Quiz => self.render_quiz(),
            Screen::Results => self.render_results(),
        }
    }

    fn render_home(&mut self) -> Result<()> {
        writeln!(self.out, "\nIncident Response Learning Tool")?;
        writeln!(self.out, "  [l] Learn about the IR phases")?;
        writeln!(self.out, "  [t] Test your knowledge")?;
        writeln!(self.out, "  [x] Exit")?;
        self.prompt("Choose an option")
    }

    fn render_learn(&mut self) -> Result<()> {
        writeln!(self.out, "\nLearn About the Phases")?;
        for (i, phase) in self.options.iter().enumerate() {
            writeln!(self.out, "  {}. {}", i + 1, phase)?;
        }
        self.prompt("Pick a phase number for details, [h]ome, e[x]it")
    }

    fn render_quiz(&mut self) -> Result<()> {
        let Some(session) = &self.session else {
            return Ok(());
        };
        let index = session.current_index();
        let question = session.current_question();
        let saved = session.answer_for(index);

        writeln!(self.out, "\nQuestion {} of {}", index + 1, session.len())?;
        writeln!(self.out, "Activity: '{}'", question.activity)?;
        writeln!(self.out, "\nWhich phase does this activity belong to?")?;
        for (i, phase) in self.options.iter().enumerate() {
            let mark = if saved == Some(*phase) { "x" } else { " " };
            writeln!(self.out, "  [{mark}] {}. {}", i + 1, phase)?;
        }
        writeln!(
            self.out,
            "Answered {} of {}",
            session.answered_count(),
            session.len()
        )?;

        let mut nav = Vec::new();
        if !session.is_first() {
            nav.push("[p]revious");
        }
        if !session.is_last() {
            nav.push("[n]ext");
        }
        nav.extend(["[e]valuate", "[s]ave", "[h]ome", "e[x]it"]);
        let hint = format!("[1-{}] answer  {}", self.options.len(), nav.join("  "));
        self.prompt(&hint)
    }

    fn render_results(&mut self) -> Result<()> {
        let Some(report) = &self.report else {
            return Ok(());
        };

        writeln!(self.out, "\nQuiz Evaluation")?;
        writeln!(self.out, "{}", score_line(report))?;
        writeln!(self.out, "{}", recommendation_line(report))?;

        if !report.per_phase.is_empty() {
            let mut table = Table::new();
            table.set_header(vec!["Phase", "Correct", "Missed"]);
            for (phase, tally) in &report.per_phase {
                table.add_row(vec![
                    Cell::new(phase),
                    Cell::new(tally.correct),
                    Cell::new(tally.missed),
                ]);
            }
            writeln!(self.out, "\n{table}")?;
        }

        writeln!(self.out, "\n--- Detailed Review ---\n")?;
        for block in review_blocks(report) {
            writeln!(self.out, "{block}\n")?;
        }
        self.prompt(RESULTS_HINT)
    }

    fn unrecognized(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "Unrecognized command: '{line}'")?;
        self.out.flush()?;
        Ok(())
    }

    fn prompt(&mut self, hint: &str) -> Result<()> {
        write!(self.out, "{hint}\n> ")?;
        self.out.flush()?;
        Ok(())
    }

    /// Next trimmed input line, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
