//! Text blocks printed by the console.

use colored::Colorize;

use crate::domain::classification::{ClassificationResult, DecisionAttribute, StakesLabel};
use crate::domain::walkthrough::{FrameworkStep, ANTIFRAGILITY_PRINCIPLES};

use super::screen::Screen;

pub const APP_TITLE: &str = "AIMED Decision Framework for Construction Leaders";

pub fn heading(text: &str) -> String {
    format!("\n{}\n", text.bright_cyan().bold())
}

pub fn main_menu() -> String {
    let mut out = heading("Navigate");
    for screen in Screen::menu() {
        out.push_str(&format!("  {:>2}  {}\n", screen.menu_key().yellow(), screen.title()));
    }
    out
}

/// Framework overview and antifragility principles.
pub fn home() -> String {
    let mut out = heading(APP_TITLE);
    out.push_str(
        "This tool helps construction leaders make smarter decisions using the AIMED \
         framework, with confidence in tackling complexity and uncertainty.\n",
    );

    out.push_str(&heading("About the AIMED Framework"));
    out.push_str("Five steps keep decisions both robust and adaptable:\n");
    for step in FrameworkStep::all() {
        out.push_str(&format!(
            "  {}. {}: {}\n",
            step.number(),
            step.title().bold(),
            step.description()
        ));
    }

    out.push_str(&heading("Antifragility Principles"));
    out.push_str(
        "Antifragile systems thrive under stress, turning challenges into \
         opportunities for growth.\n",
    );
    for (name, description) in ANTIFRAGILITY_PRINCIPLES {
        out.push_str(&format!("  - {}: {}\n", name.bold(), description));
    }
    out
}

/// Numbered option list for one attribute selector.
pub fn selector<A: DecisionAttribute>() -> String {
    let mut out = format!("{}\n", A::NAME.bold());
    for (i, level) in A::all().iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, level.label()));
    }
    out
}

pub fn classification(result: &ClassificationResult) -> String {
    let label = match result.label() {
        StakesLabel::LowStakes => result.label().display_name().green(),
        StakesLabel::ModerateStakes => result.label().display_name().yellow(),
        StakesLabel::HighStakes => result.label().display_name().red(),
    };
    format!(
        "\nThis decision is classified as {} (score {}).\nRecommended approach: {}\n",
        label.bold(),
        result.score(),
        result.action_plan()
    )
}

pub fn step_header(step: FrameworkStep) -> String {
    format!(
        "{}{}\n",
        heading(&format!("Step {}: {}", step.number(), step.title())),
        step.description().dimmed()
    )
}

pub fn checklist(step: FrameworkStep) -> String {
    step.checklist()
        .iter()
        .map(|item| format!("  [ ] {}\n", item))
        .collect()
}

pub fn walkthrough_actions() -> String {
    let mut out = heading("Next");
    for (key, action) in [
        ("a", "Get AI advice"),
        ("p", "Export PDF report"),
        ("h", "Save HTML preview"),
        ("e", "Edit answers"),
        ("b", "Back to menu"),
    ] {
        out.push_str(&format!("  {:>2}  {}\n", key.yellow(), action));
    }
    out
}

pub fn notice(message: &str) -> String {
    format!("{} {}\n", "!".yellow().bold(), message)
}

pub fn failure(message: &str) -> String {
    format!("{} {}\n", "x".red().bold(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::{ClassificationEngine, ImpactDuration};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn home_lists_steps_and_principles() {
        plain();
        let text = home();

        assert!(text.contains("1. Assess the Situation: Define the problem"));
        assert!(text.contains("5. Debrief and Improve: Review outcomes"));
        assert!(text.contains("- Feedback Loops: Build adaptive processes"));
        assert!(text.contains("- Opportunities in Uncertainty:"));
    }

    #[test]
    fn selector_numbers_levels_from_one() {
        plain();
        let text = selector::<ImpactDuration>();

        assert!(text.starts_with("Impact Duration\n"));
        assert!(text.contains("  1. Short-term (days or weeks)\n"));
        assert!(text.contains("  3. Long-term (months or years)\n"));
    }

    #[test]
    fn classification_shows_label_score_and_plan() {
        plain();
        let result = ClassificationEngine::default()
            .classify_labels("long", "significant", "broad_external")
            .unwrap();
        let text = classification(&result);

        assert!(text.contains("classified as High Stakes (score 9)"));
        assert!(text.contains(result.action_plan()));
    }

    #[test]
    fn checklist_only_for_debrief() {
        assert!(checklist(FrameworkStep::Assess).is_empty());
        assert_eq!(checklist(FrameworkStep::Debrief).lines().count(), 3);
    }
}
