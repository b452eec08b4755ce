//! Screens of the console front end.

use std::fmt;

/// Every place the console can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Classification,
    Walkthrough,
    CaseStudy,
    Quit,
}

impl Screen {
    /// Screens offered on the main menu, in menu order.
    pub fn menu() -> &'static [Screen] {
        &[
            Screen::Home,
            Screen::Classification,
            Screen::Walkthrough,
            Screen::CaseStudy,
            Screen::Quit,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "About the AIMED Framework",
            Screen::Classification => "Decision Classification Tool",
            Screen::Walkthrough => "AIMED Walkthrough",
            Screen::CaseStudy => "Case Study Builder",
            Screen::Quit => "Quit",
        }
    }

    /// Key typed on the main menu to reach this screen.
    pub fn menu_key(&self) -> &'static str {
        match self {
            Screen::Home => "1",
            Screen::Classification => "2",
            Screen::Walkthrough => "3",
            Screen::CaseStudy => "4",
            Screen::Quit => "q",
        }
    }

    /// Resolves a main menu choice; accepts the key or the title.
    pub fn from_choice(choice: &str) -> Option<Screen> {
        let choice = choice.trim().to_lowercase();
        if choice == "quit" || choice == "exit" {
            return Some(Screen::Quit);
        }
        Self::menu()
            .iter()
            .copied()
            .find(|screen| choice == screen.menu_key() || choice == screen.title().to_lowercase())
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_key_resolves_to_its_screen() {
        for screen in Screen::menu() {
            assert_eq!(Screen::from_choice(screen.menu_key()), Some(*screen));
        }
    }

    #[test]
    fn titles_and_quit_words_are_accepted() {
        assert_eq!(
            Screen::from_choice("  case study builder "),
            Some(Screen::CaseStudy)
        );
        assert_eq!(Screen::from_choice("EXIT"), Some(Screen::Quit));
    }

    #[test]
    fn unknown_choice_is_none() {
        assert_eq!(Screen::from_choice("7"), None);
        assert_eq!(Screen::from_choice(""), None);
    }
}
