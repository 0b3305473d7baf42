//! Console formatting for conversation messages

use colored::Colorize;
use nutri_domain::{ChatMessage, RecipeProfile, Role, Source};

/// Cells in a source confidence bar.
pub const CONFIDENCE_BAR_WIDTH: usize = 20;

/// Shown in place of an empty message body.
pub const NO_RESPONSE_TEXT: &str = "No response received";

/// Formats conversation messages for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn role_label(role: Role) -> &'static str {
        match role {
            Role::User => "You",
            Role::Assistant => "Nutri",
        }
    }

    /// Format a message with its role label and any source cards
    pub fn format_message(message: &ChatMessage) -> String {
        let label = Self::role_label(message.role);
        let label = match message.role {
            Role::User => label.cyan().bold(),
            Role::Assistant => label.green().bold(),
        };

        let text = if message.content.trim().is_empty() {
            NO_RESPONSE_TEXT
        } else {
            message.content.as_str()
        };

        let mut output = format!("{}\n{}\n", label, Self::indent(text, "  "));
        if !message.sources.is_empty() {
            output.push('\n');
            output.push_str(&Self::format_sources(&message.sources));
        }
        output
    }

    /// Format the "Sources Used" block
    pub fn format_sources(sources: &[Source]) -> String {
        let mut output = format!("  {}\n", "Sources Used".yellow().bold());
        for (index, source) in sources.iter().enumerate() {
            output.push_str(&Self::format_source_card(index + 1, source));
        }
        output
    }

    /// One source card: numbered title with match percentage, quoted
    /// snippet, then the confidence bar.
    pub fn format_source_card(number: usize, source: &Source) -> String {
        format!(
            "  {} {}  {}\n    {}\n    {}\n",
            format!("#{}", number).dimmed(),
            source.title().bold(),
            format!("{}% match", source.percentage()).green(),
            format!("\"{}\"", source.snippet()).italic(),
            Self::confidence_bar(source.confidence()).green()
        )
    }

    /// A fixed-width bar filled in proportion to `confidence` (0.0-1.0).
    pub fn confidence_bar(confidence: f64) -> String {
        let ratio = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let filled = (ratio * CONFIDENCE_BAR_WIDTH as f64).round() as usize;
        format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(CONFIDENCE_BAR_WIDTH - filled)
        )
    }

    /// The assistant's opening line, shown at startup and after `/new`
    pub fn greeting() -> String {
        format!(
            "{}\n  Hi! Tell me which ingredients you have and I'll suggest a recipe.\n  Start a line with \"search:\" to look up recipes instead.\n",
            Self::role_label(Role::Assistant).green().bold()
        )
    }

    pub fn separator() -> String {
        "─".repeat(60).dimmed().to_string()
    }

    /// Format the recipe form fields
    pub fn format_profile(profile: &RecipeProfile) -> String {
        format!(
            "  {:<12} {}\n  {:<12} {}\n  {:<12} {}\n  {:<12} {}",
            "Goal:".cyan(),
            profile.goal,
            "Dislikes:".cyan(),
            profile.dislikes,
            "Diet:".cyan(),
            profile.dietary_constraints,
            "Innovation:".cyan(),
            profile.innovation_level
        )
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_bar_width_and_fill() {
        assert_eq!(ConsoleFormatter::confidence_bar(0.0), "░".repeat(20));
        assert_eq!(ConsoleFormatter::confidence_bar(1.0), "█".repeat(20));
        assert_eq!(
            ConsoleFormatter::confidence_bar(0.5),
            format!("{}{}", "█".repeat(10), "░".repeat(10))
        );
        assert_eq!(ConsoleFormatter::confidence_bar(7.0), "█".repeat(20));
        assert_eq!(ConsoleFormatter::confidence_bar(f64::NAN), "░".repeat(20));
    }

    #[test]
    fn test_source_card_contents() {
        let source = Source::new("Chicken Fried Rice", "Cook rice", 0.82);
        let card = ConsoleFormatter::format_source_card(1, &source);

        assert!(card.contains("#1"));
        assert!(card.contains("Chicken Fried Rice"));
        assert!(card.contains("82% match"));
        assert!(card.contains("\"Cook rice\""));
    }

    #[test]
    fn test_message_lists_sources_in_order() {
        let message = ChatMessage::assistant("Try stir-fry").with_sources(vec![
            Source::new("Fried Rice", "Cook rice", 0.9),
            Source::new("Stir-fry", "", 0.4),
        ]);
        let output = ConsoleFormatter::format_message(&message);

        assert!(output.contains("Nutri"));
        assert!(output.contains("  Try stir-fry"));
        assert!(output.contains("Sources Used"));
        let first = output.find("Fried Rice").unwrap();
        let second = output.find("#2").unwrap();
        assert!(first < second);
        assert!(output.contains("No preview available"));
    }

    #[test]
    fn test_empty_message_placeholder() {
        let output = ConsoleFormatter::format_message(&ChatMessage::assistant("   "));
        assert!(output.contains(NO_RESPONSE_TEXT));
        assert!(!output.contains("Sources Used"));
    }

    #[test]
    fn test_user_label() {
        let output = ConsoleFormatter::format_message(&ChatMessage::user("eggs"));
        assert!(output.contains("You"));
        assert!(output.contains("eggs"));
    }

    #[test]
    fn test_indent_multiline() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
