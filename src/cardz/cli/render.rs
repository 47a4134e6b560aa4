use cardz::api::{CmdMessage, MessageLevel};
use cardz::config::CardzConfig;
use cardz::model::{Card, CardState};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 14;
const SIZE_MARKER: &str = "▪";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_cards(cards: &[Card], reveal_mode: bool) {
    print!("{}", render_cards(cards, reveal_mode));
}

pub(super) fn print_config(config: &CardzConfig) {
    for key in CardzConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key.bold(), value);
        }
    }
}

pub(super) fn render_cards(cards: &[Card], reveal_mode: bool) -> String {
    let mut out = String::new();
    if reveal_mode {
        out.push_str(&format!(
            "{}\n\n",
            "Showing hidden cards. Keep with `cardz keep <id>`, finish with `cardz reveal --close`."
                .dimmed()
        ));
    }
    if cards.is_empty() {
        out.push_str("No cards.\n");
        return out;
    }
    for card in cards {
        out.push_str(&render_line(card));
        out.push('\n');
    }
    out
}

fn render_line(card: &Card) -> String {
    let id = format!("{:>width$}", card.id, width = ID_WIDTH - 1);
    let size = format!("{:<3}", SIZE_MARKER.repeat(card.layout_size() as usize));

    let tag = match card.state() {
        CardState::Shown => String::new(),
        CardState::HiddenDiscard => " [hidden]".to_string(),
        CardState::HiddenKeep => " [keep]".to_string(),
    };

    let fixed = ID_WIDTH + 1 + 3 + 1 + tag.width();
    let title_budget = LINE_WIDTH.saturating_sub(fixed);
    let title = truncate_to_width(&card.title, title_budget);

    let remaining = title_budget.saturating_sub(title.width());
    let description = if card.description.is_empty() || remaining < 6 {
        String::new()
    } else {
        let line = card.description.lines().next().unwrap_or("");
        format!("  {}", truncate_to_width(line, remaining - 2))
    };

    let title = if card.is_hidden() {
        title.dimmed().to_string()
    } else {
        title.bold().to_string()
    };
    let tag = match card.state() {
        CardState::HiddenKeep => tag.yellow().to_string(),
        _ => tag.dimmed().to_string(),
    };

    format!(
        "{} {} {}{}{}",
        id.cyan(),
        size,
        title,
        description.dimmed(),
        tag
    )
}

fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn empty_board() {
        plain();
        assert_eq!(render_cards(&[], false), "No cards.\n");
    }

    #[test]
    fn lines_carry_id_title_and_description() {
        plain();
        let card = Card::new(42, "Groceries".into(), "milk, eggs".into(), 2);
        let out = render_cards(&[card], false);
        assert!(out.contains("42"));
        assert!(out.contains("▪▪"));
        assert!(out.contains("Groceries  milk, eggs"));
        assert!(!out.contains("[hidden]"));
    }

    #[test]
    fn reveal_mode_marks_hidden_cards() {
        plain();
        let shown = Card::new(1, "A".into(), "".into(), 1);
        let hidden: Card =
            serde_json::from_str(r#"{"id": 2, "title": "B", "hidden": true}"#).unwrap();
        let kept: Card =
            serde_json::from_str(r#"{"id": 3, "title": "C", "hidden": true, "keep": true}"#)
                .unwrap();

        let out = render_cards(&[shown, hidden, kept], true);

        assert!(out.starts_with("Showing hidden cards"));
        assert!(out.contains("B [hidden]"));
        assert!(out.contains("C [keep]"));
    }

    #[test]
    fn oversized_cards_render_as_largest() {
        plain();
        let card: Card =
            serde_json::from_str(r#"{"id": 9, "title": "Wide", "size": 4000000000}"#).unwrap();
        let out = render_cards(&[card], false);
        assert!(out.contains("▪▪▪ Wide"));
    }

    #[test]
    fn long_titles_are_truncated_to_width() {
        let long = "x".repeat(300);
        let cut = truncate_to_width(&long, 20);
        assert_eq!(cut.width(), 20);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_to_width("short", 20), "short");
    }

    #[test]
    fn wide_chars_count_double() {
        let cut = truncate_to_width("日本語のタイトル", 7);
        assert!(cut.width() <= 7);
    }
}
