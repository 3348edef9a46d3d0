use num_enum::TryFromPrimitive;

/// A numbered console menu whose entries map onto an enum.
pub trait Menu: TryFromPrimitive<Primitive = u8> + Copy {
    const TITLE: &'static str;
    const ITEMS: &'static [&'static str];
    const PROMPT: &'static str;

    fn lines() -> Vec<String> {
        let mut lines = vec![format!("\n{}", Self::TITLE)];
        lines.extend(
            Self::ITEMS
                .iter()
                .enumerate()
                .map(|(i, item)| format!("{}. {item}", i + 1)),
        );
        lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuError {
    NotANumber,
    OutOfRange(i64),
}

impl MenuError {
    pub fn message<M: Menu>(&self) -> String {
        match self {
            MenuError::NotANumber => {
                format!("Error: enter a number from 1 to {}!", M::ITEMS.len())
            }
            MenuError::OutOfRange(_) => "Invalid choice! Try again.".to_string(),
        }
    }
}

pub fn parse_choice<M: Menu>(input: &str) -> Result<M, MenuError> {
    let number = input
        .trim()
        .parse::<i64>()
        .map_err(|_| MenuError::NotANumber)?;

    u8::try_from(number)
        .ok()
        .and_then(|n| M::try_from_primitive(n).ok())
        .ok_or(MenuError::OutOfRange(number))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum SourceChoice {
    File = 1,
    Camera = 2,
    Exit = 3,
}

impl Menu for SourceChoice {
    const TITLE: &'static str = "=== Image Source ===";
    const ITEMS: &'static [&'static str] =
        &["Load from file", "Capture from camera", "Exit"];
    const PROMPT: &'static str = "Choose image source (1-3): ";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum Action {
    ShowChannel = 1,
    Blur = 2,
    Grayscale = 3,
    Rectangle = 4,
    Save = 5,
    Reset = 6,
    Exit = 7,
}

impl Menu for Action {
    const TITLE: &'static str = "=== Processing Menu ===";
    const ITEMS: &'static [&'static str] = &[
        "Show colour channel (R/G/B)",
        "Apply averaging filter",
        "Convert to grayscale",
        "Draw rectangle",
        "Save current image",
        "Reset changes",
        "Exit",
    ];
    const PROMPT: &'static str = "Choose an action (1-7): ";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_choice() {
        assert_eq!(parse_choice::<SourceChoice>("1"), Ok(SourceChoice::File));
        assert_eq!(parse_choice::<SourceChoice>(" 2 "), Ok(SourceChoice::Camera));
        assert_eq!(parse_choice::<SourceChoice>("+3"), Ok(SourceChoice::Exit));
        assert_eq!(
            parse_choice::<SourceChoice>("4"),
            Err(MenuError::OutOfRange(4))
        );
        assert_eq!(
            parse_choice::<SourceChoice>("0"),
            Err(MenuError::OutOfRange(0))
        );
        assert_eq!(
            parse_choice::<SourceChoice>("-1"),
            Err(MenuError::OutOfRange(-1))
        );
        assert_eq!(
            parse_choice::<SourceChoice>("one"),
            Err(MenuError::NotANumber)
        );
        assert_eq!(parse_choice::<SourceChoice>(""), Err(MenuError::NotANumber));
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_choice::<Action>("1"), Ok(Action::ShowChannel));
        assert_eq!(parse_choice::<Action>("7"), Ok(Action::Exit));
        assert_eq!(parse_choice::<Action>("9"), Err(MenuError::OutOfRange(9)));
        assert_eq!(
            parse_choice::<Action>("99999999999"),
            Err(MenuError::OutOfRange(99999999999))
        );
        assert_eq!(parse_choice::<Action>("2.5"), Err(MenuError::NotANumber));
    }

    #[test]
    fn test_menu_lines() {
        let lines = Action::lines();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "\n=== Processing Menu ===");
        assert_eq!(lines[1], "1. Show colour channel (R/G/B)");
        assert_eq!(lines[7], "7. Exit");

        assert_eq!(SourceChoice::lines().len(), 4);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MenuError::NotANumber.message::<Action>(),
            "Error: enter a number from 1 to 7!"
        );
        assert_eq!(
            MenuError::NotANumber.message::<SourceChoice>(),
            "Error: enter a number from 1 to 3!"
        );
        assert_eq!(
            MenuError::OutOfRange(9).message::<Action>(),
            "Invalid choice! Try again."
        );
    }
}
