use ratatui::style::Color;

/// The visual themes, cycled in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Midnight,
    Light,
    Night,
}

/// Concrete colors a theme resolves to. The renderer only ever looks
/// colors up here; nothing else knows which theme is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Board background
    pub board: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub text: Color,
    pub muted: Color,
    /// Titles and highlighted keys
    pub accent: Color,
}

impl Theme {
    /// The next theme in the cycle, wrapping around
    pub fn cycle(self) -> Theme {
        match self {
            Theme::Midnight => Theme::Light,
            Theme::Light => Theme::Night,
            Theme::Night => Theme::Midnight,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Midnight => "Midnight",
            Theme::Light => "Light",
            Theme::Night => "Night",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Midnight => Palette {
                board: Color::Rgb(13, 17, 23),
                snake_head: Color::Rgb(126, 231, 135),
                snake_body: Color::Rgb(63, 185, 80),
                food: Color::Rgb(248, 81, 73),
                text: Color::Rgb(230, 237, 243),
                muted: Color::Rgb(110, 118, 129),
                accent: Color::Rgb(88, 166, 255),
            },
            Theme::Light => Palette {
                board: Color::Rgb(246, 248, 250),
                snake_head: Color::Rgb(17, 99, 41),
                snake_body: Color::Rgb(26, 127, 55),
                food: Color::Rgb(207, 34, 46),
                text: Color::Rgb(31, 35, 40),
                muted: Color::Rgb(87, 96, 106),
                accent: Color::Rgb(9, 105, 218),
            },
            Theme::Night => Palette {
                board: Color::Rgb(2, 6, 23),
                snake_head: Color::Rgb(165, 243, 252),
                snake_body: Color::Rgb(34, 211, 238),
                food: Color::Rgb(251, 146, 60),
                text: Color::Rgb(226, 232, 240),
                muted: Color::Rgb(100, 116, 139),
                accent: Color::Rgb(167, 139, 250),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_through_all_themes() {
        let start = Theme::default();
        assert_eq!(start, Theme::Midnight);

        let second = start.cycle();
        let third = second.cycle();

        assert_eq!(second, Theme::Light);
        assert_eq!(third, Theme::Night);
        assert_eq!(third.cycle(), start);
    }

    #[test]
    fn test_palettes_are_distinct() {
        assert_ne!(
            Theme::Midnight.palette().board,
            Theme::Light.palette().board
        );
        assert_ne!(Theme::Light.palette().board, Theme::Night.palette().board);
    }
}
