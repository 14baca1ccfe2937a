//! Neon-on-slate theme tokens for the Co-Pilot dashboard
//!
//! # Color Palette
//! - **Background**: Deep slate (base layer)
//! - **Accent**: Cyan (focus, highlights, confidence figures)
//! - **Positive**: Green (upward trend, BUY, gains)
//! - **Negative**: Red (downward trend, SELL, losses, failures)
//! - **Warning**: Amber (HOLD, RSI, alerts)
//! - **Neutral**: Purple (indicator card, secondary info)
//! - **Muted**: Gray-blue (labels, disabled)

use ratatui::style::{Color, Modifier, Style};

use copilot_core::{Action, Direction, IndicatorSignal, SentimentScore};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(15, 23, 42),
            accent: Color::Rgb(34, 211, 238),
            positive: Color::Rgb(74, 222, 128),
            negative: Color::Rgb(248, 113, 113),
            warning: Color::Rgb(250, 204, 21),
            neutral: Color::Rgb(192, 132, 252),
            muted: Color::Rgb(148, 163, 184),
            text_primary: Color::White,
            text_secondary: Color::Rgb(203, 213, 225),
        }
    }

    /// Gains green, losses red; zero counts as a loss, as on the cards.
    pub fn pnl_color(&self, value: f64) -> Color {
        if value > 0.0 {
            self.positive
        } else {
            self.negative
        }
    }

    pub fn direction_color(&self, direction: Direction) -> Color {
        match direction {
            Direction::Up => self.positive,
            Direction::Down => self.negative,
        }
    }

    pub fn action_color(&self, action: Action) -> Color {
        match action {
            Action::Buy => self.positive,
            Action::Sell => self.negative,
            Action::Hold => self.warning,
        }
    }

    pub fn signal_color(&self, signal: IndicatorSignal) -> Color {
        match signal {
            IndicatorSignal::Overbought => self.negative,
            IndicatorSignal::Oversold => self.positive,
            IndicatorSignal::Neutral => self.muted,
        }
    }

    pub fn sentiment_color(&self, score: SentimentScore) -> Color {
        match score {
            SentimentScore::Positive => self.positive,
            SentimentScore::Negative => self.negative,
            SentimentScore::Neutral => self.warning,
        }
    }
}

// Style shorthands used by the render code.

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(Theme::default().positive)
}

pub fn negative() -> Style {
    Style::default().fg(Theme::default().negative)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn neutral() -> Style {
    Style::default().fg(Theme::default().neutral)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn text() -> Style {
    Style::default().fg(Theme::default().text_primary)
}

pub fn bold() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(15, 23, 42));
        assert_eq!(theme.accent, Color::Rgb(34, 211, 238));
    }

    #[test]
    fn test_pnl_color() {
        let theme = Theme::default();
        assert_eq!(theme.pnl_color(4.2), theme.positive);
        assert_eq!(theme.pnl_color(-0.5), theme.negative);
        assert_eq!(theme.pnl_color(0.0), theme.negative);
    }

    #[test]
    fn test_action_color() {
        let theme = Theme::default();
        assert_eq!(theme.action_color(Action::Buy), theme.positive);
        assert_eq!(theme.action_color(Action::Sell), theme.negative);
        assert_eq!(theme.action_color(Action::Hold), theme.warning);
    }

    #[test]
    fn test_signal_and_sentiment_colors() {
        let theme = Theme::default();
        assert_eq!(theme.signal_color(IndicatorSignal::Overbought), theme.negative);
        assert_eq!(theme.signal_color(IndicatorSignal::Oversold), theme.positive);
        assert_eq!(theme.signal_color(IndicatorSignal::Neutral), theme.muted);
        assert_eq!(theme.sentiment_color(SentimentScore::Neutral), theme.warning);
    }

    #[test]
    fn test_panel_styles() {
        assert_eq!(panel_border(true), accent());
        assert_eq!(panel_border(false), muted());
    }
}
