//! Text rendering of positions and lines of play

use pref_solver::{AnalysisResult, Position, Seat, SolverError};

const HAND_WIDTH: usize = 30;

/// Seat name (starred when it is that seat's turn) followed by one line per suit
fn hand_lines(position: &Position, seat: Seat) -> Vec<String> {
    let mut lines = Vec::new();
    if seat == position.turn() {
        lines.push(format!("*{}*", seat));
    } else {
        lines.push(seat.to_string());
    }
    lines.extend(position[seat].to_string().lines().map(str::to_string));
    lines
}

/// West and East side by side, South underneath
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();
    let west = hand_lines(position, Seat::West);
    let east = hand_lines(position, Seat::East);
    for (left, right) in west.iter().zip(east.iter()) {
        out.push_str(&format!("{:<width$} {}\n", left, right, width = HAND_WIDTH));
    }
    for row in hand_lines(position, Seat::South) {
        out.push_str(&format!("{} {}\n", " ".repeat(HAND_WIDTH / 2), row));
    }
    out
}

/// Trick count, then every position along the line with the trick played from it
pub fn render_result(start: &Position, result: &AnalysisResult) -> Result<String, SolverError> {
    let mut out = format!("Tricks: {}\n\n", result.num_tricks);
    let mut position = *start;
    for trick in &result.gameplay {
        out.push_str(&render_position(&position));
        out.push_str(&format!("{}\n\n", trick));
        position = position.play(trick)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pref_solver::{Analyzer, Card, Hand};

    fn hand(cards: &[&str]) -> Hand {
        Hand::from_cards(cards.iter().map(|c| c.parse::<Card>().unwrap()))
    }

    fn sample() -> Position {
        Position::new(
            [hand(&["♠9", "♠10"]), hand(&["♠7", "♠8"]), hand(&["♠K", "♠A"])],
            Seat::South,
        )
    }

    #[test]
    fn test_render_position() {
        let text = render_position(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], format!("{:<30} East", "West"));
        assert_eq!(lines[1], format!("{:<30} ♠: 9 10", "♠: 7 8"));
        assert_eq!(lines[5], format!("{}*South*", " ".repeat(16)));
        assert_eq!(lines[6], format!("{}♠: K A", " ".repeat(16)));
    }

    #[test]
    fn test_render_result() {
        let position = sample();
        let result = Analyzer::new(None, false).analyze(&position).unwrap();
        let text = render_result(&position, &result).unwrap();
        assert!(text.starts_with("Tricks: 2\n\n"));
        assert!(text.contains("K♠ 9♠ 7♠ -> South\n"));
        assert!(text.contains("A♠ 10♠ 8♠ -> South\n"));
    }
}
