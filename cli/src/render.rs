use std::fmt::{self, Write as _};

use sweeper_core::{CellView, Difficulty, GameStatus, SessionView};

/// Clamps a counter into three digits, the classic LCD style.
fn format_for_counter(num: i64) -> String {
    match num {
        ..-99 => "-99".to_string(),
        -99..0 => format!("-{:02}", -num),
        0..1000 => format!("{:03}", num),
        1000.. => "999".to_string(),
    }
}

fn cell_glyph(cell: CellView) -> char {
    match cell {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => char::from(b'0' + count),
        CellView::Mine => '*',
        CellView::GhostMine => 'x',
    }
}

fn difficulty_name(difficulty: Difficulty) -> String {
    match difficulty {
        Difficulty::Beginner => "Beginner".to_string(),
        Difficulty::Intermediate => "Intermediate".to_string(),
        Difficulty::Expert => "Expert".to_string(),
        Difficulty::Custom(config) => {
            format!("Custom {}x{}/{}", config.rows, config.cols, config.mines)
        }
    }
}

fn status_face(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => ":)",
        GameStatus::Playing => ":)",
        GameStatus::Won => "B)",
        GameStatus::Lost => "X(",
    }
}

/// Draws the header line and the grid with row and column indices.
pub(crate) fn render_text(view: &SessionView) -> Result<String, fmt::Error> {
    let mut out = String::new();

    let mines = match view.mines_left {
        Some(left) => format_for_counter(left as i64),
        None => "???".to_string(),
    };
    writeln!(
        out,
        "[{}] {} [{}]  {}",
        mines,
        status_face(view.status),
        format_for_counter(view.elapsed_secs.into()),
        difficulty_name(view.difficulty),
    )?;
    if let Some(replay) = view.replay {
        writeln!(
            out,
            "replay step {}/{}{}{}",
            replay.cursor,
            replay.steps.saturating_sub(1),
            if replay.playing { " playing" } else { "" },
            if replay.god_mode { " god" } else { "" },
        )?;
    } else if view.cheat_mode {
        writeln!(out, "cheat mode")?;
    }

    let cols = view.cells.first().map_or(0, Vec::len);
    out.push_str("    ");
    for col in 0..cols {
        write!(out, "{:>3}", col)?;
    }
    out.push('\n');
    for (row, cells) in view.cells.iter().enumerate() {
        write!(out, "{:>3} ", row)?;
        for &cell in cells {
            write!(out, "{:>3}", cell_glyph(cell))?;
        }
        out.push('\n');
    }

    if view.game_over {
        let message = match view.status {
            GameStatus::Won => format!("You won in {} seconds!", view.elapsed_secs),
            _ => "Game over. Try `review`, `retry` or `n`.".to_string(),
        };
        writeln!(out, "{}", message)?;
    }
    Ok(out)
}

pub(crate) fn render_json(view: &SessionView) -> anyhow::Result<String> {
    Ok(serde_json::to_string(view)?)
}
