//! Pure rendering checks: the view is I/O-free, so we can assert on the
//! framebuffer directly.

use blockfall::core::GameSession;
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{InputEvent, PieceKind, Rgb};

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
        .collect()
}

#[test]
fn locked_cells_use_the_value_color_lookup() {
    let mut session = GameSession::with_first_pieces(1, PieceKind::O, PieceKind::T);
    session.board_mut().set(0, 19, 5); // Z-red cell

    let view = GameView::default();
    let fb = view.render(&session.snapshot(), Viewport::new(80, 30));

    // With an 80x30 viewport the board frame starts at (22, 4); board cell
    // (0, 19) lands at terminal (23, 24) with cell width 2.
    let cell = fb.get(23, 24).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, Rgb::new(255, 0, 0));
    assert_eq!(fb.get(24, 24).unwrap().ch, '█');
}

#[test]
fn current_piece_is_drawn_with_its_own_color() {
    let session = GameSession::with_first_pieces(1, PieceKind::O, PieceKind::T);
    let view = GameView::default();
    let fb = view.render(&session.snapshot(), Viewport::new(80, 30));

    // O spawns at board (4, 0): terminal (31, 5).
    let cell = fb.get(31, 5).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, Rgb::new(255, 255, 0));
}

#[test]
fn side_panel_shows_labels_and_next_preview() {
    let session = GameSession::with_first_pieces(1, PieceKind::O, PieceKind::T);
    let view = GameView::default();
    let fb = view.render(&session.snapshot(), Viewport::new(80, 30));

    assert!(row_text(&fb, 4).contains("SCORE"));
    assert!(row_text(&fb, 7).contains("HIGH"));
    assert!(row_text(&fb, 10).contains("LEVEL"));
    assert!(row_text(&fb, 13).contains("NEXT"));

    // The T preview paints the matrix in purple below the NEXT label.
    let preview = fb.get(48, 14).unwrap();
    assert_eq!(preview.ch, '█');
    assert_eq!(preview.style.fg, Rgb::new(128, 0, 128));
}

#[test]
fn game_over_overlay_includes_the_restart_hint() {
    let mut session = GameSession::with_first_pieces(1, PieceKind::O, PieceKind::T);
    session.handle_event(InputEvent::Quit);

    let view = GameView::default();
    let fb = view.render(&session.snapshot(), Viewport::new(80, 30));

    assert!(row_text(&fb, 15).contains("GAME OVER"));
    assert!(row_text(&fb, 17).contains("R: RESTART"));
}

#[test]
fn tiny_viewports_render_without_panicking() {
    let session = GameSession::new(1);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    for (w, h) in [(0, 0), (1, 1), (10, 5), (24, 24)] {
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
    }
}
